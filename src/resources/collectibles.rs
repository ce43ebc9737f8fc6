//! Collectible coins.
//!
//! [`CollectibleManager`] owns every coin in the scene. Coins are never
//! removed: a picked-up coin is switched off (inactive and invisible) and
//! stays in the list for the rest of the session. Scoring is left to whoever
//! reacts to the indices returned by [`CollectibleManager::check_collision`].

use bevy_ecs::prelude::Resource;
use log::info;

use crate::components::sprite::{DrawTarget, GameSprite};
use crate::components::spritesheet::SourceRect;

#[derive(Resource, Debug, Default)]
pub struct CollectibleManager {
    coins: Vec<GameSprite>,
}

impl CollectibleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, coin: GameSprite) {
        self.coins.push(coin);
    }

    /// Place `count` copies of `template` at random spots inside `area`,
    /// keeping each coin fully inside it.
    pub fn spawn_coins(
        &mut self,
        template: &GameSprite,
        count: u32,
        area: SourceRect,
        rng: &mut fastrand::Rng,
    ) {
        let max_x = (area.width - template.body.width()).max(0.0);
        let max_y = (area.height - template.body.height()).max(0.0);
        for _ in 0..count {
            let mut coin = template.clone();
            coin.body.position.x = area.x + rng.f32() * max_x;
            coin.body.position.y = area.y + rng.f32() * max_y;
            self.coins.push(coin);
        }
        info!("Spawned {} coins", count);
    }

    /// Animate and move every coin still in play.
    pub fn update(&mut self, dt: f32) {
        for coin in self.coins.iter_mut() {
            coin.update(dt);
        }
    }

    /// Pick up every active coin overlapping `player`. Returns the indices
    /// of the coins collected by this call.
    pub fn check_collision(&mut self, player: &GameSprite) -> Vec<usize> {
        let mut collected = Vec::new();
        for (index, coin) in self.coins.iter_mut().enumerate() {
            if coin.has_collided(player) {
                coin.body.is_active = false;
                coin.body.is_visible = false;
                collected.push(index);
            }
        }
        collected
    }

    /// Draw the coins still in play.
    pub fn draw(&self, target: &mut impl DrawTarget) {
        for coin in self.coins.iter().filter(|c| c.body.is_active) {
            coin.draw(target);
        }
    }

    /// Coins not yet collected.
    pub fn remaining(&self) -> usize {
        self.coins.iter().filter(|c| c.body.is_active).count()
    }

    pub fn collectibles(&self) -> &[GameSprite] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}
