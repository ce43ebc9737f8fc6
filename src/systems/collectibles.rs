//! Coin systems.
//!
//! - [`update_collectibles`] animates the coins owned by the
//!   [`CollectibleManager`].
//! - [`collect_coins`] checks every player sprite against the coins and
//!   triggers one [`CoinCollectedEvent`] per pickup.
//! - [`coin_collected_observer`] turns pickups into score.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::group::{Group, PLAYER};
use crate::components::sprite::GameSprite;
use crate::events::coin::CoinCollectedEvent;
use crate::resources::collectibles::CollectibleManager;
use crate::resources::score::{COIN_VALUE, Score};
use crate::resources::worldtime::WorldTime;

pub fn update_collectibles(mut coins: ResMut<CollectibleManager>, time: Res<WorldTime>) {
    coins.update(time.delta);
}

pub fn collect_coins(
    players: Query<(&GameSprite, &Group)>,
    mut coins: ResMut<CollectibleManager>,
    mut commands: Commands,
) {
    for (player, _) in players.iter().filter(|(_, group)| group.is(PLAYER)) {
        for index in coins.check_collision(player) {
            let position = coins.collectibles()[index].body.position;
            commands.trigger(CoinCollectedEvent { index, position });
        }
    }
}

pub fn coin_collected_observer(
    trigger: On<CoinCollectedEvent>,
    mut score: ResMut<Score>,
    coins: Res<CollectibleManager>,
) {
    score.score += COIN_VALUE;
    info!(
        "Coin {} collected at ({:.0}, {:.0}); score {}, {} left",
        trigger.event().index,
        trigger.event().position.x,
        trigger.event().position.y,
        score.score,
        coins.remaining()
    );
}
