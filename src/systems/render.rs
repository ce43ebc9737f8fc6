//! Render system.
//!
//! Draws the background, every sprite entity in [`ZIndex`] order, the coins
//! and the HUD. Sprites decide for themselves whether they are drawn
//! (hidden sprites emit nothing, frozen ones stay on screen); this module
//! only provides the raylib side of [`DrawTarget`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::sprite::{DrawTarget, GameSprite};
use crate::components::spritesheet::SourceRect;
use crate::components::zindex::ZIndex;
use crate::resources::collectibles::CollectibleManager;
use crate::resources::debugmode::DebugMode;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// Texture key drawn behind everything when loaded.
pub const BACKGROUND_KEY: &str = "background";

const HUD_FONT_SIZE: i32 = 20;
const HUD_MARGIN: i32 = 4;
const GAME_TITLE: &str = "Coin Chase";

/// Sprite draw calls routed to a raylib draw handle.
pub struct RaylibCanvas<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a TextureStore,
}

impl DrawTarget for RaylibCanvas<'_, '_> {
    fn draw_region(
        &mut self,
        tex_key: &str,
        source: SourceRect,
        dest: SourceRect,
        origin: Vector2,
        rotation: f32,
    ) {
        if let Some(tex) = self.textures.get(tex_key) {
            self.d.draw_texture_pro(
                tex,
                Rectangle::from(source),
                Rectangle::from(dest),
                origin,
                rotation,
                Color::WHITE,
            );
        }
    }
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    sprites: Query<(&GameSprite, Option<&ZIndex>)>,
    coins: Res<CollectibleManager>,
    score: Res<Score>,
    screen: Res<ScreenSize>,
    debug: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::DARKGREEN);

    if let Some(background) = textures.get(BACKGROUND_KEY) {
        d.draw_texture(background, 0, 0, Color::WHITE);
    }

    let mut to_draw: Vec<(&GameSprite, ZIndex)> = sprites
        .iter()
        .map(|(sprite, z)| (sprite, z.copied().unwrap_or(ZIndex(0))))
        .collect();
    to_draw.sort_by_key(|(_, z)| *z);

    {
        let mut canvas = RaylibCanvas {
            d: &mut d,
            textures: &*textures,
        };
        for (sprite, _) in to_draw.iter() {
            sprite.draw(&mut canvas);
        }
        coins.draw(&mut canvas);
    }

    if debug.is_some() {
        let boxes = to_draw
            .iter()
            .map(|(sprite, _)| *sprite)
            .chain(coins.collectibles().iter())
            .filter(|sprite| sprite.body.is_active)
            .map(|sprite| sprite.body.bounding_box());
        for b in boxes {
            d.draw_rectangle_lines(
                b.x as i32,
                b.y as i32,
                b.width as i32,
                b.height as i32,
                Color::RED,
            );
        }
        let text = format!("DEBUG (F11) | FPS: {}", d.get_fps());
        d.draw_text(&text, HUD_MARGIN, screen.h - 24, 10, Color::BLACK);
    }

    draw_hud(&mut d, &score, &screen);
}

/// Rough pixel width of `text` in raylib's default font, which is about
/// half as wide as it is tall.
fn text_width(text: &str, font_size: i32) -> i32 {
    text.chars().count() as i32 * font_size / 2
}

fn draw_hud(d: &mut RaylibDrawHandle, score: &Score, screen: &ScreenSize) {
    let status = format!("Score = {}", score.score);
    d.draw_text(&status, HUD_MARGIN, HUD_MARGIN, HUD_FONT_SIZE, Color::WHITE);

    let title_x = screen.w / 2 - text_width(GAME_TITLE, HUD_FONT_SIZE) / 2;
    d.draw_text(GAME_TITLE, title_x, HUD_MARGIN, HUD_FONT_SIZE, Color::WHITE);

    let health = format!("Health = {}%", score.health);
    let health_x = screen.w - text_width(&health, HUD_FONT_SIZE) - HUD_MARGIN;
    d.draw_text(&health, health_x, HUD_MARGIN, HUD_FONT_SIZE, Color::WHITE);
}
