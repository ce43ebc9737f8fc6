//! Coin pickup event.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// Fired once per coin picked up by the player.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinCollectedEvent {
    /// Index of the coin in the [`CollectibleManager`](crate::resources::collectibles::CollectibleManager).
    pub index: usize,
    pub position: Vector2,
}
