//! Events and observers.
//!
//! Submodules:
//! - [`coin`] – a coin was picked up by the player
//! - [`collision`] – two sprites overlap
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod coin;
pub mod collision;
pub mod switchdebug;
