//! ECS components and the sprite model.
//!
//! Submodules overview:
//! - [`animation`] – frame clock, animation sequences and direction-keyed sets
//! - [`group`] – tag naming a sprite's role for collision rules
//! - [`playercontrol`] – input-driven steering schemes
//! - [`sprite`] – the sprite record: shared body plus tagged capabilities
//! - [`spritesheet`] – sheet, strip and rectangle geometry
//! - [`zindex`] – draw order hint

pub mod animation;
pub mod group;
pub mod playercontrol;
pub mod sprite;
pub mod spritesheet;
pub mod zindex;
