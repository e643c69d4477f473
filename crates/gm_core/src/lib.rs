use bevy::prelude::*;

pub mod direction;
pub mod error;

pub use direction::{cardinal_code, direction_to_code, Direction};
pub use error::TileError;

/// Core plugin providing foundational types for Gridmere.
pub struct GmCorePlugin;

impl Plugin for GmCorePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Direction>();
    }
}
