use bevy::prelude::*;

pub mod orientation;
pub mod record;
pub mod tile;

pub use orientation::Orientation;
pub use tile::Tile;

/// Tilemap plugin for Gridmere.
/// Registers the tile value type with the app's reflection registry.
pub struct GmTilemapPlugin;

impl Plugin for GmTilemapPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Tile>();
    }
}
