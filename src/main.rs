use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use gm_core::{direction_to_code, Direction};
use gm_tilemap::{Orientation, Tile};

/// Raw tile records decoded at startup: empty space, a mirrored wall and a
/// rubble floor with flags set.
const SAMPLE_RECORDS: [[u8; Tile::RECORD_SIZE]; 3] = [
    [0, 0, 0, 0, 0, 0, 0],
    [12, 0, 0, 0, 0, 1, 7],
    [3, 1, 0, 0, 0b101, 2, 1],
];

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_once()),
            LogPlugin::default(),
        ))
        // Plugins
        .add_plugins((gm_core::GmCorePlugin, gm_tilemap::GmTilemapPlugin))
        .add_systems(Startup, (report_records, report_direction_codes))
        .run();
}

/// Decode the sample records and log both text forms of each tile.
fn report_records() {
    let mut buf = [0u8; 64];
    for record in SAMPLE_RECORDS {
        let tile = match Tile::read_record(&record) {
            Ok(tile) => tile,
            Err(e) => {
                warn!("Skipping record {:?}: {}", record, e);
                continue;
            }
        };

        let short = tile
            .format_bounded(&mut buf)
            .and_then(|len| std::str::from_utf8(&buf[..len]).ok())
            .unwrap_or("<buffer too small>");
        let orientation = tile.orientation();
        info!(
            "{} | {} | empty: {}, facing {}, mirrored: {}",
            tile,
            short,
            tile.is_empty(),
            orientation.facing().name(),
            orientation.is_mirrored()
        );
    }
}

/// Log the strict rotation code of every direction.
fn report_direction_codes() {
    for direction in Direction::ALL {
        match direction_to_code(direction, true) {
            Ok(code) => {
                let mirrored = Orientation::from_direction(direction, true);
                info!(
                    "{}: code {}, mirrored code {}",
                    direction.name(),
                    code,
                    mirrored.code()
                );
            }
            Err(e) => warn!("{}", e),
        }
    }
}
