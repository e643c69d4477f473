use std::io::Write;

use bevy::reflect::Reflect;
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;

/// One cell of a 2D tile grid.
///
/// A tile is a plain value: grids, messages and save records hold it by copy.
/// Equality and hashing cover all four fields and nothing else.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub struct Tile {
    type_id: i32,
    flags: u8,
    variant: u8,
    rotation_mirroring: u8,
}

impl Tile {
    /// The empty (space) tile. Same as `Tile::default()`.
    pub const EMPTY: Tile = Self::new(0, 0, 0, 0);

    pub const fn new(type_id: i32, flags: u8, variant: u8, rotation_mirroring: u8) -> Self {
        Self {
            type_id,
            flags,
            variant,
            rotation_mirroring,
        }
    }

    /// A tile of the given type with no flags, the first variant and no rotation.
    pub const fn of_type(type_id: i32) -> Self {
        Self::new(type_id, 0, 0, 0)
    }

    /// Tile kind. `0` means empty.
    pub const fn type_id(&self) -> i32 {
        self.type_id
    }

    /// Caller-defined attribute bits.
    pub const fn flags(&self) -> u8 {
        self.flags
    }

    /// Which visual variant of the tile kind to draw.
    pub const fn variant(&self) -> u8 {
        self.variant
    }

    /// 0-3 are plain rotations, 4-7 the mirrored versions of the same rotations.
    pub const fn rotation_mirroring(&self) -> u8 {
        self.rotation_mirroring
    }

    pub const fn is_empty(&self) -> bool {
        self.type_id == 0
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_code(self.rotation_mirroring)
    }

    /// Same type and flags with another variant. Rotation/mirroring is reset to 0.
    pub const fn with_variant(&self, variant: u8) -> Self {
        Self::new(self.type_id, self.flags, variant, 0)
    }

    /// Same type and variant with other flags. Rotation/mirroring is reset to 0.
    pub const fn with_flag(&self, flags: u8) -> Self {
        Self::new(self.type_id, flags, self.variant, 0)
    }

    /// Same type, flags and variant with another rotation/mirroring code.
    pub const fn with_rotation_mirroring(&self, rotation_mirroring: u8) -> Self {
        Self::new(self.type_id, self.flags, self.variant, rotation_mirroring)
    }

    /// Write `Tile {type_id}, {flags}, {variant}` into `buf`.
    ///
    /// Unlike `Display` this leaves out the rotation/mirroring byte. Returns the
    /// number of bytes written, or `None` if `buf` is too small.
    pub fn format_bounded(&self, buf: &mut [u8]) -> Option<usize> {
        let capacity = buf.len();
        let mut cursor = buf;
        write!(cursor, "Tile {}, {}, {}", self.type_id, self.flags, self.variant).ok()?;
        Some(capacity - cursor.len())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tile {}, {}, {}, {}",
            self.type_id, self.flags, self.variant, self.rotation_mirroring
        )
    }
}
