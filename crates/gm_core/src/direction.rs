use bevy::log::debug;
use bevy::reflect::Reflect;
use serde::{Deserialize, Serialize};

use crate::error::TileError;

/// Compass direction on the tile grid.
///
/// Discriminants follow a clockwise walk starting at south. `Invalid` stands
/// in for any raw value outside that range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
#[repr(i8)]
pub enum Direction {
    Invalid = -1,
    #[default]
    South = 0,
    SouthEast = 1,
    East = 2,
    NorthEast = 3,
    North = 4,
    NorthWest = 5,
    West = 6,
    SouthWest = 7,
}

impl Direction {
    /// The eight valid directions, in discriminant order.
    pub const ALL: [Direction; 8] = [
        Self::South,
        Self::SouthEast,
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
    ];

    /// Map a raw value to a direction. Out-of-range values become `Invalid`.
    pub const fn from_raw(raw: i8) -> Self {
        match raw {
            0 => Self::South,
            1 => Self::SouthEast,
            2 => Self::East,
            3 => Self::NorthEast,
            4 => Self::North,
            5 => Self::NorthWest,
            6 => Self::West,
            7 => Self::SouthWest,
            _ => Self::Invalid,
        }
    }

    pub const fn as_raw(&self) -> i8 {
        *self as i8
    }

    pub const fn is_cardinal(&self) -> bool {
        matches!(self, Self::South | Self::East | Self::North | Self::West)
    }

    pub const fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Self::SouthEast | Self::NorthEast | Self::NorthWest | Self::SouthWest
        )
    }

    /// Display name for UI and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::South => "South",
            Self::SouthEast => "South-East",
            Self::East => "East",
            Self::NorthEast => "North-East",
            Self::North => "North",
            Self::NorthWest => "North-West",
            Self::West => "West",
            Self::SouthWest => "South-West",
        }
    }
}

/// Rotation code of a cardinal direction, `None` for anything else.
pub const fn cardinal_code(direction: Direction) -> Option<u8> {
    match direction {
        Direction::South => Some(0),
        Direction::East => Some(1),
        Direction::North => Some(2),
        Direction::West => Some(3),
        _ => None,
    }
}

/// Convert a direction to a tile rotation code.
///
/// South, East, North and West map to 0, 1, 2 and 3. Anything else is an
/// error when `throw_if_diagonal` is set, and otherwise silently aliases to
/// the South code 0.
pub fn direction_to_code(direction: Direction, throw_if_diagonal: bool) -> Result<u8, TileError> {
    match cardinal_code(direction) {
        Some(code) => Ok(code),
        None if throw_if_diagonal => Err(TileError::InvalidArgument { direction }),
        None => {
            debug!("{} has no rotation code, falling back to South", direction.name());
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_codes() {
        assert_eq!(direction_to_code(Direction::South, false).unwrap(), 0);
        assert_eq!(direction_to_code(Direction::East, false).unwrap(), 1);
        assert_eq!(direction_to_code(Direction::North, false).unwrap(), 2);
        assert_eq!(direction_to_code(Direction::West, false).unwrap(), 3);
    }

    #[test]
    fn cardinal_codes_never_fail() {
        for dir in Direction::ALL.iter().filter(|d| d.is_cardinal()) {
            assert!(direction_to_code(*dir, true).is_ok());
        }
    }

    #[test]
    fn diagonal_falls_back_to_south() {
        assert_eq!(direction_to_code(Direction::SouthEast, false).unwrap(), 0);
        assert_eq!(direction_to_code(Direction::NorthWest, false).unwrap(), 0);
        assert_eq!(direction_to_code(Direction::Invalid, false).unwrap(), 0);
    }

    #[test]
    fn diagonal_fails_when_asked() {
        let err = direction_to_code(Direction::SouthEast, true).unwrap_err();
        assert_eq!(
            err,
            TileError::InvalidArgument {
                direction: Direction::SouthEast
            }
        );
        assert!(direction_to_code(Direction::Invalid, true).is_err());
    }

    #[test]
    fn cardinal_code_only_covers_cardinals() {
        for dir in Direction::ALL {
            assert_eq!(cardinal_code(dir).is_some(), dir.is_cardinal());
        }
        assert_eq!(cardinal_code(Direction::West), Some(3));
        assert_eq!(cardinal_code(Direction::Invalid), None);
    }

    #[test]
    fn raw_values_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_raw(dir.as_raw()), dir);
        }
        assert_eq!(Direction::from_raw(8), Direction::Invalid);
        assert_eq!(Direction::from_raw(-5), Direction::Invalid);
    }

    #[test]
    fn cardinal_and_diagonal_partition_valid_directions() {
        for dir in Direction::ALL {
            assert_ne!(dir.is_cardinal(), dir.is_diagonal());
        }
        assert!(!Direction::Invalid.is_cardinal());
        assert!(!Direction::Invalid.is_diagonal());
    }
}
