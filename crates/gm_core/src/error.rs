use crate::direction::Direction;

/// Error type for tile value operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileError {
    /// A direction with no rotation code was passed to a strict conversion.
    InvalidArgument { direction: Direction },
    /// A binary tile record had the wrong number of bytes.
    RecordLength { expected: usize, actual: usize },
}

impl std::fmt::Display for TileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { direction } => write!(
                f,
                "Invalid argument: direction {} ({}) has no rotation code",
                direction.name(),
                direction.as_raw()
            ),
            Self::RecordLength { expected, actual } => write!(
                f,
                "Tile record must be {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for TileError {}
