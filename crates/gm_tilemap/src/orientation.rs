use bitflags::bitflags;
use gm_core::{cardinal_code, Direction};

bitflags! {
    /// Typed view of a tile's rotation/mirroring byte.
    ///
    /// The low two bits are the rotation (0-3, clockwise from south), the
    /// third bit marks the mirrored variants 4-7.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Orientation: u8 {
        const ROTATION = 0b0000_0011;
        const MIRRORED = 0b0000_0100;
    }
}

impl Orientation {
    /// View a raw code. Bits outside the known ones are kept as-is.
    pub const fn from_code(code: u8) -> Self {
        Self::from_bits_retain(code)
    }

    pub fn new(rotation: u8, mirrored: bool) -> Self {
        let mut orientation = Self::from_bits_retain(rotation & Self::ROTATION.bits());
        orientation.set(Self::MIRRORED, mirrored);
        orientation
    }

    /// Orientation facing `direction`. Diagonal and invalid directions face south.
    pub fn from_direction(direction: Direction, mirrored: bool) -> Self {
        let rotation = cardinal_code(direction).unwrap_or(0);
        Self::new(rotation, mirrored)
    }

    pub const fn code(&self) -> u8 {
        self.bits()
    }

    pub const fn rotation(&self) -> u8 {
        self.bits() & Self::ROTATION.bits()
    }

    pub fn is_mirrored(&self) -> bool {
        self.contains(Self::MIRRORED)
    }

    /// The cardinal direction the rotation points at.
    pub const fn facing(&self) -> Direction {
        match self.rotation() {
            0 => Direction::South,
            1 => Direction::East,
            2 => Direction::North,
            _ => Direction::West,
        }
    }
}
