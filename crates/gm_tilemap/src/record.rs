use gm_core::TileError;

use crate::tile::Tile;

/// Fixed-size binary layout of a single tile:
/// `type_id` as little-endian `i32`, then flags, variant and rotation/mirroring.
impl Tile {
    pub const RECORD_SIZE: usize = 7;

    pub fn to_record(&self) -> [u8; Self::RECORD_SIZE] {
        let [a, b, c, d] = self.type_id().to_le_bytes();
        [
            a,
            b,
            c,
            d,
            self.flags(),
            self.variant(),
            self.rotation_mirroring(),
        ]
    }

    pub fn from_record(record: [u8; Self::RECORD_SIZE]) -> Self {
        let type_id = i32::from_le_bytes([record[0], record[1], record[2], record[3]]);
        Self::new(type_id, record[4], record[5], record[6])
    }

    /// Decode a record from a slice that must be exactly `RECORD_SIZE` bytes long.
    pub fn read_record(bytes: &[u8]) -> Result<Self, TileError> {
        let record: [u8; Self::RECORD_SIZE] =
            bytes.try_into().map_err(|_| TileError::RecordLength {
                expected: Self::RECORD_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self::from_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_layout_is_little_endian() {
        let record = Tile::new(0x0102_0304, 5, 6, 7).to_record();
        assert_eq!(record, [4, 3, 2, 1, 5, 6, 7]);
    }

    #[test]
    fn negative_type_survives_record() {
        let tile = Tile::new(-1, 0xFF, 0, 4);
        assert_eq!(Tile::from_record(tile.to_record()), tile);
    }

    #[test]
    fn empty_tile_is_all_zero() {
        assert_eq!(Tile::EMPTY.to_record(), [0; Tile::RECORD_SIZE]);
    }

    #[test]
    fn read_record_checks_length() {
        let err = Tile::read_record(&[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            TileError::RecordLength {
                expected: 7,
                actual: 3
            }
        );
        assert!(Tile::read_record(&[0; 8]).is_err());
    }

    #[test]
    fn read_record_decodes_exact_slice() {
        let bytes = [9, 0, 0, 0, 1, 2, 3];
        assert_eq!(Tile::read_record(&bytes).unwrap(), Tile::new(9, 1, 2, 3));
    }
}
