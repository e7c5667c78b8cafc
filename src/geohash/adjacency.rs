//! Neighbor navigation between cells of equal precision.
//!
//! The pattern is split into its latitude and longitude halves, one half is
//! stepped by one, and the halves are interleaved again. Longitude wraps
//! around the antimeridian. Latitude is clamped at the poles: the northern
//! neighbor of a cell in the top row is the cell itself, and likewise for the
//! southern neighbor of the bottom row.

use super::{FIRST_BIT, GeoHash};
use serde::{Deserialize, Serialize};

/// Compass direction of a neighboring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Unit steps along (latitude, longitude).
    fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }
}

/// Right-aligned latitude and longitude indices of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellIndex {
    pub lat: u64,
    pub lon: u64,
    pub lat_bits: u8,
    pub lon_bits: u8,
}

#[inline]
fn low_mask(bits: u8) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    }
}

impl CellIndex {
    /// Split a hash into its latitude and longitude indices.
    pub(crate) fn of(hash: &GeoHash) -> Self {
        let mut index = CellIndex {
            lat: 0,
            lon: 0,
            lat_bits: 0,
            lon_bits: 0,
        };
        let bits = hash.long_value();

        for i in 0..hash.significant_bits() {
            let bit = u64::from(bits & (FIRST_BIT >> i) != 0);
            if i % 2 == 0 {
                index.lon = (index.lon << 1) | bit;
                index.lon_bits += 1;
            } else {
                index.lat = (index.lat << 1) | bit;
                index.lat_bits += 1;
            }
        }

        index
    }

    /// Interleave the indices back into a hash.
    pub(crate) fn to_hash(self) -> GeoHash {
        let significant_bits = self.lat_bits + self.lon_bits;
        let mut bits = 0_u64;
        let (mut lat_left, mut lon_left) = (self.lat_bits, self.lon_bits);

        for i in 0..significant_bits {
            let bit = if i % 2 == 0 {
                lon_left -= 1;
                (self.lon >> lon_left) & 1
            } else {
                lat_left -= 1;
                (self.lat >> lat_left) & 1
            };
            if bit == 1 {
                bits |= FIRST_BIT >> i;
            }
        }

        GeoHash {
            bits,
            significant_bits,
        }
    }

    pub(crate) fn max_lat(&self) -> u64 {
        low_mask(self.lat_bits)
    }

    pub(crate) fn max_lon(&self) -> u64 {
        low_mask(self.lon_bits)
    }

    fn step(mut self, lat_step: i8, lon_step: i8) -> Self {
        match lat_step {
            1 if self.lat < self.max_lat() => self.lat += 1,
            -1 if self.lat > 0 => self.lat -= 1,
            0 => {}
            _ => log::trace!(
                "latitude index {} clamped at pole ({} bits)",
                self.lat,
                self.lat_bits
            ),
        }

        let mask = self.max_lon();
        self.lon = match lon_step {
            1 => self.lon.wrapping_add(1) & mask,
            -1 => self.lon.wrapping_sub(1) & mask,
            _ => self.lon,
        };

        self
    }
}

impl GeoHash {
    /// The adjacent cell in `direction`, at the same precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use spatio_geohash::{Direction, GeoHash};
    ///
    /// let hash = GeoHash::from_base32("u4pruy")?;
    /// let north = hash.neighbor(Direction::North);
    /// assert_eq!(north.significant_bits(), hash.significant_bits());
    /// assert_eq!(north.neighbor(Direction::South), hash);
    /// # Ok::<(), spatio_geohash::GeoHashError>(())
    /// ```
    pub fn neighbor(&self, direction: Direction) -> GeoHash {
        let (lat_step, lon_step) = direction.offsets();
        CellIndex::of(self).step(lat_step, lon_step).to_hash()
    }

    /// All eight neighbors, clockwise from north (see [`Direction::ALL`]).
    ///
    /// At the poles some entries repeat or equal `self`, since latitude does
    /// not wrap.
    pub fn adjacent(&self) -> [GeoHash; 8] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    pub fn northern_neighbor(&self) -> GeoHash {
        self.neighbor(Direction::North)
    }

    pub fn southern_neighbor(&self) -> GeoHash {
        self.neighbor(Direction::South)
    }

    pub fn eastern_neighbor(&self) -> GeoHash {
        self.neighbor(Direction::East)
    }

    pub fn western_neighbor(&self) -> GeoHash {
        self.neighbor(Direction::West)
    }
}

/// Free-function form of [`GeoHash::neighbor`].
pub fn neighbor(hash: &GeoHash, direction: Direction) -> GeoHash {
    hash.neighbor(direction)
}
