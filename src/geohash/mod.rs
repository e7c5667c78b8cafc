//! Geohash values: interleaved latitude/longitude bit strings.
//!
//! A geohash is built by repeatedly bisecting the longitude range
//! [-180, 180] and the latitude range [-90, 90], longitude first, emitting a
//! `1` whenever the point falls into the upper half. The bits are stored
//! left-aligned in a `u64` together with the number of significant bits, so
//! numeric order of the pattern matches lexicographic order of the base32
//! form and shorter hashes are prefixes of the longer hashes they contain.
//!
//! ```text
//! bit index   0    1    2    3    4    ...
//! axis        lon  lat  lon  lat  lon  ...
//! ```

pub mod adjacency;
pub mod base32;
pub mod size;

pub use adjacency::Direction;

use crate::compute::validation::{MAX_BITS, validate_bit_precision, validate_character_precision};
use crate::error::{GeoHashError, Result};
use crate::types::{BoundingBox, GeoPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mask selecting the most significant bit of the pattern.
pub(crate) const FIRST_BIT: u64 = 0x8000_0000_0000_0000;

/// A geohash cell: a left-aligned bit pattern plus its significant-bit count.
///
/// Bits past `significant_bits` are always zero, so the derived equality,
/// ordering and hashing compare exactly the meaningful prefix and the
/// precision. Two hashes with the same pattern but different precisions are
/// different cells.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{GeoHash, GeoPoint};
///
/// let point = GeoPoint::new(57.64911, 10.40744)?;
/// let hash = GeoHash::with_character_precision(&point, 11)?;
/// assert_eq!(hash.to_base32()?, "u4pruydqqvj");
/// assert!(hash.bounding_box().contains(&point));
/// # Ok::<(), spatio_geohash::GeoHashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "GeoHashRepr", into = "GeoHashRepr")]
pub struct GeoHash {
    bits: u64,
    significant_bits: u8,
}

#[derive(Serialize, Deserialize)]
struct GeoHashRepr {
    bits: u64,
    significant_bits: u8,
}

impl TryFrom<GeoHashRepr> for GeoHash {
    type Error = GeoHashError;

    fn try_from(repr: GeoHashRepr) -> Result<Self> {
        GeoHash::from_long_value(repr.bits, repr.significant_bits)
    }
}

impl From<GeoHash> for GeoHashRepr {
    fn from(hash: GeoHash) -> Self {
        Self {
            bits: hash.bits,
            significant_bits: hash.significant_bits,
        }
    }
}

/// Mask of the top `bits` bits of a `u64`.
#[inline]
pub(crate) fn prefix_mask(bits: u8) -> u64 {
    match bits {
        0 => 0,
        b if b >= MAX_BITS => u64::MAX,
        b => !(u64::MAX >> b),
    }
}

/// Encode a point into a geohash with `max_bits` significant bits.
///
/// Zero bits yields the whole-world cell; more than 64 bits is an error.
pub fn encode(point: &GeoPoint, max_bits: u8) -> Result<GeoHash> {
    GeoHash::with_bit_precision(point, max_bits)
}

/// Decode a geohash into the bounding box of its cell.
pub fn decode(hash: &GeoHash) -> BoundingBox {
    hash.bounding_box()
}

impl GeoHash {
    /// The zero-bit hash covering the whole world.
    pub const WORLD: GeoHash = GeoHash {
        bits: 0,
        significant_bits: 0,
    };

    /// Encode `point` by bisecting the coordinate ranges `bits` times.
    pub fn with_bit_precision(point: &GeoPoint, bits: u8) -> Result<Self> {
        let significant_bits = validate_bit_precision(bits as u32)?;
        Ok(Self::encode_bits(point, significant_bits))
    }

    /// Caller guarantees `significant_bits <= 64`.
    pub(crate) fn encode_bits(point: &GeoPoint, significant_bits: u8) -> Self {
        debug_assert!(significant_bits <= MAX_BITS);
        let mut lat_range = (-90.0_f64, 90.0_f64);
        let mut lon_range = (-180.0_f64, 180.0_f64);
        let mut pattern = 0_u64;

        for i in 0..significant_bits {
            let (range, value) = if i % 2 == 0 {
                (&mut lon_range, point.longitude())
            } else {
                (&mut lat_range, point.latitude())
            };
            let mid = (range.0 + range.1) / 2.0;
            if value >= mid {
                pattern |= FIRST_BIT >> i;
                range.0 = mid;
            } else {
                range.1 = mid;
            }
        }

        Self {
            bits: pattern,
            significant_bits,
        }
    }

    /// Encode `point` with `chars * 5` bits, i.e. a base32 string of `chars` characters.
    pub fn with_character_precision(point: &GeoPoint, chars: usize) -> Result<Self> {
        let bits = validate_character_precision(chars)?;
        Self::with_bit_precision(point, bits)
    }

    /// Build a hash from a left-aligned bit pattern. Bits past the precision are cleared.
    pub fn from_long_value(bits: u64, significant_bits: u8) -> Result<Self> {
        let significant_bits = validate_bit_precision(significant_bits as u32)?;
        Ok(Self {
            bits: bits & prefix_mask(significant_bits),
            significant_bits,
        })
    }

    /// Build a hash from its right-aligned ordinal (position in Z-order).
    pub fn from_ord(ord: u64, significant_bits: u8) -> Result<Self> {
        let significant_bits = validate_bit_precision(significant_bits as u32)?;
        if significant_bits < MAX_BITS && ord >> significant_bits != 0 {
            return Err(GeoHashError::OrdinalOutOfRange {
                ord: ord as i128,
                bits: significant_bits,
            });
        }
        let bits = if significant_bits == 0 {
            0
        } else {
            ord << (MAX_BITS - significant_bits)
        };
        Ok(Self {
            bits,
            significant_bits,
        })
    }

    /// Parse a string of `0` and `1` characters, most significant bit first.
    ///
    /// ```
    /// use spatio_geohash::GeoHash;
    ///
    /// let hash = GeoHash::from_binary_string("1101")?;
    /// assert_eq!(hash.significant_bits(), 4);
    /// assert_eq!(hash.to_binary_string(), "1101");
    /// # Ok::<(), spatio_geohash::GeoHashError>(())
    /// ```
    pub fn from_binary_string(binary: &str) -> Result<Self> {
        if binary.len() > MAX_BITS as usize {
            return Err(GeoHashError::InvalidBinaryString(format!(
                "length {} exceeds {} bits",
                binary.len(),
                MAX_BITS
            )));
        }

        let mut bits = 0_u64;
        for (i, c) in binary.chars().enumerate() {
            match c {
                '1' => bits |= FIRST_BIT >> i,
                '0' => {}
                other => {
                    return Err(GeoHashError::InvalidBinaryString(format!(
                        "unexpected character '{}' at position {}",
                        other, i
                    )));
                }
            }
        }

        Ok(Self {
            bits,
            significant_bits: binary.len() as u8,
        })
    }

    /// Parse a base32 geohash string such as `"u4pruy"`.
    pub fn from_base32(hash: &str) -> Result<Self> {
        base32::decode(hash)
    }

    #[inline]
    pub fn significant_bits(&self) -> u8 {
        self.significant_bits
    }

    /// The left-aligned bit pattern.
    #[inline]
    pub fn long_value(&self) -> u64 {
        self.bits
    }

    /// The right-aligned bit pattern: this cell's position in Z-order.
    #[inline]
    pub fn ord(&self) -> u64 {
        if self.significant_bits == 0 {
            0
        } else {
            self.bits >> (MAX_BITS - self.significant_bits)
        }
    }

    /// Number of base32 characters, if the precision is a multiple of 5.
    pub fn character_precision(&self) -> Result<usize> {
        if self.significant_bits % 5 != 0 {
            return Err(GeoHashError::NotBase32Aligned {
                bits: self.significant_bits,
            });
        }
        Ok(self.significant_bits as usize / 5)
    }

    /// Render as a base32 string. Fails unless the precision is a multiple of 5.
    pub fn to_base32(&self) -> Result<String> {
        base32::encode(self)
    }

    pub fn to_binary_string(&self) -> String {
        (0..self.significant_bits)
            .map(|i| {
                if self.bits & (FIRST_BIT >> i) != 0 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }

    /// Decode the cell this hash names by replaying the bisections.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut lat_range = (-90.0_f64, 90.0_f64);
        let mut lon_range = (-180.0_f64, 180.0_f64);

        for i in 0..self.significant_bits {
            let range = if i % 2 == 0 {
                &mut lon_range
            } else {
                &mut lat_range
            };
            let mid = (range.0 + range.1) / 2.0;
            if self.bits & (FIRST_BIT >> i) != 0 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
        }

        BoundingBox::from_bounds_unchecked(lat_range.0, lat_range.1, lon_range.0, lon_range.1)
    }

    pub fn center_point(&self) -> GeoPoint {
        self.bounding_box().center_point()
    }

    /// Whether the point lies inside this cell.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.bounding_box().contains(point)
    }

    /// Whether this cell lies inside `other`, i.e. `other` is a prefix of `self`.
    pub fn within(&self, other: &GeoHash) -> bool {
        other.significant_bits <= self.significant_bits
            && (self.bits & prefix_mask(other.significant_bits)) == other.bits
    }

    /// The enclosing cell at a coarser (or equal) precision.
    pub fn truncate(&self, bits: u8) -> Result<Self> {
        if bits > self.significant_bits {
            return Err(GeoHashError::PrecisionMismatch {
                left: self.significant_bits,
                right: bits,
            });
        }
        Ok(Self {
            bits: self.bits & prefix_mask(bits),
            significant_bits: bits,
        })
    }

    /// The next cell in Z-order at the same precision.
    pub fn next(&self) -> Result<Self> {
        self.step(1)
    }

    /// The previous cell in Z-order at the same precision.
    pub fn prev(&self) -> Result<Self> {
        self.step(-1)
    }

    /// Move `steps` cells along the Z-order curve at the same precision.
    pub fn step(&self, steps: i64) -> Result<Self> {
        let target = self.ord() as i128 + steps as i128;
        let out_of_range = || GeoHashError::OrdinalOutOfRange {
            ord: target,
            bits: self.significant_bits,
        };
        let ord = u64::try_from(target).map_err(|_| out_of_range())?;
        Self::from_ord(ord, self.significant_bits).map_err(|_| out_of_range())
    }

    /// Signed number of Z-order steps from `from` to `to`.
    pub fn steps_between(from: &GeoHash, to: &GeoHash) -> Result<i128> {
        if from.significant_bits != to.significant_bits {
            return Err(GeoHashError::PrecisionMismatch {
                left: from.significant_bits,
                right: to.significant_bits,
            });
        }
        Ok(to.ord() as i128 - from.ord() as i128)
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_base32() {
            Ok(hash) => f.write_str(&hash),
            Err(_) => write!(f, "0b{}", self.to_binary_string()),
        }
    }
}

impl FromStr for GeoHash {
    type Err = GeoHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base32(s)
    }
}
