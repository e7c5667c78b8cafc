//! Base32 string form of geohashes.
//!
//! Each character carries five bits. The alphabet leaves out `a`, `i`, `l`
//! and `o` and must match other geohash implementations exactly.

use super::{FIRST_BIT, GeoHash};
use crate::compute::validation::MAX_CHARACTERS;
use crate::error::{GeoHashError, Result};
use once_cell::sync::Lazy;

/// The geohash base32 alphabet, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Mask selecting the top five bits of the pattern.
const FIRST_FIVE_BITS: u64 = 0xf800_0000_0000_0000;

/// ASCII byte -> 5-bit value.
static DECODE_MAP: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut map = [None; 128];
    for (value, &symbol) in ALPHABET.iter().enumerate() {
        map[symbol as usize] = Some(value as u8);
    }
    map
});

/// Render `hash` in base32. Fails unless its precision is a multiple of 5.
pub fn encode(hash: &GeoHash) -> Result<String> {
    let chars = hash.character_precision()?;
    let mut bits = hash.long_value();
    let mut out = String::with_capacity(chars);

    for _ in 0..chars {
        let index = ((bits & FIRST_FIVE_BITS) >> 59) as usize;
        out.push(ALPHABET[index] as char);
        bits <<= 5;
    }

    Ok(out)
}

/// Parse a base32 geohash. Each character contributes exactly five bits.
///
/// Upper-case input is rejected, matching the canonical lower-case form used
/// as store keys.
pub fn decode(hash: &str) -> Result<GeoHash> {
    let mut bits = 0_u64;
    let mut significant_bits = 0_u8;

    for (position, character) in hash.chars().enumerate() {
        if position >= MAX_CHARACTERS {
            return Err(GeoHashError::InvalidCharacterPrecision {
                chars: hash.chars().count(),
            });
        }

        let value = lookup(character).ok_or(GeoHashError::InvalidCharacter {
            character,
            position,
        })?;

        for shift in (0..5).rev() {
            if (value >> shift) & 1 == 1 {
                bits |= FIRST_BIT >> significant_bits;
            }
            significant_bits += 1;
        }
    }

    GeoHash::from_long_value(bits, significant_bits)
}

fn lookup(character: char) -> Option<u8> {
    if character.is_ascii() {
        DECODE_MAP[character as usize]
    } else {
        None
    }
}
