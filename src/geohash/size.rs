//! Cell dimensions per precision and covering-precision selection.

use crate::compute::validation::MAX_BITS;
use crate::types::BoundingBox;
use once_cell::sync::Lazy;

/// (latitude height, longitude width) in degrees of a cell, per bit count 0..=64.
static CELL_DIMENSIONS: Lazy<[(f64, f64); MAX_BITS as usize + 1]> = Lazy::new(|| {
    let mut table = [(0.0, 0.0); MAX_BITS as usize + 1];
    for (bits, entry) in table.iter_mut().enumerate() {
        let lat_bits = (bits / 2) as i32;
        let lon_bits = bits.div_ceil(2) as i32;
        *entry = (180.0 / 2f64.powi(lat_bits), 360.0 / 2f64.powi(lon_bits));
    }
    table
});

/// Height of a cell in degrees of latitude. `bits` above 64 is treated as 64.
pub fn cell_height(bits: u8) -> f64 {
    CELL_DIMENSIONS[bits.min(MAX_BITS) as usize].0
}

/// Width of a cell in degrees of longitude. `bits` above 64 is treated as 64.
pub fn cell_width(bits: u8) -> f64 {
    CELL_DIMENSIONS[bits.min(MAX_BITS) as usize].1
}

/// The coarsest precision whose cells fit inside `bbox`, capped at `max_bits`.
///
/// A cell fits when it is no taller than the box and no wider than it. An
/// axis along which the box has zero extent is not considered, so a
/// horizontal or vertical line still gets a coarse covering. When no
/// precision up to `max_bits` fits (a point-sized box, or a box smaller than
/// the finest permitted cell) the result is `max_bits`.
pub fn fitting_bits(bbox: &BoundingBox, max_bits: u8) -> u8 {
    let max_bits = max_bits.min(MAX_BITS);
    let height = bbox.latitude_size();
    let width = bbox.longitude_size();

    if height <= 0.0 && width <= 0.0 {
        return max_bits;
    }

    (0..=max_bits)
        .find(|&bits| {
            (height <= 0.0 || cell_height(bits) <= height)
                && (width <= 0.0 || cell_width(bits) <= width)
        })
        .unwrap_or(max_bits)
}
