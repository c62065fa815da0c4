//! Exhaustive nearest-color search over a [`Palette`].

use crate::Palette;

/// Squared euclidean distance between two color triples.
#[must_use]
pub fn squared_distance(x: [u16; 3], y: [u16; 3]) -> u32 {
    let mut dist = 0;
    for c in 0..3 {
        let d = u32::from(x[c].abs_diff(y[c]));
        dist += d * d;
    }
    dist
}

/// Returns the index of the palette entry with the smallest squared distance to `color`.
///
/// Every entry is checked. An entry only replaces the current best
/// if its distance is strictly smaller, so the lowest index wins ties.
///
/// # Examples
/// ```
/// # use termquant::{nearest_index, RGB_PALETTE};
/// // pure red appears at index 9 and 196, the lower index wins
/// assert_eq!(nearest_index(&RGB_PALETTE, [255, 0, 0]), 9);
/// ```
#[must_use]
pub fn nearest_index(palette: &Palette, color: [u16; 3]) -> u8 {
    let mut min_index = 0;
    let mut min_distance = u32::MAX;
    for (i, &entry) in (0..=u8::MAX).zip(palette.as_arrays()) {
        let distance = squared_distance(color, entry);
        if distance < min_distance {
            min_distance = distance;
            min_index = i;
        }
    }
    min_index
}
