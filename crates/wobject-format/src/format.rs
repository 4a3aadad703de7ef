//! Shared formatting helpers for dumps.

/// Calculate the minimum width needed to display indices up to `count - 1`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

