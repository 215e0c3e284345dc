use crate::foundation::core::CHANNELS;

/// `true` if any pixel's alpha is below `opaque_min`.
///
/// With `opaque_min = 255` this is the strict "not fully opaque" test.
pub fn has_alpha(rgba: &[u8], opaque_min: u8) -> bool {
    rgba.chunks_exact(CHANNELS).any(|px| px[3] < opaque_min)
}

/// Force every pixel's alpha to 255.
pub fn reset_alpha(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(CHANNELS) {
        px[3] = 0xFF;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resize/alpha.rs"]
mod tests;
