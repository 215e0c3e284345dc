/// Fractional bits of the Q14 fixed-point kernel weights.
pub const Q14_FRAC_BITS: u32 = 14;

/// Fixed-point value of a unit weight (`round(1.0 * 16383)`).
pub const Q14_ONE: i32 = (1 << Q14_FRAC_BITS) - 1;

const Q14_HALF: i32 = 1 << (Q14_FRAC_BITS - 1);

pub(crate) fn to_fixed_q14(v: f64) -> i16 {
    (v * f64::from(Q14_ONE))
        .round()
        .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// Rounds a Q14 accumulator to a sample.
///
/// Accumulators are `i64`: packed records may hold any number of full-range taps.
pub(crate) fn q14_to_u8(acc: i64) -> u8 {
    ((acc + i64::from(Q14_HALF)) >> Q14_FRAC_BITS).clamp(0, 255) as u8
}

/// Rounded, clamped `num / den` for non-negative `den`.
pub(crate) fn div_round_u8(num: i64, den: i64) -> u8 {
    if den <= 0 || num <= 0 {
        return 0;
    }
    ((num + den / 2) / den).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
