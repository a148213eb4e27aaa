//! Recursive exponentiation.

/// `base` raised to `exp`, computed by recursion on the exponent.
///
/// Returns `None` if the result overflows `i64`. Bases 0, 1 and -1 are
/// answered directly, and any other base overflows past an exponent of 63,
/// so the recursion never runs deeper than 64 frames.
pub fn power(base: i64, exp: u32) -> Option<i64> {
    if exp == 0 {
        return Some(1);
    }
    match base {
        0 | 1 => return Some(base),
        -1 => return Some(if exp % 2 == 0 { 1 } else { -1 }),
        _ if exp > i64::BITS - 1 => return None,
        _ => {}
    }
    base.checked_mul(power(base, exp - 1)?)
}
