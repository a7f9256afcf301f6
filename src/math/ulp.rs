//! Comparison of doubles by *units in the last place* (ULP), following the
//! reasoning of [Dawson (2012)](crate::Bibliography::Daw12): The output of
//! the geodesic solver accumulates rounding at the scale of the mantissa,
//! so neither an absolute nor a relative epsilon makes a good yardstick.

/// Two doubles differing by fewer than this number of ULPs compare equal
pub const DEFAULT_MAX_ULP_DIFF: u64 = 8;

/// Compare `x` and `y` by reinterpreting their IEEE-754 bit patterns as
/// unsigned integers, and checking whether the (wrapping) difference in
/// either direction is smaller than `max_ulp_diff`.
///
/// Since the comparison works on raw bit patterns, values of different sign
/// (including `0.0` and `-0.0`) are never equal, while two `NaN`s with
/// identical bit patterns are.
///
/// # Examples
///
/// ```rust
/// use vincenty::ulp_equals;
/// let x = 0.1 + 0.2;
/// assert!(x != 0.3);
/// assert!(ulp_equals(x, 0.3, 8));
/// assert!(!ulp_equals(1.0, 1.0 + 1e-12, 8));
/// ```
#[must_use]
pub fn ulp_equals(x: f64, y: f64, max_ulp_diff: u64) -> bool {
    let x = x.to_bits();
    let y = y.to_bits();
    x.wrapping_sub(y) < max_ulp_diff || y.wrapping_sub(x) < max_ulp_diff
}

// ----- Tests ---------------------------------------------------------------------
