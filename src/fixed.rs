/* embcordic | fixed.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Q-format conversions */

/******************************************************************************/

/// Fixed-point value: a real number scaled by 2^[`FRACTIONAL_BITS`]
///
/// With 16 fractional bits the representable range is roughly ±32768, which leaves plenty of
/// headroom for angles up to ±90° and for the intermediate CORDIC vector components.
pub type Fixed = i32;

/// Number of fractional bits of a [`Fixed`] value
pub const FRACTIONAL_BITS: u32 = 16;

/// 1.0 in fixed-point representation
pub const FIXED_ONE: Fixed = 1 << FRACTIONAL_BITS;

/// Scale factor between real numbers and [`Fixed`] values
pub const SCALE: f64 = FIXED_ONE as f64;

/******************************************************************************/

/// Converts a real number to fixed-point
///
/// The value is rounded to the nearest integer, with ties rounded to even. No overflow
/// check is performed: values whose magnitude exceeds the [`Fixed`] range saturate.
///
/// ```
/// assert_eq!(embcordic::real_to_fixed(1.5), 98304);
/// assert_eq!(embcordic::real_to_fixed(-0.25), -16384);
/// ```
pub fn real_to_fixed(x: f64) -> Fixed {
    libm::rint(x * SCALE) as Fixed
}

/// Converts a fixed-point value back to a real number
pub fn fixed_to_real(v: Fixed) -> f64 {
    v as f64 / SCALE
}

/// Arithmetic right shift, i.e. floor division by 2^`shift`
///
/// Negative values are sign-extended, so `-1 >> n` stays `-1`. Shifts of 32 bits or more are
/// clamped to 31, which yields the same floor result without overflowing the shift operator.
#[inline]
pub(crate) fn shr_floor(v: Fixed, shift: u32) -> Fixed {
    v >> shift.min(Fixed::BITS - 1)
}

/******************************************************************************/
