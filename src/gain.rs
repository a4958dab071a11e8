/* embcordic | gain.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* CORDIC gain */

/******************************************************************************/

include!(concat!(env!("OUT_DIR"), "/gain_limit.rs"));

/******************************************************************************/

/// Computes the CORDIC gain A(n) for `n` iterations
///
/// A(n) = sqrt(2) · sqrt(1 + 2^-2) · ... · sqrt(1 + 2^-2(n-1))
///
/// The rotation kernel seeds its vector with `1 / A(n)` so that the magnitude growth of the
/// micro-rotations brings it back to unit length. The gain grows with `n` and converges to
/// [`GAIN_LIMIT`].
///
/// `n` must be at least 1. For `n = 0` the loop is empty and sqrt(2) is returned, same as `n = 1`.
pub fn compute_gain(n: u32) -> f64 {
    let mut gain = libm::sqrt(2.0);
    for i in 1..n {
        gain *= libm::sqrt(1.0 + libm::pow(2.0, -2.0 * i as f64));
    }
    gain
}

/******************************************************************************/
