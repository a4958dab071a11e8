/* embcordic | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point CORDIC rotation kernel */

/******************************************************************************/

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::fixed::{fixed_to_real, real_to_fixed, shr_floor, Fixed};
use crate::gain::compute_gain;
use crate::table::{build_table, ArctanTable};

/******************************************************************************/

/// Largest angle magnitude, in degrees, accepted by the checked entry points
pub const DOMAIN_LIMIT: f64 = 90.0;

/// Iteration count matching the number of fractional bits
pub const DEFAULT_ITERATIONS: u32 = crate::fixed::FRACTIONAL_BITS;

/// Cosine and sine of an angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinCos {
    pub cos: f64,
    pub sin: f64
}

impl SinCos {
    fn from_fixed((x, y): (Fixed, Fixed)) -> Self {
        Self {
            cos: fixed_to_real(x),
            sin: fixed_to_real(y)
        }
    }
}

impl From<SinCos> for (f64, f64) {
    fn from(value: SinCos) -> Self {
        (value.cos, value.sin)
    }
}

/******************************************************************************/

/// Runs the micro-rotations on the vector (x0, 0) for the remaining angle `z`
///
/// Both vector components are updated from the same previous pair, and the shifts are
/// arithmetic so that the truncation always goes toward negative infinity.
fn iterate(x0: Fixed, mut z: Fixed, table: &ArctanTable) -> (Fixed, Fixed) {
    let mut x = x0;
    let mut y = 0;

    for (i, &angle) in table.iter().enumerate() {
        let (dx, dy) = (shr_floor(y, i as u32), shr_floor(x, i as u32));
        if z < 0 {
            x += dx;
            y -= dy;
            z += angle;
        } else {
            x -= dx;
            y += dy;
            z -= angle;
        }
        trace!("cordic step {}: x = {}, y = {}, z = {}", i, x, y, z);
    }

    (x, y)
}

fn check_iterations(n: u32) -> Result<()> {
    if n == 0 {
        return Err(Error::ZeroIterations);
    }
    Ok(())
}

fn check_angle(angle_degrees: f64) -> Result<()> {
    if !angle_degrees.is_finite() || libm::fabs(angle_degrees) > DOMAIN_LIMIT {
        return Err(Error::AngleOutOfDomain(angle_degrees));
    }
    Ok(())
}

/// Rotates the unit vector by `angle_degrees` and returns the raw fixed-point (x, y) result
pub fn rotate_fixed(angle_degrees: f64, n: u32) -> (Fixed, Fixed) {
    let gain = compute_gain(n);
    let x0 = real_to_fixed(1.0 / gain);
    let z = real_to_fixed(angle_degrees);
    let table = build_table(n);
    debug!("cordic: angle = {}°, n = {}, gain = {}", angle_degrees, n, gain);
    iterate(x0, z, &table)
}

/// Computes the cosine and sine of `angle_degrees` with `n` CORDIC iterations
///
/// Returns `(cosine, sine)`. The input is expected in [-90°, 90°] and `n` to be at least 1.
/// Neither is checked: outside that domain the result degrades without failing. Use
/// [`try_rotate`] for a validating variant.
///
/// ```
/// let (cos, sin) = embcordic::rotate(45.0, 16);
/// assert!((cos - 0.70711).abs() < 1e-4);
/// assert!((sin - 0.70711).abs() < 1e-4);
/// ```
pub fn rotate(angle_degrees: f64, n: u32) -> (f64, f64) {
    SinCos::from_fixed(rotate_fixed(angle_degrees, n)).into()
}

/// Validating variant of [`rotate`]
///
/// Fails on a zero iteration count or when the angle is not a finite value in [-90°, 90°].
pub fn try_rotate(angle_degrees: f64, n: u32) -> Result<SinCos> {
    check_iterations(n)?;
    check_angle(angle_degrees)?;
    Ok(SinCos::from_fixed(rotate_fixed(angle_degrees, n)))
}

/******************************************************************************/

/// CORDIC rotation context for a fixed iteration count
///
/// The gain and the angle table only depend on the iteration count, so they are computed once
/// here and reused by every rotation. Results are bit-identical to [`rotate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cordic {
    iterations: u32,
    gain: f64,
    x0: Fixed,
    table: ArctanTable
}

impl Cordic {
    /// Prepares a context for `n` iterations
    ///
    /// ```
    /// let cordic = embcordic::Cordic::new(16).unwrap();
    /// let result = cordic.rotate(30.0);
    /// assert!((result.sin - 0.5).abs() < 1e-4);
    /// ```
    pub fn new(n: u32) -> Result<Self> {
        check_iterations(n)?;
        Ok(Self::prepare(n))
    }

    fn prepare(n: u32) -> Self {
        let gain = compute_gain(n);
        let table = build_table(n);
        debug!("cordic context: n = {}, gain = {}, {} table entries", n, gain, table.len());
        Self {
            iterations: n,
            gain,
            x0: real_to_fixed(1.0 / gain),
            table
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Gain A(n) compensated by the initial vector
    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn table(&self) -> &ArctanTable {
        &self.table
    }

    /// Raw fixed-point (x, y) result of the rotation
    pub fn rotate_fixed(&self, angle_degrees: f64) -> (Fixed, Fixed) {
        iterate(self.x0, real_to_fixed(angle_degrees), &self.table)
    }

    /// Cosine and sine of `angle_degrees`, without domain validation
    pub fn rotate(&self, angle_degrees: f64) -> SinCos {
        SinCos::from_fixed(self.rotate_fixed(angle_degrees))
    }

    /// Cosine and sine of `angle_degrees`, failing outside [-90°, 90°]
    pub fn rotate_checked(&self, angle_degrees: f64) -> Result<SinCos> {
        check_angle(angle_degrees)?;
        Ok(self.rotate(angle_degrees))
    }
}

impl Default for Cordic {
    fn default() -> Self {
        Self::prepare(DEFAULT_ITERATIONS)
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(rotate_fixed(0.0, 16), (65536, 3));
        assert_eq!(rotate_fixed(30.0, 16), (56759, 32769));
        assert_eq!(rotate_fixed(45.0, 16), (46341, 46342));
        assert_eq!(rotate_fixed(90.0, 16), (3, 65536));
        assert_eq!(rotate_fixed(-90.0, 16), (-1, -65537));
    }

    #[test]
    fn test_half_lsb_angles() {
        // A tie must round to even, otherwise z lands on the wrong side of zero
        let lsb = 1.0 / 65536.0;
        assert_eq!(rotate_fixed(-0.5 * lsb, 16), (65536, 3));
        assert_eq!(rotate_fixed(0.5 * lsb, 16), (65536, 3));
        assert_eq!(rotate_fixed(1.5 * lsb, 16), (65536, 3));
        assert_eq!(rotate_fixed(2.5 * lsb, 16), (65536, 3));
        assert_eq!(rotate_fixed(-1.5 * lsb, 16), (65541, 0));
        assert_eq!(rotate_fixed(-2.5 * lsb, 16), (65541, 0));
        assert_eq!(Cordic::default().rotate_fixed(-0.5 * lsb), (65536, 3));
    }

    #[test]
    fn test_default_context() {
        let cordic = Cordic::default();
        assert_eq!(Cordic::new(DEFAULT_ITERATIONS), Ok(cordic.clone()));
        assert_eq!(cordic.table(), &build_table(DEFAULT_ITERATIONS));
        assert_eq!(cordic.rotate_fixed(45.0), (46341, 46342));
    }

    #[test]
    fn test_known_angles() {
        let (cos, sin) = rotate(0.0, 16);
        assert_abs_diff_eq!(cos, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sin, 0.0, epsilon = 1e-4);

        let (cos, sin) = rotate(45.0, 16);
        assert_abs_diff_eq!(cos, 0.70711, epsilon = 1e-4);
        assert_abs_diff_eq!(sin, 0.70711, epsilon = 1e-4);

        let (cos, sin) = rotate(90.0, 16);
        assert_abs_diff_eq!(cos, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(sin, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_angle_boundary() {
        let tolerance = 1.0 / (1 << (crate::fixed::FRACTIONAL_BITS - 2)) as f64;
        for n in [12, 16, 20, 24] {
            let (cos, sin) = rotate(0.0, n);
            assert_abs_diff_eq!(cos, 1.0, epsilon = tolerance);
            assert_abs_diff_eq!(sin, 0.0, epsilon = tolerance);
        }
    }

    #[test]
    fn test_context_matches_free_function() {
        let cordic = Cordic::new(16).unwrap();
        assert_eq!(cordic, Cordic::default());
        assert_eq!(cordic.iterations(), 16);
        assert_eq!(cordic.table().len(), 17);
        assert_eq!(cordic.gain(), compute_gain(16));
        for angle in (-90..=90).map(|a| a as f64 * 0.75) {
            assert_eq!(cordic.rotate_fixed(angle), rotate_fixed(angle, 16));
            assert_eq!(<(f64, f64)>::from(cordic.rotate(angle)), rotate(angle, 16));
        }
    }

    #[test]
    fn test_checked_entry_points() {
        assert_eq!(try_rotate(10.0, 0), Err(Error::ZeroIterations));
        assert_eq!(Cordic::new(0), Err(Error::ZeroIterations));
        assert_eq!(try_rotate(90.5, 16), Err(Error::AngleOutOfDomain(90.5)));
        assert_eq!(try_rotate(-91.0, 16), Err(Error::AngleOutOfDomain(-91.0)));
        assert!(matches!(try_rotate(f64::NAN, 16), Err(Error::AngleOutOfDomain(_))));
        assert!(try_rotate(f64::INFINITY, 16).is_err());

        let result = try_rotate(-90.0, 16).unwrap();
        assert_eq!((result.cos, result.sin), rotate(-90.0, 16));

        let cordic = Cordic::default();
        assert!(cordic.rotate_checked(120.0).is_err());
        assert_eq!(cordic.rotate_checked(60.0).unwrap(), cordic.rotate(60.0));
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        // n = 0 and far out of domain angles give poor results, but results nonetheless
        let (cos, sin) = rotate(30.0, 0);
        assert!(cos.is_finite() && sin.is_finite());
        for angle in [1.0e6, -1.0e6, 1.0e12, f64::NAN] {
            let (cos, sin) = rotate(angle, 16);
            assert!(cos.is_finite() && sin.is_finite());
        }
        let (cos, sin) = rotate(45.0, 200);
        assert_abs_diff_eq!(cos, 0.70711, epsilon = 1e-3);
        assert_abs_diff_eq!(sin, 0.70711, epsilon = 1e-3);
    }

    #[test]
    fn test_out_of_domain_degrades() {
        // The table only spans ~99.9°, so 120° cannot be reached
        let (cos, sin) = rotate(120.0, 16);
        let expected_cos = libm::cos(120.0 * core::f64::consts::PI / 180.0);
        assert!(libm::fabs(cos - expected_cos) > 0.1);
        assert!(sin > 0.9);
    }

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cordic>();
        assert_send_sync::<SinCos>();
    }
}
