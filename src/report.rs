/* embcordic | report.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Accuracy comparison against the floating-point functions */

/******************************************************************************/

use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;

use log::debug;

use crate::cordic::{Cordic, SinCos, DEFAULT_ITERATIONS};
use crate::error::{Error, Result};
use crate::fixed::FRACTIONAL_BITS;

/******************************************************************************/

/// Function being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Cos,
    Sin
}

impl Function {
    /// Floating-point reference value for an angle in degrees
    pub fn reference(self, angle_degrees: f64) -> f64 {
        let angle = angle_degrees * (PI / 180.0);
        match self {
            Function::Cos => libm::cos(angle),
            Function::Sin => libm::sin(angle)
        }
    }

    /// Picks the matching component of a CORDIC result
    pub fn select(self, result: SinCos) -> f64 {
        match self {
            Function::Cos => result.cos,
            Function::Sin => result.sin
        }
    }

    /// Name of the reference implementation, used as a column header
    pub fn reference_name(self) -> &'static str {
        match self {
            Function::Cos => "libm::cos",
            Function::Sin => "libm::sin"
        }
    }
}

/// Number of correct bits corresponding to an absolute error
///
/// An exact result is credited with two bits more than the fixed-point precision.
///
/// ```
/// use embcordic::report::accuracy_bits;
/// assert_eq!(accuracy_bits(0.0), 18);
/// assert_eq!(accuracy_bits(0.001), 9);
/// ```
pub fn accuracy_bits(error: f64) -> i32 {
    if error == 0.0 {
        FRACTIONAL_BITS as i32 + 2
    } else {
        libm::floor(-libm::log2(error)) as i32
    }
}

/******************************************************************************/

/// One line of a comparison report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub angle: f64,
    pub cordic: f64,
    pub reference: f64,
    pub error: f64,
    pub bits: i32
}

impl Comparison {
    pub fn new(cordic: &Cordic, function: Function, angle_degrees: f64) -> Self {
        let value = function.select(cordic.rotate(angle_degrees));
        let reference = function.reference(angle_degrees);
        let error = libm::fabs(reference - value);
        Self {
            angle: angle_degrees,
            cordic: value,
            reference,
            error,
            bits: accuracy_bits(error)
        }
    }
}

/// Range of test angles, in whole degrees, and the iteration count to test with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub start: i32,
    pub stop: i32,
    pub step: i32,
    pub iterations: u32
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: -90,
            stop: 90,
            step: 10,
            iterations: DEFAULT_ITERATIONS
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        if self.step <= 0 || self.start > self.stop {
            return Err(Error::InvalidSweep {
                start: self.start,
                stop: self.stop,
                step: self.step
            });
        }
        Ok(())
    }

    /// Test angles, from `start` up to and including `stop` when the step lands on it
    pub fn angles(&self) -> impl Iterator<Item = f64> {
        (self.start..=self.stop)
            .step_by(self.step.max(1) as usize)
            .map(f64::from)
    }
}

/******************************************************************************/

/// Comparison table for one function over a sweep of angles
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub function: Function,
    pub rows: Vec<Comparison>
}

impl Report {
    pub fn sweep(function: Function, config: &SweepConfig) -> Result<Self> {
        config.validate()?;
        let cordic = Cordic::new(config.iterations)?;
        let rows: Vec<Comparison> = config
            .angles()
            .map(|angle| Comparison::new(&cordic, function, angle))
            .collect();
        debug!("{:?} sweep: {} angles, {} iterations", function, rows.len(), config.iterations);
        Ok(Self { function, rows })
    }

    /// Row with the largest absolute error
    pub fn worst(&self) -> Option<&Comparison> {
        self.rows.iter().max_by(|a, b| a.error.total_cmp(&b.error))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>11} | {:>20} | {:>20} | {:>19} | Bits of Accuracy",
            "Angle",
            "CORDIC",
            self.function.reference_name(),
            "Error"
        )?;
        write!(f, "------------|----------------------|----------------------|---------------------|-----------------")?;
        for row in &self.rows {
            write!(
                f,
                "\n{:>11} | {:>20.17} | {:>20.17} | {:>19.17} | {:>2}",
                row.angle, row.cordic, row.reference, row.error, row.bits
            )?;
        }
        Ok(())
    }
}

/******************************************************************************/
