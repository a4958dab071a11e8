/* embcordic | error.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use thiserror::Error;

/// Errors reported by the checked entry points
///
/// The unchecked kernel never fails; these only surface through [`crate::try_rotate`],
/// [`crate::Cordic`] and the reporting helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("the iteration count must be at least 1")]
    ZeroIterations,
    #[error("angle {0}° is outside the supported domain [-90°, 90°]")]
    AngleOutOfDomain(f64),
    #[error("invalid angle sweep: {start}° to {stop}° by {step}°")]
    InvalidSweep { start: i32, stop: i32, step: i32 }
}

pub type Result<T> = core::result::Result<T, Error>;
