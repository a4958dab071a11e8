/* embcordic | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point CORDIC sine and cosine */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]

extern crate alloc;

/******************************************************************************/

mod cordic;
mod error;
mod fixed;
mod gain;
mod table;

pub mod report;

pub use cordic::{rotate, rotate_fixed, try_rotate, Cordic, SinCos, DEFAULT_ITERATIONS, DOMAIN_LIMIT};
pub use error::{Error, Result};
pub use fixed::{fixed_to_real, real_to_fixed, Fixed, FIXED_ONE, FRACTIONAL_BITS, SCALE};
pub use gain::{compute_gain, GAIN_LIMIT};
pub use table::{build_table, ArctanTable};
