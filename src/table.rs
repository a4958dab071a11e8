/* embcordic | table.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Micro-rotation angle table */

/******************************************************************************/

use alloc::vec::Vec;
use core::ops::Index;

use crate::fixed::{real_to_fixed, Fixed};

include!(concat!(env!("OUT_DIR"), "/atan_table.rs"));

/******************************************************************************/

/// Per-iteration rotation angles of the CORDIC kernel
///
/// Entry `i` holds `atan(2^-i)` in degrees, as a fixed-point value. The table is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArctanTable {
    angles: Vec<Fixed>
}

impl ArctanTable {
    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always `false`, a table holds at least the 45° entry
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Table entries, from the largest (45°) to the smallest angle
    pub fn as_slice(&self) -> &[Fixed] {
        &self.angles
    }

    /// Iterates over the table entries
    pub fn iter(&self) -> core::slice::Iter<'_, Fixed> {
        self.angles.iter()
    }

    /// Sum of all the table entries, i.e. the largest angle the kernel can reach
    pub fn span(&self) -> Fixed {
        self.angles.iter().sum()
    }
}

impl Index<usize> for ArctanTable {
    type Output = Fixed;

    fn index(&self, index: usize) -> &Fixed {
        &self.angles[index]
    }
}

impl<'a> IntoIterator for &'a ArctanTable {
    type Item = &'a Fixed;
    type IntoIter = core::slice::Iter<'a, Fixed>;

    fn into_iter(self) -> Self::IntoIter {
        self.angles.iter()
    }
}

/******************************************************************************/

/// `atan(2^-i)` in degrees
///
/// The first entries come from the table generated at build time, the tail is computed.
fn atan_degrees(i: u32) -> f64 {
    match ATAN_DEGREES_TABLE.get(i as usize) {
        Some(&angle) => angle,
        None => libm::atan(libm::pow(2.0, -(i as f64))) * (180.0 / core::f64::consts::PI)
    }
}

/// Builds the table of micro-rotation angles for `n` iterations
///
/// The returned table has `n + 1` entries, indexed from 0 to `n` inclusive.
///
/// ```
/// let table = embcordic::build_table(16);
/// assert_eq!(table.len(), 17);
/// assert_eq!(table[0], embcordic::real_to_fixed(45.0));
/// ```
pub fn build_table(n: u32) -> ArctanTable {
    ArctanTable {
        angles: (0..=n).map(|i| real_to_fixed(atan_degrees(i))).collect()
    }
}

/******************************************************************************/
