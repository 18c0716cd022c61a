// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Geometry in the grid is `f32`, so tests compare with an epsilon instead of
//! `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for derived pixel geometry (sums and products of tile sizes).
pub const F32_EPSILON: f32 = 1e-3;
