// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`dashed_outline`] - Dashed rounded border for the "Add Images" slot and
//!   the gap left by a dragged tile

pub mod dashed_outline;
