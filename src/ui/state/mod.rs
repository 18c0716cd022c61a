// SPDX-License-Identifier: MPL-2.0
//! UI state that lives outside the gallery domain types.

pub mod viewport;

pub use viewport::ViewportState;
