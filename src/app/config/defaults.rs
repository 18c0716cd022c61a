// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Where images are read from
//! - **Drag**: Drag activation threshold bounds

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Assets directory used when neither the command line nor the config file
/// names one. Relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Default pointer travel (logical pixels) before a mouse press starts a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f32 = crate::gallery::drag::DEFAULT_ACTIVATION_DISTANCE;

/// Smallest accepted activation distance. Zero starts a drag on the first move.
pub const MIN_ACTIVATION_DISTANCE: f32 = 0.0;

/// Largest accepted activation distance.
pub const MAX_ACTIVATION_DISTANCE: f32 = 100.0;

/// Touch dragging is on unless the config turns it off.
pub const DEFAULT_TOUCH_ENABLED: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ACTIVATION_DISTANCE >= 0.0);
    assert!(MAX_ACTIVATION_DISTANCE > MIN_ACTIVATION_DISTANCE);
    assert!(DEFAULT_ACTIVATION_DISTANCE >= MIN_ACTIVATION_DISTANCE);
    assert!(DEFAULT_ACTIVATION_DISTANCE <= MAX_ACTIVATION_DISTANCE);
};
