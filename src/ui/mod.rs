// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - The gallery screen: header, grid, tiles and drag overlay
//! - [`notifications`] - Toast notification system for user feedback
//! - [`state`] - Window and scroll geometry shared with hit testing
//! - [`components`] - Reusable UI components (dashed outline)
//! - [`styles`] - Centralized styling (buttons, checkboxes, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`widgets`] - Custom widgets (touch drag handle)

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
