// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery built with the Iced GUI framework.
//!
//! Images from a directory are shown in a responsive grid where they can be
//! selected, deleted in bulk and reordered by dragging with a mouse or a
//! finger. The reorder and selection rules live in [`gallery`] and are free of
//! any UI dependency; [`ui`] renders them and [`app`] wires everything to the
//! Iced runtime.

pub mod app;
pub mod asset_source;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
