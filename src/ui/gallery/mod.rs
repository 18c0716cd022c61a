// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: header, responsive tile grid and drag overlay.
//!
//! - [`component`] - State, messages and the event handling that mutates the
//!   gallery and the selection
//! - [`tile`] - One image tile and the "Add Images" slot
//! - [`header`] - Title or selection count with the delete action
//! - [`overlay`] - Floating copy of the dragged image

pub mod component;
pub mod header;
pub mod overlay;
pub mod tile;

use crate::i18n::fluent::I18n;

pub use component::{Effect, Message, PointerEvent, State};

/// Shared references the gallery views read from.
#[derive(Debug, Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}
