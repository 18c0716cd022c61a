// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod touch_drag_handle;

pub use touch_drag_handle::touch_drag_handle;
