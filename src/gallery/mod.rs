// SPDX-License-Identifier: MPL-2.0
//! Gallery model: ordered records, selection, grid geometry and the
//! drag-to-reorder session. Nothing in here renders; the widgets in
//! [`crate::ui::gallery`] read from these types.

pub mod collision;
pub mod drag;
pub mod layout;
mod record;
pub mod selection;
mod store;

pub use collision::closest_center;
pub use drag::{commit_drop, ActiveDrag, DragConfig, DragSession, Pointer, Transition};
pub use layout::GridLayout;
pub use record::{ImageId, ImageRecord, ImageSource};
pub use selection::Selection;
pub use store::Gallery;
