// SPDX-License-Identifier: MPL-2.0
//! Set of images checked for bulk deletion.

use super::record::ImageId;
use super::store::Gallery;
use crate::error::GalleryError;
use std::collections::HashSet;

/// Checked image ids, kept independently of display order.
///
/// Every id refers to a record present in the gallery it was toggled
/// against; call [`Selection::retain_present`] after removing records if the
/// selection is not cleared at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<ImageId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the checked state of `id` and returns whether it is now checked.
    ///
    /// Unchecking never needs the gallery. Checking requires `id` to resolve
    /// to a record in `gallery`.
    pub fn toggle(&mut self, gallery: &Gallery, id: ImageId) -> Result<bool, GalleryError> {
        if self.ids.remove(&id) {
            return Ok(false);
        }
        if !gallery.contains(id) {
            return Err(GalleryError::UnknownImage(id));
        }
        self.ids.insert(id);
        Ok(true)
    }

    #[must_use]
    pub fn is_selected(&self, id: ImageId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &HashSet<ImageId> {
        &self.ids
    }

    /// Drops ids whose record is no longer in `gallery`.
    pub fn retain_present(&mut self, gallery: &Gallery) {
        self.ids.retain(|id| gallery.contains(*id));
    }
}
