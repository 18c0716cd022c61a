// SPDX-License-Identifier: MPL-2.0
//! Image records: the immutable entries held by a [`Gallery`](super::Gallery).

use iced::widget::image::Handle;
use std::fmt;
use std::path::{Path, PathBuf};

/// Stable identifier of an image within one gallery session.
///
/// Ids are 1-based and minted by [`Gallery::load`](super::Gallery::load) in
/// input order. They never change when the gallery is reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u32);

impl ImageId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to the bytes of an image.
///
/// Holds the file path and an Iced handle created from it. The handle is
/// cheap to clone and decoding only happens when a tile is drawn.
#[derive(Debug, Clone)]
pub struct ImageSource {
    path: PathBuf,
    handle: Handle,
}

impl ImageSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let handle = Handle::from_path(&path);
        Self { path, handle }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// File name used for alt-style labels and logs.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl PartialEq for ImageSource {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::from_path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self::from_path(path)
    }
}

/// One image of the gallery. Never edited after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    id: ImageId,
    source: ImageSource,
}

impl ImageRecord {
    pub(crate) fn new(id: ImageId, source: ImageSource) -> Self {
        Self { id, source }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_displays_raw_value() {
        assert_eq!(ImageId::new(7).to_string(), "7");
        assert_eq!(ImageId::new(7).get(), 7);
    }

    #[test]
    fn sources_compare_by_path() {
        let a = ImageSource::from_path("photos/a.png");
        let b = ImageSource::from("photos/a.png");
        let c = ImageSource::from("photos/c.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn file_name_strips_directories() {
        let source = ImageSource::from_path("photos/summer/beach.webp");
        assert_eq!(source.file_name(), "beach.webp");
    }
}
