// SPDX-License-Identifier: MPL-2.0
//! One-shot scan of the assets directory.
//!
//! Lists the images a gallery starts with and sorts them according to the
//! configured sort order. The scan happens once at startup; the gallery never
//! watches the directory afterwards.

use crate::app::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extensions shown in the gallery, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Lists supported image files directly inside `directory`, sorted by
/// `sort_order`. Subdirectories are not descended into.
///
/// Returns an error if the directory cannot be read.
pub fn scan(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_images(&mut images, sort_order);
    tracing::debug!(
        directory = %directory.display(),
        count = images.len(),
        "scanned assets directory"
    );
    Ok(images)
}

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`].
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn sort_images(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by_cached_key(|path| timestamp(path, |m| m.modified()));
        }
        SortOrder::CreatedDate => {
            images.sort_by_cached_key(|path| timestamp(path, |m| m.created()));
        }
    }
}

/// File timestamp, falling back to the epoch when the platform or the file
/// system does not report it.
fn timestamp(
    path: &Path,
    read: impl Fn(&std::fs::Metadata) -> std::io::Result<SystemTime>,
) -> (SystemTime, Option<std::ffi::OsString>) {
    let time = path
        .metadata()
        .and_then(|m| read(&m))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    // Name as tie-breaker keeps equal timestamps in a stable order.
    (time, path.file_name().map(ToOwned::to_owned))
}
