// SPDX-License-Identifier: MPL-2.0
//! The ordered gallery: single source of truth for display order.
//!
//! Records live in a `Vec` in display order. Resolving an id to its position
//! is a linear scan; a gallery is one directory of pictures (tens to a few
//! hundred entries), so this stays well under a microsecond per lookup and
//! keeps the order and the lookup structure from ever disagreeing.

use super::record::{ImageId, ImageRecord, ImageSource};
use crate::error::GalleryError;
use std::collections::HashSet;

/// Ordered sequence of image records with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    records: Vec<ImageRecord>,
}

impl Gallery {
    /// Builds a gallery from image sources, assigning ids `1..=n` in input
    /// order. This is the only place ids are minted.
    pub fn load<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImageSource>,
    {
        let records = sources
            .into_iter()
            .zip(1u32..)
            .map(|(source, raw)| ImageRecord::new(ImageId::new(raw), source.into()))
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in display order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    /// Ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.records.iter().map(ImageRecord::id)
    }

    /// Current display position of `id`.
    #[must_use]
    pub fn position(&self, id: ImageId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ImageId) -> bool {
        self.position(id).is_some()
    }

    /// Moves `id` to the position currently held by `target`, shifting every
    /// record in between by one slot.
    ///
    /// Returns `Ok(true)` when the order changed and `Ok(false)` when
    /// `id == target`. Both positions are resolved at call time. An absent id
    /// leaves the gallery untouched and reports which id was missing.
    pub fn move_to(&mut self, id: ImageId, target: ImageId) -> Result<bool, GalleryError> {
        if id == target {
            return Ok(false);
        }
        let from = self.position(id).ok_or(GalleryError::UnknownImage(id))?;
        let to = self
            .position(target)
            .ok_or(GalleryError::UnknownImage(target))?;
        shift(&mut self.records, from, to);
        Ok(true)
    }

    /// Order the gallery would have after `move_to(id, target)`, without
    /// touching it. Falls back to the current order when the move is a no-op.
    #[must_use]
    pub fn preview_move(&self, id: ImageId, target: ImageId) -> Vec<&ImageRecord> {
        let mut order: Vec<&ImageRecord> = self.records.iter().collect();
        if let (Some(from), Some(to)) = (self.position(id), self.position(target)) {
            shift(&mut order, from, to);
        }
        order
    }

    /// Removes every record whose id is in `ids`, keeping the relative order
    /// of the rest. Returns how many records were removed.
    pub fn remove(&mut self, ids: &HashSet<ImageId>) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id()));
        before - self.records.len()
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Takes the element at `from` out and reinserts it at `to`.
///
/// Done as a single rotation of the range between both indices, so there is
/// no moment where the element is missing from the slice.
fn shift<T>(items: &mut [T], from: usize, to: usize) {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => items[from..=to].rotate_left(1),
        std::cmp::Ordering::Greater => items[to..=from].rotate_right(1),
        std::cmp::Ordering::Equal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn gallery_of(n: u32) -> Gallery {
        Gallery::load((1..=n).map(|i| PathBuf::from(format!("img-{i}.png"))))
    }

    fn raw_ids(gallery: &Gallery) -> Vec<u32> {
        gallery.ids().map(ImageId::get).collect()
    }

    fn id(raw: u32) -> ImageId {
        ImageId::new(raw)
    }

    #[test]
    fn load_assigns_sequential_ids_from_one() {
        let gallery = Gallery::load(["b.png", "a.png", "c.jpg"]);
        assert_eq!(raw_ids(&gallery), vec![1, 2, 3]);
        assert_eq!(
            gallery.get(id(1)).map(|r| r.source().file_name()),
            Some("b.png".to_string())
        );
    }

    #[test]
    fn load_of_nothing_is_empty() {
        let gallery = Gallery::load(Vec::<&str>::new());
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
    }

    #[test]
    fn move_forward_shifts_intervening_records_back() {
        let mut gallery = gallery_of(4);
        assert_eq!(gallery.move_to(id(1), id(3)), Ok(true));
        assert_eq!(raw_ids(&gallery), vec![2, 3, 1, 4]);
    }

    #[test]
    fn move_backward_shifts_intervening_records_forward() {
        let mut gallery = gallery_of(5);
        assert_eq!(gallery.move_to(id(5), id(2)), Ok(true));
        assert_eq!(raw_ids(&gallery), vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn move_to_adjacent_swaps() {
        let mut gallery = gallery_of(3);
        gallery.move_to(id(2), id(3)).unwrap();
        assert_eq!(raw_ids(&gallery), vec![1, 3, 2]);
    }

    #[test]
    fn move_onto_itself_is_noop() {
        let mut gallery = gallery_of(4);
        let before = gallery.clone();
        assert_eq!(gallery.move_to(id(2), id(2)), Ok(false));
        assert_eq!(gallery, before);
    }

    #[test]
    fn moving_the_sole_record_is_noop() {
        let mut gallery = gallery_of(1);
        assert_eq!(gallery.move_to(id(1), id(1)), Ok(false));
        assert_eq!(raw_ids(&gallery), vec![1]);
    }

    #[test]
    fn move_with_unknown_ids_reports_and_leaves_order() {
        let mut gallery = gallery_of(3);
        assert_eq!(
            gallery.move_to(id(9), id(1)),
            Err(GalleryError::UnknownImage(id(9)))
        );
        assert_eq!(
            gallery.move_to(id(1), id(9)),
            Err(GalleryError::UnknownImage(id(9)))
        );
        assert_eq!(raw_ids(&gallery), vec![1, 2, 3]);
    }

    #[test]
    fn move_preserves_the_set_of_ids_for_every_pair() {
        let gallery = gallery_of(6);
        for from in 1..=6 {
            for to in 1..=6 {
                let mut moved = gallery.clone();
                moved.move_to(id(from), id(to)).unwrap();
                let mut ids = raw_ids(&moved);
                ids.sort_unstable();
                assert_eq!(ids, vec![1, 2, 3, 4, 5, 6], "move {from} -> {to}");
                assert_eq!(moved.position(id(from)), gallery.position(id(to)));
            }
        }
    }

    #[test]
    fn preview_move_matches_move_without_mutating() {
        let gallery = gallery_of(5);
        let preview: Vec<u32> = gallery
            .preview_move(id(4), id(1))
            .into_iter()
            .map(|r| r.id().get())
            .collect();
        assert_eq!(preview, vec![4, 1, 2, 3, 5]);
        assert_eq!(raw_ids(&gallery), vec![1, 2, 3, 4, 5]);

        let mut moved = gallery.clone();
        moved.move_to(id(4), id(1)).unwrap();
        assert_eq!(raw_ids(&moved), preview);
    }

    #[test]
    fn preview_move_with_unknown_target_keeps_order() {
        let gallery = gallery_of(3);
        let preview: Vec<u32> = gallery
            .preview_move(id(1), id(7))
            .into_iter()
            .map(|r| r.id().get())
            .collect();
        assert_eq!(preview, vec![1, 2, 3]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut gallery = gallery_of(5);
        gallery.move_to(id(5), id(1)).unwrap();
        let removed = gallery.remove(&HashSet::from([id(2), id(4)]));
        assert_eq!(removed, 2);
        assert_eq!(raw_ids(&gallery), vec![5, 1, 3]);
    }

    #[test]
    fn remove_everything_yields_empty_gallery() {
        let mut gallery = gallery_of(3);
        let all: HashSet<ImageId> = gallery.ids().collect();
        assert_eq!(gallery.remove(&all), 3);
        assert!(gallery.is_empty());
    }

    #[test]
    fn remove_ignores_absent_ids() {
        let mut gallery = gallery_of(2);
        assert_eq!(gallery.remove(&HashSet::from([id(9)])), 0);
        assert_eq!(gallery.len(), 2);
    }
}
