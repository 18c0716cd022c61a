// SPDX-License-Identifier: MPL-2.0
//! End-to-end gestures against the gallery model, without a window.

use iced::{Point, Rectangle};
use iced_gallery::gallery::{
    commit_drop, DragConfig, DragSession, Gallery, GridLayout, ImageId, Pointer, Selection,
    Transition,
};
use std::path::PathBuf;

const WIDTH: f32 = 1280.0;

fn gallery_of(count: usize) -> (Gallery, Vec<ImageId>) {
    let gallery = Gallery::load((1..=count).map(|n| PathBuf::from(format!("/photos/{n}.png"))));
    let ids = gallery.ids().collect();
    (gallery, ids)
}

fn slots(gallery: &Gallery) -> Vec<(ImageId, Rectangle)> {
    let layout = GridLayout::compute(WIDTH, gallery.len());
    gallery.ids().zip(layout.tiles().iter().copied()).collect()
}

/// Presses on the tile at `from`, moves until its ghost is centered on the
/// slot at `to`, then releases.
fn drag_between(
    session: &mut DragSession,
    gallery: &mut Gallery,
    pointer: Pointer,
    from: usize,
    to: usize,
) -> Transition {
    let slots = slots(gallery);
    let (id, tile) = slots[from];
    let start = tile.center();
    let end = start + (slots[to].1.center() - tile.center());

    session.press(pointer, id, tile, start);
    session.pointer_moved(pointer, end, &slots);
    let transition = session.release(pointer, end, &slots);
    commit_drop(gallery, transition);
    transition
}

fn order(gallery: &Gallery, ids: &[ImageId]) -> Vec<usize> {
    gallery
        .ids()
        .map(|id| ids.iter().position(|known| *known == id).unwrap() + 1)
        .collect()
}

#[test]
fn mouse_drag_moves_first_image_to_third_slot() {
    let (mut gallery, ids) = gallery_of(4);
    let mut session = DragSession::new(DragConfig::default());

    let transition = drag_between(&mut session, &mut gallery, Pointer::Mouse, 0, 2);

    assert_eq!(
        transition,
        Transition::Dropped {
            active: ids[0],
            over: Some(ids[2])
        }
    );
    assert_eq!(order(&gallery, &ids), vec![2, 3, 1, 4]);
    assert!(session.is_idle());
}

#[test]
fn touch_drag_starts_without_travel() {
    let (mut gallery, ids) = gallery_of(4);
    let mut session = DragSession::new(DragConfig::default());

    drag_between(&mut session, &mut gallery, Pointer::Finger(7), 1, 3);

    assert_eq!(order(&gallery, &ids), vec![1, 3, 4, 2]);
}

#[test]
fn preview_shows_pending_order_until_release() {
    let (gallery, ids) = gallery_of(4);
    let mut session = DragSession::new(DragConfig::default());
    let slots = slots(&gallery);
    let (id, tile) = slots[0];
    let start = tile.center();

    session.press(Pointer::Mouse, id, tile, start);
    session.pointer_moved(
        Pointer::Mouse,
        start + (slots[2].1.center() - tile.center()),
        &slots,
    );

    let preview: Vec<ImageId> = session.preview_order(&gallery);
    assert_eq!(preview, vec![ids[1], ids[2], ids[0], ids[3]]);
    assert_eq!(order(&gallery, &ids), vec![1, 2, 3, 4]);
}

#[test]
fn cancel_mid_drag_keeps_order() {
    let (gallery, ids) = gallery_of(4);
    let mut session = DragSession::new(DragConfig::default());
    let slots = slots(&gallery);
    let (id, tile) = slots[0];

    session.press(Pointer::Mouse, id, tile, tile.center());
    session.pointer_moved(Pointer::Mouse, slots[3].1.center(), &slots);
    assert!(session.is_dragging());

    assert_eq!(session.cancel(), Transition::Cancelled(ids[0]));
    assert_eq!(session.preview_order(&gallery), ids);
}

#[test]
fn short_press_is_a_click() {
    let (mut gallery, ids) = gallery_of(3);
    let mut session = DragSession::new(DragConfig::default());
    let slots = slots(&gallery);
    let (id, tile) = slots[1];
    let start = tile.center();
    let nudge = Point::new(start.x + 3.0, start.y + 3.0);

    session.press(Pointer::Mouse, id, tile, start);
    assert_eq!(session.pointer_moved(Pointer::Mouse, nudge, &slots), Transition::None);
    let transition = session.release(Pointer::Mouse, nudge, &slots);

    assert_eq!(transition, Transition::Clicked(ids[1]));
    assert!(!commit_drop(&mut gallery, transition));
    assert_eq!(order(&gallery, &ids), vec![1, 2, 3]);
}

#[test]
fn drop_outside_every_slot_is_a_no_op() {
    let (mut gallery, ids) = gallery_of(4);
    let mut session = DragSession::new(DragConfig::default());
    let slots = slots(&gallery);
    let (id, tile) = slots[2];
    let far = Point::new(-5000.0, -5000.0);

    session.press(Pointer::Mouse, id, tile, tile.center());
    session.pointer_moved(Pointer::Mouse, far, &slots);
    let transition = session.release(Pointer::Mouse, far, &slots);

    assert_eq!(
        transition,
        Transition::Dropped {
            active: ids[2],
            over: None
        }
    );
    assert!(!commit_drop(&mut gallery, transition));
    assert_eq!(order(&gallery, &ids), vec![1, 2, 3, 4]);
}

#[test]
fn bulk_delete_keeps_relative_order() {
    let (mut gallery, ids) = gallery_of(5);
    let mut selection = Selection::new();
    selection.toggle(&gallery, ids[0]).unwrap();
    selection.toggle(&gallery, ids[2]).unwrap();
    selection.toggle(&gallery, ids[4]).unwrap();

    let removed = gallery.remove(selection.ids());
    selection.clear();

    assert_eq!(removed, 3);
    assert_eq!(order(&gallery, &ids), vec![2, 4]);
    assert!(selection.is_empty());
}

#[test]
fn reorder_then_delete_respects_new_order() {
    let (mut gallery, ids) = gallery_of(4);
    let mut session = DragSession::new(DragConfig::default());
    drag_between(&mut session, &mut gallery, Pointer::Mouse, 3, 0);
    assert_eq!(order(&gallery, &ids), vec![4, 1, 2, 3]);

    let mut selection = Selection::new();
    selection.toggle(&gallery, ids[1]).unwrap();
    gallery.remove(selection.ids());

    assert_eq!(order(&gallery, &ids), vec![4, 1, 3]);
}

#[test]
fn toggling_unknown_id_is_rejected() {
    let (gallery, ids) = gallery_of(2);
    let (other, _) = gallery_of(3);
    let stranger = other.ids().last().unwrap();
    let mut selection = Selection::new();

    assert!(selection.toggle(&gallery, stranger).is_err());
    assert!(selection.toggle(&gallery, ids[0]).unwrap());
}
