// SPDX-License-Identifier: MPL-2.0
//! Drag-to-reorder state machine.
//!
//! A session is idle until a pointer goes down on a tile. Mouse presses stay
//! pending until the cursor travels past the activation distance, so a plain
//! click never turns into a drag. Touch presses activate at once.
//!
//! All positions are in grid content coordinates (see
//! [`layout`](super::layout)). While dragging, the session keeps the tile the
//! pointer is currently over, resolved with [`closest_center`] against the
//! slots of the real, uncommitted order.

use super::collision::closest_center;
use super::record::ImageId;
use super::store::Gallery;
use iced::{Point, Rectangle, Size, Vector};

/// Default travel, in logical pixels, before a mouse press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f32 = 10.0;

/// Which input device owns the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(u64),
}

/// Activation settings, loaded from the `[drag]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    pub activation_distance: f32,
    pub touch_enabled: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            touch_enabled: true,
        }
    }
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pointer: Pointer,
    active: ImageId,
    origin: Point,
    tile: Rectangle,
    current: Point,
    over: Option<ImageId>,
}

impl ActiveDrag {
    #[must_use]
    pub fn active(&self) -> ImageId {
        self.active
    }

    /// Tile currently under the dragged ghost, if any.
    #[must_use]
    pub fn over(&self) -> Option<ImageId> {
        self.over
    }

    #[must_use]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// The dragged tile's rectangle, translated by the pointer travel.
    #[must_use]
    pub fn ghost(&self) -> Rectangle {
        self.tile + Vector::new(self.current.x - self.origin.x, self.current.y - self.origin.y)
    }

    /// The ghost rescaled to `size`, keeping the grab point at the same
    /// relative spot under the pointer.
    #[must_use]
    pub fn ghost_sized(&self, size: Size) -> Rectangle {
        let rel_x = if self.tile.width > 0.0 {
            (self.origin.x - self.tile.x) / self.tile.width
        } else {
            0.0
        };
        let rel_y = if self.tile.height > 0.0 {
            (self.origin.y - self.tile.y) / self.tile.height
        } else {
            0.0
        };
        Rectangle::new(
            Point::new(
                self.current.x - rel_x * size.width,
                self.current.y - rel_y * size.height,
            ),
            size,
        )
    }

    fn retarget(&mut self, slots: &[(ImageId, Rectangle)]) {
        self.over = closest_center(self.ghost(), slots.iter().copied());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed {
        pointer: Pointer,
        id: ImageId,
        origin: Point,
        tile: Rectangle,
    },
    Dragging(ActiveDrag),
}

/// What a pointer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    None,
    /// A press was recorded but has not activated yet.
    Armed,
    /// The drag of `id` became active.
    Started(ImageId),
    /// The ghost moved; `over` is the new drop target.
    Moved { over: Option<ImageId> },
    /// A press ended before activating.
    Clicked(ImageId),
    /// The drag ended over `over`. The caller commits the move.
    Dropped {
        active: ImageId,
        over: Option<ImageId>,
    },
    /// The drag was abandoned and the order must stay as it was.
    Cancelled(ImageId),
}

/// Gesture state for one gallery view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    config: DragConfig,
    phase: Phase,
}

impl DragSession {
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> DragConfig {
        self.config
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Device that owns the current gesture, pressed or dragging.
    #[must_use]
    pub fn pointer(&self) -> Option<Pointer> {
        match self.phase {
            Phase::Idle => None,
            Phase::Pressed { pointer, .. } => Some(pointer),
            Phase::Dragging(drag) => Some(drag.pointer),
        }
    }

    /// The active drag, when one is in progress.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.phase {
            Phase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Pointer down on the drag handle of tile `id` laid out at `tile`.
    ///
    /// Ignored while another gesture is in progress, and for touch input when
    /// touch dragging is disabled.
    pub fn press(&mut self, pointer: Pointer, id: ImageId, tile: Rectangle, at: Point) -> Transition {
        if !self.is_idle() {
            return Transition::None;
        }
        match pointer {
            Pointer::Finger(_) if !self.config.touch_enabled => Transition::None,
            Pointer::Finger(_) => {
                self.phase = Phase::Dragging(ActiveDrag {
                    pointer,
                    active: id,
                    origin: at,
                    tile,
                    current: at,
                    over: Some(id),
                });
                Transition::Started(id)
            }
            Pointer::Mouse => {
                self.phase = Phase::Pressed {
                    pointer,
                    id,
                    origin: at,
                    tile,
                };
                Transition::Armed
            }
        }
    }

    /// Pointer moved to `at`. `slots` pairs every id with its slot in the
    /// current committed order.
    pub fn pointer_moved(
        &mut self,
        pointer: Pointer,
        at: Point,
        slots: &[(ImageId, Rectangle)],
    ) -> Transition {
        match self.phase {
            Phase::Idle => Transition::None,
            Phase::Pressed {
                pointer: owner,
                id,
                origin,
                tile,
            } => {
                if owner != pointer || origin.distance(at) <= self.config.activation_distance {
                    return Transition::None;
                }
                let mut drag = ActiveDrag {
                    pointer,
                    active: id,
                    origin,
                    tile,
                    current: at,
                    over: None,
                };
                drag.retarget(slots);
                self.phase = Phase::Dragging(drag);
                Transition::Started(id)
            }
            Phase::Dragging(mut drag) => {
                if drag.pointer != pointer {
                    return Transition::None;
                }
                drag.current = at;
                drag.retarget(slots);
                self.phase = Phase::Dragging(drag);
                Transition::Moved { over: drag.over }
            }
        }
    }

    /// Pointer released at `at`. The drop target is resolved one last time
    /// from the release position.
    pub fn release(
        &mut self,
        pointer: Pointer,
        at: Point,
        slots: &[(ImageId, Rectangle)],
    ) -> Transition {
        match self.phase {
            Phase::Idle => Transition::None,
            Phase::Pressed {
                pointer: owner, id, ..
            } => {
                if owner != pointer {
                    return Transition::None;
                }
                self.phase = Phase::Idle;
                Transition::Clicked(id)
            }
            Phase::Dragging(mut drag) => {
                if drag.pointer != pointer {
                    return Transition::None;
                }
                drag.current = at;
                drag.retarget(slots);
                self.phase = Phase::Idle;
                Transition::Dropped {
                    active: drag.active,
                    over: drag.over,
                }
            }
        }
    }

    /// Abandons any gesture, whoever owns it. Escape and focus loss land
    /// here.
    pub fn cancel(&mut self) -> Transition {
        let transition = match self.phase {
            Phase::Dragging(drag) => Transition::Cancelled(drag.active),
            Phase::Idle | Phase::Pressed { .. } => Transition::None,
        };
        self.phase = Phase::Idle;
        transition
    }

    /// Abandons the gesture only if `pointer` owns it. A lost finger or the
    /// cursor leaving the window must not end a drag held by another device.
    pub fn cancel_for(&mut self, pointer: Pointer) -> Transition {
        if self.pointer() == Some(pointer) {
            self.cancel()
        } else {
            Transition::None
        }
    }

    /// Ids in the order the grid should show them right now: the committed
    /// order, or what it would become if the drag dropped where it is.
    #[must_use]
    pub fn preview_order(&self, gallery: &Gallery) -> Vec<ImageId> {
        match self.active() {
            Some(drag) => match drag.over {
                Some(over) => gallery
                    .preview_move(drag.active, over)
                    .into_iter()
                    .map(|record| record.id())
                    .collect(),
                None => gallery.ids().collect(),
            },
            None => gallery.ids().collect(),
        }
    }

    /// Where the drag overlay should be drawn, sized like `target_slot`
    /// (the slot of the current drop target) when given.
    #[must_use]
    pub fn overlay_bounds(&self, target_slot: Option<Rectangle>) -> Option<Rectangle> {
        self.active().map(|drag| match target_slot {
            Some(slot) => drag.ghost_sized(slot.size()),
            None => drag.ghost(),
        })
    }
}

/// Applies a finished drag to `gallery`. Returns whether the order changed.
///
/// Dropping outside every slot, or back onto the dragged tile, is a no-op.
pub fn commit_drop(gallery: &mut Gallery, transition: Transition) -> bool {
    let Transition::Dropped {
        active,
        over: Some(over),
    } = transition
    else {
        return false;
    };
    match gallery.move_to(active, over) {
        Ok(moved) => moved,
        Err(err) => {
            tracing::warn!(%err, "ignoring drop");
            false
        }
    }
}
