// SPDX-License-Identifier: MPL-2.0
//! Gallery component: owns the gallery, the selection and the drag session,
//! and is the only place any of them is mutated.
//!
//! Raw pointer events arrive from the app subscription in window
//! coordinates. They are mapped into grid content coordinates through
//! [`ViewportState`] and fed to the [`DragSession`], whose transitions are
//! applied here.

use super::{header, overlay, tile, ViewEnv};
use crate::gallery::drag::{commit_drop, Transition};
use crate::gallery::layout::{self, GridLayout};
use crate::gallery::{DragConfig, DragSession, Gallery, ImageId, ImageRecord, Pointer, Selection};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::ViewportState;
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{mouse_area, Column, Container, Scrollable, Stack, Text};
use iced::{alignment, mouse, Element, Length, Padding, Point, Rectangle, Size};
use std::path::{Path, PathBuf};

/// Pointer input routed from the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    CursorMoved(Point),
    CursorLeft,
    /// Left button down at the last known cursor position.
    MousePressed,
    MouseReleased,
    FingerPressed { id: u64, position: Point },
    FingerMoved { id: u64, position: Point },
    FingerLifted { id: u64, position: Point },
    FingerLost(u64),
    /// Escape, focus loss.
    Cancel,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSelected(ImageId),
    DeleteSelected,
    Scrolled(Viewport),
    WindowResized(Size),
    Pointer(PointerEvent),
}

/// Effects the app has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// This many records were removed by a bulk delete.
    Deleted(usize),
}

#[derive(Debug, Clone)]
pub struct State {
    gallery: Gallery,
    selection: Selection,
    drag: DragSession,
    viewport: ViewportState,
    layout: GridLayout,
    hovered: Option<ImageId>,
    /// Last mouse position in window coordinates.
    cursor: Option<Point>,
    /// Last finger contact in window coordinates. Kept after the lift so a
    /// tap reveals the checkbox of the tile it landed on.
    finger: Option<(u64, Point)>,
    assets_dir: PathBuf,
}

impl State {
    pub fn new(gallery: Gallery, drag: DragConfig, assets_dir: PathBuf) -> Self {
        let viewport = ViewportState::default();
        let layout = GridLayout::compute(viewport.grid_width(), gallery.len());
        Self {
            gallery,
            selection: Selection::new(),
            drag: DragSession::new(drag),
            viewport,
            layout,
            hovered: None,
            cursor: None,
            finger: None,
            assets_dir,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ImageId> {
        self.hovered
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ToggleSelected(id) => {
                match self.selection.toggle(&self.gallery, id) {
                    Ok(selected) => tracing::debug!(%id, selected, "selection toggled"),
                    Err(err) => tracing::warn!(%err, "ignoring selection toggle"),
                }
                Effect::None
            }
            Message::DeleteSelected => self.delete_selected(),
            Message::Scrolled(viewport) => {
                self.viewport.scrolled(&viewport);
                self.after_scroll();
                Effect::None
            }
            Message::WindowResized(size) => {
                if self.viewport.resize(size) {
                    tracing::debug!(width = size.width, "grid width changed");
                }
                self.relayout();
                self.refresh_hover();
                Effect::None
            }
            Message::Pointer(event) => {
                self.handle_pointer(event);
                Effect::None
            }
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::CursorMoved(position) => {
                self.cursor = Some(position);
                if self.drag.is_idle() {
                    self.finger = None;
                }
                self.pointer_moved(Pointer::Mouse, position);
                self.refresh_hover();
            }
            PointerEvent::CursorLeft => {
                self.cursor = None;
                let transition = self.drag.cancel_for(Pointer::Mouse);
                self.apply(transition);
                self.refresh_hover();
            }
            PointerEvent::MousePressed => {
                if let Some(position) = self.cursor {
                    self.press(Pointer::Mouse, position);
                }
            }
            PointerEvent::MouseReleased => match self.cursor {
                Some(position) => self.release(Pointer::Mouse, position),
                None => {
                    let transition = self.drag.cancel_for(Pointer::Mouse);
                    self.apply(transition);
                }
            },
            PointerEvent::FingerPressed { id, position } => {
                self.track_finger(id, position);
                self.press(Pointer::Finger(id), position);
                self.refresh_hover();
            }
            PointerEvent::FingerMoved { id, position } => {
                self.track_finger(id, position);
                self.pointer_moved(Pointer::Finger(id), position);
            }
            PointerEvent::FingerLifted { id, position } => {
                self.track_finger(id, position);
                self.release(Pointer::Finger(id), position);
            }
            PointerEvent::FingerLost(id) => {
                if self.finger.is_some_and(|(finger, _)| finger == id) {
                    self.finger = None;
                }
                let transition = self.drag.cancel_for(Pointer::Finger(id));
                self.apply(transition);
                self.refresh_hover();
            }
            PointerEvent::Cancel => {
                let transition = self.drag.cancel();
                self.apply(transition);
            }
        }
    }

    /// Remembers a finger contact unless another device owns the gesture.
    fn track_finger(&mut self, id: u64, position: Point) {
        let owns = match self.drag.pointer() {
            None => true,
            Some(pointer) => pointer == Pointer::Finger(id),
        };
        if owns {
            self.finger = Some((id, position));
        }
    }

    /// The content under a still pointer moved; keep the drag target and
    /// hover on what is under it now.
    fn after_scroll(&mut self) {
        self.relayout();
        let owner = self.drag.pointer().and_then(|pointer| {
            let window_point = match pointer {
                Pointer::Mouse => self.cursor,
                Pointer::Finger(id) => self
                    .finger
                    .filter(|(finger, _)| *finger == id)
                    .map(|(_, position)| position),
            }?;
            Some((pointer, window_point))
        });
        if let Some((pointer, window_point)) = owner {
            self.pointer_moved(pointer, window_point);
        }
        self.refresh_hover();
    }

    fn press(&mut self, pointer: Pointer, window_point: Point) {
        let Some(at) = self.viewport.to_content(window_point) else {
            return;
        };
        let Some(index) = self.layout.tile_at(at) else {
            return;
        };
        let (Some(tile), Some(record)) = (self.layout.tile(index), self.gallery.records().get(index))
        else {
            return;
        };
        if !layout::in_drag_handle(tile, at) {
            return;
        }
        let transition = self.drag.press(pointer, record.id(), tile, at);
        self.apply(transition);
    }

    fn pointer_moved(&mut self, pointer: Pointer, window_point: Point) {
        if self.drag.is_idle() {
            return;
        }
        let at = self.viewport.to_content_unchecked(window_point);
        let slots = self.slots();
        let transition = self.drag.pointer_moved(pointer, at, &slots);
        self.apply(transition);
    }

    fn release(&mut self, pointer: Pointer, window_point: Point) {
        let at = self.viewport.to_content_unchecked(window_point);
        let slots = self.slots();
        let transition = self.drag.release(pointer, at, &slots);
        self.apply(transition);
        self.refresh_hover();
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None | Transition::Armed => {}
            Transition::Started(id) => {
                self.hovered = None;
                tracing::debug!(%id, "drag started");
            }
            Transition::Moved { over } => {
                tracing::trace!(over = ?over, "drag moved");
            }
            Transition::Clicked(id) => {
                tracing::debug!(%id, "press released before drag activation");
            }
            Transition::Dropped { active, over } => {
                if commit_drop(&mut self.gallery, transition) {
                    tracing::info!(%active, over = ?over, "gallery reordered");
                } else {
                    tracing::debug!(%active, over = ?over, "drop left order unchanged");
                }
            }
            Transition::Cancelled(id) => {
                tracing::debug!(%id, "drag cancelled");
            }
        }
    }

    fn delete_selected(&mut self) -> Effect {
        if self.selection.is_empty() {
            return Effect::None;
        }
        // A drag can't survive its tile disappearing.
        let transition = self.drag.cancel();
        self.apply(transition);

        let removed = self.gallery.remove(self.selection.ids());
        self.selection.clear();
        self.relayout();
        self.refresh_hover();
        tracing::info!(removed, remaining = self.gallery.len(), "deleted selected images");
        Effect::Deleted(removed)
    }

    /// Every id paired with its slot in the committed order.
    fn slots(&self) -> Vec<(ImageId, Rectangle)> {
        self.gallery
            .ids()
            .zip(self.layout.tiles().iter().copied())
            .collect()
    }

    fn relayout(&mut self) {
        self.layout = GridLayout::compute(self.viewport.grid_width(), self.gallery.len());
    }

    fn refresh_hover(&mut self) {
        let hover_point = self.cursor.or(self.finger.map(|(_, position)| position));
        self.hovered = if self.drag.is_idle() {
            hover_point
                .and_then(|cursor| self.viewport.to_content(cursor))
                .and_then(|at| self.layout.tile_at(at))
                .and_then(|index| self.gallery.records().get(index))
                .map(|record| record.id())
        } else {
            None
        };
    }

    fn tile_model<'a>(&self, record: &'a ImageRecord, slot: Rectangle) -> tile::TileModel<'a> {
        let id = record.id();
        tile::TileModel {
            record,
            size: slot.size(),
            selected: self.selection.is_selected(id),
            hovered: self.hovered == Some(id),
            dragging: self.drag.active().is_some_and(|drag| drag.active() == id),
            touch_drag: self.drag.config().touch_enabled,
        }
    }

    /// Dragged record and where to draw it, in window coordinates.
    fn overlay(&self) -> Option<(&ImageRecord, Rectangle)> {
        let drag = self.drag.active()?;
        let record = self.gallery.get(drag.active())?;
        let target_slot = drag
            .over()
            .and_then(|over| self.gallery.position(over))
            .and_then(|index| self.layout.tile(index));
        let bounds = self.drag.overlay_bounds(target_slot)?;
        Some((record, self.viewport.to_window(bounds)))
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let divider = Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DIVIDER))
            .style(styles::container::divider);

        let grid = Scrollable::new(self.view_grid(env))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(Scrollbar::default()))
            .on_scroll(Message::Scrolled);

        let interaction = if self.drag.is_dragging() {
            mouse::Interaction::Grabbing
        } else if self.hovered.is_some() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        };

        let card = Container::new(
            Column::new()
                .push(header::view(env.i18n, self.selection.len()))
                .push(divider)
                .push(mouse_area(grid).interaction(interaction)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface);

        Stack::new()
            .push(card)
            .push(overlay::view(self.overlay()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_grid<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let mut tiles = Stack::new();

        for (index, id) in self.drag.preview_order(&self.gallery).into_iter().enumerate() {
            let (Some(slot), Some(record)) = (self.layout.tile(index), self.gallery.get(id)) else {
                continue;
            };
            tiles = tiles.push(positioned(tile::view(self.tile_model(record, slot)), slot));
        }

        let placeholder = self.layout.placeholder();
        tiles = tiles.push(positioned(
            tile::view_add_images(env.i18n, placeholder.size()),
            placeholder,
        ));

        let tiles = tiles
            .width(Length::Fill)
            .height(Length::Fixed(self.layout.content_height()));

        if !self.gallery.is_empty() {
            return tiles.into();
        }

        let dir = self.assets_dir.display().to_string();
        let empty_state = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(env.i18n.tr("gallery-empty-state")).size(typography::TITLE_MD))
            .push(
                Text::new(env.i18n.tr_with_args("gallery-empty-hint", &[("dir", dir.as_str())]))
                    .size(typography::BODY_SM),
            );

        Column::new()
            .push(tiles)
            .push(
                Container::new(empty_state)
                    .width(Length::Fill)
                    .padding(spacing::XL)
                    .align_x(alignment::Horizontal::Center),
            )
            .into()
    }
}

/// Places `content` at `slot` inside a full-size stack layer.
fn positioned<'a>(content: Element<'a, Message>, slot: Rectangle) -> Element<'a, Message> {
    Container::new(content)
        .padding(Padding {
            top: slot.y,
            left: slot.x,
            ..Padding::ZERO
        })
        .into()
}
