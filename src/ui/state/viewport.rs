// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the window size and the grid scrollable's bounds and offset, and
//! maps window positions into grid content coordinates.

use crate::ui::design_tokens::sizing;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::{Point, Rectangle, Size, Vector};

/// Window size assumed until the first resize event arrives.
pub const INITIAL_WINDOW_SIZE: Size = Size::new(1280.0, 800.0);

#[derive(Debug, Clone)]
pub struct ViewportState {
    window: Size,

    /// Current scroll offset of the grid.
    pub offset: AbsoluteOffset,

    /// Grid bounds in window coordinates, as last reported by the scrollable.
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            window: INITIAL_WINDOW_SIZE,
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Records a new window size. Returns true if the grid width changed.
    pub fn resize(&mut self, size: Size) -> bool {
        let width_changed = (self.window.width - size.width).abs() > f32::EPSILON;
        self.window = size;
        // Stale until the scrollable reports again.
        self.bounds = None;
        width_changed
    }

    /// Updates from a scrollable `on_scroll` callback.
    pub fn scrolled(&mut self, viewport: &Viewport) {
        self.offset = viewport.absolute_offset();
        self.bounds = Some(viewport.bounds());
    }

    /// Width available to the grid layout.
    #[must_use]
    pub fn grid_width(&self) -> f32 {
        self.bounds.map_or(self.window.width, |b| b.width)
    }

    /// Visible grid area in window coordinates.
    ///
    /// Falls back to the area below the header and divider when the
    /// scrollable hasn't reported its bounds yet.
    #[must_use]
    pub fn grid_bounds(&self) -> Rectangle {
        self.bounds.unwrap_or_else(|| {
            let top = sizing::HEADER_HEIGHT + sizing::DIVIDER;
            Rectangle::new(
                Point::new(0.0, top),
                Size::new(self.window.width, (self.window.height - top).max(0.0)),
            )
        })
    }

    /// Maps a window position into grid content coordinates.
    /// `None` when the position is outside the visible grid.
    #[must_use]
    pub fn to_content(&self, window_point: Point) -> Option<Point> {
        let bounds = self.grid_bounds();
        bounds
            .contains(window_point)
            .then(|| self.to_content_unchecked(window_point))
    }

    /// Same as [`Self::to_content`] but without the visibility check. Used
    /// while dragging, where the pointer may wander over the header.
    #[must_use]
    pub fn to_content_unchecked(&self, window_point: Point) -> Point {
        let origin = self.grid_bounds().position();
        window_point - Vector::new(origin.x, origin.y) + self.scroll_vector()
    }

    /// Maps a rectangle from grid content coordinates to window coordinates.
    #[must_use]
    pub fn to_window(&self, content: Rectangle) -> Rectangle {
        let origin = self.grid_bounds().position();
        content + Vector::new(origin.x, origin.y) - self.scroll_vector()
    }

    fn scroll_vector(&self) -> Vector {
        Vector::new(self.offset.x, self.offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_viewport_has_zero_offset() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.offset.x, 0.0);
        assert_abs_diff_eq!(state.offset.y, 0.0);
        assert!(state.bounds.is_none());
    }

    #[test]
    fn fallback_grid_starts_below_header() {
        let state = ViewportState::default();
        let bounds = state.grid_bounds();
        assert_abs_diff_eq!(bounds.y, sizing::HEADER_HEIGHT + sizing::DIVIDER);
        assert_abs_diff_eq!(bounds.width, INITIAL_WINDOW_SIZE.width);
    }

    #[test]
    fn to_content_adds_scroll_offset() {
        let mut state = ViewportState::default();
        state.offset = AbsoluteOffset { x: 0.0, y: 120.0 };
        let top = sizing::HEADER_HEIGHT + sizing::DIVIDER;

        let point = state.to_content(Point::new(50.0, top + 10.0)).unwrap();
        assert_abs_diff_eq!(point.x, 50.0);
        assert_abs_diff_eq!(point.y, 130.0);
    }

    #[test]
    fn to_content_rejects_header_positions() {
        let state = ViewportState::default();
        assert!(state.to_content(Point::new(50.0, 10.0)).is_none());
        // Unchecked mapping still works, yielding negative content y.
        assert!(state.to_content_unchecked(Point::new(50.0, 10.0)).y < 0.0);
    }

    #[test]
    fn to_window_inverts_to_content() {
        let mut state = ViewportState::default();
        state.offset = AbsoluteOffset { x: 0.0, y: 64.0 };
        let content = Rectangle::new(Point::new(24.0, 300.0), Size::new(100.0, 80.0));

        let window = state.to_window(content);
        let back = state.to_content_unchecked(window.position());
        assert_abs_diff_eq!(back.x, content.x);
        assert_abs_diff_eq!(back.y, content.y);
    }

    #[test]
    fn resize_reports_width_changes_only() {
        let mut state = ViewportState::default();
        assert!(!state.resize(Size::new(INITIAL_WINDOW_SIZE.width, 600.0)));
        assert!(state.resize(Size::new(800.0, 600.0)));
        assert_abs_diff_eq!(state.grid_width(), 800.0);
    }
}
