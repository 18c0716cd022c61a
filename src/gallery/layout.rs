// SPDX-License-Identifier: MPL-2.0
//! Grid geometry shared by rendering and drop-target resolution.
//!
//! Rectangles are expressed in grid content coordinates: the origin is the
//! top-left corner of the scrollable grid area, before scrolling. Rendering
//! places tiles at exactly these rectangles and the drag controller hit-tests
//! against them, so what the user sees and what a drop resolves to cannot
//! drift apart.
//!
//! The first tile spans two columns and two rows. Remaining tiles flow in
//! row-major order around it, followed by one "add images" placeholder slot.

use iced::{Point, Rectangle, Size};

/// Horizontal and vertical gap between tiles.
pub const GAP: f32 = 32.0;
/// Left and right inner padding of the grid.
pub const PADDING_X: f32 = 24.0;
/// Space between the top of the scroll area and the first row.
pub const PADDING_TOP: f32 = 32.0;
/// Space after the last row.
pub const PADDING_BOTTOM: f32 = 40.0;
/// Narrowest a column may get before the grid stops shrinking tiles.
pub const MIN_COLUMN_WIDTH: f32 = 48.0;

/// Offset of the selection checkbox from the tile's top-left corner.
pub const CHECKBOX_INSET: f32 = 16.0;
/// Rendered checkbox size.
pub const CHECKBOX_SIZE: f32 = 20.0;
/// Extra margin around the checkbox that still belongs to it rather than to
/// the drag handle.
pub const CHECKBOX_HIT_MARGIN: f32 = 4.0;

/// Column count and row height for one width range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_width: f32,
    pub columns: usize,
    pub row_height: f32,
}

/// Breakpoints in ascending `min_width` order.
pub const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint {
        min_width: 0.0,
        columns: 2,
        row_height: 145.0,
    },
    Breakpoint {
        min_width: 768.0,
        columns: 4,
        row_height: 150.0,
    },
    Breakpoint {
        min_width: 1280.0,
        columns: 5,
        row_height: 150.0,
    },
    Breakpoint {
        min_width: 1536.0,
        columns: 5,
        row_height: 200.0,
    },
];

/// Picks the widest breakpoint whose minimum width fits in `width`.
#[must_use]
pub fn breakpoint_for(width: f32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| width >= bp.min_width)
        .copied()
        .unwrap_or(BREAKPOINTS[0])
}

/// Computed positions of every tile plus the trailing placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    tiles: Vec<Rectangle>,
    placeholder: Rectangle,
    columns: usize,
    content_height: f32,
}

impl GridLayout {
    /// Lays out `tile_count` tiles and the placeholder for a grid `width`
    /// pixels wide.
    #[must_use]
    pub fn compute(width: f32, tile_count: usize) -> Self {
        let breakpoint = breakpoint_for(width);
        let columns = breakpoint.columns;
        let row_height = breakpoint.row_height;
        let column_width = ((width - 2.0 * PADDING_X - GAP * (columns as f32 - 1.0))
            / columns as f32)
            .max(MIN_COLUMN_WIDTH);

        let cell = |row: usize, col: usize, span: usize| {
            let span_f = span as f32;
            Rectangle::new(
                Point::new(
                    PADDING_X + col as f32 * (column_width + GAP),
                    PADDING_TOP + row as f32 * (row_height + GAP),
                ),
                Size::new(
                    column_width * span_f + GAP * (span_f - 1.0),
                    row_height * span_f + GAP * (span_f - 1.0),
                ),
            )
        };

        let featured = tile_count > 0;
        let is_featured_cell = |row: usize, col: usize| featured && row < 2 && col < 2;

        let mut slots = Vec::with_capacity(tile_count + 1);
        let mut cursor = 0usize;
        let mut last_row = 0usize;

        for index in 0..=tile_count {
            if index == 0 && featured {
                slots.push(cell(0, 0, 2));
                last_row = 1;
                continue;
            }
            while is_featured_cell(cursor / columns, cursor % columns) {
                cursor += 1;
            }
            let (row, col) = (cursor / columns, cursor % columns);
            slots.push(cell(row, col, 1));
            last_row = last_row.max(row);
            cursor += 1;
        }

        // The loop always pushes `tile_count + 1` slots.
        let placeholder = slots.pop().unwrap_or_else(|| cell(0, 0, 1));
        let rows = last_row as f32 + 1.0;
        let content_height =
            PADDING_TOP + rows * row_height + (rows - 1.0) * GAP + PADDING_BOTTOM;

        Self {
            tiles: slots,
            placeholder,
            columns,
            content_height,
        }
    }

    /// Slot of the tile shown at display position `index`.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<Rectangle> {
        self.tiles.get(index).copied()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Rectangle] {
        &self.tiles
    }

    #[must_use]
    pub fn placeholder(&self) -> Rectangle {
        self.placeholder
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total height of the grid content, paddings included.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Display position of the tile under `point`, if any. Gaps, paddings and
    /// the placeholder are not tiles.
    #[must_use]
    pub fn tile_at(&self, point: Point) -> Option<usize> {
        self.tiles.iter().position(|rect| rect.contains(point))
    }
}

/// Area of the selection checkbox inside `tile`, hit margin included.
#[must_use]
pub fn checkbox_bounds(tile: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(
            tile.x + CHECKBOX_INSET - CHECKBOX_HIT_MARGIN,
            tile.y + CHECKBOX_INSET - CHECKBOX_HIT_MARGIN,
        ),
        Size::new(
            CHECKBOX_SIZE + 2.0 * CHECKBOX_HIT_MARGIN,
            CHECKBOX_SIZE + 2.0 * CHECKBOX_HIT_MARGIN,
        ),
    )
}

/// Whether a press at `point` should start a drag of `tile`: anywhere on the
/// tile except the checkbox.
#[must_use]
pub fn in_drag_handle(tile: Rectangle, point: Point) -> bool {
    tile.contains(point) && !checkbox_bounds(tile).contains(point)
}
