// SPDX-License-Identifier: MPL-2.0
//! Closest-center drop-target resolution.

use iced::{Point, Rectangle};

/// Returns the key of the candidate whose center is nearest to the center of
/// `ghost`, among candidates that overlap `ghost` with a positive area.
///
/// Ties keep the earliest candidate. No overlapping candidate means no
/// target.
pub fn closest_center<K, I>(ghost: Rectangle, candidates: I) -> Option<K>
where
    K: Copy,
    I: IntoIterator<Item = (K, Rectangle)>,
{
    let center = ghost.center();
    let mut best: Option<(K, f32)> = None;

    for (key, rect) in candidates {
        if !overlaps(ghost, rect) {
            continue;
        }
        let distance = squared_distance(center, rect.center());
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((key, distance)),
        }
    }

    best.map(|(key, _)| key)
}

/// Whether the two rectangles share an area greater than zero. Touching
/// edges do not count.
#[must_use]
pub fn overlaps(a: Rectangle, b: Rectangle) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

fn squared_distance(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
