//! Circle and rectangle collision tests
//!
//! Pure geometry used by the map engine: circle overlap for visibility,
//! point-in-rect plus edge distance for cursor contact.

use glam::Vec2;

/// A circle for overlap tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// True when two circles touch or overlap (boundary contact counts)
#[inline]
pub fn circles_overlap(a: Circle, b: Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// True when `point` lies strictly inside the axis-aligned square of side
/// `size` centered at `rect_center` (a point exactly on an edge is outside)
#[inline]
pub fn point_in_rect(point: Vec2, rect_center: Vec2, size: f32) -> bool {
    let half = size / 2.0;
    point.x > rect_center.x - half
        && point.x < rect_center.x + half
        && point.y > rect_center.y - half
        && point.y < rect_center.y + half
}

/// Minimum distance from `point` to the four edge segments of the
/// axis-aligned square of side `size` centered at `rect_center`
///
/// Zero for points on an edge; interior points get the distance to the
/// nearest edge.
pub fn dist_to_rect_edge(point: Vec2, rect_center: Vec2, size: f32) -> f32 {
    let half = size / 2.0;
    let min = rect_center - Vec2::splat(half);
    let max = rect_center + Vec2::splat(half);

    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(min.x, max.y),
        Vec2::new(max.x, max.y),
        Vec2::new(max.x, min.y),
    ];

    let mut best = f32::MAX;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        best = best.min(dist_to_segment(point, a, b));
    }
    best
}

/// Distance from `point` to the closest point on the segment `a`-`b`
fn dist_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq < 1e-6 {
        // Degenerate segment collapses to a point
        return point.distance(a);
    }

    let t = ((point - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    let closest = a + seg * t;
    point.distance(closest)
}
