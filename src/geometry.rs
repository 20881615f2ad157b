//! Integer buffer-space geometry

use serde::{Deserialize, Serialize};

/// A point in buffer space. May lie outside the buffer; drawing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate, saturating at the `i32` limits
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: origin plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink by `by` on every side (grows when negative). Saturates at
    /// the `i32` limits.
    pub const fn inset(self, by: i32) -> Self {
        let twice = by.saturating_mul(2);
        Self {
            x: self.x.saturating_add(by),
            y: self.y.saturating_add(by),
            w: self.w.saturating_sub(twice),
            h: self.h.saturating_sub(twice),
        }
    }

    /// Rightmost column, saturating; only meaningful when not empty
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.w.saturating_sub(1))
    }

    /// Bottom row, saturating; only meaningful when not empty
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.h.saturating_sub(1))
    }

    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Arithmetic mean of the vertices
pub fn centroid(vertices: &[Point]) -> Option<(f64, f64)> {
    if vertices.is_empty() {
        return None;
    }
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
    let n = vertices.len() as f64;
    Some((sx / n, sy / n))
}

/// Closed polygon edges, the last one wrapping back to the first vertex
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Offsets of a centered stroke kernel of side `thickness`.
///
/// Even sizes cover `[-t/2, t/2)`, odd sizes `[-(t-1)/2, (t-1)/2]`.
pub const fn kernel_range(thickness: i32) -> std::ops::Range<i32> {
    if thickness % 2 == 0 {
        -thickness / 2..thickness / 2
    } else {
        -(thickness - 1) / 2..(thickness - 1) / 2 + 1
    }
}
