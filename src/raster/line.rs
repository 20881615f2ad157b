use log::trace;

use super::DrawStyle;
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::{kernel_range, Point};

// ============================================================================
// Bresenham stepping
// ============================================================================

/// Integer Bresenham walk over every point of a segment, both endpoints
/// included.
///
/// Endpoints are put in a canonical order first, so a segment steps through
/// the same pixels whichever way round it was given.
#[derive(Debug, Clone)]
pub(crate) struct Bresenham {
    x: i32,
    y: i32,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Bresenham {
    pub(crate) fn new(from: Point, to: Point) -> Self {
        let (from, to) = if (to.x, to.y) < (from.x, from.y) {
            (to, from)
        } else {
            (from, to)
        };
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = (to.y as i64 - from.y as i64).abs();
        Self {
            x: from.x,
            y: from.y,
            end: to,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = Point::new(self.x, self.y);
        if p == self.end {
            self.done = true;
            return Some(p);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(p)
    }
}

// ============================================================================
// Coverage
// ============================================================================

/// Which side of an antialiased line gets fractional coverage.
///
/// Wu-style lines split each step between the pixel at `floor(intery)`
/// ("upper") and the one after it ("lower"), in the line's own frame: rows
/// for shallow lines, columns for steep ones. A solid side is drawn at the
/// stroke's full alpha instead, so overlapping edges do not darken each other
/// on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coverage {
    #[default]
    Both,
    SolidUpper,
    SolidLower,
}

impl Coverage {
    /// Coverage for an edge whose interior contains `inside`: the side facing
    /// `inside` is solid, the outward side keeps its falloff.
    pub fn facing(from: Point, to: Point, inside: (f64, f64)) -> Self {
        let (steep, a, b) = wu_frame(from, to);
        if a == b {
            return Self::Both;
        }
        let (cu, cv) = if steep { (inside.1, inside.0) } else { inside };
        let gradient = (b.y as f64 - a.y as f64) / (b.x as f64 - a.x as f64);
        let v = a.y as f64 + gradient * (cu - a.x as f64);

        if cv > v {
            Self::SolidLower
        } else if cv < v {
            Self::SolidUpper
        } else {
            Self::Both
        }
    }
}

/// Transpose steep segments and order them left to right.
/// Returns (steep, start, end) in the transposed frame.
fn wu_frame(from: Point, to: Point) -> (bool, Point, Point) {
    let steep = (to.y as i64 - from.y as i64).abs() > (to.x as i64 - from.x as i64).abs();
    let (mut a, mut b) = if steep {
        (Point::new(from.y, from.x), Point::new(to.y, to.x))
    } else {
        (from, to)
    };
    if a.x > b.x {
        std::mem::swap(&mut a, &mut b);
    }
    (steep, a, b)
}

// ============================================================================
// Line drawing
// ============================================================================

impl PixelBuffer {
    /// Draw a line between two points.
    ///
    /// Only `antialias`, `blend` and `thickness` of the style are used; the
    /// stroke color is `color`. Thick lines stamp the line at every offset of
    /// a centered `thickness` x `thickness` kernel.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, style: &DrawStyle) -> Result<()> {
        style.check_thickness("line")?;
        trace!(
            "line ({}, {}) -> ({}, {}) color={:#010x} thickness={} aa={}",
            from.x,
            from.y,
            to.x,
            to.y,
            color.0,
            style.thickness,
            style.antialias
        );
        self.line_stroke(from, to, color, style.blend, style.thickness, style.antialias, Coverage::Both);
        Ok(())
    }

    /// Thick stroke. With antialiasing only the outermost ring of the kernel
    /// is drawn with coverage; interior offsets are solid so they do not
    /// blend over each other.
    pub(crate) fn line_stroke(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        blending: bool,
        thickness: i32,
        antialias: bool,
        coverage: Coverage,
    ) {
        let range = kernel_range(thickness);
        let (first, last) = (range.start, range.end - 1);

        for ox in range.clone() {
            for oy in range.clone() {
                let (a, b) = (from.offset(ox, oy), to.offset(ox, oy));
                let ring = ox == first || oy == first || ox == last || oy == last;
                if antialias && ring {
                    self.line_aa(a, b, color, blending, coverage);
                } else {
                    self.line(a, b, color, blending);
                }
            }
        }
    }

    /// Single-pixel Bresenham line, both endpoints inclusive
    pub(crate) fn line(&mut self, from: Point, to: Point, color: Color, blending: bool) {
        if self.outside_same_side(from, to) {
            return;
        }
        // The walk runs in canonical order: x never decreases and y moves
        // one way only, so it can stop as soon as it has left the buffer
        let descending = if (to.x, to.y) < (from.x, from.y) {
            from.y < to.y
        } else {
            to.y < from.y
        };
        for p in Bresenham::new(from, to) {
            if p.x >= self.width() || (descending && p.y < 0) || (!descending && p.y >= self.height()) {
                break;
            }
            self.set_pixel(p.x, p.y, color, blending);
        }
    }

    /// Xiaolin Wu style antialiased line.
    ///
    /// Endpoints are drawn at full opacity; every step in between splits the
    /// stroke alpha between two neighbouring pixels by the fractional part of
    /// the running intercept.
    pub(crate) fn line_aa(&mut self, from: Point, to: Point, color: Color, blending: bool, coverage: Coverage) {
        if self.outside_same_side(from, to) {
            return;
        }
        let (steep, a, b) = wu_frame(from, to);
        let dx = b.x as i64 - a.x as i64;
        let dy = b.y as i64 - a.y as i64;
        let gradient = if dx == 0 { 1.0 } else { dy as f64 / dx as f64 };

        self.plot_frame(steep, a.x, a.y, color, blending);
        self.plot_frame(steep, b.x, b.y, color, blending);

        let max_alpha = color.a();
        // Steps outside the buffer along the major axis write nothing
        let limit = if steep { self.height() } else { self.width() };
        let first = a.x.saturating_add(1).max(0);
        let mut intery = a.y as f64 + gradient * (first as f64 - a.x as f64);
        for u in first..b.x.min(limit) {
            let base = intery.floor();
            let fpart = intery - base;
            let rfpart = 1.0 - fpart;
            // A solid side still leaves pixels the stroke does not reach
            let upper = match coverage {
                Coverage::SolidUpper => max_alpha,
                _ => (rfpart * max_alpha as f64) as u8,
            };
            let lower = match coverage {
                Coverage::SolidLower if fpart > 0.0 => max_alpha,
                _ => (fpart * max_alpha as f64) as u8,
            };

            let v = base as i32;
            self.plot_frame(steep, u, v, color.with_alpha(upper), blending);
            self.plot_frame(steep, u, v.saturating_add(1), color.with_alpha(lower), blending);
            intery += gradient;
        }
    }

    /// Plot in the (possibly transposed) Wu frame. Zero coverage is skipped
    /// so unblended strokes never punch transparent holes.
    #[inline]
    fn plot_frame(&mut self, steep: bool, u: i32, v: i32, color: Color, blending: bool) {
        if color.a() == 0 {
            return;
        }
        if steep {
            self.set_pixel(v, u, color, blending);
        } else {
            self.set_pixel(u, v, color, blending);
        }
    }

    /// Trivial reject: both endpoints beyond the same buffer edge
    fn outside_same_side(&self, a: Point, b: Point) -> bool {
        (a.x < 0 && b.x < 0)
            || (a.y < 0 && b.y < 0)
            || (a.x >= self.width() && b.x >= self.width())
            || (a.y >= self.height() && b.y >= self.height())
    }
}
