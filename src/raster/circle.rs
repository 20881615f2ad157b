use log::trace;

use super::{reject, DrawStyle};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{GeometryError, Result};
use crate::geometry::Point;

/// Inner and outer radius of a thick ring centred on `radius`
const fn annulus_radii(radius: i32, thickness: i32) -> (i64, i64) {
    let (radius, thickness) = (radius as i64, thickness as i64);
    let inner = radius - thickness / 2;
    let outer = if thickness % 2 == 0 {
        radius + thickness / 2 - 1
    } else {
        radius + thickness / 2
    };
    (inner, outer)
}

/// `base + d`, clamped into `i32`. Clamped values are off the buffer anyway.
fn shift(base: i32, d: i64) -> i32 {
    (base as i64 + d).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl PixelBuffer {
    /// Draw a circle: fill first, then the border on top.
    ///
    /// A radius of 0 sets just the center pixel. With antialiasing and a fill
    /// but no border, the fill edge is softened with a one-pixel antialiased
    /// ring in the fill color.
    pub fn draw_circle(&mut self, center: Point, radius: i32, style: &DrawStyle) -> Result<()> {
        if radius < 0 {
            return Err(reject("circle", GeometryError::NegativeRadius(radius)));
        }
        style.check_thickness("circle")?;
        trace!(
            "circle ({}, {}) r={} thickness={} aa={}",
            center.x,
            center.y,
            radius,
            style.thickness,
            style.antialias
        );

        let border = style.border_color();
        let fill = style.fill_color();
        if radius == 0 {
            if let Some(color) = border.or(fill) {
                self.set_pixel(center.x, center.y, color, style.blend);
            }
            return Ok(());
        }
        if !self.circle_in_reach(center, radius as i64 + style.thickness as i64) {
            return Ok(());
        }

        if let Some(color) = fill {
            self.circle_fill(center, radius, color, style.blend);
        }
        match (border, fill) {
            (Some(color), _) if style.antialias => {
                self.circle_aa_stroke(center, radius, color, style.blend, style.thickness);
            },
            (Some(color), _) => {
                self.circle_stroke(center, radius, color, style.blend, style.thickness);
            },
            (None, Some(color)) if style.antialias => {
                self.circle_aa(center, radius as i64, color, style.blend);
            },
            _ => {},
        }
        Ok(())
    }

    /// Whether the square of half-side `reach` around `c` meets the buffer
    fn circle_in_reach(&self, c: Point, reach: i64) -> bool {
        let (x, y) = (c.x as i64, c.y as i64);
        x + reach >= 0
            && y + reach >= 0
            && x - reach < self.width() as i64
            && y - reach < self.height() as i64
    }

    /// Plot `(x, y)` mirrored into all 8 octants, each distinct pixel once
    fn plot_octants(&mut self, c: Point, x: i64, y: i64, color: Color, blending: bool) {
        let points = [
            (shift(c.x, x), shift(c.y, y)),
            (shift(c.x, -x), shift(c.y, -y)),
            (shift(c.x, y), shift(c.y, x)),
            (shift(c.x, -y), shift(c.y, x)),
            (shift(c.x, x), shift(c.y, -y)),
            (shift(c.x, -x), shift(c.y, y)),
            (shift(c.x, y), shift(c.y, -x)),
            (shift(c.x, -y), shift(c.y, -x)),
        ];
        for (i, &(px, py)) in points.iter().enumerate() {
            if !points[..i].contains(&(px, py)) {
                self.set_pixel(px, py, color, blending);
            }
        }
    }

    // ========================================================================
    // Stroke
    // ========================================================================

    fn circle_stroke(&mut self, c: Point, radius: i32, color: Color, blending: bool, thickness: i32) {
        if thickness == 1 {
            self.circle_outline(c, radius as i64, color, blending);
        } else {
            self.circle_annulus(c, radius, color, blending, thickness);
        }
    }

    /// Midpoint circle, one pixel per step per octant
    fn circle_outline(&mut self, c: Point, radius: i64, color: Color, blending: bool) {
        let mut x = radius;
        let mut y = 0;
        let mut e = -radius;

        while x >= y {
            self.plot_octants(c, x, y, color, blending);

            e += 2 * y + 1;
            y += 1;
            if e >= 0 {
                e -= 2 * x + 1;
                x -= 1;
            }
        }
    }

    /// Thick ring: walk the inner and outer radius together and join them
    /// with straight segments in every octant.
    fn circle_annulus(&mut self, c: Point, radius: i32, color: Color, blending: bool, thickness: i32) {
        let (inner, outer) = annulus_radii(radius, thickness);
        let inner = inner.max(0);

        let mut xo = outer;
        let mut xi = inner;
        let mut y = 0;
        let mut erro = 1 - xo;
        let mut erri = 1 - xi;

        while xo >= y {
            let segments = [
                ((xi, y), (xo, y)),
                ((y, xi), (y, xo)),
                ((-xo, y), (-xi, y)),
                ((-y, xi), (-y, xo)),
                ((-xo, -y), (-xi, -y)),
                ((-y, -xo), (-y, -xi)),
                ((xi, -y), (xo, -y)),
                ((y, -xo), (y, -xi)),
            ];
            for ((ax, ay), (bx, by)) in segments {
                let a = Point::new(shift(c.x, ax), shift(c.y, ay));
                let b = Point::new(shift(c.x, bx), shift(c.y, by));
                self.line(a, b, color, blending);
            }

            y += 1;
            if erro < 0 {
                erro += 2 * y + 1;
            } else {
                xo -= 1;
                erro += 2 * (y - xo + 1);
            }

            // Once the inner walk would cross the diagonal it hugs it instead
            if y > inner {
                xi = y;
            } else if erri < 0 {
                erri += 2 * y + 1;
            } else {
                xi -= 1;
                erri += 2 * (y - xi + 1);
            }
        }
    }

    // ========================================================================
    // Antialiased stroke
    // ========================================================================

    /// Thick antialiased ring: the solid annulus plus antialiased rings along
    /// both of its edges
    fn circle_aa_stroke(&mut self, c: Point, radius: i32, color: Color, blending: bool, thickness: i32) {
        if thickness == 1 {
            self.circle_aa(c, radius as i64, color, blending);
            return;
        }
        let (inner, outer) = annulus_radii(radius, thickness);
        self.circle_annulus(c, radius, color, blending, thickness);
        if inner > 0 {
            self.circle_aa(c, inner, color, blending);
        }
        self.circle_aa(c, outer, color, blending);
    }

    /// One-pixel antialiased ring.
    ///
    /// Samples the true circle height once per column of one octant. Each
    /// column fades the current row out and the next one down in; when the
    /// fade wraps around the walk drops a row.
    fn circle_aa(&mut self, c: Point, radius: i64, color: Color, blending: bool) {
        let max_alpha = color.a();
        let sq_r = radius * radius;

        let mut i: i64 = 0;
        let mut j = radius;
        let mut last_fade = 0u8;

        while i < j {
            let height = ((sq_r - i * i).max(0) as f64).sqrt();
            let fade = (max_alpha as f64 * (height.ceil() - height)) as u8;
            if fade < last_fade {
                j -= 1;
            }
            last_fade = fade;

            let fading_out = max_alpha - fade;
            if fading_out > 0 {
                self.plot_octants(c, i, j, color.with_alpha(fading_out), blending);
            }
            if fade > 0 {
                self.plot_octants(c, i, j - 1, color.with_alpha(fade), blending);
            }
            i += 1;
        }
    }

    // ========================================================================
    // Fill
    // ========================================================================

    /// Filled disk from horizontal spans along the midpoint walk.
    ///
    /// Rows at `c.y ± y` are drawn as the walk reaches them; rows at
    /// `c.y ± x` only once their span is at its widest, just before `x`
    /// steps in. Every row is written exactly once.
    fn circle_fill(&mut self, c: Point, radius: i32, color: Color, blending: bool) {
        let mut x = radius as i64;
        let mut y: i64 = 0;
        let mut e = -x;

        while x >= y {
            self.hline(shift(c.x, -x), shift(c.x, x), shift(c.y, y), color, blending);
            if y != 0 {
                self.hline(shift(c.x, -x), shift(c.x, x), shift(c.y, -y), color, blending);
            }

            let last_y = y;
            e += 2 * y + 1;
            y += 1;
            if e >= 0 {
                if x != last_y {
                    self.hline(shift(c.x, -last_y), shift(c.x, last_y), shift(c.y, x), color, blending);
                    self.hline(shift(c.x, -last_y), shift(c.x, last_y), shift(c.y, -x), color, blending);
                }
                e -= 2 * x + 1;
                x -= 1;
            }
        }
    }
}
