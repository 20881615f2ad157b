use log::trace;

use super::line::{Bresenham, Coverage};
use super::{reject, DrawStyle};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{GeometryError, Result};
use crate::geometry::{centroid, edges, Point};

impl PixelBuffer {
    /// Draw a closed polygon: fill first, then the border on top.
    ///
    /// The fill is a per-row min/max scan and is only correct for convex
    /// polygons; concave input gets filled across its widest extent on each
    /// row. Self-intersection is not checked.
    pub fn draw_poly(&mut self, vertices: &[Point], style: &DrawStyle) -> Result<()> {
        if vertices.len() < 3 {
            return Err(reject("polygon", GeometryError::TooFewVertices(vertices.len())));
        }
        style.check_thickness("polygon")?;
        trace!(
            "polygon with {} vertices thickness={} aa={}",
            vertices.len(),
            style.thickness,
            style.antialias
        );

        let border = style.border_color();
        let fill = style.fill_color();
        if let Some(color) = fill {
            self.poly_fill(vertices, color, style.blend);
        }
        match (border, fill) {
            (Some(color), _) => {
                self.poly_stroke(vertices, color, style.blend, style.thickness, style.antialias);
            },
            (None, Some(color)) if style.antialias => {
                self.poly_stroke(vertices, color, style.blend, 1, true);
            },
            _ => {},
        }
        Ok(())
    }

    /// Outline every edge. Antialiased edges keep their falloff only on the
    /// side facing away from the centroid.
    fn poly_stroke(&mut self, vertices: &[Point], color: Color, blending: bool, thickness: i32, antialias: bool) {
        let inside = centroid(vertices);
        for (a, b) in edges(vertices) {
            let coverage = match inside {
                Some(c) if antialias => Coverage::facing(a, b, c),
                _ => Coverage::Both,
            };
            self.line_stroke(a, b, color, blending, thickness, antialias, coverage);
        }
    }

    /// Convex scanline fill.
    ///
    /// Walks each edge with the same Bresenham stepping as lines, recording
    /// the leftmost and rightmost x seen on every buffer row, then fills one
    /// span per touched row.
    fn poly_fill(&mut self, vertices: &[Point], color: Color, blending: bool) {
        let rows = self.height().max(0) as usize;
        let mut x_min = vec![self.width() + 1; rows];
        let mut x_max = vec![-1; rows];

        for (a, b) in edges(vertices) {
            for p in Bresenham::new(a, b) {
                if p.y < 0 || p.y >= self.height() {
                    continue;
                }
                let row = p.y as usize;
                x_min[row] = x_min[row].min(p.x);
                x_max[row] = x_max[row].max(p.x);
            }
        }

        for (row, (&lo, &hi)) in x_min.iter().zip(&x_max).enumerate() {
            if lo <= hi {
                self.hline(lo, hi, row as i32, color, blending);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;

    fn painted(buf: &PixelBuffer) -> usize {
        buf.as_slice().iter().filter(|&&p| p != 0).count()
    }

    fn square(x: i32, y: i32, size: i32) -> [Point; 4] {
        [
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ]
    }

    #[test]
    fn test_square_fill_is_inclusive() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        buf.draw_poly(&square(0, 0, 10), &DrawStyle::filled(Color::WHITE))
            .unwrap();
        // vertex rows and columns are both included: 11 x 11
        assert_eq!(painted(&buf), 121);
        assert_eq!(buf.pixel(10, 10), Color::WHITE);
        assert_eq!(buf.pixel(11, 10), Color::NONE);
        assert_eq!(buf.pixel(10, 11), Color::NONE);
    }

    #[test]
    fn test_triangle_fill_rows_contiguous() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let tri = [Point::new(2, 2), Point::new(17, 6), Point::new(6, 17)];
        buf.draw_poly(&tri, &DrawStyle::filled(Color::WHITE)).unwrap();

        let mut outline = PixelBuffer::new(20, 20).unwrap();
        outline
            .draw_poly(&tri, &DrawStyle::stroke(Color::WHITE))
            .unwrap();
        for y in 0..20 {
            let xs: Vec<_> = (0..20).filter(|&x| !buf.pixel(x, y).is_none()).collect();
            if let (Some(&lo), Some(&hi)) = (xs.first(), xs.last()) {
                assert_eq!(xs.len() as i32, hi - lo + 1, "row {}", y);
            }
            for x in 0..20 {
                if !outline.pixel(x, y).is_none() {
                    assert!(!buf.pixel(x, y).is_none(), "edge pixel ({}, {}) unfilled", x, y);
                }
            }
        }
    }

    #[test]
    fn test_fill_clips_rows_outside_buffer() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.draw_poly(&square(-5, -5, 20), &DrawStyle::filled(Color::RED))
            .unwrap();
        assert_eq!(painted(&buf), 100);
    }

    #[test]
    fn test_fully_offscreen_polygon() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.draw_poly(&square(20, 20, 5), &DrawStyle::filled(Color::RED).with_border(Color::BLUE))
            .unwrap();
        assert_eq!(painted(&buf), 0);
    }

    #[test]
    fn test_concave_fill_bridges_notch() {
        // U shape: the notch between the arms gets filled by the min/max scan
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let u = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 10),
            Point::new(8, 10),
            Point::new(8, 0),
            Point::new(12, 0),
            Point::new(12, 14),
            Point::new(0, 14),
        ];
        buf.draw_poly(&u, &DrawStyle::filled(Color::WHITE)).unwrap();
        assert_eq!(buf.pixel(6, 5), Color::WHITE);
    }

    #[test]
    fn test_outline_only() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        buf.draw_poly(&square(2, 2, 5), &DrawStyle::stroke(Color::WHITE))
            .unwrap();
        // 6 x 6 box perimeter
        assert_eq!(painted(&buf), 20);
        assert_eq!(buf.pixel(4, 4), Color::NONE);
    }

    #[test]
    fn test_border_over_fill() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let style = DrawStyle::filled(Color::RED).with_border(Color::BLUE);
        buf.draw_poly(&square(2, 2, 6), &style).unwrap();
        assert_eq!(buf.pixel(2, 2), Color::BLUE);
        assert_eq!(buf.pixel(5, 5), Color::RED);
    }

    #[test]
    fn test_too_few_vertices() {
        let mut buf = PixelBuffer::new(5, 5).unwrap();
        let line = [Point::new(0, 0), Point::new(4, 4)];
        assert_eq!(
            buf.draw_poly(&line, &DrawStyle::filled(Color::RED)),
            Err(RasterError::InvalidGeometry(GeometryError::TooFewVertices(2)))
        );
        assert_eq!(painted(&buf), 0);
    }

    #[test]
    fn test_aa_outline_inward_side_solid() {
        let mut buf = PixelBuffer::new(30, 30).unwrap();
        let tri = [Point::new(2, 2), Point::new(26, 10), Point::new(2, 20)];
        let style = DrawStyle::stroke(Color::WHITE).antialiased(true).blended(false);
        buf.draw_poly(&tri, &style).unwrap();
        // top edge (2,2)->(26,10), x = 3: intery = 2.33, outward row 2 fades,
        // inward row 3 is solid
        assert!((169..=170).contains(&buf.pixel(3, 2).a()));
        assert_eq!(buf.pixel(3, 3), Color::WHITE);
        // x = 4: intery = 2.67
        assert!((84..=85).contains(&buf.pixel(4, 2).a()));
        assert_eq!(buf.pixel(4, 3), Color::WHITE);
    }

    #[test]
    fn test_aa_fill_only_draws_edge_in_fill_color() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let tri = [Point::new(2, 2), Point::new(17, 6), Point::new(6, 17)];
        let style = DrawStyle::filled(Color::GREEN).antialiased(true);
        buf.draw_poly(&tri, &style).unwrap();
        assert!(buf
            .as_slice()
            .iter()
            .filter(|&&p| p != 0)
            .all(|&p| Color(p).rgb() == Color::GREEN.rgb()));
    }

    #[test]
    fn test_repeat_opaque_polygon_idempotent() {
        let mut once = PixelBuffer::new(20, 20).unwrap();
        let style = DrawStyle::filled(Color::RED)
            .with_border(Color::BLUE)
            .with_thickness(2);
        let tri = [Point::new(3, 1), Point::new(18, 9), Point::new(1, 15)];
        once.draw_poly(&tri, &style).unwrap();
        let mut twice = once.clone();
        twice.draw_poly(&tri, &style).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_aa_outline_of_axis_and_diagonal_edges_is_one_pixel() {
        let shapes: [&[Point]; 2] = [
            &square(2, 2, 10),
            &[Point::new(2, 2), Point::new(12, 12), Point::new(2, 12)],
        ];
        for vertices in shapes {
            let mut plain = PixelBuffer::new(16, 16).unwrap();
            plain
                .draw_poly(vertices, &DrawStyle::stroke(Color::WHITE))
                .unwrap();
            let mut aa = PixelBuffer::new(16, 16).unwrap();
            aa.draw_poly(vertices, &DrawStyle::stroke(Color::WHITE).antialiased(true))
                .unwrap();
            assert_eq!(aa, plain, "{:?}", vertices);
        }

        let mut aa = PixelBuffer::new(16, 16).unwrap();
        aa.draw_poly(&square(2, 2, 10), &DrawStyle::stroke(Color::WHITE).antialiased(true))
            .unwrap();
        assert_eq!(painted(&aa), 40);
        assert_eq!(aa.pixel(7, 2), Color::WHITE);
        assert_eq!(aa.pixel(7, 3), Color::NONE);
        assert_eq!(aa.pixel(3, 7), Color::NONE);
        assert_eq!(aa.pixel(7, 12), Color::WHITE);
        assert_eq!(aa.pixel(12, 7), Color::WHITE);
    }

    #[test]
    fn test_aa_border_stays_off_the_fill() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        let style = DrawStyle::filled(Color::RED)
            .with_border(Color::BLUE)
            .antialiased(true);
        buf.draw_poly(&square(2, 2, 10), &style).unwrap();
        for i in 3..12 {
            assert_eq!(buf.pixel(i, 3), Color::RED);
            assert_eq!(buf.pixel(3, i), Color::RED);
            assert_eq!(buf.pixel(i, 11), Color::RED);
            assert_eq!(buf.pixel(11, i), Color::RED);
        }
    }

    #[test]
    fn test_extreme_vertices_clip() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        let style = DrawStyle::filled(Color::RED)
            .with_border(Color::WHITE)
            .antialiased(true)
            .with_thickness(3);
        let near_max = [
            Point::new(i32::MAX - 6, i32::MAX - 6),
            Point::new(i32::MAX, i32::MAX - 3),
            Point::new(i32::MAX - 2, i32::MAX),
        ];
        let near_min = [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MIN + 6, i32::MIN),
            Point::new(i32::MIN + 3, i32::MIN + 5),
        ];
        buf.draw_poly(&near_max, &style).unwrap();
        buf.draw_poly(&near_min, &style).unwrap();
        assert_eq!(painted(&buf), 0);
    }
}
