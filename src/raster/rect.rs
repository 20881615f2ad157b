use log::trace;

use super::{reject, DrawStyle};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{GeometryError, Result};
use crate::geometry::{kernel_range, Rect};

impl PixelBuffer {
    /// Draw an axis-aligned rectangle covering `[x, x + w) x [y, y + h)`.
    ///
    /// Thick borders are nested outlines inset by every offset of the stroke
    /// kernel, so they grow both inwards and outwards. The `antialias` flag
    /// has nothing to do here and is ignored.
    pub fn draw_rect(&mut self, rect: Rect, style: &DrawStyle) -> Result<()> {
        if rect.w < 0 || rect.h < 0 {
            return Err(reject("rectangle", GeometryError::NegativeSize { w: rect.w, h: rect.h }));
        }
        style.check_thickness("rectangle")?;
        trace!(
            "rect ({}, {}) {}x{} thickness={}",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            style.thickness
        );

        if let Some(color) = style.fill_color() {
            self.rect_fill(rect, color, style.blend);
        }
        if let Some(color) = style.border_color() {
            for inset in kernel_range(style.thickness) {
                self.rect_outline(rect.inset(inset), color, style.blend);
            }
        }
        Ok(())
    }

    fn rect_fill(&mut self, rect: Rect, color: Color, blending: bool) {
        if rect.is_empty() {
            return;
        }
        let rows = rect.y.max(0)..=rect.bottom().min(self.height() - 1);
        for y in rows {
            self.hline(rect.x, rect.right(), y, color, blending);
        }
    }

    /// One-pixel outline, each perimeter cell written once
    fn rect_outline(&mut self, rect: Rect, color: Color, blending: bool) {
        if rect.is_empty() {
            return;
        }
        let right = rect.right();
        let bottom = rect.bottom();

        self.hline(rect.x, right, rect.y, color, blending);
        if bottom != rect.y {
            self.hline(rect.x, right, bottom, color, blending);
        }
        let sides = rect.y.saturating_add(1).max(0)..bottom.min(self.height());
        for y in sides {
            self.set_pixel(rect.x, y, color, blending);
            if right != rect.x {
                self.set_pixel(right, y, color, blending);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use std::collections::BTreeSet;

    fn touched(buf: &PixelBuffer) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if !buf.pixel(x, y).is_none() {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn test_outline_touches_exact_perimeter() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.draw_rect(Rect::new(2, 2, 5, 3), &DrawStyle::stroke(Color::WHITE))
            .unwrap();
        let mut expected = BTreeSet::new();
        for x in 2..7 {
            expected.insert((x, 2));
            expected.insert((x, 4));
        }
        expected.insert((2, 3));
        expected.insert((6, 3));
        assert_eq!(expected.len(), 12);
        assert_eq!(touched(&buf), expected);
    }

    #[test]
    fn test_fill_covers_area() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.draw_rect(Rect::new(1, 2, 4, 3), &DrawStyle::filled(Color::RED))
            .unwrap();
        let expected: BTreeSet<_> = (1..5).flat_map(|x| (2..5).map(move |y| (x, y))).collect();
        assert_eq!(touched(&buf), expected);
    }

    #[test]
    fn test_fill_then_border() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        let style = DrawStyle::filled(Color::RED).with_border(Color::BLUE);
        buf.draw_rect(Rect::new(0, 0, 5, 5), &style).unwrap();
        assert_eq!(buf.pixel(0, 0), Color::BLUE);
        assert_eq!(buf.pixel(4, 2), Color::BLUE);
        assert_eq!(buf.pixel(2, 2), Color::RED);
    }

    #[test]
    fn test_thick_border_grows_both_ways() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let style = DrawStyle::stroke(Color::WHITE).with_thickness(3);
        buf.draw_rect(Rect::new(5, 5, 8, 8), &style).unwrap();
        // insets -1, 0, 1
        assert_eq!(buf.pixel(4, 4), Color::WHITE);
        assert_eq!(buf.pixel(5, 5), Color::WHITE);
        assert_eq!(buf.pixel(6, 6), Color::WHITE);
        assert_eq!(buf.pixel(7, 7), Color::NONE);
        assert_eq!(buf.pixel(13, 13), Color::WHITE);
        assert_eq!(buf.pixel(3, 3), Color::NONE);
        assert_eq!(touched(&buf).len(), 10 * 10 - 4 * 4);
    }

    #[test]
    fn test_translucent_outline_blends_corners_once() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.fill(Color::BLACK);
        buf.draw_rect(Rect::new(1, 1, 4, 4), &DrawStyle::stroke(Color(0xFFFFFF80)))
            .unwrap();
        let expected = crate::buffer::blend(Color(0xFFFFFF80), Color::BLACK);
        assert_eq!(buf.pixel(1, 1), expected);
        assert_eq!(buf.pixel(4, 4), expected);
        assert_eq!(buf.pixel(2, 1), expected);
    }

    #[test]
    fn test_degenerate_sizes() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.draw_rect(Rect::new(2, 2, 0, 5), &DrawStyle::filled(Color::RED).with_border(Color::RED))
            .unwrap();
        assert!(touched(&buf).is_empty());

        buf.draw_rect(Rect::new(2, 2, 1, 1), &DrawStyle::stroke(Color::RED))
            .unwrap();
        assert_eq!(touched(&buf), BTreeSet::from([(2, 2)]));
    }

    #[test]
    fn test_negative_size_rejected() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        assert_eq!(
            buf.draw_rect(Rect::new(0, 0, -3, 2), &DrawStyle::stroke(Color::RED)),
            Err(RasterError::InvalidGeometry(GeometryError::NegativeSize { w: -3, h: 2 }))
        );
    }

    #[test]
    fn test_clipped_rect() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.draw_rect(Rect::new(-2, -2, 10, 10), &DrawStyle::filled(Color::RED))
            .unwrap();
        assert_eq!(touched(&buf).len(), 16);
    }

    #[test]
    fn test_extreme_coordinates_clip() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        let style = DrawStyle::filled(Color::RED)
            .with_border(Color::WHITE)
            .with_thickness(3);
        buf.draw_rect(Rect::new(i32::MAX - 2, 0, 10, 4), &style).unwrap();
        buf.draw_rect(Rect::new(i32::MIN, i32::MIN, 5, 5), &style).unwrap();
        assert!(touched(&buf).is_empty());

        // spans the whole buffer from far outside
        buf.draw_rect(Rect::new(-100, -5, i32::MAX, 20), &DrawStyle::filled(Color::RED))
            .unwrap();
        assert_eq!(touched(&buf).len(), 100);
    }
}
