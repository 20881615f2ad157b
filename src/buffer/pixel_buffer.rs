use log::debug;

use super::composite::blend;
use crate::color::Color;
use crate::error::{RasterError, Result};
use crate::geometry::{Point, Rect};

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major buffer of packed RGBA colors (`y * width + x`).
///
/// This is the only stateful thing in the crate. Every primitive writes
/// through [`PixelBuffer::set_pixel`], which clips silently at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: i32,
    height: i32,
}

impl PixelBuffer {
    /// Allocate a zeroed (fully transparent) buffer.
    ///
    /// Fails with [`RasterError::Allocation`] for negative dimensions, when
    /// the byte size overflows, or when the allocator refuses the request.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RasterError::Allocation { width, height })?;
        pixels.resize(len, 0);

        debug!("allocated {}x{} pixel buffer", width, height);
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Deep copy with an independent lifetime, reporting allocation failure
    /// instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(self.pixels.len())
            .map_err(|_| RasterError::Allocation {
                width: self.width,
                height: self.height,
            })?;
        pixels.extend_from_slice(&self.pixels);

        debug!("cloned {}x{} pixel buffer", self.width, self.height);
        Ok(Self {
            pixels,
            width: self.width,
            height: self.height,
        })
    }

    fn checked_len(width: i32, height: i32) -> Result<usize> {
        let err = RasterError::Allocation { width, height };
        if width < 0 || height < 0 {
            return Err(err);
        }
        let len = (width as usize).checked_mul(height as usize).ok_or(err)?;
        // Byte size has to fit too
        len.checked_mul(4)
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(err)?;
        Ok(len)
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    const fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    // ========================================================================
    // Pixel access
    // ========================================================================

    /// Read a pixel, `Color::NONE` when out of bounds
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.try_pixel(x, y).unwrap_or(Color::NONE)
    }

    /// Read a pixel, `None` when out of bounds
    #[inline]
    pub fn try_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(Color(self.pixels[self.index(x, y)]))
        } else {
            None
        }
    }

    /// Fast unchecked pixel read
    ///
    /// # Safety
    /// `(x, y)` must lie inside `[0, width) x [0, height)`.
    #[inline]
    pub unsafe fn pixel_unchecked(&self, x: i32, y: i32) -> Color {
        Color(*self.pixels.get_unchecked(self.index(x, y)))
    }

    /// Write one pixel, either overwriting or compositing source-over.
    /// Out-of-bounds writes are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, blending: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = if blending {
            blend(color, Color(self.pixels[idx])).0
        } else {
            color.0
        };
    }

    #[inline]
    pub fn draw_point(&mut self, p: Point, color: Color, blending: bool) {
        self.set_pixel(p.x, p.y, color, blending);
    }

    /// Horizontal span from `x1` to `x2` inclusive, clipped to the buffer
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color, blending: bool) {
        if y < 0 || y >= self.height {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width - 1);
        if start > end {
            return;
        }

        let row = self.index(start, y)..=self.index(end, y);
        if blending && !color.is_opaque() {
            for px in &mut self.pixels[row] {
                *px = blend(color, Color(*px)).0;
            }
        } else {
            self.pixels[row].fill(color.0);
        }
    }

    // ========================================================================
    // Whole-buffer operations
    // ========================================================================

    /// Reset every pixel to transparent black
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Overwrite every pixel with one color
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }

    /// Replace every pixel equal to `from` with `to`, keeping the alpha the
    /// pixel already had
    pub fn switch_color(&mut self, from: Color, to: Color) {
        let replacement = to.with_alpha(from.a()).0;
        for px in &mut self.pixels {
            if *px == from.0 {
                *px = replacement;
            }
        }
    }

    /// Copy `src_rect` of `source` into `dst_rect` of this buffer with
    /// source-over blending. The copy is clipped to the smaller of the two
    /// rectangles and to this buffer's bounds; source pixels outside
    /// `source` read as transparent and leave the destination unchanged.
    pub fn blit(&mut self, source: &PixelBuffer, src_rect: Rect, dst_rect: Rect) {
        let w = src_rect.w.min(dst_rect.w);
        let h = src_rect.h.min(dst_rect.h);

        for y in 0..h {
            let dy = dst_rect.y.saturating_add(y);
            if dy < 0 || dy >= self.height {
                continue;
            }
            let sy = src_rect.y.saturating_add(y);
            for x in 0..w {
                let color = source.pixel(src_rect.x.saturating_add(x), sy);
                self.set_pixel(dst_rect.x.saturating_add(x), dy, color, true);
            }
        }
    }

    // ========================================================================
    // Raw access
    // ========================================================================

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Native-endian byte view of the pixels (for texture upload)
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: u32 has no padding and u8 has alignment 1, so every u32
        // slice is a valid u8 slice of four times the length.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr().cast::<u8>(), self.pixels.len() * 4)
        }
    }
}
