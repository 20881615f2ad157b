//! Pixel storage and the compositing rule every write goes through

mod composite;
mod pixel_buffer;

pub use composite::blend;
pub use pixel_buffer::PixelBuffer;

use crate::geometry::Rect;

/// Copy a region of `source` into `dest`, blending per destination pixel.
pub fn blit(source: &PixelBuffer, dest: &mut PixelBuffer, src_rect: Rect, dst_rect: Rect) {
    dest.blit(source, src_rect, dst_rect);
}
