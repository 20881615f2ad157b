use crate::color::Color;

// ============================================================================
// Source-over compositing
// ============================================================================

/// Weighted average of one channel: `(src * alpha + dst * (255 - alpha)) / 255`
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u32) -> u8 {
    ((src as u32 * alpha + dst as u32 * (255 - alpha)) / 255) as u8
}

/// Porter-Duff source-over of `src` onto `dst` in 8-bit integer channels.
///
/// Opaque sources replace the destination outright. A fully transparent
/// source leaves the destination untouched.
#[inline]
pub fn blend(src: Color, dst: Color) -> Color {
    let alpha = src.a() as u32;
    if alpha == 255 {
        return src;
    }

    let out_a = (alpha + dst.a() as u32 * (255 - alpha) / 255).min(255) as u8;
    Color::from_rgba(
        blend_channel(src.r(), dst.r(), alpha),
        blend_channel(src.g(), dst.g(), alpha),
        blend_channel(src.b(), dst.b(), alpha),
        out_a,
    )
}
