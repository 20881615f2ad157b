//! Shape rasterizers
//!
//! Every shape has one entry point on [`PixelBuffer`] taking a [`DrawStyle`]:
//! [`PixelBuffer::draw_line`], [`PixelBuffer::draw_circle`],
//! [`PixelBuffer::draw_poly`] and [`PixelBuffer::draw_rect`]. Fills are drawn
//! before borders so strokes sit on top. Everything bottoms out in
//! [`PixelBuffer::set_pixel`] or [`PixelBuffer::hline`].
//!
//! [`PixelBuffer`]: crate::buffer::PixelBuffer
//! [`PixelBuffer::set_pixel`]: crate::buffer::PixelBuffer::set_pixel
//! [`PixelBuffer::hline`]: crate::buffer::PixelBuffer::hline

mod circle;
mod line;
mod polygon;
mod rect;

pub use line::Coverage;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GeometryError, RasterError};

// ============================================================================
// DrawStyle
// ============================================================================

/// Per-call drawing options.
///
/// A color of `Color(0)` counts as absent: transparent black cannot be used
/// as a border or fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawStyle {
    pub border: Option<Color>,
    pub fill: Option<Color>,
    pub antialias: bool,
    /// Source-over blend instead of overwriting
    pub blend: bool,
    pub thickness: i32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            border: None,
            fill: None,
            antialias: false,
            blend: true,
            thickness: 1,
        }
    }
}

impl DrawStyle {
    /// Outline only
    pub fn stroke(color: Color) -> Self {
        Self {
            border: Some(color),
            ..Self::default()
        }
    }

    /// Fill only
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub const fn with_border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub const fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub const fn antialiased(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub const fn blended(mut self, blend: bool) -> Self {
        self.blend = blend;
        self
    }

    pub const fn with_thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Border color, with the zero sentinel mapped to `None`
    pub fn border_color(&self) -> Option<Color> {
        self.border.filter(|c| !c.is_none())
    }

    /// Fill color, with the zero sentinel mapped to `None`
    pub fn fill_color(&self) -> Option<Color> {
        self.fill.filter(|c| !c.is_none())
    }

    fn check_thickness(&self, shape: &str) -> Result<(), RasterError> {
        if self.thickness < 1 {
            return Err(reject(shape, GeometryError::InvalidThickness(self.thickness)));
        }
        Ok(())
    }
}

fn reject(shape: &str, err: GeometryError) -> RasterError {
    warn!("rejected {}: {}", shape, err);
    err.into()
}
