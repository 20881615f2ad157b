//! Software rasterizer for in-memory RGBA pixel buffers.
//!
//! Draws points, lines, circles, rectangles and convex polygons straight into
//! a [`PixelBuffer`] of packed `0xRRGGBBAA` colors, with optional source-over
//! blending, stroke thickness and antialiasing.
//!
//! ```
//! use softdraw::{Color, DrawStyle, PixelBuffer, Point};
//!
//! let mut buf = PixelBuffer::new(64, 64)?;
//! let style = DrawStyle::filled(Color::RED).with_border(Color::WHITE).antialiased(true);
//! buf.draw_circle(Point::new(32, 32), 20, &style)?;
//! assert_eq!(buf.pixel(32, 32), Color::RED);
//! # Ok::<(), softdraw::RasterError>(())
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod raster;
pub mod scene;

#[cfg(feature = "viewer")]
pub mod display;

pub use buffer::{blend, blit, PixelBuffer};
pub use color::Color;
pub use error::{GeometryError, RasterError};
pub use geometry::{Point, Rect};
pub use raster::{Coverage, DrawStyle};
pub use scene::{Scene, SceneError, Shape};
