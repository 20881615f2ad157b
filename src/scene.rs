//! Scenes: an ordered list of shapes that can be saved to and loaded from
//! JSON and rendered into a fresh buffer.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::RasterError;
use crate::geometry::{Point, Rect};
use crate::raster::DrawStyle;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to access scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

const fn default_blend() -> bool {
    true
}

/// One drawing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Point {
        at: Point,
        color: Color,
        #[serde(default = "default_blend")]
        blend: bool,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        #[serde(flatten)]
        style: DrawStyle,
    },
    Circle {
        center: Point,
        radius: i32,
        #[serde(flatten)]
        style: DrawStyle,
    },
    Rect {
        rect: Rect,
        #[serde(flatten)]
        style: DrawStyle,
    },
    Poly {
        vertices: Vec<Point>,
        #[serde(flatten)]
        style: DrawStyle,
    },
}

impl Shape {
    pub fn draw(&self, buffer: &mut PixelBuffer) -> Result<(), RasterError> {
        match self {
            Self::Point { at, color, blend } => {
                buffer.draw_point(*at, *color, *blend);
                Ok(())
            },
            Self::Line {
                from,
                to,
                color,
                style,
            } => buffer.draw_line(*from, *to, *color, style),
            Self::Circle {
                center,
                radius,
                style,
            } => buffer.draw_circle(*center, *radius, style),
            Self::Rect { rect, style } => buffer.draw_rect(*rect, style),
            Self::Poly { vertices, style } => buffer.draw_poly(vertices, style),
        }
    }
}

/// A canvas size, an optional background and the shapes drawn onto it in
/// order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_name")]
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

fn default_name() -> String {
    "untitled".to_string()
}

impl Scene {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        info!(
            "loaded scene '{}' ({}x{}, {} shapes) from {}",
            scene.name,
            scene.width,
            scene.height,
            scene.shapes.len(),
            path.display()
        );
        Ok(scene)
    }

    /// Render into a new buffer of the scene's size
    pub fn render(&self) -> Result<PixelBuffer, SceneError> {
        let mut buffer = PixelBuffer::new(self.width, self.height)?;
        self.render_into(&mut buffer)?;
        Ok(buffer)
    }

    /// Clear to the background (or transparent) and draw every shape.
    /// Stops at the first rejected shape.
    pub fn render_into(&self, buffer: &mut PixelBuffer) -> Result<(), RasterError> {
        match self.background {
            Some(color) => buffer.fill(color),
            None => buffer.clear(),
        }
        for (i, shape) in self.shapes.iter().enumerate() {
            debug!("drawing shape {} of {}", i + 1, self.shapes.len());
            shape.draw(buffer)?;
        }
        Ok(())
    }
}
