//! Scene files: a whole drawing session described in YAML.
//!
//! ```yaml
//! width: 512
//! height: 512
//! initial_height: 0.5
//! output: heightmap.png
//! shapes:
//!   - kind: hex
//!     center: [256, 256]
//!     size: 128
//!     radius: 4
//!     height: 0.8
//!   - kind: line
//!     from: [0, 0]
//!     to: [511, 100]
//!     radius: 2
//!     height: 1.0
//! ```
//!
//! Every top-level key except `shapes` has a default.

use crate::color::DEFAULT_HEIGHT;
use crate::error::{Error, Result};
use crate::geometry::{Hexagon, Point, Segment};
use crate::heightfield::HeightField;
use crate::render::{self, Drawable, Pen};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Thick line between two points.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke radius.
        #[serde(default)]
        radius: u32,
        /// Stroke height.
        height: f64,
    },
    /// Single disc stamp.
    Point {
        /// Stamp center.
        at: Point,
        /// Disc radius.
        #[serde(default)]
        radius: u32,
        /// Stamp height.
        height: f64,
    },
    /// Hexagon outline.
    Hex {
        /// Hexagon center.
        center: Point,
        /// Circumradius.
        size: u32,
        /// Stroke radius.
        #[serde(default)]
        radius: u32,
        /// Stroke height.
        height: f64,
    },
    /// Full-height vertical band through the middle column.
    Band {
        /// Band width in columns.
        line_width: u32,
        /// Band height.
        height: f64,
    },
}

impl Shape {
    /// Draw this shape onto `field`.
    pub fn draw(&self, field: &mut HeightField) -> Result<()> {
        match *self {
            Self::Line {
                from,
                to,
                radius,
                height,
            } => Segment::new(from, to, radius, height).draw(field),
            Self::Point { at, radius, height } => at.draw(field, Pen::new(radius, height)),
            Self::Hex {
                center,
                size,
                radius,
                height,
            } => Hexagon::new(center, size).draw(field, Pen::new(radius, height)),
            Self::Band { line_width, height } => {
                render::draw_center_band(field, line_width, height)
            }
        }
    }
}

/// A complete drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Field width in samples.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Field height in samples.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Height every sample starts at.
    #[serde(default = "default_initial_height")]
    pub initial_height: f64,

    /// Where the rendered PNG goes.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Shapes, drawn in order.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

fn default_size() -> u32 {
    2048
}
fn default_initial_height() -> f64 {
    DEFAULT_HEIGHT
}
fn default_output() -> PathBuf {
    PathBuf::from("heightmap.png")
}

impl Default for Scene {
    /// A 2048 x 2048 field with one hexagon outline of size 512 at the center.
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            initial_height: default_initial_height(),
            output: default_output(),
            shapes: vec![Shape::Hex {
                center: Point::new(1024, 1024),
                size: 512,
                radius: 10,
                height: 0.8,
            }],
        }
    }
}

impl Scene {
    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::SceneNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::SceneParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Allocate the field and draw every shape in order.
    ///
    /// Stops at the first failing shape.
    pub fn render(&self) -> Result<HeightField> {
        let mut field = HeightField::with_initial_height(self.height, self.width, self.initial_height)?;

        for (i, shape) in self.shapes.iter().enumerate() {
            debug!("shape {i}: {shape:?}");
            shape.draw(&mut field)?;
        }

        info!(
            "rendered {} shapes onto {}x{} field",
            self.shapes.len(),
            self.width,
            self.height
        );
        Ok(field)
    }

    /// Render and write the PNG to [`Scene::output`].
    pub fn render_to_file(&self) -> Result<HeightField> {
        let field = self.render()?;
        field.save_image(&self.output)?;
        Ok(field)
    }
}
