//! Point math and axis-aligned hit-testing.
//!
//! All coordinates live in canvas space. A shape occupies a square box whose
//! top-left corner is the shape's offset and whose side is the [`BoxSize`]
//! shared with the render layer.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::data::Shape;
use crate::error::DiagramError;

/// A 2D point or displacement in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// The origin.
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// Creates a new offset.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of this displacement.
    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance between two points.
    pub fn distance_to(&self, other: Offset) -> f64 {
        (other - *self).distance()
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Offset {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Side length of the square hit-test box.
///
/// Always finite and strictly positive; a zero or negative box would make
/// every hit test vacuous, so it is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct BoxSize(f64);

impl BoxSize {
    /// Validates and wraps a box size.
    pub fn new(size: f64) -> Result<Self, DiagramError> {
        if size.is_finite() && size > 0.0 {
            Ok(Self(size))
        } else {
            Err(DiagramError::InvalidBoxSize { size })
        }
    }

    /// The side length.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Vector from a box's top-left corner to its center.
    pub fn half(self) -> Offset {
        Offset::new(self.0 / 2.0, self.0 / 2.0)
    }

    /// Whether `point` falls inside the box anchored at `origin`, edges included.
    pub fn contains(self, origin: Offset, point: Offset) -> bool {
        let d = point - origin;
        d.x >= 0.0 && d.y >= 0.0 && d.x <= self.0 && d.y <= self.0
    }
}

impl TryFrom<f64> for BoxSize {
    type Error = DiagramError;

    fn try_from(size: f64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Returns the top-most shape whose box contains `point`.
///
/// Shapes later in the slice are drawn on top, so they are tested first.
pub fn hit_test(shapes: &[Shape], point: Offset, box_size: BoxSize) -> Option<&Shape> {
    shapes
        .iter()
        .rev()
        .find(|shape| box_size.contains(shape.offset, point))
}

/// Layout constants shared by hit-testing and rendering.
///
/// The visual shape is centered inside its box, leaving `inset` on every
/// side for the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeLayout {
    box_size: BoxSize,
    shape_size: f64,
    outline_width: f64,
}

impl ShapeLayout {
    /// Builds a layout, rejecting a visual size that does not fit its box.
    pub fn new(box_size: f64, shape_size: f64, outline_width: f64) -> Result<Self, DiagramError> {
        let box_size = BoxSize::new(box_size)?;
        if !(shape_size.is_finite() && shape_size > 0.0 && shape_size <= box_size.get()) {
            return Err(DiagramError::InvalidLayout {
                reason: format!(
                    "shape size {} must be in (0, {}]",
                    shape_size,
                    box_size.get()
                ),
            });
        }
        if !(outline_width.is_finite() && outline_width >= 0.0) {
            return Err(DiagramError::InvalidLayout {
                reason: format!("outline width {} must be >= 0", outline_width),
            });
        }
        Ok(Self {
            box_size,
            shape_size,
            outline_width,
        })
    }

    pub fn box_size(&self) -> BoxSize {
        self.box_size
    }

    pub fn shape_size(&self) -> f64 {
        self.shape_size
    }

    pub fn outline_width(&self) -> f64 {
        self.outline_width
    }

    /// Gap between the box edge and the visual shape.
    pub fn inset(&self) -> f64 {
        (self.box_size.get() - self.shape_size) / 2.0
    }

    /// Box offset that centers a shape on `point`.
    pub fn centered_at(&self, point: Offset) -> Offset {
        point - self.box_size.half()
    }

    /// Center of a shape's box; lines attach here.
    pub fn center_of(&self, shape: &Shape) -> Offset {
        shape.offset + self.box_size.half()
    }
}

impl Default for ShapeLayout {
    fn default() -> Self {
        Self {
            box_size: BoxSize(48.0),
            shape_size: 36.0,
            outline_width: 3.0,
        }
    }
}
