//! Diagram data model: shapes, lines, and tools.
//!
//! Shapes and lines are value objects. Moving a shape or completing a line
//! produces a new value carrying the same id; nothing is mutated in place
//! once it is published.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Offset;

/// Unique, immutable shape identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", &self.0.to_string()[..8])
    }
}

/// Unique, immutable line identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(Uuid);

impl LineId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", &self.0.to_string()[..8])
    }
}

/// Kinds of shape that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Square,
    Triangle,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "Circle"),
            Self::Square => write!(f, "Square"),
            Self::Triangle => write!(f, "Triangle"),
        }
    }
}

/// Toolbar tools. The shape tools double as [`ShapeType`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Circle,
    #[default]
    Square,
    Triangle,
    DrawLine,
    Select,
}

impl ToolType {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolType; 5] = [
        ToolType::Square,
        ToolType::Circle,
        ToolType::Triangle,
        ToolType::DrawLine,
        ToolType::Select,
    ];

    /// The shape this tool places, if it is a shape tool.
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            Self::Circle => Some(ShapeType::Circle),
            Self::Square => Some(ShapeType::Square),
            Self::Triangle => Some(ShapeType::Triangle),
            Self::DrawLine | Self::Select => None,
        }
    }
}

impl From<ShapeType> for ToolType {
    fn from(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Circle => Self::Circle,
            ShapeType::Square => Self::Square,
            ShapeType::Triangle => Self::Triangle,
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "Circle"),
            Self::Square => write!(f, "Square"),
            Self::Triangle => write!(f, "Triangle"),
            Self::DrawLine => write!(f, "Draw Line"),
            Self::Select => write!(f, "Select"),
        }
    }
}

/// A placed shape. `offset` is the top-left corner of its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub shape_type: ShapeType,
    pub offset: Offset,
}

impl Shape {
    /// Creates a shape with a fresh id.
    pub fn new(shape_type: ShapeType, offset: Offset) -> Self {
        Self {
            id: ShapeId::new(),
            shape_type,
            offset,
        }
    }

    /// Copy of this shape at a new position, keeping its identity.
    pub fn moved_to(&self, offset: Offset) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }
}

/// A connection between two shapes.
///
/// While `shape2_id` is `None` the line is still being drawn and its far
/// end follows the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub shape1_id: ShapeId,
    pub shape2_id: Option<ShapeId>,
}

impl Line {
    /// Starts a line anchored at `shape1_id`.
    pub fn new(shape1_id: ShapeId) -> Self {
        Self {
            id: LineId::new(),
            shape1_id,
            shape2_id: None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.shape2_id.is_none()
    }

    /// Copy of this line attached to `shape2_id`.
    pub fn connected_to(&self, shape2_id: ShapeId) -> Self {
        Self {
            shape2_id: Some(shape2_id),
            ..self.clone()
        }
    }
}
