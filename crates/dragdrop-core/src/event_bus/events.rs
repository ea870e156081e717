//! Event type definitions for the event bus.
//!
//! Every event carries an owned snapshot of the new value, so observers
//! never see the store's internal containers.

use serde::{Deserialize, Serialize};

use crate::data::{Line, Shape, ShapeType, ToolType};

/// A change to one of the diagram's observable channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DiagramEvent {
    /// The selected tool was replaced.
    ToolChanged(ToolType),
    /// The highlighted shape type was set or cleared.
    HighlightChanged(Option<ShapeType>),
    /// The shape sequence changed (append or replace).
    ShapesChanged(Vec<Shape>),
    /// The line sequence changed (append, replace, or remove).
    LinesChanged(Vec<Line>),
}

impl DiagramEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DiagramEvent::ToolChanged(_) => EventCategory::Tool,
            DiagramEvent::HighlightChanged(_) => EventCategory::Highlight,
            DiagramEvent::ShapesChanged(_) => EventCategory::Shapes,
            DiagramEvent::LinesChanged(_) => EventCategory::Lines,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DiagramEvent::ToolChanged(tool) => format!("Tool changed to {}", tool),
            DiagramEvent::HighlightChanged(Some(shape_type)) => {
                format!("Highlighting {}", shape_type)
            }
            DiagramEvent::HighlightChanged(None) => "Highlight cleared".to_string(),
            DiagramEvent::ShapesChanged(shapes) => format!("{} shapes", shapes.len()),
            DiagramEvent::LinesChanged(lines) => format!("{} lines", lines.len()),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Selected tool channel.
    Tool,
    /// Highlighted shape type channel.
    Highlight,
    /// Shape sequence channel.
    Shapes,
    /// Line sequence channel.
    Lines,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Tool => write!(f, "Tool"),
            EventCategory::Highlight => write!(f, "Highlight"),
            EventCategory::Shapes => write!(f, "Shapes"),
            EventCategory::Lines => write!(f, "Lines"),
        }
    }
}
