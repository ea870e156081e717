//! # DragDrop Core
//!
//! Core types and utilities for the DragDrop diagram editor.
//! Provides the diagram data model, geometry and hit-testing,
//! the error taxonomy, and the event bus observers subscribe to.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod geometry;

pub use data::{Line, LineId, Shape, ShapeId, ShapeType, ToolType};

pub use error::{ConfigError, DiagramError, Error, Result};

pub use event_bus::{
    DiagramEvent, EventBus, EventBusError, EventCategory, EventFilter,
    SubscriptionId,
};

pub use geometry::{hit_test, BoxSize, Offset, ShapeLayout};
