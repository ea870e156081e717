//! Render-ready description of a diagram snapshot.
//!
//! The platform layer paints lines first, then shapes in z-order. A line
//! still being drawn runs from its anchor shape to the live pointer.

use std::collections::HashMap;

use dragdrop_core::{DiagramError, LineId, Offset, ShapeId, ShapeLayout, ShapeType, ToolType};
use serde::Serialize;

use crate::diagram_state::DiagramSnapshot;

/// One shape to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSprite {
    pub shape_id: ShapeId,
    pub shape_type: ShapeType,
    /// Top-left of the visual shape, inset from the box.
    pub origin: Offset,
    pub size: f64,
    pub outline_width: f64,
    /// Outline drawn in the highlight color.
    pub highlighted: bool,
}

/// One line to paint, center to center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSegment {
    pub line_id: LineId,
    pub start: Offset,
    pub end: Offset,
    /// Rubber-band line following the pointer.
    pub in_progress: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub lines: Vec<LineSegment>,
    pub shapes: Vec<ShapeSprite>,
    pub selected_tool: ToolType,
}

impl Scene {
    /// Lays out `snapshot` for painting.
    ///
    /// `pointer` is the live pointer position during a line draw; without
    /// it an in-progress line collapses onto its anchor. A line that
    /// references a missing shape is an error.
    pub fn build(
        snapshot: &DiagramSnapshot,
        layout: &ShapeLayout,
        pointer: Option<Offset>,
    ) -> Result<Self, DiagramError> {
        snapshot.check_references()?;
        let centers: HashMap<ShapeId, Offset> = snapshot
            .shapes
            .iter()
            .map(|shape| (shape.id, layout.center_of(shape)))
            .collect();

        // Every endpoint resolves after the reference check.
        let lines = snapshot
            .lines
            .iter()
            .filter_map(|line| {
                let start = *centers.get(&line.shape1_id)?;
                let end = match line.shape2_id {
                    Some(id) => *centers.get(&id)?,
                    None => pointer.unwrap_or(start),
                };
                Some(LineSegment {
                    line_id: line.id,
                    start,
                    end,
                    in_progress: line.shape2_id.is_none(),
                })
            })
            .collect();

        let inset = Offset::new(layout.inset(), layout.inset());
        let shapes = snapshot
            .shapes
            .iter()
            .map(|shape| ShapeSprite {
                shape_id: shape.id,
                shape_type: shape.shape_type,
                origin: shape.offset + inset,
                size: layout.shape_size(),
                outline_width: layout.outline_width(),
                highlighted: snapshot.highlighted == Some(shape.shape_type),
            })
            .collect();

        Ok(Self {
            lines,
            shapes,
            selected_tool: snapshot.selected_tool,
        })
    }
}
