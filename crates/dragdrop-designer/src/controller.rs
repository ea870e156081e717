//! Routes classified gestures to store operations based on the selected tool.
//!
//! | Tool                     | Tap              | Drag                                   |
//! |--------------------------|------------------|----------------------------------------|
//! | Circle, Square, Triangle | place shape      | ignored                                |
//! | Select                   | highlight shape  | start_drag / drag / end_drag           |
//! | DrawLine                 | ignored          | start_line / track pointer / end_line  |
//!
//! The tool is latched when a drag starts, so the end handler always pairs
//! with the start handler even if the tool changes mid-gesture.

use dragdrop_core::{Offset, Shape, ShapeLayout, ToolType};

use crate::diagram_state::DiagramStore;
use crate::gesture::{Gesture, GestureDetector, PointerEvent};
use crate::highlight::{HighlightAnimator, HighlightHandle};

/// Drives a [`DiagramStore`] from raw pointer input.
#[derive(Debug)]
pub struct DiagramController {
    store: DiagramStore,
    detector: GestureDetector,
    layout: ShapeLayout,
    animator: HighlightAnimator,
    /// Tool in effect for the current drag.
    drag_tool: Option<ToolType>,
    /// Live pointer while a line is being drawn.
    pointer: Option<Offset>,
}

impl DiagramController {
    pub fn new(
        store: DiagramStore,
        layout: ShapeLayout,
        touch_slop: f64,
        animator: HighlightAnimator,
    ) -> Self {
        Self {
            store,
            detector: GestureDetector::new(touch_slop),
            layout,
            animator,
            drag_tool: None,
            pointer: None,
        }
    }

    pub fn store(&self) -> &DiagramStore {
        &self.store
    }

    pub fn layout(&self) -> &ShapeLayout {
        &self.layout
    }

    /// Where the rubber-band line should end, while one is being drawn.
    pub fn rubber_band_pointer(&self) -> Option<Offset> {
        self.pointer
    }

    /// Selects a tool.
    pub fn select_tool(&self, tool: ToolType) {
        self.store.select_tool(tool);
    }

    /// Feeds one pointer event.
    ///
    /// Returns the handle of a highlight sequence if this event started one.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<HighlightHandle> {
        let mut started = None;
        for gesture in self.detector.handle(event) {
            if let Some(handle) = self.dispatch(gesture) {
                started = Some(handle);
            }
        }
        started
    }

    fn dispatch(&mut self, gesture: Gesture) -> Option<HighlightHandle> {
        let box_size = self.layout.box_size();
        match gesture {
            Gesture::Tap(point) => {
                let tool = self.store.selected_tool();
                match (tool, tool.shape_type()) {
                    (_, Some(shape_type)) => {
                        let shape = Shape::new(shape_type, self.layout.centered_at(point));
                        self.store.add_shape(shape);
                        None
                    }
                    (ToolType::Select, None) => {
                        self.animator.highlight_shape(&self.store, point, box_size)
                    }
                    _ => None,
                }
            }
            Gesture::DragStart(origin) => {
                let tool = self.store.selected_tool();
                tracing::debug!("{} drag from {}", tool, origin);
                self.drag_tool = Some(tool);
                match tool {
                    ToolType::Select => {
                        self.store.start_drag(origin, box_size);
                    }
                    ToolType::DrawLine => {
                        self.store.start_line(origin, box_size);
                        self.pointer = Some(origin);
                    }
                    ToolType::Circle | ToolType::Square | ToolType::Triangle => {}
                }
                None
            }
            Gesture::Drag(point) => {
                match self.drag_tool {
                    Some(ToolType::Select) => self.store.drag(point),
                    Some(ToolType::DrawLine) => self.pointer = Some(point),
                    _ => {}
                }
                None
            }
            Gesture::DragEnd(last) | Gesture::DragCancel(last) => {
                match self.drag_tool.take() {
                    Some(ToolType::Select) => self.store.end_drag(),
                    Some(ToolType::DrawLine) => {
                        let end = self.pointer.take().unwrap_or(last);
                        self.store.end_line(end, box_size);
                    }
                    _ => {}
                }
                None
            }
        }
    }
}
