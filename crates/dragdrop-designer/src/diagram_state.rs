//! Diagram state store.
//!
//! Owns the shapes, lines, selected tool, and transient interaction state
//! (active drag, in-progress line, highlighted type). Every mutation goes
//! through [`DiagramStore`], which serializes writes behind a mutex and
//! publishes the changed channel on its [`EventBus`] once the state lock is
//! released. A second, reentrant lock spans write and publish, so observers
//! see changes in the order they were made even when the highlight task
//! writes from another thread. Observers only ever receive owned snapshots.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use smallvec::SmallVec;

use dragdrop_core::{
    hit_test, BoxSize, DiagramError, DiagramEvent, EventBus, Line, LineId, Offset, Shape,
    ShapeId, ShapeType, ToolType,
};

/// Shape being dragged and where the pointer grabbed it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    shape_id: ShapeId,
    /// Pointer position minus shape offset at drag start.
    anchor: Offset,
}

#[derive(Debug, Clone, Default)]
struct DiagramState {
    shapes: Vec<Shape>,
    lines: Vec<Line>,
    selected_tool: ToolType,
    highlighted: Option<ShapeType>,
    /// Claim that last wrote `highlighted`.
    highlight_owner: Option<u64>,
    next_claim: u64,
    drag: Option<DragState>,
    line_in_progress: Option<LineId>,
}

/// One blink sequence's right to write the highlight.
///
/// Once released, writes through the claim are ignored.
#[derive(Debug)]
pub(crate) struct HighlightClaim {
    id: u64,
    released: AtomicBool,
}

impl HighlightClaim {
    fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

type Changes = SmallVec<[DiagramEvent; 2]>;

/// Immutable copy of the whole diagram at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiagramSnapshot {
    /// Shapes in z-order, bottom first.
    pub shapes: Vec<Shape>,
    pub lines: Vec<Line>,
    pub selected_tool: ToolType,
    pub highlighted: Option<ShapeType>,
    pub dragging: Option<ShapeId>,
    pub line_in_progress: Option<LineId>,
}

impl DiagramSnapshot {
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    /// Checks that every line endpoint resolves to a shape.
    pub fn check_references(&self) -> Result<(), DiagramError> {
        for line in &self.lines {
            for id in std::iter::once(line.shape1_id).chain(line.shape2_id) {
                if self.find_shape(id).is_none() {
                    return Err(DiagramError::DanglingLine {
                        line: line.id.as_uuid(),
                        shape: id.as_uuid(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Handle to the diagram state. Cloning shares the same state and bus.
#[derive(Clone)]
pub struct DiagramStore {
    state: Arc<Mutex<DiagramState>>,
    /// Held from before the state lock until publishing ends.
    publish_order: Arc<ReentrantMutex<()>>,
    bus: Arc<EventBus>,
}

impl DiagramStore {
    /// Creates an empty diagram with its own event bus.
    pub fn new() -> Self {
        Self::with_bus(Arc::new(EventBus::new()))
    }

    /// Creates an empty diagram publishing on `bus`.
    pub fn with_bus(bus: Arc<EventBus>) -> Self {
        Self {
            state: Arc::new(Mutex::new(DiagramState::default())),
            publish_order: Arc::new(ReentrantMutex::new(())),
            bus,
        }
    }

    /// The bus observers subscribe to.
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        let state = self.state.lock();
        DiagramSnapshot {
            shapes: state.shapes.clone(),
            lines: state.lines.clone(),
            selected_tool: state.selected_tool,
            highlighted: state.highlighted,
            dragging: state.drag.map(|drag| drag.shape_id),
            line_in_progress: state.line_in_progress,
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        self.state.lock().shapes.clone()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.state.lock().lines.clone()
    }

    pub fn selected_tool(&self) -> ToolType {
        self.state.lock().selected_tool
    }

    pub fn highlighted_shape_type(&self) -> Option<ShapeType> {
        self.state.lock().highlighted
    }

    /// Current value of the shape being dragged, if any.
    pub fn dragged_shape(&self) -> Option<Shape> {
        let state = self.state.lock();
        let drag = state.drag?;
        state.shapes.iter().find(|s| s.id == drag.shape_id).cloned()
    }

    /// The line currently being drawn, if any.
    pub fn line_in_progress(&self) -> Option<Line> {
        let state = self.state.lock();
        let id = state.line_in_progress?;
        state.lines.iter().find(|l| l.id == id).cloned()
    }

    /// Top-most shape under `point`.
    pub fn shape_at(&self, point: Offset, box_size: BoxSize) -> Option<Shape> {
        hit_test(&self.state.lock().shapes, point, box_size).cloned()
    }

    /// Replaces the selected tool.
    pub fn select_tool(&self, tool: ToolType) {
        self.update(|state, changes| {
            if state.selected_tool != tool {
                tracing::debug!("Tool {} -> {}", state.selected_tool, tool);
                state.selected_tool = tool;
                changes.push(DiagramEvent::ToolChanged(tool));
            }
        });
    }

    /// Appends a shape on top of the others.
    pub fn add_shape(&self, shape: Shape) {
        self.update(|state, changes| {
            tracing::debug!("Adding {} {} at {}", shape.shape_type, shape.id, shape.offset);
            state.shapes.push(shape);
            changes.push(DiagramEvent::ShapesChanged(state.shapes.clone()));
        });
    }

    /// Grabs the top-most shape under `point`. Returns the grabbed shape's id.
    pub fn start_drag(&self, point: Offset, box_size: BoxSize) -> Option<ShapeId> {
        self.update(|state, _| {
            let shape = hit_test(&state.shapes, point, box_size)?;
            let drag = DragState {
                shape_id: shape.id,
                anchor: point - shape.offset,
            };
            tracing::debug!("Drag start on {} (anchor {})", drag.shape_id, drag.anchor);
            state.drag = Some(drag);
            Some(drag.shape_id)
        })
    }

    /// Moves the dragged shape so the grab point follows `point`.
    ///
    /// The shape keeps its place in the z-order.
    pub fn drag(&self, point: Offset) {
        self.update(|state, changes| {
            let Some(drag) = state.drag else {
                return;
            };
            let Some(slot) = state.shapes.iter_mut().find(|s| s.id == drag.shape_id) else {
                tracing::warn!("Dragged shape {} no longer exists", drag.shape_id);
                state.drag = None;
                return;
            };
            *slot = slot.moved_to(point - drag.anchor);
            changes.push(DiagramEvent::ShapesChanged(state.shapes.clone()));
        });
    }

    /// Releases the dragged shape, if any.
    pub fn end_drag(&self) {
        self.update(|state, _| {
            if let Some(drag) = state.drag.take() {
                tracing::debug!("Drag end on {}", drag.shape_id);
            }
        });
    }

    /// Starts a line from the top-most shape under `point`.
    pub fn start_line(&self, point: Offset, box_size: BoxSize) -> Option<LineId> {
        self.update(|state, changes| {
            let shape = hit_test(&state.shapes, point, box_size)?;
            let line = Line::new(shape.id);
            let id = line.id;
            tracing::debug!("Line {} started from {}", id, shape.id);
            state.lines.push(line);
            state.line_in_progress = Some(id);
            changes.push(DiagramEvent::LinesChanged(state.lines.clone()));
            Some(id)
        })
    }

    /// Finishes the in-progress line at the shape under `point`.
    ///
    /// Over empty canvas the attempted line is discarded. Returns the
    /// completed line, or `None` if there was nothing to complete.
    pub fn end_line(&self, point: Offset, box_size: BoxSize) -> Option<Line> {
        self.update(|state, changes| {
            let id = state.line_in_progress.take()?;
            let index = state.lines.iter().position(|l| l.id == id)?;
            let target = hit_test(&state.shapes, point, box_size).map(|s| s.id);
            let completed = match target {
                Some(shape2_id) => {
                    let line = state.lines[index].connected_to(shape2_id);
                    tracing::debug!("Line {} connected to {}", id, shape2_id);
                    state.lines[index] = line.clone();
                    Some(line)
                }
                None => {
                    tracing::debug!("Line {} dropped over empty canvas", id);
                    state.lines.remove(index);
                    None
                }
            };
            changes.push(DiagramEvent::LinesChanged(state.lines.clone()));
            completed
        })
    }

    /// Issues a new highlight claim for one blink sequence.
    pub(crate) fn claim_highlight(&self) -> Arc<HighlightClaim> {
        let mut state = self.state.lock();
        let id = state.next_claim;
        state.next_claim += 1;
        Arc::new(HighlightClaim {
            id,
            released: AtomicBool::new(false),
        })
    }

    /// Sets or clears the highlighted shape type on behalf of `claim`.
    ///
    /// Does nothing once the claim is released.
    pub(crate) fn set_highlight(&self, claim: &HighlightClaim, highlighted: Option<ShapeType>) {
        self.update(|state, changes| {
            if claim.is_released() {
                return;
            }
            state.highlight_owner = Some(claim.id);
            if state.highlighted != highlighted {
                state.highlighted = highlighted;
                changes.push(DiagramEvent::HighlightChanged(highlighted));
            }
        });
    }

    /// Revokes `claim` and clears the highlight if `claim` wrote it last.
    pub(crate) fn release_highlight(&self, claim: &HighlightClaim) {
        claim.released.store(true, Ordering::SeqCst);
        self.update(|state, changes| {
            if state.highlight_owner != Some(claim.id) {
                return;
            }
            state.highlight_owner = None;
            if state.highlighted.take().is_some() {
                changes.push(DiagramEvent::HighlightChanged(None));
            }
        });
    }

    /// Applies `f` under the lock, then publishes whatever it recorded.
    ///
    /// The publish-order lock is reentrant, so handlers may call back into
    /// the store.
    fn update<R>(&self, f: impl FnOnce(&mut DiagramState, &mut Changes) -> R) -> R {
        let _order = self.publish_order.lock();
        let mut changes = Changes::new();
        let result = {
            let mut state = self.state.lock();
            f(&mut state, &mut changes)
        };
        for event in changes {
            tracing::trace!("Publishing: {}", event.description());
            // Nobody listening is fine.
            self.bus.publish(event).ok();
        }
        result
    }
}

impl Default for DiagramStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiagramStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("DiagramStore")
            .field("shapes", &state.shapes.len())
            .field("lines", &state.lines.len())
            .field("selected_tool", &state.selected_tool)
            .finish()
    }
}
