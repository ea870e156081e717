//! # DragDrop Designer
//!
//! The interactive half of the diagram editor: the state store, the
//! gesture interpreter that turns pointer input into taps and drags, the
//! tool router, the highlight animator, and the render scene builder.
//!
//! ## Architecture
//!
//! ```text
//! PointerEvent
//!   └── GestureDetector (Idle / AwaitingSlop / Dragging)
//!         └── DiagramController (routes by selected tool)
//!               ├── DiagramStore (shapes, lines, tool, drag, line-in-progress)
//!               │     └── EventBus (tool, highlight, shapes, lines)
//!               └── HighlightAnimator (tokio task per blink sequence)
//!
//! DiagramSnapshot ──> Scene (sprites and line segments for the renderer)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dragdrop_designer::{DiagramController, DiagramStore, HighlightAnimator, PointerEvent};
//!
//! let store = DiagramStore::new();
//! let animator = HighlightAnimator::try_current(Default::default())?;
//! let mut controller = DiagramController::new(store, Default::default(), 8.0, animator);
//! controller.handle_pointer(PointerEvent::Down((100.0, 100.0).into()));
//! controller.handle_pointer(PointerEvent::Up);
//! ```

pub mod controller;
pub mod diagram_state;
pub mod gesture;
pub mod highlight;
pub mod scene;

pub use controller::DiagramController;
pub use diagram_state::{DiagramSnapshot, DiagramStore};
pub use gesture::{classify, exceeds_slop, Gesture, GestureDetector, GesturePhase, PointerEvent};
pub use highlight::{HighlightAnimator, HighlightHandle, HighlightTiming};
pub use scene::{LineSegment, Scene, ShapeSprite};
