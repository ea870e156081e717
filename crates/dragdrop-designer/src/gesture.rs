//! Tap/drag disambiguation for a single pointer.
//!
//! ## State Transitions
//!
//! ```text
//! Idle         -> AwaitingSlop  (down)
//! AwaitingSlop -> Dragging      (moved further than the touch slop from the down position)
//! AwaitingSlop -> Idle          (up: emits Tap, or cancel: emits nothing)
//! Dragging     -> Idle          (up: emits DragEnd, or cancel: emits DragCancel)
//! ```
//!
//! Once the slop is exceeded the session is a drag for good, even if the
//! pointer comes back to where it started.

use smallvec::{smallvec, SmallVec};

use dragdrop_core::Offset;

/// Raw pointer input for one pointer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Offset),
    Move(Offset),
    Up,
    Cancel,
}

/// A classified gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Press and release without leaving the slop. Carries the down position.
    Tap(Offset),
    /// The slop was exceeded. Carries the down position, not the current one.
    DragStart(Offset),
    /// Pointer moved during a drag.
    Drag(Offset),
    /// Pointer released during a drag. Carries the last known position.
    DragEnd(Offset),
    /// Input cancelled during a drag. Carries the last known position.
    DragCancel(Offset),
}

/// Interpreter state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    AwaitingSlop {
        origin: Offset,
    },
    Dragging {
        origin: Offset,
        last: Offset,
    },
}

/// Gestures produced by a single pointer event; never more than two.
pub type Gestures = SmallVec<[Gesture; 2]>;

/// Whether the pointer has travelled past the touch slop from `origin`.
pub fn exceeds_slop(origin: Offset, position: Offset, touch_slop: f64) -> bool {
    origin.distance_to(position) > touch_slop
}

/// Pure transition function of the gesture state machine.
pub fn classify(
    phase: GesturePhase,
    event: PointerEvent,
    touch_slop: f64,
) -> (GesturePhase, Gestures) {
    use GesturePhase::*;
    use PointerEvent::*;

    match (phase, event) {
        (Idle, Down(p)) => (AwaitingSlop { origin: p }, Gestures::new()),
        (Idle, Move(_) | Up | Cancel) => (Idle, Gestures::new()),

        (AwaitingSlop { origin }, Move(p)) if exceeds_slop(origin, p, touch_slop) => (
            Dragging { origin, last: p },
            smallvec![Gesture::DragStart(origin), Gesture::Drag(p)],
        ),
        (AwaitingSlop { origin }, Move(_)) => (AwaitingSlop { origin }, Gestures::new()),
        (AwaitingSlop { origin }, Up) => (Idle, smallvec![Gesture::Tap(origin)]),
        (AwaitingSlop { .. }, Cancel) => (Idle, Gestures::new()),
        // A fresh down without an up means the previous press was lost.
        (AwaitingSlop { .. }, Down(p)) => (AwaitingSlop { origin: p }, Gestures::new()),

        (Dragging { origin, .. }, Move(p)) => (
            Dragging { origin, last: p },
            smallvec![Gesture::Drag(p)],
        ),
        (Dragging { last, .. }, Up) => (Idle, smallvec![Gesture::DragEnd(last)]),
        (Dragging { last, .. }, Cancel) => (Idle, smallvec![Gesture::DragCancel(last)]),
        (Dragging { last, .. }, Down(p)) => (
            AwaitingSlop { origin: p },
            smallvec![Gesture::DragCancel(last)],
        ),
    }
}

/// Stateful wrapper around [`classify`].
#[derive(Debug, Clone)]
pub struct GestureDetector {
    phase: GesturePhase,
    touch_slop: f64,
}

impl GestureDetector {
    /// Creates an idle detector. Negative slop is treated as zero.
    pub fn new(touch_slop: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            touch_slop: touch_slop.max(0.0),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Feeds one pointer event and returns the gestures it completes.
    pub fn handle(&mut self, event: PointerEvent) -> Gestures {
        let (next, gestures) = classify(self.phase, event, self.touch_slop);
        if next != self.phase {
            tracing::trace!("Gesture phase {:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
        gestures
    }

    /// Drops any in-flight session without emitting gestures.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(8.0)
    }
}
