//! Blink feedback for the select tool.
//!
//! Tapping a shape with the select tool flashes every shape of that type:
//! the highlighted type is set, held for one interval, cleared, and the
//! cycle repeats. There is no trailing wait after the last pulse.
//!
//! Each sequence runs as its own tokio task. Sequences started while
//! another is running are not serialized; they write the same field and
//! the last write wins.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use dragdrop_core::{BoxSize, Error, Offset, Result, ShapeType};

use crate::diagram_state::{DiagramStore, HighlightClaim};

/// Pulse count and cadence of a blink sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTiming {
    /// Number of "on" phases.
    pub pulses: u32,
    /// Length of each on and off phase.
    pub interval: Duration,
}

impl Default for HighlightTiming {
    fn default() -> Self {
        Self {
            pulses: 3,
            interval: Duration::from_millis(200),
        }
    }
}

/// Spawns blink sequences on a tokio runtime.
#[derive(Debug, Clone)]
pub struct HighlightAnimator {
    runtime: Handle,
    timing: HighlightTiming,
}

impl HighlightAnimator {
    pub fn new(runtime: Handle, timing: HighlightTiming) -> Self {
        Self { runtime, timing }
    }

    /// Uses the runtime the caller is running on.
    pub fn try_current(timing: HighlightTiming) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| Error::other(format!("Highlight animator needs a tokio runtime: {}", e)))?;
        Ok(Self::new(runtime, timing))
    }

    pub fn timing(&self) -> HighlightTiming {
        self.timing
    }

    /// Blinks the type of the top-most shape under `point`.
    ///
    /// Returns immediately; `None` when nothing was hit.
    pub fn highlight_shape(
        &self,
        store: &DiagramStore,
        point: Offset,
        box_size: BoxSize,
    ) -> Option<HighlightHandle> {
        let shape = store.shape_at(point, box_size)?;
        tracing::debug!("Highlighting {} via {}", shape.shape_type, shape.id);
        Some(self.blink(store, shape.shape_type))
    }

    /// Starts a blink sequence for `shape_type`.
    pub fn blink(&self, store: &DiagramStore, shape_type: ShapeType) -> HighlightHandle {
        let claim = store.claim_highlight();
        let task = self.runtime.spawn(run_sequence(
            store.clone(),
            Arc::clone(&claim),
            shape_type,
            self.timing,
        ));
        HighlightHandle {
            shape_type,
            store: store.clone(),
            claim,
            task,
        }
    }
}

async fn run_sequence(
    store: DiagramStore,
    claim: Arc<HighlightClaim>,
    shape_type: ShapeType,
    timing: HighlightTiming,
) {
    for pulse in 0..timing.pulses {
        store.set_highlight(&claim, Some(shape_type));
        tokio::time::sleep(timing.interval).await;
        store.set_highlight(&claim, None);
        if pulse + 1 < timing.pulses {
            tokio::time::sleep(timing.interval).await;
        }
    }
    tracing::trace!("Highlight sequence for {} finished", shape_type);
}

/// A running blink sequence.
///
/// Dropping the handle detaches the task; it still runs to completion.
#[derive(Debug)]
pub struct HighlightHandle {
    shape_type: ShapeType,
    store: DiagramStore,
    claim: Arc<HighlightClaim>,
    task: JoinHandle<()>,
}

impl HighlightHandle {
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the sequence to finish.
    pub async fn finished(self) {
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                tracing::warn!("Highlight sequence for {} failed: {}", self.shape_type, e);
            }
        }
    }

    /// Stops the sequence and clears the highlight if this sequence wrote
    /// it last.
    ///
    /// A task already mid-poll on another worker may still run, but its
    /// writes are ignored from here on.
    pub fn cancel(self) {
        self.store.release_highlight(&self.claim);
        self.task.abort();
    }
}
