//! Headless session driver.
//!
//! Replays a fixed pointer script against a fresh diagram, the same way a
//! platform input layer would, and returns the resulting scene. Used by the
//! binary as a smoke run and by the integration tests.

use dragdrop_core::{EventFilter, Offset, ToolType};
use dragdrop_designer::{DiagramController, DiagramStore, HighlightAnimator, PointerEvent, Scene};
use dragdrop_settings::EditorConfig;

/// Presses and releases at `(x, y)`.
pub fn tap(x: f64, y: f64) -> Vec<PointerEvent> {
    vec![PointerEvent::Down(Offset::new(x, y)), PointerEvent::Up]
}

/// Presses at the first point, moves through the rest, then releases.
pub fn drag_path(points: &[(f64, f64)]) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(points.len() + 1);
    let mut points = points.iter().copied().map(Offset::from);
    if let Some(first) = points.next() {
        events.push(PointerEvent::Down(first));
        events.extend(points.map(PointerEvent::Move));
        events.push(PointerEvent::Up);
    }
    events
}

/// One scripted step: pick a tool, then feed pointer events.
#[derive(Debug, Clone)]
pub struct Step {
    pub tool: ToolType,
    pub events: Vec<PointerEvent>,
}

impl Step {
    pub fn new(tool: ToolType, events: Vec<PointerEvent>) -> Self {
        Self { tool, events }
    }
}

/// Places three shapes, connects two, drags one, and blinks one.
pub fn demo_script() -> Vec<Step> {
    vec![
        Step::new(ToolType::Square, tap(100.0, 100.0)),
        Step::new(ToolType::Circle, tap(200.0, 200.0)),
        Step::new(ToolType::Triangle, tap(320.0, 120.0)),
        Step::new(
            ToolType::DrawLine,
            drag_path(&[(100.0, 100.0), (150.0, 150.0), (200.0, 200.0)]),
        ),
        Step::new(ToolType::Select, drag_path(&[(200.0, 200.0), (250.0, 200.0)])),
        Step::new(ToolType::Select, tap(100.0, 100.0)),
    ]
}

/// Runs `script` against a new diagram and waits for any highlight to finish.
///
/// Must be called from within a tokio runtime.
pub async fn run_script(config: &EditorConfig, script: &[Step]) -> dragdrop_core::Result<Scene> {
    config.validate()?;
    let layout = config.shape_layout()?;
    let animator = HighlightAnimator::try_current(config.highlight_timing())?;

    let store = DiagramStore::new();
    store.bus().subscribe(EventFilter::All, |event| {
        tracing::info!(category = %event.category(), "{}", event.description());
    });

    let mut controller =
        DiagramController::new(store.clone(), layout, config.gestures.touch_slop, animator);
    let mut highlights = Vec::new();
    for step in script {
        controller.select_tool(step.tool);
        for event in &step.events {
            highlights.extend(controller.handle_pointer(*event));
        }
    }

    for handle in highlights {
        handle.finished().await;
    }

    Ok(Scene::build(
        &store.snapshot(),
        controller.layout(),
        controller.rubber_band_pointer(),
    )?)
}

/// Runs [`demo_script`].
pub async fn run_scripted_session(config: &EditorConfig) -> dragdrop_core::Result<Scene> {
    tracing::info!("Replaying demo session");
    run_script(config, &demo_script()).await
}
