//! # DragDrop
//!
//! An interactive diagram editor core: place shapes on a canvas, connect
//! them with lines, drag them around, and blink a shape type by tapping it.
//!
//! ## Architecture
//!
//! DragDrop is organized as a workspace with multiple crates:
//!
//! 1. **dragdrop-core** - Data model, geometry and hit-testing, errors, event bus
//! 2. **dragdrop-designer** - State store, gesture interpreter, tool routing, highlight animator
//! 3. **dragdrop-settings** - Editor configuration files
//! 4. **dragdrop** - This crate; logging setup and a headless session driver
//!
//! Rendering and platform input plumbing live outside this workspace; they
//! talk to the core through [`PointerEvent`]s in and [`DiagramEvent`]s /
//! [`Scene`]s out.

pub mod session;

pub use dragdrop_core::{
    hit_test, BoxSize, DiagramError, DiagramEvent, Error, EventBus, EventCategory, EventFilter,
    Line, Offset, Result, Shape, ShapeId, ShapeLayout, ShapeType, ToolType,
};

pub use dragdrop_designer::{
    DiagramController, DiagramSnapshot, DiagramStore, Gesture, GestureDetector, HighlightAnimator,
    HighlightHandle, HighlightTiming, PointerEvent, Scene,
};

pub use dragdrop_settings::EditorConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
