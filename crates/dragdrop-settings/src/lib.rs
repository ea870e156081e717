//! # DragDrop Settings
//!
//! Editor configuration: the layout constants hit-testing and rendering
//! must agree on, the touch slop, and highlight timing.

pub mod config;

pub use config::{EditorConfig, GestureSettings, HighlightSettings, LayoutSettings};
