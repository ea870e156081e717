//! # Event Bus Module
//!
//! Publish/subscribe plumbing between the diagram store and its observers
//! (the render layer, tests, diagnostics).
//!
//! ## Overview
//!
//! - The store publishes one [`DiagramEvent`] per state change
//! - Subscribers filter by [`EventCategory`]; there is one category per
//!   read channel (tool, highlight, shapes, lines)
//! - Synchronous handlers run on the publishing thread; async consumers
//!   poll a broadcast receiver
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dragdrop_core::event_bus::{DiagramEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Shapes]),
//!     |event| {
//!         if let DiagramEvent::ShapesChanged(shapes) = event {
//!             println!("{} shapes", shapes.len());
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
