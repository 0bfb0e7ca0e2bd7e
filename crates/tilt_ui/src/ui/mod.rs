//! UI System Module
//!
//! Provides a clean separation between widget logic and rendering backend.
//!
//! Architecture:
//! - widgets/: UI widget definitions (Panel and its base element)
//! - builder: construction-time widget configuration
//! - scene: widget storage, orientation-mix propagation, paint ordering
//! - backend: the immediate-mode `Painter` interface backends implement
//! - rendering: backend-agnostic batching of paint calls into vertex data

pub mod backend;
pub mod builder;
pub mod rendering;
pub mod scene;
pub mod widgets;

pub use backend::{PaintOp, Painter, RecordingPainter};
pub use builder::PanelBuilder;
pub use rendering::{BatchPainter, PanelVertex};
pub use scene::{OrientationGauge, PanelId, UiScene};
pub use widgets::{Panel, PanelConfig, PanelProperties, UiElement};
