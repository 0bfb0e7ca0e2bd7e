//! # Tilt UI
//!
//! A small orientation-aware widget toolkit for mobile-style UIs.
//!
//! ## Features
//!
//! - **Orientation-Keyed Configuration**: Widgets store one property set per
//!   device orientation (portrait / landscape)
//! - **Blended Rotation**: Layout geometry and colors interpolate smoothly
//!   while the device rotates
//! - **Backend-Agnostic Painting**: Widgets draw through an immediate-mode
//!   `Painter` trait; batching into vertex data is provided, GPU upload is not
//! - **Builder Construction**: Panels are assembled with explicit
//!   per-orientation setters, no hidden builder state
//! - **Style Sheets**: Per-orientation colors loadable from RON or TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use tilt_ui::prelude::*;
//!
//! // A panel that is dark blue in portrait and teal in landscape
//! let mut panel = PanelBuilder::new()
//!     .size(Scope::All, 320.0, 48.0)
//!     .color(Scope::One(Orientation::Portrait), Color::from_hex(0x1A2B4C))
//!     .color(Scope::One(Orientation::Landscape), Color::from_hex(0x0F6F6F))
//!     .build();
//!
//! // Halfway through a device rotation: geometry blends first, then color
//! panel.blend_orientations(0.5);
//!
//! let mut painter = BatchPainter::new(800.0, 480.0);
//! panel.paint(&mut painter);
//! assert_eq!(painter.draws().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod layout;
pub mod style;
pub mod ui;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        foundation::color::Color,
        foundation::math::Vec2,
        layout::{Bounds, LayoutConfig, Orientation, OrientationBlend, PerOrientation, Scope},
        style::{PanelStyle, StyleSheet},
        ui::{
            BatchPainter, OrientationGauge, Painter, Panel, PanelBuilder, PanelConfig, PanelId,
            UiElement, UiScene,
        },
    };
}
