//! Orientation-keyed layout configuration
//!
//! Widgets keep one property set per concrete device orientation and derive
//! their current state by blending the portrait and landscape sets. This
//! module provides the orientation keys, the two-slot property store, and
//! the blendable geometry configuration.

pub mod config;
pub mod orientation;

pub use config::{Bounds, LayoutConfig, OrientationBlend};
pub use orientation::{Orientation, PerOrientation, Scope};
