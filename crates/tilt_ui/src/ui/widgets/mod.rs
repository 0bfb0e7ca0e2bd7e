//! UI widget definitions

pub mod core;
pub mod panel;

pub use core::UiElement;
pub use panel::{Panel, PanelConfig, PanelProperties};
