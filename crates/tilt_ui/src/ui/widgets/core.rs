//! Core UI widget primitives
//!
//! Shared base state owned by every widget.

use crate::layout::LayoutConfig;

/// Base UI element properties
#[derive(Debug, Clone)]
pub struct UiElement {
    /// Orientation-keyed geometry
    layout: LayoutConfig,

    /// Whether this element is visible
    pub visible: bool,

    /// Z-order for layering (higher = on top)
    pub z_order: i32,
}

impl UiElement {
    /// Create an element with default geometry
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::new(),
            visible: true,
            z_order: 0,
        }
    }

    /// The element's geometry configuration
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Mutable access to the element's geometry configuration
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Current blended x position
    pub fn x(&self) -> f32 {
        self.layout.x()
    }

    /// Current blended y position
    pub fn y(&self) -> f32 {
        self.layout.y()
    }

    /// Current blended width
    pub fn width(&self) -> f32 {
        self.layout.width()
    }

    /// Current blended height
    pub fn height(&self) -> f32 {
        self.layout.height()
    }
}

impl Default for UiElement {
    fn default() -> Self {
        Self::new()
    }
}
