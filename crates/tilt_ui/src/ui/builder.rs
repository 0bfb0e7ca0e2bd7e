//! Builder for panel construction
//!
//! Provides a builder pattern API for assembling panels with explicit
//! per-orientation configuration. Every orientation-dependent setter takes a
//! [`Scope`] parameter at the call site; there is no ambient "current
//! orientation" builder state.
//!
//! # Examples
//! ```
//! use tilt_ui::prelude::*;
//!
//! let panel = PanelBuilder::new()
//!     .size(Scope::One(Orientation::Portrait), 320.0, 64.0)
//!     .size(Scope::One(Orientation::Landscape), 480.0, 48.0)
//!     .color(Scope::All, Color::from_hex(0x202830))
//!     .z_order(2)
//!     .build();
//!
//! assert_eq!(panel.element().width(), 320.0);
//! ```

use crate::foundation::color::Color;
use crate::layout::{Bounds, Orientation, Scope};
use crate::style::PanelStyle;
use crate::ui::widgets::{Panel, PanelConfig, UiElement};

/// Builder for creating panels
///
/// Starts from a default-initialized configuration (light-gray background,
/// default geometry) and applies setters in call order. `build` cannot fail.
#[derive(Debug)]
pub struct PanelBuilder {
    element: UiElement,
    config: PanelConfig,
}

impl PanelBuilder {
    /// Create a builder with default element and panel configuration
    pub fn new() -> Self {
        Self {
            element: UiElement::new(),
            config: PanelConfig::new(),
        }
    }

    /// Set the background color for the selected scope
    pub fn color(mut self, scope: Scope, color: Color) -> Self {
        self.config.set_color(scope, color);
        self
    }

    /// The color currently stored for an orientation
    pub const fn color_for(&self, orientation: Orientation) -> Color {
        self.config.properties(orientation).color
    }

    /// Set position and size for the selected scope
    pub fn bounds(mut self, scope: Scope, bounds: Bounds) -> Self {
        self.element.layout_mut().set_bounds(scope, bounds);
        self
    }

    /// Set the size for the selected scope, keeping the stored position
    pub fn size(mut self, scope: Scope, width: f32, height: f32) -> Self {
        match scope {
            Scope::One(orientation) => {
                let b = self.element.layout_mut().bounds_mut(orientation);
                b.size.x = width;
                b.size.y = height;
            }
            Scope::All => {
                for orientation in Orientation::BOTH {
                    let b = self.element.layout_mut().bounds_mut(orientation);
                    b.size.x = width;
                    b.size.y = height;
                }
            }
        }
        self
    }

    /// Set the position for the selected scope, keeping the stored size
    pub fn position(mut self, scope: Scope, x: f32, y: f32) -> Self {
        match scope {
            Scope::One(orientation) => {
                let b = self.element.layout_mut().bounds_mut(orientation);
                b.position.x = x;
                b.position.y = y;
            }
            Scope::All => {
                for orientation in Orientation::BOTH {
                    let b = self.element.layout_mut().bounds_mut(orientation);
                    b.position.x = x;
                    b.position.y = y;
                }
            }
        }
        self
    }

    /// Apply a style sheet entry: one color per concrete orientation
    pub fn styled(self, style: &PanelStyle) -> Self {
        self.color(Scope::One(Orientation::Portrait), style.portrait)
            .color(Scope::One(Orientation::Landscape), style.landscape)
    }

    /// Set the z-order for layering
    pub fn z_order(mut self, z_order: i32) -> Self {
        self.element.z_order = z_order;
        self
    }

    /// Set initial visibility
    pub fn visible(mut self, visible: bool) -> Self {
        self.element.visible = visible;
        self
    }

    /// Build the final panel
    pub fn build(self) -> Panel {
        Panel::new(self.element, self.config)
    }
}

impl Default for PanelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_builder() {
        let panel = PanelBuilder::new()
            .size(Scope::All, 200.0, 40.0)
            .color(Scope::All, Color::new(0.1, 0.2, 0.3, 1.0))
            .z_order(5)
            .build();

        assert_eq!(panel.element().width(), 200.0);
        assert_eq!(panel.element().height(), 40.0);
        assert_eq!(panel.element().z_order, 5);
        assert_eq!(
            panel.config().properties(Orientation::Portrait).color,
            Color::new(0.1, 0.2, 0.3, 1.0)
        );
    }

    #[test]
    fn test_scoped_color_routes_to_one_orientation() {
        let teal = Color::from_hex(0x0F6F6F);
        let builder = PanelBuilder::new().color(Scope::One(Orientation::Landscape), teal);

        assert_eq!(builder.color_for(Orientation::Landscape), teal);
        assert_eq!(builder.color_for(Orientation::Portrait), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_build_defaults() {
        let panel = PanelBuilder::new().build();

        assert!(panel.element().visible);
        assert_eq!(panel.element().z_order, 0);
        assert_eq!(panel.config().color(), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_per_orientation_size_survives_blend() {
        let mut panel = PanelBuilder::new()
            .size(Scope::One(Orientation::Portrait), 100.0, 300.0)
            .size(Scope::One(Orientation::Landscape), 300.0, 100.0)
            .build();

        use crate::layout::OrientationBlend;
        panel.blend_orientations(0.0);
        assert_eq!(panel.element().width(), 300.0);
        assert_eq!(panel.element().height(), 100.0);
    }

    #[test]
    fn test_styled_applies_both_orientations() {
        let style = PanelStyle {
            portrait: Color::from_hex(0x112233),
            landscape: Color::from_hex(0x332211),
        };
        let builder = PanelBuilder::new().styled(&style);

        assert_eq!(builder.color_for(Orientation::Portrait), style.portrait);
        assert_eq!(builder.color_for(Orientation::Landscape), style.landscape);
    }
}
