//! Panel widget - a colored rectangle background
//!
//! The panel owns no color state of its own; it reads the blended color from
//! its configuration at paint time.

use super::core::UiElement;
use crate::foundation::color::Color;
use crate::layout::{Orientation, OrientationBlend, PerOrientation, Scope};
use crate::ui::backend::Painter;

/// Panel properties stored for one concrete orientation
#[derive(Debug, Clone, Copy)]
pub struct PanelProperties {
    /// Background color for this orientation
    pub color: Color,
}

impl Default for PanelProperties {
    fn default() -> Self {
        Self { color: Color::LIGHT_GRAY }
    }
}

/// Panel configuration: per-orientation colors plus the derived blend.
///
/// The derived color is always a convex combination of the stored portrait
/// and landscape colors; it is recomputed by
/// [`OrientationBlend::blend_orientations`], never set directly.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    props: PerOrientation<PanelProperties>,
    color: Color,
}

impl PanelConfig {
    /// Create a config with the default color for both orientations
    pub fn new() -> Self {
        Self {
            props: PerOrientation::default(),
            color: Color::LIGHT_GRAY,
        }
    }

    /// Overwrite the stored color for the selected scope
    pub fn set_color(&mut self, scope: Scope, color: Color) {
        self.props.set(scope, PanelProperties { color });
    }

    /// The properties stored for an orientation
    pub const fn properties(&self, orientation: Orientation) -> &PanelProperties {
        self.props.get(orientation)
    }

    /// Mutable access to the properties stored for an orientation
    pub fn properties_mut(&mut self, orientation: Orientation) -> &mut PanelProperties {
        self.props.get_mut(orientation)
    }

    /// The current blended color
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationBlend for PanelConfig {
    fn blend_orientations(&mut self, portrait_mix: f32) {
        self.color = Color::mix(
            self.props.get(Orientation::Portrait).color,
            self.props.get(Orientation::Landscape).color,
            portrait_mix,
        );
    }
}

/// A panel with a single color background
#[derive(Debug, Clone)]
pub struct Panel {
    element: UiElement,
    config: PanelConfig,
}

impl Panel {
    /// Create a panel from its base element and configuration.
    ///
    /// The derived state is blended to fully portrait so the panel is
    /// paintable before any rotation occurs.
    pub fn new(element: UiElement, config: PanelConfig) -> Self {
        let mut panel = Self { element, config };
        panel.blend_orientations(1.0);
        panel
    }

    /// The panel's base element
    pub const fn element(&self) -> &UiElement {
        &self.element
    }

    /// Mutable access to the panel's base element
    pub fn element_mut(&mut self) -> &mut UiElement {
        &mut self.element
    }

    /// The panel's configuration
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Mutable access to the panel's configuration
    pub fn config_mut(&mut self) -> &mut PanelConfig {
        &mut self.config
    }

    /// Draw a rectangular shape with the current size and color of this panel
    pub fn paint(&self, painter: &mut dyn Painter) {
        let color = self.config.color();
        painter.set_color(color);
        painter.fill_rect(0.0, 0.0, self.element.width(), self.element.height());
    }
}

impl OrientationBlend for Panel {
    /// Interpolates panel geometry and color, in that order
    fn blend_orientations(&mut self, portrait_mix: f32) {
        self.element.layout_mut().blend_orientations(portrait_mix);
        self.config.blend_orientations(portrait_mix);
    }
}
