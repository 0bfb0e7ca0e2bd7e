//! Scene management
//!
//! Central storage for panels: assigns ids, propagates the orientation mix
//! to every widget when the device rotates, and paints visible widgets in
//! z-order. This is the "orientation controller" side of the widget
//! contract; widgets never initiate blending themselves.

use crate::layout::{Orientation, OrientationBlend};
use crate::ui::backend::Painter;
use crate::ui::widgets::Panel;
use std::collections::HashMap;

/// Unique identifier for scene panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

/// Panel storage with orientation-mix propagation
pub struct UiScene {
    /// Panels by ID
    panels: HashMap<PanelId, Panel>,

    /// Next panel ID
    next_id: u64,

    /// Current portrait-mix factor applied to all panels
    mix: f32,
}

impl UiScene {
    /// Create an empty scene, fully portrait
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
            next_id: 0,
            mix: 1.0,
        }
    }

    /// Add a panel to the scene.
    ///
    /// The panel is immediately blended to the scene's current mix so it
    /// cannot render stale against already-rotated siblings.
    pub fn add_panel(&mut self, mut panel: Panel) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        panel.blend_orientations(self.mix);
        self.panels.insert(id, panel);
        id
    }

    /// Remove a panel from the scene
    pub fn remove_panel(&mut self, id: PanelId) -> Option<Panel> {
        self.panels.remove(&id)
    }

    /// Get panel reference
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    /// Get panel mutable reference
    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    /// Number of panels in the scene
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the scene holds no panels
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// The portrait-mix factor currently applied
    pub const fn orientation_mix(&self) -> f32 {
        self.mix
    }

    /// Push a new portrait-mix factor through every panel
    pub fn set_orientation_mix(&mut self, portrait_mix: f32) {
        log::debug!(
            "Blending {} panels to portrait mix {:.3}",
            self.panels.len(),
            portrait_mix
        );
        self.mix = portrait_mix;
        for panel in self.panels.values_mut() {
            panel.blend_orientations(portrait_mix);
        }
    }

    /// Paint visible panels in ascending z-order.
    ///
    /// The painter's origin is moved to each panel's blended position before
    /// the panel paints from its local origin, and restored afterwards.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let mut sorted: Vec<&Panel> = self.panels.values().collect();
        sorted.sort_by_key(|panel| panel.element().z_order);

        for panel in sorted {
            if !panel.element().visible {
                continue;
            }
            painter.set_origin(panel.element().x(), panel.element().y());
            panel.paint(painter);
        }

        painter.set_origin(0.0, 0.0);
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the device's effective orientation mix over time.
///
/// Holds a current and a target portrait-mix factor and advances linearly,
/// producing the factor fed to [`UiScene::set_orientation_mix`] each frame.
/// The rotation signal itself (sensor, window manager) stays external.
#[derive(Debug, Clone, Copy)]
pub struct OrientationGauge {
    current: f32,
    target: f32,
    /// Transition speed in mix units per second
    speed: f32,
}

impl OrientationGauge {
    /// Create a gauge resting at the given orientation
    pub fn new(orientation: Orientation) -> Self {
        let mix = Self::mix_for(orientation);
        Self {
            current: mix,
            target: mix,
            speed: 4.0,
        }
    }

    /// Set the transition speed in mix units per second
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    const fn mix_for(orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Portrait => 1.0,
            Orientation::Landscape => 0.0,
        }
    }

    /// Begin transitioning toward an orientation
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.target = Self::mix_for(orientation);
    }

    /// Jump to an orientation without transitioning
    pub fn snap_to(&mut self, orientation: Orientation) {
        self.current = Self::mix_for(orientation);
        self.target = self.current;
    }

    /// The current portrait-mix factor
    pub const fn mix(&self) -> f32 {
        self.current
    }

    /// Whether a transition is still in progress
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < f32::EPSILON
    }

    /// Advance the transition by `dt` seconds and return the new mix factor
    pub fn step(&mut self, dt: f32) -> f32 {
        let max_delta = self.speed * dt;
        let delta = self.target - self.current;
        if delta.abs() <= max_delta {
            self.current = self.target;
        } else {
            self.current += max_delta * delta.signum();
        }
        self.current
    }
}

impl Default for OrientationGauge {
    fn default() -> Self {
        Self::new(Orientation::Portrait)
    }
}
