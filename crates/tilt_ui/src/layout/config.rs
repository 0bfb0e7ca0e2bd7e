//! Blendable geometry configuration
//!
//! Every widget keeps portrait and landscape geometry and derives its
//! effective bounds by blending the two. Geometry blends before any
//! widget-specific properties (colors), so configs implement
//! [`OrientationBlend`] independently and widgets invoke them in sequence
//! rather than chaining through a base-class hook.

use crate::foundation::math::Vec2;
use crate::layout::orientation::{Orientation, PerOrientation, Scope};

/// Per-orientation blended state.
///
/// Implementors recompute their derived values as a convex combination of
/// their portrait and landscape stored values. `portrait_mix = 1.0` means
/// fully portrait, `0.0` fully landscape; intermediate factors occur while
/// the device rotates. Factors outside `[0, 1]` extrapolate without error.
pub trait OrientationBlend {
    /// Recompute derived state for the given portrait-mix factor
    fn blend_orientations(&mut self, portrait_mix: f32);
}

/// Position and size of an element for one orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Top-left position in parent space (pixels)
    pub position: Vec2,
    /// Size in pixels (width, height)
    pub size: Vec2,
}

impl Bounds {
    /// Create bounds from position and size components
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Blend two bounds by a portrait-mix factor, component-wise
    pub fn mix(a: Bounds, b: Bounds, portrait_mix: f32) -> Bounds {
        let f = portrait_mix;
        Bounds {
            position: a.position * f + b.position * (1.0 - f),
            size: a.size * f + b.size * (1.0 - f),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 50.0)
    }
}

/// Orientation-keyed geometry for a single widget.
///
/// Holds one [`Bounds`] per concrete orientation plus the derived blended
/// bounds. The derived bounds are always a convex combination of the stored
/// portrait and landscape bounds; they are recomputed by
/// [`OrientationBlend::blend_orientations`], never set directly.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    bounds: PerOrientation<Bounds>,
    current: Bounds,
}

impl LayoutConfig {
    /// Create a layout config with default bounds for both orientations.
    ///
    /// The derived bounds start at the portrait values.
    pub fn new() -> Self {
        let bounds = PerOrientation::<Bounds>::default();
        let current = *bounds.get(Orientation::Portrait);
        Self { bounds, current }
    }

    /// Overwrite the stored bounds for the selected scope
    pub fn set_bounds(&mut self, scope: Scope, bounds: Bounds) {
        self.bounds.set(scope, bounds);
    }

    /// The stored bounds for an orientation
    pub fn bounds(&self, orientation: Orientation) -> Bounds {
        *self.bounds.get(orientation)
    }

    /// Mutable access to the stored bounds for an orientation
    pub fn bounds_mut(&mut self, orientation: Orientation) -> &mut Bounds {
        self.bounds.get_mut(orientation)
    }

    /// The current blended bounds
    pub const fn current(&self) -> Bounds {
        self.current
    }

    /// Current blended x position
    pub fn x(&self) -> f32 {
        self.current.position.x
    }

    /// Current blended y position
    pub fn y(&self) -> f32 {
        self.current.position.y
    }

    /// Current blended width
    pub fn width(&self) -> f32 {
        self.current.size.x
    }

    /// Current blended height
    pub fn height(&self) -> f32 {
        self.current.size.y
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationBlend for LayoutConfig {
    fn blend_orientations(&mut self, portrait_mix: f32) {
        self.current = Bounds::mix(
            *self.bounds.get(Orientation::Portrait),
            *self.bounds.get(Orientation::Landscape),
            portrait_mix,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_blend_is_convex_combination() {
        let mut layout = LayoutConfig::new();
        layout.set_bounds(Scope::One(Orientation::Portrait), Bounds::new(0.0, 0.0, 100.0, 200.0));
        layout.set_bounds(Scope::One(Orientation::Landscape), Bounds::new(40.0, 10.0, 200.0, 100.0));

        layout.blend_orientations(0.25);

        assert_relative_eq!(layout.x(), 40.0 * 0.75);
        assert_relative_eq!(layout.y(), 10.0 * 0.75);
        assert_relative_eq!(layout.width(), 100.0 * 0.25 + 200.0 * 0.75);
        assert_relative_eq!(layout.height(), 200.0 * 0.25 + 100.0 * 0.75);
    }

    #[test]
    fn test_blend_endpoints() {
        let portrait = Bounds::new(1.0, 2.0, 3.0, 4.0);
        let landscape = Bounds::new(5.0, 6.0, 7.0, 8.0);
        let mut layout = LayoutConfig::new();
        layout.set_bounds(Scope::One(Orientation::Portrait), portrait);
        layout.set_bounds(Scope::One(Orientation::Landscape), landscape);

        layout.blend_orientations(1.0);
        assert_eq!(layout.current(), portrait);

        layout.blend_orientations(0.0);
        assert_eq!(layout.current(), landscape);
    }

    #[test]
    fn test_set_bounds_all() {
        let shared = Bounds::new(0.0, 0.0, 64.0, 64.0);
        let mut layout = LayoutConfig::new();
        layout.set_bounds(Scope::All, shared);

        layout.blend_orientations(0.42);
        assert_eq!(layout.current(), shared);
    }

    #[test]
    fn test_new_starts_at_portrait() {
        let layout = LayoutConfig::new();
        assert_eq!(layout.current(), layout.bounds(Orientation::Portrait));
    }
}
