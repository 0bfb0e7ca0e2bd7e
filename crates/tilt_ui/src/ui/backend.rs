//! Painter interface
//!
//! Defines the immediate-mode drawing contract between widgets and rendering
//! backends. Keeps the widget layer independent of any concrete GPU or
//! raster backend: widgets mutate the painter's drawing state and issue fill
//! calls, and each call consumes the state set before it.

use crate::foundation::color::Color;

/// Backend-agnostic immediate-mode drawing surface
pub trait Painter {
    /// Set the active drawing color for subsequent fill calls
    fn set_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle with the active color.
    ///
    /// Coordinates are relative to the painter's current origin; widgets
    /// paint from their own local origin.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Set the local origin added to subsequent fill coordinates.
    ///
    /// The scene positions each widget by moving the origin before
    /// delegating to the widget's paint method.
    fn set_origin(&mut self, x: f32, y: f32);
}

/// A single recorded painter call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    /// `set_color` was invoked
    SetColor(Color),
    /// `fill_rect` was invoked with (x, y, width, height)
    FillRect(f32, f32, f32, f32),
    /// `set_origin` was invoked with (x, y)
    SetOrigin(f32, f32),
}

/// Painter that records every call it receives.
///
/// Useful for asserting exact paint sequences in tests and for headless
/// inspection of widget output.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, in issue order
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Forget all recorded calls
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn set_color(&mut self, color: Color) {
        self.ops.push(PaintOp::SetColor(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(PaintOp::FillRect(x, y, width, height));
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.ops.push(PaintOp::SetOrigin(x, y));
    }
}
