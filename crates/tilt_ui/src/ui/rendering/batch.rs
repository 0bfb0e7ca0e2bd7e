//! Batching painter
//!
//! A [`Painter`] implementation that converts fill calls into NDC quad
//! vertices and per-color draw ranges, matching what a GPU backend consumes:
//! one vertex buffer upload plus `(start, count, color)` draw calls.

use super::vertex::PanelVertex;
use crate::foundation::color::Color;
use crate::ui::backend::Painter;

/// One draw range over the batched vertex buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDraw {
    /// First vertex of the range
    pub start: usize,
    /// Number of vertices in the range
    pub count: usize,
    /// Fill color for the range
    pub color: Color,
}

/// Painter that batches fill calls into vertex data.
///
/// Tracks the active color and origin like any immediate-mode surface;
/// every `fill_rect` appends one quad (two triangles, six vertices) and one
/// draw range.
#[derive(Debug)]
pub struct BatchPainter {
    screen_width: f32,
    screen_height: f32,
    origin: (f32, f32),
    color: Color,
    vertices: Vec<PanelVertex>,
    draws: Vec<PanelDraw>,
}

impl BatchPainter {
    /// Create a painter for the given screen size in pixels
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            origin: (0.0, 0.0),
            color: Color::LIGHT_GRAY,
            vertices: Vec::new(),
            draws: Vec::new(),
        }
    }

    /// Update the screen size used for NDC conversion
    pub fn set_screen_size(&mut self, screen_width: f32, screen_height: f32) {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
    }

    /// All batched vertices for the current frame
    pub fn vertices(&self) -> &[PanelVertex] {
        &self.vertices
    }

    /// All draw ranges for the current frame
    pub fn draws(&self) -> &[PanelDraw] {
        &self.draws
    }

    /// Discard batched data and reset origin for a new frame
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.draws.clear();
        self.origin = (0.0, 0.0);
    }
}

impl Painter for BatchPainter {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let screen_x = self.origin.0 + x;
        let screen_y = self.origin.1 + y;

        let (x_ndc, y_ndc) =
            screen_to_ndc(screen_x, screen_y, self.screen_width, self.screen_height);
        let (width_ndc, height_ndc) =
            size_to_ndc(width, height, self.screen_width, self.screen_height);

        let x2_ndc = x_ndc + width_ndc;
        let y2_ndc = y_ndc + height_ndc;

        // Quad as two triangles, six vertices
        let start = self.vertices.len();
        self.vertices.extend_from_slice(&[
            PanelVertex { position: [x_ndc, y_ndc] },
            PanelVertex { position: [x2_ndc, y_ndc] },
            PanelVertex { position: [x_ndc, y2_ndc] },
            PanelVertex { position: [x_ndc, y2_ndc] },
            PanelVertex { position: [x2_ndc, y_ndc] },
            PanelVertex { position: [x2_ndc, y2_ndc] },
        ]);

        self.draws.push(PanelDraw { start, count: 6, color: self.color });
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = (x, y);
    }
}

/// Convert screen coordinates to normalized device coordinates (NDC).
/// NDC range: [-1, 1] where (0, 0) is center
pub fn screen_to_ndc(
    screen_x: f32,
    screen_y: f32,
    screen_width: f32,
    screen_height: f32,
) -> (f32, f32) {
    let ndc_x = (screen_x / screen_width) * 2.0 - 1.0;
    let ndc_y = (screen_y / screen_height) * 2.0 - 1.0;
    (ndc_x, ndc_y)
}

/// Convert pixel size to NDC size
pub fn size_to_ndc(
    width_pixels: f32,
    height_pixels: f32,
    screen_width: f32,
    screen_height: f32,
) -> (f32, f32) {
    let ndc_width = (width_pixels / screen_width) * 2.0;
    let ndc_height = (height_pixels / screen_height) * 2.0;
    (ndc_width, ndc_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_to_ndc() {
        let (x, y) = screen_to_ndc(400.0, 300.0, 800.0, 600.0);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 0.0);

        let (x, y) = screen_to_ndc(0.0, 0.0, 800.0, 600.0);
        assert_relative_eq!(x, -1.0);
        assert_relative_eq!(y, -1.0);
    }

    #[test]
    fn test_fill_rect_emits_one_quad_and_draw() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let mut painter = BatchPainter::new(800.0, 600.0);

        painter.set_color(red);
        painter.fill_rect(0.0, 0.0, 400.0, 300.0);

        assert_eq!(painter.vertices().len(), 6);
        assert_eq!(painter.draws(), &[PanelDraw { start: 0, count: 6, color: red }]);

        // Top-left corner of the rect is the NDC lower bound
        assert_relative_eq!(painter.vertices()[0].position[0], -1.0);
        assert_relative_eq!(painter.vertices()[0].position[1], -1.0);
        // Opposite corner covers half the screen in each axis
        assert_relative_eq!(painter.vertices()[5].position[0], 0.0);
        assert_relative_eq!(painter.vertices()[5].position[1], 0.0);
    }

    #[test]
    fn test_origin_offsets_fills() {
        let mut painter = BatchPainter::new(200.0, 200.0);
        painter.set_origin(100.0, 100.0);
        painter.fill_rect(0.0, 0.0, 100.0, 100.0);

        // Rect starts at screen center
        assert_relative_eq!(painter.vertices()[0].position[0], 0.0);
        assert_relative_eq!(painter.vertices()[0].position[1], 0.0);
    }

    #[test]
    fn test_ranges_accumulate_across_fills() {
        let mut painter = BatchPainter::new(100.0, 100.0);
        painter.fill_rect(0.0, 0.0, 10.0, 10.0);
        painter.set_color(Color::BLACK);
        painter.fill_rect(20.0, 20.0, 10.0, 10.0);

        assert_eq!(painter.vertices().len(), 12);
        assert_eq!(painter.draws().len(), 2);
        assert_eq!(painter.draws()[1].start, 6);
        assert_eq!(painter.draws()[1].color, Color::BLACK);
    }

    #[test]
    fn test_clear_resets_frame_state() {
        let mut painter = BatchPainter::new(100.0, 100.0);
        painter.set_origin(50.0, 50.0);
        painter.fill_rect(0.0, 0.0, 10.0, 10.0);
        painter.clear();

        assert!(painter.vertices().is_empty());
        assert!(painter.draws().is_empty());

        painter.fill_rect(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(painter.vertices()[0].position[0], -1.0);
    }
}
