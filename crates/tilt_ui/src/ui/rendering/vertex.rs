//! Vertex types for UI rendering

/// Simple position-only vertex for solid color panels (no UVs)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelVertex {
    /// Position in NDC coordinates
    pub position: [f32; 2],
}
