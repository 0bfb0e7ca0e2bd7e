//! RGBA color type and blending
//!
//! Colors are four `f32` components, conventionally in `[0, 1]`. The blend
//! routine here is what widgets use to interpolate their per-orientation
//! configuration while the device rotates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with components conventionally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component (0.0 = fully transparent, 1.0 = opaque)
    pub a: f32,
}

/// Errors from parsing textual color notation
#[derive(Error, Debug)]
pub enum ColorParseError {
    /// String is not `#RRGGBB` or `#RRGGBBAA`
    #[error("expected #RRGGBB or #RRGGBBAA, got {0:?}")]
    InvalidFormat(String),

    /// A component is not valid hexadecimal
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Default widget background color
    pub const LIGHT_GRAY: Color = Color::new(0.8, 0.8, 0.8, 1.0);
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from its four components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` notation
    pub fn from_hex_str(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidFormat(s.to_string()))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(ColorParseError::InvalidFormat(s.to_string()));
        }

        let component = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        let r = component(0..2)?;
        let g = component(2..4)?;
        let b = component(4..6)?;
        let a = if digits.len() == 8 { component(6..8)? } else { 1.0 };
        Ok(Self::new(r, g, b, a))
    }

    /// Blend two colors by a portrait-mix factor.
    ///
    /// Computes `a * f + b * (1 - f)` per channel, where `f = 1.0` yields `a`
    /// (fully portrait) and `f = 0.0` yields `b` (fully landscape). Factors
    /// outside `[0, 1]` extrapolate linearly; callers own the valid range.
    pub fn mix(a: Color, b: Color, portrait_mix: f32) -> Color {
        let f = portrait_mix;
        Color {
            r: a.r * f + b.r * (1.0 - f),
            g: a.g * f + b.g * (1.0 - f),
            b: a.b * f + b.b * (1.0 - f),
            a: a.a * f + b.a * (1.0 - f),
        }
    }

    /// Components as an array, for handing to vertex and draw batches
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
