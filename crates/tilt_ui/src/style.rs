//! Style sheets
//!
//! Per-orientation panel colors loaded from RON or TOML files, keyed by
//! panel name. Colors are written as `#RRGGBB` / `#RRGGBBAA` strings in the
//! file and resolved to [`Color`] values at load time, so a style sheet that
//! loads successfully is fully usable.
//!
//! RON form:
//! ```ron
//! (
//!     panels: {
//!         "display": (portrait: "#1A2B4C", landscape: "#0F6F6F"),
//!     },
//! )
//! ```

use crate::foundation::color::{Color, ColorParseError};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Style sheet errors
#[derive(Error, Debug)]
pub enum StyleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A panel entry carries an unparseable color
    #[error("Invalid color for panel {panel:?}")]
    InvalidColor {
        /// Name of the offending panel entry
        panel: String,
        /// Underlying parse failure
        #[source]
        source: ColorParseError,
    },
}

/// Resolved colors for one panel, one per concrete orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    /// Background color while portrait
    pub portrait: Color,
    /// Background color while landscape
    pub landscape: Color,
}

/// Named panel styles loaded from a style file
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    panels: HashMap<String, PanelStyle>,
}

#[derive(Debug, Deserialize)]
struct RawPanelStyle {
    portrait: String,
    landscape: String,
}

#[derive(Debug, Deserialize)]
struct RawStyleSheet {
    panels: HashMap<String, RawPanelStyle>,
}

impl StyleSheet {
    /// Load a style sheet, dispatching on the file extension
    pub fn load_from_file(path: &str) -> Result<Self, StyleError> {
        if !path.ends_with(".ron") && !path.ends_with(".toml") {
            return Err(StyleError::UnsupportedFormat(path.to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        if path.ends_with(".toml") {
            Self::from_toml_str(&contents)
        } else {
            Self::from_ron_str(&contents)
        }
    }

    /// Parse a style sheet from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, StyleError> {
        let raw: RawStyleSheet =
            ron::from_str(contents).map_err(|e| StyleError::Parse(e.to_string()))?;
        Self::resolve(raw)
    }

    /// Parse a style sheet from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, StyleError> {
        let raw: RawStyleSheet =
            toml::from_str(contents).map_err(|e| StyleError::Parse(e.to_string()))?;
        Self::resolve(raw)
    }

    fn resolve(raw: RawStyleSheet) -> Result<Self, StyleError> {
        let mut panels = HashMap::with_capacity(raw.panels.len());
        for (name, style) in raw.panels {
            let resolve_color = |s: &str| {
                Color::from_hex_str(s).map_err(|source| StyleError::InvalidColor {
                    panel: name.clone(),
                    source,
                })
            };
            let resolved = PanelStyle {
                portrait: resolve_color(&style.portrait)?,
                landscape: resolve_color(&style.landscape)?,
            };
            panels.insert(name, resolved);
        }
        Ok(Self { panels })
    }

    /// The style for a named panel, if present
    pub fn panel(&self, name: &str) -> Option<&PanelStyle> {
        self.panels.get(name)
    }

    /// Number of panel entries
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the sheet holds no entries
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RON_SHEET: &str = r##"(
    panels: {
        "display": (portrait: "#1A2B4C", landscape: "#0F6F6F"),
        "keypad": (portrait: "#CCCCCC", landscape: "#CCCCCC80"),
    },
)"##;

    const TOML_SHEET: &str = r##"
[panels.display]
portrait = "#1A2B4C"
landscape = "#0F6F6F"
"##;

    #[test]
    fn test_parse_ron() {
        let sheet = StyleSheet::from_ron_str(RON_SHEET).unwrap();
        assert_eq!(sheet.len(), 2);

        let display = sheet.panel("display").unwrap();
        assert_eq!(display.portrait, Color::from_hex(0x1A2B4C));
        assert_eq!(display.landscape, Color::from_hex(0x0F6F6F));

        let keypad = sheet.panel("keypad").unwrap();
        assert!((keypad.landscape.a - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_parse_toml() {
        let sheet = StyleSheet::from_toml_str(TOML_SHEET).unwrap();
        assert_eq!(sheet.panel("display").unwrap().portrait, Color::from_hex(0x1A2B4C));
    }

    #[test]
    fn test_bad_color_is_rejected_with_panel_name() {
        let bad = r##"(panels: {"oops": (portrait: "1A2B4C", landscape: "#0F6F6F")})"##;
        match StyleSheet::from_ron_str(bad) {
            Err(StyleError::InvalidColor { panel, .. }) => assert_eq!(panel, "oops"),
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_panel_is_none() {
        let sheet = StyleSheet::from_ron_str(RON_SHEET).unwrap();
        assert!(sheet.panel("status_bar").is_none());
    }

    #[test]
    fn test_unsupported_extension() {
        match StyleSheet::load_from_file("styles/calc.json") {
            Err(StyleError::UnsupportedFormat(path)) => assert!(path.ends_with(".json")),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_garbled_ron_is_parse_error() {
        assert!(matches!(
            StyleSheet::from_ron_str("(panels: oops"),
            Err(StyleError::Parse(_))
        ));
    }
}
