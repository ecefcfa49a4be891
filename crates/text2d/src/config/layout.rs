//! Layout configuration

use serde::{Deserialize, Serialize};
use crate::layout::TextAlignment;
use super::{Config, ConfigError};

/// Settings for [`TextLayout`](crate::TextLayout)
///
/// The defaults lay text out at the font's native size with 1e-4 of depth
/// between consecutive glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal alignment of lines
    pub alignment: TextAlignment,
    /// Scale applied to every glyph metric, kerning, and line height
    pub font_size: f32,
    /// Z distance between consecutive characters, for stable draw order
    pub depth_step: f32,
    /// Kerning adjustments with magnitude at or below this are ignored
    pub kerning_threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            alignment: TextAlignment::Centered,
            font_size: 1.0,
            depth_step: 0.0001,
            kerning_threshold: 0.001,
        }
    }
}

impl LayoutConfig {
    /// Set horizontal alignment
    #[must_use]
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the metric scale factor
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the per-character depth step
    #[must_use]
    pub fn with_depth_step(mut self, depth_step: f32) -> Self {
        self.depth_step = depth_step;
        self
    }
}

impl Config for LayoutConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "font_size",
                reason: format!("must be a positive number, got {}", self.font_size),
            });
        }
        if !self.depth_step.is_finite() || self.depth_step < 0.0 {
            return Err(ConfigError::Invalid {
                field: "depth_step",
                reason: format!("must be non-negative, got {}", self.depth_step),
            });
        }
        if !self.kerning_threshold.is_finite() || self.kerning_threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "kerning_threshold",
                reason: format!("must be non-negative, got {}", self.kerning_threshold),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("text2d-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LayoutConfig::from_toml("alignment = \"right\"\nfont_size = 2.0\n").unwrap();
        assert_eq!(config.alignment, TextAlignment::Right);
        assert_eq!(config.font_size, 2.0);
        assert_eq!(config.depth_step, 0.0001);
        assert_eq!(config.kerning_threshold, 0.001);
    }

    #[test]
    fn test_parse_ron() {
        let config = LayoutConfig::from_ron("(alignment: left, depth_step: 0.0)").unwrap();
        assert_eq!(config.alignment, TextAlignment::Left);
        assert_eq!(config.depth_step, 0.0);
    }

    #[test]
    fn test_save_and_load_toml() {
        let path = temp_path("layout.toml");
        let config = LayoutConfig::default()
            .with_alignment(TextAlignment::Left)
            .with_font_size(0.5);

        config.save_to_file(&path).unwrap();
        let loaded = LayoutConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = temp_path("invalid.ron");
        std::fs::write(&path, "(font_size: -1.0)").unwrap();
        let result = LayoutConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Invalid { field: "font_size", .. })));
    }

    #[test]
    fn test_unsupported_format() {
        let result = LayoutConfig::load_from_file("layout.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
