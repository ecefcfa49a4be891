//! Font description loading
//!
//! Decodes the JSON font description emitted by SDF atlas generators into a
//! validated [`FontMetrics`]. The expected layout is:
//!
//! ```json
//! {
//!   "height": 1.2,
//!   "spaceAdvance": 0.3,
//!   "glyphData": {
//!     "A": {
//!       "bboxWidth": 0.6, "bboxHeight": 0.7,
//!       "bearingX": 0.01, "bearingY": 0.7, "advanceX": 0.62,
//!       "s0": 0.0, "s1": 0.1, "t0": 0.0, "t1": 0.12,
//!       "kernings": { "V": -0.05 }
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use super::{AtlasImage, AtlasRect, FontError, FontMetrics, FontResult, GlyphMetrics};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FontDescription {
    height: f32,
    space_advance: f32,
    glyph_data: HashMap<String, GlyphDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlyphDescription {
    bbox_width: f32,
    bbox_height: f32,
    bearing_x: f32,
    bearing_y: f32,
    advance_x: f32,
    s0: f32,
    s1: f32,
    t0: f32,
    t1: f32,
    #[serde(default)]
    kernings: HashMap<String, f32>,
}

/// Returns the only character of `key`, or `None` if it has zero or several
fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl FontDescription {
    fn into_metrics(self) -> FontResult<FontMetrics> {
        let mut metrics = FontMetrics::new(self.height, self.space_advance)?;

        // Sorted so that validation errors are reported deterministically.
        let mut glyphs: Vec<_> = self.glyph_data.into_iter().collect();
        glyphs.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, desc) in glyphs {
            let ch = single_char(&key).ok_or(FontError::InvalidGlyphKey(key))?;

            let mut glyph = GlyphMetrics::new(
                desc.bbox_width,
                desc.bbox_height,
                desc.bearing_x,
                desc.bearing_y,
                desc.advance_x,
                AtlasRect::new(desc.s0, desc.s1, desc.t0, desc.t1),
            );

            for (kern_key, value) in desc.kernings {
                let preceding = single_char(&kern_key)
                    .ok_or(FontError::InvalidKerningKey { glyph: ch, key: kern_key })?;
                glyph = glyph.with_kerning(preceding, value);
            }

            metrics.insert_glyph(ch, glyph)?;
        }

        Ok(metrics)
    }
}

impl FontMetrics {
    /// Decode font metrics from a JSON string
    pub fn from_json_str(json: &str) -> FontResult<Self> {
        let desc: FontDescription = serde_json::from_str(json)?;
        desc.into_metrics()
    }

    /// Decode font metrics from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> FontResult<Self> {
        let desc: FontDescription = serde_json::from_slice(bytes)?;
        desc.into_metrics()
    }

    /// Load font metrics from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(FontError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading font metrics from: {:?}", path_ref);
        let bytes = std::fs::read(path_ref)?;
        let metrics = Self::from_json_slice(&bytes)?;

        log::info!(
            "Loaded font {:?}: {} glyphs, line height {}",
            path_ref,
            metrics.glyph_count(),
            metrics.line_height()
        );
        Ok(metrics)
    }
}

/// Resolves named fonts (`<name>.json` + `<name>.png`) against search paths
#[derive(Debug, Clone)]
pub struct FontLoader {
    search_paths: Vec<PathBuf>,
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new(["resources/fonts", "fonts", "."])
    }
}

impl FontLoader {
    /// Create a loader that searches the given directories in order
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Directories searched by this loader
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find `<name>.<extension>` in the first search path that contains it
    pub fn resolve(&self, name: &str, extension: &str) -> FontResult<PathBuf> {
        let file_name = format!("{name}.{extension}");
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.exists())
            .ok_or(FontError::NotFound(file_name))
    }

    /// Load the metrics of the named font
    pub fn load_metrics(&self, name: &str) -> FontResult<FontMetrics> {
        FontMetrics::from_file(self.resolve(name, "json")?)
    }

    /// Load the atlas texture of the named font, if one exists
    ///
    /// A missing atlas is not an error (the renderer may supply its own), but a
    /// present atlas that fails to decode is.
    pub fn load_atlas(&self, name: &str) -> FontResult<Option<AtlasImage>> {
        match self.resolve(name, "png") {
            Ok(path) => AtlasImage::from_file(path).map(Some),
            Err(FontError::NotFound(file)) => {
                log::debug!("No atlas texture {} for font '{}'", file, name);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
