//! Font metrics model
//!
//! Read-only typed view over per-glyph metrics and kerning pairs, keyed by
//! character. Values are validated on construction so the layout engine can
//! treat every [`FontMetrics`] it receives as well-formed.

use std::collections::HashMap;
use super::{FontError, FontResult};

/// Number of code points served by the direct lookup table
const ASCII_TABLE_SIZE: usize = 128;

/// Normalized rectangle of a glyph inside the atlas texture
///
/// Stored in font space. The V axis is flipped when converted to texture
/// coordinates (`v' = 1 - v`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtlasRect {
    /// Left edge (U)
    pub min_u: f32,
    /// Right edge (U)
    pub max_u: f32,
    /// Top edge (V, font space)
    pub min_v: f32,
    /// Bottom edge (V, font space)
    pub max_v: f32,
}

impl AtlasRect {
    /// Create an atlas rectangle from its edges
    pub const fn new(min_u: f32, max_u: f32, min_v: f32, max_v: f32) -> Self {
        Self { min_u, max_u, min_v, max_v }
    }

    fn is_finite(&self) -> bool {
        self.min_u.is_finite()
            && self.max_u.is_finite()
            && self.min_v.is_finite()
            && self.max_v.is_finite()
    }
}

/// Metrics of a single glyph
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMetrics {
    /// Quad width in font units
    pub bbox_width: f32,
    /// Quad height in font units
    pub bbox_height: f32,
    /// Horizontal offset from cursor to quad origin
    pub bearing_x: f32,
    /// Vertical offset from cursor to the top edge of the quad
    pub bearing_y: f32,
    /// Cursor advance after this glyph
    pub advance_x: f32,
    /// Location of the glyph bitmap in the atlas
    pub atlas: AtlasRect,
    /// Preceding character -> horizontal adjustment
    kerning: HashMap<char, f32>,
}

impl GlyphMetrics {
    /// Create glyph metrics without kerning pairs
    pub fn new(
        bbox_width: f32,
        bbox_height: f32,
        bearing_x: f32,
        bearing_y: f32,
        advance_x: f32,
        atlas: AtlasRect,
    ) -> Self {
        Self {
            bbox_width,
            bbox_height,
            bearing_x,
            bearing_y,
            advance_x,
            atlas,
            kerning: HashMap::new(),
        }
    }

    /// Add a kerning adjustment applied when `preceding` comes right before this glyph
    #[must_use]
    pub fn with_kerning(mut self, preceding: char, value: f32) -> Self {
        self.kerning.insert(preceding, value);
        self
    }

    /// Kerning adjustment against the preceding character, if any
    pub fn kerning(&self, preceding: char) -> Option<f32> {
        self.kerning.get(&preceding).copied()
    }

    /// Number of kerning pairs for this glyph
    pub fn kerning_count(&self) -> usize {
        self.kerning.len()
    }

    fn validate(&self, glyph: char) -> FontResult<()> {
        let invalid = |field| Err(FontError::InvalidMetric { glyph, field });

        if !self.bbox_width.is_finite() || self.bbox_width < 0.0 {
            return invalid("bbox width");
        }
        if !self.bbox_height.is_finite() || self.bbox_height < 0.0 {
            return invalid("bbox height");
        }
        if !self.bearing_x.is_finite() || !self.bearing_y.is_finite() {
            return invalid("bearing");
        }
        if !self.advance_x.is_finite() {
            return invalid("advance");
        }
        if !self.atlas.is_finite() {
            return invalid("atlas rectangle");
        }
        if self.kerning.values().any(|k| !k.is_finite()) {
            return invalid("kerning value");
        }
        Ok(())
    }
}

/// Glyph storage with a direct table for ASCII and a map for everything else
#[derive(Debug, Clone)]
struct GlyphTable {
    entries: Vec<(char, GlyphMetrics)>,
    ascii: Vec<Option<usize>>,
    extended: HashMap<char, usize>,
}

impl GlyphTable {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            ascii: vec![None; ASCII_TABLE_SIZE],
            extended: HashMap::new(),
        }
    }

    fn slot(&self, ch: char) -> Option<usize> {
        let code = ch as usize;
        if code < ASCII_TABLE_SIZE {
            self.ascii[code]
        } else {
            self.extended.get(&ch).copied()
        }
    }

    fn get(&self, ch: char) -> Option<&GlyphMetrics> {
        self.slot(ch).map(|index| &self.entries[index].1)
    }

    fn insert(&mut self, ch: char, glyph: GlyphMetrics) {
        if let Some(index) = self.slot(ch) {
            self.entries[index].1 = glyph;
            return;
        }

        let index = self.entries.len();
        self.entries.push((ch, glyph));

        let code = ch as usize;
        if code < ASCII_TABLE_SIZE {
            self.ascii[code] = Some(index);
        } else {
            self.extended.insert(ch, index);
        }
    }
}

/// Font-wide metrics and the glyph table
///
/// Immutable once built; share it behind an `Arc` to lay out text from
/// several threads.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    line_height: f32,
    space_advance: f32,
    glyphs: GlyphTable,
}

impl FontMetrics {
    /// Create an empty font with the given line height and default advance
    ///
    /// `space_advance` is used for every character without a glyph entry.
    pub fn new(line_height: f32, space_advance: f32) -> FontResult<Self> {
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(FontError::InvalidFontMetric("line height"));
        }
        if !space_advance.is_finite() {
            return Err(FontError::InvalidFontMetric("space advance"));
        }

        Ok(Self {
            line_height,
            space_advance,
            glyphs: GlyphTable::new(),
        })
    }

    /// Add a glyph, replacing any previous entry for the same character
    pub fn with_glyph(mut self, ch: char, glyph: GlyphMetrics) -> FontResult<Self> {
        self.insert_glyph(ch, glyph)?;
        Ok(self)
    }

    /// Add a glyph in place, replacing any previous entry for the same character
    pub fn insert_glyph(&mut self, ch: char, glyph: GlyphMetrics) -> FontResult<()> {
        glyph.validate(ch)?;
        self.glyphs.insert(ch, glyph);
        Ok(())
    }

    /// Vertical advance per newline
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Horizontal advance for characters without a glyph
    pub fn space_advance(&self) -> f32 {
        self.space_advance
    }

    /// Look up the glyph for a character
    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(ch)
    }

    /// Whether the font has a glyph for `ch`
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyphs.slot(ch).is_some()
    }

    /// Number of glyphs in the font
    pub fn glyph_count(&self) -> usize {
        self.glyphs.entries.len()
    }

    /// Iterate over all glyphs in insertion order
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &GlyphMetrics)> {
        self.glyphs.entries.iter().map(|(ch, glyph)| (*ch, glyph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph() -> GlyphMetrics {
        GlyphMetrics::new(0.5, 0.7, 0.02, 0.7, 0.55, AtlasRect::new(0.0, 0.1, 0.0, 0.1))
    }

    #[test]
    fn test_lookup_ascii_and_extended() {
        let font = FontMetrics::new(1.2, 0.3)
            .unwrap()
            .with_glyph('A', glyph())
            .unwrap()
            .with_glyph('é', glyph().with_kerning('A', -0.04))
            .unwrap();

        assert_eq!(font.glyph_count(), 2);
        assert!(font.has_glyph('A'));
        assert!(font.has_glyph('é'));
        assert!(!font.has_glyph('B'));
        assert!(font.glyph(' ').is_none());
        assert_eq!(font.glyph('é').unwrap().kerning('A'), Some(-0.04));
        assert_eq!(font.glyph('A').unwrap().kerning('é'), None);
    }

    #[test]
    fn test_insert_replaces_existing_glyph() {
        let mut font = FontMetrics::new(1.0, 0.25).unwrap();
        font.insert_glyph('x', glyph()).unwrap();

        let mut wider = glyph();
        wider.advance_x = 0.9;
        font.insert_glyph('x', wider).unwrap();

        assert_eq!(font.glyph_count(), 1);
        assert_eq!(font.glyph('x').unwrap().advance_x, 0.9);
        assert_eq!(font.glyphs().count(), 1);
    }

    #[test]
    fn test_rejects_invalid_font_metrics() {
        assert!(matches!(
            FontMetrics::new(0.0, 0.3),
            Err(FontError::InvalidFontMetric("line height"))
        ));
        assert!(matches!(
            FontMetrics::new(f32::NAN, 0.3),
            Err(FontError::InvalidFontMetric("line height"))
        ));
        assert!(matches!(
            FontMetrics::new(1.0, f32::INFINITY),
            Err(FontError::InvalidFontMetric("space advance"))
        ));
    }

    #[test]
    fn test_rejects_invalid_glyph_metrics() {
        let font = FontMetrics::new(1.0, 0.3).unwrap();

        let mut negative = glyph();
        negative.bbox_height = -1.0;
        let err = font.clone().with_glyph('q', negative).unwrap_err();
        assert!(matches!(err, FontError::InvalidMetric { glyph: 'q', field: "bbox height" }));

        let bad_kerning = glyph().with_kerning('a', f32::NAN);
        let err = font.with_glyph('q', bad_kerning).unwrap_err();
        assert!(matches!(err, FontError::InvalidMetric { field: "kerning value", .. }));
    }
}
