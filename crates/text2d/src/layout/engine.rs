//! Text layout engine
//!
//! Converts text strings into positioned quads (positions, UVs and indices)
//! for rendering. Handles glyph positioning, kerning, line breaks, and
//! baseline metrics.
//!
//! # Layout Coordinate System
//!
//! - The cursor starts at (0, 0), the top of the first line
//! - +X axis points right
//! - +Y axis points up; each newline moves the cursor down by the line height
//! - A glyph quad hangs from `cursor.y + bearing_y` downwards by its box height

use crate::config::LayoutConfig;
use crate::font::{FontMetrics, GlyphMetrics};
use crate::foundation::math::{exceeds, Vec2, Vec3};
use super::{align_line, normalize_block, TextAlignment, TextBounds, TextMesh, VERTICES_PER_GLYPH};

/// Largest number of quads addressable with 16-bit indices
pub const MAX_GLYPHS: usize = (u16::MAX as usize + 1) / VERTICES_PER_GLYPH;

/// Two triangles per quad, relative to the quad's first vertex
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 1, 3, 2];

#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    x: f32,
    y: f32,
}

/// Text layout engine that converts strings to mesh geometry
///
/// Holds only configuration, so one engine can lay out any number of strings
/// against any number of fonts.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    config: LayoutConfig,
}

impl TextLayout {
    /// Create a layout engine with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Create a layout engine with default settings and the given alignment
    pub fn with_alignment(alignment: TextAlignment) -> Self {
        Self::new(LayoutConfig::default().with_alignment(alignment))
    }

    /// Configuration used by this engine
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `text` with `metrics` and return the resulting mesh
    ///
    /// Never fails. Characters without a glyph advance the cursor by the
    /// font's space advance and emit nothing; `'\n'` starts a new line.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use text2d::{FontMetrics, TextLayout, TextAlignment};
    /// # let metrics = FontMetrics::from_file("resources/fonts/demo.json").unwrap();
    /// let layout = TextLayout::with_alignment(TextAlignment::Left);
    /// let mesh = layout.layout("Hello", &metrics);
    /// assert_eq!(mesh.positions.len(), 20); // 5 glyphs × 4 vertices
    /// assert_eq!(mesh.indices.len(), 30);   // 5 glyphs × 6 indices
    /// ```
    pub fn layout(&self, text: &str, metrics: &FontMetrics) -> TextMesh {
        let alignment = self.config.alignment;
        let scale = self.config.font_size;

        let mut mesh = TextMesh::with_capacity(text.chars().count());
        let mut line: Vec<Vec3> = Vec::new();
        let mut cursor = Cursor::default();
        let mut origins = TextBounds::EMPTY;
        let mut line_count = 1usize;
        let mut dropped = 0usize;
        let mut preceding: Option<char> = None;

        for (ordinal, ch) in text.chars().enumerate() {
            // Kerning is keyed by the previous character of the string, even
            // when that character produced no geometry.
            let previous = preceding.replace(ch);

            if ch == '\n' {
                cursor.y -= metrics.line_height() * scale;
                align_line(&mut line, alignment, cursor.x);
                mesh.positions.append(&mut line);
                cursor.x = 0.0;
                line_count += 1;
                continue;
            }

            let Some(glyph) = metrics.glyph(ch) else {
                cursor.x += metrics.space_advance() * scale;
                continue;
            };

            if let Some(kerning) = previous.and_then(|p| glyph.kerning(p)) {
                if exceeds(kerning, self.config.kerning_threshold) {
                    cursor.x += kerning * scale;
                }
            }

            if mesh.glyph_count() < MAX_GLYPHS {
                let z = ordinal as f32 * self.config.depth_step;
                let origin = self.emit_glyph(&mut mesh, &mut line, cursor, z, glyph);
                origins.include(origin.x, origin.y);
            } else {
                dropped += 1;
            }

            cursor.x += glyph.advance_x * scale;
        }

        // Flush the last line, which has no trailing newline.
        align_line(&mut line, alignment, cursor.x);
        mesh.positions.append(&mut line);

        normalize_block(&mut mesh.positions, alignment, &origins);

        if dropped > 0 {
            log::warn!(
                "Text exceeds {} glyphs addressable by 16-bit indices; {} glyphs dropped",
                MAX_GLYPHS,
                dropped
            );
        }
        log::debug!(
            "Laid out {} glyphs on {} lines ({} alignment)",
            mesh.glyph_count(),
            line_count,
            alignment
        );

        mesh
    }

    /// Emit one glyph quad and return its origin (top-left corner)
    fn emit_glyph(
        &self,
        mesh: &mut TextMesh,
        line: &mut Vec<Vec3>,
        cursor: Cursor,
        z: f32,
        glyph: &GlyphMetrics,
    ) -> Vec2 {
        let scale = self.config.font_size;
        let width = glyph.bbox_width * scale;
        let height = glyph.bbox_height * scale;

        let x = cursor.x + glyph.bearing_x * scale;
        let y = cursor.y + glyph.bearing_y * scale;

        line.extend_from_slice(&[
            Vec3::new(x, y - height, z),
            Vec3::new(x + width, y - height, z),
            Vec3::new(x, y, z),
            Vec3::new(x + width, y, z),
        ]);

        // Atlas V runs opposite to texture V.
        let atlas = &glyph.atlas;
        mesh.tex_coords.extend_from_slice(&[
            Vec2::new(atlas.min_u, 1.0 - atlas.max_v),
            Vec2::new(atlas.max_u, 1.0 - atlas.max_v),
            Vec2::new(atlas.min_u, 1.0 - atlas.min_v),
            Vec2::new(atlas.max_u, 1.0 - atlas.min_v),
        ]);

        // tex_coords are never buffered per line, so their length is the
        // running vertex count; MAX_GLYPHS keeps it within u16.
        #[allow(clippy::cast_possible_truncation)]
        let base = (mesh.tex_coords.len() - VERTICES_PER_GLYPH) as u16;
        mesh.indices.extend(QUAD_INDICES.iter().map(|offset| base + offset));

        Vec2::new(x, y)
    }
}

/// Lay out `text` with default settings and the given alignment
///
/// Shorthand for [`TextLayout::with_alignment`] followed by
/// [`TextLayout::layout`].
pub fn create(text: &str, metrics: &FontMetrics, alignment: TextAlignment) -> TextMesh {
    TextLayout::with_alignment(alignment).layout(text, metrics)
}
