//! Text mesh output types
//!
//! [`TextMesh`] is what layout hands to the renderer: parallel position and
//! texture-coordinate buffers plus a 16-bit triangle index list. The renderer
//! wraps it into whatever geometry object its API needs.

use bytemuck::{Pod, Zeroable};
use crate::foundation::math::{Vec2, Vec3};

/// Vertices emitted per visible glyph
pub const VERTICES_PER_GLYPH: usize = 4;

/// Indices emitted per visible glyph (two triangles)
pub const INDICES_PER_GLYPH: usize = 6;

/// Interleaved vertex data for text rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    /// Position in object space
    pub position: [f32; 3],
    /// UV texture coordinates
    pub uv: [f32; 2],
}

/// Axis-aligned bounding box in the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl Default for TextBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl TextBounds {
    /// Box containing no points
    pub const EMPTY: Self = Self {
        min_x: f32::INFINITY,
        min_y: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        max_y: f32::NEG_INFINITY,
    };

    /// Grow the box to contain `(x, y)`
    pub fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// True until the first point is included
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
}

/// Indexed triangle mesh for a block of text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMesh {
    /// Vertex positions, four per visible glyph
    pub positions: Vec<Vec3>,
    /// Texture coordinates, index-aligned with `positions`
    pub tex_coords: Vec<Vec2>,
    /// Triangle list, six indices per visible glyph
    pub indices: Vec<u16>,
}

impl TextMesh {
    /// Create an empty mesh with room for `char_count` glyphs
    pub fn with_capacity(char_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(char_count * VERTICES_PER_GLYPH),
            tex_coords: Vec::with_capacity(char_count * VERTICES_PER_GLYPH),
            indices: Vec::with_capacity(char_count * INDICES_PER_GLYPH),
        }
    }

    /// Number of visible glyphs in the mesh
    pub fn glyph_count(&self) -> usize {
        self.indices.len() / INDICES_PER_GLYPH
    }

    /// True when no glyph produced geometry
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Interleave positions and texture coordinates for GPU upload
    pub fn vertices(&self) -> Vec<TextVertex> {
        self.positions
            .iter()
            .zip(&self.tex_coords)
            .map(|(p, uv)| TextVertex {
                position: [p.x, p.y, p.z],
                uv: [uv.x, uv.y],
            })
            .collect()
    }

    /// Ink bounds of the emitted quads
    ///
    /// Returns [`TextBounds::EMPTY`] for an empty mesh.
    pub fn bounds(&self) -> TextBounds {
        let mut bounds = TextBounds::EMPTY;
        for p in &self.positions {
            bounds.include(p.x, p.y);
        }
        bounds
    }

    /// Positions of the `glyph`-th visible glyph's quad
    pub fn quad(&self, glyph: usize) -> Option<&[Vec3]> {
        let start = glyph * VERTICES_PER_GLYPH;
        self.positions.get(start..start + VERTICES_PER_GLYPH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_vertex_size() {
        // Verify TextVertex is tightly packed for GPU upload
        assert_eq!(
            std::mem::size_of::<TextVertex>(),
            std::mem::size_of::<f32>() * 5 // 3 position + 2 uv
        );
        let vertex = TextVertex { position: [1.0, 2.0, 3.0], uv: [0.5, 0.25] };
        assert_eq!(bytemuck::bytes_of(&vertex).len(), 20);
    }

    #[test]
    fn test_bounds_calculation() {
        let mut bounds = TextBounds::EMPTY;
        assert!(bounds.is_empty());

        bounds.include(0.0, 0.0);
        bounds.include(100.0, -50.0);

        assert!(!bounds.is_empty());
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 50.0);
        assert_eq!(bounds.center(), Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_interleaved_vertices() {
        let mesh = TextMesh {
            positions: vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 3.0, 0.5)],
            tex_coords: vec![Vec2::new(0.1, 0.2), Vec2::new(0.3, 0.4)],
            indices: Vec::new(),
        };

        let vertices = mesh.vertices();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].position, [2.0, 3.0, 0.5]);
        assert_eq!(vertices[1].uv, [0.3, 0.4]);
        assert!(mesh.is_empty());
        assert!(mesh.quad(0).is_none());
    }
}
