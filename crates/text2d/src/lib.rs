//! # text2d
//!
//! Bitmap-font text layout for 2D/3D scenes. Turns a string and a font
//! description (glyph metrics, kerning, atlas coordinates) into an indexed
//! triangle mesh in object space, ready to be wrapped by a renderer and drawn
//! with an SDF or plain alpha-tested text shader.
//!
//! ## Features
//!
//! - **Layout**: kerning, line breaks, left/right/centered alignment
//! - **Mesh Output**: parallel position/UV buffers and 16-bit indices
//! - **Font Loading**: JSON font descriptions and PNG atlas textures
//! - **Configuration**: layout settings from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use text2d::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let metrics = FontLoader::default().load_metrics("demo")?;
//!     let mesh = text2d::create("Hello\nWorld", &metrics, TextAlignment::Centered);
//!
//!     // Hand the buffers to your renderer
//!     let vertices = mesh.vertices();
//!     assert_eq!(vertices.len(), mesh.positions.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod font;
pub mod foundation;
pub mod layout;

pub use config::{Config, ConfigError, LayoutConfig};
pub use font::{AtlasImage, AtlasRect, FontError, FontLoader, FontMetrics, FontResult, GlyphMetrics};
pub use layout::{create, TextAlignment, TextBounds, TextLayout, TextMesh, TextVertex};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, LayoutConfig},
        font::{AtlasImage, AtlasRect, FontLoader, FontMetrics, GlyphMetrics},
        foundation::math::{Vec2, Vec3},
        layout::{TextAlignment, TextBounds, TextLayout, TextMesh, TextVertex},
    };
}
