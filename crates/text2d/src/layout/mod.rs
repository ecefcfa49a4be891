//! Text layout
//!
//! Glyph placement, line alignment, and mesh output.

pub mod alignment;
pub mod engine;
pub mod mesh;


pub use alignment::*;
pub use engine::*;
pub use mesh::*;
