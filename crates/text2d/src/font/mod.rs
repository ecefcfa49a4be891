//! Font data: glyph metrics, kerning, and the asset layer that loads them
//!
//! The layout engine only ever sees a validated [`FontMetrics`]. Decoding
//! font descriptions and atlas images happens here, before layout, and is
//! the only place font-related errors are produced.

pub mod error;
pub mod metrics;
pub mod loader;
pub mod atlas;

pub use error::*;
pub use metrics::*;
pub use loader::*;
pub use atlas::*;
