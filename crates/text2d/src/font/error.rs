//! Font loading errors

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading or building font data
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// No font asset with this name exists in any search path
    #[error("Font asset not found: {0}")]
    NotFound(String),

    /// Failed to read a font asset from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The font description is not valid JSON or is missing fields
    #[error("Failed to decode font metrics: {0}")]
    Parse(#[from] serde_json::Error),

    /// A glyph table key is not exactly one character
    #[error("Glyph key {0:?} is not a single character")]
    InvalidGlyphKey(String),

    /// A kerning table key is not exactly one character
    #[error("Kerning key {key:?} of glyph '{glyph}' is not a single character")]
    InvalidKerningKey {
        /// Glyph owning the kerning table
        glyph: char,
        /// Offending key
        key: String,
    },

    /// A per-glyph metric is non-finite or out of range
    #[error("Glyph '{glyph}' has an invalid {field}")]
    InvalidMetric {
        /// Glyph with the bad value
        glyph: char,
        /// Name of the metric
        field: &'static str,
    },

    /// A font-wide metric is non-finite or out of range
    #[error("Font has an invalid {0}")]
    InvalidFontMetric(&'static str),

    /// The atlas texture could not be decoded
    #[error("Failed to decode atlas image: {0}")]
    AtlasDecode(#[from] image::ImageError),
}
