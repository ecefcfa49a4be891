//! Horizontal alignment and whole-block normalization
//!
//! Alignment runs in two passes. Each line is shifted when it is flushed,
//! using the cursor's advance width at the break. Once every line is placed,
//! the whole block is centered vertically and, for left/right alignment,
//! recentered horizontally.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::foundation::math::Vec3;
use super::TextBounds;

/// Horizontal alignment of text lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    /// Lines share a common left edge
    Left,
    /// Lines share a common right edge
    Right,
    /// Each line is centered on x = 0
    #[default]
    Centered,
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Centered => "centered",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown alignment name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown text alignment: {0}")]
pub struct ParseAlignmentError(String);

impl FromStr for TextAlignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centered" => Ok(Self::Centered),
            _ => Err(ParseAlignmentError(s.to_string())),
        }
    }
}

/// Shift one line's vertices according to `alignment`
///
/// `line_width` is the cursor advance at the line break, trailing advances
/// included, not the ink width of the glyphs.
pub fn align_line(line: &mut [Vec3], alignment: TextAlignment, line_width: f32) {
    let shift = match alignment {
        TextAlignment::Centered => line_width / 2.0,
        // Lines keep starting at x = 0; the block is recentered in normalize_block.
        TextAlignment::Left => return,
        // Right edge moves to x = 0; the block is recentered in normalize_block.
        TextAlignment::Right => line_width,
    };

    for vertex in line {
        vertex.x -= shift;
    }
}

/// Center the whole block after every line has been aligned
///
/// `origins` is the box over glyph origins (cursor plus bearing), tracked
/// before line alignment. An empty box leaves the vertices untouched.
pub fn normalize_block(positions: &mut [Vec3], alignment: TextAlignment, origins: &TextBounds) {
    if origins.is_empty() {
        return;
    }

    let dy = -origins.height() / 2.0;
    let dx = match alignment {
        TextAlignment::Centered => 0.0,
        TextAlignment::Left => -origins.width() / 2.0,
        TextAlignment::Right => origins.width() / 2.0,
    };

    for vertex in positions {
        vertex.x += dx;
        vertex.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line() -> Vec<Vec3> {
        vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.5, 0.0), Vec3::new(3.0, 1.0, 0.0)]
    }

    #[test]
    fn test_align_line_centered() {
        let mut vertices = line();
        align_line(&mut vertices, TextAlignment::Centered, 4.0);
        let xs: Vec<f32> = vertices.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 1.0]);
    }

    #[test]
    fn test_align_line_left_is_noop() {
        let mut vertices = line();
        align_line(&mut vertices, TextAlignment::Left, 4.0);
        assert_eq!(vertices, line());
    }

    #[test]
    fn test_align_line_right() {
        let mut vertices = line();
        align_line(&mut vertices, TextAlignment::Right, 4.0);
        let xs: Vec<f32> = vertices.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![-4.0, -3.0, -1.0]);
        // Y is never touched by line alignment
        assert_eq!(vertices[2].y, 1.0);
    }

    #[test]
    fn test_align_empty_line() {
        let mut vertices: Vec<Vec3> = Vec::new();
        align_line(&mut vertices, TextAlignment::Right, 2.5);
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_normalize_block_shifts() {
        let mut origins = TextBounds::EMPTY;
        origins.include(0.0, -1.0);
        origins.include(2.0, 1.0);

        let mut left = line();
        normalize_block(&mut left, TextAlignment::Left, &origins);
        assert_relative_eq!(left[0].x, -1.0);
        assert_relative_eq!(left[0].y, -1.0);

        let mut right = line();
        normalize_block(&mut right, TextAlignment::Right, &origins);
        assert_relative_eq!(right[0].x, 1.0);
        assert_relative_eq!(right[2].y, 0.0);

        let mut centered = line();
        normalize_block(&mut centered, TextAlignment::Centered, &origins);
        assert_relative_eq!(centered[1].x, 1.0);
        assert_relative_eq!(centered[1].y, -0.5);
    }

    #[test]
    fn test_normalize_empty_bounds_is_noop() {
        let mut vertices = line();
        normalize_block(&mut vertices, TextAlignment::Left, &TextBounds::EMPTY);
        assert_eq!(vertices, line());
    }

    #[test]
    fn test_parse_alignment() {
        assert_eq!("left".parse(), Ok(TextAlignment::Left));
        assert_eq!("Right".parse(), Ok(TextAlignment::Right));
        assert_eq!("center".parse(), Ok(TextAlignment::Centered));
        assert_eq!("centered".parse(), Ok(TextAlignment::Centered));
        assert!("justify".parse::<TextAlignment>().is_err());
        assert_eq!(TextAlignment::default(), TextAlignment::Centered);
        assert_eq!(TextAlignment::Right.to_string(), "right");
    }
}
