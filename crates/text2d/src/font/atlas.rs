//! Atlas texture decoding
//!
//! Provides PNG loading for the glyph atlas that accompanies a font
//! description. Uploading the pixels is the renderer's job.

use std::path::Path;
use super::FontResult;

/// Decoded atlas texture ready for GPU upload
#[derive(Debug, Clone)]
pub struct AtlasImage {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl AtlasImage {
    /// Load an atlas image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        let path_ref = path.as_ref();

        log::debug!("Loading atlas texture from: {:?}", path_ref);

        let rgba_img = image::open(path_ref)?.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded atlas {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Load an atlas image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> FontResult<Self> {
        let rgba_img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded atlas {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Coverage of the pixel at `(x, y)`, taken from the alpha channel
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4 + 3;
        self.data.get(index).copied()
    }
}
