//! Bitmap font atlas for the text overlay.
//!
//! The first 128 ASCII codes are rasterized once at startup and row-packed
//! into a single grayscale texture. Each glyph keeps its atlas rectangle,
//! bearing and advance so the overlay can build textured quads.

mod atlas;
mod raster;

pub use atlas::{ATLAS_COLUMNS, AtlasBitmap, FontAtlas, MAX_PIXEL_HEIGHT, pack_atlas};
pub use raster::FontdueRasterizer;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Number of character codes rasterized into the atlas (ASCII 0-127).
pub const GLYPH_COUNT: usize = 128;

/// Fatal font loading failures. Rendering cannot proceed without a font.
#[derive(Debug, Error)]
pub enum FontError {
    /// The rasterizer could not be set up for the font data.
    #[error("font rasterizer could not be initialized for {}: {reason}", .path.display())]
    BackendInit { path: PathBuf, reason: String },
    /// The font file could not be read.
    #[error("failed to load font {}", .path.display())]
    FontNotLoaded {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font pixel height {0} outside 1..={max}", max = MAX_PIXEL_HEIGHT)]
    InvalidPixelHeight(u32),
}

/// Non-fatal outcome of building an atlas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AtlasStatus {
    #[default]
    Ok,
    /// Some codes failed to rasterize and render as blanks.
    SomeCharactersMissing,
}

/// Placement and metrics of one glyph inside the atlas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Top-left corner in atlas pixels.
    pub position: [u32; 2],
    /// Bitmap width and height in pixels.
    pub size: [u32; 2],
    /// Offset from the pen position to the bitmap's top-left corner
    /// (x right, y up from the baseline).
    pub bearing: [i32; 2],
    /// Horizontal pen advance in 1/64 pixels (26.6 fixed point).
    pub advance: u32,
}

impl Glyph {
    /// Blank placeholder for codes missing from the atlas.
    pub const EMPTY: Self = Self {
        position: [0, 0],
        size: [0, 0],
        bearing: [0, 0],
        advance: 0,
    };

    /// Advance in whole pixels.
    pub fn advance_px(&self) -> u32 {
        self.advance >> 6
    }

    pub fn is_blank(&self) -> bool {
        self.size[0] == 0 || self.size[1] == 0
    }
}

/// A rasterized glyph as produced by a font backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGlyph {
    pub width: u32,
    pub height: u32,
    /// Same convention as [`Glyph::bearing`].
    pub bearing: [i32; 2],
    /// 26.6 fixed point.
    pub advance: u32,
    /// `width * height` coverage values, rows top to bottom.
    pub bitmap: Vec<u8>,
}

/// Font backend seam: rasterizes one character code at a pixel height.
///
/// Returns `None` when the character cannot be rasterized; the packer skips
/// it and reports [`AtlasStatus::SomeCharactersMissing`].
pub trait GlyphRasterizer {
    fn rasterize(&self, code: u8, pixel_height: u32) -> Option<RasterGlyph>;
}

/// Load the font at `path` and pack ASCII 0-127 at `pixel_height`.
pub fn build_atlas(path: &Path, pixel_height: u32) -> Result<FontAtlas, FontError> {
    atlas::atlas_width(pixel_height)?;
    let rasterizer = FontdueRasterizer::from_file(path)?;
    let atlas = pack_atlas(&rasterizer, pixel_height)?;
    log::info!(
        "font: packed {} into {}x{} atlas at {}px ({} missing)",
        path.display(),
        atlas.width(),
        atlas.height(),
        pixel_height,
        atlas.missing().len(),
    );
    Ok(atlas)
}

#[cfg(test)]
mod tests;
