//! `fontdue`-backed glyph rasterizer.

use std::path::Path;

use super::{FontError, GlyphRasterizer, RasterGlyph};

pub struct FontdueRasterizer {
    font: fontdue::Font,
}

impl FontdueRasterizer {
    /// Read and parse a TrueType/OpenType file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::FontNotLoaded {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data).map_err(|reason| FontError::BackendInit {
            path: path.to_path_buf(),
            reason: reason.to_owned(),
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, &'static str> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())?;
        Ok(Self { font })
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn rasterize(&self, code: u8, pixel_height: u32) -> Option<RasterGlyph> {
        let ch = char::from(code);
        // Control codes have no mapping in most fonts; like FreeType they
        // render as the .notdef glyph. A printable code without a glyph is
        // reported as missing.
        if !ch.is_ascii_control() && self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }

        let (metrics, bitmap) = self.font.rasterize(ch, pixel_height as f32);
        Some(RasterGlyph {
            width: metrics.width as u32,
            height: metrics.height as u32,
            // fontdue's ymin is the bitmap's bottom edge; the bearing wants its top.
            bearing: [metrics.xmin, metrics.ymin + metrics.height as i32],
            advance: (metrics.advance_width.max(0.0) * 64.0).round() as u32,
            bitmap,
        })
    }
}
