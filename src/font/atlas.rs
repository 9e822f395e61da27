//! Row packer: fixed-width atlas that grows one glyph row at a time.
//!
//! All glyphs of one font share a row pitch equal to the pixel height, so a
//! simple left-to-right cursor with wrap-around is enough. Glyph bitmaps are
//! copied top-down: bitmap row 0 lands on atlas row `position.y`.

use super::{AtlasStatus, FontError, GLYPH_COUNT, Glyph, GlyphRasterizer};

/// Atlas width in multiples of the pixel height.
pub const ATLAS_COLUMNS: u32 = 16;

/// Largest accepted pixel height. One glyph row is then 1 MiB.
pub const MAX_PIXEL_HEIGHT: u32 = 256;

/// Single-channel (coverage) atlas pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl AtlasBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, `width` bytes per row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.width) as usize;
        &self.pixels[start..start + self.width as usize]
    }
}

/// Packed glyph atlas plus per-code glyph records.
///
/// The bitmap can be released after GPU upload with [`FontAtlas::take_bitmap`];
/// glyph records stay available for text layout.
#[derive(Debug, Clone)]
pub struct FontAtlas {
    width: u32,
    height: u32,
    pixel_height: u32,
    glyphs: [Option<Glyph>; GLYPH_COUNT],
    missing: Vec<u8>,
    clipped: Vec<u8>,
    bitmap: Option<AtlasBitmap>,
}

impl FontAtlas {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    pub fn status(&self) -> AtlasStatus {
        if self.missing.is_empty() {
            AtlasStatus::Ok
        } else {
            AtlasStatus::SomeCharactersMissing
        }
    }

    /// Codes that failed to rasterize, ascending.
    pub fn missing(&self) -> &[u8] {
        &self.missing
    }

    /// Codes whose bitmaps were cut to the row pitch, ascending.
    pub fn clipped(&self) -> &[u8] {
        &self.clipped
    }

    /// Glyph record for `code`, if it was packed.
    pub fn get(&self, code: u8) -> Option<&Glyph> {
        self.glyphs.get(usize::from(code))?.as_ref()
    }

    /// Glyph record for `ch`, or [`Glyph::EMPTY`] for absent and non-ASCII
    /// characters so callers can draw them as blanks.
    pub fn glyph(&self, ch: char) -> &Glyph {
        u8::try_from(ch)
            .ok()
            .and_then(|code| self.get(code))
            .unwrap_or(&Glyph::EMPTY)
    }

    /// Number of codes present in the glyph table.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().flatten().count()
    }

    /// Atlas pixels, `None` once released.
    pub fn bitmap(&self) -> Option<&AtlasBitmap> {
        self.bitmap.as_ref()
    }

    /// Hand the pixel buffer to the texture upload, releasing it here.
    pub fn take_bitmap(&mut self) -> Option<AtlasBitmap> {
        self.bitmap.take()
    }

    /// Normalized texture coordinates `(u, v, du, dv)` of a glyph rectangle.
    ///
    /// `v` grows downwards, matching the top-down packing.
    pub fn uv_rect(&self, glyph: &Glyph) -> [f32; 4] {
        let w = self.width as f32;
        let h = self.height as f32;
        [
            glyph.position[0] as f32 / w,
            glyph.position[1] as f32 / h,
            glyph.size[0] as f32 / w,
            glyph.size[1] as f32 / h,
        ]
    }
}

/// Atlas width for `pixel_height`, rejecting zero and oversized heights.
pub(super) fn atlas_width(pixel_height: u32) -> Result<u32, FontError> {
    if !(1..=MAX_PIXEL_HEIGHT).contains(&pixel_height) {
        return Err(FontError::InvalidPixelHeight(pixel_height));
    }
    ATLAS_COLUMNS
        .checked_mul(pixel_height)
        .ok_or(FontError::InvalidPixelHeight(pixel_height))
}

/// Rasterize codes 0-127 with `rasterizer` and row-pack them.
///
/// The atlas is `16 * pixel_height` wide; its height is the number of rows
/// used times `pixel_height`. Characters the rasterizer rejects, glyphs wider
/// than the atlas, and bitmaps whose length disagrees with their size are
/// left out of the glyph table. Glyph rows below the row pitch are clipped.
pub fn pack_atlas(
    rasterizer: &impl GlyphRasterizer,
    pixel_height: u32,
) -> Result<FontAtlas, FontError> {
    let width = atlas_width(pixel_height)?;
    let row_bytes = width as usize * pixel_height as usize;
    let mut pixels = vec![0u8; row_bytes];
    let mut glyphs = [None; GLYPH_COUNT];
    let mut missing = Vec::new();
    let mut clipped = Vec::new();
    let (mut x, mut y) = (0u32, 0u32);

    for code in 0..GLYPH_COUNT as u8 {
        let Some(raster) = rasterizer.rasterize(code, pixel_height) else {
            log::warn!("font: missing character {code:#04x}");
            missing.push(code);
            continue;
        };

        let gw = raster.width;
        if gw > width || raster.bitmap.len() != gw as usize * raster.height as usize {
            log::warn!(
                "font: skipping character {code:#04x} ({}x{}, {} bytes)",
                gw,
                raster.height,
                raster.bitmap.len()
            );
            missing.push(code);
            continue;
        }

        if gw + x > width {
            x = 0;
            y += pixel_height;
            pixels.resize(pixels.len() + row_bytes, 0);
        }

        let rows = raster.height.min(pixel_height);
        if rows < raster.height {
            clipped.push(code);
        }

        for (row, src) in raster
            .bitmap
            .chunks_exact(gw.max(1) as usize)
            .take(rows as usize)
            .enumerate()
        {
            let start = (y as usize + row) * width as usize + x as usize;
            pixels[start..start + gw as usize].copy_from_slice(&src[..gw as usize]);
        }

        glyphs[usize::from(code)] = Some(Glyph {
            position: [x, y],
            size: [gw, rows],
            bearing: raster.bearing,
            advance: raster.advance,
        });

        x += gw;
    }

    if !clipped.is_empty() {
        log::debug!(
            "font: {} glyphs taller than {pixel_height}px clipped: {:?}",
            clipped.len(),
            clipped.iter().map(|&c| char::from(c)).collect::<String>()
        );
    }

    let height = y + pixel_height;
    debug_assert_eq!(pixels.len(), width as usize * height as usize);

    Ok(FontAtlas {
        width,
        height,
        pixel_height,
        glyphs,
        missing,
        clipped,
        bitmap: Some(AtlasBitmap {
            width,
            height,
            pixels,
        }),
    })
}
