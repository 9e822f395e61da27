//! Overlay text layout: turns strings into textured glyph quads.
//!
//! Quads are in window pixels with y growing downwards; `origin` is the
//! top-left corner of the first line. UVs follow the atlas' top-down rows.

mod quad_writer;

pub use quad_writer::{QUAD_STRIDE, QuadWriter};

use crate::font::FontAtlas;

/// One textured rectangle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub uv_pos: [f32; 2],
    pub uv_size: [f32; 2],
}

/// Lay out `text` starting at `origin`, scaling atlas pixels by `scale`.
///
/// `\n` starts a new line one pixel height (scaled) below. Glyphs without a
/// bitmap (space, missing codes) emit no quad but still advance the pen.
pub fn layout_text(atlas: &FontAtlas, text: &str, origin: [f32; 2], scale: f32) -> Vec<GlyphQuad> {
    let line_height = atlas.pixel_height() as f32 * scale;
    // Baseline sits one ascent below the line top; the pixel height is the em size.
    let ascent = line_height * 0.8;
    let mut quads = Vec::with_capacity(text.len());
    let mut pen_x = origin[0];
    let mut baseline = origin[1] + ascent;

    for ch in text.chars() {
        if ch == '\n' {
            pen_x = origin[0];
            baseline += line_height;
            continue;
        }

        let glyph = atlas.glyph(ch);
        if !glyph.is_blank() {
            let [u, v, du, dv] = atlas.uv_rect(glyph);
            quads.push(GlyphQuad {
                pos: [
                    pen_x + glyph.bearing[0] as f32 * scale,
                    baseline - glyph.bearing[1] as f32 * scale,
                ],
                size: [glyph.size[0] as f32 * scale, glyph.size[1] as f32 * scale],
                uv_pos: [u, v],
                uv_size: [du, dv],
            });
        }
        pen_x += glyph.advance_px() as f32 * scale;
    }

    quads
}

/// Width in pixels of the longest line of `text`.
pub fn text_width(atlas: &FontAtlas, text: &str, scale: f32) -> f32 {
    text.lines()
        .map(|line| {
            line.chars()
                .map(|ch| atlas.glyph(ch).advance_px() as f32 * scale)
                .sum::<f32>()
        })
        .fold(0.0, f32::max)
}
