//! Glyph quad instance byte buffer for the text pipeline.

use super::GlyphQuad;

/// Bytes per quad instance: pos, size, uv_pos, uv_size (vec2 each) + color (vec4).
pub const QUAD_STRIDE: usize = 48;

/// Writes quad instance data to a byte buffer without unsafe code.
pub struct QuadWriter {
    data: Vec<u8>,
}

impl QuadWriter {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(QUAD_STRIDE * 64),
        }
    }

    /// Reuse an existing byte buffer, clearing its contents but keeping its allocation.
    pub fn from_buffer(mut buf: Vec<u8>) -> Self {
        buf.clear();
        Self { data: buf }
    }

    /// Consume the writer, returning the underlying byte buffer for reuse.
    pub fn into_buffer(self) -> Vec<u8> {
        self.data
    }

    pub fn push_quad(&mut self, quad: &GlyphQuad, color: [f32; 4]) {
        for v in quad
            .pos
            .iter()
            .chain(&quad.size)
            .chain(&quad.uv_pos)
            .chain(&quad.uv_size)
            .chain(&color)
        {
            self.data.extend_from_slice(&v.to_ne_bytes());
        }
    }

    pub fn push_all(&mut self, quads: &[GlyphQuad], color: [f32; 4]) {
        for q in quads {
            self.push_quad(q, color);
        }
    }

    pub fn count(&self) -> usize {
        self.data.len() / QUAD_STRIDE
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for QuadWriter {
    fn default() -> Self {
        Self::new()
    }
}
