//! Per-frame snapshot of everything the renderer uploads.

use crate::font::FontAtlas;
use crate::overlay;
use crate::poly::MAX_COEFFICIENTS;
use crate::text::{QuadWriter, layout_text};
use crate::view::layout::PANEL_ORIGIN;
use crate::view::{AppState, FractalKind, ShaderVariant, ViewParams};

/// Gap between a view edge and overlay text, in pixels.
pub const TEXT_MARGIN: f32 = 10.0;

/// Uniform and instance data for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub variant: ShaderVariant,
    pub clear_color: [f32; 3],
    pub main: ViewParams,
    /// Present when the selector view is drawn.
    pub selector: Option<ViewParams>,
    pub constant: [f32; 2],
    pub special_color: [f32; 3],
    /// Polynomial coefficients, index = degree, zero padded.
    pub coefficients: [[f32; 2]; MAX_COEFFICIENTS],
    /// Number of meaningful entries in `coefficients`.
    pub coefficient_count: u32,
    /// Text instances, [`crate::text::QUAD_STRIDE`] bytes each.
    pub text_instances: Vec<u8>,
    pub text_quads: usize,
}

/// Build the frame for `state`. `scratch` is a reused instance buffer.
pub fn prepare_frame(state: &AppState, atlas: &FontAtlas, scratch: Vec<u8>) -> Frame {
    let text = overlay::overlay_text(state);
    let origin = match state.kind {
        FractalKind::Help => [TEXT_MARGIN, TEXT_MARGIN],
        _ => [
            PANEL_ORIGIN[0] as f32 + TEXT_MARGIN,
            PANEL_ORIGIN[1] as f32 + TEXT_MARGIN,
        ],
    };
    let quads = layout_text(atlas, &text, origin, 1.0);
    let [r, g, b] = state.text_color;
    let mut writer = QuadWriter::from_buffer(scratch);
    writer.push_all(&quads, [r, g, b, 1.0]);
    let text_quads = writer.count();

    let coefficients = state.coefficients();
    Frame {
        variant: state.variant(),
        clear_color: state.background,
        main: state.main,
        selector: state.kind.shows_selector().then_some(state.selector),
        constant: [state.constant[0] as f32, state.constant[1] as f32],
        special_color: state.special_color,
        coefficients: coefficients.uniform_array(),
        coefficient_count: coefficients.len() as u32,
        text_instances: writer.into_buffer(),
        text_quads,
    }
}
