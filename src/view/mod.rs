//! Application state: which fractal is shown, how both views are framed,
//! and the parameters fed to the shaders.

pub mod layout;

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::gradient::GradientPreset;
use crate::poly::{Coefficients, RootError, RootSet};

/// Zoom factor per pixel of vertical right-drag.
pub const ZOOM_PER_PIXEL: f64 = 0.99;

/// Available fractals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKind {
    /// Key reference screen instead of a fractal.
    Help,
    #[default]
    Mandelbrot,
    Julia,
    Newton,
    Nova,
}

impl FractalKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "Help",
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Newton => "Newton",
            Self::Nova => "Nova",
        }
    }

    /// Julia and Nova take a constant picked in the selector view.
    pub fn uses_constant(self) -> bool {
        matches!(self, Self::Julia | Self::Nova)
    }

    /// Newton and Nova iterate a polynomial built from editable roots.
    pub fn uses_roots(self) -> bool {
        matches!(self, Self::Newton | Self::Nova)
    }

    /// The Mandelbrot selector is drawn next to fractals with a constant.
    pub fn shows_selector(self) -> bool {
        self.uses_constant()
    }
}

/// Floating point width used by the main view's shader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    #[default]
    Single,
    /// Deeper zoom at a large performance cost on most GPUs.
    Double,
}

impl Precision {
    pub fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Single,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

/// The shader program to draw: fractal kind plus precision.
///
/// The help screen is plain text and has no precision variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVariant {
    Help,
    Fractal(FractalKind, Precision),
}

impl ShaderVariant {
    pub fn new(kind: FractalKind, precision: Precision) -> Self {
        match kind {
            FractalKind::Help => Self::Help,
            kind => Self::Fractal(kind, precision),
        }
    }

    /// Fragment shader stem, e.g. `julia_d`.
    pub fn fragment_name(self) -> Option<String> {
        match self {
            Self::Help => None,
            Self::Fractal(kind, precision) => {
                let suffix = match precision {
                    Precision::Single => 'f',
                    Precision::Double => 'd',
                };
                Some(format!("{}_{suffix}", kind.name().to_ascii_lowercase()))
            }
        }
    }
}

/// Framing and colouring of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Width of the visible region in the complex plane.
    pub scale: f64,
    /// Plane offset: a pixel maps to `screen * scale - center`.
    pub center: [f64; 2],
    pub iterations: u32,
    /// Colours before the gradient repeats.
    pub color_count: f32,
}

impl ViewParams {
    /// Move the image with the mouse by `(dx, dy)` pixels of a `w`x`h` view.
    pub fn pan(&mut self, dx: f64, dy: f64, w: f64, h: f64) {
        self.center[0] += dx / w * self.scale;
        self.center[1] -= dy / h * self.scale;
    }

    /// Zoom by vertical mouse travel; dragging up zooms in.
    pub fn zoom(&mut self, dy: f64) {
        self.scale *= ZOOM_PER_PIXEL.powf(-dy);
    }

    /// Plane coordinate under pixel `(x, y)` of a `w`x`h` view (y down).
    pub fn pixel_to_plane(&self, x: f64, y: f64, w: f64, h: f64) -> [f64; 2] {
        [
            (x - w / 2.0) / w * self.scale - self.center[0],
            (y - h / 2.0) / h * -self.scale - self.center[1],
        ]
    }
}

/// Everything the renderer reads each frame. Owned by the event loop and
/// passed by reference into input handling and frame preparation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub main: ViewParams,
    pub selector: ViewParams,
    pub kind: FractalKind,
    pub precision: Precision,
    /// Julia/Nova constant picked in the selector.
    pub constant: [f64; 2],
    /// Colour of points that never escape.
    pub special_color: [f32; 3],
    pub background: [f32; 3],
    pub text_color: [f32; 3],
    pub gradient: GradientPreset,
    pub should_close: bool,
    roots: RootSet,
    coefficients: Coefficients,
}

impl AppState {
    pub fn new(main: ViewParams, selector: ViewParams, roots: RootSet) -> Self {
        let coefficients = roots.coefficients();
        Self {
            main,
            selector,
            kind: FractalKind::default(),
            precision: Precision::default(),
            constant: [0.0, 0.0],
            special_color: [0.0, 0.0, 0.0],
            background: [0.1, 0.1, 0.1],
            text_color: [0.9, 0.9, 0.9],
            gradient: GradientPreset::default(),
            should_close: false,
            roots,
            coefficients,
        }
    }

    pub fn variant(&self) -> ShaderVariant {
        ShaderVariant::new(self.kind, self.precision)
    }

    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    /// Coefficients of the current roots, kept in sync on every edit.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn add_root(&mut self, z: Complex) -> Result<usize, RootError> {
        let idx = self.roots.push(z)?;
        self.refresh_coefficients();
        Ok(idx)
    }

    pub fn remove_root(&mut self, index: usize) -> Result<Complex, RootError> {
        let z = self.roots.remove(index)?;
        self.refresh_coefficients();
        Ok(z)
    }

    pub fn move_root(&mut self, index: usize, z: Complex) -> Result<(), RootError> {
        self.roots.set(index, z)?;
        self.refresh_coefficients();
        Ok(())
    }

    fn refresh_coefficients(&mut self) {
        self.coefficients = self.roots.coefficients();
        log::debug!(
            "roots: {} roots, degree {} polynomial",
            self.roots.len(),
            self.coefficients.degree()
        );
    }
}
