//! Configuration structures and loading logic.

mod io;

pub use io::{ConfigError, config_dir, config_path};

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::gradient::GradientPreset;
use crate::poly::{MAX_ROOTS, RootSet};
use crate::view::{AppState, FractalKind, Precision, ViewParams};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub selector: SelectorConfig,
    pub fractal: FractalConfig,
    pub newton: NewtonConfig,
    pub colors: ColorConfig,
    pub font: FontConfig,
}

/// Initial framing of the main view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub scale: f64,
    pub center: [f64; 2],
    pub iterations: u32,
    pub color_count: f32,
}

/// Initial framing of the Mandelbrot selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub scale: f64,
    pub center: [f64; 2],
    pub iterations: u32,
    pub color_count: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub kind: FractalKind,
    pub precision: Precision,
    /// Julia/Nova constant.
    pub constant: [f64; 2],
}

/// Roots for Newton and Nova, as `[re, im]` pairs.
///
/// Absent means the cube roots of unity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonConfig {
    pub roots: Option<Vec<Complex>>,
}

/// Colours as `#RRGGBB` or `#RGB` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub text: String,
    /// Points that never escape.
    pub special: String,
    pub gradient: GradientPreset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: String,
    /// Nominal size; glyphs rasterize at half this height.
    pub size: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale: 4.0,
            center: [0.0, 0.0],
            iterations: 1000,
            color_count: 256.0,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            scale: 4.0,
            center: [0.0, 0.0],
            iterations: 100,
            color_count: 128.0,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#1a1a1a".to_owned(),
            text: "#e6e6e6".to_owned(),
            special: "#000000".to_owned(),
            gradient: GradientPreset::default(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: "CascadiaMono.ttf".to_owned(),
            size: 40,
        }
    }
}

impl From<&ViewConfig> for ViewParams {
    fn from(c: &ViewConfig) -> Self {
        Self {
            scale: c.scale,
            center: c.center,
            iterations: c.iterations,
            color_count: c.color_count,
        }
    }
}

impl From<&SelectorConfig> for ViewParams {
    fn from(c: &SelectorConfig) -> Self {
        Self {
            scale: c.scale,
            center: c.center,
            iterations: c.iterations,
            color_count: c.color_count,
        }
    }
}

/// Parse `#RRGGBB` or `#RGB` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    match hex.len() {
        6 => Some([channel(0..2)?, channel(2..4)?, channel(4..6)?]),
        3 => Some([channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17]),
        _ => None,
    }
}

/// Normalize an 8-bit colour for shader uniforms.
pub fn rgb_to_f32(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(|c| f32::from(c) / 255.0)
}

fn color_or(name: &str, value: &str, fallback: [f32; 3]) -> [f32; 3] {
    match parse_hex_color(value) {
        Some(rgb) => rgb_to_f32(rgb),
        None => {
            log::warn!("config: invalid {name} color {value:?}, using default");
            fallback
        }
    }
}

impl Config {
    /// Load config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(cfg) => {
                log::info!("config: loaded from {}", config_path().display());
                cfg
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                log::warn!("config: {e}");
                Self::default()
            }
        }
    }

    /// Load config, keeping "file missing" and "parse error" distinct.
    pub fn try_load() -> Result<Self, ConfigError> {
        io::read_config(&config_path())
    }

    /// Glyph pixel height for the atlas.
    pub fn font_pixel_height(&self) -> u32 {
        self.font.size / 2
    }

    /// Root set from `[newton] roots`, truncated to capacity.
    pub fn root_set(&self) -> RootSet {
        let Some(roots) = &self.newton.roots else {
            return RootSet::unity_cube();
        };
        let (set, dropped) = RootSet::from_slice(roots);
        if dropped > 0 {
            log::warn!("config: {dropped} roots beyond the first {MAX_ROOTS} ignored");
        }
        set
    }

    /// Build the initial application state.
    pub fn to_state(&self) -> AppState {
        let mut state = AppState::new((&self.view).into(), (&self.selector).into(), self.root_set());
        state.kind = self.fractal.kind;
        state.precision = self.fractal.precision;
        state.constant = self.fractal.constant;
        state.gradient = self.colors.gradient;
        state.background = color_or("background", &self.colors.background, state.background);
        state.text_color = color_or("text", &self.colors.text, state.text_color);
        state.special_color = color_or("special", &self.colors.special, state.special_color);
        state
    }
}
