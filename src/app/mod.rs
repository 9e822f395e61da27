//! Application state, startup, and event dispatch.

mod frame;

pub use frame::{Frame, TEXT_MARGIN, prepare_frame};

use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::font::{self, AtlasBitmap, AtlasStatus, FontAtlas, FontError};
use crate::input::{self, Key, KeyEventType, Modifiers, MouseButton, MouseState};
use crate::view::AppState;

/// Texels in the 1-D gradient texture.
pub const GRADIENT_WIDTH: u32 = 1024;

pub struct App {
    config: Config,
    state: AppState,
    mouse: MouseState,
    atlas: FontAtlas,
    gradient: Vec<u8>,
    /// Instance buffer reused across frames.
    scratch: Vec<u8>,
}

impl App {
    /// Build state and the font atlas from `config`.
    pub fn new(config: Config) -> Result<Self, FontError> {
        let t0 = Instant::now();
        let atlas = font::build_atlas(Path::new(&config.font.path), config.font_pixel_height())?;
        log::info!(
            "font: {} at {}px, atlas {}x{} ({:.1}ms)",
            config.font.path,
            atlas.pixel_height(),
            atlas.width(),
            atlas.height(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );
        Ok(Self::with_atlas(config, atlas))
    }

    /// Build around an already packed atlas.
    pub fn with_atlas(config: Config, atlas: FontAtlas) -> Self {
        if atlas.status() == AtlasStatus::SomeCharactersMissing {
            log::warn!("font: {} characters missing", atlas.missing().len());
        }
        let state = config.to_state();
        let gradient = state.gradient.gradient().image(GRADIENT_WIDTH);
        Self {
            config,
            state,
            mouse: MouseState::new(),
            atlas,
            gradient,
            scratch: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn atlas(&self) -> &FontAtlas {
        &self.atlas
    }

    /// RGB texels for the gradient texture.
    pub fn gradient_image(&self) -> &[u8] {
        &self.gradient
    }

    /// Hand the atlas pixels to the uploader; glyph metrics stay.
    pub fn take_atlas_bitmap(&mut self) -> Option<AtlasBitmap> {
        self.atlas.take_bitmap()
    }

    pub fn should_close(&self) -> bool {
        self.state.should_close
    }

    pub fn key(&mut self, key: Key, mods: Modifiers, event_type: KeyEventType) {
        input::handle_key(&mut self.state, &mut self.mouse, key, mods, event_type);
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.mouse.moved(&mut self.state, x, y);
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool, mods: Modifiers) {
        if pressed {
            self.mouse.pressed(&mut self.state, button, mods);
        } else {
            self.mouse.released(button);
        }
    }

    /// Snapshot the next frame. Call [`App::recycle`] with the spent frame
    /// to keep the instance buffer allocation.
    pub fn frame(&mut self) -> Frame {
        prepare_frame(&self.state, &self.atlas, std::mem::take(&mut self.scratch))
    }

    pub fn recycle(&mut self, frame: Frame) {
        self.scratch = frame.text_instances;
    }

    /// Load config, build the atlas and prepare the first frame.
    ///
    /// Window and GL context creation belong to the embedding renderer;
    /// this prints what would be uploaded.
    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        std::panic::set_hook(Box::new(|info| {
            log::error!("panic: {info}");
            let _ = std::fs::write("fractview_panic.log", format!("{info}"));
        }));

        let _ = std::fs::remove_file(crate::log_path());
        crate::init_logger(log::LevelFilter::Debug);
        let startup = Instant::now();
        log::info!("starting");

        let config = Config::load();
        log::info!(
            "config: kind={}, precision={}, scale={}, iterations={}, colors={}, font={} size={}",
            config.fractal.kind.name(),
            config.fractal.precision.name(),
            config.view.scale,
            config.view.iterations,
            config.view.color_count,
            config.font.path,
            config.font.size,
        );

        let mut app = Self::new(config)?;
        let bitmap = app.take_atlas_bitmap().ok_or("atlas bitmap already released")?;
        let frame = app.frame();
        log::info!(
            "first frame prepared: {} text quads ({:.1}ms)",
            frame.text_quads,
            startup.elapsed().as_secs_f64() * 1000.0,
        );

        println!("fractview {}", env!("CARGO_PKG_VERSION"));
        println!(
            "atlas:    {}x{} ({} bytes), {}/{} glyphs",
            bitmap.width(),
            bitmap.height(),
            bitmap.as_bytes().len(),
            app.atlas().glyph_count(),
            font::GLYPH_COUNT,
        );
        if !app.atlas().missing().is_empty() {
            println!("missing:  {:?}", app.atlas().missing());
        }
        println!("gradient: {} texels", app.gradient_image().len() / 3);
        println!(
            "shader:   {}",
            frame
                .variant
                .fragment_name()
                .unwrap_or_else(|| "help".to_owned())
        );
        println!(
            "roots:    {} (degree {})",
            app.state().roots().len(),
            frame.coefficient_count.saturating_sub(1)
        );
        println!("text:     {} quads", frame.text_quads);
        app.recycle(frame);
        Ok(())
    }
}
