//! Interactive fractal explorer core.
//!
//! Holds everything the renderer feeds from: the polynomial coefficient
//! engine behind the Newton/Nova shaders, the bitmap font atlas used by the
//! text overlay, colour gradients, view state and input mapping. Window and
//! GPU context management live outside this crate.

pub mod app;
pub mod complex;
pub mod config;
pub mod font;
pub mod gradient;
pub mod input;
pub mod overlay;
pub mod poly;
pub mod text;
pub mod view;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .join("fractview_debug.log")
}

/// Appends formatted records to the debug log file.
///
/// Opened per record; nothing is buffered.
struct FileLogger {
    path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{:<5}] {}: {}\n",
            record.level(),
            record.target(),
            record.args()
        );
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()));
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Install the file logger. Later calls are no-ops.
pub fn init_logger(level: log::LevelFilter) {
    let logger = LOGGER.get_or_init(|| FileLogger { path: log_path() });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
