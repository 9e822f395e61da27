//! Fixed window layout: main view on the left, info panel top right,
//! selector view bottom right.

pub const WINDOW_WIDTH: u32 = 1500;
pub const WINDOW_HEIGHT: u32 = 1000;

pub const VIEW_WIDTH: u32 = 1000;
pub const VIEW_HEIGHT: u32 = 1000;

/// Side of the square selector view.
pub const SELECTOR_SIZE: u32 = WINDOW_WIDTH - VIEW_WIDTH;

/// Top-left corner of the selector view in window pixels.
pub const SELECTOR_ORIGIN: [u32; 2] = [VIEW_WIDTH, WINDOW_HEIGHT - SELECTOR_SIZE];

/// Top-left corner of the text panel above the selector.
pub const PANEL_ORIGIN: [u32; 2] = [VIEW_WIDTH, 0];

/// Window area under a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Main,
    Panel,
    Selector,
    Outside,
}

/// Classify window pixel `(x, y)`.
pub fn region_at(x: f64, y: f64) -> Region {
    if x < 0.0 || y < 0.0 || x >= f64::from(WINDOW_WIDTH) || y >= f64::from(WINDOW_HEIGHT) {
        return Region::Outside;
    }
    if x < f64::from(VIEW_WIDTH) {
        return Region::Main;
    }
    if y >= f64::from(SELECTOR_ORIGIN[1]) {
        Region::Selector
    } else {
        Region::Panel
    }
}

/// Window pixel relative to the selector's top-left corner.
pub fn to_selector(x: f64, y: f64) -> (f64, f64) {
    (
        x - f64::from(SELECTOR_ORIGIN[0]),
        y - f64::from(SELECTOR_ORIGIN[1]),
    )
}
