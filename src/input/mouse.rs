//! Mouse drags: pan, zoom, constant picking and root editing.

use crate::complex::Complex;
use crate::view::AppState;
use crate::view::layout::{Region, SELECTOR_SIZE, VIEW_HEIGHT, VIEW_WIDTH, region_at, to_selector};

use super::{Modifiers, target_view};

/// Grab radius for root editing, in main-view pixels.
pub const SNAP_PIXELS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer state carried between events.
#[derive(Debug, Default)]
pub struct MouseState {
    cursor: Option<(f64, f64)>,
    left: bool,
    right: bool,
    /// Space held: drags go to the selector.
    selector_held: bool,
    /// Root being dragged with Ctrl+left.
    grabbed: Option<usize>,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector_held(&self) -> bool {
        self.selector_held
    }

    pub fn set_selector_held(&mut self, held: bool) {
        self.selector_held = held;
    }

    pub fn grabbed_root(&self) -> Option<usize> {
        self.grabbed
    }

    /// Button press at the last known cursor position.
    pub fn pressed(&mut self, state: &mut AppState, button: MouseButton, mods: Modifiers) {
        match button {
            MouseButton::Left => self.left = true,
            MouseButton::Right => self.right = true,
            MouseButton::Middle => return,
        }
        let Some((x, y)) = self.cursor else {
            return;
        };
        let region = region_at(x, y);

        if mods.contains(Modifiers::CONTROL) && region == Region::Main && state.kind.uses_roots() {
            let z = main_plane(state, x, y);
            let snap = SNAP_PIXELS / f64::from(VIEW_WIDTH) * state.main.scale;
            let near = state.roots().nearest(z, snap as f32);
            match button {
                MouseButton::Left => self.grab_or_add(state, near, z),
                MouseButton::Right => {
                    if let Some(idx) = near {
                        if let Err(e) = state.remove_root(idx) {
                            log::warn!("remove root {idx}: {e}");
                        }
                    }
                }
                MouseButton::Middle => {}
            }
            return;
        }

        if button == MouseButton::Left {
            self.pick_constant(state, x, y);
        }
    }

    pub fn released(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => {
                self.left = false;
                self.grabbed = None;
            }
            MouseButton::Right => self.right = false,
            MouseButton::Middle => {}
        }
    }

    /// Cursor moved to window pixel `(x, y)`.
    pub fn moved(&mut self, state: &mut AppState, x: f64, y: f64) {
        let (dx, dy) = match self.cursor {
            Some((px, py)) => (x - px, y - py),
            None => (0.0, 0.0),
        };
        self.cursor = Some((x, y));

        if let Some(idx) = self.grabbed {
            if self.left {
                let z = main_plane(state, x, y);
                if let Err(e) = state.move_root(idx, z) {
                    log::warn!("move root {idx}: {e}");
                    self.grabbed = None;
                }
                return;
            }
        }

        if self.left && self.pick_constant(state, x, y) {
            return;
        }

        let (w, h) = if self.selector_held {
            (f64::from(SELECTOR_SIZE), f64::from(SELECTOR_SIZE))
        } else {
            (f64::from(VIEW_WIDTH), f64::from(VIEW_HEIGHT))
        };
        let view = target_view(state, self.selector_held);
        if self.left {
            view.pan(dx, dy, w, h);
        } else if self.right {
            view.zoom(dy);
        }
    }

    fn grab_or_add(&mut self, state: &mut AppState, near: Option<usize>, z: Complex) {
        if let Some(idx) = near {
            self.grabbed = Some(idx);
            return;
        }
        match state.add_root(z) {
            Ok(idx) => self.grabbed = Some(idx),
            Err(e) => log::info!("add root: {e}"),
        }
    }

    /// Set the constant from a selector click. Returns whether the cursor
    /// was over a visible selector.
    fn pick_constant(&self, state: &mut AppState, x: f64, y: f64) -> bool {
        if self.selector_held || !state.kind.shows_selector() || region_at(x, y) != Region::Selector
        {
            return false;
        }
        let (sx, sy) = to_selector(x, y);
        let size = f64::from(SELECTOR_SIZE);
        state.constant = state.selector.pixel_to_plane(sx, sy, size, size);
        true
    }
}

fn main_plane(state: &AppState, x: f64, y: f64) -> Complex {
    let [re, im] = state
        .main
        .pixel_to_plane(x, y, f64::from(VIEW_WIDTH), f64::from(VIEW_HEIGHT));
    Complex::from_f64(re, im)
}
