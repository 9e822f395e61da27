//! Keyboard and mouse handling: maps events to state changes.
//!
//! Holding Space routes every view change to the selector instead of
//! the main view.

mod mouse;

use bitflags::bitflags;

pub use mouse::{MouseButton, MouseState, SNAP_PIXELS};

use crate::view::{AppState, FractalKind, ViewParams};

bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const ALT     = 0b0010;
        const CONTROL = 0b0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    Press,
    Repeat,
    Release,
}

/// Keys the viewer reacts to; everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Space,
    /// Top-row or keypad digit `0..=9`.
    Digit(u8),
    /// Letter key, lowercase.
    Letter(char),
    Other,
}

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    TogglePrecision,
    SelectFractal(FractalKind),
    SetIterations(u32),
    SetColorCount(f32),
}

/// Digit position on the number row: 1..9 then 0, with O as an eleventh step.
fn step(key: Key) -> Option<u32> {
    match key {
        Key::Digit(0) => Some(10),
        Key::Digit(d @ 1..=9) => Some(u32::from(d)),
        Key::Letter('o') => Some(11),
        _ => None,
    }
}

/// Iteration count for a Ctrl step. Shift multiplies by ten.
fn iterations_for(step: u32, mods: Modifiers) -> u32 {
    let base = if mods.contains(Modifiers::SHIFT) { 10 } else { 1 };
    let n = match step {
        10 => 10_000,
        11 => 20_000,
        s => s * 100,
    };
    base * n
}

/// Colour count for an Alt step: powers of two from 2 to 2048.
fn color_count_for(step: u32) -> f32 {
    (2u32 << (step - 1)) as f32
}

/// Resolve a key press to an action.
pub fn find_action(key: Key, mods: Modifiers) -> Option<Action> {
    match key {
        Key::Escape => return Some(Action::Quit),
        Key::Tab => return Some(Action::TogglePrecision),
        _ => {}
    }
    let step = step(key)?;
    if mods.contains(Modifiers::ALT) {
        return Some(Action::SetColorCount(color_count_for(step)));
    }
    if mods.contains(Modifiers::CONTROL) {
        return Some(Action::SetIterations(iterations_for(step, mods)));
    }
    if !mods.is_empty() {
        return None;
    }
    let kind = match key {
        Key::Digit(0 | 5) => FractalKind::Help,
        Key::Digit(1) => FractalKind::Mandelbrot,
        Key::Digit(2) => FractalKind::Julia,
        Key::Digit(3) => FractalKind::Newton,
        Key::Digit(4) => FractalKind::Nova,
        _ => return None,
    };
    Some(Action::SelectFractal(kind))
}

/// View that pans, zooms and takes iteration/colour changes.
pub fn target_view(state: &mut AppState, selector: bool) -> &mut ViewParams {
    if selector { &mut state.selector } else { &mut state.main }
}

/// Apply `action`. Iteration and colour changes go to the selector when
/// `selector` is set.
pub fn apply_action(state: &mut AppState, action: Action, selector: bool) {
    match action {
        Action::Quit => state.should_close = true,
        Action::TogglePrecision => {
            state.precision = state.precision.toggled();
            log::info!("precision: {}", state.precision.name());
        }
        Action::SelectFractal(kind) => {
            state.kind = kind;
            log::info!("fractal: {}", kind.name());
        }
        Action::SetIterations(n) => target_view(state, selector).iterations = n,
        Action::SetColorCount(n) => target_view(state, selector).color_count = n,
    }
}

/// Keyboard handler. Space is tracked in `mouse` since it changes where
/// drags go.
pub fn handle_key(
    state: &mut AppState,
    mouse: &mut MouseState,
    key: Key,
    mods: Modifiers,
    event_type: KeyEventType,
) {
    if key == Key::Space {
        mouse.set_selector_held(event_type != KeyEventType::Release);
        return;
    }
    // Toggles fire once per physical press.
    if event_type != KeyEventType::Press {
        return;
    }
    if let Some(action) = find_action(key, mods) {
        apply_action(state, action, mouse.selector_held());
    }
}
