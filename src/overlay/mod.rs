//! Text drawn in the info panel and on the help screen.

use std::fmt::Write;

use crate::view::{AppState, FractalKind};

/// Significant digits shown for view coordinates.
pub const SIG_DIGITS: usize = 12;

pub const HELP_TEXT: &str = "\
Fractals
  1  Mandelbrot
  2  Julia
  3  Newton
  4  Nova
  5  This help (also 0)

Views
  Left drag     pan
  Right drag    zoom
  Space + drag  pan/zoom the selector
  Click selector  pick the Julia/Nova constant
  Tab           single/double precision

Detail
  Ctrl+1..9,0,O      iterations 100..900, 10000, 20000
  Ctrl+Shift+digit   iterations x10
  Alt+1..9,0,O       colours 2..2048
  Space + key        apply to the selector

Roots (Newton, Nova)
  Ctrl+left      add or drag a root
  Ctrl+right     remove a root

  Esc  quit";

/// Format like a general float conversion with [`SIG_DIGITS`] significant
/// digits: fixed notation for moderate magnitudes, scientific otherwise,
/// trailing zeros dropped.
pub fn format_number(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return v.to_string();
    }
    // The exponent is read after rounding, so 9.9999999999999 becomes 1e1.
    let sci = format!("{:.*e}", SIG_DIGITS - 1, v);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exponent.parse::<i32>() else {
        return sci;
    };
    if (-4..SIG_DIGITS as i32).contains(&exp) {
        let decimals = (SIG_DIGITS as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_owned()
    } else {
        format!("{}e{exp}", trim_fraction(mantissa))
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Panel lines describing the current views.
pub fn status_text(state: &AppState) -> String {
    let mut out = String::new();
    let main = &state.main;
    let _ = writeln!(out, "{} ({})", state.kind.name(), state.precision.name());
    let _ = writeln!(out, "scale: {}", format_number(main.scale));
    let _ = writeln!(
        out,
        "center: {}, {}",
        format_number(main.center[0]),
        format_number(main.center[1])
    );
    let _ = writeln!(out, "iterations: {}", main.iterations);
    let _ = writeln!(out, "colors: {}", main.color_count);

    if state.kind.uses_constant() {
        let _ = writeln!(
            out,
            "constant: {}, {}",
            format_number(state.constant[0]),
            format_number(state.constant[1])
        );
        let sel = &state.selector;
        let _ = writeln!(out, "selector scale: {}", format_number(sel.scale));
        let _ = writeln!(out, "selector iterations: {}", sel.iterations);
    }
    if state.kind.uses_roots() {
        let _ = writeln!(out, "roots: {}", state.roots().len());
        for r in state.roots().as_slice() {
            let _ = writeln!(
                out,
                "  {}, {}",
                format_number(f64::from(r.re)),
                format_number(f64::from(r.im))
            );
        }
    }
    out
}

/// Text for the current screen: the key reference on the help screen,
/// the status panel otherwise.
pub fn overlay_text(state: &AppState) -> String {
    match state.kind {
        FractalKind::Help => HELP_TEXT.to_owned(),
        _ => status_text(state),
    }
}
