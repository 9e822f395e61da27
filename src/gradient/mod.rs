//! Colour gradients sampled by the fractal shaders.
//!
//! A gradient is a list of colour stops sorted by position in `[0, 1]`. The
//! shaders look colours up in a 1-D RGB texture built by [`Gradient::image`].

mod presets;

pub use presets::GradientPreset;

/// A colour stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPoint {
    pub color: [u8; 3],
    pub position: f32,
}

impl ColorPoint {
    pub const fn new(color: [u8; 3], position: f32) -> Self {
        Self { color, position }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    points: Vec<ColorPoint>,
}

impl Gradient {
    /// Build from stops; they are sorted by position.
    pub fn new(mut points: Vec<ColorPoint>) -> Self {
        points.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { points }
    }

    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }

    /// Colour at `pos` in `[0, 1]`, interpolated between the surrounding stops.
    ///
    /// Positions outside the range, and empty gradients, give black.
    pub fn color_at(&self, pos: f32) -> [u8; 3] {
        if self.points.is_empty() || !(0.0..=1.0).contains(&pos) {
            return [0, 0, 0];
        }

        let Some(upper) = self.points.iter().position(|p| p.position >= pos) else {
            return self.points[self.points.len() - 1].color;
        };
        if upper == 0 || self.points[upper].position == pos {
            return self.points[upper].color;
        }

        let p1 = self.points[upper - 1];
        let p2 = self.points[upper];
        let span = p2.position - p1.position;
        let t = if span > 0.0 {
            (pos - p1.position) / span
        } else {
            0.0
        };
        std::array::from_fn(|i| lerp_u8(p1.color[i], p2.color[i], t))
    }

    /// Colour of sample `index` out of `max` (inclusive).
    pub fn color_at_index(&self, index: u32, max: u32) -> [u8; 3] {
        if max == 0 {
            return [0, 0, 0];
        }
        self.color_at(index as f32 / max as f32)
    }

    /// `width` RGB pixels spanning the whole gradient, first and last
    /// samples landing exactly on positions 0 and 1.
    pub fn image(&self, width: u32) -> Vec<u8> {
        let max = width.saturating_sub(1).max(1);
        (0..width)
            .flat_map(|i| self.color_at_index(i, max))
            .collect()
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8
}

#[cfg(test)]
mod tests;
