//! Built-in gradients.

use serde::{Deserialize, Serialize};

use super::{ColorPoint, Gradient};

/// Named in config by [`GradientPreset::name`], matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum GradientPreset {
    /// The classic Ultra Fractal deep blue / white / orange cycle.
    #[default]
    UltraFractal,
    Monokai,
    Grayscale,
}

const ULTRA_FRACTAL: [ColorPoint; 6] = [
    ColorPoint::new([0, 7, 100], 0.0),
    ColorPoint::new([32, 107, 203], 0.16),
    ColorPoint::new([237, 255, 255], 0.42),
    ColorPoint::new([255, 170, 0], 0.6425),
    ColorPoint::new([0, 2, 0], 0.8575),
    ColorPoint::new([0, 7, 100], 1.0),
];

const MONOKAI: [ColorPoint; 6] = [
    ColorPoint::new([39, 40, 34], 0.0),
    ColorPoint::new([249, 38, 114], 0.2),
    ColorPoint::new([102, 217, 239], 0.4),
    ColorPoint::new([166, 226, 46], 0.6),
    ColorPoint::new([253, 151, 31], 0.8),
    ColorPoint::new([39, 40, 34], 1.0),
];

const GRAYSCALE: [ColorPoint; 3] = [
    ColorPoint::new([0, 0, 0], 0.0),
    ColorPoint::new([255, 255, 255], 0.5),
    ColorPoint::new([0, 0, 0], 1.0),
];

impl GradientPreset {
    pub const ALL: [Self; 3] = [Self::UltraFractal, Self::Monokai, Self::Grayscale];

    pub fn name(self) -> &'static str {
        match self {
            Self::UltraFractal => "ultra_fractal",
            Self::Monokai => "monokai",
            Self::Grayscale => "grayscale",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn gradient(self) -> Gradient {
        let stops: &[ColorPoint] = match self {
            Self::UltraFractal => &ULTRA_FRACTAL,
            Self::Monokai => &MONOKAI,
            Self::Grayscale => &GRAYSCALE,
        };
        Gradient::new(stops.to_vec())
    }
}

impl TryFrom<String> for GradientPreset {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::find(&name).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
            format!("unknown gradient \"{name}\", expected one of: {}", known.join(", "))
        })
    }
}
