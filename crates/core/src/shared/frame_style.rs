use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown frame style: '{0}'")]
pub struct UnknownStyle(pub String);

/// Eyewear frame style vocabulary shared by recommendations and the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameStyle {
    Rectangular,
    Square,
    Wayframe,
    Geometric,
    Angular,
    DFrame,
    Round,
    Oval,
    Aviator,
    Butterfly,
    Rimless,
    Curved,
    CatEye,
    LightRimmed,
    Oversized,
    Decorative,
    Browline,
}

impl FrameStyle {
    pub const ALL: &[FrameStyle] = &[
        FrameStyle::Rectangular,
        FrameStyle::Square,
        FrameStyle::Wayframe,
        FrameStyle::Geometric,
        FrameStyle::Angular,
        FrameStyle::DFrame,
        FrameStyle::Round,
        FrameStyle::Oval,
        FrameStyle::Aviator,
        FrameStyle::Butterfly,
        FrameStyle::Rimless,
        FrameStyle::Curved,
        FrameStyle::CatEye,
        FrameStyle::LightRimmed,
        FrameStyle::Oversized,
        FrameStyle::Decorative,
        FrameStyle::Browline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameStyle::Rectangular => "rectangular",
            FrameStyle::Square => "square",
            FrameStyle::Wayframe => "wayframe",
            FrameStyle::Geometric => "geometric",
            FrameStyle::Angular => "angular",
            FrameStyle::DFrame => "d-frame",
            FrameStyle::Round => "round",
            FrameStyle::Oval => "oval",
            FrameStyle::Aviator => "aviator",
            FrameStyle::Butterfly => "butterfly",
            FrameStyle::Rimless => "rimless",
            FrameStyle::Curved => "curved",
            FrameStyle::CatEye => "cat-eye",
            FrameStyle::LightRimmed => "light-rimmed",
            FrameStyle::Oversized => "oversized",
            FrameStyle::Decorative => "decorative",
            FrameStyle::Browline => "browline",
        }
    }

    /// Case-insensitive comparison against a catalog `frame_shape` value.
    pub fn matches(&self, frame_shape: &str) -> bool {
        frame_shape.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameStyle::ALL
            .iter()
            .find(|style| style.matches(s))
            .copied()
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}
