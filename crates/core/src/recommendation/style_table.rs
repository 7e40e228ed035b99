//! Static face-shape → frame-style rankings and style descriptions.

use crate::shared::face_shape::FaceShapeLabel;
use crate::shared::frame_style::FrameStyle;

use FrameStyle::*;

const ROUND: &[FrameStyle] = &[Rectangular, Square, Wayframe, Geometric, Angular, DFrame];
const SQUARE: &[FrameStyle] = &[Round, Oval, Aviator, Butterfly, Rimless, Curved];
const OVAL: &[FrameStyle] = &[Rectangular, Square, Wayframe, Aviator, Geometric, CatEye, Round];
const HEART: &[FrameStyle] = &[Round, Oval, LightRimmed, Rimless, CatEye, Butterfly];
const OBLONG: &[FrameStyle] = &[Round, Square, Wayframe, Oversized, Decorative, Browline];

/// Ranked styles for a face shape, most flattering first. Empty for the
/// sentinel.
pub fn recommended_styles(shape: FaceShapeLabel) -> &'static [FrameStyle] {
    match shape {
        FaceShapeLabel::Round => ROUND,
        FaceShapeLabel::Square => SQUARE,
        FaceShapeLabel::Oval => OVAL,
        FaceShapeLabel::Heart => HEART,
        FaceShapeLabel::Oblong => OBLONG,
        FaceShapeLabel::NoneDetected => &[],
    }
}

pub fn describe(style: FrameStyle) -> &'static str {
    match style {
        Rectangular => "Adds angles to soften round features",
        Square => "Adds definition and balances round features",
        Wayframe => "Classic style that works well with most face shapes",
        Geometric => "Makes a bold statement and adds angles",
        Angular => "Sharp lines that add structure to soft features",
        DFrame => "Balances roundness with straight lines",
        Round => "Softens angular features",
        Oval => "Versatile and softens sharp features",
        Aviator => "Classic style that suits most face shapes",
        Butterfly => "Adds width at temples and softens strong jaw",
        Rimless => "Minimalist look that doesn't overpower features",
        Curved => "Softens angular features",
        CatEye => "Draws attention upward and balances wider jaw",
        LightRimmed => "Doesn't overpower delicate features",
        Oversized => "Adds proportion to longer faces",
        Decorative => "Adds interest to balanced features",
        Browline => "Adds width to longer faces",
    }
}
