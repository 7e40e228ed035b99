pub mod constants;
pub mod error;
pub mod face_shape;
pub mod frame_style;
