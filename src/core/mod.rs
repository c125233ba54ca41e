//! Core compositing building blocks: mask normalization, blending,
//! linear-interpolation compositing, shape validation, and quantization.
//! These are internal primitives consumed by the high-level `api` module.
pub mod blend;
pub mod composite;
pub mod normalize;
pub mod params;
pub mod quantize;
pub mod validate;
