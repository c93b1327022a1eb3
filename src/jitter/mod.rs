//! Core jitter algorithm: bounded per-channel color randomization and
//! block-upscaled variant rendering

/// Bounded random color offsets and the ignore-color equality rule
pub mod color;
/// Upscaled variant rendering with per-pixel jittered blocks
pub mod variant;

pub use variant::render_variant;
