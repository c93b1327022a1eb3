//! Deployment constants and compiled-in defaults

use image::Rgba;

// Animation timing
/// Number of variant frames rendered per animation loop
pub const FRAMES_PER_LOOP: u32 = 8;
/// Milliseconds in one animation loop; the inter-frame delay derives from it
pub const MILLIS_PER_LOOP: u32 = 1000;
/// Delay between animation frames in milliseconds
pub const FRAME_DELAY_MS: u32 = MILLIS_PER_LOOP / FRAMES_PER_LOOP;

// Rendering
/// Upscale factor for animation frames
pub const FRAME_SCALE: u32 = 10;
/// Upscale factor for the standalone still
pub const STILL_SCALE: u32 = 10;
/// Maximum per-channel jitter variance (exclusive upper bound)
pub const JITTER_THRESHOLD: u8 = 32;
/// Sentinel background color rendered verbatim, never jittered
pub const IGNORE_COLOR: Rgba<u8> = Rgba([33, 33, 33, 255]);

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension after upscaling
pub const MAX_OUTPUT_DIMENSION: u32 = 16_384;

// Output naming
/// Digits in zero-padded frame file names
pub const FRAME_INDEX_WIDTH: usize = 2;
/// Largest frame count that zero-padded names keep in lexicographic order
pub const MAX_FRAME_COUNT: u32 = 10u32.pow(FRAME_INDEX_WIDTH as u32);
/// File extension of produced animations
pub const ANIMATION_EXTENSION: &str = "gif";
/// Suffix appended to the stem for the oversized still
pub const STILL_SUFFIX: &str = "-big";
/// File name of the generated gallery manifest
pub const MANIFEST_FILE_NAME: &str = "index.html";
/// Source file extensions recognized as jobs
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// Encoding
/// GIF encoder speed (1 = best quality, 30 = fastest)
pub const GIF_ENCODER_SPEED: i32 = 10;
