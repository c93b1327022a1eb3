//! Frame batch generation and GIF assembly for one job's animation

/// Streaming GIF assembly and oversized still export
pub mod encoder;
/// Independent variant frame generation and naming
pub mod frames;

use crate::io::configuration::{
    FRAME_DELAY_MS, FRAME_SCALE, FRAMES_PER_LOOP, IGNORE_COLOR, JITTER_THRESHOLD, MAX_FRAME_COUNT,
    MAX_OUTPUT_DIMENSION, STILL_SCALE,
};
use crate::io::error::{Result, invalid_parameter};
use image::{Rgba, RgbaImage};

/// Rendering parameters for one batch run
///
/// Defaults mirror the compiled-in deployment constants; the orchestrator
/// passes one configuration down through frame generation and assembly.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Number of variant frames rendered per animation loop
    pub frame_count: u32,
    /// Delay between animation frames in milliseconds
    pub frame_delay_ms: u32,
    /// Upscale factor for animation frames
    pub frame_scale: u32,
    /// Upscale factor for the standalone still
    pub still_scale: u32,
    /// Maximum per-channel jitter variance (exclusive upper bound)
    pub threshold: u8,
    /// Sentinel color rendered verbatim, never jittered
    pub ignore_color: Rgba<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_count: FRAMES_PER_LOOP,
            frame_delay_ms: FRAME_DELAY_MS,
            frame_scale: FRAME_SCALE,
            still_scale: STILL_SCALE,
            threshold: JITTER_THRESHOLD,
            ignore_color: IGNORE_COLOR,
        }
    }
}

impl RenderConfig {
    /// Validate the configuration parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the frame count is zero or exceeds what
    /// zero-padded frame names keep ordered, or if either upscale factor
    /// is zero
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(invalid_parameter(
                "frame_count",
                &self.frame_count,
                &"must be at least 1",
            ));
        }
        if self.frame_count > MAX_FRAME_COUNT {
            return Err(invalid_parameter(
                "frame_count",
                &self.frame_count,
                &format!("zero-padded frame names stay ordered only up to {MAX_FRAME_COUNT}"),
            ));
        }
        if self.frame_scale == 0 {
            return Err(invalid_parameter(
                "frame_scale",
                &self.frame_scale,
                &"must be a positive upscale factor",
            ));
        }
        if self.still_scale == 0 {
            return Err(invalid_parameter(
                "still_scale",
                &self.still_scale,
                &"must be a positive upscale factor",
            ));
        }

        Ok(())
    }

    /// Check that the upscaled outputs for `source` stay within the
    /// dimension safety limit
    ///
    /// # Errors
    ///
    /// Returns an error if the source is empty or either upscaled output
    /// would exceed the maximum allowed dimension
    pub fn validate_source(&self, source: &RgbaImage) -> Result<()> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "source",
                &format!("{width}x{height}"),
                &"source image has no pixels",
            ));
        }

        let scale = self.frame_scale.max(self.still_scale);
        if width.max(height).saturating_mul(scale) > MAX_OUTPUT_DIMENSION {
            return Err(invalid_parameter(
                "source",
                &format!("{width}x{height}"),
                &format!("upscaled output exceeds the {MAX_OUTPUT_DIMENSION} pixel dimension limit"),
            ));
        }

        Ok(())
    }
}
