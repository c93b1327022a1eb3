//! Streaming GIF assembly and oversized still export
//!
//! Frames are decoded and fed to the encoder one at a time, bounding peak
//! memory to a single frame rather than the whole frame set.

use crate::animation::RenderConfig;
use crate::animation::frames::frame_file_name;
use crate::io::configuration::GIF_ENCODER_SPEED;
use crate::io::error::{PipelineError, Result};
use crate::jitter::render_variant;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use rand::Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Stream a persisted frame set into a looping animation at `out_path`
///
/// Frames are read in ascending index order over the known count, so
/// playback order never depends on directory listing order. The encoder
/// is configured for an infinite loop with a constant inter-frame delay.
///
/// # Errors
///
/// Returns an error if the output file cannot be created, a frame cannot
/// be read back, or encoding fails; the first stream error terminates the
/// assembly
pub fn assemble_animation(
    frame_dir: &Path,
    frame_count: u32,
    frame_delay_ms: u32,
    out_path: &Path,
) -> Result<()> {
    let file = File::create(out_path).map_err(|e| PipelineError::FileSystem {
        path: out_path.to_path_buf(),
        operation: "create animation file",
        source: e,
    })?;

    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), GIF_ENCODER_SPEED);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| PipelineError::Encode {
            path: out_path.to_path_buf(),
            source: e,
        })?;

    for index in 0..frame_count {
        let frame_path = frame_dir.join(frame_file_name(index));
        let image = image::open(&frame_path)
            .map_err(|e| PipelineError::ImageLoad {
                path: frame_path,
                source: e,
            })?
            .into_rgba8();

        let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(frame_delay_ms, 1));
        encoder
            .encode_frame(frame)
            .map_err(|e| PipelineError::Encode {
                path: out_path.to_path_buf(),
                source: e,
            })?;
    }

    Ok(())
}

/// Render a single oversized variant straight to a still-image file
///
/// The still is independent of any frame set and uses the configuration's
/// still upscale factor.
///
/// # Errors
///
/// Returns an error if the still cannot be encoded or written
pub fn export_still<R: Rng + ?Sized>(
    rng: &mut R,
    source: &RgbaImage,
    config: &RenderConfig,
    out_path: &Path,
) -> Result<()> {
    let still = render_variant(
        rng,
        source,
        config.still_scale,
        config.threshold,
        config.ignore_color,
    );

    still.save(out_path).map_err(|e| PipelineError::ImageExport {
        path: out_path.to_path_buf(),
        source: e,
    })
}
