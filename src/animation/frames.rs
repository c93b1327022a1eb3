//! Independent variant frame generation persisted as zero-padded files

use crate::animation::RenderConfig;
use crate::io::configuration::FRAME_INDEX_WIDTH;
use crate::io::error::{PipelineError, Result};
use crate::jitter::render_variant;
use image::RgbaImage;
use indicatif::ProgressBar;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::path::Path;

/// File name for the frame at `index`
///
/// Indices are zero-padded so the assembler's lexicographic read order
/// equals numeric playback order.
pub fn frame_file_name(index: u32) -> String {
    format!("{index:0width$}.png", width = FRAME_INDEX_WIDTH)
}

/// Render and persist `config.frame_count` independent variants of `source`
///
/// The target directory is created if missing; creation is idempotent.
/// Frames share no state and have no ordering dependency, so they render
/// in parallel on the global worker pool.
///
/// # Errors
///
/// Returns an error if the frame directory cannot be created or any
/// single frame cannot be encoded and written; one frame failure fails
/// the whole batch rather than succeeding partially
pub fn write_frame_set(
    source: &RgbaImage,
    config: &RenderConfig,
    dir: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| PipelineError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create frame directory",
        source: e,
    })?;

    (0..config.frame_count).into_par_iter().try_for_each(|index| {
        let variant = render_variant(
            &mut rand::rng(),
            source,
            config.frame_scale,
            config.threshold,
            config.ignore_color,
        );

        let path = dir.join(frame_file_name(index));
        variant
            .save(&path)
            .map_err(|e| PipelineError::ImageExport { path, source: e })?;

        if let Some(bar) = progress {
            bar.inc(1);
        }
        Ok(())
    })
}
