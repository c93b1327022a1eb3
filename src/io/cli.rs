//! Command-line interface and best-effort batch orchestration

use crate::animation::RenderConfig;
use crate::animation::encoder::{assemble_animation, export_still};
use crate::animation::frames::write_frame_set;
use crate::io::configuration::{
    ANIMATION_EXTENSION, FRAMES_PER_LOOP, IMAGE_EXTENSIONS, MILLIS_PER_LOOP, STILL_SUFFIX,
};
use crate::io::error::{PipelineError, Result, invalid_parameter};
use crate::io::manifest::{ManifestEntry, write_manifest};
use crate::io::progress::ProgressManager;
use clap::Parser;
use image::RgbaImage;
use indicatif::ProgressBar;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixeljitter")]
#[command(
    author,
    version,
    about = "Render noisy looping animations from pixel art"
)]
/// Command-line arguments for the batch animation generator
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output directory for animations, stills, and the gallery manifest
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Number of variant frames rendered per animation loop
    #[arg(short, long, default_value_t = FRAMES_PER_LOOP)]
    pub frames: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep per-image frame directories after encoding
    #[arg(short, long)]
    pub keep_frames: bool,

    /// Process images even if their animation already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if images with an existing animation should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome counts for one best-effort batch pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Jobs that produced an animation and a manifest entry
    pub completed: usize,
    /// Jobs that failed and were reported
    pub failed: usize,
}

/// Orchestrates a best-effort pass over all eligible source images
///
/// Jobs fan out across the worker pool and are joined with individual
/// results: a single job's failure is reported but never aborts sibling
/// jobs or the final manifest for the jobs that did succeed.
pub struct BatchProcessor {
    cli: Cli,
    config: RenderConfig,
}

impl BatchProcessor {
    /// Create a processor, deriving the render configuration from the
    /// CLI overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the derived configuration is invalid
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &cli.frames,
                &"must be at least 1",
            ));
        }

        let config = RenderConfig {
            frame_count: cli.frames,
            frame_delay_ms: MILLIS_PER_LOOP / cli.frames,
            ..RenderConfig::default()
        };
        config.validate()?;

        Ok(Self { cli, config })
    }

    /// Process all eligible images under the CLI target
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or the output root or
    /// manifest cannot be written; individual job failures are reported
    /// and counted in the summary instead
    pub fn process(&self) -> Result<BatchSummary> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(BatchSummary::default());
        }

        std::fs::create_dir_all(&self.cli.output).map_err(|e| PipelineError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create output directory",
            source: e,
        })?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(files.len()));

        let results: Vec<(&PathBuf, Result<ManifestEntry>)> = files
            .par_iter()
            .map(|path| (path, self.process_job(path, progress.as_ref())))
            .collect();

        let mut entries = Vec::new();
        let mut failed = 0;
        for (path, result) in results {
            match result {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    failed += 1;
                    report_job_failure(progress.as_ref(), path, &error);
                }
            }
        }

        write_manifest(&entries, &self.cli.output)?;

        if let Some(pm) = progress {
            pm.finish();
        }

        Ok(BatchSummary {
            completed: entries.len(),
            failed,
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if !has_image_extension(&self.cli.target) {
                return Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"must be a recognized image file",
                ));
            }
            let file = self
                .should_process_file(&self.cli.target)
                .then(|| self.cli.target.clone());
            return Ok(file.into_iter().collect());
        }

        if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.is_file() && has_image_extension(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            return Ok(files);
        }

        Err(invalid_parameter(
            "target",
            &self.cli.target.display(),
            &"must be an image file or a directory",
        ))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if self.animation_path(&job_stem(input_path)).exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (animation exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_job(&self, input: &Path, progress: Option<&ProgressManager>) -> Result<ManifestEntry> {
        let stem = job_stem(input);
        let job_bar = progress.map(|pm| pm.start_job(&stem, self.config.frame_count));

        let result = self.run_job(input, &stem, job_bar.as_ref());

        if let Some(pm) = progress {
            pm.finish_job(job_bar);
        }

        result.map(|()| ManifestEntry::from_stem(&stem))
    }

    fn run_job(&self, input: &Path, stem: &str, job_bar: Option<&ProgressBar>) -> Result<()> {
        let source = load_source(input)?;
        self.config.validate_source(&source)?;

        let frame_dir = self.cli.output.join(stem);
        write_frame_set(&source, &self.config, &frame_dir, job_bar)?;
        assemble_animation(
            &frame_dir,
            self.config.frame_count,
            self.config.frame_delay_ms,
            &self.animation_path(stem),
        )?;
        export_still(&mut rand::rng(), &source, &self.config, &self.still_path(stem))?;

        if !self.cli.keep_frames {
            std::fs::remove_dir_all(&frame_dir).map_err(|e| PipelineError::FileSystem {
                path: frame_dir,
                operation: "remove frame directory",
                source: e,
            })?;
        }

        Ok(())
    }

    fn animation_path(&self, stem: &str) -> PathBuf {
        self.cli.output.join(format!("{stem}.{ANIMATION_EXTENSION}"))
    }

    fn still_path(&self, stem: &str) -> PathBuf {
        self.cli.output.join(format!("{stem}{STILL_SUFFIX}.png"))
    }
}

// Allow print for operator-visible failure reports when bars are disabled
#[allow(clippy::print_stderr)]
fn report_job_failure(progress: Option<&ProgressManager>, path: &Path, error: &PipelineError) {
    let message = format!("Failed {}: {error}", path.display());
    progress.map_or_else(|| eprintln!("{message}"), |pm| pm.println(&message));
}

/// Job name derived from the source file stem
fn job_stem(input: &Path) -> String {
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}

fn load_source(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| PipelineError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(image.into_rgba8())
}
