//! Batch and per-job progress display for concurrent jobs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a concurrent batch
///
/// One batch-level bar tracks completed jobs; each in-flight job adds a
/// frame-level bar while it renders. Bars are driven from the worker pool,
/// so every method takes a shared reference.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: ProgressBar,
}

impl ProgressManager {
    /// Create a manager tracking `job_count` jobs
    pub fn new(job_count: usize) -> Self {
        let multi_progress = MultiProgress::new();
        let batch_bar = multi_progress.add(ProgressBar::new(job_count as u64));
        batch_bar.set_style(BATCH_STYLE.clone());

        Self {
            multi_progress,
            batch_bar,
        }
    }

    /// Add a frame-level bar for a job that is starting
    pub fn start_job(&self, name: &str, frame_count: u32) -> ProgressBar {
        let bar = self
            .multi_progress
            .add(ProgressBar::new(u64::from(frame_count)));
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(name.to_owned());
        bar
    }

    /// Retire a job's frame bar and advance the batch bar
    ///
    /// Jobs that failed before rendering any frame pass `None`; the batch
    /// bar still advances so the processed count stays accurate.
    pub fn finish_job(&self, bar: Option<ProgressBar>) {
        if let Some(bar) = bar {
            bar.finish_and_clear();
            self.multi_progress.remove(&bar);
        }
        self.batch_bar.inc(1);
    }

    /// Print a message above the bars without tearing them
    pub fn println(&self, message: &str) {
        let _ = self.multi_progress.println(message);
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.batch_bar.finish_with_message("All images processed");
        let _ = self.multi_progress.clear();
    }
}
