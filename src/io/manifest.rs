//! Gallery manifest generation by marker substitution in a static template

use crate::io::configuration::{ANIMATION_EXTENSION, MANIFEST_FILE_NAME};
use crate::io::error::{PipelineError, Result};
use std::path::{Path, PathBuf};

/// Static gallery page; the marker line is replaced with generated entries
const GALLERY_TEMPLATE: &str = include_str!("gallery.html");

/// Marker token substituted with the generated entry list
const GALLERY_MARKER: &str = "<!-- jitter:gallery -->";

/// One successfully produced animation, referenced from the gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Human-readable name shown as the caption
    pub name: String,
    /// Animation file name relative to the manifest
    pub animation: String,
}

impl ManifestEntry {
    /// Build the entry for a job identified by its file stem
    pub fn from_stem(stem: &str) -> Self {
        Self {
            name: display_name(stem),
            animation: format!("{stem}.{ANIMATION_EXTENSION}"),
        }
    }
}

/// Human-readable name derived from a file stem
///
/// Separator characters become spaces: `lava-lamp_2` reads "lava lamp 2".
pub fn display_name(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
}

/// Substitute the gallery marker with one figure per entry
pub fn render_manifest(entries: &[ManifestEntry]) -> String {
    let mut listing = String::new();
    for entry in entries {
        listing.push_str(&format!(
            "<figure>\n        <img src=\"{}\" alt=\"{}\">\n        <figcaption>{}</figcaption>\n      </figure>\n      ",
            entry.animation, entry.name, entry.name
        ));
    }

    GALLERY_TEMPLATE.replacen(GALLERY_MARKER, listing.trim_end(), 1)
}

/// Write the rendered manifest under the output root
///
/// # Errors
///
/// Returns an error if the manifest file cannot be written
pub fn write_manifest(entries: &[ManifestEntry], output_root: &Path) -> Result<PathBuf> {
    let path = output_root.join(MANIFEST_FILE_NAME);
    std::fs::write(&path, render_manifest(entries)).map_err(|e| PipelineError::FileSystem {
        path: path.clone(),
        operation: "write manifest",
        source: e,
    })?;

    Ok(path)
}
