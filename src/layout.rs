//! Fixed resource layout
//!
//! All paths are compiled in. `main` resolves them against
//! `RESOURCES_DIR` in the working directory; everything else takes the
//! resources root as a parameter.

use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// Resources root, relative to the invocation directory
pub const RESOURCES_DIR: &str = "app/resources";

/// Resampling filter shared by both transforms
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Which of the two source images a job reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Icon,
    Splash,
}

impl SourceKind {
    pub fn file_name(self) -> &'static str {
        match self {
            SourceKind::Icon => "icon.png",
            SourceKind::Splash => "splash.png",
        }
    }

    /// Path of the source image under the resources root
    pub fn path(self, root: &Path) -> PathBuf {
        root.join(self.file_name())
    }
}

/// Join `segments` onto `root` one component at a time
pub fn nested(root: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}
