//! Platform asset generation
//!
//! Four independent jobs, run in order:
//! - Android launcher icons (resize)
//! - Android splash screens (fill-crop)
//! - iOS splash screen (fill-crop)
//! - iOS app icons (resize)
//!
//! Each job decodes its source image once and writes one PNG per entry of
//! its static variant table. A failure stops the run; files already
//! written are kept.

pub mod android;
pub mod ios;
pub mod loader;

use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, Result};
use crate::layout::{self, SourceKind};
use crate::transform::Transform;

/// One output image: identifier substituted into the job's file name, plus
/// exact pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub id: &'static str,
    pub width: u32,
    pub height: u32,
}

impl VariantSpec {
    pub const fn new(id: &'static str, width: u32, height: u32) -> Self {
        VariantSpec { id, width, height }
    }

    pub const fn square(id: &'static str, size: u32) -> Self {
        Self::new(id, size, size)
    }
}

/// How a variant identifier becomes a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// `<prefix><id><suffix>`
    Wrapped {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// The identifier already is the file name
    AsIs,
}

impl FileNaming {
    fn file_name(self, id: &str) -> String {
        match self {
            FileNaming::Wrapped { prefix, suffix } => format!("{}{}{}", prefix, id, suffix),
            FileNaming::AsIs => id.to_string(),
        }
    }
}

/// A table-driven generation pass over one source image
#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub name: &'static str,
    pub source: SourceKind,
    pub transform: Transform,
    /// Output directory, relative to the resources root
    pub output_dir: &'static [&'static str],
    pub naming: FileNaming,
    pub variants: &'static [VariantSpec],
}

/// Every job, in the order `generate_all` runs them
pub const JOBS: [Job; 4] = [android::ICONS, android::SPLASHES, ios::SPLASH, ios::ICONS];

impl Job {
    pub fn output_path(&self, root: &Path, variant: &VariantSpec) -> PathBuf {
        layout::nested(root, self.output_dir).join(self.naming.file_name(variant.id))
    }

    /// Generate every variant of this job under `root`
    ///
    /// Writes one `Generating <path>` line to `out` before each file and
    /// returns the written paths in table order.
    pub fn run(&self, root: &Path, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        let source = loader::load_source(root, self.source)?;

        let mut written = Vec::with_capacity(self.variants.len());
        for variant in self.variants {
            let path = self.output_path(root, variant);
            debug!(
                "{:?} {} -> {}x{}",
                self.transform, variant.id, variant.width, variant.height
            );

            let derived = self.transform.apply(&source, variant.width, variant.height);
            writeln!(out, "Generating {}", path.display()).map_err(GenerateError::Progress)?;
            loader::save_derived(&derived, &path)?;

            written.push(path);
        }

        info!("{}: {} files", self.name, written.len());
        Ok(written)
    }
}

/// Run all four jobs against the resources root, stopping at the first error
pub fn generate_all(root: &Path, out: &mut impl Write) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for job in &JOBS {
        written.extend(job.run(root, &mut *out)?);
    }
    Ok(written)
}
