//! The two transforms applied to source images
//!
//! Icons are always resized, splashes always cropped; the policy belongs to
//! the job, not to individual variants.

use image::DynamicImage;

use crate::layout::FILTER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Scale to the exact target size, ignoring the source aspect ratio
    Resize,
    /// Scale preserving aspect ratio until the target is covered, then crop
    /// the overflow symmetrically
    FillCrop,
}

impl Transform {
    /// Produce a `width × height` image from `source`
    pub fn apply(self, source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        match self {
            Transform::Resize => source.resize_exact(width, height, FILTER),
            Transform::FillCrop => source.resize_to_fill(width, height, FILTER),
        }
    }
}
