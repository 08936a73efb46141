//! Android launcher icons and splash screens

use super::{FileNaming, Job, VariantSpec};
use crate::layout::SourceKind;
use crate::transform::Transform;

/// Launcher icon per density tier
pub const ICON_SIZES: &[VariantSpec] = &[
    VariantSpec::square("ldpi", 36),
    VariantSpec::square("mdpi", 48),
    VariantSpec::square("hdpi", 72),
    VariantSpec::square("xhdpi", 96),
    VariantSpec::square("xxhdpi", 144),
    VariantSpec::square("xxxhdpi", 192),
];

/// Splash screen per orientation and density tier
pub const SPLASH_SIZES: &[VariantSpec] = &[
    VariantSpec::new("land-hdpi", 800, 480),
    VariantSpec::new("land-ldpi", 320, 200),
    VariantSpec::new("land-mdpi", 480, 320),
    VariantSpec::new("land-xhdpi", 1280, 720),
    VariantSpec::new("land-xxhdpi", 1600, 960),
    VariantSpec::new("land-xxxhdpi", 1920, 1280),
    VariantSpec::new("port-hdpi", 480, 800),
    VariantSpec::new("port-ldpi", 200, 320),
    VariantSpec::new("port-mdpi", 320, 480),
    VariantSpec::new("port-xhdpi", 720, 1280),
    VariantSpec::new("port-xxhdpi", 960, 1600),
    VariantSpec::new("port-xxxhdpi", 1280, 1920),
];

pub const ICONS: Job = Job {
    name: "Android icons",
    source: SourceKind::Icon,
    transform: Transform::Resize,
    output_dir: &["android", "icon"],
    naming: FileNaming::Wrapped {
        prefix: "drawable-",
        suffix: "-icon.png",
    },
    variants: ICON_SIZES,
};

pub const SPLASHES: Job = Job {
    name: "Android splash screens",
    source: SourceKind::Splash,
    transform: Transform::FillCrop,
    output_dir: &["android", "splash"],
    naming: FileNaming::Wrapped {
        prefix: "drawable-",
        suffix: "-screen.png",
    },
    variants: SPLASH_SIZES,
};
