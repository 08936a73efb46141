//! iOS app icons and the universal storyboard splash

use super::{FileNaming, Job, VariantSpec};
use crate::layout::SourceKind;
use crate::transform::Transform;

/// App icons, keyed by their output file name
pub const ICON_SIZES: &[VariantSpec] = &[
    VariantSpec::square("icon-1024.png", 1024),
    VariantSpec::square("icon@2x.png", 114),
    VariantSpec::square("icon-40@2x.png", 80),
    VariantSpec::square("icon-40@3x.png", 120),
    VariantSpec::square("icon-40.png", 40),
    VariantSpec::square("icon-50@2x.png", 100),
    VariantSpec::square("icon-50.png", 50),
    VariantSpec::square("icon-60@2x.png", 120),
    VariantSpec::square("icon-60@3x.png", 180),
    VariantSpec::square("icon-60.png", 60),
    VariantSpec::square("icon-72@2x.png", 144),
    VariantSpec::square("icon-72.png", 72),
    VariantSpec::square("icon-76@2x.png", 152),
    VariantSpec::square("icon-76.png", 76),
    VariantSpec::square("icon-83.5@2x.png", 167),
    VariantSpec::square("icon.png", 57),
    VariantSpec::square("icon-small@2x.png", 58),
    VariantSpec::square("icon-small@3x.png", 87),
    VariantSpec::square("icon-small.png", 29),
];

/// Single splash used for every device class and size class
pub const SPLASH_SIZES: &[VariantSpec] =
    &[VariantSpec::square("Default@2x~universal~anyany.png", 2000)];

pub const SPLASH: Job = Job {
    name: "iOS splash screen",
    source: SourceKind::Splash,
    transform: Transform::FillCrop,
    output_dir: &["ios", "splash"],
    naming: FileNaming::AsIs,
    variants: SPLASH_SIZES,
};

pub const ICONS: Job = Job {
    name: "iOS icons",
    source: SourceKind::Icon,
    transform: Transform::Resize,
    output_dir: &["ios", "icon"],
    naming: FileNaming::AsIs,
    variants: ICON_SIZES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_icon_table() {
        assert_eq!(ICON_SIZES.len(), 19);

        let icon_60_3x = ICON_SIZES.iter().find(|v| v.id == "icon-60@3x.png").unwrap();
        assert_eq!((icon_60_3x.width, icon_60_3x.height), (180, 180));
        assert_eq!(
            ICONS.output_path(Path::new("app/resources"), icon_60_3x),
            Path::new("app/resources/ios/icon/icon-60@3x.png")
        );
    }

    #[test]
    fn test_splash_path() {
        assert_eq!(
            SPLASH.output_path(Path::new("app/resources"), &SPLASH_SIZES[0]),
            Path::new("app/resources/ios/splash/Default@2x~universal~anyany.png")
        );
    }
}
