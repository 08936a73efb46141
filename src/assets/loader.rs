//! Source image loading and derived image saving

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader};
use log::{debug, warn};
use std::path::Path;

use crate::error::{GenerateError, Result};
use crate::layout::SourceKind;

/// Load one of the two source images from the resources root
///
/// Existence is checked before decoding so a missing file is reported as
/// `SourceNotFound` rather than as an I/O failure. The format is sniffed
/// from the file contents, not the extension.
pub fn load_source(root: &Path, kind: SourceKind) -> Result<DynamicImage> {
    let path = kind.path(root);

    if !path.is_file() {
        return Err(GenerateError::SourceNotFound { path });
    }

    let reader = ImageReader::open(&path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|source| GenerateError::SourceRead {
            path: path.clone(),
            source,
        })?;

    let image = reader.decode().map_err(|err| match err {
        ImageError::IoError(source) => GenerateError::SourceRead {
            path: path.clone(),
            source,
        },
        source => GenerateError::SourceDecode {
            path: path.clone(),
            source,
        },
    })?;

    let (width, height) = image.dimensions();
    debug!("Loaded {}: {}x{}", path.display(), width, height);

    if kind == SourceKind::Icon && width != height {
        warn!(
            "⚠️  {} is {}x{}, icons will be stretched to square",
            path.display(),
            width,
            height
        );
    }

    Ok(image)
}

/// Encode `image` as PNG at `path`; the parent directory must already exist
pub fn save_derived(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| GenerateError::DestinationWrite {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(dir.path(), SourceKind::Icon).unwrap_err();
        match err {
            GenerateError::SourceNotFound { path } => assert_eq!(path, dir.path().join("icon.png")),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_undecodable_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("splash.png"), b"definitely not a png").unwrap();

        let err = load_source(dir.path(), SourceKind::Splash).unwrap_err();
        assert!(
            matches!(err, GenerateError::SourceDecode { .. }),
            "expected SourceDecode, got {:?}",
            err
        );
    }

    #[test]
    fn test_format_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([0, 0, 255])))
            .save_with_format(dir.path().join("splash.png"), ImageFormat::Jpeg)
            .unwrap();

        let loaded = load_source(dir.path(), SourceKind::Splash).unwrap();
        assert_eq!(loaded.dimensions(), (40, 30));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_source() {
        use std::fs::{self, Permissions};
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        DynamicImage::ImageRgba8(RgbaImage::new(4, 4)).save(&path).unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o000)).unwrap();

        // Permission bits don't apply to root
        if fs::File::open(&path).is_ok() {
            return;
        }

        let err = load_source(dir.path(), SourceKind::Icon).unwrap_err();
        match err {
            GenerateError::SourceRead { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected SourceRead, got {:?}", other),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(7, 5, Rgba([1, 2, 3, 255])));

        save_derived(&image, &dir.path().join("icon.png")).unwrap();

        let loaded = load_source(dir.path(), SourceKind::Icon).unwrap();
        assert_eq!(loaded.dimensions(), (7, 5));
        assert_eq!(loaded.get_pixel(3, 2), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let target = dir.path().join("missing").join("out.png");

        let err = save_derived(&image, &target).unwrap_err();
        match err {
            GenerateError::DestinationWrite { path, .. } => assert_eq!(path, target),
            other => panic!("expected DestinationWrite, got {:?}", other),
        }
    }
}
