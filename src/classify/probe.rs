//! Header-only image dimension probing.

use std::path::Path;

use image::ImageReader;

use crate::classify::category::Dimensions;
use crate::error::SortError;

/// Read the pixel dimensions of an image without decoding its pixel data.
///
/// Only the format header is parsed; the file handle is dropped before
/// returning on every path, including decode failure. Files that cannot be
/// opened or recognized as a supported format, and files reporting a zero
/// dimension, yield [`SortError::UnreadableImage`].
pub fn probe_dimensions(path: &Path) -> Result<Dimensions, SortError> {
    let reader = ImageReader::open(path).map_err(|e| SortError::unreadable(path, e))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| SortError::unreadable(path, e))?;

    if width == 0 || height == 0 {
        return Err(SortError::unreadable(
            path,
            format!("image reports degenerate dimensions {}x{}", width, height),
        ));
    }

    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::fs;

    #[test]
    fn test_probe_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.png");
        RgbImage::new(64, 48).save(&path).unwrap();

        let dims = probe_dimensions(&path).unwrap();
        assert_eq!(dims, Dimensions::new(64, 48));
    }

    #[test]
    fn test_probe_jpeg_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.jpg");
        RgbImage::new(120, 80).save(&path).unwrap();

        let dims = probe_dimensions(&path).unwrap();
        assert_eq!(dims, Dimensions::new(120, 80));
    }

    #[test]
    fn test_probe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = probe_dimensions(&path).unwrap_err();
        assert!(matches!(err, SortError::UnreadableImage { .. }));
    }

    #[test]
    fn test_probe_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        fs::write(&path, b"this is not an image").unwrap();

        let err = probe_dimensions(&path).unwrap_err();
        assert!(matches!(err, SortError::UnreadableImage { .. }));
    }
}
