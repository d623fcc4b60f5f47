//! Image decoding

use std::fs;
use std::path::Path;

use image::error::ImageError;
use image::{load_from_memory, DynamicImage};

use crate::error::{Error, Result};

/// Decode the image file at `path`.
///
/// The file handle is scoped to the read; decoding runs on the in-memory
/// bytes. Read failures fold into the decode error the same way the image
/// crate folds them into `ImageError::IoError`.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    let data = fs::read(path).map_err(|e| Error::decode(path, ImageError::IoError(e)))?;
    load_from_memory(&data).map_err(|e| Error::decode(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    #[test]
    fn decodes_a_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        RgbaImage::from_pixel(4, 2, Rgba([12, 34, 56, 255]))
            .save(&path)
            .unwrap();

        let img = decode(&path).unwrap();
        assert_eq!(img.dimensions(), (4, 2));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"not an image").unwrap();

        let err = decode(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = decode(Path::new("no/such/file.png")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
