//! Reading source images, with the format sniffed from the file contents.
use std::io::Cursor;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Read `path` and decode it, guessing the format from the file contents.
pub fn read_image(path: &Path) -> Result<RgbaImage> {
    let data = std::fs::read(path)?;
    let decode_err = |source| Error::Decode {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    let image = reader.decode().map_err(decode_err)?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn decodes_by_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        RgbImage::from_pixel(4, 3, Rgb([10, 20, 30])).save(&png).unwrap();
        let disguised = dir.path().join("disguised.jpg");
        std::fs::copy(&png, &disguised).unwrap();

        let image = read_image(&disguised).unwrap();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image at all").unwrap();
        assert!(matches!(read_image(&path), Err(Error::Decode { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        assert!(matches!(read_image(&path), Err(Error::Io(_))));
    }
}
