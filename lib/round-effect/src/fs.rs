use crate::{RoundEffectError, RoundEffectResult};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Open and decode an image file.
pub fn load(path: &Path) -> RoundEffectResult<DynamicImage> {
    if !path.exists() {
        return Err(RoundEffectError::NotFound(path.display().to_string()));
    }

    let reader = ImageReader::open(path)?;
    let image = reader.decode().map_err(RoundEffectError::Decode)?;
    log::debug!("decoded {} ({:?})", path.display(), image.color());

    Ok(image)
}

/// Encode an image as PNG at `path`, overwriting any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> RoundEffectResult<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(RoundEffectError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("no/such/icon.png")).unwrap_err();
        assert!(matches!(err, RoundEffectError::NotFound(_)));
        assert_eq!(format!("Error: {err}"), "Error: File not found: no/such/icon.png");
    }

    #[test]
    fn test_save_then_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("icon.png");

        let img = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        save_png(&img, &path)?;

        let loaded = load(&path)?.to_rgba8();
        assert_eq!(loaded.dimensions(), (8, 8));
        assert_eq!(loaded.get_pixel(4, 4), img.get_pixel(4, 4));

        Ok(())
    }

    #[test]
    fn test_load_undecodable_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"plain text")?;

        let err = load(&path).unwrap_err();
        assert!(matches!(err, RoundEffectError::Decode(_)));

        Ok(())
    }
}
