use anyhow::Result;
use round_effect::corner_effect::{default_radius, RoundedCornersConfig};
use round_effect::{fs, Effect};
use std::path::Path;

const ICON_PATH: &str = "assets/rust-finger.png";

fn main() {
    env_logger::init();

    let path = Path::new(ICON_PATH);
    if let Err(e) = run(path, path) {
        println!("Error: {e}");
    }
}

fn run(input: &Path, output: &Path) -> Result<()> {
    let img = fs::load(input)?;
    let mode = img.color();

    // to_rgba8 adds the alpha channel when the source lacks one
    let mut rgba = img.to_rgba8();
    println!(
        "Original size: {}x{}, mode: {:?}",
        rgba.width(),
        rgba.height(),
        mode
    );

    let radius = default_radius(rgba.width(), rgba.height());
    log::debug!("corner radius: {radius}px");

    RoundedCornersConfig::new().with_radius(radius).apply(&mut rgba)?;

    fs::save_png(&rgba, output)?;
    println!(
        "Processed image saved to {} with rounded corners and transparency.",
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_run_missing_input_reports_error() {
        let input = Path::new("no/such/file.png");
        let err = run(input, input).unwrap_err();
        assert!(format!("Error: {err}").starts_with("Error:"));
    }

    #[test]
    fn test_run_overwrites_in_place() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("icon.png");

        let img = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
        img.save(&path)?;

        run(&path, &path)?;

        let out = image::open(&path)?.to_rgba8();
        assert_eq!(out.dimensions(), (100, 100));
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(50, 50), &Rgba([255, 0, 0, 255]));

        Ok(())
    }
}
