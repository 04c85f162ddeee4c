/// Rounded corners example
/// Builds a gradient test image and applies the rounded-corner alpha mask

use image::{Rgba, RgbaImage};
use round_effect::corner_effect::RoundedCornersConfig;
use round_effect::Effect;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Create a 400x300 test image with colorful gradients
    let mut img = RgbaImage::new(400, 300);
    for y in 0..300 {
        for x in 0..400 {
            let r = (x * 255 / 400) as u8;
            let g = (y * 255 / 300) as u8;
            let b = ((x + y) * 255 / 700) as u8;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
    img.save(output_dir.join("original.png"))?;

    let effect = RoundedCornersConfig::for_image(&img);
    effect.apply(&mut img)?;

    img.save(output_dir.join("rounded.png"))?;
    println!("✓ Generated rounded.png");
    println!("  Images saved to: tmp/");

    Ok(())
}
