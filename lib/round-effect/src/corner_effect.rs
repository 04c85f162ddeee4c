use crate::{mask, Effect, RoundEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Default corner radius as a fraction of the smaller image dimension
/// (standard squircle-ish look).
pub const DEFAULT_RADIUS_RATIO: f64 = 0.22;

/// Radius policy: floor of `DEFAULT_RADIUS_RATIO` times the smaller dimension.
pub fn default_radius(width: u32, height: u32) -> u32 {
    (width.min(height) as f64 * DEFAULT_RADIUS_RATIO) as u32
}

/// Rounded corners configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct RoundedCornersConfig {
    #[derivative(Default(value = "0"))]
    radius: u32,
}

impl RoundedCornersConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_image(image: &RgbaImage) -> Self {
        Self::new().with_radius(default_radius(image.width(), image.height()))
    }
}

impl Effect for RoundedCornersConfig {
    fn apply(&self, image: &mut RgbaImage) -> RoundEffectResult<()> {
        let mask = mask::rounded_mask(image.width(), image.height(), self.radius);

        for (pixel, mask_pixel) in image.pixels_mut().zip(mask.pixels()) {
            pixel[3] = mask_pixel[0];
        }

        Ok(())
    }
}
