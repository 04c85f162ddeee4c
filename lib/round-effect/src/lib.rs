pub mod corner_effect;
pub mod fs;
pub mod mask;

use image::RgbaImage;

pub type RoundEffectResult<T> = Result<T, RoundEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum RoundEffectError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Decode error: {0}")]
    Decode(image::ImageError),
    #[error("Encode error: {0}")]
    Encode(image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> RoundEffectResult<()>;
}
