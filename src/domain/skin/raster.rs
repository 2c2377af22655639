use image::{Rgba, RgbaImage};

use crate::{infrastructure::codec::validator::validate_skin_png, shared::result::AppResult};

pub const SKIN_SIZE: u32 = 64;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    pub fn blank() -> Self {
        Self {
            pixels: RgbaImage::from_pixel(SKIN_SIZE, SKIN_SIZE, TRANSPARENT),
        }
    }

    pub fn from_fn(pixel_at: impl FnMut(u32, u32) -> Rgba<u8>) -> Self {
        Self {
            pixels: RgbaImage::from_fn(SKIN_SIZE, SKIN_SIZE, pixel_at),
        }
    }

    pub fn from_rgba(pixels: RgbaImage) -> AppResult<Self> {
        let (width, height) = pixels.dimensions();
        if width != SKIN_SIZE || height != SKIN_SIZE {
            return Err(format!("Dimensiones inválidas {width}x{height}. Usa 64x64"));
        }
        Ok(Self { pixels })
    }

    pub fn from_png_bytes(bytes: &[u8]) -> AppResult<Self> {
        let image = validate_skin_png(bytes)?;
        Self::from_rgba(image.to_rgba8())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgba<u8>) {
        self.pixels.put_pixel(x, y, pixel);
    }

    pub fn is_transparent_at(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == TRANSPARENT
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::{Raster, SKIN_SIZE};
    use image::RgbaImage;

    #[test]
    fn blank_raster_is_fully_transparent() {
        let raster = Raster::blank();
        assert_eq!(raster.as_image().dimensions(), (SKIN_SIZE, SKIN_SIZE));
        assert!((0..SKIN_SIZE).all(|y| (0..SKIN_SIZE).all(|x| raster.is_transparent_at(x, y))));
    }

    #[test]
    fn from_rgba_rejects_wrong_dimensions() {
        let error = Raster::from_rgba(RgbaImage::new(64, 32)).unwrap_err();
        assert!(error.contains("64x32"));
        assert!(Raster::from_rgba(RgbaImage::new(64, 64)).is_ok());
    }
}
