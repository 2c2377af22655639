use image::{DynamicImage, ImageFormat};

use crate::{domain::skin::raster::SKIN_SIZE, shared::result::AppResult};

const MAX_SKIN_BYTES: usize = 5 * 1024 * 1024;

fn validate_skin_payload_size(bytes: &[u8]) -> AppResult<()> {
    if bytes.is_empty() {
        return Err("La skin está vacía.".to_string());
    }
    if bytes.len() > MAX_SKIN_BYTES {
        return Err("La skin excede el tamaño máximo permitido (5 MB).".to_string());
    }
    Ok(())
}

pub fn validate_skin_png(bytes: &[u8]) -> AppResult<DynamicImage> {
    validate_skin_payload_size(bytes)?;

    let format = image::guess_format(bytes).map_err(|err| format!("No se pudo detectar formato: {err}"))?;
    if format != ImageFormat::Png {
        return Err("El archivo debe ser PNG".into());
    }

    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|err| format!("No se pudo leer PNG: {err}"))?;
    let (width, height) = (image.width(), image.height());
    if width != SKIN_SIZE || height != SKIN_SIZE {
        return Err(format!("Dimensiones inválidas {width}x{height}. Usa 64x64"));
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::validate_skin_png;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_of_size(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn accepts_modern_skin_dimensions() {
        let image = validate_skin_png(&png_of_size(64, 64)).unwrap();
        assert_eq!((image.width(), image.height()), (64, 64));
    }

    #[test]
    fn rejects_legacy_and_odd_dimensions() {
        let legacy = validate_skin_png(&png_of_size(64, 32)).unwrap_err();
        assert!(legacy.contains("64x32"));
        assert!(validate_skin_png(&png_of_size(128, 128)).is_err());
    }

    #[test]
    fn rejects_empty_and_non_png_payloads() {
        assert_eq!(validate_skin_png(&[]).unwrap_err(), "La skin está vacía.");
        assert!(validate_skin_png(b"definitely not an image").is_err());
    }
}
