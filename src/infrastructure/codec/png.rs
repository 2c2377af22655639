use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};

use crate::{
    domain::skin::raster::{Raster, SKIN_SIZE},
    shared::result::AppResult,
};

pub fn encode_png(raster: &Raster) -> AppResult<Vec<u8>> {
    let mut output = Vec::<u8>::new();
    let encoder = PngEncoder::new(&mut output);
    encoder
        .write_image(raster.as_image(), SKIN_SIZE, SKIN_SIZE, ColorType::Rgba8.into())
        .map_err(|err| format!("No se pudo codificar PNG: {err}"))?;

    Ok(output)
}
