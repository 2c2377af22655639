use std::{fs, path::{Path, PathBuf}};

use sha2::{Digest, Sha256};

use crate::{
    domain::skin::remapper::OutputSet, infrastructure::codec::png::encode_png,
    shared::result::AppResult,
};

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub fn head_file_name(index: usize) -> String {
    format!("head_{index}.png")
}

pub fn export_heads(dir: &Path, outputs: &OutputSet) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .map_err(|err| format!("No se pudo crear carpeta de exportación {}: {err}", dir.display()))?;

    let mut written = Vec::with_capacity(outputs.len());
    for (index, raster) in outputs.iter().enumerate() {
        let bytes = encode_png(raster)?;
        let path = dir.join(head_file_name(index));

        let unchanged = fs::read(&path)
            .map(|current| sha256_hex(&current) == sha256_hex(&bytes))
            .unwrap_or(false);
        if unchanged {
            log::info!("{} is up to date", path.display());
        } else {
            fs::write(&path, &bytes)
                .map_err(|err| format!("No se pudo guardar {}: {err}", path.display()))?;
            log::info!("exported {}", path.display());
        }
        written.push(path);
    }

    Ok(written)
}
