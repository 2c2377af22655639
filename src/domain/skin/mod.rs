pub mod raster;
pub mod regions;
pub mod remapper;
