use crate::shared::result::AppResult;

use super::{
    raster::Raster,
    regions::{validate_table, Region, VariantRegions, HEAD_VARIANTS, VARIANT_COUNT},
};

pub type OutputSet = [Raster; VARIANT_COUNT];

pub fn remap(source: &Raster) -> OutputSet {
    render(source, &HEAD_VARIANTS)
}

pub fn remap_with(source: &Raster, table: &[VariantRegions; VARIANT_COUNT]) -> AppResult<OutputSet> {
    validate_table(table)?;
    Ok(render(source, table))
}

fn render(source: &Raster, table: &[VariantRegions; VARIANT_COUNT]) -> OutputSet {
    std::array::from_fn(|variant| {
        let mut output = Raster::blank();
        for region in &table[variant] {
            blit(source, &mut output, region);
        }
        output
    })
}

fn blit(source: &Raster, output: &mut Raster, region: &Region) {
    for y in 0..region.height {
        let src_y = if region.mirrored {
            region.height - 1 - y
        } else {
            y
        };
        for x in 0..region.width {
            let pixel = source.pixel(region.src_x + x, region.src_y + src_y);
            output.put_pixel(region.dest_x + x, region.dest_y + y, pixel);
        }
    }
}
