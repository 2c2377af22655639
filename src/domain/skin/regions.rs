use super::raster::SKIN_SIZE;

pub const REGION_SIZE: u32 = 8;
pub const VARIANT_COUNT: usize = 4;
pub const REGIONS_PER_VARIANT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub src_x: u32,
    pub src_y: u32,
    pub dest_x: u32,
    pub dest_y: u32,
    pub width: u32,
    pub height: u32,
    pub mirrored: bool,
}

impl Region {
    const fn copy(src_x: u32, src_y: u32, dest_x: u32, dest_y: u32) -> Self {
        Self {
            src_x,
            src_y,
            dest_x,
            dest_y,
            width: REGION_SIZE,
            height: REGION_SIZE,
            mirrored: false,
        }
    }

    const fn underside(src_x: u32, src_y: u32, dest_x: u32, dest_y: u32) -> Self {
        Self {
            mirrored: true,
            ..Self::copy(src_x, src_y, dest_x, dest_y)
        }
    }

    pub fn contains_dest(&self, x: u32, y: u32) -> bool {
        (self.dest_x..self.dest_x + self.width).contains(&x)
            && (self.dest_y..self.dest_y + self.height).contains(&y)
    }

    pub fn dest_overlaps(&self, other: &Region) -> bool {
        self.dest_x < other.dest_x + other.width
            && other.dest_x < self.dest_x + self.width
            && self.dest_y < other.dest_y + other.height
            && other.dest_y < self.dest_y + self.height
    }

    pub fn fits_within(&self, size: u32) -> bool {
        self.src_x + self.width <= size
            && self.src_y + self.height <= size
            && self.dest_x + self.width <= size
            && self.dest_y + self.height <= size
    }
}

pub type VariantRegions = [Region; REGIONS_PER_VARIANT];

// Destination order: top, bottom (underside, mirrored), right, front, left, back.
pub const HEAD_VARIANTS: [VariantRegions; VARIANT_COUNT] = [
    [
        Region::copy(16, 8, 8, 0),
        Region::underside(24, 40, 16, 0),
        Region::copy(8, 16, 0, 8),
        Region::copy(16, 16, 8, 8),
        Region::copy(40, 24, 16, 8),
        Region::copy(48, 24, 24, 8),
    ],
    [
        Region::copy(24, 8, 8, 0),
        Region::underside(16, 40, 16, 0),
        Region::copy(0, 24, 0, 8),
        Region::copy(24, 16, 8, 8),
        Region::copy(32, 16, 16, 8),
        Region::copy(56, 24, 24, 8),
    ],
    [
        Region::copy(24, 0, 8, 0),
        Region::underside(16, 32, 16, 0),
        Region::copy(8, 24, 0, 8),
        Region::copy(16, 24, 8, 8),
        Region::copy(40, 16, 16, 8),
        Region::copy(48, 16, 24, 8),
    ],
    [
        Region::copy(16, 0, 8, 0),
        Region::underside(24, 32, 16, 0),
        Region::copy(0, 16, 0, 8),
        Region::copy(24, 24, 8, 8),
        Region::copy(32, 24, 16, 8),
        Region::copy(56, 16, 24, 8),
    ],
];

pub fn validate_table(table: &[VariantRegions; VARIANT_COUNT]) -> Result<(), String> {
    for (variant, regions) in table.iter().enumerate() {
        for (index, region) in regions.iter().enumerate() {
            if !region.fits_within(SKIN_SIZE) {
                return Err(format!("variant {variant} region {index} leaves the 64x64 texture"));
            }
            if let Some(other) = regions[index + 1..].iter().position(|other| region.dest_overlaps(other)) {
                return Err(format!(
                    "variant {variant} regions {index} and {} overlap in the destination",
                    index + 1 + other
                ));
            }
        }
    }
    Ok(())
}
