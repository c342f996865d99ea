use image::imageops::FilterType;
use std::path::PathBuf;

/// The master image every icon is derived from, relative to the working directory.
pub const SOURCE_PATH: &str = "master.png";

/// The directory the icons are written into, relative to the working directory.
pub const OUTPUT_DIR: &str = "icons";

/// The square edge lengths to generate, in generation order.
pub const ICON_SIZES: [u32; 5] = [16, 32, 48, 96, 128];

/// Bicubic resampling.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Returns the file name of the icon with the given edge length.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// The path to the source image
    pub source: PathBuf,

    /// The directory the icons are written into
    pub output_dir: PathBuf,

    /// The sizes to generate, in order
    pub sizes: Vec<u32>,

    /// The filter used to resample the source
    pub filter: FilterType,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: ICON_SIZES.to_vec(),
            filter: RESIZE_FILTER,
        }
    }
}
