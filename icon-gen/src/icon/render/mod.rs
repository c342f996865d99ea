use image::imageops::FilterType;
use image::DynamicImage;

/// Resamples the source to a `size` x `size` square.
///
/// The aspect ratio is not preserved, a rectangular source is stretched. The
/// color type of the source is kept. Sizes are validated by the caller.
pub fn render_square(source: &DynamicImage, size: u32, filter: FilterType) -> DynamicImage {
    source.resize_exact(size, size, filter)
}
