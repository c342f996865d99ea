use crate::icon::gen::OutputGenerator;
use crate::icon::source::SourceImage;
use crate::icon::IconGeneratorError;
use image::imageops::FilterType;
use image::ImageFormat;
use std::path::PathBuf;

pub fn process_png_target(
    source: &SourceImage,
    size: u32,
    filter: FilterType,
    outputs: &mut OutputGenerator,
) -> Result<PathBuf, IconGeneratorError> {
    // Resample the source to the target size
    let icon = crate::icon::render::render_square(source.image(), size, filter);

    // Write the PNG to the output, replacing any previous run's file
    let path = outputs.output_path(size);
    icon.save_with_format(&path, ImageFormat::Png)
        .map_err(|err| IconGeneratorError::Write {
            path: path.clone(),
            source: err,
        })?;

    tracing::debug!("Wrote {}x{} icon to {}", size, size, path.display());
    outputs.record(size, path.clone());

    Ok(path)
}
