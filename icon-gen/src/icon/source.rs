use crate::icon::IconGeneratorError;
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

/// The decoded master image, read by every resize.
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    /// Opens and decodes the image at the given path.
    ///
    /// The format is guessed from the file content, so a master image with a
    /// misleading extension still loads.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IconGeneratorError> {
        let path = path.as_ref();
        let source_error = |source: ImageError| IconGeneratorError::SourceLoad {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| source_error(ImageError::IoError(err)))?;

        // Masters of any size are accepted
        reader.no_limits();
        let image = reader.decode().map_err(source_error)?;

        tracing::debug!(
            "Loaded source image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self { image })
    }

    /// Retrieves the decoded image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Retrieves the width and height of the decoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

impl From<DynamicImage> for SourceImage {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}
