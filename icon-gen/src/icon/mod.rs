pub mod config;
mod gen;
pub(crate) mod render;
mod source;
mod targets;

pub use crate::icon::config::GeneratorConfig;
pub use crate::icon::gen::{GeneratedIcon, GeneratedIcons};
pub use crate::icon::source::SourceImage;

use crate::icon::config::icon_file_name;
use crate::icon::gen::OutputGenerator;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates every configured icon, writing one confirmation line per icon
    /// to `report`.
    ///
    /// The source is loaded before the output directory is touched, so a run
    /// that fails to load never leaves an empty directory behind. The first
    /// error aborts the run; icons written before it stay on disk.
    pub fn run(&self, report: &mut impl Write) -> Result<GeneratedIcons, IconGeneratorError> {
        self.validate()?;

        tracing::info!(
            "Generating {} icons from {}...",
            self.config.sizes.len(),
            self.config.source.display()
        );

        let source = SourceImage::load(&self.config.source)?;

        let mut outputs = OutputGenerator::new(&self.config.output_dir);
        outputs.ensure_output_dir()?;

        for &size in &self.config.sizes {
            targets::process_png_target(&source, size, self.config.filter, &mut outputs)?;
            writeln!(report, "Created {}", icon_file_name(size))?;
        }

        let icons = outputs.finalize();
        tracing::info!(
            "Generated {} icons in {}",
            icons.len(),
            self.config.output_dir.display()
        );

        Ok(icons)
    }

    fn validate(&self) -> Result<(), IconGeneratorError> {
        match self.config.sizes.iter().find(|&&size| size == 0) {
            Some(&size) => Err(IconGeneratorError::InvalidSize(size)),
            None => Ok(()),
        }
    }
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[derive(Error, Debug)]
pub enum IconGeneratorError {
    #[error("failed to load source image {}: {source}", path.display())]
    SourceLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write icon {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("the icon of size {0} was not found in the generated outputs")]
    OutputNotFound(u32),

    #[error("failed to report generated icon: {0}")]
    Report(#[from] std::io::Error),
}
