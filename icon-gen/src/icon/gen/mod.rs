use crate::icon::config::icon_file_name;
use crate::icon::IconGeneratorError;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct OutputGenerator {
    output_dir: PathBuf,
    outputs: Vec<GeneratedIcon>,
}

impl OutputGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            outputs: Vec::new(),
        }
    }

    /// Creates the output directory unless it already exists.
    ///
    /// A path occupied by something other than a directory counts as missing,
    /// so creating it fails and the error is returned.
    pub fn ensure_output_dir(&self) -> Result<(), IconGeneratorError> {
        if self.output_dir.is_dir() {
            tracing::debug!("Reusing output directory {}", self.output_dir.display());
            return Ok(());
        }

        tracing::debug!("Creating output directory {}", self.output_dir.display());
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            IconGeneratorError::CreateOutputDir {
                path: self.output_dir.clone(),
                source,
            }
        })
    }

    /// Computes the path the icon of the given size is written to
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }

    /// Records an icon that has been written to disk
    pub fn record(&mut self, size: u32, path: PathBuf) {
        self.outputs.push(GeneratedIcon { size, path });
    }

    pub fn finalize(self) -> GeneratedIcons {
        GeneratedIcons {
            icons: self.outputs,
        }
    }
}

/// A single icon written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// The icons written by a run, in generation order.
#[derive(Debug, Clone, Default)]
pub struct GeneratedIcons {
    icons: Vec<GeneratedIcon>,
}

impl GeneratedIcons {
    /// Looks up the path of the icon with the given size.
    ///
    /// If the size was generated more than once the last write wins, matching
    /// what ended up on disk.
    pub fn get_output(&self, size: u32) -> Result<&Path, IconGeneratorError> {
        self.icons
            .iter()
            .rev()
            .find(|icon| icon.size == size)
            .map(|icon| icon.path.as_path())
            .ok_or(IconGeneratorError::OutputNotFound(size))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedIcon> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
