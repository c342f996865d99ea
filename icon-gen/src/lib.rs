//! Generates a fixed set of square PNG icons from a single master image.

pub mod icon;

pub use crate::icon::{
    GeneratedIcon, GeneratedIcons, GeneratorConfig, IconGenerator, IconGeneratorError,
};
