//! Entry points: file, directory and package normalization.
//!
//! The free functions use the default configuration; build a [`Normalizer`]
//! to apply a loaded [`goast_core::GoastConfig`].

pub mod normalizer;

use std::collections::BTreeMap;
use std::path::Path;

use goast_core::errors::{GoastError, ParseError};

use crate::gast::UniformNode;

pub use normalizer::Normalizer;

/// Parse one Go file into a uniform tree rooted at its `File` node.
pub fn parse_file(path: impl AsRef<Path>) -> Result<UniformNode, ParseError> {
    Normalizer::new().parse_file(path.as_ref())
}

/// Parse the files of `dir` ending in `suffix`, one tree per package name.
pub fn parse_directory(
    dir: impl AsRef<Path>,
    suffix: &str,
) -> Result<BTreeMap<String, UniformNode>, GoastError> {
    Normalizer::new().parse_directory(dir.as_ref(), suffix)
}

/// Parse the package `name` from `dir`.
pub fn parse_package(
    dir: impl AsRef<Path>,
    suffix: &str,
    name: &str,
) -> Result<UniformNode, GoastError> {
    Normalizer::new().parse_package(dir.as_ref(), suffix, name)
}
