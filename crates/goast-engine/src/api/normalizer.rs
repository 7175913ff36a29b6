//! Normalizer: configured entry points from files and directories to
//! uniform trees.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use goast_core::config::CliOverrides;
use goast_core::errors::{ConfigError, GoastError, PackageError, ParseError};
use goast_core::GoastConfig;
use rayon::prelude::*;

use crate::ast::{File, Node, Package, Span};
use crate::gast::{normalize, BuildOptions, UniformNode};
use crate::parsers::{FileSet, GoParser};
use crate::scanner::{list_sources, SourceFile};

/// Parses Go sources and normalizes them into [`UniformNode`] trees.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: GoastConfig,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GoastConfig) -> Self {
        Self { config }
    }

    /// Resolve configuration for the project at `root` (see
    /// [`GoastConfig::load`]).
    pub fn load(root: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Ok(Self::with_config(GoastConfig::load(root, cli)?))
    }

    pub fn config(&self) -> &GoastConfig {
        &self.config
    }

    fn parser(&self) -> GoParser {
        GoParser::with_max_nesting(self.config.tree.effective_max_nesting())
    }

    fn build_options(&self) -> BuildOptions {
        BuildOptions::from(&self.config.tree)
    }

    /// Normalize in-memory source. `path` only names the file in errors.
    pub fn parse_source(&self, source: &[u8], path: &Path) -> Result<UniformNode, ParseError> {
        let file = self.parser().parse(source, path, FileSet::new().base())?;
        Ok(normalize(Node::File(&file), self.build_options()))
    }

    /// Parse and normalize one file. The root is a `File` node.
    pub fn parse_file(&self, path: &Path) -> Result<UniformNode, ParseError> {
        let source = std::fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = self.parse_source(&source, path)?;
        tracing::debug!(path = %path.display(), nodes = tree.size(), "normalized file");
        Ok(tree)
    }

    /// Parse every file in `dir` whose name ends with `suffix` and group them
    /// by package name. Each tree is rooted at a `Package` node whose children
    /// are its files in file-name order.
    pub fn parse_directory(
        &self,
        dir: &Path,
        suffix: &str,
    ) -> Result<BTreeMap<String, UniformNode>, GoastError> {
        let start = Instant::now();

        let sources = list_sources(dir, suffix, self.config.scan.effective_max_file_size())?;
        if sources.is_empty() {
            return Err(PackageError::NoPackagesFound {
                dir: dir.to_path_buf(),
            }
            .into());
        }

        let files = self.parse_sources(&sources)?;

        let mut grouped: BTreeMap<String, Vec<File>> = BTreeMap::new();
        for file in files {
            grouped.entry(file.name.name.clone()).or_default().push(file);
        }

        let options = self.build_options();
        let packages: BTreeMap<String, UniformNode> = grouped
            .into_iter()
            .map(|(name, files)| {
                let package = assemble_package(name.clone(), files);
                let tree = normalize(Node::Package(&package), options);
                tracing::debug!(package = %name, files = package.files.len(), nodes = tree.size(), "normalized package");
                (name, tree)
            })
            .collect();

        tracing::info!(
            dir = %dir.display(),
            files = sources.len(),
            packages = packages.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "parsed directory"
        );
        Ok(packages)
    }

    /// [`parse_directory`](Self::parse_directory), then pick `name`.
    pub fn parse_package(
        &self,
        dir: &Path,
        suffix: &str,
        name: &str,
    ) -> Result<UniformNode, GoastError> {
        let mut packages = self.parse_directory(dir, suffix)?;
        packages.remove(name).ok_or_else(|| {
            PackageError::PackageNotFound {
                name: name.to_string(),
                dir: dir.to_path_buf(),
            }
            .into()
        })
    }

    /// Lower every source with its own disjoint base. Bases are assigned in
    /// file order up front, so parallel and sequential runs agree; the first
    /// failure in file order wins.
    fn parse_sources(&self, sources: &[SourceFile]) -> Result<Vec<File>, ParseError> {
        let mut file_set = FileSet::new();
        let bases: Vec<u32> = sources.iter().map(|s| file_set.add_file(s.size())).collect();

        let parser = self.parser();
        let parse_one = |(source, base): (&SourceFile, &u32)| {
            parser.parse(&source.contents, &source.path, *base)
        };

        let results: Vec<Result<File, ParseError>> = if self.config.scan.effective_parallel() {
            sources.par_iter().zip(bases.par_iter()).map(parse_one).collect()
        } else {
            sources.iter().zip(bases.iter()).map(parse_one).collect()
        };
        results.into_iter().collect()
    }
}

fn assemble_package(name: String, files: Vec<File>) -> Package {
    let span = match (files.first(), files.last()) {
        (Some(first), Some(last)) => Span::cover(first.span, last.span),
        _ => Span::default(),
    };
    Package { span, name, files }
}
