//! Scanner: source file discovery for package directories.
//!
//! A Go package is one directory, so the listing is flat: subdirectories are
//! other packages and are never entered.

use std::path::{Path, PathBuf};

use goast_core::errors::ScanError;
use walkdir::WalkDir;

/// A source file read from a package directory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name only, the sort key.
    pub name: String,
    pub contents: Vec<u8>,
}

impl SourceFile {
    pub fn size(&self) -> usize {
        self.contents.len()
    }
}

/// List the regular files directly inside `dir` whose name ends with
/// `suffix`, sorted by file name, with their contents.
pub fn list_sources(
    dir: &Path,
    suffix: &str,
    max_file_size: u64,
) -> Result<Vec<SourceFile>, ScanError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(suffix) {
            continue;
        }

        let path = entry.path().to_path_buf();
        let size = entry
            .metadata()
            .map_err(|e| walk_error(&path, e))?
            .len();
        if size > max_file_size {
            return Err(ScanError::MaxFileSizeExceeded {
                path,
                size,
                max: max_file_size,
            });
        }

        let contents = std::fs::read(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        files.push(SourceFile {
            path,
            name,
            contents,
        });
    }

    tracing::debug!(dir = %dir.display(), suffix, files = files.len(), "listed sources");
    Ok(files)
}

fn walk_error(fallback: &Path, err: walkdir::Error) -> ScanError {
    let path = err
        .path()
        .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
    ScanError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn test_filters_by_suffix_and_sorts() {
        let dir = dir_with(&[
            ("b.go", "package p"),
            ("a.go", "package p"),
            ("notes.txt", "hello"),
            ("a_test.go", "package p"),
        ]);
        let files = list_sources(dir.path(), ".go", 1024).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.go", "a_test.go", "b.go"]);
        assert_eq!(files[0].contents, b"package p");
    }

    #[test]
    fn test_does_not_descend() {
        let dir = dir_with(&[("a.go", "package p")]);
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.go"), "package q").unwrap();
        let files = list_sources(dir.path(), ".go", 1024).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let dir = dir_with(&[("big.go", "package p // padding")]);
        let err = list_sources(dir.path(), ".go", 4).unwrap_err();
        assert!(matches!(err, ScanError::MaxFileSizeExceeded { max: 4, .. }));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = list_sources(&dir.path().join("nope"), ".go", 1024).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
