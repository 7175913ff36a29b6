//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for package directory enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum source file size in bytes. Default: 16 MiB.
    pub max_file_size: Option<u64>,
    /// Parse the files of a directory on the rayon pool. Default: true.
    pub parallel: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 16 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(16 * 1024 * 1024)
    }

    /// Returns whether directory parsing runs in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
