//! Uniform tree construction configuration.

use serde::{Deserialize, Serialize};

/// Syntax-tree depth accepted by the parser when unset.
pub const DEFAULT_MAX_NESTING: u32 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Keep comment groups in the uniform tree. Default: true.
    pub include_comments: Option<bool>,
    /// Deepest syntax-tree nesting a file may reach. Default: 1000.
    pub max_nesting: Option<u32>,
}

impl TreeConfig {
    pub fn effective_include_comments(&self) -> bool {
        self.include_comments.unwrap_or(true)
    }

    pub fn effective_max_nesting(&self) -> u32 {
        self.max_nesting.unwrap_or(DEFAULT_MAX_NESTING)
    }
}
