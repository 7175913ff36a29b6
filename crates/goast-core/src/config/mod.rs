//! Configuration system for GoAST.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod goast_config;
pub mod scan_config;
pub mod tree_config;

pub use goast_config::{CliOverrides, GoastConfig};
pub use scan_config::ScanConfig;
pub use tree_config::{TreeConfig, DEFAULT_MAX_NESTING};
