//! Configuration
//!
//! `ScanConfig` controls discovery and parsing. Built with defaults and
//! builder methods, or loaded from YAML.
//!
//! ```rust,ignore
//! use typegraph::config::ScanConfig;
//!
//! let config = ScanConfig::default().skip_dir("fixtures").strict_syntax(true);
//! let config = ScanConfig::from_yaml_file("typegraph.yaml")?;
//! ```

pub mod error;
pub mod scan_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use scan_config::{ScanConfig, DECLARATION_FILE_SUFFIX};
