//! Scan configuration
//!
//! Defaults match what a plain `.d.ts` tree needs; YAML files may set any
//! subset of the fields.
//!
//! ```yaml
//! language_version: es2020
//! skip_dirs: [fixtures]
//! strict_syntax: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::features::parsing::domain::LanguageVersion;

/// Suffix of the files collected by a scan
pub const DECLARATION_FILE_SUFFIX: &str = ".d.ts";

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Language version handed to the parser
    pub language_version: LanguageVersion,

    /// Collected file suffix (non-empty)
    pub file_suffix: String,

    /// Follow symbolic links during discovery
    pub follow_links: bool,

    /// Directory names pruned during discovery
    pub skip_dirs: Vec<String>,

    /// Read and parse files in parallel
    pub parallel: bool,

    /// Fail the scan on syntax errors instead of keeping the recovered tree
    pub strict_syntax: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            language_version: LanguageVersion::default(),
            file_suffix: DECLARATION_FILE_SUFFIX.to_string(),
            follow_links: false,
            skip_dirs: Vec::new(),
            parallel: true,
            strict_syntax: false,
        }
    }
}

impl ScanConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

        // Checked up front so the error names the version instead of a YAML position
        if let Some(version) = value.get("language_version").and_then(|v| v.as_str()) {
            version.parse::<LanguageVersion>()?;
        }

        let config: ScanConfig = if value.is_null() {
            ScanConfig::default()
        } else {
            serde_yaml::from_value(value)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.file_suffix.is_empty() {
            return Err(ConfigError::invalid_value(
                "file_suffix",
                "suffix must not be empty",
            ));
        }

        if let Some(dir) = self
            .skip_dirs
            .iter()
            .find(|d| d.is_empty() || d.contains(['/', '\\']))
        {
            return Err(ConfigError::invalid_value(
                "skip_dirs",
                format!("'{}' is not a single directory name", dir),
            ));
        }

        Ok(())
    }

    /// Builder: Set language version
    pub fn language_version(mut self, version: LanguageVersion) -> Self {
        self.language_version = version;
        self
    }

    /// Builder: Set file suffix
    pub fn file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    /// Builder: Follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Builder: Prune a directory name
    pub fn skip_dir(mut self, name: impl Into<String>) -> Self {
        self.skip_dirs.push(name.into());
        self
    }

    /// Builder: Enable parallel read and parse
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder: Fail on syntax errors
    pub fn strict_syntax(mut self, strict: bool) -> Self {
        self.strict_syntax = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.language_version, LanguageVersion::Es2019);
        assert_eq!(config.file_suffix, ".d.ts");
        assert!(!config.follow_links);
        assert!(config.skip_dirs.is_empty());
        assert!(config.parallel);
        assert!(!config.strict_syntax);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_override() {
        let config = ScanConfig::from_yaml_str(
            "language_version: ESNext\nskip_dirs: [fixtures]\nstrict_syntax: true\n",
        )
        .unwrap();

        assert_eq!(config.language_version, LanguageVersion::EsNext);
        assert_eq!(config.skip_dirs, vec!["fixtures".to_string()]);
        assert!(config.strict_syntax);
        assert_eq!(config.file_suffix, ".d.ts");
    }

    #[test]
    fn test_yaml_unknown_version() {
        let err = ScanConfig::from_yaml_str("language_version: es1999\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguageVersion(ref v) if v.0 == "es1999"));
        assert!(err.to_string().contains("Valid versions"));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let err = ScanConfig::from_yaml_str("max_depth: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_validate_rejects_empty_suffix() {
        let err = ScanConfig::default().file_suffix("").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "file_suffix"));
    }

    #[test]
    fn test_validate_rejects_nested_skip_dir() {
        let config = ScanConfig::default().skip_dir("a/b");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.yaml");
        let config = ScanConfig::default()
            .language_version(LanguageVersion::Es2022)
            .skip_dir("node_modules")
            .parallel(false);
        std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

        assert_eq!(ScanConfig::from_yaml_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScanConfig::from_yaml_file("/nonexistent/scan.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
