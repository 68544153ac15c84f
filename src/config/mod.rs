mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            placeholders: Placeholders::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        let placeholders = [
            ("no_pros", &self.placeholders.no_pros),
            ("no_cons", &self.placeholders.no_cons),
            ("default_plan_name", &self.placeholders.default_plan_name),
            ("default_plan_pros", &self.placeholders.default_plan_pros),
            ("default_plan_cons", &self.placeholders.default_plan_cons),
        ];

        for (field, value) in placeholders {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyPlaceholder(field.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "placeholders:\n  no_pros: none\noutput:\n  format: markdown\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.placeholders.no_pros, "none");
        assert_eq!(config.placeholders.no_cons, "暂无缺点信息");
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_validate_rejects_blank_placeholder() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.placeholders.default_plan_name = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPlaceholder(ref f) if f == "default_plan_name"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config.placeholders, Placeholders::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output: [not, a, map]").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
