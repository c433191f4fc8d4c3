use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
    pub validation: Option<ValidationSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Input file path; stdin when absent.
    pub path: Option<String>,
    /// Root entity of the document: "person" or "family".
    pub entity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSection {
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(Error::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| Error::InvalidConfigValue {
            field: "toml".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Sanity-checks the loaded configuration.
    pub fn validate_config(&self) -> Result<()> {
        crate::config::validate_entity("input.entity", &self.input.entity)?;

        if let Some(path) = &self.input.path {
            crate::utils::validation::validate_non_empty_string("input.path", path)?;
        }

        Ok(())
    }

    pub fn pretty(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.pretty)
            .unwrap_or(false)
    }

    pub fn validation_enabled(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.enabled)
            .unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    fn entity(&self) -> &str {
        &self.input.entity
    }

    fn pretty(&self) -> bool {
        self.pretty()
    }

    fn validation_enabled(&self) -> bool {
        self.validation_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[input]
path = "family.json"
entity = "family"

[output]
pretty = true

[validation]
enabled = false
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.path.as_deref(), Some("family.json"));
        assert_eq!(config.input.entity, "family");
        assert!(config.pretty());
        assert!(!config.validation_enabled());
    }

    #[test]
    fn test_defaults_when_sections_absent() {
        let toml_content = r#"
[input]
entity = "person"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.input.path.is_none());
        assert!(!config.pretty());
        assert!(config.validation_enabled());
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_INPUT_PATH", "/tmp/people.json");

        let toml_content = r#"
[input]
path = "${TEST_INPUT_PATH}"
entity = "person"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path.as_deref(), Some("/tmp/people.json"));

        std::env::remove_var("TEST_INPUT_PATH");
    }

    #[test]
    fn test_config_validation_rejects_unknown_entity() {
        let toml_content = r#"
[input]
entity = "household"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
path = "people.json"
entity = "person"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.entity, "person");
    }
}
