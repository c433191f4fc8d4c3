pub mod toml_config;

use crate::domain::model::EntityKind;
use crate::utils::error::{Error, Result};

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "family-json")]
#[command(about = "Decode, validate and re-encode person/family JSON documents")]
pub struct CliConfig {
    /// Input JSON file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<String>,

    /// Root entity of the document: person or family
    #[arg(long, default_value = "person")]
    pub entity: String,

    /// Pretty-print the re-encoded output
    #[arg(long)]
    pub pretty: bool,

    /// Skip semantic validation after decoding
    #[arg(long)]
    pub no_validate: bool,

    /// Ignore the input and emit the built-in sample person
    #[arg(long)]
    pub sample: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn entity(&self) -> &str {
        &self.entity
    }

    fn pretty(&self) -> bool {
        self.pretty
    }

    fn validation_enabled(&self) -> bool {
        !self.no_validate
    }
}

/// Checks an entity name from any config source against the known set.
pub fn validate_entity(field: &str, name: &str) -> Result<EntityKind> {
    EntityKind::from_name(name).ok_or_else(|| Error::InvalidConfigValue {
        field: field.to_string(),
        value: name.to_string(),
        reason: "must be \"person\" or \"family\"".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entity_accepts_known_names() {
        assert_eq!(
            validate_entity("entity", "person").unwrap(),
            EntityKind::Person
        );
        assert_eq!(
            validate_entity("entity", "family").unwrap(),
            EntityKind::Family
        );
    }

    #[test]
    fn test_validate_entity_rejects_unknown_names() {
        let err = validate_entity("entity", "household").unwrap_err();
        match err {
            Error::InvalidConfigValue { field, value, .. } => {
                assert_eq!(field, "entity");
                assert_eq!(value, "household");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
