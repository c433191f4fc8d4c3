pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::JsonWire;
pub use core::codec::Codec;
pub use core::{FromJson, ToJson};
pub use domain::model::{Body, EntityKind, EyeColor, Family, Person, PhysicalAttributes};
pub use utils::error::{DecodeError, EncodeError, Error, Result, ValidationError};
pub use utils::validation::Validate;
