use crate::utils::error::{DecodeError, EncodeError};
use serde_json::Value;

/// Wire-level JSON capability the codec consumes: turning text into a
/// generic value tree and back. The codec itself never touches raw text.
pub trait WireFormat {
    fn parse(&self, text: &str) -> Result<Value, DecodeError>;
    fn render(&self, value: &Value) -> Result<String, EncodeError>;
    fn render_pretty(&self, value: &Value) -> Result<String, EncodeError>;
}

/// Shared accessors over the configuration sources (CLI flags, TOML file).
pub trait ConfigProvider {
    /// Input file path; `None` means read from stdin.
    fn input_path(&self) -> Option<&str>;
    /// Root entity name, "person" or "family".
    fn entity(&self) -> &str;
    fn pretty(&self) -> bool;
    fn validation_enabled(&self) -> bool;
}
