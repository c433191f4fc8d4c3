// Adapters layer: concrete implementations of the domain ports for
// external capabilities. The only external capability this crate consumes
// is the JSON wire format itself.

use crate::domain::ports::WireFormat;
use crate::utils::error::{DecodeError, EncodeError};
use serde_json::Value;

/// serde_json-backed wire format: text to value tree and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWire;

impl WireFormat for JsonWire {
    fn parse(&self, text: &str) -> Result<Value, DecodeError> {
        serde_json::from_str(text).map_err(DecodeError::MalformedInput)
    }

    fn render(&self, value: &Value) -> Result<String, EncodeError> {
        serde_json::to_string(value).map_err(EncodeError::Render)
    }

    fn render_pretty(&self, value: &Value) -> Result<String, EncodeError> {
        serde_json::to_string_pretty(value).map_err(EncodeError::Render)
    }
}
