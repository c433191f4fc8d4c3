use std::fmt;

use thiserror::Error;

/// The JSON kind of a value, used when reporting type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonKind::Null,
            serde_json::Value::Bool(_) => JsonKind::Bool,
            serde_json::Value::Number(_) => JsonKind::Number,
            serde_json::Value::String(_) => JsonKind::String,
            serde_json::Value::Array(_) => JsonKind::Array,
            serde_json::Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures while turning wire text / JSON trees into model values.
///
/// Every variant is fatal to the decode call: no partial object is ever
/// returned. `path` is the dotted/bracketed chain of member names and
/// indices from the decode root, e.g. `father.body.physicalAttributes.eyeColor`
/// or `children[2].age`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("input is not valid JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("missing required field: {path}")]
    MissingField { path: String },

    #[error("type mismatch at {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: JsonKind,
    },

    #[error("invalid enum value at {path}: {value:?}")]
    InvalidEnumValue { path: String, value: String },
}

impl DecodeError {
    /// Prepends a parent member name (or `name[index]` segment) to the
    /// error path. Each nesting level calls this once on the way up.
    pub fn prefixed(self, parent: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                parent.to_string()
            } else {
                format!("{parent}.{path}")
            }
        };
        match self {
            DecodeError::MalformedInput(e) => DecodeError::MalformedInput(e),
            DecodeError::MissingField { path } => DecodeError::MissingField { path: join(path) },
            DecodeError::TypeMismatch {
                path,
                expected,
                actual,
            } => DecodeError::TypeMismatch {
                path: join(path),
                expected,
                actual,
            },
            DecodeError::InvalidEnumValue { path, value } => DecodeError::InvalidEnumValue {
                path: join(path),
                value,
            },
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::MalformedInput(_) => None,
            DecodeError::MissingField { path }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::InvalidEnumValue { path, .. } => Some(path),
        }
    }
}

/// Failures while turning model values into JSON trees / wire text.
///
/// Encoding is total for every constructible object except non-finite
/// floats, which JSON cannot represent.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("non-finite number in field {field}: {value}")]
    NonFiniteNumber { field: String, value: f64 },

    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),
}

impl EncodeError {
    pub fn prefixed(self, parent: &str) -> Self {
        match self {
            EncodeError::NonFiniteNumber { field, value } => EncodeError::NonFiniteNumber {
                field: if field.is_empty() {
                    parent.to_string()
                } else {
                    format!("{parent}.{field}")
                },
                value,
            },
            other => other,
        }
    }
}

/// A well-formed object violating a numeric range invariant.
///
/// Validation only reports; it never repairs or clamps. The bounds are kept
/// as display strings so one variant covers integer and float constraints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} (got {actual})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        actual: String,
    },
}

impl ValidationError {
    pub fn prefixed(self, parent: &str) -> Self {
        match self {
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => ValidationError::OutOfRange {
                field: format!("{parent}.{field}"),
                min,
                max,
                actual,
            },
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

/// Umbrella error for the outer surfaces (binaries, config loading).
///
/// Core codec and validation APIs return their precise error types; this
/// wrapper exists so config providers and binaries can use one `Result`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid configuration value for {field}: {reason} (got {value:?})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Stable exit-code mapping for the CLI binaries.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Decode(_) | Error::Encode(_) => 1,
            Error::Validation(_) | Error::InvalidConfigValue { .. } => 2,
            Error::Io(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Error::Io(_) => "Check that the input path exists and is readable",
            Error::Decode(DecodeError::MalformedInput(_)) => {
                "Check the input is syntactically valid JSON"
            }
            Error::Decode(DecodeError::MissingField { .. }) => {
                "Add the missing member to the input document"
            }
            Error::Decode(DecodeError::TypeMismatch { .. }) => {
                "Fix the member's JSON type at the reported path"
            }
            Error::Decode(DecodeError::InvalidEnumValue { .. }) => {
                "Use one of the allowed enum values (exact spelling, e.g. \"Blue\")"
            }
            Error::Encode(_) => "Replace non-finite numeric field values before encoding",
            Error::Validation(_) => "Bring the reported field back into its allowed range",
            Error::InvalidConfigValue { .. } => "Fix the configuration value and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_path_prefixing() {
        let err = DecodeError::MissingField {
            path: "age".to_string(),
        };
        let err = err.prefixed("father");
        assert_eq!(err.path(), Some("father.age"));
        assert_eq!(err.to_string(), "missing required field: father.age");
    }

    #[test]
    fn test_prefixing_empty_path_takes_parent() {
        let err = DecodeError::TypeMismatch {
            path: String::new(),
            expected: "object",
            actual: JsonKind::String,
        };
        let err = err.prefixed("body");
        assert_eq!(err.path(), Some("body"));
    }

    #[test]
    fn test_indexed_prefix_builds_bracketed_path() {
        let err = DecodeError::MissingField {
            path: "age".to_string(),
        }
        .prefixed("children[2]");
        assert_eq!(err.path(), Some("children[2].age"));
    }

    #[test]
    fn test_exit_codes_are_stable() {
        let decode: Error = DecodeError::MissingField {
            path: "age".to_string(),
        }
        .into();
        let validation: Error = ValidationError::OutOfRange {
            field: "age".to_string(),
            min: "0".to_string(),
            max: "150".to_string(),
            actual: "151".to_string(),
        }
        .into();
        assert_eq!(decode.exit_code(), 1);
        assert_eq!(validation.exit_code(), 2);
    }

    #[test]
    fn test_json_kind_of_value() {
        assert_eq!(JsonKind::of(&serde_json::json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&serde_json::json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&serde_json::json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&serde_json::json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&serde_json::json!({})), JsonKind::Object);
    }
}
