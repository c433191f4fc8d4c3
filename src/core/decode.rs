use serde_json::{Map, Value};

use crate::domain::model::{Body, EyeColor, Family, Person, PhysicalAttributes};
use crate::utils::error::{DecodeError, JsonKind};

/// Decoding from a generic JSON value tree.
///
/// Strict by contract: a missing required member, a wrong JSON kind, or an
/// unknown enum value fails the whole decode. Nothing is defaulted and no
/// partial value escapes. Errors carry the dotted member path from the
/// decode root; nesting levels prepend their member name on the way up.
///
/// Decoding performs no semantic validation: out-of-range values decode
/// fine and are caught by an explicit `Validate` call.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self, DecodeError>;
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::TypeMismatch {
        path: String::new(),
        expected: "object",
        actual: JsonKind::of(value),
    })
}

fn member<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, DecodeError> {
    obj.get(field).ok_or_else(|| DecodeError::MissingField {
        path: field.to_string(),
    })
}

fn string_member(obj: &Map<String, Value>, field: &str) -> Result<String, DecodeError> {
    let value = member(obj, field)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::TypeMismatch {
            path: field.to_string(),
            expected: "string",
            actual: JsonKind::of(value),
        })
}

/// Requires an integer-valued JSON number that fits the field type. A float
/// like `30.5` or an out-of-range integer is a mismatch, not a truncation.
fn int_member(obj: &Map<String, Value>, field: &str) -> Result<i32, DecodeError> {
    let value = member(obj, field)?;
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| DecodeError::TypeMismatch {
            path: field.to_string(),
            expected: "integer",
            actual: JsonKind::of(value),
        })
}

fn float_member(obj: &Map<String, Value>, field: &str) -> Result<f64, DecodeError> {
    let value = member(obj, field)?;
    value.as_f64().ok_or_else(|| DecodeError::TypeMismatch {
        path: field.to_string(),
        expected: "number",
        actual: JsonKind::of(value),
    })
}

/// Closed-set enum member. Any value outside the set (wrong case, empty,
/// or not a string at all) is an invalid enum value carrying the raw input,
/// never a silent default.
fn eye_color_member(obj: &Map<String, Value>, field: &str) -> Result<EyeColor, DecodeError> {
    let value = member(obj, field)?;
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    value
        .as_str()
        .and_then(EyeColor::from_name)
        .ok_or_else(|| DecodeError::InvalidEnumValue {
            path: field.to_string(),
            value: raw,
        })
}

/// Optional nested object: an absent member or an explicit `null` is
/// "no value"; anything present decodes strictly.
fn optional_person(obj: &Map<String, Value>, field: &str) -> Result<Option<Person>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Person::from_json(value)
            .map(Some)
            .map_err(|e| e.prefixed(field)),
    }
}

impl FromJson for PhysicalAttributes {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(PhysicalAttributes {
            eye_color: eye_color_member(obj, "eyeColor")?,
            hair_color: string_member(obj, "hairColor")?,
        })
    }
}

impl FromJson for Body {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(Body {
            weight: float_member(obj, "weight")?,
            height: float_member(obj, "height")?,
            physical_attributes: PhysicalAttributes::from_json(member(
                obj,
                "physicalAttributes",
            )?)
            .map_err(|e| e.prefixed("physicalAttributes"))?,
        })
    }
}

impl FromJson for Person {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(Person {
            name: string_member(obj, "name")?,
            age: int_member(obj, "age")?,
            body: Body::from_json(member(obj, "body")?).map_err(|e| e.prefixed("body"))?,
        })
    }
}

impl FromJson for Family {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        let family_name = string_member(obj, "familyName")?;
        let father = optional_person(obj, "father")?;
        let mother = optional_person(obj, "mother")?;

        let children_value = member(obj, "children")?;
        let elements = children_value
            .as_array()
            .ok_or_else(|| DecodeError::TypeMismatch {
                path: "children".to_string(),
                expected: "array",
                actual: JsonKind::of(children_value),
            })?;

        // The first failing element aborts the whole sequence decode.
        let mut children = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            children.push(
                Person::from_json(element)
                    .map_err(|e| e.prefixed(&format!("children[{index}]")))?,
            );
        }

        Ok(Family {
            family_name,
            father,
            mother,
            children,
        })
    }
}
