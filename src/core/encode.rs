use serde_json::{Map, Number, Value};

use crate::domain::model::{Body, Family, Person, PhysicalAttributes};
use crate::utils::error::EncodeError;

/// Encoding into a generic JSON value tree.
///
/// Members are emitted in field declaration order (the tree's object map
/// preserves insertion order), unset optional members are omitted entirely,
/// and non-finite floats are rejected rather than degraded to null.
pub trait ToJson {
    fn to_json(&self) -> Result<Value, EncodeError>;
}

/// JSON has no representation for NaN or ±infinity; surface them as a typed
/// encode failure instead of serde_json's silent null.
fn finite_number(field: &str, value: f64) -> Result<Value, EncodeError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| EncodeError::NonFiniteNumber {
            field: field.to_string(),
            value,
        })
}

impl ToJson for PhysicalAttributes {
    fn to_json(&self) -> Result<Value, EncodeError> {
        let mut json = Map::new();
        json.insert(
            "eyeColor".to_string(),
            Value::String(self.eye_color.as_str().to_string()),
        );
        json.insert(
            "hairColor".to_string(),
            Value::String(self.hair_color.clone()),
        );
        Ok(Value::Object(json))
    }
}

impl ToJson for Body {
    fn to_json(&self) -> Result<Value, EncodeError> {
        let mut json = Map::new();
        json.insert("weight".to_string(), finite_number("weight", self.weight)?);
        json.insert("height".to_string(), finite_number("height", self.height)?);
        json.insert(
            "physicalAttributes".to_string(),
            self.physical_attributes
                .to_json()
                .map_err(|e| e.prefixed("physicalAttributes"))?,
        );
        Ok(Value::Object(json))
    }
}

impl ToJson for Person {
    fn to_json(&self) -> Result<Value, EncodeError> {
        let mut json = Map::new();
        json.insert("name".to_string(), Value::String(self.name.clone()));
        json.insert("age".to_string(), Value::from(self.age));
        json.insert(
            "body".to_string(),
            self.body.to_json().map_err(|e| e.prefixed("body"))?,
        );
        Ok(Value::Object(json))
    }
}

impl ToJson for Family {
    fn to_json(&self) -> Result<Value, EncodeError> {
        let mut json = Map::new();
        json.insert(
            "familyName".to_string(),
            Value::String(self.family_name.clone()),
        );
        if let Some(father) = &self.father {
            json.insert(
                "father".to_string(),
                father.to_json().map_err(|e| e.prefixed("father"))?,
            );
        }
        if let Some(mother) = &self.mother {
            json.insert(
                "mother".to_string(),
                mother.to_json().map_err(|e| e.prefixed("mother"))?,
            );
        }
        let mut children = Vec::with_capacity(self.children.len());
        for (index, child) in self.children.iter().enumerate() {
            children.push(
                child
                    .to_json()
                    .map_err(|e| e.prefixed(&format!("children[{index}]")))?,
            );
        }
        json.insert("children".to_string(), Value::Array(children));
        Ok(Value::Object(json))
    }
}
