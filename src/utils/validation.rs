use std::fmt;

use crate::domain::model::{Body, Family, Person, PhysicalAttributes};
use crate::utils::error::ValidationError;

/// Semantic validation over a fully constructed value. Decoding never
/// validates; callers invoke this explicitly so "malformed wire data" and
/// "well-formed but invalid data" stay distinguishable.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Leaf check for an inclusive numeric range. Both bounds are allowed values.
pub fn validate_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            actual: value.to_string(),
        });
    }
    Ok(())
}

/// Config-surface check: rejects empty or whitespace-only strings with
/// field/value context for the caller.
pub fn validate_non_empty_string(field: &str, value: &str) -> crate::utils::error::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::utils::error::Error::InvalidConfigValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

impl Validate for PhysicalAttributes {
    // No constrained fields; eye color is already a closed type.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for Body {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_range("weight", self.weight, 0.0, 500.0)?;
        validate_range("height", self.height, 0.0, 3.0)?;
        self.physical_attributes
            .validate()
            .map_err(|e| e.prefixed("physicalAttributes"))
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_range("age", self.age, 0, 150)?;
        self.body.validate().map_err(|e| e.prefixed("body"))
    }
}

impl Validate for Family {
    /// A family is valid only if every present member is individually valid.
    /// The family name itself carries no constraint.
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(father) = &self.father {
            father.validate().map_err(|e| e.prefixed("father"))?;
        }
        if let Some(mother) = &self.mother {
            mother.validate().map_err(|e| e.prefixed("mother"))?;
        }
        for (index, child) in self.children.iter().enumerate() {
            child
                .validate()
                .map_err(|e| e.prefixed(&format!("children[{index}]")))?;
        }
        Ok(())
    }
}
