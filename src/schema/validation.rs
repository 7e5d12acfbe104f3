//! Validation of raw tool arguments.
//!
//! Validation is pure: it never calls a collaborator and never mutates the
//! input. All violations are collected in one pass rather than stopping at the
//! first, so a client can fix every problem with a single retry.

use super::{ArgumentSchema, UnknownFields};
use crate::error::{ValidationError, Violation};
use jsonschema::error::ValidationErrorKind;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Arguments that satisfied their tool's schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArguments {
    arguments: Map<String, Value>,
}

impl ValidatedArguments {
    /// Convert into the operation's typed input.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        serde_json::from_value(self.as_value())
            .map_err(|e| ValidationError::single("", e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.arguments.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.arguments)
    }
}

impl ArgumentSchema {
    /// Check raw arguments against this schema.
    ///
    /// Absent or null input is checked as an empty object, which reports every
    /// missing required property. Input that is not an object yields a single
    /// violation against the root path.
    pub fn validate(&self, raw: Option<&Value>) -> Result<ValidatedArguments, ValidationError> {
        let empty = Value::Object(Map::new());
        let instance = match raw {
            None | Some(Value::Null) => &empty,
            Some(value) => value,
        };

        let Some(object) = instance.as_object() else {
            return Err(ValidationError::single(
                "",
                format!("Expected object, received {}", json_type_name(instance)),
            ));
        };

        if let Err(errors) = self.compiled.validate(instance) {
            let violations = errors.flat_map(|error| to_violations(&error)).collect();
            return Err(ValidationError::new(violations));
        }

        let arguments = match self.unknown_fields {
            UnknownFields::Strip => object
                .iter()
                .filter(|(key, _)| self.declares(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            UnknownFields::Reject => object.clone(),
        };

        Ok(ValidatedArguments { arguments })
    }
}

fn to_violations(error: &jsonschema::ValidationError<'_>) -> Vec<Violation> {
    let parent = dotted_path(&error.instance_path.to_string());
    let message = error.to_string();

    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            vec![Violation::new(join_path(&parent, &name), message)]
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
            .iter()
            .map(|name| {
                Violation::new(
                    join_path(&parent, name),
                    format!("Unrecognized key '{}'", name),
                )
            })
            .collect(),
        _ => vec![Violation::new(parent, message)],
    }
}

/// `/a/b` becomes `a.b`; the root pointer becomes an empty path.
fn dotted_path(pointer: &str) -> String {
    pointer
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
