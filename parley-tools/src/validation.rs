//! Parameter schemas and argument validation
//!
//! Only the slice of JSON Schema that tool parameters use is understood:
//! `type`, `required`, `properties`, `additionalProperties`, `items`, `enum`
//! and numeric `minimum`/`maximum`.

use serde_json::{json, Map, Value};

/// Trait for validating tool arguments
pub trait ToolValidator {
    /// Validate arguments against a schema, collecting every violation
    fn validate(&self, args: &Value, schema: &Value) -> Result<(), Vec<String>>;
}

/// Default JSON Schema validator
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaValidator;

impl JsonSchemaValidator {
    fn check(&self, value: &Value, schema: &Value, path: &str, errors: &mut Vec<String>) {
        let Some(schema) = schema.as_object() else {
            return;
        };
        let at = if path.is_empty() { "$" } else { path };

        if let Some(expected) = schema.get("type").and_then(Value::as_str) {
            if !type_matches(expected, value) {
                errors.push(format!(
                    "{at}: expected {expected}, got {}",
                    value_type_name(value)
                ));
                return;
            }
        }

        if let Some(obj) = value.as_object() {
            let required = schema.get("required").and_then(Value::as_array);
            for field in required.into_iter().flatten().filter_map(Value::as_str) {
                if !obj.contains_key(field) {
                    errors.push(format!("{at}: missing required field '{field}'"));
                }
            }

            let properties = schema.get("properties").and_then(Value::as_object);
            let closed = schema.get("additionalProperties") == Some(&Value::Bool(false));
            for (key, child) in obj {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match properties.and_then(|p| p.get(key)) {
                    Some(child_schema) => self.check(child, child_schema, &child_path, errors),
                    None if closed => errors.push(format!("{at}: unexpected property '{key}'")),
                    None => {}
                }
            }
        }

        if let (Some(items), Some(array)) = (schema.get("items"), value.as_array()) {
            for (i, item) in array.iter().enumerate() {
                self.check(item, items, &format!("{at}[{i}]"), errors);
            }
        }

        if let Some(n) = value.as_f64() {
            if let Some(min) = schema.get("minimum").and_then(Value::as_f64) {
                if n < min {
                    errors.push(format!("{at}: {n} is less than minimum {min}"));
                }
            }
            if let Some(max) = schema.get("maximum").and_then(Value::as_f64) {
                if n > max {
                    errors.push(format!("{at}: {n} is greater than maximum {max}"));
                }
            }
        }

        if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
            if !allowed.contains(value) {
                errors.push(format!("{at}: value must be one of {}", Value::Array(allowed.clone())));
            }
        }
    }
}

impl ToolValidator for JsonSchemaValidator {
    fn validate(&self, args: &Value, schema: &Value) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        self.check(args, schema, "", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match (expected, value) {
        ("string", Value::String(_))
        | ("number", Value::Number(_))
        | ("boolean", Value::Bool(_))
        | ("array", Value::Array(_))
        | ("object", Value::Object(_))
        | ("null", Value::Null) => true,
        ("integer", Value::Number(n)) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Helper to create a simple parameter schema
pub fn param_schema() -> ParameterSchemaBuilder {
    ParameterSchemaBuilder::default()
}

/// Builder for creating parameter schemas
#[derive(Default)]
pub struct ParameterSchemaBuilder {
    properties: Map<String, Value>,
    required: Vec<String>,
    additional_properties: Option<bool>,
}

impl ParameterSchemaBuilder {
    fn property(mut self, name: String, kind: &str, description: String, required: bool) -> Self {
        self.properties
            .insert(name.clone(), json!({ "type": kind, "description": description }));
        if required {
            self.required.push(name);
        }
        self
    }

    /// Add an optional string parameter
    #[must_use]
    pub fn string(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name.into(), "string", description.into(), false)
    }

    /// Add a required string parameter
    #[must_use]
    pub fn string_required(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name.into(), "string", description.into(), true)
    }

    /// Add an optional number parameter
    #[must_use]
    pub fn number(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name.into(), "number", description.into(), false)
    }

    /// Add a required number parameter
    #[must_use]
    pub fn number_required(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name.into(), "number", description.into(), true)
    }

    /// Set whether additional properties are allowed
    #[must_use]
    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    /// Build the schema
    pub fn build(self) -> Value {
        let mut schema = json!({
            "type": "object",
            "properties": self.properties,
        });
        if !self.required.is_empty() {
            schema["required"] = json!(self.required);
        }
        if let Some(additional) = self.additional_properties {
            schema["additionalProperties"] = Value::Bool(additional);
        }
        schema
    }
}
