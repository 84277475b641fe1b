//! Declarative schema for expected model answers

use crate::error::SchemaViolation;
use serde_json::Value;

/// The JSON type a field or the schema root must have
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A JSON string
    String,

    /// A JSON number
    Number,

    /// A JSON boolean
    Boolean,

    /// A JSON object with exactly the declared fields
    Object(Vec<Field>),

    /// A JSON array whose elements all match the inner kind
    Array(Box<FieldKind>),
}

impl FieldKind {
    fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Object(_) => "object",
            FieldKind::Array(_) => "array",
        }
    }
}

/// One named, typed field of an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key the model must use
    pub name: String,

    /// Expected type of the value
    pub kind: FieldKind,

    /// Optional fields may be absent or `null`
    pub optional: bool,
}

impl Field {
    /// Create a field of the given kind
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
        }
    }

    /// A required string field
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// A required number field
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// A required boolean field
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Mark this field optional (may be absent or `null`)
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Declarative description of the expected shape of a model answer
///
/// Every field is named and typed. Validation is strict: unknown or extra
/// fields in the model's answer are rejected, not silently dropped, unless
/// a field is explicitly optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionSchema {
    root: FieldKind,
}

impl ExtractionSchema {
    /// Schema whose root is an object with the given fields
    pub fn object(fields: Vec<Field>) -> Self {
        Self {
            root: FieldKind::Object(fields),
        }
    }

    /// Schema whose root is a flat array of objects with the given fields
    pub fn array_of_objects(fields: Vec<Field>) -> Self {
        Self {
            root: FieldKind::Array(Box::new(FieldKind::Object(fields))),
        }
    }

    /// The root kind of this schema
    pub fn root(&self) -> &FieldKind {
        &self.root
    }

    /// Validate a parsed JSON value against this schema
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaViolation`] found, with a `$`-rooted path
    /// to the offending value.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        validate_kind(&self.root, value, "$")
    }

    /// Render the expected shape for inclusion in a prompt
    ///
    /// Produces a compact JSON-like sketch, e.g.
    /// `{"firstName": string, "lastName": string}`.
    pub fn describe(&self) -> String {
        describe_kind(&self.root)
    }
}

fn validate_kind(kind: &FieldKind, value: &Value, path: &str) -> Result<(), SchemaViolation> {
    let mismatch = || SchemaViolation::TypeMismatch {
        path: path.to_string(),
        expected: kind.type_name(),
    };

    match kind {
        FieldKind::String => value.as_str().map(|_| ()).ok_or_else(mismatch),
        FieldKind::Number => value.as_f64().map(|_| ()).ok_or_else(mismatch),
        FieldKind::Boolean => value.as_bool().map(|_| ()).ok_or_else(mismatch),
        FieldKind::Array(inner) => {
            let items = value.as_array().ok_or_else(mismatch)?;
            for (idx, item) in items.iter().enumerate() {
                validate_kind(inner, item, &format!("{}[{}]", path, idx))?;
            }
            Ok(())
        }
        FieldKind::Object(fields) => {
            let object = value.as_object().ok_or_else(mismatch)?;

            for field in fields {
                let field_path = format!("{}.{}", path, field.name);
                match object.get(&field.name) {
                    None => {
                        if !field.optional {
                            return Err(SchemaViolation::MissingField { path: field_path });
                        }
                    }
                    Some(Value::Null) if field.optional => {}
                    Some(found) => validate_kind(&field.kind, found, &field_path)?,
                }
            }

            // Strict: reject keys the schema does not declare
            for key in object.keys() {
                if !fields.iter().any(|f| &f.name == key) {
                    return Err(SchemaViolation::UnexpectedField {
                        path: format!("{}.{}", path, key),
                    });
                }
            }

            Ok(())
        }
    }
}

fn describe_kind(kind: &FieldKind) -> String {
    match kind {
        FieldKind::String => "string".to_string(),
        FieldKind::Number => "number".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Array(inner) => format!("[{}]", describe_kind(inner)),
        FieldKind::Object(fields) => {
            let rendered: Vec<String> = fields
                .iter()
                .map(|f| {
                    let ty = describe_kind(&f.kind);
                    if f.optional {
                        format!("\"{}\": {} or null", f.name, ty)
                    } else {
                        format!("\"{}\": {}", f.name, ty)
                    }
                })
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}
