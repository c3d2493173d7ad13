use serde_json::Value;

/// JSON kind a top-level agent card field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Object,
    Array,
}

impl FieldKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Object => value.is_object(),
            FieldKind::Array => value.is_array(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Object => "object",
            FieldKind::Array => "array",
        }
    }
}

/// Required top-level fields of an A2A agent card, in reporting order.
///
/// Shared by the presence check and the schema check.
pub const REQUIRED_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::String),
    ("description", FieldKind::String),
    ("version", FieldKind::String),
    ("url", FieldKind::String),
    ("capabilities", FieldKind::Object),
    ("skills", FieldKind::Array),
    ("defaultInputModes", FieldKind::Array),
    ("defaultOutputModes", FieldKind::Array),
];

/// Keys every entry of `skills` must carry
pub const REQUIRED_SKILL_FIELDS: &[&str] = &["id", "name", "description", "tags"];

/// Keys `capabilities` must carry (values are not inspected)
pub const REQUIRED_CAPABILITIES: &[&str] = &["streaming"];

/// Optional top-level fields reported when absent
pub const RECOMMENDED_FIELDS: &[&str] = &["documentationUrl", "provider"];

/// JSON kind name of an arbitrary value, for diagnostics
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read-only accessors over a fetched agent card
pub trait CardExt {
    fn has_field(&self, field: &str) -> bool;
    fn skills(&self) -> &[Value];
}

impl CardExt for Value {
    fn has_field(&self, field: &str) -> bool {
        self.as_object().is_some_and(|obj| obj.contains_key(field))
    }

    fn skills(&self) -> &[Value] {
        self.get("skills")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
