//! Projection of the generic value tree into API-reference records.
//!
//! FrameXML documentation tables share one layout: a top-level table
//! with `Name`/`Type`/`Namespace` plus `Functions`, `Events`, and
//! `Tables` arrays. Projection is defaulting and shape-tolerant: missing
//! keys fall back to empty/false/None, `Documentation` accepts either a
//! single string or a list, and unknown keys are ignored.

use crate::value::Value;

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Field {
    pub name: String,
    pub field_type: String,
    pub nilable: bool,
    pub documentation: Vec<String>,
    pub inner_type: Option<String>,
    pub enum_value: Option<i64>,
    pub default: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Function {
    pub name: String,
    pub documentation: Vec<String>,
    pub arguments: Vec<Field>,
    pub returns: Vec<Field>,
    /// Taint restriction marker, e.g. `AllowedWhenUntainted`.
    pub secret_arguments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Event {
    pub name: String,
    pub literal_name: String,
    pub unique_event: bool,
    pub synchronous_event: bool,
    pub payload: Vec<Field>,
}

/// Enumeration, Structure, Constants, or CallbackType definition. The
/// kind stays a plain string; the corpus grows new kinds over time.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableDef {
    pub name: String,
    pub kind: String,
    pub documentation: Vec<String>,
    pub fields: Vec<Field>,
    pub num_values: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    pub name: String,
    pub doc_type: String,
    pub namespace: Option<String>,
    pub environment: String,
    pub functions: Vec<Function>,
    pub events: Vec<Event>,
    pub tables: Vec<TableDef>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            name: String::new(),
            doc_type: String::new(),
            namespace: None,
            environment: String::from("All"),
            functions: Vec::new(),
            events: Vec::new(),
            tables: Vec::new(),
        }
    }
}

impl Document {
    pub fn from_value(root: &Value) -> Self {
        let mut doc = Document {
            name: str_field(root, "Name"),
            doc_type: str_field(root, "Type"),
            namespace: opt_str_field(root, "Namespace"),
            ..Document::default()
        };
        if let Some(env) = root.get("Environment").and_then(Value::as_str) {
            doc.environment = env.to_string();
        }
        if let Some(items) = root.get("Functions").and_then(Value::as_array) {
            doc.functions = items.iter().map(Function::from_value).collect();
        }
        if let Some(items) = root.get("Events").and_then(Value::as_array) {
            doc.events = items.iter().map(Event::from_value).collect();
        }
        if let Some(items) = root.get("Tables").and_then(Value::as_array) {
            doc.tables = items.iter().map(TableDef::from_value).collect();
        }
        doc
    }
}

impl Function {
    pub fn from_value(data: &Value) -> Self {
        Function {
            name: str_field(data, "Name"),
            documentation: docs_field(data),
            arguments: field_list(data, "Arguments"),
            returns: field_list(data, "Returns"),
            secret_arguments: opt_str_field(data, "SecretArguments"),
        }
    }
}

impl Event {
    pub fn from_value(data: &Value) -> Self {
        Event {
            name: str_field(data, "Name"),
            literal_name: str_field(data, "LiteralName"),
            unique_event: bool_field(data, "UniqueEvent"),
            synchronous_event: bool_field(data, "SynchronousEvent"),
            payload: field_list(data, "Payload"),
        }
    }
}

impl TableDef {
    pub fn from_value(data: &Value) -> Self {
        TableDef {
            name: str_field(data, "Name"),
            kind: str_field(data, "Type"),
            documentation: docs_field(data),
            fields: field_list(data, "Fields"),
            num_values: int_field(data, "NumValues"),
            min_value: int_field(data, "MinValue"),
            max_value: int_field(data, "MaxValue"),
        }
    }
}

impl Field {
    pub fn from_value(data: &Value) -> Self {
        Field {
            name: str_field(data, "Name"),
            field_type: str_field(data, "Type"),
            nilable: bool_field(data, "Nilable"),
            documentation: docs_field(data),
            inner_type: opt_str_field(data, "InnerType"),
            enum_value: int_field(data, "EnumValue"),
            default: data.get("Default").cloned(),
        }
    }
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(data: &Value, key: &str) -> bool {
    data.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn field_list(data: &Value, key: &str) -> Vec<Field> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(Field::from_value).collect())
        .unwrap_or_default()
}

fn int_field(data: &Value, key: &str) -> Option<i64> {
    data.get(key).and_then(Value::as_i64)
}

fn docs_field(data: &Value) -> Vec<String> {
    match data.get("Documentation") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}
