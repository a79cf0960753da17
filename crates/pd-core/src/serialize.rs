//! Component ⇄ plain-data conversion.
//!
//! The serialized form is the flat JSON shape the saved-document format
//! uses: `{"id": "comp-1", "type": "heading", "level": 1, "text": "..."}`,
//! with container children as a nested array. Render behavior and property
//! descriptors are derived from the type tag and never stored.
//!
//! Deserialization builds a variant's defaults and overwrites the fields
//! the data actually carries, so a payload written by an older build (or
//! with fields missing) still loads. An unknown type tag is an error,
//! never a silently dropped component.

use crate::error::CoreError;
use crate::id::ComponentId;
use crate::model::{Component, ComponentKind, ComponentType};
use serde_json::{Map, Value};

/// Serialize one component (and its children) to plain data.
#[must_use]
pub fn to_value(component: &Component) -> Value {
    serde_json::to_value(component).expect("component JSON serialization cannot fail")
}

/// Reconstruct a component from plain data.
pub fn from_value(value: &Value) -> Result<Component, CoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| CoreError::MalformedPayload("component entry is not an object".into()))?;

    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::MalformedPayload("component entry has no type tag".into()))?;
    let ty = ComponentType::from_tag(tag)?;

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(ComponentId::parse)
        .ok_or_else(|| {
            CoreError::MalformedPayload(format!("`{tag}` component has no usable id"))
        })?;

    let mut kind = ComponentKind::default_for(ty);
    apply_fields(&mut kind, obj)?;

    Ok(Component { id, kind })
}

/// Overwrite default fields with whatever the data carries.
fn apply_fields(kind: &mut ComponentKind, obj: &Map<String, Value>) -> Result<(), CoreError> {
    match kind {
        ComponentKind::Heading { level, text } => {
            if let Some(n) = obj.get("level").and_then(value_as_i64) {
                *level = n.clamp(1, 6) as u8;
            }
            copy_str(obj, "text", text);
        }
        ComponentKind::Text { content } => copy_str(obj, "content", content),
        ComponentKind::Button { label } => copy_str(obj, "label", label),
        ComponentKind::Input { placeholder } => copy_str(obj, "placeholder", placeholder),
        ComponentKind::Checkbox { label } => copy_str(obj, "label", label),
        ComponentKind::Link { text, url } => {
            copy_str(obj, "text", text);
            copy_str(obj, "url", url);
        }
        ComponentKind::Code { content } => copy_str(obj, "content", content),
        ComponentKind::Container { children } => {
            if let Some(Value::Array(items)) = obj.get("children") {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(from_value(item)?);
                }
                *children = out;
            }
        }
    }
    Ok(())
}

fn copy_str(obj: &Map<String, Value>, key: &str, dst: &mut String) {
    if let Some(s) = obj.get(key).and_then(Value::as_str) {
        *dst = s.to_string();
    }
}

/// Numeric fields may be persisted as numbers or as the strings the
/// properties panel hands back.
fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reconstruct a root sequence with per-component error recovery: a bad
/// entry is skipped with a warning and reported, the rest of the tree
/// loads. Used at the load/restore boundary so one foreign component never
/// aborts startup.
pub fn load_roots(values: &[Value]) -> (Vec<Component>, Vec<CoreError>) {
    let mut roots = Vec::with_capacity(values.len());
    let mut errors = Vec::new();
    for value in values {
        match from_value(value) {
            Ok(component) => roots.push(component),
            Err(err) => {
                log::warn!("skipping unreadable component: {err}");
                errors.push(err);
            }
        }
    }
    (roots, errors)
}

/// The persistence payload: the serialized root sequence as one JSON string.
#[must_use]
pub fn document_payload(roots: &[Component]) -> String {
    serde_json::to_string(roots).expect("component JSON serialization cannot fail")
}

/// Parse a persistence payload back into roots plus per-component errors.
pub fn parse_payload(payload: &str) -> Result<(Vec<Component>, Vec<CoreError>), CoreError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| CoreError::MalformedPayload(err.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| CoreError::MalformedPayload("payload is not an array".into()))?;
    Ok(load_roots(items))
}
