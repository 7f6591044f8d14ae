//! Typed YAML header schema.
//!
//! Fields are deserialized loosely (as raw YAML values) and then narrowed,
//! so one badly shaped field degrades to its default instead of discarding
//! the whole header. Scalar fields are then read a second time as strings,
//! which keeps plain scalars as written (`1.10` stays `1.10`).

use serde::Deserialize;
use serde_yaml::Value;

use qindex_core::DocumentMetadata;

use super::{HeaderRules, HeaderWarning};

#[derive(Debug, Deserialize)]
struct RawHeader {
    title: Option<Value>,
    description: Option<Value>,
    categories: Option<Value>,
    children: Option<Value>,
}

#[derive(Deserialize)]
struct TitleSource {
    title: Option<String>,
}

#[derive(Deserialize)]
struct DescriptionSource {
    description: Option<String>,
}

#[derive(Deserialize)]
struct CategoriesSource {
    categories: Option<Vec<String>>,
}

/// Parse header text as YAML.
///
/// Returns `Err` with the parser message if the text is not a YAML mapping,
/// so the caller can fall back to line matching.
pub(crate) fn parse_yaml(
    text: &str,
    rules: &HeaderRules,
    warnings: &mut Vec<HeaderWarning>,
) -> Result<DocumentMetadata, String> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    let raw: RawHeader = match value {
        Value::Null => return Ok(DocumentMetadata::default()),
        Value::Mapping(_) => serde_yaml::from_value(value).map_err(|e| e.to_string())?,
        other => return Err(format!("expected a mapping, found {}", kind(&other))),
    };

    Ok(DocumentMetadata {
        title: text_field("title", raw.title, warnings, || {
            serde_yaml::from_str::<TitleSource>(text).ok()?.title
        }),
        description: text_field("description", raw.description, warnings, || {
            serde_yaml::from_str::<DescriptionSource>(text).ok()?.description
        }),
        categories: categories(raw.categories, warnings, || {
            serde_yaml::from_str::<CategoriesSource>(text).ok()?.categories
        }),
        children_paths: children(raw.children, &rules.child_prefix, warnings),
    })
}

fn text_field(
    field: &'static str,
    value: Option<Value>,
    warnings: &mut Vec<HeaderWarning>,
    source: impl FnOnce() -> Option<String>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => {
            source().or_else(|| scalar_text(&value))
        }
        Some(value) => {
            warnings.push(HeaderWarning::UnexpectedType {
                field,
                found: kind(&value),
            });
            None
        }
    }
}

fn categories(
    value: Option<Value>,
    warnings: &mut Vec<HeaderWarning>,
    source: impl FnOnce() -> Option<Vec<String>>,
) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(single)) => vec![single],
        Some(Value::Sequence(items)) => {
            match items.iter().map(scalar_text).collect::<Option<Vec<_>>>() {
                Some(list) if items.iter().all(Value::is_string) => list,
                Some(list) => source().unwrap_or(list),
                None => {
                    warnings.push(HeaderWarning::MalformedCategories {
                        detail: "list contains a non-scalar item".to_string(),
                    });
                    Vec::new()
                }
            }
        }
        Some(other) => {
            warnings.push(HeaderWarning::MalformedCategories {
                detail: format!("expected a list, found {}", kind(&other)),
            });
            Vec::new()
        }
    }
}

fn children(
    value: Option<Value>,
    prefix: &str,
    warnings: &mut Vec<HeaderWarning>,
) -> Vec<String> {
    let entries = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Sequence(items)) => items,
        Some(Value::String(single)) => vec![Value::String(single)],
        Some(other) => {
            warnings.push(HeaderWarning::UnexpectedType {
                field: "children",
                found: kind(&other),
            });
            return Vec::new();
        }
    };

    let mut paths = Vec::with_capacity(entries.len());
    for entry in &entries {
        match entry.as_str().map(str::trim) {
            Some(path) if path.starts_with(prefix) => paths.push(path.to_string()),
            Some(path) => warnings.push(HeaderWarning::IgnoredChild {
                entry: path.to_string(),
            }),
            None => warnings.push(HeaderWarning::IgnoredChild {
                entry: format!("<{}>", kind(entry)),
            }),
        }
    }
    paths
}

/// Normalized text form of a scalar; `None` for nulls, lists, and mappings.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        _ => "tagged value",
    }
}
