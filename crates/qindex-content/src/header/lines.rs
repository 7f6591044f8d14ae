//! Line-prefix fallback for headers that are not valid YAML.
//!
//! Each trimmed line is matched against these prefixes, first match wins:
//!
//! | Prefix | Field |
//! |--------|-------|
//! | `title:` | title, one surrounding `"` pair stripped |
//! | `description:` | description, same rule |
//! | `categories:` | categories, parsed as a YAML flow list |
//! | `- <child prefix>` | one child path |
//!
//! Anything else is ignored.

use qindex_core::DocumentMetadata;

use super::{HeaderRules, HeaderWarning};

/// Recover metadata from header lines by key prefix.
pub fn parse_lines(
    lines: &[String],
    rules: &HeaderRules,
    warnings: &mut Vec<HeaderWarning>,
) -> DocumentMetadata {
    let child_marker = format!("- {}", rules.child_prefix);
    let mut metadata = DocumentMetadata::default();

    for line in lines.iter().map(|line| line.trim()) {
        if let Some(rest) = line.strip_prefix("title:") {
            metadata.title = Some(unquote(rest.trim()).to_string());
        } else if let Some(rest) = line.strip_prefix("description:") {
            metadata.description = Some(unquote(rest.trim()).to_string());
        } else if let Some(rest) = line.strip_prefix("categories:") {
            metadata.categories = flow_list(rest.trim(), warnings);
        } else if line.starts_with(&child_marker) {
            let path = line.strip_prefix('-').unwrap_or(line).trim();
            metadata.children_paths.push(path.to_string());
        }
    }

    metadata
}

/// Strip at most one leading and one trailing double quote.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn flow_list(text: &str, warnings: &mut Vec<HeaderWarning>) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    match serde_yaml::from_str::<Vec<String>>(text) {
        Ok(list) => list,
        Err(e) => {
            warnings.push(HeaderWarning::MalformedCategories {
                detail: e.to_string(),
            });
            Vec::new()
        }
    }
}
