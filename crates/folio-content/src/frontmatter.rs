//! YAML front matter at the top of Markdown documents.
//!
//! A document with front matter starts with a line holding only `---`,
//! followed by a YAML mapping, followed by another `---` line. Everything
//! after the closing marker is the body.

use serde_json::{Map, Value};
use thiserror::Error;

const MARKER: &str = "---";

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("opening '---' has no closing '---'")]
    Unclosed,
    #[error("front matter is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front matter must be a mapping, found {0}")]
    NotMapping(&'static str),
}

/// A document split into its front-matter data and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    /// Always a JSON object; empty when the document has no front matter.
    pub data: Value,
    pub body: String,
}

impl FrontMatter {
    fn body_only(text: &str) -> Self {
        Self {
            data: Value::Object(Map::new()),
            body: text.to_string(),
        }
    }
}

/// Split `text` into front matter and body.
///
/// # Errors
///
/// Returns an error when the opening marker is never closed, the block is
/// not YAML, or the YAML is not a mapping.
pub fn split_front_matter(text: &str) -> Result<FrontMatter, FrontMatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(FrontMatter::body_only(text));
    };
    if !is_marker(first) {
        return Ok(FrontMatter::body_only(text));
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_marker(line) {
            let data = parse_yaml(&text[yaml_start..offset])?;
            let body = text[offset + line.len()..].to_string();
            return Ok(FrontMatter { data, body });
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unclosed)
}

fn is_marker(line: &str) -> bool {
    line.trim_end() == MARKER
}

fn parse_yaml(yaml: &str) -> Result<Value, FrontMatterError> {
    if yaml.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Value::Object(Map::new())),
        value @ Value::Object(_) => Ok(value),
        Value::Array(_) => Err(FrontMatterError::NotMapping("a sequence")),
        Value::String(_) => Err(FrontMatterError::NotMapping("a string")),
        Value::Number(_) => Err(FrontMatterError::NotMapping("a number")),
        Value::Bool(_) => Err(FrontMatterError::NotMapping("a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn splits_data_and_body() {
        let doc = "---\ntitle: Edge cache\ndate: 2024-01-10\nfeatured: true\ntags:\n  - perf\n---\n\n# Heading\n\nBody.\n";
        let parsed = split_front_matter(doc).unwrap();
        assert_eq!(
            parsed.data,
            json!({
                "title": "Edge cache",
                "date": "2024-01-10",
                "featured": true,
                "tags": ["perf"]
            })
        );
        assert_eq!(parsed.body, "\n# Heading\n\nBody.\n");
    }

    #[test]
    fn document_without_front_matter_is_all_body() {
        let parsed = split_front_matter("# Just markdown\n").unwrap();
        assert_eq!(parsed.data, json!({}));
        assert_eq!(parsed.body, "# Just markdown\n");
    }

    #[test]
    fn empty_document_has_empty_data() {
        let parsed = split_front_matter("").unwrap();
        assert_eq!(parsed.data, json!({}));
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn empty_block_is_empty_mapping() {
        let parsed = split_front_matter("---\n---\nbody").unwrap();
        assert_eq!(parsed.data, json!({}));
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn handles_crlf_and_bom() {
        let parsed = split_front_matter("\u{feff}---\r\ntitle: x\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(parsed.data, json!({ "title": "x" }));
        assert_eq!(parsed.body, "body\r\n");
    }

    #[test]
    fn unclosed_marker_is_an_error() {
        let err = split_front_matter("---\ntitle: x\nbody").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unclosed));
    }

    #[test]
    fn non_mapping_block_is_an_error() {
        let err = split_front_matter("---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotMapping("a sequence")));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = split_front_matter("---\ntitle: [unterminated\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn horizontal_rule_in_body_is_not_a_marker() {
        let parsed = split_front_matter("---\ntitle: x\n---\nabove\n---\nbelow\n").unwrap();
        assert_eq!(parsed.body, "above\n---\nbelow\n");
    }
}
