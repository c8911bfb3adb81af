//! Page document: the JSON value fetched for one selection
//!
//! Only input that fails to parse, or a bare `null`, aborts the update. Any
//! other non-object value is a document without `html_abbrev`.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed page document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("page document is null")]
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub html_abbrev: Option<Value>,
}

impl PageDocument {
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Null => Err(DocumentError::Null),
            Value::Object(mut fields) => Ok(Self {
                html_abbrev: fields.remove("html_abbrev"),
            }),
            other => {
                tracing::warn!("Page document is not an object: {}", other);
                Ok(Self { html_abbrev: None })
            }
        }
    }

    /// Fragment text for the panel.
    ///
    /// A missing or null `html_abbrev` yields an empty fragment; non-string
    /// values are embedded as their JSON text.
    pub fn abbrev_html(&self) -> String {
        match &self.html_abbrev {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn has_abbrev(&self) -> bool {
        matches!(self.html_abbrev, Some(Value::String(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_abbrev() {
        let doc = PageDocument::parse(r#"{"html_abbrev":"<b>hi</b>","html":"<p>x</p>"}"#).unwrap();
        assert!(doc.has_abbrev());
        assert_eq!(doc.abbrev_html(), "<b>hi</b>");
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            PageDocument::parse("{html_abbrev:}"),
            Err(DocumentError::Malformed(_))
        ));
        assert!(PageDocument::parse("").is_err());
    }

    #[test]
    fn test_null_document_fails() {
        assert!(matches!(PageDocument::parse("null"), Err(DocumentError::Null)));
    }

    #[test]
    fn test_missing_field_is_empty() {
        let doc = PageDocument::parse(r#"{"title":"1r"}"#).unwrap();
        assert!(!doc.has_abbrev());
        assert_eq!(doc.abbrev_html(), "");

        let doc = PageDocument::parse(r#"{"html_abbrev":null}"#).unwrap();
        assert_eq!(doc.abbrev_html(), "");
    }

    #[test]
    fn test_non_object_documents_have_no_abbrev() {
        for raw in [r#"["x"]"#, r#""x""#, "7", "true"] {
            let doc = PageDocument::parse(raw).unwrap();
            assert!(!doc.has_abbrev(), "{}", raw);
            assert_eq!(doc.abbrev_html(), "", "{}", raw);
        }
    }

    #[test]
    fn test_non_string_abbrev_as_json_text() {
        let doc = PageDocument::parse(r#"{"html_abbrev":42}"#).unwrap();
        assert_eq!(doc.abbrev_html(), "42");

        let doc = PageDocument::parse(r#"{"html_abbrev":{"a":1}}"#).unwrap();
        assert_eq!(doc.abbrev_html(), r#"{"a":1}"#);
    }
}
