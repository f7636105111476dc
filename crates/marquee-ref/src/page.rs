//! Reference page documents.

use serde::Deserialize;

use crate::entry::Entry;

/// A parsed reference page: an authored YAML document listing the entries
/// to render, plus page-level presentation fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferencePage {
    /// Page title
    pub title: String,

    /// Intro text shown above the entry list (markdown)
    #[serde(default)]
    pub intro: Option<String>,

    /// Order among sibling pages (lower = first)
    #[serde(default)]
    pub order: Option<i32>,

    /// Custom slug override for the output path
    #[serde(default)]
    pub slug: Option<String>,

    /// Entries in authored order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl ReferencePage {
    /// Parse a reference page from YAML source.
    pub fn parse(source: &str) -> Result<Self, RefError> {
        serde_yaml::from_str(source).map_err(|e| RefError::InvalidDocument(e.to_string()))
    }
}

/// Errors that can occur when loading reference content.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("Invalid reference document: {0}")]
    InvalidDocument(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Kind;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_reference_page() {
        let source = r#"
title: Web.Request
intro: Builders for the request side of a route.
order: 2
entries:
  - kind: function
    name: capture
    signature: "capture :: FromParam a => Text -> PathSpec a"
    module: Web.Request.Path
    since: "0.1"
  - kind: data
    name: Method
    constructors:
      - name: GET
      - name: POST
    instances:
      - instance Show Method
  - kind: class
    name: FromParam
    params: [a]
    methods:
      - name: fromParam
        signature: "fromParam :: Text -> Maybe a"
"#;

        let page = ReferencePage::parse(source).unwrap();

        assert_eq!(page.title, "Web.Request");
        assert_eq!(page.order, Some(2));
        assert_eq!(page.entries.len(), 3);

        assert_eq!(page.entries[0].kind(), Kind::Function);
        assert_eq!(page.entries[0].name(), "capture");
        assert!(page.entries[0].has_details());

        assert_eq!(page.entries[1].kind(), Kind::Data);
        assert_eq!(page.entries[1].signature(), "data Method");

        assert_eq!(page.entries[2].kind(), Kind::Class);
        assert_eq!(page.entries[2].signature(), "class FromParam a where");
    }

    #[test]
    fn record_fields_parse_with_type_rename() {
        let source = r#"
title: Types
entries:
  - kind: data
    name: User
    constructors:
      - name: User
        fields:
          - name: userId
            type: Int
          - name: userName
            type: Text
"#;

        let page = ReferencePage::parse(source).unwrap();

        let Entry::Data(ref data) = page.entries[0] else {
            panic!("expected data entry");
        };
        assert_eq!(data.constructors[0].fields.len(), 2);
        assert_eq!(data.constructors[0].fields[1].ty, "Text");
    }

    #[test]
    fn rejects_unknown_kind() {
        let source = r#"
title: Broken
entries:
  - kind: macro
    name: nope
"#;

        let result = ReferencePage::parse(source);

        assert!(matches!(result, Err(RefError::InvalidDocument(_))));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let result = ReferencePage::parse("title: [unclosed");

        assert!(matches!(result, Err(RefError::InvalidDocument(_))));
    }
}
