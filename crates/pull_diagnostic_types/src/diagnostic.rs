use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{Location, Range, URI};

/// Represents a diagnostic, such as a compiler error or warning.
/// Diagnostic objects are only valid in the scope of a resource.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The range at which the message applies.
    pub range: Range,
    /// The diagnostic's severity. Can be omitted. If omitted it is up to the
    /// client to interpret diagnostics as error, warning, info or hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    /// The diagnostic's code, which might appear in the user interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<lsp_types::NumberOrString>,
    /// An optional property to describe the error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_description: Option<CodeDescription>,
    /// A human-readable string describing the source of this
    /// diagnostic, e.g. 'typescript' or 'super lint'.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The diagnostic's message.
    pub message: String,
    /// Additional metadata about the diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<DiagnosticTag>>,
    /// An array of related diagnostic information, e.g. when symbol-names within
    /// a scope collide all definitions can be marked via this property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    /// A data entry field that is preserved between a `textDocument/diagnostic`
    /// response and a `textDocument/codeAction` request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Diagnostic {
    pub fn new(
        range: Range,
        severity: Option<DiagnosticSeverity>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Structure to capture a description for an error code.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeDescription {
    /// An URI to open with more information about the diagnostic error.
    pub href: URI,
}

/// Represents a related message and source code location for a diagnostic.
/// This should be used to point to code locations that cause or are related to
/// a diagnostics, e.g when duplicating a symbol in a scope.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRelatedInformation {
    /// The location of this related diagnostic information.
    pub location: Location,
    /// The message of this related diagnostic information.
    pub message: String,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(u8)]
pub enum DiagnosticSeverity {
    /// Reports an error.
    Error = 1,
    /// Reports a warning.
    Warning = 2,
    /// Reports an information.
    Information = 3,
    /// Reports a hint.
    Hint = 4,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticTag(pub i32);

impl DiagnosticTag {
    /// Unused or unnecessary code.
    ///
    /// Clients are allowed to render diagnostics with this tag faded out instead of having an error squiggle.
    pub const UNNECESSARY: DiagnosticTag = DiagnosticTag::new(1);
    /// Deprecated or obsolete code.
    ///
    /// Clients are allowed to rendered diagnostics with this tag strike through.
    pub const DEPRECATED: DiagnosticTag = DiagnosticTag::new(2);

    pub const fn new(tag: i32) -> Self {
        Self(tag)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_json_snapshot;

    use crate::tests::test_deserialization;
    use crate::Position;

    use super::*;

    #[test]
    fn diagnostic() {
        let test_data = Diagnostic {
            range: Range::default(),
            severity: Some(DiagnosticSeverity::Warning),
            code: Some(lsp_types::NumberOrString::String("E0308".to_string())),
            code_description: Some(CodeDescription {
                href: "https://doc.rust-lang.org/error_codes/E0308.html".into(),
            }),
            source: Some("rustc".to_string()),
            message: "mismatched types".to_string(),
            tags: Some(vec![DiagnosticTag::UNNECESSARY]),
            related_information: Some(vec![DiagnosticRelatedInformation::default()]),
            data: Some(serde_json::json!({"fix": "cast"})),
        };

        assert_json_snapshot!(test_data,
            @r#"
        {
          "range": {
            "start": {
              "line": 0,
              "character": 0
            },
            "end": {
              "line": 0,
              "character": 0
            }
          },
          "severity": 2,
          "code": "E0308",
          "codeDescription": {
            "href": "https://doc.rust-lang.org/error_codes/E0308.html"
          },
          "source": "rustc",
          "message": "mismatched types",
          "tags": [
            1
          ],
          "relatedInformation": [
            {
              "location": {
                "uri": "",
                "range": {
                  "start": {
                    "line": 0,
                    "character": 0
                  },
                  "end": {
                    "line": 0,
                    "character": 0
                  }
                }
              },
              "message": ""
            }
          ],
          "data": {
            "fix": "cast"
          }
        }
        "#
        );
    }

    #[test]
    fn diagnostic_default() {
        assert_json_snapshot!(Diagnostic::default(),
            @r#"
        {
          "range": {
            "start": {
              "line": 0,
              "character": 0
            },
            "end": {
              "line": 0,
              "character": 0
            }
          },
          "message": ""
        }
        "#
        );
    }

    #[test]
    fn diagnostic_with_numeric_code() {
        test_deserialization(
            r#"{"range":{"start":{"line":2,"character":0},"end":{"line":2,"character":5}},"code":42,"message":"unused"}"#,
            &Diagnostic {
                range: Range {
                    start: Position {
                        line: 2,
                        character: 0,
                    },
                    end: Position {
                        line: 2,
                        character: 5,
                    },
                },
                code: Some(lsp_types::NumberOrString::Number(42)),
                message: "unused".to_string(),
                ..Diagnostic::default()
            },
        );
    }

    #[test]
    fn diagnostic_severity() {
        assert_json_snapshot!(DiagnosticSeverity::Error, @"1");
        assert_json_snapshot!(DiagnosticSeverity::Warning, @"2");
        assert_json_snapshot!(DiagnosticSeverity::Information, @"3");
        assert_json_snapshot!(DiagnosticSeverity::Hint, @"4");
    }

    #[test]
    fn diagnostic_tag() {
        assert_json_snapshot!(DiagnosticTag::UNNECESSARY, @"1");
        assert_json_snapshot!(DiagnosticTag::DEPRECATED, @"2");
        test_deserialization("2", &DiagnosticTag::DEPRECATED);
    }
}
