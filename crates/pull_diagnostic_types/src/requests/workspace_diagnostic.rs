use serde::{Deserialize, Deserializer, Serialize};

use crate::report_kind::deserialize_report;
use crate::requests::{FullDocumentDiagnosticReport, Request, UnchangedDocumentDiagnosticReport};
use crate::{DocumentDiagnosticReportKind, PartialResultParams, WorkDoneProgressParams, URI};

/// The workspace diagnostic request is sent from the client to the server to ask
/// the server to compute workspace wide diagnostics which previously were pushed
/// from the server to the client.
#[derive(Debug)]
pub enum WorkspaceDiagnosticRequest {}

impl Request for WorkspaceDiagnosticRequest {
    type Params = WorkspaceDiagnosticParams;
    type Result = WorkspaceDiagnosticReport;
    const METHOD: &'static str = "workspace/diagnostic";
}

/// A previous result id in a workspace pull request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousResultId {
    /// The URI for which the client knows a result id.
    pub uri: URI,
    /// The value of the previous result id.
    pub value: String,
}

impl PreviousResultId {
    pub fn new(uri: impl Into<URI>, value: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDiagnosticParams {
    /// The additional identifier provided during registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The currently known diagnostic reports with their
    /// previous result ids.
    #[serde(default)]
    pub previous_result_ids: Vec<PreviousResultId>,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

impl WorkspaceDiagnosticParams {
    /// The result id the client knows for `uri`, if any.
    pub fn previous_result_id(&self, uri: &URI) -> Option<&str> {
        self.previous_result_ids
            .iter()
            .find(|previous| &previous.uri == uri)
            .map(|previous| previous.value.as_str())
    }
}

/// A full document diagnostic report for a workspace diagnostic result.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFullDocumentDiagnosticReport {
    #[serde(flatten)]
    pub full_document_diagnostic_report: FullDocumentDiagnosticReport,
    /// The URI for which diagnostic information is reported.
    pub uri: URI,
    /// The version number for which the diagnostics are reported.
    /// Absent if the document is not marked as open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

/// An unchanged document diagnostic report for a workspace diagnostic result.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceUnchangedDocumentDiagnosticReport {
    #[serde(flatten)]
    pub unchanged_document_diagnostic_report: UnchangedDocumentDiagnosticReport,
    /// The URI for which diagnostic information is reported.
    pub uri: URI,
    /// The version number for which the diagnostics are reported.
    /// Absent if the document is not marked as open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

/// A workspace diagnostic document report.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkspaceDocumentDiagnosticReport {
    Full(WorkspaceFullDocumentDiagnosticReport),
    Unchanged(WorkspaceUnchangedDocumentDiagnosticReport),
}

impl WorkspaceDocumentDiagnosticReport {
    pub fn kind(&self) -> DocumentDiagnosticReportKind {
        match self {
            Self::Full(_) => DocumentDiagnosticReportKind::Full,
            Self::Unchanged(_) => DocumentDiagnosticReportKind::Unchanged,
        }
    }

    pub fn uri(&self) -> &URI {
        match self {
            Self::Full(report) => &report.uri,
            Self::Unchanged(report) => &report.uri,
        }
    }

    pub fn version(&self) -> Option<i32> {
        match self {
            Self::Full(report) => report.version,
            Self::Unchanged(report) => report.version,
        }
    }

    pub fn result_id(&self) -> Option<&str> {
        match self {
            Self::Full(report) => report.full_document_diagnostic_report.result_id.as_deref(),
            Self::Unchanged(report) => Some(&report.unchanged_document_diagnostic_report.result_id),
        }
    }
}

impl<'de> Deserialize<'de> for WorkspaceDocumentDiagnosticReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_report(deserializer, Self::Full, Self::Unchanged)
    }
}

impl From<WorkspaceFullDocumentDiagnosticReport> for WorkspaceDocumentDiagnosticReport {
    fn from(report: WorkspaceFullDocumentDiagnosticReport) -> Self {
        Self::Full(report)
    }
}

impl From<WorkspaceUnchangedDocumentDiagnosticReport> for WorkspaceDocumentDiagnosticReport {
    fn from(report: WorkspaceUnchangedDocumentDiagnosticReport) -> Self {
        Self::Unchanged(report)
    }
}

/// A workspace diagnostic report.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDiagnosticReport {
    #[serde(default)]
    pub items: Vec<WorkspaceDocumentDiagnosticReport>,
}

/// A partial result for a workspace diagnostic report.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDiagnosticReportPartialResult {
    #[serde(default)]
    pub items: Vec<WorkspaceDocumentDiagnosticReport>,
}

#[cfg(test)]
mod tests {
    use insta::assert_json_snapshot;

    use crate::tests::{test_deserialization, test_deserialization_error};
    use crate::{Diagnostic, DiagnosticSeverity, DiagnosticTag, Position, ProgressToken, Range};

    use super::*;

    fn workspace_full(uri: &str, version: Option<i32>) -> WorkspaceFullDocumentDiagnosticReport {
        WorkspaceFullDocumentDiagnosticReport {
            full_document_diagnostic_report: FullDocumentDiagnosticReport::new(
                Some("r1".to_string()),
                vec![Diagnostic::default()],
            ),
            uri: uri.into(),
            version,
        }
    }

    fn workspace_unchanged(uri: &str) -> WorkspaceUnchangedDocumentDiagnosticReport {
        WorkspaceUnchangedDocumentDiagnosticReport {
            unchanged_document_diagnostic_report: UnchangedDocumentDiagnosticReport::new("r2"),
            uri: uri.into(),
            version: None,
        }
    }

    #[test]
    fn workspace_diagnostic_method() {
        assert_eq!(WorkspaceDiagnosticRequest::METHOD, "workspace/diagnostic");
    }

    #[test]
    fn previous_result_id() {
        let test_data = PreviousResultId::new("file:///a.ts", "r1");

        assert_json_snapshot!(test_data,
            @r#"
        {
          "uri": "file:///a.ts",
          "value": "r1"
        }
        "#
        );
        test_deserialization(r#"{"uri":"file:///a.ts","value":"r1"}"#, &test_data);
    }

    #[test]
    fn workspace_diagnostic_params() {
        let test_data = WorkspaceDiagnosticParams {
            identifier: Some("test_identifier".to_string()),
            previous_result_ids: vec![PreviousResultId::new("file:///a.ts", "r1")],
            work_done_progress_params: WorkDoneProgressParams {
                work_done_token: Some(ProgressToken::Number(3)),
            },
            partial_result_params: PartialResultParams::default(),
        };

        assert_json_snapshot!(test_data,
            @r#"
        {
          "identifier": "test_identifier",
          "previousResultIds": [
            {
              "uri": "file:///a.ts",
              "value": "r1"
            }
          ],
          "workDoneToken": 3
        }
        "#
        );
        assert_json_snapshot!(WorkspaceDiagnosticParams::default(),
            @r#"
        {
          "previousResultIds": []
        }
        "#
        );
        test_deserialization("{}", &WorkspaceDiagnosticParams::default());
    }

    #[test]
    fn workspace_diagnostic_params_lookup() {
        let params = WorkspaceDiagnosticParams {
            previous_result_ids: vec![
                PreviousResultId::new("file:///a.ts", "r1"),
                PreviousResultId::new("file:///b.ts", "r2"),
            ],
            ..WorkspaceDiagnosticParams::default()
        };

        assert_eq!(params.previous_result_id(&"file:///b.ts".into()), Some("r2"));
        assert_eq!(params.previous_result_id(&"file:///c.ts".into()), None);
    }

    #[test]
    fn workspace_full_document_diagnostic_report() {
        assert_json_snapshot!(workspace_full("file:///a.ts", Some(4)),
            @r#"
        {
          "kind": "full",
          "resultId": "r1",
          "items": [
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
          ],
          "uri": "file:///a.ts",
          "version": 4
        }
        "#
        );
        assert_json_snapshot!(WorkspaceFullDocumentDiagnosticReport::default(),
            @r#"
        {
          "kind": "full",
          "items": [],
          "uri": ""
        }
        "#
        );
    }

    #[test]
    fn workspace_report_version_absent_is_not_zero() {
        let closed = workspace_full("file:///a.ts", None);
        let open = workspace_full("file:///a.ts", Some(0));
        assert_ne!(closed, open);

        let closed_json = serde_json::to_value(&closed).unwrap();
        let open_json = serde_json::to_value(&open).unwrap();
        assert!(closed_json.get("version").is_none());
        assert_eq!(open_json.get("version"), Some(&serde_json::json!(0)));

        test_deserialization(&closed_json.to_string(), &closed);
        test_deserialization(&open_json.to_string(), &open);
    }

    #[test]
    fn workspace_unchanged_document_diagnostic_report() {
        let test_data = WorkspaceUnchangedDocumentDiagnosticReport {
            version: Some(2),
            ..workspace_unchanged("file:///b.ts")
        };

        assert_json_snapshot!(test_data,
            @r#"
        {
          "kind": "unchanged",
          "resultId": "r2",
          "uri": "file:///b.ts",
          "version": 2
        }
        "#
        );
        test_deserialization(
            r#"{"kind":"unchanged","resultId":"r2","uri":"file:///b.ts","version":2}"#,
            &test_data,
        );
    }

    #[test]
    fn workspace_document_diagnostic_report() {
        test_deserialization(
            r#"{"kind":"unchanged","resultId":"r2","uri":"file:///b.ts","version":null}"#,
            &WorkspaceDocumentDiagnosticReport::Unchanged(workspace_unchanged("file:///b.ts")),
        );

        let error = test_deserialization_error::<WorkspaceDocumentDiagnosticReport>(
            r#"{"resultId":"r2","uri":"file:///b.ts"}"#,
        );
        assert!(error.contains("missing field `kind`"));

        let error = test_deserialization_error::<WorkspaceDocumentDiagnosticReport>(
            r#"{"kind":"full","items":[]}"#,
        );
        assert!(error.contains("missing field `uri`"));

        let report =
            WorkspaceDocumentDiagnosticReport::from(workspace_full("file:///a.ts", Some(1)));
        assert_eq!(report.kind(), DocumentDiagnosticReportKind::Full);
        assert_eq!(report.uri(), &URI::from("file:///a.ts"));
        assert_eq!(report.version(), Some(1));
        assert_eq!(report.result_id(), Some("r1"));
    }

    #[test]
    fn workspace_diagnostic_report() {
        let test_data = WorkspaceDiagnosticReport {
            items: vec![
                workspace_unchanged("file:///b.ts").into(),
                WorkspaceFullDocumentDiagnosticReport {
                    full_document_diagnostic_report: FullDocumentDiagnosticReport::default(),
                    uri: "file:///a.ts".into(),
                    version: None,
                }
                .into(),
            ],
        };

        assert_json_snapshot!(test_data,
            @r#"
        {
          "items": [
            {
              "kind": "unchanged",
              "resultId": "r2",
              "uri": "file:///b.ts"
            },
            {
              "kind": "full",
              "items": [],
              "uri": "file:///a.ts"
            }
          ]
        }
        "#
        );
        test_deserialization(
            r#"{"items":[{"kind":"unchanged","resultId":"r2","uri":"file:///b.ts"},{"kind":"full","items":[],"uri":"file:///a.ts"}]}"#,
            &test_data,
        );
        assert_json_snapshot!(WorkspaceDiagnosticReport::default(),
            @r#"
        {
          "items": []
        }
        "#
        );
    }

    #[test]
    fn workspace_diagnostic_report_with_populated_items() {
        let test_data = WorkspaceDiagnosticReport {
            items: vec![WorkspaceFullDocumentDiagnosticReport {
                full_document_diagnostic_report: FullDocumentDiagnosticReport::new(
                    Some("r3".to_string()),
                    vec![Diagnostic {
                        range: Range {
                            start: Position {
                                line: 4,
                                character: 0,
                            },
                            end: Position {
                                line: 4,
                                character: 12,
                            },
                        },
                        severity: Some(DiagnosticSeverity::Hint),
                        code: Some(lsp_types::NumberOrString::String("no-deprecated".to_string())),
                        message: "deprecated call".to_string(),
                        tags: Some(vec![DiagnosticTag::DEPRECATED, DiagnosticTag::new(7)]),
                        data: Some(serde_json::json!({"a": 1.5, "b": [-3]})),
                        ..Diagnostic::default()
                    }],
                ),
                uri: "file:///a.ts".into(),
                version: Some(0),
            }
            .into()],
        };

        test_deserialization(
            r#"{"items":[{"kind":"full","resultId":"r3","items":[{"range":{"start":{"line":4,"character":0},"end":{"line":4,"character":12}},"severity":4,"code":"no-deprecated","message":"deprecated call","tags":[2,7],"data":{"a":1.5,"b":[-3]}}],"uri":"file:///a.ts","version":0}]}"#,
            &test_data,
        );

        let encoded = serde_json::to_string(&test_data).unwrap();
        test_deserialization(&encoded, &test_data);
    }

    #[test]
    fn workspace_unchanged_report_rejects_items() {
        let error = test_deserialization_error::<WorkspaceDocumentDiagnosticReport>(
            r#"{"kind":"unchanged","resultId":"r2","items":[],"uri":"file:///b.ts"}"#,
        );
        assert!(error.contains("unknown field `items`"));

        let error = test_deserialization_error::<WorkspaceUnchangedDocumentDiagnosticReport>(
            r#"{"kind":"unchanged","resultId":"r2","items":[],"uri":"file:///b.ts"}"#,
        );
        assert!(error.contains("unknown field `items`"));
    }

    #[test]
    fn workspace_diagnostic_report_partial_result() {
        let test_data = WorkspaceDiagnosticReportPartialResult {
            items: vec![workspace_unchanged("file:///b.ts").into()],
        };

        assert_json_snapshot!(test_data,
            @r#"
        {
          "items": [
            {
              "kind": "unchanged",
              "resultId": "r2",
              "uri": "file:///b.ts"
            }
          ]
        }
        "#
        );
        test_deserialization("{}", &WorkspaceDiagnosticReportPartialResult::default());
    }
}
