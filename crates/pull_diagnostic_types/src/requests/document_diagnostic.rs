use std::collections::HashMap;

use serde::de::{Error, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};

use crate::report_kind::deserialize_report;
use crate::requests::Request;
use crate::{
    Diagnostic, DocumentDiagnosticReportKind, FullKind, PartialResultParams,
    TextDocumentIdentifier, UnchangedKind, WorkDoneProgressParams, URI,
};

/// The document diagnostic request is sent from the client to the server to ask
/// the server to compute the diagnostics for a given document. As with other pull
/// requests the server is asked to compute the diagnostics for the currently
/// synced version of the document.
#[derive(Debug)]
pub enum DocumentDiagnosticRequest {}

impl Request for DocumentDiagnosticRequest {
    type Params = DocumentDiagnosticParams;
    type Result = DocumentDiagnosticReport;
    const METHOD: &'static str = "textDocument/diagnostic";
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDiagnosticParams {
    /// The text document.
    pub text_document: TextDocumentIdentifier,
    /// The additional identifier provided during registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The result id of a previous response if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_result_id: Option<String>,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

/// A diagnostic report with a full set of problems.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullDocumentDiagnosticReport {
    /// A full document diagnostic report.
    #[serde(default)]
    pub kind: FullKind,
    /// An optional result id. If provided it will
    /// be sent on the next diagnostic request for the
    /// same document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    /// The actual items.
    #[serde(default)]
    pub items: Vec<Diagnostic>,
}

impl FullDocumentDiagnosticReport {
    pub fn new(result_id: Option<String>, items: Vec<Diagnostic>) -> Self {
        Self {
            kind: FullKind,
            result_id,
            items,
        }
    }
}

/// A diagnostic report indicating that the last returned
/// report is still accurate.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnchangedDocumentDiagnosticReport {
    /// A document diagnostic report indicating
    /// no changes to the last result. A server can
    /// only return `unchanged` if result ids are
    /// provided.
    #[serde(default)]
    pub kind: UnchangedKind,
    /// A result id which will be sent on the next
    /// diagnostic request for the same document.
    pub result_id: String,
}

impl UnchangedDocumentDiagnosticReport {
    pub fn new(result_id: impl Into<String>) -> Self {
        Self {
            kind: UnchangedKind,
            result_id: result_id.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnchangedReportFields {
    #[serde(default)]
    kind: UnchangedKind,
    result_id: String,
    #[serde(default)]
    items: Option<IgnoredAny>,
}

// An unchanged report never carries items. Listing `items` as a field keeps the
// check working when the report is flattened into a larger one.
impl<'de> Deserialize<'de> for UnchangedDocumentDiagnosticReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = UnchangedReportFields::deserialize(deserializer)?;
        if fields.items.is_some() {
            return Err(D::Error::unknown_field("items", &["kind", "resultId"]));
        }
        Ok(Self {
            kind: fields.kind,
            result_id: fields.result_id,
        })
    }
}

/// The report of a single related document: either a full set of problems or
/// a confirmation that the previously reported set still holds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RelatedDocumentDiagnosticReport {
    Full(FullDocumentDiagnosticReport),
    Unchanged(UnchangedDocumentDiagnosticReport),
}

impl RelatedDocumentDiagnosticReport {
    pub fn kind(&self) -> DocumentDiagnosticReportKind {
        match self {
            Self::Full(_) => DocumentDiagnosticReportKind::Full,
            Self::Unchanged(_) => DocumentDiagnosticReportKind::Unchanged,
        }
    }

    pub fn result_id(&self) -> Option<&str> {
        match self {
            Self::Full(report) => report.result_id.as_deref(),
            Self::Unchanged(report) => Some(&report.result_id),
        }
    }
}

impl<'de> Deserialize<'de> for RelatedDocumentDiagnosticReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_report(deserializer, Self::Full, Self::Unchanged)
    }
}

impl From<FullDocumentDiagnosticReport> for RelatedDocumentDiagnosticReport {
    fn from(report: FullDocumentDiagnosticReport) -> Self {
        Self::Full(report)
    }
}

impl From<UnchangedDocumentDiagnosticReport> for RelatedDocumentDiagnosticReport {
    fn from(report: UnchangedDocumentDiagnosticReport) -> Self {
        Self::Unchanged(report)
    }
}

/// Diagnostics of related documents. This information is useful in programming
/// languages where code in a file A can generate diagnostics in a file B which A
/// depends on. An example of such a language is C/C++ where macro definitions in
/// a file a.cpp can result in errors in a header file b.hpp.
pub type RelatedDocuments = HashMap<URI, RelatedDocumentDiagnosticReport>;

/// A full diagnostic report with a set of related documents.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFullDocumentDiagnosticReport {
    #[serde(flatten)]
    pub full_document_diagnostic_report: FullDocumentDiagnosticReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<RelatedDocuments>,
}

/// An unchanged diagnostic report with a set of related documents.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedUnchangedDocumentDiagnosticReport {
    #[serde(flatten)]
    pub unchanged_document_diagnostic_report: UnchangedDocumentDiagnosticReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<RelatedDocuments>,
}

/// The result of a document diagnostic pull request. A report can
/// either be a full report containing all diagnostics for the
/// requested document or an unchanged report indicating that nothing
/// has changed in terms of diagnostics in comparison to the last
/// pull request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentDiagnosticReport {
    Full(RelatedFullDocumentDiagnosticReport),
    Unchanged(RelatedUnchangedDocumentDiagnosticReport),
}

impl DocumentDiagnosticReport {
    pub fn full(result_id: Option<String>, items: Vec<Diagnostic>) -> Self {
        Self::Full(RelatedFullDocumentDiagnosticReport {
            full_document_diagnostic_report: FullDocumentDiagnosticReport::new(result_id, items),
            related_documents: None,
        })
    }

    pub fn unchanged(result_id: impl Into<String>) -> Self {
        Self::Unchanged(RelatedUnchangedDocumentDiagnosticReport {
            unchanged_document_diagnostic_report: UnchangedDocumentDiagnosticReport::new(result_id),
            related_documents: None,
        })
    }

    pub fn with_related_documents(mut self, related: RelatedDocuments) -> Self {
        match &mut self {
            Self::Full(report) => report.related_documents = Some(related),
            Self::Unchanged(report) => report.related_documents = Some(related),
        }
        self
    }

    pub fn kind(&self) -> DocumentDiagnosticReportKind {
        match self {
            Self::Full(_) => DocumentDiagnosticReportKind::Full,
            Self::Unchanged(_) => DocumentDiagnosticReportKind::Unchanged,
        }
    }

    pub fn result_id(&self) -> Option<&str> {
        match self {
            Self::Full(report) => report.full_document_diagnostic_report.result_id.as_deref(),
            Self::Unchanged(report) => Some(&report.unchanged_document_diagnostic_report.result_id),
        }
    }

    pub fn related_documents(&self) -> Option<&RelatedDocuments> {
        match self {
            Self::Full(report) => report.related_documents.as_ref(),
            Self::Unchanged(report) => report.related_documents.as_ref(),
        }
    }
}

impl<'de> Deserialize<'de> for DocumentDiagnosticReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_report(deserializer, Self::Full, Self::Unchanged)
    }
}

impl From<RelatedFullDocumentDiagnosticReport> for DocumentDiagnosticReport {
    fn from(report: RelatedFullDocumentDiagnosticReport) -> Self {
        Self::Full(report)
    }
}

impl From<RelatedUnchangedDocumentDiagnosticReport> for DocumentDiagnosticReport {
    fn from(report: RelatedUnchangedDocumentDiagnosticReport) -> Self {
        Self::Unchanged(report)
    }
}

/// A partial result for a document diagnostic report.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDiagnosticReportPartialResult {
    #[serde(default)]
    pub related_documents: RelatedDocuments,
}
