//! Structural checks of diagnostic reports against the pull that produced them.
//!
//! Decoding already guarantees that every report carries a matching `kind`.
//! These checks cover what the types cannot express: an `unchanged` report is
//! only valid as an answer to a pull that named the same result id.

use std::collections::HashSet;
use std::fmt;

use crate::requests::{
    DocumentDiagnosticReport, WorkspaceDiagnosticParams, WorkspaceDiagnosticReport,
    WorkspaceDocumentDiagnosticReport,
};
use crate::URI;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportError {
    /// An unchanged report answers a pull that carried no previous result id.
    UnexpectedUnchanged { uri: Option<URI>, result_id: String },
    /// An unchanged report names another result id than the one the client sent.
    ResultIdMismatch {
        uri: Option<URI>,
        expected: String,
        found: String,
    },
    /// A result id is present but empty.
    EmptyResultId { uri: Option<URI> },
    /// The same document is reported more than once.
    DuplicateDocument { uri: URI },
}

struct Document<'a>(&'a Option<URI>);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(uri) => write!(f, "document {}", uri),
            None => f.write_str("the requested document"),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::UnexpectedUnchanged { uri, result_id } => write!(
                f,
                "unchanged report ({}) for {} but no previous result id was sent",
                result_id,
                Document(uri)
            ),
            ReportError::ResultIdMismatch {
                uri,
                expected,
                found,
            } => write!(
                f,
                "unchanged report for {} has result id {}, expected {}",
                Document(uri),
                found,
                expected
            ),
            ReportError::EmptyResultId { uri } => {
                write!(f, "empty result id in report for {}", Document(uri))
            }
            ReportError::DuplicateDocument { uri } => {
                write!(f, "document {} is reported more than once", uri)
            }
        }
    }
}

impl std::error::Error for ReportError {}

fn check_result_id(uri: &Option<URI>, result_id: Option<&str>) -> Result<(), ReportError> {
    match result_id {
        Some("") => Err(ReportError::EmptyResultId { uri: uri.clone() }),
        _ => Ok(()),
    }
}

fn check_unchanged(
    uri: Option<URI>,
    result_id: &str,
    previous_result_id: Option<&str>,
) -> Result<(), ReportError> {
    match previous_result_id {
        None => Err(ReportError::UnexpectedUnchanged {
            uri,
            result_id: result_id.to_string(),
        }),
        Some(previous) if previous != result_id => Err(ReportError::ResultIdMismatch {
            uri,
            expected: previous.to_string(),
            found: result_id.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Checks a `textDocument/diagnostic` response against the `previousResultId`
/// of the request it answers.
pub fn validate_document_report(
    report: &DocumentDiagnosticReport,
    previous_result_id: Option<&str>,
) -> Result<(), ReportError> {
    check_result_id(&None, report.result_id())?;
    if let DocumentDiagnosticReport::Unchanged(unchanged) = report {
        check_unchanged(
            None,
            &unchanged.unchanged_document_diagnostic_report.result_id,
            previous_result_id,
        )?;
    }
    for (uri, related) in report.related_documents().into_iter().flatten() {
        check_result_id(&Some(uri.clone()), related.result_id())?;
    }
    Ok(())
}

/// Checks the items of a `workspace/diagnostic` response (or of one partial
/// result) against the `previousResultIds` of the request.
pub fn validate_workspace_items(
    items: &[WorkspaceDocumentDiagnosticReport],
    params: &WorkspaceDiagnosticParams,
) -> Result<(), ReportError> {
    let mut seen = HashSet::new();
    for item in items {
        let uri = item.uri();
        if !seen.insert(uri) {
            return Err(ReportError::DuplicateDocument { uri: uri.clone() });
        }
        check_result_id(&Some(uri.clone()), item.result_id())?;
        if let WorkspaceDocumentDiagnosticReport::Unchanged(unchanged) = item {
            check_unchanged(
                Some(uri.clone()),
                &unchanged.unchanged_document_diagnostic_report.result_id,
                params.previous_result_id(uri),
            )?;
        }
    }
    Ok(())
}

pub fn validate_workspace_report(
    report: &WorkspaceDiagnosticReport,
    params: &WorkspaceDiagnosticParams,
) -> Result<(), ReportError> {
    validate_workspace_items(&report.items, params)
}
