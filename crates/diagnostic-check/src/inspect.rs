//! Decoding, checking and summarizing of a single message.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use pull_diagnostic_types::requests::{
    DiagnosticServerCancellationData, DocumentDiagnosticParams, DocumentDiagnosticReport,
    DocumentDiagnosticReportPartialResult, WorkspaceDiagnosticParams, WorkspaceDiagnosticReport,
    WorkspaceDiagnosticReportPartialResult, WorkspaceDocumentDiagnosticReport,
};
use pull_diagnostic_types::validation::{
    validate_document_report, validate_workspace_items, validate_workspace_report,
};
use pull_diagnostic_types::{
    DiagnosticClientCapabilities, DiagnosticServerCapabilities, DocumentDiagnosticReportKind,
};

use crate::config::{Config, Shape};
use crate::input::read_message;

/// What is known about the request a report answers.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub previous_result_id: Option<String>,
    pub workspace_params: WorkspaceDiagnosticParams,
}

impl RequestContext {
    pub fn from_config(config: &Config) -> Result<RequestContext> {
        let workspace_params = match &config.previous_result_ids {
            Some(path) => {
                let message = read_message(path)?;
                serde_json::from_str(&message).with_context(|| {
                    format!("invalid workspace-params message in {}", path.display())
                })?
            }
            None => WorkspaceDiagnosticParams::default(),
        };
        Ok(RequestContext {
            previous_result_id: config.previous_result_id.clone(),
            workspace_params,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Inspection {
    pub shape: Shape,
    pub summary: String,
    /// The message as it encodes after decoding.
    pub normalized: String,
}

impl Inspection {
    pub fn render(&self, normalize: bool) -> String {
        if normalize {
            self.normalized.clone()
        } else {
            format!("{}: {}", self.shape, self.summary)
        }
    }
}

/// Reads, inspects and renders the message named by `config`.
pub fn run(config: &Config) -> Result<String> {
    let request = RequestContext::from_config(config)?;
    let message = read_message(&config.input)?;
    let inspection = inspect(config.shape, &message, &request)?;
    info!("{} message is valid", config.shape);
    Ok(inspection.render(config.normalize))
}

pub fn inspect(shape: Shape, message: &str, request: &RequestContext) -> Result<Inspection> {
    match shape {
        Shape::DocumentParams => {
            let params: DocumentDiagnosticParams = decode(shape, message)?;
            let summary = format!(
                "{}, previous result id {}",
                params.text_document.uri,
                or_none(params.previous_result_id.as_deref())
            );
            finish(shape, &params, summary)
        }
        Shape::DocumentReport => {
            let report: DocumentDiagnosticReport = decode(shape, message)?;
            warn_unchecked_related(&report);
            validate_document_report(&report, request.previous_result_id.as_deref())
                .with_context(|| format!("invalid {} message", shape))?;
            let summary = describe_document_report(&report);
            finish(shape, &report, summary)
        }
        Shape::DocumentPartial => {
            let partial: DocumentDiagnosticReportPartialResult = decode(shape, message)?;
            let summary = format!("{} related documents", partial.related_documents.len());
            finish(shape, &partial, summary)
        }
        Shape::WorkspaceParams => {
            let params: WorkspaceDiagnosticParams = decode(shape, message)?;
            let summary = format!("{} previous result ids", params.previous_result_ids.len());
            finish(shape, &params, summary)
        }
        Shape::WorkspaceReport => {
            let report: WorkspaceDiagnosticReport = decode(shape, message)?;
            validate_workspace_report(&report, &request.workspace_params)
                .with_context(|| format!("invalid {} message", shape))?;
            let summary = describe_workspace_items(&report.items);
            finish(shape, &report, summary)
        }
        Shape::WorkspacePartial => {
            let partial: WorkspaceDiagnosticReportPartialResult = decode(shape, message)?;
            validate_workspace_items(&partial.items, &request.workspace_params)
                .with_context(|| format!("invalid {} message", shape))?;
            let summary = describe_workspace_items(&partial.items);
            finish(shape, &partial, summary)
        }
        Shape::CancellationData => {
            let data: DiagnosticServerCancellationData = decode(shape, message)?;
            let summary = format!("retrigger request {}", data.retrigger_request);
            finish(shape, &data, summary)
        }
        Shape::ClientCapabilities => {
            let capabilities: DiagnosticClientCapabilities = decode(shape, message)?;
            let summary = format!(
                "dynamic registration {}, related document support {}",
                or_unset(capabilities.dynamic_registration),
                or_unset(capabilities.related_document_support)
            );
            finish(shape, &capabilities, summary)
        }
        Shape::ServerCapabilities => {
            let capabilities: DiagnosticServerCapabilities = decode(shape, message)?;
            let form = match &capabilities {
                DiagnosticServerCapabilities::Options(_) => "options",
                DiagnosticServerCapabilities::RegistrationOptions(_) => "registration options",
            };
            let options = capabilities.options();
            let summary = format!(
                "{}, inter-file dependencies {}, workspace diagnostics {}",
                form, options.inter_file_dependencies, options.workspace_diagnostics
            );
            finish(shape, &capabilities, summary)
        }
    }
}

fn decode<T: DeserializeOwned>(shape: Shape, message: &str) -> Result<T> {
    debug!("decoding {} bytes as {}", message.len(), shape);
    serde_json::from_str(message).with_context(|| format!("invalid {} message", shape))
}

fn finish<T: Serialize>(shape: Shape, value: &T, summary: String) -> Result<Inspection> {
    let normalized = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to encode {} message", shape))?;
    Ok(Inspection {
        shape,
        summary,
        normalized,
    })
}

fn warn_unchecked_related(report: &DocumentDiagnosticReport) {
    for (uri, related) in report.related_documents().into_iter().flatten() {
        if related.kind() == DocumentDiagnosticReportKind::Unchanged {
            warn!(
                "unchanged report for related document {} cannot be checked against the request",
                uri
            );
        }
    }
}

fn describe_document_report(report: &DocumentDiagnosticReport) -> String {
    let related = report.related_documents().map_or(0, |related| related.len());
    match report {
        DocumentDiagnosticReport::Full(full) => format!(
            "full, result id {}, {} items, {} related documents",
            or_none(report.result_id()),
            full.full_document_diagnostic_report.items.len(),
            related
        ),
        DocumentDiagnosticReport::Unchanged(_) => format!(
            "unchanged, result id {}, {} related documents",
            or_none(report.result_id()),
            related
        ),
    }
}

fn describe_workspace_items(items: &[WorkspaceDocumentDiagnosticReport]) -> String {
    let unchanged = items
        .iter()
        .filter(|item| item.kind() == DocumentDiagnosticReportKind::Unchanged)
        .count();
    format!(
        "{} documents ({} full, {} unchanged)",
        items.len(),
        items.len() - unchanged,
        unchanged
    )
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("none")
}

fn or_unset(value: Option<bool>) -> String {
    value.map_or_else(|| "unset".to_string(), |value| value.to_string())
}
