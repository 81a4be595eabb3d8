//! Command line configuration of the inspector.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// The protocol shape a message is decoded as.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Shape {
    /// `textDocument/diagnostic` request params.
    DocumentParams,
    /// `textDocument/diagnostic` response.
    DocumentReport,
    /// `textDocument/diagnostic` partial result.
    DocumentPartial,
    /// `workspace/diagnostic` request params.
    WorkspaceParams,
    /// `workspace/diagnostic` response.
    WorkspaceReport,
    /// `workspace/diagnostic` partial result.
    WorkspacePartial,
    /// `data` of a server cancelled error.
    CancellationData,
    /// `textDocument.diagnostic` client capabilities.
    ClientCapabilities,
    /// `diagnosticProvider` server capabilities.
    ServerCapabilities,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "diagnostic-check", version, about)]
pub struct Config {
    /// How to interpret the message.
    #[arg(value_enum)]
    pub shape: Shape,

    /// JSON file holding the message, `-` for stdin.
    pub input: PathBuf,

    /// The `previousResultId` of the request a document report answers.
    #[arg(long)]
    pub previous_result_id: Option<String>,

    /// A `workspace/diagnostic` params file holding the `previousResultIds`
    /// of the request a workspace report answers.
    #[arg(long)]
    pub previous_result_ids: Option<PathBuf>,

    /// Print the re-encoded message instead of a summary.
    #[arg(long)]
    pub normalize: bool,

    #[arg(long, env = "DIAGNOSTIC_CHECK_LOG", default_value = "warn")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Shape::DocumentParams, "document-params" ; "document_params")]
    #[test_case(Shape::WorkspaceReport, "workspace-report" ; "workspace_report")]
    #[test_case(Shape::CancellationData, "cancellation-data" ; "cancellation_data")]
    fn shape_display(shape: Shape, expected: &str) {
        assert_eq!(shape.to_string(), expected);
    }

    #[test]
    fn parse_arguments() {
        let config = Config::try_parse_from([
            "diagnostic-check",
            "document-report",
            "report.json",
            "--previous-result-id",
            "r1",
            "--normalize",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.shape, Shape::DocumentReport);
        assert_eq!(config.input, PathBuf::from("report.json"));
        assert_eq!(config.previous_result_id.as_deref(), Some("r1"));
        assert!(config.previous_result_ids.is_none());
        assert!(config.normalize);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn reject_unknown_shape() {
        let result = Config::try_parse_from(["diagnostic-check", "publish", "report.json"]);
        assert!(result.is_err());
    }
}
