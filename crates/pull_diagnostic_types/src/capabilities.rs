use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    DiagnosticTag, StaticRegistrationOptions, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions,
};

/// Client capabilities specific to diagnostic pull requests.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticClientCapabilities {
    /// General diagnostic capabilities shared with the push model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticsCapabilities>,
    /// Whether implementation supports dynamic registration. If this is set to `true`
    /// the client supports the new `(TextDocumentRegistrationOptions & StaticRegistrationOptions)`
    /// return value for the corresponding server capability as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Whether the clients supports related documents for document diagnostic pulls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_document_support: Option<bool>,
}

/// General diagnostics capabilities for pull and push model.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsCapabilities {
    /// Whether the clients accepts diagnostics with related information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_information: Option<bool>,
    /// Client supports the tag property to provide meta data about a diagnostic.
    /// Clients supporting tags have to handle unknown tags gracefully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<DiagnosticTagSupport>,
    /// Client supports a codeDescription property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_description_support: Option<bool>,
    /// Whether code action supports the `data` property which is
    /// preserved between a `textDocument/diagnostic` and a
    /// `textDocument/codeAction` request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_support: Option<bool>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticTagSupport {
    /// The tags supported by the client.
    pub value_set: Vec<DiagnosticTag>,
}

/// Workspace client capabilities specific to diagnostic pull requests.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticWorkspaceClientCapabilities {
    /// Whether the client implementation supports a refresh request sent from
    /// the server to the client.
    ///
    /// Note that this event is global and will force the client to refresh all
    /// pulled diagnostics currently shown. It should be used with absolute care and
    /// is useful for situation where a server for example detects a project wide
    /// change that requires such a calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

/// Diagnostic options.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticOptions {
    /// An optional identifier under which the diagnostics are
    /// managed by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Whether the language has inter file dependencies meaning that
    /// editing code in one file can result in a different diagnostic
    /// set in another file. Inter file dependencies are common for
    /// most programming languages and typically uncommon for linters.
    #[serde(default)]
    pub inter_file_dependencies: bool,
    /// The server provides support for workspace diagnostics as well.
    #[serde(default)]
    pub workspace_diagnostics: bool,
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

/// Diagnostic registration options.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub diagnostic_options: DiagnosticOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

/// What a server advertises as its `diagnosticProvider`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(untagged)]
pub enum DiagnosticServerCapabilities {
    RegistrationOptions(DiagnosticRegistrationOptions),
    Options(DiagnosticOptions),
}

impl DiagnosticServerCapabilities {
    pub fn options(&self) -> &DiagnosticOptions {
        match self {
            Self::Options(options) => options,
            Self::RegistrationOptions(registration) => &registration.diagnostic_options,
        }
    }
}

// Registration options are told apart by their `documentSelector`, which the
// protocol requires to be present even when it is null.
impl<'de> Deserialize<'de> for DiagnosticServerCapabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let capabilities = if value.get("documentSelector").is_some() {
            DiagnosticRegistrationOptions::deserialize(value).map(Self::RegistrationOptions)
        } else {
            DiagnosticOptions::deserialize(value).map(Self::Options)
        };
        capabilities.map_err(D::Error::custom)
    }
}

impl From<DiagnosticOptions> for DiagnosticServerCapabilities {
    fn from(options: DiagnosticOptions) -> Self {
        Self::Options(options)
    }
}

impl From<DiagnosticRegistrationOptions> for DiagnosticServerCapabilities {
    fn from(options: DiagnosticRegistrationOptions) -> Self {
        Self::RegistrationOptions(options)
    }
}
