use crate::requests::Request;

/// The `workspace/diagnostic/refresh` request is sent from the server to the client.
/// Servers can use it to ask clients to refresh all needed document and workspace
/// diagnostics. This is useful if a server detects a project wide configuration
/// change which requires a re-calculation of all diagnostics.
///
/// Only sent to clients that advertise `refreshSupport` in their
/// [`DiagnosticWorkspaceClientCapabilities`](crate::DiagnosticWorkspaceClientCapabilities).
#[derive(Debug)]
pub enum WorkspaceDiagnosticRefresh {}

impl Request for WorkspaceDiagnosticRefresh {
    type Params = ();
    type Result = ();
    const METHOD: &'static str = "workspace/diagnostic/refresh";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_diagnostic_refresh_method() {
        assert_eq!(
            WorkspaceDiagnosticRefresh::METHOD,
            "workspace/diagnostic/refresh"
        );
    }
}
