use serde::{Deserialize, Serialize};

/// The error code of a response to a diagnostic pull that the server cancelled.
/// The `data` of such an error is a [`DiagnosticServerCancellationData`].
pub const SERVER_CANCELLED: i32 = -32802;

/// Cancellation data returned from a diagnostic request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticServerCancellationData {
    /// Whether the client should send the same pull again.
    #[serde(default)]
    pub retrigger_request: bool,
}
