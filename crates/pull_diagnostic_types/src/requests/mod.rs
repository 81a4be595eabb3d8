use serde::de::DeserializeOwned;
use serde::Serialize;

pub use document_diagnostic::*;
pub use server_cancellation::*;
pub use workspace_diagnostic::*;
pub use workspace_diagnostic_refresh::*;

mod document_diagnostic;
mod server_cancellation;
mod workspace_diagnostic;
mod workspace_diagnostic_refresh;

pub trait Request {
    type Params: DeserializeOwned + Serialize;
    type Result: DeserializeOwned + Serialize;
    const METHOD: &'static str;
}
