//! Implementation of the [pull diagnostics structures](https://microsoft.github.io/language-server-protocol/specifications/lsp/3.17/specification/#textDocument_pullDiagnostics) in Rust.

pub use basic_lsp_structures::*;
pub use capabilities::*;
pub use diagnostic::*;
pub use report_kind::*;

pub mod basic_lsp_structures;
pub mod capabilities;
pub mod diagnostic;
pub mod report_kind;
pub mod requests;
pub mod validation;

pub mod tests {
    use serde::Deserialize;

    pub fn test_deserialization<T>(json: &str, expected: &T)
    where
        T: for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
    {
        let value = serde_json::from_str::<T>(json).unwrap();
        assert_eq!(&value, expected);
    }

    pub fn test_deserialization_error<T>(json: &str) -> String
    where
        T: for<'de> Deserialize<'de> + std::fmt::Debug,
    {
        serde_json::from_str::<T>(json).unwrap_err().to_string()
    }
}
