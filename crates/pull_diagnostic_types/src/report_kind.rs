use std::fmt;

use serde::de::{DeserializeOwned, Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The document diagnostic report kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentDiagnosticReportKind {
    /// A diagnostic report with a full set of problems.
    Full,
    /// A report indicating that the last returned report is still accurate.
    Unchanged,
}

impl DocumentDiagnosticReportKind {
    pub const FULL: &'static str = "full";
    pub const UNCHANGED: &'static str = "unchanged";

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentDiagnosticReportKind::Full => Self::FULL,
            DocumentDiagnosticReportKind::Unchanged => Self::UNCHANGED,
        }
    }
}

impl fmt::Display for DocumentDiagnosticReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserializes a kind and fails unless it is `expected`.
fn expect_kind<'de, D>(
    deserializer: D,
    expected: DocumentDiagnosticReportKind,
) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
{
    let kind = DocumentDiagnosticReportKind::deserialize(deserializer)?;
    if kind != expected {
        return Err(D::Error::invalid_value(
            Unexpected::Str(kind.as_str()),
            &expected.as_str(),
        ));
    }
    Ok(())
}

/// The `kind` field of a full report. Always encodes as `"full"` and refuses
/// to decode anything else.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FullKind;

impl From<FullKind> for DocumentDiagnosticReportKind {
    fn from(_: FullKind) -> Self {
        DocumentDiagnosticReportKind::Full
    }
}

impl Serialize for FullKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentDiagnosticReportKind::Full.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FullKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        expect_kind(deserializer, DocumentDiagnosticReportKind::Full).map(|()| FullKind)
    }
}

/// The `kind` field of an unchanged report. Always encodes as `"unchanged"` and
/// refuses to decode anything else.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct UnchangedKind;

impl From<UnchangedKind> for DocumentDiagnosticReportKind {
    fn from(_: UnchangedKind) -> Self {
        DocumentDiagnosticReportKind::Unchanged
    }
}

impl Serialize for UnchangedKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentDiagnosticReportKind::Unchanged.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnchangedKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        expect_kind(deserializer, DocumentDiagnosticReportKind::Unchanged).map(|()| UnchangedKind)
    }
}

/// Reads the `kind` discriminator of a report that has already been buffered
/// as a JSON value. Used by the report unions to pick a variant.
pub(crate) fn kind_of<E: Error>(
    value: &serde_json::Value,
) -> Result<DocumentDiagnosticReportKind, E> {
    match value.get("kind") {
        None | Some(serde_json::Value::Null) => Err(E::missing_field("kind")),
        Some(serde_json::Value::String(kind)) => match kind.as_str() {
            DocumentDiagnosticReportKind::FULL => Ok(DocumentDiagnosticReportKind::Full),
            DocumentDiagnosticReportKind::UNCHANGED => Ok(DocumentDiagnosticReportKind::Unchanged),
            other => Err(E::unknown_variant(
                other,
                &[
                    DocumentDiagnosticReportKind::FULL,
                    DocumentDiagnosticReportKind::UNCHANGED,
                ],
            )),
        },
        Some(other) => Err(E::invalid_type(unexpected(other), &"a report kind string")),
    }
}

/// Decodes one of the two report shapes, chosen by the `kind` discriminator.
/// A missing or unknown `kind` is an error.
pub(crate) fn deserialize_report<'de, D, F, U, T>(
    deserializer: D,
    full: impl FnOnce(F) -> T,
    unchanged: impl FnOnce(U) -> T,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    F: DeserializeOwned,
    U: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let report = match kind_of::<D::Error>(&value)? {
        DocumentDiagnosticReportKind::Full => F::deserialize(value).map(full),
        DocumentDiagnosticReportKind::Unchanged => U::deserialize(value).map(unchanged),
    };
    report.map_err(D::Error::custom)
}

fn unexpected(value: &serde_json::Value) -> Unexpected<'_> {
    match value {
        serde_json::Value::Null => Unexpected::Unit,
        serde_json::Value::Bool(b) => Unexpected::Bool(*b),
        serde_json::Value::Number(_) => Unexpected::Other("number"),
        serde_json::Value::String(s) => Unexpected::Str(s),
        serde_json::Value::Array(_) => Unexpected::Seq,
        serde_json::Value::Object(_) => Unexpected::Map,
    }
}
