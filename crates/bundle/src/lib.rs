//! Wire/boundary support for patient record payloads.
//!
//! This crate provides **wire models** and **translation helpers** for the two
//! JSON payloads the roster consumes:
//! - the record bundle (`{ entry: [...] }`) backing the patient list
//! - the flat dashboard patient payload
//!
//! This crate focuses on:
//! - tolerant deserialisation (payloads come from foreign systems; unknown
//!   keys and missing optional fields must degrade, never fail)
//! - translation between the wire shapes and domain structs
//! - the display-name fallback policy applied everywhere a name is shown
//!
//! It contains no filtering or pagination logic; that lives in `roster-core`.

pub mod bundle;
pub mod dashboard;
pub mod name;

// Re-export facades
pub use bundle::Bundle;
pub use dashboard::Dashboard;

// Re-export public domain-level types
pub use bundle::{HumanName, RecordEntry};
pub use dashboard::{Appointment, Medication, Patient, TimelineEvent, Treatment, VitalSign};
pub use name::DisplayName;

/// Errors returned by the `roster-bundle` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// The payload was not valid JSON, or did not match the expected shape.
    /// The message carries a best-effort path to the failing field.
    #[error("invalid payload: {0}")]
    Parse(String),

    /// The payload parsed but carried no record entries.
    #[error("No patient data available")]
    EmptyBundle,

    /// The payload could not be read at all. Transport failures surface here;
    /// they are terminal for the load, with no retry.
    #[error("failed to read payload: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results that can fail with a [`BundleError`].
pub type BundleResult<T> = Result<T, BundleError>;

/// Deserialize `text` into `T`, reporting failures with a field path.
///
/// Used by both payload facades so every parse failure reads the same way,
/// e.g. `entry.1.resource.name: invalid type: string, expected a sequence`.
pub(crate) fn parse_with_path<T>(text: &str) -> BundleResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_str(text);
    match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            Err(BundleError::Parse(format!("{path}: {source}")))
        }
    }
}
