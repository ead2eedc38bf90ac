//! Error types shared by the form engine, the substation catalog and the
//! client configuration.
//!
//! Validation failures are not errors in the usual sense: they are collected
//! in a [`FieldErrorSet`] and only wrapped in [`SubmitError::Invalid`] when a
//! submission is refused because of them.

use thiserror::Error;

use crate::form::errors::FieldErrorSet;

/// Why an input-time edit was not stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The dotted path does not address any field of the registration record.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value was refused by the field's input rule; the previous value is kept.
    #[error("input rejected for {path}: {reason}")]
    Rejected { path: String, reason: Rejection },
}

/// Input-time rejection reasons.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("phone number longer than 10 digits")]
    PhoneTooLong,

    #[error("not a number")]
    NotNumeric,

    #[error("not one of the allowed choices")]
    UnknownChoice,
}

/// Why a submission did not complete.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Local validation failed; nothing was sent.
    #[error("please fix the errors in the form ({} field(s))", .0.len())]
    Invalid(FieldErrorSet),

    /// A submission from this form is still outstanding.
    #[error("a submission is already in progress")]
    InFlight,

    /// Nested parts of the record could not be encoded as JSON.
    #[error("could not encode submission: {0}")]
    Encode(String),

    /// The registration endpoint failed; the record is left untouched.
    #[error("submission failed: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Encode(err.to_string())
    }
}

/// Substation listing payloads that cannot be turned into a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("substation listing is not a list")]
    NotAList,

    #[error("unknown provider category: {0}")]
    UnknownCategory(String),
}

/// Invalid client configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api_base_url must not be blank")]
    BlankApiBase,

    #[error("toast_duration_ms must be greater than zero")]
    ZeroToastDuration,

    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Why the consumer roster was not sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardError {
    #[error("Please fill all consumer details")]
    IncompleteRows,

    #[error("could not encode consumers: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        OnboardError::Encode(err.to_string())
    }
}
