//! Partner registration form engine.

pub mod errors;
pub mod path;
pub mod payload;
pub mod rules;
pub mod session;
pub mod validation;

pub use errors::FieldErrorSet;
pub use path::{FieldKind, FieldPath};
pub use payload::{Part, SubmissionPayload};
pub use session::{FormSession, SubmissionStatus};
