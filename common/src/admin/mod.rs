//! Admin dashboard logic: listing normalization, search, statistics, the
//! generic detail renderer and card labels.

pub mod display;
pub mod envelope;
pub mod render;
pub mod search;
pub mod stats;

pub use envelope::{EntityKind, EnvelopeShape, NormalizedRecordList};
pub use render::{DefaultPolicy, DetailNode, DetailVisitor, DocumentKind, DocumentLink, RenderPolicy};
pub use stats::DashboardStats;
