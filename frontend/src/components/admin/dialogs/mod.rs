pub mod details;
pub mod document;
