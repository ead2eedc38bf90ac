use serde::{Deserialize, Serialize};

/// Metadata of a file picked in the browser. The bytes stay with the host
/// (a `web_sys::File` in the frontend) and are attached at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size,
        }
    }
}
