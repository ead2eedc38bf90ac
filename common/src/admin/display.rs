//! Labels for cards and the detail modal.

use serde_json::Value;

use super::envelope::EntityKind;
use super::render::{DocumentKind, DocumentLink};
use super::search::field_text;

pub const NOT_AVAILABLE: &str = "N/A";

const IMAGE_FILE_TYPES: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

pub fn display_name(kind: EntityKind, record: &Value) -> String {
    let (aliases, fallback): (&[&str], &str) = match kind {
        EntityKind::Consumers => (&["Name", "name"], "Unnamed Consumer"),
        EntityKind::Partners | EntityKind::Associates => (&["name", "Name"], "Unnamed User"),
    };
    or_fallback(field_text(record, aliases), fallback)
}

pub fn role_label(kind: EntityKind, record: &Value) -> String {
    let fallback = match kind {
        EntityKind::Consumers => "Consumer",
        EntityKind::Partners => "Partners",
        EntityKind::Associates => "Associates",
    };
    or_fallback(field_text(record, &["role"]), fallback)
}

/// Text of `key`, or `fallback` when it is absent or empty.
pub fn text_or(record: &Value, key: &str, fallback: &str) -> String {
    or_fallback(field_text(record, &[key]), fallback)
}

fn or_fallback(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Ten-digit numbers are grouped as `98765 43210`; others are shown as is.
pub fn format_mobile(record: &Value) -> String {
    let mobile = field_text(record, &["mobile"]);
    if mobile.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    if mobile.len() == 10 && mobile.is_ascii() {
        let (head, tail) = mobile.split_at(5);
        format!("{} {}", head, tail)
    } else {
        mobile
    }
}

pub fn files(record: &Value) -> &[Value] {
    record
        .get("files")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn files_count(record: &Value) -> usize {
    files(record).len()
}

/// Card label of an uploaded consumer file.
pub fn file_label(file: &Value) -> &'static str {
    match file_type(file).as_str() {
        "jpg" | "jpeg" | "png" => "Image",
        "pdf" => "PDF Document",
        _ => "Document",
    }
}

/// Viewer link of an uploaded file, classified by its declared type.
pub fn file_document(file: &Value) -> Option<DocumentLink> {
    let url = file.get("url").and_then(Value::as_str)?;
    let file_type = file_type(file);
    let kind = if IMAGE_FILE_TYPES.contains(&file_type.as_str()) {
        DocumentKind::Image
    } else if file_type == "pdf" {
        DocumentKind::Pdf
    } else {
        DocumentKind::Other
    };
    Some(DocumentLink {
        url: url.to_string(),
        kind,
    })
}

fn file_type(file: &Value) -> String {
    field_text(file, &["fileType"]).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_fall_back_per_kind() {
        assert_eq!(display_name(EntityKind::Consumers, &json!({"Name": "Ravi"})), "Ravi");
        assert_eq!(display_name(EntityKind::Consumers, &json!({})), "Unnamed Consumer");
        assert_eq!(display_name(EntityKind::Partners, &json!({"name": ""})), "Unnamed User");
        assert_eq!(
            display_name(EntityKind::Associates, &json!({"name": "A", "Name": "B"})),
            "A"
        );
    }

    #[test]
    fn roles_fall_back_to_the_family() {
        assert_eq!(role_label(EntityKind::Consumers, &json!({})), "Consumer");
        assert_eq!(role_label(EntityKind::Associates, &json!({})), "Associates");
        assert_eq!(role_label(EntityKind::Partners, &json!({"role": "EPC"})), "EPC");
    }

    #[test]
    fn mobiles_are_grouped() {
        assert_eq!(format_mobile(&json!({"mobile": 9876543210u64})), "98765 43210");
        assert_eq!(format_mobile(&json!({"mobile": "12345"})), "12345");
        assert_eq!(format_mobile(&json!({})), NOT_AVAILABLE);
    }

    #[test]
    fn files_are_labelled_by_declared_type() {
        let record = json!({"files": [
            {"fileType": "PNG", "url": "https://cdn/a"},
            {"fileType": "pdf", "url": "https://cdn/b"},
            {"fileType": "gif", "url": "https://cdn/c"},
            {"url": "https://cdn/d"}
        ]});
        let labels: Vec<_> = files(&record).iter().map(file_label).collect();
        assert_eq!(labels, ["Image", "PDF Document", "Document", "Document"]);
        assert_eq!(files_count(&record), 4);
        assert_eq!(files_count(&json!({"files": "none"})), 0);

        let kinds: Vec<_> = files(&record)
            .iter()
            .filter_map(file_document)
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            [DocumentKind::Image, DocumentKind::Pdf, DocumentKind::Image, DocumentKind::Other]
        );
        assert_eq!(file_document(&json!({"fileType": "pdf"})), None);
    }
}
