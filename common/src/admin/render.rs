//! Generic detail view over arbitrary record JSON.
//!
//! A record is first lowered into a [`DetailNode`] tree under a
//! [`RenderPolicy`], which decides which keys are hidden and which strings
//! are document links. Output is produced by folding that tree with a
//! [`DetailVisitor`]; [`TextRenderer`] is the plain-text one, the web client
//! has its own.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Placeholder shown for null values.
pub const NULL_PLACEHOLDER: &str = "null";
pub const VIEW_DOCUMENT: &str = "View Document";

static IMAGE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(jpg|jpeg|png|webp)").expect("valid image regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Image,
    Pdf,
    /// Not recognized; still viewable through the document viewer.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub url: String,
    pub kind: DocumentKind,
}

impl DocumentLink {
    /// Address to load in the viewer frame. Images are shown directly; every
    /// other kind goes through the external viewer at `viewer_base`.
    pub fn viewer_url(&self, viewer_base: &str) -> Result<String, url::ParseError> {
        match self.kind {
            DocumentKind::Image => Ok(self.url.clone()),
            DocumentKind::Pdf | DocumentKind::Other => {
                let url = Url::parse_with_params(
                    viewer_base,
                    &[("url", self.url.as_str()), ("embedded", "true")],
                )?;
                Ok(url.into())
            }
        }
    }
}

/// Pluggable rules applied while lowering a record.
pub trait RenderPolicy {
    /// Whether the entry under `key` is left out, at any depth.
    fn suppress(&self, key: &str) -> bool;

    /// Document kind of a string value, or `None` when it is plain text.
    fn classify(&self, text: &str) -> Option<DocumentKind>;
}

/// Hides `password` entries and treats `http…` strings as documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl RenderPolicy for DefaultPolicy {
    fn suppress(&self, key: &str) -> bool {
        key == "password"
    }

    fn classify(&self, text: &str) -> Option<DocumentKind> {
        if !text.starts_with("http") {
            return None;
        }
        let lower = text.to_lowercase();
        Some(if lower.contains(".pdf") {
            DocumentKind::Pdf
        } else if IMAGE_EXTENSION.is_match(&lower) {
            DocumentKind::Image
        } else {
            DocumentKind::Other
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailNode {
    Null,
    Text(String),
    Document(DocumentLink),
    Object(Vec<(String, DetailNode)>),
    List(Vec<DetailNode>),
}

impl DetailNode {
    /// Lowers `value` with the [`DefaultPolicy`].
    pub fn build(value: &Value) -> Self {
        Self::build_with(value, &DefaultPolicy)
    }

    pub fn build_with(value: &Value, policy: &dyn RenderPolicy) -> Self {
        match value {
            Value::Null => DetailNode::Null,
            Value::Bool(b) => DetailNode::Text(b.to_string()),
            Value::Number(n) => DetailNode::Text(n.to_string()),
            Value::String(s) => match policy.classify(s) {
                Some(kind) => DetailNode::Document(DocumentLink {
                    url: s.clone(),
                    kind,
                }),
                None => DetailNode::Text(s.clone()),
            },
            Value::Array(items) => {
                DetailNode::List(items.iter().map(|v| Self::build_with(v, policy)).collect())
            }
            Value::Object(map) => DetailNode::Object(
                map.iter()
                    .filter(|(key, _)| !policy.suppress(key))
                    .map(|(key, v)| (key.clone(), Self::build_with(v, policy)))
                    .collect(),
            ),
        }
    }

    /// Folds the tree bottom-up: children are visited before their parent.
    pub fn accept<V: DetailVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            DetailNode::Null => visitor.visit_null(),
            DetailNode::Text(text) => visitor.visit_text(text),
            DetailNode::Document(link) => visitor.visit_document(link),
            DetailNode::Object(fields) => {
                let children = fields
                    .iter()
                    .map(|(key, node)| (key.as_str(), node.accept(visitor)))
                    .collect();
                visitor.visit_object(children)
            }
            DetailNode::List(items) => {
                let children = items.iter().map(|node| node.accept(visitor)).collect();
                visitor.visit_list(children)
            }
        }
    }

    /// Every document link in the tree, in visiting order.
    pub fn documents(&self) -> Vec<&DocumentLink> {
        let mut found = Vec::new();
        self.collect_documents(&mut found);
        found
    }

    fn collect_documents<'a>(&'a self, found: &mut Vec<&'a DocumentLink>) {
        match self {
            DetailNode::Document(link) => found.push(link),
            DetailNode::Object(fields) => {
                fields.iter().for_each(|(_, node)| node.collect_documents(found))
            }
            DetailNode::List(items) => items.iter().for_each(|node| node.collect_documents(found)),
            DetailNode::Null | DetailNode::Text(_) => {}
        }
    }
}

pub trait DetailVisitor {
    type Output;

    fn visit_null(&mut self) -> Self::Output;
    fn visit_text(&mut self, text: &str) -> Self::Output;
    fn visit_document(&mut self, link: &DocumentLink) -> Self::Output;
    fn visit_object(&mut self, fields: Vec<(&str, Self::Output)>) -> Self::Output;
    fn visit_list(&mut self, items: Vec<Self::Output>) -> Self::Output;
}

/// Indented `key: value` lines. Lists are keyed by index.
#[derive(Debug, Default)]
pub struct TextRenderer;

/// Rendered form of one node: a single value or the lines of a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBlock {
    Scalar(String),
    Nested(Vec<String>),
}

const INDENT: &str = "  ";

impl TextRenderer {
    pub fn render(node: &DetailNode) -> String {
        match node.accept(&mut TextRenderer) {
            TextBlock::Scalar(text) => text,
            TextBlock::Nested(lines) => lines.join("\n"),
        }
    }

    fn entries(fields: impl Iterator<Item = (String, TextBlock)>) -> TextBlock {
        let mut lines = Vec::new();
        for (key, value) in fields {
            match value {
                TextBlock::Scalar(text) => lines.push(format!("{}: {}", key, text)),
                TextBlock::Nested(nested) => {
                    lines.push(format!("{}:", key));
                    lines.extend(nested);
                }
            }
        }
        TextBlock::Nested(indent(lines))
    }
}

impl DetailVisitor for TextRenderer {
    type Output = TextBlock;

    fn visit_null(&mut self) -> TextBlock {
        TextBlock::Scalar(NULL_PLACEHOLDER.to_string())
    }

    fn visit_text(&mut self, text: &str) -> TextBlock {
        TextBlock::Scalar(text.to_string())
    }

    fn visit_document(&mut self, link: &DocumentLink) -> TextBlock {
        let kind = match link.kind {
            DocumentKind::Image => "image",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Other => "document",
        };
        TextBlock::Scalar(format!("[{} ({})]", VIEW_DOCUMENT, kind))
    }

    fn visit_object(&mut self, fields: Vec<(&str, TextBlock)>) -> TextBlock {
        Self::entries(fields.into_iter().map(|(key, value)| (key.to_string(), value)))
    }

    fn visit_list(&mut self, items: Vec<TextBlock>) -> TextBlock {
        Self::entries(
            items
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value)),
        )
    }
}

fn indent(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().map(|line| format!("{}{}", INDENT, line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passwords_are_hidden_at_every_depth() {
        let record = json!({
            "password": "x",
            "name": "y",
            "nested": {"password": "z", "list": [{"password": "z"}]}
        });
        let text = TextRenderer::render(&DetailNode::build(&record));
        assert!(text.contains("name: y"));
        assert!(!text.contains('x'));
        assert!(!text.contains('z'));
        assert!(!text.contains("password"));
    }

    #[test]
    fn nested_objects_are_indented() {
        let record = json!({"a": {"b": null}, "c": 1});
        let text = TextRenderer::render(&DetailNode::build(&record));
        assert_eq!(text, "  a:\n    b: null\n  c: 1");
    }

    #[test]
    fn values_starting_with_spaces_stay_on_their_key() {
        let record = json!({"a": "  x", "b": 1, "c": []});
        let text = TextRenderer::render(&DetailNode::build(&record));
        assert_eq!(text, "  a:   x\n  b: 1\n  c:");
    }

    #[test]
    fn http_strings_become_document_links() {
        let policy = DefaultPolicy;
        assert_eq!(policy.classify("https://cdn/x/deed.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(policy.classify("https://cdn/x/site.jpeg"), Some(DocumentKind::Image));
        assert_eq!(policy.classify("https://cdn/x/raw/upload/123"), Some(DocumentKind::Other));
        assert_eq!(policy.classify("ftp://cdn/x.pdf"), None);
        assert_eq!(policy.classify("Pune"), None);

        let node = DetailNode::build(&json!({"doc": "https://cdn/a.png", "name": "n"}));
        assert_eq!(
            node.documents(),
            [&DocumentLink {
                url: "https://cdn/a.png".to_string(),
                kind: DocumentKind::Image
            }]
        );
    }

    #[test]
    fn viewer_url_wraps_non_images() {
        let base = "https://docs.google.com/gview";
        let pdf = DocumentLink {
            url: "https://cdn/a b.pdf".to_string(),
            kind: DocumentKind::Pdf,
        };
        assert_eq!(
            pdf.viewer_url(base).unwrap(),
            "https://docs.google.com/gview?url=https%3A%2F%2Fcdn%2Fa+b.pdf&embedded=true"
        );

        let image = DocumentLink {
            url: "https://cdn/a.png".to_string(),
            kind: DocumentKind::Image,
        };
        assert_eq!(image.viewer_url(base).unwrap(), "https://cdn/a.png");
        assert!(pdf.viewer_url("not a base").is_err());
    }

    struct KeyCounter;

    impl DetailVisitor for KeyCounter {
        type Output = usize;

        fn visit_null(&mut self) -> usize {
            0
        }
        fn visit_text(&mut self, _: &str) -> usize {
            0
        }
        fn visit_document(&mut self, _: &DocumentLink) -> usize {
            0
        }
        fn visit_object(&mut self, fields: Vec<(&str, usize)>) -> usize {
            fields.len() + fields.iter().map(|(_, n)| n).sum::<usize>()
        }
        fn visit_list(&mut self, items: Vec<usize>) -> usize {
            items.into_iter().sum()
        }
    }

    #[test]
    fn custom_policies_and_visitors_plug_in() {
        struct HideEmail;
        impl RenderPolicy for HideEmail {
            fn suppress(&self, key: &str) -> bool {
                key == "email"
            }
            fn classify(&self, _: &str) -> Option<DocumentKind> {
                None
            }
        }

        let record = json!({"email": "a@b.c", "password": "p", "items": [{"k": 1}]});
        let node = DetailNode::build_with(&record, &HideEmail);
        assert_eq!(node.accept(&mut KeyCounter), 3);
    }
}
