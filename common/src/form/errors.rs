use std::collections::BTreeMap;

use serde::Serialize;

/// Per-field validation messages keyed by dotted field path.
///
/// A missing key means the field is valid or untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrorSet(BTreeMap<String, String>);

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    /// Drops the message for `path`, returning whether there was one.
    pub fn clear(&mut self, path: &str) -> bool {
        self.0.remove(path).is_some()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_reports_whether_a_message_was_dropped() {
        let mut errors = FieldErrorSet::new();
        errors.insert("name", "Name is required");
        errors.insert("capacity.ac", "Please enter a valid number");

        assert!(errors.clear("name"));
        assert!(!errors.clear("name"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({"capacity.ac": "Please enter a valid number"})
        );
    }
}
