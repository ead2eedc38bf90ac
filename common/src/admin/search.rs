use serde_json::Value;

/// Candidate fields searched, in order. Each group is read as one value:
/// its first non-empty alias wins.
const SEARCH_FIELDS: &[&[&str]] = &[
    &["Name", "name", "consumerName"],
    &["email", "consumerEmail"],
    &["mobile", "consumerMobile"],
    &["companyName"],
    &["district"],
    &["projectName"],
];

/// Reads the first non-empty alias of a field as text. Numbers are printed;
/// anything else, or an absent field, reads as the empty string.
pub(crate) fn field_text(record: &Value, aliases: &[&str]) -> String {
    aliases
        .iter()
        .map(|key| scalar_text(record.get(*key)))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Case-insensitive substring match of `term` against any search field.
///
/// Non-object records never match. An empty term matches every object.
pub fn matches(record: &Value, term: &str) -> bool {
    if !record.is_object() {
        return false;
    }
    let needle = term.to_lowercase();
    SEARCH_FIELDS
        .iter()
        .any(|aliases| field_text(record, aliases).to_lowercase().contains(&needle))
}

/// Records of `records` matching `term`, in their original order.
pub fn filter<'a>(records: &'a [Value], term: &str) -> Vec<&'a Value> {
    records.iter().filter(|r| matches(r, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_any_field_ignoring_case() {
        let partner = json!({"name": "Asha Patil", "district": "Pune", "projectName": "Sinnar Solar"});
        assert!(matches(&partner, "asha"));
        assert!(matches(&partner, "PUNE"));
        assert!(matches(&partner, "sinnar s"));
        assert!(!matches(&partner, "nashik"));
    }

    #[test]
    fn numeric_mobiles_are_searched_as_text() {
        let consumer = json!({"Name": "Ravi", "mobile": 9876543210u64});
        assert!(matches(&consumer, "65432"));

        let aliased = json!({"consumerName": "Meera", "consumerMobile": "9123456780"});
        assert!(matches(&aliased, "91234"));
        assert!(matches(&aliased, "meer"));
    }

    #[test]
    fn missing_fields_do_not_break_matching() {
        assert!(matches(&json!({}), ""));
        assert!(!matches(&json!({}), "a"));
        assert!(!matches(&json!(null), ""));
        assert!(!matches(&json!("Asha"), "asha"));
    }

    #[test]
    fn empty_primary_alias_falls_through() {
        let record = json!({"Name": "", "name": "Kiran"});
        assert_eq!(field_text(&record, &["Name", "name"]), "Kiran");
    }

    #[test]
    fn filter_keeps_order() {
        let records = vec![
            json!({"name": "Asha", "district": "Pune"}),
            json!({"name": "Ravi", "district": "Nashik"}),
            json!({"name": "Kiran", "district": "Pune"}),
        ];
        let hits: Vec<_> = filter(&records, "pune")
            .into_iter()
            .map(|r| r["name"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(hits, ["Asha", "Kiran"]);
    }
}
