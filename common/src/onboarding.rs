//! Consumer roster an associate onboards against its contract capacity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OnboardError;
use crate::requests::OnboardConsumersRequest;

pub const ONBOARD_TYPE_CONSUMER: &str = "CONSUMER";
pub const ONBOARD_SUCCEEDED: &str = "Consumer details submitted!";
pub const ONBOARD_FAILED: &str = "Something went wrong";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerEntry {
    pub consumer_name: String,
    pub consumer_load_capacity: String,
}

impl ConsumerEntry {
    pub fn is_blank(&self) -> bool {
        self.consumer_name.trim().is_empty() || self.consumer_load_capacity.trim().is_empty()
    }
}

/// Editable list of consumers; never shorter than one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerRoster {
    rows: Vec<ConsumerEntry>,
}

impl Default for ConsumerRoster {
    fn default() -> Self {
        Self {
            rows: vec![ConsumerEntry::default()],
        }
    }
}

impl ConsumerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ConsumerEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn add_row(&mut self) {
        self.rows.push(ConsumerEntry::default());
    }

    /// Removes row `index`. The last remaining row is never removed.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn set_name(&mut self, index: usize, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.consumer_name = value.to_string();
        }
    }

    pub fn set_load(&mut self, index: usize, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.consumer_load_capacity = value.to_string();
        }
    }

    /// Request body for the onboarding endpoint, refused while any row has a
    /// blank name or load.
    pub fn to_request(&self) -> Result<OnboardConsumersRequest, OnboardError> {
        if self.rows.iter().any(ConsumerEntry::is_blank) {
            return Err(OnboardError::IncompleteRows);
        }
        Ok(OnboardConsumersRequest {
            onboard_type: ONBOARD_TYPE_CONSUMER.to_string(),
            consumers: serde_json::to_string(&self.rows)?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Contract capacity in MW from text such as `"10MW"`: every character other
/// than digits and `.` is dropped before parsing. Unparsable text is zero.
pub fn contract_capacity_mw(raw: &str) -> f64 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse().unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CapacitySummary {
    pub contract_mw: f64,
    pub used_mw: f64,
    pub remaining_mw: f64,
}

impl CapacitySummary {
    /// `onboarded` are the consumers already on the associate's profile;
    /// their `consumerLoadCapacity` is in MW.
    pub fn compute(contract: &str, onboarded: &[Value]) -> Self {
        let contract_mw = contract_capacity_mw(contract);
        let used_mw = onboarded
            .iter()
            .map(|c| load_mw(c.get("consumerLoadCapacity")))
            .sum::<f64>();
        Self {
            contract_mw,
            used_mw,
            remaining_mw: contract_mw - used_mw,
        }
    }
}

fn load_mw(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) if s.trim().is_empty() => 0.0,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Consumers already onboarded, read from an associate profile response.
pub fn onboarded_consumers(profile: &Value) -> &[Value] {
    profile
        .pointer("/profile/onboard/consumers")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_row_cannot_be_removed() {
        let mut roster = ConsumerRoster::new();
        assert!(!roster.remove_row(0));
        roster.add_row();
        assert!(roster.remove_row(1));
        assert!(!roster.remove_row(5));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn blank_rows_block_the_request() {
        let mut roster = ConsumerRoster::new();
        roster.set_name(0, "Mill");
        roster.set_load(0, "  ");
        assert_eq!(roster.to_request(), Err(OnboardError::IncompleteRows));

        roster.set_load(0, "2");
        let request = roster.to_request().unwrap();
        assert_eq!(request.onboard_type, "CONSUMER");
        assert_eq!(
            request.consumers,
            r#"[{"consumerName":"Mill","consumerLoadCapacity":"2"}]"#
        );
    }

    #[test]
    fn request_serializes_in_camel_case() {
        let mut roster = ConsumerRoster::new();
        roster.set_name(0, "A");
        roster.set_load(0, "1");
        let body = serde_json::to_value(roster.to_request().unwrap()).unwrap();
        assert_eq!(body["onboardType"], json!("CONSUMER"));
        assert!(body["consumers"].is_string());
    }

    #[test]
    fn remaining_capacity_subtracts_onboarded_load() {
        let profile = json!({"profile": {"onboard": {"consumers": [
            {"consumerLoadCapacity": "2.5"},
            {"consumerLoadCapacity": 1},
            {"consumerLoadCapacity": ""}
        ]}}});
        let summary = CapacitySummary::compute("10MW", onboarded_consumers(&profile));
        assert_eq!(summary.contract_mw, 10.0);
        assert_eq!(summary.used_mw, 3.5);
        assert_eq!(summary.remaining_mw, 6.5);
    }

    #[test]
    fn contract_text_is_stripped_before_parsing() {
        assert_eq!(contract_capacity_mw("12.5 MW"), 12.5);
        assert_eq!(contract_capacity_mw(""), 0.0);
        assert_eq!(contract_capacity_mw("MW"), 0.0);
        assert_eq!(contract_capacity_mw("1.2.3"), 0.0);
        assert!(onboarded_consumers(&json!({})).is_empty());
    }
}
