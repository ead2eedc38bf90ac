use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::envelope::NormalizedRecordList;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").expect("valid float regex")
});

/// Reads a capacity-like value as a number.
///
/// Numbers are used as they are. Strings contribute their leading decimal
/// literal after leading whitespace (`"12.5MW"` is 12.5). Everything else,
/// including non-finite results, counts as zero.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => LEADING_FLOAT
            .find(s.trim_start())
            .and_then(|m| m.as_str().parse::<f64>().ok()),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn solar_farms(associate: &Value) -> &[Value] {
    associate
        .pointer("/onboard/solarFarms")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn ac_capacity(record: &Value) -> f64 {
    coerce_number(record.pointer("/capacity/ac"))
}

fn has_files(consumer: &Value) -> bool {
    consumer
        .get("files")
        .and_then(Value::as_array)
        .is_some_and(|files| !files.is_empty())
}

/// Headline numbers of the admin dashboard. Derived from the current lists
/// every time; never stored next to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_partners: usize,
    pub total_associates: usize,
    pub total_consumers: usize,
    pub total_users: usize,
    /// Every partner counts as one farm, plus each farm an associate onboarded.
    pub total_solar_farms: usize,
    /// Sum of AC capacity (MW) over partners and associates' farms.
    pub total_capacity_mw: f64,
    /// Consumers with at least one uploaded file.
    pub active_consumers: usize,
}

impl DashboardStats {
    pub fn compute(
        partners: &NormalizedRecordList,
        associates: &NormalizedRecordList,
        consumers: &NormalizedRecordList,
    ) -> Self {
        Self::from_records(partners.records(), associates.records(), consumers.records())
    }

    pub fn from_records(partners: &[Value], associates: &[Value], consumers: &[Value]) -> Self {
        let associate_farms = associates.iter().flat_map(|a| solar_farms(a).iter());

        let total_capacity_mw = partners.iter().map(ac_capacity).sum::<f64>()
            + associate_farms.clone().map(ac_capacity).sum::<f64>();

        Self {
            total_partners: partners.len(),
            total_associates: associates.len(),
            total_consumers: consumers.len(),
            total_users: partners.len() + associates.len() + consumers.len(),
            total_solar_farms: partners.len() + associate_farms.count(),
            total_capacity_mw,
            active_consumers: consumers.iter().filter(|c| has_files(c)).count(),
        }
    }
}
