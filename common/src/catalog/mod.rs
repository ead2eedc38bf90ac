//! Substation lookup per provider category.
//!
//! The two provider listings have different row shapes. Both are re-shaped
//! into [`SubstationEntry`] rows held by a [`SubstationCatalog`]; the district,
//! taluka and substation option lists are projected from those rows on
//! demand. [`SubstationCascade`] tracks the selection made in the form.

mod cascade;

pub use cascade::SubstationCascade;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::Endpoint;
use crate::error::CatalogError;

/// Distribution or transmission company used for the substation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderCategory {
    /// Distribution company; listings are granular down to the taluka.
    #[serde(rename = "MSEDCL")]
    Msedcl,
    /// Transmission company; listings carry district and substation only.
    #[serde(rename = "MSETCL")]
    Msetcl,
}

impl ProviderCategory {
    pub const ALL: [ProviderCategory; 2] = [ProviderCategory::Msedcl, ProviderCategory::Msetcl];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderCategory::Msedcl => "MSEDCL",
            ProviderCategory::Msetcl => "MSETCL",
        }
    }

    /// Whether the district → taluka → substation step applies.
    pub fn has_talukas(self) -> bool {
        self == ProviderCategory::Msedcl
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            ProviderCategory::Msedcl => Endpoint::MsedclSubstations,
            ProviderCategory::Msetcl => Endpoint::MsetclSubstations,
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MSEDCL" => Ok(ProviderCategory::Msedcl),
            "MSETCL" => Ok(ProviderCategory::Msetcl),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// Uniform catalog row. `taluka` is always empty for [`ProviderCategory::Msetcl`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstationEntry {
    pub district: String,
    pub taluka: String,
    pub substation: String,
}

#[derive(Deserialize)]
struct MsedclRow {
    #[serde(default, deserialize_with = "lenient_string")]
    district: String,
    #[serde(default, deserialize_with = "lenient_string")]
    taluka: String,
    #[serde(default, deserialize_with = "lenient_string")]
    substation: String,
}

#[derive(Deserialize)]
struct MsetclRow {
    #[serde(rename = "District", default, deserialize_with = "lenient_string")]
    district: String,
    #[serde(rename = "Substation", default, deserialize_with = "lenient_string")]
    substation: String,
}

/// Accepts strings, numbers and null; null becomes the empty string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Raw substation rows for one provider category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstationCatalog {
    category: ProviderCategory,
    entries: Vec<SubstationEntry>,
}

impl SubstationCatalog {
    pub fn new(category: ProviderCategory, entries: Vec<SubstationEntry>) -> Self {
        Self { category, entries }
    }

    /// Re-shapes a listing response for `category`.
    ///
    /// The payload must be a JSON array. Rows that are not objects are skipped.
    pub fn from_json(category: ProviderCategory, payload: Value) -> Result<Self, CatalogError> {
        let Value::Array(rows) = payload else {
            return Err(CatalogError::NotAList);
        };

        let total = rows.len();
        let entries: Vec<SubstationEntry> = rows
            .into_iter()
            .filter_map(|row| match category {
                ProviderCategory::Msedcl => serde_json::from_value::<MsedclRow>(row)
                    .ok()
                    .map(|r| SubstationEntry {
                        district: r.district,
                        taluka: r.taluka,
                        substation: r.substation,
                    }),
                ProviderCategory::Msetcl => serde_json::from_value::<MsetclRow>(row)
                    .ok()
                    .map(|r| SubstationEntry {
                        district: r.district,
                        taluka: String::new(),
                        substation: r.substation,
                    }),
            })
            .collect();

        if entries.len() != total {
            log::warn!(
                "{}: skipped {} malformed substation row(s)",
                category,
                total - entries.len()
            );
        }

        Ok(Self::new(category, entries))
    }

    pub fn category(&self) -> ProviderCategory {
        self.category
    }

    pub fn entries(&self) -> &[SubstationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn districts(&self) -> Vec<String> {
        distinct(self.entries.iter().map(|e| e.district.as_str()))
    }

    /// Talukas of `district`; always empty for a category without talukas.
    pub fn talukas(&self, district: &str) -> Vec<String> {
        if !self.category.has_talukas() {
            return Vec::new();
        }
        distinct(
            self.entries
                .iter()
                .filter(|e| e.district == district)
                .map(|e| e.taluka.as_str()),
        )
    }

    pub fn substations_in_district(&self, district: &str) -> Vec<String> {
        distinct(
            self.entries
                .iter()
                .filter(|e| e.district == district)
                .map(|e| e.substation.as_str()),
        )
    }

    pub fn substations_in_taluka(&self, district: &str, taluka: &str) -> Vec<String> {
        distinct(
            self.entries
                .iter()
                .filter(|e| e.district == district && e.taluka == taluka)
                .map(|e| e.substation.as_str()),
        )
    }
}

/// De-duplicates by value, keeping first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    pub(super) fn msedcl() -> SubstationCatalog {
        SubstationCatalog::from_json(
            ProviderCategory::Msedcl,
            json!([
                {"district": "Pune", "taluka": "Haveli", "substation": "Uruli"},
                {"district": "Pune", "taluka": "Maval", "substation": "Talegaon"},
                {"district": "Pune", "taluka": "Haveli", "substation": "Loni"},
                {"district": "Nashik", "taluka": "Sinnar", "substation": "Musalgaon"},
                {"district": "Pune", "taluka": "Haveli", "substation": "Uruli"},
            ]),
        )
        .unwrap()
    }

    pub(super) fn msetcl() -> SubstationCatalog {
        SubstationCatalog::from_json(
            ProviderCategory::Msetcl,
            json!([
                {"District": "Satara", "Substation": "Koyna"},
                {"District": "Satara", "Substation": "Karad"},
                {"District": "Sangli", "Substation": null},
                {"District": "Satara", "Substation": "Koyna"},
            ]),
        )
        .unwrap()
    }

    #[test]
    fn projections_keep_first_seen_order() {
        let catalog = msedcl();
        assert_eq!(catalog.districts(), ["Pune", "Nashik"]);
        assert_eq!(catalog.talukas("Pune"), ["Haveli", "Maval"]);
        assert_eq!(catalog.substations_in_taluka("Pune", "Haveli"), ["Uruli", "Loni"]);
    }

    #[test]
    fn msetcl_rows_have_no_taluka() {
        let catalog = msetcl();
        assert!(catalog.entries().iter().all(|e| e.taluka.is_empty()));
        assert_eq!(catalog.districts(), ["Satara", "Sangli"]);
        assert!(catalog.talukas("Satara").is_empty());
        assert_eq!(catalog.substations_in_district("Satara"), ["Koyna", "Karad"]);
        assert_eq!(catalog.substations_in_district("Sangli"), [""]);
    }

    #[test]
    fn non_list_payloads_are_refused() {
        assert_eq!(
            SubstationCatalog::from_json(ProviderCategory::Msedcl, json!({"data": []})),
            Err(CatalogError::NotAList)
        );
    }

    #[test]
    fn non_object_rows_are_skipped() {
        let catalog = SubstationCatalog::from_json(
            ProviderCategory::Msedcl,
            json!([42, {"district": "Pune", "taluka": "Haveli", "substation": "Uruli"}]),
        )
        .unwrap();
        assert_eq!(catalog.entries().len(), 1);
    }

    #[test]
    fn categories_parse_from_their_labels() {
        assert_eq!("MSETCL".parse(), Ok(ProviderCategory::Msetcl));
        assert!("msetcl".parse::<ProviderCategory>().is_err());
        assert!(ProviderCategory::Msedcl.has_talukas());
        assert!(!ProviderCategory::Msetcl.has_talukas());
    }
}
