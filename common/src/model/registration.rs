//! The energy-partner registration record.
//!
//! The record mirrors the partner registration form one to one. Numeric
//! inputs are kept as the text the user typed (`"12.5"`, `""`); they are
//! only checked, never parsed, because the backend receives them as text.

use serde::{Serialize, Serializer};

use super::attachment::Attachment;

choice_enum! {
    /// Whether the project land is owned or leased.
    LandOwnership { Own => "OWN", Lease => "LEASE" }
}

choice_enum! {
    /// Kind of installation.
    FarmStatus { Farm => "FARM", Park => "PARK" }
}

choice_enum! {
    /// How the project is financed.
    LoanStatus { SelfFunded => "SELF", Bank => "BANK" }
}

choice_enum! {
    /// Regulatory approval state of the project.
    RegulatoryStatus { Approved => "APPROVED", Pending => "PENDING", Rejected => "REJECTED" }
}

/// A partner registration in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    /// Digits only, at most ten of them.
    pub phone: String,
    pub address: String,
    pub password: String,
    pub project_name: String,
    pub location: Location,
    pub capacity: Capacity,
    pub substation: SubstationChoice,
    pub distance_from_substation: String,
    pub land_ownership: LandOwnership,
    /// At most one file; a new upload replaces the previous one.
    pub land_document: Option<Attachment>,
    pub status_of_farm: FarmStatus,
    pub status_of_loan: LoanStatus,
    pub regulatory_status: RegulatoryStatus,
    pub tariff_expected: String,
    pub expected_commissioning_timeline: CommissioningTimeline,
}

/// Project site.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub address: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
    pub coordinates: Coordinates,
}

/// Latitude and longitude as typed. Serialized as JSON numbers when they
/// parse, otherwise as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Coordinates {
    #[serde(serialize_with = "number_or_empty")]
    pub lat: String,
    #[serde(serialize_with = "number_or_empty")]
    pub lng: String,
}

/// Installed capacity in MW, AC and DC side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Capacity {
    pub ac: String,
    pub dc: String,
}

/// The substation the project injects into. `taluka` is only meaningful for
/// the taluka-granular provider category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstationChoice {
    pub district: String,
    pub taluka: String,
    pub substation: String,
}

/// Milestones, each a `DD/MM/YYYY` string (or partial while typing).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissioningTimeline {
    pub epc_work_start_date: String,
    pub injection_date: String,
    pub commercial_operations_date: String,
}

fn number_or_empty<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => serializer.serialize_f64(number),
        _ => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_round_trip_through_their_literals() {
        assert_eq!("OWN".parse::<LandOwnership>(), Ok(LandOwnership::Own));
        assert_eq!("".parse::<RegulatoryStatus>(), Ok(RegulatoryStatus::Unset));
        assert_eq!(LoanStatus::SelfFunded.as_str(), "SELF");
        assert!("own".parse::<LandOwnership>().is_err());
        assert_eq!(RegulatoryStatus::CHOICES.len(), 3);
    }

    #[test]
    fn coordinates_serialize_as_numbers_or_empty() {
        let coords = Coordinates {
            lat: "19.07".to_string(),
            lng: String::new(),
        };
        let json = serde_json::to_value(&coords).unwrap();
        assert_eq!(json["lat"], serde_json::json!(19.07));
        assert_eq!(json["lng"], serde_json::json!(""));
    }

    #[test]
    fn timeline_uses_camel_case_keys() {
        let json = serde_json::to_value(CommissioningTimeline::default()).unwrap();
        assert!(json.get("epcWorkStartDate").is_some());
        assert!(json.get("commercialOperationsDate").is_some());
    }
}
