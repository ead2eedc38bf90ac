//! Multipart body of a partner registration.
//!
//! The payload is described as an ordered list of parts so the frontend can
//! copy it into a browser `FormData` and tests can inspect it directly.

use serde::Serialize;

use crate::catalog::ProviderCategory;
use crate::error::SubmitError;
use crate::model::attachment::Attachment;
use crate::model::registration::RegistrationRecord;

/// Name of the file part and of its sibling ownership-type part.
pub const LAND_DOCUMENT: &str = "landDocument";
pub const LAND_DOCUMENT_TYPE: &str = "landDocument.fileType";

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text { name: String, value: String },
    /// Binary part; the host supplies the bytes for `attachment`.
    File { name: String, attachment: Attachment },
}

impl Part {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionPayload {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct SubstationPart<'a> {
    category: &'a str,
    district: &'a str,
    taluka: &'a str,
    substation: &'a str,
}

impl SubmissionPayload {
    /// Encodes `record` for the registration endpoint.
    ///
    /// The substation part always names the provider category; its taluka is
    /// only carried for the taluka-granular category and forced empty otherwise.
    pub fn from_record(
        record: &RegistrationRecord,
        category: Option<ProviderCategory>,
    ) -> Result<Self, SubmitError> {
        let mut payload = SubmissionPayload::default();

        for (name, value) in [
            ("name", record.name.as_str()),
            ("email", record.email.as_str()),
            ("mobile", record.phone.as_str()),
            ("address", record.address.as_str()),
            ("password", record.password.as_str()),
            ("projectName", record.project_name.as_str()),
            ("distanceFromSubstation", record.distance_from_substation.as_str()),
            ("landOwnership", record.land_ownership.as_str()),
            ("statusOfFarm", record.status_of_farm.as_str()),
            ("statusOfLoan", record.status_of_loan.as_str()),
            ("regulatoryStatus", record.regulatory_status.as_str()),
            ("tariffExpected", record.tariff_expected.as_str()),
        ] {
            payload.push_text(name, value);
        }

        payload.push_text("location", serde_json::to_string(&record.location)?);
        payload.push_text("capacity", serde_json::to_string(&record.capacity)?);

        let keeps_taluka = category.is_some_and(ProviderCategory::has_talukas);
        let substation = SubstationPart {
            category: category.map(ProviderCategory::as_str).unwrap_or_default(),
            district: &record.substation.district,
            taluka: if keeps_taluka { record.substation.taluka.as_str() } else { "" },
            substation: &record.substation.substation,
        };
        payload.push_text("substation", serde_json::to_string(&substation)?);

        payload.push_text(
            "expectedCommissioningTimeline",
            serde_json::to_string(&record.expected_commissioning_timeline)?,
        );

        if let Some(attachment) = &record.land_document {
            payload.parts.push(Part::File {
                name: LAND_DOCUMENT.to_string(),
                attachment: attachment.clone(),
            });
            payload.push_text(LAND_DOCUMENT_TYPE, record.land_ownership.as_str());
        }

        Ok(payload)
    }

    fn push_text(&mut self, name: &str, value: impl Into<String>) {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.into(),
        });
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Value of the first text part called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.parts.iter().find_map(|part| match part {
            Part::File { attachment, .. } => Some(attachment),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::registration::LandOwnership;
    use serde_json::{Value, json};

    fn record() -> RegistrationRecord {
        let mut record = RegistrationRecord::default();
        record.name = "Asha".to_string();
        record.phone = "9876543210".to_string();
        record.capacity.ac = "3".to_string();
        record.substation.district = "Pune".to_string();
        record.substation.taluka = "Haveli".to_string();
        record.substation.substation = "Uruli".to_string();
        record
    }

    fn json_part(payload: &SubmissionPayload, name: &str) -> Value {
        serde_json::from_str(payload.text(name).unwrap()).unwrap()
    }

    #[test]
    fn phone_is_sent_as_mobile() {
        let payload = SubmissionPayload::from_record(&record(), None).unwrap();
        assert_eq!(payload.text("mobile"), Some("9876543210"));
        assert_eq!(payload.text("phone"), None);
    }

    #[test]
    fn taluka_is_kept_for_msedcl_only() {
        let msedcl =
            SubmissionPayload::from_record(&record(), Some(ProviderCategory::Msedcl)).unwrap();
        assert_eq!(
            json_part(&msedcl, "substation"),
            json!({"category": "MSEDCL", "district": "Pune", "taluka": "Haveli", "substation": "Uruli"})
        );

        let msetcl =
            SubmissionPayload::from_record(&record(), Some(ProviderCategory::Msetcl)).unwrap();
        assert_eq!(json_part(&msetcl, "substation")["taluka"], json!(""));
        assert_eq!(json_part(&msetcl, "substation")["category"], json!("MSETCL"));
    }

    #[test]
    fn nested_groups_are_json_parts() {
        let payload = SubmissionPayload::from_record(&record(), None).unwrap();
        assert_eq!(json_part(&payload, "capacity"), json!({"ac": "3", "dc": ""}));
        assert_eq!(json_part(&payload, "location")["coordinates"]["lat"], json!(""));
        assert!(json_part(&payload, "expectedCommissioningTimeline")
            .get("injectionDate")
            .is_some());
    }

    #[test]
    fn attachment_carries_its_ownership_type() {
        let mut record = record();
        record.land_ownership = LandOwnership::Lease;
        record.land_document = Some(Attachment::new("deed.pdf", "application/pdf", 1024));

        let payload = SubmissionPayload::from_record(&record, None).unwrap();
        assert_eq!(payload.attachment().map(|a| a.file_name.as_str()), Some("deed.pdf"));
        assert_eq!(payload.text(LAND_DOCUMENT_TYPE), Some("LEASE"));
    }

    #[test]
    fn no_attachment_means_no_file_parts() {
        let payload = SubmissionPayload::from_record(&record(), None).unwrap();
        assert!(payload.attachment().is_none());
        assert!(payload.text(LAND_DOCUMENT_TYPE).is_none());
    }
}
