//! Submit-time validation of a [`RegistrationRecord`].
//!
//! Every rule is evaluated independently; a field gets at most one message.

use super::errors::FieldErrorSet;
use super::path::FieldPath;
use super::rules::{
    validate_coordinate, validate_date, validate_email, validate_number, validate_phone,
};
use crate::model::registration::RegistrationRecord;

pub const NAME_REQUIRED: &str = "Full name is required";
pub const PROJECT_REQUIRED: &str = "Project name is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PHONE_REQUIRED: &str = "phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid 10-digit Indian phone number";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const AC_REQUIRED: &str = "AC capacity is required";
pub const NUMBER_INVALID: &str = "Please enter a valid number";
pub const COORDINATE_INVALID: &str = "Please enter a valid coordinate";
pub const DATE_INVALID: &str = "Please enter date in DD/MM/YYYY format";

/// Recomputes the full error set for `record`.
pub fn validate_record(record: &RegistrationRecord) -> FieldErrorSet {
    let mut errors = FieldErrorSet::new();

    required(&mut errors, FieldPath::Name, &record.name, NAME_REQUIRED);
    required(&mut errors, FieldPath::ProjectName, &record.project_name, PROJECT_REQUIRED);
    required(&mut errors, FieldPath::Password, &record.password, PASSWORD_REQUIRED);

    // "required" wins over "format" for the same field.
    if record.phone.is_empty() {
        errors.insert(FieldPath::Phone.as_str(), PHONE_REQUIRED);
    } else if !validate_phone(&record.phone) {
        errors.insert(FieldPath::Phone.as_str(), PHONE_INVALID);
    }

    if !record.email.is_empty() && !validate_email(&record.email) {
        errors.insert(FieldPath::Email.as_str(), EMAIL_INVALID);
    }

    if record.capacity.ac.is_empty() {
        errors.insert(FieldPath::CapacityAc.as_str(), AC_REQUIRED);
    } else if !validate_number(&record.capacity.ac) {
        errors.insert(FieldPath::CapacityAc.as_str(), NUMBER_INVALID);
    }

    for (path, value) in [
        (FieldPath::CapacityDc, &record.capacity.dc),
        (FieldPath::DistanceFromSubstation, &record.distance_from_substation),
        (FieldPath::TariffExpected, &record.tariff_expected),
    ] {
        if !value.is_empty() && !validate_number(value) {
            errors.insert(path.as_str(), NUMBER_INVALID);
        }
    }

    let coordinates = &record.location.coordinates;
    for (path, value) in [
        (FieldPath::LocationLat, &coordinates.lat),
        (FieldPath::LocationLng, &coordinates.lng),
    ] {
        if !validate_coordinate(value) {
            errors.insert(path.as_str(), COORDINATE_INVALID);
        }
    }

    let timeline = &record.expected_commissioning_timeline;
    for (path, value) in [
        (FieldPath::EpcWorkStartDate, &timeline.epc_work_start_date),
        (FieldPath::InjectionDate, &timeline.injection_date),
        (FieldPath::CommercialOperationsDate, &timeline.commercial_operations_date),
    ] {
        if !value.is_empty() && !validate_date(value) {
            errors.insert(path.as_str(), DATE_INVALID);
        }
    }

    errors
}

fn required(errors: &mut FieldErrorSet, path: FieldPath, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(path.as_str(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> RegistrationRecord {
        let mut record = RegistrationRecord::default();
        record.name = "Asha Patil".to_string();
        record.project_name = "Sinnar Solar".to_string();
        record.password = "secret".to_string();
        record.phone = "9876543210".to_string();
        record.capacity.ac = "2.5".to_string();
        record
    }

    #[test]
    fn empty_record_reports_every_required_field() {
        let errors = validate_record(&RegistrationRecord::default());
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("projectName"), Some(PROJECT_REQUIRED));
        assert_eq!(errors.get("password"), Some(PASSWORD_REQUIRED));
        assert_eq!(errors.get("phone"), Some(PHONE_REQUIRED));
        assert_eq!(errors.get("capacity.ac"), Some(AC_REQUIRED));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn minimal_valid_record_passes() {
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut record = valid_record();
        record.name = "   ".to_string();
        assert_eq!(validate_record(&record).get("name"), Some(NAME_REQUIRED));
    }

    #[test]
    fn phone_format_is_checked_after_presence() {
        let mut record = valid_record();
        record.phone = "1234567890".to_string();
        assert_eq!(validate_record(&record).get("phone"), Some(PHONE_INVALID));
    }

    #[test]
    fn optional_fields_are_checked_only_when_present() {
        let mut record = valid_record();
        record.email = "nope".to_string();
        record.capacity.dc = "1..2".to_string();
        record.expected_commissioning_timeline.injection_date = "31/13/2024".to_string();
        let errors = validate_record(&record);
        assert_eq!(errors.get("email"), Some(EMAIL_INVALID));
        assert_eq!(errors.get("capacity.dc"), Some(NUMBER_INVALID));
        assert_eq!(
            errors.get("expectedCommissioningTimeline.injectionDate"),
            Some(DATE_INVALID)
        );
        assert!(!errors.contains("tariffExpected"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn half_typed_coordinates_block_submission() {
        let mut record = valid_record();
        record.location.coordinates.lat = "-".to_string();
        record.location.coordinates.lng = "73.79".to_string();
        let errors = validate_record(&record);
        assert_eq!(
            errors.get("location.coordinates.lat"),
            Some(COORDINATE_INVALID)
        );
        assert!(!errors.contains("location.coordinates.lng"));
    }
}
