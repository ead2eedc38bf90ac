//! State of one partner registration form.
//!
//! [`FormSession`] owns the record, its error set, the substation cascade and
//! the saved map locations. Submission is split in two halves around the
//! network call: [`FormSession::begin_submit`] validates and encodes,
//! [`FormSession::finish_submit`] applies the outcome. While a submission is
//! outstanding a second `begin_submit` is refused.

use super::errors::FieldErrorSet;
use super::path::FieldPath;
use super::payload::SubmissionPayload;
use super::rules::normalize_input;
use super::validation::validate_record;
use crate::catalog::{ProviderCategory, SubstationCascade, SubstationCatalog};
use crate::error::{FormError, SubmitError};
use crate::model::attachment::Attachment;
use crate::model::location::SavedLocation;
use crate::model::registration::RegistrationRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    record: RegistrationRecord,
    errors: FieldErrorSet,
    cascade: SubstationCascade,
    locations: Vec<SavedLocation>,
    status: SubmissionStatus,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrorSet {
        &self.errors
    }

    pub fn cascade(&self) -> &SubstationCascade {
        &self.cascade
    }

    pub fn locations(&self) -> &[SavedLocation] {
        &self.locations
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    /// Applies one input edit addressed by its dotted path.
    ///
    /// The field's input rule runs first; a rejected edit changes nothing.
    /// Otherwise the error for that exact path is cleared and the new value
    /// is stored in a fresh copy of the record.
    pub fn update_field(&mut self, path: &str, raw: &str) -> Result<(), FormError> {
        let field: FieldPath = path.parse()?;
        let value = normalize_input(field.kind(), raw).map_err(|reason| FormError::Rejected {
            path: path.to_string(),
            reason,
        })?;
        let next = self.record.with_field(field, value)?;

        self.errors.clear(field.as_str());
        self.record = next;
        log::debug!("field {} updated", field);
        Ok(())
    }

    /// Replaces any previously attached land document.
    pub fn attach_document(&mut self, attachment: Attachment) {
        self.record.land_document = Some(attachment);
    }

    pub fn remove_document(&mut self) {
        self.record.land_document = None;
    }

    /// Adds a map-picker location. The first one saved fills the record's
    /// location group.
    pub fn add_location(&mut self, location: SavedLocation) {
        if self.locations.is_empty() {
            self.record.location = location.to_location();
        }
        self.locations.push(location);
    }

    /// See [`SubstationCascade::select_category`]; also clears the record's
    /// substation group.
    pub fn select_category(&mut self, category: Option<ProviderCategory>) -> bool {
        let needs_fetch = self.cascade.select_category(category);
        self.sync_substation();
        needs_fetch
    }

    pub fn load_catalog(&mut self, catalog: SubstationCatalog) -> bool {
        self.cascade.load_catalog(catalog)
    }

    pub fn select_district(&mut self, district: &str) {
        self.cascade.select_district(district);
        self.sync_substation();
    }

    pub fn select_taluka(&mut self, taluka: &str) {
        self.cascade.select_taluka(taluka);
        self.sync_substation();
    }

    pub fn select_substation(&mut self, substation: &str) {
        self.cascade.select_substation(substation);
        self.sync_substation();
    }

    fn sync_substation(&mut self) {
        self.record.substation = self.cascade.selection().clone();
    }

    /// Recomputes the error set from scratch; `true` when it is empty.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_record(&self.record);
        self.errors.is_empty()
    }

    /// Validates and encodes the record, marking the session as submitting.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if !self.validate() {
            log::info!("registration blocked by {} invalid field(s)", self.errors.len());
            return Err(SubmitError::Invalid(self.errors.clone()));
        }
        let payload = SubmissionPayload::from_record(&self.record, self.cascade.category())?;
        self.status = SubmissionStatus::InFlight;
        Ok(payload)
    }

    /// Applies the endpoint's answer. Success resets the whole form; failure
    /// keeps the record so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) -> Result<(), SubmitError> {
        match outcome {
            Ok(()) => {
                log::info!("registration submitted");
                self.reset();
                self.status = SubmissionStatus::Succeeded;
                Ok(())
            }
            Err(message) => {
                log::warn!("registration failed: {}", message);
                self.status = SubmissionStatus::Failed(message.clone());
                Err(SubmitError::Transport(message))
            }
        }
    }

    /// Back to a blank form: record, errors, locations and substation cascade.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
