use yew::prelude::*;

use common::form::FormSession;
use common::model::location::SavedLocation;

/// Registration page state. The binary of the land document stays here; the
/// session only knows its metadata.
pub struct PartnerRegistration {
    pub session: FormSession,
    pub document: Option<web_sys::File>,
    pub file_input_ref: NodeRef,
    pub draft: LocationDraft,
}

impl PartnerRegistration {
    pub fn new() -> Self {
        Self {
            session: FormSession::new(),
            document: None,
            file_input_ref: NodeRef::default(),
            draft: LocationDraft::default(),
        }
    }

    /// Clears the file input so the same file can be picked again.
    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum DraftField {
    Address,
    Taluka,
    District,
    State,
    Lat,
    Lng,
}

/// Location being typed in the picker before it is saved.
#[derive(Default)]
pub struct LocationDraft {
    pub address: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
    pub lat: String,
    pub lng: String,
}

impl LocationDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Address => self.address = value,
            DraftField::Taluka => self.taluka = value,
            DraftField::District => self.district = value,
            DraftField::State => self.state = value,
            DraftField::Lat => self.lat = value,
            DraftField::Lng => self.lng = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Address => &self.address,
            DraftField::Taluka => &self.taluka,
            DraftField::District => &self.district,
            DraftField::State => &self.state,
            DraftField::Lat => &self.lat,
            DraftField::Lng => &self.lng,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.address.trim().is_empty() && self.district.trim().is_empty()
    }

    pub fn to_saved(&self) -> SavedLocation {
        SavedLocation {
            address: self.address.trim().to_string(),
            taluka: self.taluka.trim().to_string(),
            district: self.district.trim().to_string(),
            state: self.state.trim().to_string(),
            lat: self.lat.trim().parse().ok(),
            lng: self.lng.trim().parse().ok(),
        }
    }
}
