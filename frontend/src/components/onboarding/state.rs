use serde_json::Value;

use common::admin::display::text_or;
use common::onboarding::{onboarded_consumers, CapacitySummary, ConsumerRoster};

use crate::helpers::{session_get, ASSOCIATE_SESSION_KEY};

pub struct OnboardingPage {
    /// Signed-in associate; `None` when nobody is signed in.
    pub associate: Option<Value>,
    pub profile: Option<Value>,
    pub roster: ConsumerRoster,
    pub loading_profile: bool,
    pub submitting: bool,
    pub logging_out: bool,
}

impl OnboardingPage {
    pub fn from_session() -> Self {
        Self {
            associate: session_get(ASSOCIATE_SESSION_KEY),
            profile: None,
            roster: ConsumerRoster::new(),
            loading_profile: false,
            submitting: false,
            logging_out: false,
        }
    }

    pub fn associate_id(&self) -> Option<String> {
        let associate = self.associate.as_ref()?;
        let id = text_or(associate, "_id", "");
        let id = if id.is_empty() { text_or(associate, "id", "") } else { id };
        (!id.is_empty()).then_some(id)
    }

    pub fn associate_name(&self) -> String {
        self.associate
            .as_ref()
            .map(|a| text_or(a, "name", "Associate"))
            .unwrap_or_else(|| "Associate".to_string())
    }

    pub fn onboarded(&self) -> &[Value] {
        self.profile.as_ref().map(onboarded_consumers).unwrap_or_default()
    }

    pub fn capacity(&self) -> CapacitySummary {
        let contract = self
            .associate
            .as_ref()
            .map(|a| text_or(a, "contractCapacity", "0"))
            .unwrap_or_else(|| "0".to_string());
        CapacitySummary::compute(&contract, self.onboarded())
    }
}
