//! Typed addressing of registration fields.
//!
//! Form inputs name their field with a dotted path (`"location.coordinates.lat"`).
//! [`FieldPath`] turns that string into one variant per leaf, and
//! [`RegistrationRecord::with_field`] applies an edit to a copy of the record
//! so that every sibling value at every level is carried over unchanged.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormError, Rejection};
use crate::model::registration::RegistrationRecord;

/// One addressable leaf of [`RegistrationRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    Name,
    Email,
    Phone,
    Address,
    Password,
    ProjectName,
    LocationAddress,
    LocationTaluka,
    LocationDistrict,
    LocationState,
    LocationLat,
    LocationLng,
    CapacityAc,
    CapacityDc,
    SubstationDistrict,
    SubstationTaluka,
    SubstationName,
    DistanceFromSubstation,
    LandOwnership,
    StatusOfFarm,
    StatusOfLoan,
    RegulatoryStatus,
    TariffExpected,
    EpcWorkStartDate,
    InjectionDate,
    CommercialOperationsDate,
}

/// How raw input for a field is treated before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stored verbatim.
    Text,
    /// Digits only, ten at most.
    Phone,
    /// Digits with an optional single decimal point.
    Numeric,
    /// Like `Numeric`, with an optional leading minus sign.
    Coordinate,
    /// Reformatted to `DD/MM/YYYY` while typing.
    Date,
    /// One of a fixed set of literals.
    Choice,
}

const PATHS: &[(FieldPath, &str)] = &[
    (FieldPath::Name, "name"),
    (FieldPath::Email, "email"),
    (FieldPath::Phone, "phone"),
    (FieldPath::Address, "address"),
    (FieldPath::Password, "password"),
    (FieldPath::ProjectName, "projectName"),
    (FieldPath::LocationAddress, "location.address"),
    (FieldPath::LocationTaluka, "location.taluka"),
    (FieldPath::LocationDistrict, "location.district"),
    (FieldPath::LocationState, "location.state"),
    (FieldPath::LocationLat, "location.coordinates.lat"),
    (FieldPath::LocationLng, "location.coordinates.lng"),
    (FieldPath::CapacityAc, "capacity.ac"),
    (FieldPath::CapacityDc, "capacity.dc"),
    (FieldPath::SubstationDistrict, "substation.district"),
    (FieldPath::SubstationTaluka, "substation.taluka"),
    (FieldPath::SubstationName, "substation.substation"),
    (FieldPath::DistanceFromSubstation, "distanceFromSubstation"),
    (FieldPath::LandOwnership, "landOwnership"),
    (FieldPath::StatusOfFarm, "statusOfFarm"),
    (FieldPath::StatusOfLoan, "statusOfLoan"),
    (FieldPath::RegulatoryStatus, "regulatoryStatus"),
    (FieldPath::TariffExpected, "tariffExpected"),
    (FieldPath::EpcWorkStartDate, "expectedCommissioningTimeline.epcWorkStartDate"),
    (FieldPath::InjectionDate, "expectedCommissioningTimeline.injectionDate"),
    (
        FieldPath::CommercialOperationsDate,
        "expectedCommissioningTimeline.commercialOperationsDate",
    ),
];

impl FieldPath {
    pub fn all() -> impl Iterator<Item = FieldPath> {
        PATHS.iter().map(|(path, _)| *path)
    }

    /// The dotted path used as form input name and error key.
    pub fn as_str(self) -> &'static str {
        PATHS
            .iter()
            .find(|(path, _)| *path == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }

    /// Number of segments in the dotted path (1 to 3).
    pub fn depth(self) -> usize {
        self.as_str().split('.').count()
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldPath::Phone => FieldKind::Phone,
            FieldPath::CapacityAc
            | FieldPath::CapacityDc
            | FieldPath::DistanceFromSubstation
            | FieldPath::TariffExpected => FieldKind::Numeric,
            FieldPath::LocationLat | FieldPath::LocationLng => FieldKind::Coordinate,
            FieldPath::LandOwnership
            | FieldPath::StatusOfFarm
            | FieldPath::StatusOfLoan
            | FieldPath::RegulatoryStatus => FieldKind::Choice,
            path if path.as_str().contains("expectedCommissioningTimeline") => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PATHS
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(path, _)| *path)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl RegistrationRecord {
    /// Current value of a leaf as the form displays it.
    pub fn field(&self, path: FieldPath) -> String {
        let timeline = &self.expected_commissioning_timeline;
        match path {
            FieldPath::Name => self.name.clone(),
            FieldPath::Email => self.email.clone(),
            FieldPath::Phone => self.phone.clone(),
            FieldPath::Address => self.address.clone(),
            FieldPath::Password => self.password.clone(),
            FieldPath::ProjectName => self.project_name.clone(),
            FieldPath::LocationAddress => self.location.address.clone(),
            FieldPath::LocationTaluka => self.location.taluka.clone(),
            FieldPath::LocationDistrict => self.location.district.clone(),
            FieldPath::LocationState => self.location.state.clone(),
            FieldPath::LocationLat => self.location.coordinates.lat.clone(),
            FieldPath::LocationLng => self.location.coordinates.lng.clone(),
            FieldPath::CapacityAc => self.capacity.ac.clone(),
            FieldPath::CapacityDc => self.capacity.dc.clone(),
            FieldPath::SubstationDistrict => self.substation.district.clone(),
            FieldPath::SubstationTaluka => self.substation.taluka.clone(),
            FieldPath::SubstationName => self.substation.substation.clone(),
            FieldPath::DistanceFromSubstation => self.distance_from_substation.clone(),
            FieldPath::LandOwnership => self.land_ownership.to_string(),
            FieldPath::StatusOfFarm => self.status_of_farm.to_string(),
            FieldPath::StatusOfLoan => self.status_of_loan.to_string(),
            FieldPath::RegulatoryStatus => self.regulatory_status.to_string(),
            FieldPath::TariffExpected => self.tariff_expected.clone(),
            FieldPath::EpcWorkStartDate => timeline.epc_work_start_date.clone(),
            FieldPath::InjectionDate => timeline.injection_date.clone(),
            FieldPath::CommercialOperationsDate => timeline.commercial_operations_date.clone(),
        }
    }

    /// Returns a copy of the record with exactly one leaf replaced.
    ///
    /// The value is stored as given; input rules are applied by the caller
    /// (see [`crate::form::rules::normalize_input`]). Choice fields still
    /// refuse literals outside their set.
    pub fn with_field(&self, path: FieldPath, value: String) -> Result<Self, FormError> {
        let mut next = self.clone();
        next.set_leaf(path, value)
            .map_err(|reason| FormError::Rejected {
                path: path.as_str().to_string(),
                reason,
            })?;
        Ok(next)
    }

    fn set_leaf(&mut self, path: FieldPath, value: String) -> Result<(), Rejection> {
        let timeline = &mut self.expected_commissioning_timeline;
        match path {
            FieldPath::Name => self.name = value,
            FieldPath::Email => self.email = value,
            FieldPath::Phone => self.phone = value,
            FieldPath::Address => self.address = value,
            FieldPath::Password => self.password = value,
            FieldPath::ProjectName => self.project_name = value,
            FieldPath::LocationAddress => self.location.address = value,
            FieldPath::LocationTaluka => self.location.taluka = value,
            FieldPath::LocationDistrict => self.location.district = value,
            FieldPath::LocationState => self.location.state = value,
            FieldPath::LocationLat => self.location.coordinates.lat = value,
            FieldPath::LocationLng => self.location.coordinates.lng = value,
            FieldPath::CapacityAc => self.capacity.ac = value,
            FieldPath::CapacityDc => self.capacity.dc = value,
            FieldPath::SubstationDistrict => self.substation.district = value,
            FieldPath::SubstationTaluka => self.substation.taluka = value,
            FieldPath::SubstationName => self.substation.substation = value,
            FieldPath::DistanceFromSubstation => self.distance_from_substation = value,
            FieldPath::LandOwnership => self.land_ownership = value.parse()?,
            FieldPath::StatusOfFarm => self.status_of_farm = value.parse()?,
            FieldPath::StatusOfLoan => self.status_of_loan = value.parse()?,
            FieldPath::RegulatoryStatus => self.regulatory_status = value.parse()?,
            FieldPath::TariffExpected => self.tariff_expected = value,
            FieldPath::EpcWorkStartDate => timeline.epc_work_start_date = value,
            FieldPath::InjectionDate => timeline.injection_date = value,
            FieldPath::CommercialOperationsDate => timeline.commercial_operations_date = value,
        }
        Ok(())
    }
}
