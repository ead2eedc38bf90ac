//! Locations saved from the map picker.

use serde::{Deserialize, Serialize};

use super::registration::{Coordinates, Location};

/// A site chosen in the map picker. Only the first saved location is copied
/// into the registration record; the rest are listed for reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl SavedLocation {
    /// Record form of this location. A missing or zero coordinate becomes
    /// the empty string.
    pub fn to_location(&self) -> Location {
        Location {
            address: self.address.clone(),
            taluka: self.taluka.clone(),
            district: self.district.clone(),
            state: self.state.clone(),
            coordinates: Coordinates {
                lat: coordinate_text(self.lat),
                lng: coordinate_text(self.lng),
            },
        }
    }
}

fn coordinate_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => v.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_missing_coordinates_become_empty() {
        let saved = SavedLocation {
            district: "Pune".to_string(),
            lat: Some(18.52),
            lng: Some(0.0),
            ..Default::default()
        };
        let location = saved.to_location();
        assert_eq!(location.district, "Pune");
        assert_eq!(location.coordinates.lat, "18.52");
        assert_eq!(location.coordinates.lng, "");
    }
}
