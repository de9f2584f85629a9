//! The vehicle record model.
//!
//! One [`VehicleRecord`] describes a single vehicle from the population
//! table. Every recognized field may be absent; how an absent field is
//! treated is decided per aggregator, not here.

use serde::Deserialize;

/// One row of the vehicle population table.
///
/// Serde names match the source table's column headers, so records
/// deserialize directly from header-driven CSV input; columns outside
/// the recognized set are ignored, and empty cells become `None`.
/// Records are immutable for the duration of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VehicleRecord {
    /// Manufacturer name; open-ended vocabulary.
    #[serde(rename = "Make", default)]
    pub make: Option<String>,

    /// Model year.
    #[serde(rename = "Model Year", default)]
    pub model_year: Option<i32>,

    /// Electric range in miles.
    #[serde(rename = "Electric Range", default)]
    pub electric_range: Option<f64>,

    /// Vehicle type category, e.g. `"Battery Electric Vehicle (BEV)"`.
    #[serde(rename = "Electric Vehicle Type", default)]
    pub vehicle_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_all_absent() {
        let record = VehicleRecord::default();
        assert_eq!(record.make, None);
        assert_eq!(record.model_year, None);
        assert_eq!(record.electric_range, None);
        assert_eq!(record.vehicle_type, None);
    }

    #[test]
    fn test_record_clone_eq() {
        let record = VehicleRecord {
            make: Some("Tesla".to_string()),
            model_year: Some(2020),
            electric_range: Some(250.0),
            vehicle_type: Some("BEV".to_string()),
        };
        assert_eq!(record.clone(), record);
    }
}
