//! Core types for condo-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! loosely-typed [`RawRecord`] as received from the source, the canonical
//! [`Unit`] produced by the normalizer, and the [`Category`] discriminant used
//! by the dashboard hand-off and the query engine.

use serde::Serialize;

/// One element of the fetched payload before normalisation.
///
/// Keys are the spreadsheet column headers (which may carry emoji and
/// accents); values are whatever JSON the source produced for that cell.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A normalised resident/apartment record.
///
/// Every field is a defined, trimmed string. Predicates in the query engine
/// rely on this and never check for absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Synthetic identifier derived from the record's position in one load.
    pub id: String,
    /// Block and apartment, e.g. `"1-101"`. `"N/A"` when missing.
    pub block_apt: String,
    /// Resident name. `"Sem registro"` when missing.
    pub name: String,
    pub plate: String,
    pub phone: String,
    pub car_model: String,
    /// Identification sticker number issued by the condominium.
    pub sticker: String,
    pub observations: String,
    /// Free-text note about a rented parking spot.
    pub rented_spot_obs: String,
}

impl Unit {
    pub fn has_vehicle(&self) -> bool {
        !self.plate.trim().is_empty()
    }

    pub fn has_rented_spot(&self) -> bool {
        !self.rented_spot_obs.trim().is_empty()
    }

    pub fn has_observation(&self) -> bool {
        !self.observations.trim().is_empty()
    }
}

/// Mutually-exclusive classifier selected on the dashboard and applied by
/// the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    All,
    HasVehicle,
    HasRentedSpot,
    HasObservation,
}

impl Category {
    pub const ALL_CATEGORIES: [Category; 4] = [
        Category::All,
        Category::HasVehicle,
        Category::HasRentedSpot,
        Category::HasObservation,
    ];

    /// Whether `unit` belongs to this category.
    pub fn admits(self, unit: &Unit) -> bool {
        match self {
            Category::All => true,
            Category::HasVehicle => unit.has_vehicle(),
            Category::HasRentedSpot => unit.has_rented_spot(),
            Category::HasObservation => unit.has_observation(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::HasVehicle => "has-vehicle",
            Category::HasRentedSpot => "has-rented-spot",
            Category::HasObservation => "has-observation",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category name is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?} (expected all, has-vehicle, has-rented-spot or has-observation)")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL_CATEGORIES
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
