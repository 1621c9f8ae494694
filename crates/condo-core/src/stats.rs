//! Collection-wide counters shown on the dashboard.
//!
//! Everything here is computed over the full collection and is independent of
//! any active search.

use crate::types::Unit;
use serde::Serialize;

/// The four dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub with_vehicle: usize,
    pub with_rented_spot: usize,
    pub with_observation: usize,
}

/// Split of units with and without a registered vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VehicleDistribution {
    pub with_vehicle: usize,
    pub without_vehicle: usize,
}

pub fn compute_stats(units: &[Unit]) -> Stats {
    units.iter().fold(
        Stats {
            total: units.len(),
            ..Stats::default()
        },
        |mut acc, unit| {
            acc.with_vehicle += usize::from(unit.has_vehicle());
            acc.with_rented_spot += usize::from(unit.has_rented_spot());
            acc.with_observation += usize::from(unit.has_observation());
            acc
        },
    )
}

pub fn vehicle_distribution(units: &[Unit]) -> VehicleDistribution {
    let with_vehicle = units.iter().filter(|u| u.has_vehicle()).count();
    VehicleDistribution {
        with_vehicle,
        without_vehicle: units.len() - with_vehicle,
    }
}

/// The first `limit` units, in collection order, that carry an observation.
///
/// The payload has no timestamps, so "recent" means "first found".
pub fn recent_observations(units: &[Unit], limit: usize) -> Vec<Unit> {
    units
        .iter()
        .filter(|u| u.has_observation())
        .take(limit)
        .cloned()
        .collect()
}
