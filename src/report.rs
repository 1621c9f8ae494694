//! Plain-text and JSON rendering of dashboard and search results.

use condo_core::search::QuerySpec;
use condo_core::stats::{recent_observations, vehicle_distribution, VehicleDistribution};
use condo_core::{Snapshot, Stats, Unit};
use serde::Serialize;
use std::io::{self, Write};

/// Everything the dashboard page shows.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub stats: Stats,
    pub vehicles: VehicleDistribution,
    pub recent_observations: Vec<Unit>,
}

impl Dashboard {
    pub fn new(snapshot: &Snapshot, recent_limit: usize) -> Self {
        Self {
            stats: snapshot.stats,
            vehicles: vehicle_distribution(&snapshot.units),
            recent_observations: recent_observations(&snapshot.units, recent_limit),
        }
    }
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn write_dashboard<W: Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    let Dashboard {
        stats,
        vehicles,
        recent_observations: recent,
    } = dashboard;

    writeln!(out, "Condo — Dashboard")?;
    writeln!(out, "=================")?;
    writeln!(out)?;
    writeln!(out, "  Units:          {}", stats.total)?;
    writeln!(out, "  Vehicles:       {}", stats.with_vehicle)?;
    writeln!(out, "  Rented spots:   {}", stats.with_rented_spot)?;
    writeln!(out, "  Observations:   {}", stats.with_observation)?;
    writeln!(out)?;
    writeln!(
        out,
        "  With vehicle: {}  Without vehicle: {}",
        vehicles.with_vehicle, vehicles.without_vehicle
    )?;

    if !recent.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recent observations")?;
        for unit in recent {
            writeln!(out, "  [{}] {}: {}", unit.block_apt, unit.name, unit.observations)?;
        }
    }
    Ok(())
}

pub fn write_search<W: Write>(out: &mut W, spec: &QuerySpec, found: &[Unit]) -> io::Result<()> {
    if spec.is_active() {
        writeln!(out, "Filter: {}", describe(spec))?;
    }
    writeln!(out, "Found: {} records", found.len())?;
    for unit in found {
        writeln!(out)?;
        write_unit(out, unit)?;
    }
    Ok(())
}

fn write_unit<W: Write>(out: &mut W, unit: &Unit) -> io::Result<()> {
    writeln!(out, "  {}  {}", unit.block_apt, unit.name)?;
    let details = [
        ("Plate", &unit.plate),
        ("Model", &unit.car_model),
        ("Phone", &unit.phone),
        ("Sticker", &unit.sticker),
        ("Rented spot", &unit.rented_spot_obs),
        ("Observations", &unit.observations),
    ];
    for (label, value) in details {
        if !value.is_empty() {
            writeln!(out, "    {label}: {value}")?;
        }
    }
    Ok(())
}

fn describe(spec: &QuerySpec) -> String {
    let terms = [
        ("text", &spec.text),
        ("block", &spec.block),
        ("name", &spec.name),
        ("plate", &spec.plate),
        ("model", &spec.car_model),
    ];
    let mut parts: Vec<String> = terms
        .into_iter()
        .filter(|(_, term)| !term.is_empty())
        .map(|(label, term)| format!("{label}={term:?}"))
        .collect();
    parts.push(format!("category={}", spec.category));
    parts.join(" ")
}
