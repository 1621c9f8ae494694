//! Normalizer — turns raw spreadsheet rows into canonical [`Unit`] values.
//!
//! The source is a spreadsheet exported as JSON, so rows arrive with
//! human-readable column headers, cells that may be missing, numeric cells,
//! and formula errors such as `#N/A`. Normalisation never fails: the worst
//! case is a unit whose fields are all defaults.

use crate::types::{RawRecord, Unit};
use serde_json::Value;

/// Placeholder for a missing block/apartment.
pub const BLOCK_APT_PLACEHOLDER: &str = "N/A";
/// Placeholder for a missing resident name.
pub const NAME_PLACEHOLDER: &str = "Sem registro";

/// Spreadsheet formula errors that stand in for "no value".
static SENTINELS: phf::Set<&'static str> = phf::phf_set! {
    "#N/A",
    "#REF!",
    "#VALUE!",
    "#DIV/0!",
    "#NAME?",
};

// ---------------------------------------------------------------------------
// Raw key lookup table
// ---------------------------------------------------------------------------

// Accepted column headers per field, in lookup order. The first spelling
// present in a record wins.
const BLOCK_APT_KEYS: &[&str] = &["BLOCO e APT"];
const NAME_KEYS: &[&str] = &["Nomes"];
const PLATE_KEYS: &[&str] = &["Placa"];
const PHONE_KEYS: &[&str] = &["Telefone 📞", "Telefone"];
const CAR_MODEL_KEYS: &[&str] = &["Carro - modelo 🚘", "Carro - modelo"];
const STICKER_KEYS: &[&str] = &["ADESIVO DE IDENTIFICAÇÃO"];
const OBSERVATIONS_KEYS: &[&str] = &["Observações 📋", "Observações"];
const RENTED_SPOT_KEYS: &[&str] = &["OBS VAGAS ALUGADAS"];

fn lookup<'a>(raw: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| raw.get(*k))
}

fn field(raw: &RawRecord, keys: &[&str]) -> String {
    clean_value(lookup(raw, keys))
}

fn field_or(raw: &RawRecord, keys: &[&str], placeholder: &str) -> String {
    let value = field(raw, keys);
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Clean a single cell: coerce to text, trim, and drop sentinel errors.
///
/// `None` and JSON `null` become `""`. Numbers and booleans use their JSON
/// text; arrays and objects their compact JSON encoding.
pub fn clean_value(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.trim(),
        Some(other) => return clean_text(other.to_string().trim()),
    };
    clean_text(text)
}

fn clean_text(trimmed: &str) -> String {
    if SENTINELS.contains(trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Normalise one raw record. `ordinal` is the record's position in the
/// payload and is the only input to the unit's `id`.
pub fn normalize(raw: &RawRecord, ordinal: usize) -> Unit {
    Unit {
        id: format!("unit-{ordinal}"),
        block_apt: field_or(raw, BLOCK_APT_KEYS, BLOCK_APT_PLACEHOLDER),
        name: field_or(raw, NAME_KEYS, NAME_PLACEHOLDER),
        plate: field(raw, PLATE_KEYS),
        phone: field(raw, PHONE_KEYS),
        car_model: field(raw, CAR_MODEL_KEYS),
        sticker: field(raw, STICKER_KEYS),
        observations: field(raw, OBSERVATIONS_KEYS),
        rented_spot_obs: field(raw, RENTED_SPOT_KEYS),
    }
}

/// Normalise a whole fetched payload.
///
/// Accepts a bare array of records or an envelope object carrying the array
/// under `data`. Any other shape yields an empty collection. Elements that
/// are not objects normalise as empty records.
pub fn normalize_payload(payload: &Value) -> Vec<Unit> {
    let Some(rows) = records(payload) else {
        tracing::debug!("payload is neither an array nor a data envelope");
        return Vec::new();
    };

    let empty = RawRecord::new();
    rows.iter()
        .enumerate()
        .map(|(ordinal, row)| normalize(row.as_object().unwrap_or(&empty), ordinal))
        .collect()
}

fn records(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(rows) => Some(rows),
        Value::Object(envelope) => envelope.get("data").and_then(Value::as_array),
        _ => None,
    }
}

impl Unit {
    /// The raw record this unit would have been normalised from, using the
    /// primary column header for each field.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        let pairs = [
            (BLOCK_APT_KEYS[0], &self.block_apt),
            (NAME_KEYS[0], &self.name),
            (PLATE_KEYS[0], &self.plate),
            (PHONE_KEYS[0], &self.phone),
            (CAR_MODEL_KEYS[0], &self.car_model),
            (STICKER_KEYS[0], &self.sticker),
            (OBSERVATIONS_KEYS[0], &self.observations),
            (RENTED_SPOT_KEYS[0], &self.rented_spot_obs),
        ];
        for (key, value) in pairs {
            raw.insert(key.to_string(), Value::String(value.clone()));
        }
        raw
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
