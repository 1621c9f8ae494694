//! Search layer — multi-predicate filtering over the unit collection.
//!
//! A [`QuerySpec`] combines a free-text term, four per-field terms and a
//! [`Category`]. A unit matches when every active predicate passes. All
//! comparisons are case-insensitive substring matches; there is no regex or
//! exact mode.

use crate::types::{Category, Unit};
use serde::Serialize;

/// Parameters of one search, as entered by the user.
///
/// Empty terms are inactive. Terms are used verbatim (not trimmed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    /// Matched against block/apt, name, plate, phone, sticker and car model.
    pub text: String,
    pub block: String,
    pub name: String,
    pub plate: String,
    pub car_model: String,
    pub category: Category,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A spec with only the category set. Used when a dashboard counter is
    /// selected and the search opens pre-filtered.
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn text(mut self, term: impl Into<String>) -> Self {
        self.text = term.into();
        self
    }

    pub fn block(mut self, term: impl Into<String>) -> Self {
        self.block = term.into();
        self
    }

    pub fn name(mut self, term: impl Into<String>) -> Self {
        self.name = term.into();
        self
    }

    pub fn plate(mut self, term: impl Into<String>) -> Self {
        self.plate = term.into();
        self
    }

    pub fn car_model(mut self, term: impl Into<String>) -> Self {
        self.car_model = term.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// True when any term is set or the category is narrower than `All`.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
            || !self.block.is_empty()
            || !self.name.is_empty()
            || !self.plate.is_empty()
            || !self.car_model.is_empty()
            || self.category != Category::All
    }

    /// Reset every term and the category.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// A [`QuerySpec`] with its terms lowercased once, ready to test many units.
#[derive(Debug)]
struct Matcher {
    text: String,
    block: String,
    name: String,
    plate: String,
    car_model: String,
    category: Category,
}

impl Matcher {
    fn new(spec: &QuerySpec) -> Self {
        Self {
            text: spec.text.to_lowercase(),
            block: spec.block.to_lowercase(),
            name: spec.name.to_lowercase(),
            plate: spec.plate.to_lowercase(),
            car_model: spec.car_model.to_lowercase(),
            category: spec.category,
        }
    }

    fn matches(&self, unit: &Unit) -> bool {
        // Category is a trim check, cheapest first.
        self.category.admits(unit)
            && contains(&unit.block_apt, &self.block)
            && contains(&unit.name, &self.name)
            && contains(&unit.plate, &self.plate)
            && contains(&unit.car_model, &self.car_model)
            && self.matches_text(unit)
    }

    fn matches_text(&self, unit: &Unit) -> bool {
        if self.text.is_empty() {
            return true;
        }
        [
            &unit.block_apt,
            &unit.name,
            &unit.plate,
            &unit.phone,
            &unit.sticker,
            &unit.car_model,
        ]
        .into_iter()
        .any(|field| contains(field, &self.text))
    }
}

/// Case-insensitive substring test; `needle` must already be lowercase.
fn contains(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check a single unit against `spec`.
pub fn matches(unit: &Unit, spec: &QuerySpec) -> bool {
    Matcher::new(spec).matches(unit)
}

/// Return the units matching `spec`, in input order.
pub fn evaluate(units: &[Unit], spec: &QuerySpec) -> Vec<Unit> {
    let matcher = Matcher::new(spec);
    units
        .iter()
        .filter(|unit| matcher.matches(unit))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
