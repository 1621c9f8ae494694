//! Test builders — ergonomic constructors for `Unit` values and collections.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use condo_core::normalizer::{BLOCK_APT_PLACEHOLDER, NAME_PLACEHOLDER};
use condo_core::Unit;

// ---------------------------------------------------------------------------
// UnitBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Unit`] test fixtures. Starts from the same defaults
/// the normalizer produces for an empty row.
///
/// # Example
///
/// ```rust
/// let unit = UnitBuilder::new(0)
///     .block_apt("1-101")
///     .name("Maria")
///     .plate("ABC1D23")
///     .build();
/// ```
pub struct UnitBuilder {
    unit: Unit,
}

impl UnitBuilder {
    pub fn new(ordinal: usize) -> Self {
        Self {
            unit: Unit {
                id: format!("unit-{ordinal}"),
                block_apt: BLOCK_APT_PLACEHOLDER.to_string(),
                name: NAME_PLACEHOLDER.to_string(),
                plate: String::new(),
                phone: String::new(),
                car_model: String::new(),
                sticker: String::new(),
                observations: String::new(),
                rented_spot_obs: String::new(),
            },
        }
    }

    pub fn block_apt(mut self, value: &str) -> Self {
        self.unit.block_apt = value.to_string();
        self
    }

    pub fn name(mut self, value: &str) -> Self {
        self.unit.name = value.to_string();
        self
    }

    pub fn plate(mut self, value: &str) -> Self {
        self.unit.plate = value.to_string();
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.unit.phone = value.to_string();
        self
    }

    pub fn car_model(mut self, value: &str) -> Self {
        self.unit.car_model = value.to_string();
        self
    }

    pub fn sticker(mut self, value: &str) -> Self {
        self.unit.sticker = value.to_string();
        self
    }

    pub fn observations(mut self, value: &str) -> Self {
        self.unit.observations = value.to_string();
        self
    }

    pub fn rented_spot(mut self, value: &str) -> Self {
        self.unit.rented_spot_obs = value.to_string();
        self
    }

    pub fn build(self) -> Unit {
        self.unit
    }
}

// ---------------------------------------------------------------------------
// Collection helpers
// ---------------------------------------------------------------------------

/// Build `n` units cycling through vehicle / rented-spot / observation
/// combinations. Every third unit has a plate, every fourth a rented spot,
/// every fifth an observation.
pub fn build_collection(n: usize) -> Vec<Unit> {
    (0..n)
        .map(|i| {
            let mut b = UnitBuilder::new(i)
                .block_apt(&format!("{}-{}", i % 4 + 1, 100 + i))
                .name(&format!("Morador {i}"))
                .phone(&format!("1198765{i:04}"));
            if i % 3 == 0 {
                b = b.plate(&format!("ABC{i:04}")).car_model("Fiat Uno");
            }
            if i % 4 == 0 {
                b = b.rented_spot(&format!("vaga {i}"));
            }
            if i % 5 == 0 {
                b = b.observations("entrega na portaria");
            }
            b.build()
        })
        .collect()
}

/// Collect the ids of a result set, for compact ordering assertions.
pub fn ids(units: &[Unit]) -> Vec<String> {
    units.iter().map(|u| u.id.clone()).collect()
}
