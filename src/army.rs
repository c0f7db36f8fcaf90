//! Army container and budget-aware recruitment.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{InvalidKind, Unit, UnitKind};

/// Why a purchase was rejected. Both cases are recoverable: the caller
/// re-prompts or moves on, the budget is never partially charged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    InvalidKind(#[from] InvalidKind),
    #[error("insufficient funds: need {cost} coins, have {budget}")]
    InsufficientFunds { cost: u32, budget: u32 },
}

/// An ordered sequence of units owned by one side. Order matters: round
/// resolution pairs units positionally by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Army {
    pub units: Vec<Unit>,
}

impl Army {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub fn size(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Attempts to recruit a unit of an already-resolved kind, appending it
    /// to the back line. Returns the updated budget. Funds are checked before
    /// construction, so a rejected Mage purchase consumes no RNG.
    pub fn recruit(
        &mut self,
        name: impl Into<String>,
        kind: UnitKind,
        budget: u32,
        rng: &mut impl Rng,
    ) -> Result<u32, PurchaseError> {
        let cost = kind.cost();
        if budget < cost {
            return Err(PurchaseError::InsufficientFunds { cost, budget });
        }
        self.units.push(Unit::recruit(name, kind, rng));
        Ok(budget - cost)
    }

    /// Attempts to create and append a unit from a kind identifier string.
    /// Returns the updated budget on success.
    pub fn purchase(
        &mut self,
        name: impl Into<String>,
        kind_id: &str,
        budget: u32,
        rng: &mut impl Rng,
    ) -> Result<u32, PurchaseError> {
        let kind =
            UnitKind::parse(kind_id).ok_or_else(|| InvalidKind(kind_id.to_string()))?;
        self.recruit(name, kind, budget, rng)
    }

    /// Removes all dead units, preserving the order of the survivors.
    /// Idempotent.
    pub fn prune_dead(&mut self) {
        self.units.retain(|u| u.is_alive());
    }

    /// One status line per unit, for the presentation layer.
    pub fn status_lines(&self) -> Vec<String> {
        self.units.iter().map(|u| u.status_line()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_purchase_appends_and_charges() {
        let mut rng = test_rng();
        let mut army = Army::new();

        let budget = army.purchase("Robin", "archer", 1000, &mut rng).unwrap();
        assert_eq!(budget, 800);
        assert_eq!(army.size(), 1);
        assert_eq!(army.units[0].kind, UnitKind::Archer);

        let budget = army.purchase("Arthur", "knight", budget, &mut rng).unwrap();
        assert_eq!(budget, 500);
        assert_eq!(army.size(), 2);
        // New recruits join at the end
        assert_eq!(army.units[1].name, "Arthur");
    }

    #[test]
    fn test_purchase_insufficient_funds() {
        let mut rng = test_rng();
        let mut army = Army::new();

        let err = army.purchase("Arthur", "knight", 250, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InsufficientFunds {
                cost: 300,
                budget: 250
            }
        );
        // Nothing charged, nothing recruited
        assert!(army.is_empty());
    }

    #[test]
    fn test_purchase_invalid_kind() {
        let mut rng = test_rng();
        let mut army = Army::new();

        let err = army.purchase("Bob", "6", 1000, &mut rng).unwrap_err();
        assert!(matches!(err, PurchaseError::InvalidKind(_)));
        assert!(army.is_empty());
    }

    #[test]
    fn test_prune_dead_preserves_order_and_is_idempotent() {
        let mut rng = test_rng();
        let mut army = Army::new();
        for name in ["A", "B", "C", "D"] {
            army.units.push(Unit::recruit(name, UnitKind::Archer, &mut rng));
        }
        army.units[1].health = 0;
        army.units[3].health = -20;

        army.prune_dead();
        let names: Vec<&str> = army.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        // Second prune changes nothing
        army.prune_dead();
        let names: Vec<&str> = army.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_status_lines() {
        let mut rng = test_rng();
        let mut army = Army::new();
        army.purchase("Robin", "archer", 1000, &mut rng).unwrap();

        let lines = army.status_lines();
        assert_eq!(lines, ["Archer Robin - HP: 80"]);
    }
}
