//! Unit kinds, base stats and per-unit combat primitives.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::*;

/// The four unit archetypes. A closed set: the engine dispatches on kind,
/// there is no open extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    Knight,
    Archer,
    Healer,
    Mage,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Knight,
        UnitKind::Archer,
        UnitKind::Healer,
        UnitKind::Mage,
    ];

    /// Parses a kind identifier. Accepts kind names (case-insensitive)
    /// and the shopping menu digits 1-4.
    pub fn parse(id: &str) -> Option<UnitKind> {
        match id.trim().to_ascii_lowercase().as_str() {
            "1" | "knight" => Some(UnitKind::Knight),
            "2" | "archer" => Some(UnitKind::Archer),
            "3" | "healer" => Some(UnitKind::Healer),
            "4" | "mage" => Some(UnitKind::Mage),
            _ => None,
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            UnitKind::Knight => KNIGHT_COST,
            UnitKind::Archer => ARCHER_COST,
            UnitKind::Healer => HEALER_COST,
            UnitKind::Mage => MAGE_COST,
        }
    }

    pub fn base_attack(&self) -> u32 {
        match self {
            UnitKind::Knight => KNIGHT_ATTACK,
            UnitKind::Archer => ARCHER_ATTACK,
            UnitKind::Healer => HEALER_ATTACK,
            // Mages roll their attack value; the minimum stands in as the base.
            UnitKind::Mage => MAGE_ATTACK_MIN,
        }
    }

    pub fn base_defense(&self) -> u32 {
        match self {
            UnitKind::Knight => KNIGHT_DEFENSE,
            UnitKind::Archer => ARCHER_DEFENSE,
            UnitKind::Healer => HEALER_DEFENSE,
            UnitKind::Mage => MAGE_DEFENSE,
        }
    }

    pub fn base_health(&self) -> i32 {
        match self {
            UnitKind::Knight => KNIGHT_HEALTH,
            UnitKind::Archer => ARCHER_HEALTH,
            UnitKind::Healer => HEALER_HEALTH,
            UnitKind::Mage => MAGE_HEALTH,
        }
    }

    /// Units with first strike act before their opponent within a pairing.
    /// The engine checks this flag rather than inspecting the kind.
    pub fn has_first_strike(&self) -> bool {
        matches!(self, UnitKind::Archer)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Knight => "Knight",
            UnitKind::Archer => "Archer",
            UnitKind::Healer => "Healer",
            UnitKind::Mage => "Mage",
        };
        write!(f, "{}", name)
    }
}

/// Unit construction failure: the kind identifier was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized unit kind `{0}`")]
pub struct InvalidKind(pub String);

/// A single soldier.
///
/// Health is signed so overkill damage stays visible to callers; a unit is
/// alive while health is above zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub kind: UnitKind,
    pub cost: u32,
    pub attack: u32,
    pub defense: u32,
    pub health: i32,
}

impl Unit {
    /// Creates a unit with its kind's base stats. Mages roll their opening
    /// attack value at recruitment time, consuming one RNG draw.
    pub fn recruit(name: impl Into<String>, kind: UnitKind, rng: &mut impl Rng) -> Self {
        let attack = match kind {
            UnitKind::Mage => rng.gen_range(MAGE_ATTACK_MIN..=MAGE_ATTACK_MAX),
            _ => kind.base_attack(),
        };

        Self {
            name: name.into(),
            kind,
            cost: kind.cost(),
            attack,
            defense: kind.base_defense(),
            health: kind.base_health(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies incoming damage after defense mitigation.
    /// Returns the damage actually taken.
    pub fn apply_damage(&mut self, raw: u32) -> u32 {
        let taken = raw.saturating_sub(self.defense);
        self.health -= taken as i32;
        taken
    }

    /// Restores health. Uncapped: there is no max-health ceiling.
    pub fn heal(&mut self, amount: u32) {
        self.health += amount as i32;
    }

    /// Human-readable summary for status printing. Not used by combat logic.
    pub fn status_line(&self) -> String {
        format!("{} {} - HP: {}", self.kind, self.name, self.health)
    }
}

/// Creates a unit from a kind identifier string. No partial or default
/// construction: an unrecognized identifier yields `InvalidKind`.
pub fn create_unit(
    name: impl Into<String>,
    kind_id: &str,
    rng: &mut impl Rng,
) -> Result<Unit, InvalidKind> {
    let kind = UnitKind::parse(kind_id).ok_or_else(|| InvalidKind(kind_id.to_string()))?;
    Ok(Unit::recruit(name, kind, rng))
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
    fn test_base_stats_table() {
        let mut rng = test_rng();

        let knight = Unit::recruit("Arthur", UnitKind::Knight, &mut rng);
        assert_eq!(knight.cost, 300);
        assert_eq!(knight.attack, 40);
        assert_eq!(knight.defense, 30);
        assert_eq!(knight.health, 120);

        let archer = Unit::recruit("Robin", UnitKind::Archer, &mut rng);
        assert_eq!(archer.cost, 200);
        assert_eq!(archer.attack, 50);
        assert_eq!(archer.defense, 10);
        assert_eq!(archer.health, 80);

        let healer = Unit::recruit("Elara", UnitKind::Healer, &mut rng);
        assert_eq!(healer.cost, 200);
        assert_eq!(healer.attack, 10);
        assert_eq!(healer.defense, 10);
        assert_eq!(healer.health, 80);
    }

    #[test]
    fn test_mage_rolls_opening_attack() {
        let mut rng = test_rng();
        let mut mirror = test_rng();

        let mage = Unit::recruit("Mirrim", UnitKind::Mage, &mut rng);
        let expected = mirror.gen_range(MAGE_ATTACK_MIN..=MAGE_ATTACK_MAX);

        assert_eq!(mage.attack, expected);
        assert!(mage.attack >= MAGE_ATTACK_MIN && mage.attack <= MAGE_ATTACK_MAX);
        assert_eq!(mage.defense, 5);
        assert_eq!(mage.health, 90);
    }

    #[test]
    fn test_parse_accepts_names_and_digits() {
        assert_eq!(UnitKind::parse("knight"), Some(UnitKind::Knight));
        assert_eq!(UnitKind::parse("ARCHER"), Some(UnitKind::Archer));
        assert_eq!(UnitKind::parse(" 3 "), Some(UnitKind::Healer));
        assert_eq!(UnitKind::parse("4"), Some(UnitKind::Mage));
        assert_eq!(UnitKind::parse("dragon"), None);
        assert_eq!(UnitKind::parse(""), None);
    }

    #[test]
    fn test_first_strike_flag() {
        assert!(UnitKind::Archer.has_first_strike());
        assert!(!UnitKind::Knight.has_first_strike());
        assert!(!UnitKind::Healer.has_first_strike());
        assert!(!UnitKind::Mage.has_first_strike());
    }

    #[test]
    fn test_apply_damage_mitigated_by_defense() {
        let mut rng = test_rng();
        let mut knight = Unit::recruit("Arthur", UnitKind::Knight, &mut rng);

        let taken = knight.apply_damage(50);
        assert_eq!(taken, 20); // 50 - 30 defense
        assert_eq!(knight.health, 100);
        assert!(knight.is_alive());
    }

    #[test]
    fn test_apply_damage_fully_absorbed() {
        let mut rng = test_rng();
        let mut knight = Unit::recruit("Arthur", UnitKind::Knight, &mut rng);

        let taken = knight.apply_damage(10);
        assert_eq!(taken, 0); // 10 raw against 30 defense
        assert_eq!(knight.health, 120);
    }

    #[test]
    fn test_apply_damage_overkill_goes_negative() {
        let mut rng = test_rng();
        let mut archer = Unit::recruit("Robin", UnitKind::Archer, &mut rng);

        let taken = archer.apply_damage(200);
        assert_eq!(taken, 190);
        assert_eq!(archer.health, -110);
        assert!(!archer.is_alive());
    }

    #[test]
    fn test_heal_is_uncapped() {
        let mut rng = test_rng();
        let mut archer = Unit::recruit("Robin", UnitKind::Archer, &mut rng);

        archer.heal(30);
        assert_eq!(archer.health, 110); // beyond the 80 starting value
    }

    #[test]
    fn test_create_unit_rejects_unknown_kind() {
        let mut rng = test_rng();
        let err = create_unit("Bob", "paladin", &mut rng).unwrap_err();
        assert_eq!(err, InvalidKind("paladin".to_string()));
    }

    #[test]
    fn test_create_unit_from_menu_digit() {
        let mut rng = test_rng();
        let unit = create_unit("Arthur", "1", &mut rng).unwrap();
        assert_eq!(unit.kind, UnitKind::Knight);
        assert_eq!(unit.name, "Arthur");
    }

    #[test]
    fn test_status_line() {
        let mut rng = test_rng();
        let knight = Unit::recruit("Arthur", UnitKind::Knight, &mut rng);
        assert_eq!(knight.status_line(), "Knight Arthur - HP: 120");
    }
}
