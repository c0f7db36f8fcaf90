//! Round resolution between two armies.
//!
//! The engine is stateless: it mutates the two armies in place and reports
//! what happened as a list of events for the presentation layer, the same way
//! the tick loop communicates with the UI elsewhere in the crate.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::army::Army;
use crate::constants::*;
use crate::units::UnitKind;

/// Something that happened during round resolution. Presentation data only;
/// events are never fed back into combat logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A pair of living units engaged.
    Clash { left: String, right: String },
    /// An attack landed (damage is after defense mitigation, may be zero).
    Strike {
        attacker: String,
        target: String,
        damage: u32,
        crit: bool,
    },
    /// A unit's health dropped to zero or below.
    Fell { name: String },
    /// A healer restored an ally.
    Healed {
        healer: String,
        ally: String,
        amount: u32,
    },
    /// A mage sat the turn out.
    Skipped { name: String },
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundEvent::Clash { left, right } => {
                write!(f, "{} clashes with {}", left, right)
            }
            RoundEvent::Strike {
                attacker,
                target,
                damage,
                crit: true,
            } => write!(
                f,
                "{} lands a critical hit on {} for {} damage",
                attacker, target, damage
            ),
            RoundEvent::Strike {
                attacker,
                target,
                damage,
                crit: false,
            } => write!(f, "{} hits {} for {} damage", attacker, target, damage),
            RoundEvent::Fell { name } => write!(f, "{} has fallen", name),
            RoundEvent::Healed {
                healer,
                ally,
                amount,
            } => write!(f, "{} heals {} (+{} HP)", healer, ally, amount),
            RoundEvent::Skipped { name } => {
                write!(f, "{} is exhausted and skips the turn", name)
            }
        }
    }
}

/// Resolves one round of combat between two armies.
///
/// Units are paired positionally; only the first `min(len a, len b)` positions
/// engage, the longer army's tail sits the round out. A pair is skipped
/// entirely if either member is already dead when its turn comes up. Within a
/// pair the side with first strike acts first (side A by default); the second
/// attacker acts only if still alive. Afterwards both armies are pruned of
/// dead units, preserving order.
pub fn resolve_round(a: &mut Army, b: &mut Army, rng: &mut impl Rng) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    let n = a.size().min(b.size());

    for i in 0..n {
        if !a.units[i].is_alive() || !b.units[i].is_alive() {
            continue;
        }
        events.push(RoundEvent::Clash {
            left: a.units[i].name.clone(),
            right: b.units[i].name.clone(),
        });

        // First strike only matters when exactly one side has it.
        let b_first =
            b.units[i].kind.has_first_strike() && !a.units[i].kind.has_first_strike();

        if b_first {
            strike(b, a, i, rng, &mut events);
            if a.units[i].is_alive() {
                strike(a, b, i, rng, &mut events);
            }
        } else {
            strike(a, b, i, rng, &mut events);
            if b.units[i].is_alive() {
                strike(b, a, i, rng, &mut events);
            }
        }
    }

    a.prune_dead();
    b.prune_dead();
    events
}

/// Executes one unit's action: attack the opposing unit at the same index,
/// or, for healers, restore a random living ally instead.
fn strike(
    attackers: &mut Army,
    defenders: &mut Army,
    i: usize,
    rng: &mut impl Rng,
    events: &mut Vec<RoundEvent>,
) {
    match attackers.units[i].kind {
        UnitKind::Knight => {
            let crit = rng.gen::<f64>() < KNIGHT_CRIT_CHANCE;
            let raw = if crit {
                attackers.units[i].attack * KNIGHT_CRIT_MULTIPLIER
            } else {
                attackers.units[i].attack
            };
            deal_damage(attackers, defenders, i, raw, crit, events);
        }
        UnitKind::Archer => {
            let raw = attackers.units[i].attack;
            deal_damage(attackers, defenders, i, raw, false, events);
        }
        UnitKind::Healer => {
            let eligible: Vec<usize> = attackers
                .units
                .iter()
                .enumerate()
                .filter(|(j, u)| *j != i && u.is_alive())
                .map(|(j, _)| j)
                .collect();
            // No eligible ally: the healer does nothing and draws no RNG.
            if !eligible.is_empty() {
                let ally = eligible[rng.gen_range(0..eligible.len())];
                attackers.units[ally].heal(HEAL_AMOUNT);
                events.push(RoundEvent::Healed {
                    healer: attackers.units[i].name.clone(),
                    ally: attackers.units[ally].name.clone(),
                    amount: HEAL_AMOUNT,
                });
            }
        }
        UnitKind::Mage => {
            if rng.gen::<f64>() < MAGE_SKIP_CHANCE {
                events.push(RoundEvent::Skipped {
                    name: attackers.units[i].name.clone(),
                });
            } else {
                let raw = rng.gen_range(MAGE_ATTACK_MIN..=MAGE_ATTACK_MAX);
                attackers.units[i].attack = raw;
                deal_damage(attackers, defenders, i, raw, false, events);
            }
        }
    }
}

fn deal_damage(
    attackers: &Army,
    defenders: &mut Army,
    i: usize,
    raw: u32,
    crit: bool,
    events: &mut Vec<RoundEvent>,
) {
    let taken = defenders.units[i].apply_damage(raw);
    events.push(RoundEvent::Strike {
        attacker: attackers.units[i].name.clone(),
        target: defenders.units[i].name.clone(),
        damage: taken,
        crit,
    });
    if !defenders.units[i].is_alive() {
        events.push(RoundEvent::Fell {
            name: defenders.units[i].name.clone(),
        });
    }
}
