//! Match state machine: army setup, round loop, rewards and win detection.
//!
//! `Game` owns both armies and their budgets and drives rounds through the
//! battle engine. Purchasing phases are caller-driven so the same API serves
//! the interactive console and scripted tests: the player side goes through
//! `player_purchase`, the AI side through `recruit_ai`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::army::{Army, PurchaseError};
use crate::battle::{resolve_round, RoundEvent};
use crate::constants::*;
use crate::units::UnitKind;

/// Where the match stands after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Ongoing,
    PlayerWon,
    AiWon,
}

/// One line of the bounded battle log kept for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub round: u32,
    pub message: String,
}

/// Everything that happened in one call to [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub round: u32,
    pub events: Vec<RoundEvent>,
    pub status: MatchStatus,
    /// Whether the per-round survival reward was granted to both sides.
    pub reward_granted: bool,
}

/// A full match between the player's army and the AI's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub player: Army,
    pub ai: Army,
    pub player_budget: u32,
    pub ai_budget: u32,
    /// Rounds fought so far; 0 until the first round resolves.
    pub round: u32,
    pub status: MatchStatus,
    pub battle_log: VecDeque<BattleLogEntry>,
}

impl Game {
    pub fn new(player_budget: u32, ai_budget: u32) -> Self {
        Self {
            player: Army::new(),
            ai: Army::new(),
            player_budget,
            ai_budget,
            round: 0,
            status: MatchStatus::Ongoing,
            battle_log: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
        }
    }

    /// Purchases a unit into the player army against the player budget.
    /// Callable without any I/O, so both the console menu and scripted tests
    /// can drive it.
    pub fn player_purchase(
        &mut self,
        name: &str,
        kind_id: &str,
        rng: &mut impl Rng,
    ) -> Result<(), PurchaseError> {
        self.player_budget = self
            .player
            .purchase(name, kind_id, self.player_budget, rng)?;
        Ok(())
    }

    /// AI purchasing phase: while the budget covers the cheapest unit, pick
    /// one of the four kinds uniformly at random and attempt the purchase,
    /// stopping on the first rejection. Returns the recruits' status lines.
    pub fn recruit_ai(&mut self, rng: &mut impl Rng) -> Vec<String> {
        let mut recruited = Vec::new();
        while self.ai_budget >= CHEAPEST_UNIT_COST {
            let kind = UnitKind::ALL[rng.gen_range(0..UnitKind::ALL.len())];
            let name = format!("AI_{}", self.ai.size() + 1);
            match self.ai.recruit(&name, kind, self.ai_budget, rng) {
                Ok(budget) => {
                    self.ai_budget = budget;
                    recruited.push(format!("{} {}", kind, name));
                }
                Err(_) => break,
            }
        }
        recruited
    }

    /// Plays one round: resolves combat, checks for a winner, and otherwise
    /// grants both sides the survival reward. Purchasing phases happen after
    /// this returns. Calling on a finished match is a no-op.
    pub fn play_round(&mut self, rng: &mut impl Rng) -> RoundReport {
        if self.status != MatchStatus::Ongoing {
            return RoundReport {
                round: self.round,
                events: Vec::new(),
                status: self.status,
                reward_granted: false,
            };
        }

        self.round += 1;
        let events = resolve_round(&mut self.player, &mut self.ai, rng);
        for event in &events {
            self.log(event.to_string());
        }

        // A slain defender never retaliates, so at most one side can be
        // emptied per round; an empty player army always means an AI win.
        let mut reward_granted = false;
        if self.player.is_empty() {
            self.status = MatchStatus::AiWon;
        } else if self.ai.is_empty() {
            self.status = MatchStatus::PlayerWon;
        } else {
            self.player_budget += ROUND_REWARD;
            self.ai_budget += ROUND_REWARD;
            reward_granted = true;
        }

        if let Some(summary) = self.winner_summary() {
            self.log(summary);
        }

        RoundReport {
            round: self.round,
            events,
            status: self.status,
            reward_granted,
        }
    }

    /// Terminal report: winning side, surviving unit count, rounds fought.
    /// `None` while the match is ongoing.
    pub fn winner_summary(&self) -> Option<String> {
        match self.status {
            MatchStatus::Ongoing => None,
            MatchStatus::PlayerWon => Some(format!(
                "Player wins after {} rounds with {} units remaining",
                self.round,
                self.player.size()
            )),
            MatchStatus::AiWon => Some(format!(
                "AI wins after {} rounds with {} units remaining",
                self.round,
                self.ai.size()
            )),
        }
    }

    fn log(&mut self, message: String) {
        if self.battle_log.len() >= BATTLE_LOG_CAPACITY {
            self.battle_log.pop_front();
        }
        self.battle_log.push_back(BattleLogEntry {
            round: self.round,
            message,
        });
    }
}
