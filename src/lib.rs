//! Warband - terminal army battle simulator.
//!
//! This library exposes the battle core — units, armies, round resolution and
//! the match state machine — for testing and external use. The console layer
//! in `main.rs` is a thin adapter over these APIs.

pub mod army;
pub mod battle;
pub mod constants;
pub mod game;
pub mod units;
