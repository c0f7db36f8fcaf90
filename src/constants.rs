// Economy constants
pub const INITIAL_BUDGET: u32 = 1000;
pub const ROUND_REWARD: u32 = 300;
pub const CHEAPEST_UNIT_COST: u32 = 200;

// Knight: armored line unit with a critical hit chance
pub const KNIGHT_COST: u32 = 300;
pub const KNIGHT_ATTACK: u32 = 40;
pub const KNIGHT_DEFENSE: u32 = 30;
pub const KNIGHT_HEALTH: i32 = 120;
pub const KNIGHT_CRIT_CHANCE: f64 = 0.2;
pub const KNIGHT_CRIT_MULTIPLIER: u32 = 2;

// Archer: fragile, hits hard and strikes first in a pairing
pub const ARCHER_COST: u32 = 200;
pub const ARCHER_ATTACK: u32 = 50;
pub const ARCHER_DEFENSE: u32 = 10;
pub const ARCHER_HEALTH: i32 = 80;

// Healer: restores allies instead of attacking
pub const HEALER_COST: u32 = 200;
pub const HEALER_ATTACK: u32 = 10;
pub const HEALER_DEFENSE: u32 = 10;
pub const HEALER_HEALTH: i32 = 80;
pub const HEAL_AMOUNT: u32 = 30;

// Mage: volatile attack value, may sit a turn out
pub const MAGE_COST: u32 = 300;
pub const MAGE_DEFENSE: u32 = 5;
pub const MAGE_HEALTH: i32 = 90;
pub const MAGE_SKIP_CHANCE: f64 = 0.25;
pub const MAGE_ATTACK_MIN: u32 = 10;
pub const MAGE_ATTACK_MAX: u32 = 40;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 50;
