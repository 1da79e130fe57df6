//! Gameplay constants and the difficulty table
//!
//! The per-level tier table ships as RON (Rusty Object Notation) and is
//! embedded into the binary at compile time. Parsed tables are validated
//! before use so a bad edit fails loudly at startup instead of producing
//! a silently broken game.

use serde::Deserialize;

// Logical drawing surface. All entity coordinates live in this space.
pub const SURFACE_W: f32 = 800.0;
pub const SURFACE_H: f32 = 600.0;

pub const PLAYER_SPAWN_X: f32 = 400.0;
pub const PLAYER_SPAWN_Y: f32 = 500.0;
pub const PLAYER_SIZE: f32 = 50.0;
pub const PLAYER_BASE_SPEED: f32 = 10.0;

/// Minimum milliseconds between shots.
pub const FIRE_INTERVAL_MS: f64 = 500.0;
/// Fire interval while the rapid-fire power-up is active.
pub const RAPID_FIRE_INTERVAL_MS: f64 = 200.0;

pub const BULLET_SIZE: f32 = 10.0;
pub const BULLET_SPEED: f32 = 10.0;
/// Muzzle offset from the player's left edge.
pub const BULLET_OFFSET_X: f32 = 20.0;

pub const ENEMY_SIZE: f32 = 50.0;
pub const ENEMY_SPAWN_Y: f32 = -50.0;

pub const COIN_SIZE: f32 = 20.0;
/// Coins dropped per destroyed enemy.
pub const COIN_BURST: usize = 3;
/// Coin drop speed range, [min, max).
pub const COIN_SPEED_MIN: f32 = 2.0;
pub const COIN_SPEED_MAX: f32 = 4.0;
/// Horizontal scatter of dropped coins, [0, this).
pub const COIN_SCATTER_X: f32 = 30.0;

pub const POWERUP_SIZE: f32 = 30.0;
pub const POWERUP_SPEED: f32 = 2.0;
pub const POWERUP_SPAWN_Y: f32 = -30.0;
/// Per-tick chance of a power-up drop.
pub const POWERUP_CHANCE: f64 = 0.005;
/// How long a collected power-up lasts.
pub const EFFECT_DURATION_MS: f64 = 5000.0;
pub const SPEED_BOOST_FACTOR: f32 = 1.5;

pub const EXPLOSION_FRAMES: u32 = 15;
/// Explosions draw larger than the enemy that spawned them.
pub const EXPLOSION_DRAW_SIZE: f32 = 64.0;

pub const STARTING_LIVES: u32 = 3;

pub const SCORE_PER_KILL: u32 = 10;
pub const SCORE_PER_COIN: u32 = 5;

// HUD panel, anchored to the top-right corner.
pub const HUD_W: f32 = 160.0;
pub const HUD_H: f32 = 100.0;
pub const HUD_MARGIN: f32 = 10.0;

// Ship-select menu layout.
pub const MENU_TITLE_Y: f32 = 80.0;
pub const MENU_SHIP_SIZE: f32 = 60.0;
pub const MENU_SHIP_Y: f32 = 150.0;
pub const MENU_SHIP_XS: [f32; 3] = [20.0, 370.0, 720.0];
pub const MENU_START_X: f32 = 325.0;
pub const MENU_START_Y: f32 = 250.0;
pub const MENU_START_W: f32 = 150.0;
pub const MENU_START_H: f32 = 50.0;

/// One difficulty tier: how often enemies appear and how fast they fall.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TierConfig {
    pub spawn_rate: f64,
    pub enemy_speed: f32,
}

/// The full difficulty table, one tier per level starting at level 1.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelTable {
    tiers: Vec<TierConfig>,
}

/// Error type for level table loading
#[derive(Debug)]
pub enum TableError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for TableError {
    fn from(e: ron::error::SpannedError) -> Self {
        TableError::ParseError(e)
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::ParseError(e) => write!(f, "Parse error: {}", e),
            TableError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for TableError {}

impl LevelTable {
    /// Parse and validate a RON tier document.
    pub fn from_str(s: &str) -> Result<Self, TableError> {
        let table: LevelTable = ron::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    /// The table bundled with the game.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_str(include_str!("../assets/levels.ron"))
    }

    fn validate(&self) -> Result<(), TableError> {
        if self.tiers.is_empty() {
            return Err(TableError::ValidationError(
                "tier table must not be empty".to_string(),
            ));
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            if !(tier.spawn_rate > 0.0 && tier.spawn_rate <= 1.0) {
                return Err(TableError::ValidationError(format!(
                    "tier {}: spawn_rate {} outside (0, 1]",
                    i + 1,
                    tier.spawn_rate
                )));
            }
            if !(tier.enemy_speed.is_finite() && tier.enemy_speed > 0.0) {
                return Err(TableError::ValidationError(format!(
                    "tier {}: enemy_speed {} must be positive",
                    i + 1,
                    tier.enemy_speed
                )));
            }
        }
        Ok(())
    }

    /// Tier for a 1-based level. Levels past the table reuse the last tier.
    pub fn tier(&self, level: u32) -> TierConfig {
        let idx = (level.max(1) as usize - 1).min(self.tiers.len() - 1);
        self.tiers[idx]
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
