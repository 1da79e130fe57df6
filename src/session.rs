//! Per-run game state
//!
//! A `Session` is one play-through: it is created when the player hits
//! Start and dropped when they return to the menu. Everything that must
//! reset between runs lives here, including the power-up effect timers,
//! so a finished run can never leak state into the next one.

use crate::assets::ImageKey;
use crate::entity::{ActiveEffect, Bullet, Coin, Enemy, Explosion, Player, PowerUp};

#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub explosions: Vec<Explosion>,
    pub effects: Vec<ActiveEffect>,
    pub score: u32,
    /// 1-based difficulty level, indexing the tier table.
    pub level: u32,
    pub enemies_destroyed: u32,
    /// Set when lives run out. The world keeps falling afterwards but
    /// spawning, steering and firing stop.
    pub game_over: bool,
}

impl Session {
    pub fn new(skin: ImageKey) -> Self {
        Self {
            player: Player::new(skin),
            bullets: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            power_ups: Vec::new(),
            explosions: Vec::new(),
            effects: Vec::new(),
            score: 0,
            level: 1,
            enemies_destroyed: 0,
            game_over: false,
        }
    }
}
