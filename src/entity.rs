//! Game entity records
//!
//! Plain data structs. Movement, collision and scoring live in the
//! simulation tick; nothing here has behavior beyond construction.

use crate::assets::ImageKey;
use crate::config;
use crate::geometry::Rect;

/// Kinds of power-up that can drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Player speed ×1.5 while active.
    SpeedBoost,
    /// Fire interval 500 ms → 200 ms while active.
    RapidFire,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::SpeedBoost, PowerUpKind::RapidFire];
}

/// A collected power-up whose effect is still running. The session owns
/// these; the tick expires them. At most one per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    pub expires_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub base_speed: f32,
    pub fire_interval_ms: f64,
    pub last_shot_ms: f64,
    pub skin: ImageKey,
}

impl Player {
    pub fn new(skin: ImageKey) -> Self {
        Self {
            rect: Rect::new(
                config::PLAYER_SPAWN_X,
                config::PLAYER_SPAWN_Y,
                config::PLAYER_SIZE,
                config::PLAYER_SIZE,
            ),
            speed: config::PLAYER_BASE_SPEED,
            base_speed: config::PLAYER_BASE_SPEED,
            fire_interval_ms: config::FIRE_INTERVAL_MS,
            // One interval in the past, so the first shot is never gated.
            last_shot_ms: -config::FIRE_INTERVAL_MS,
            skin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    pub speed: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, config::BULLET_SIZE, config::BULLET_SIZE),
            speed: config::BULLET_SPEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, config::ENEMY_SPAWN_Y, config::ENEMY_SIZE, config::ENEMY_SIZE),
            speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub rect: Rect,
    pub speed: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, config::COIN_SIZE, config::COIN_SIZE),
            speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub rect: Rect,
    pub speed: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f32, kind: PowerUpKind) -> Self {
        Self {
            rect: Rect::new(
                x,
                config::POWERUP_SPAWN_Y,
                config::POWERUP_SIZE,
                config::POWERUP_SIZE,
            ),
            speed: config::POWERUP_SPEED,
            kind,
        }
    }
}

/// A short-lived blast drawn where an enemy died. (x, y) is the center.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub frames_left: u32,
}

impl Explosion {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            frames_left: config::EXPLOSION_FRAMES,
        }
    }
}
