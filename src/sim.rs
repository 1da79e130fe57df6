//! Simulation tick
//!
//! One call advances the world by one frame. All randomness comes
//! through the injected `rng` and all timing through `now_ms`, so tests
//! drive the simulation deterministically with a seeded generator and a
//! synthetic clock. Sound playback is reported as cues for the frame
//! loop to execute; nothing here touches the audio device.
//!
//! Collision removal is two-phase: a scan pass records indices, then a
//! compaction pass rebuilds the vectors. Nothing is removed while the
//! scan still iterates, so one bullet can never account for two enemies
//! and removals never shift an index under a live loop.

use rand::Rng;

use crate::config;
use crate::config::LevelTable;
use crate::entity::{ActiveEffect, Bullet, Coin, Enemy, Explosion, PowerUp, PowerUpKind};
use crate::input::Intents;
use crate::session::Session;

/// A sound-playback request raised by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Hit,
    Collect,
}

/// Advance the session by one frame.
///
/// `lives` lives outside the session so the surrounding state machine
/// owns it across the run. Ordering matters and mirrors the frame
/// sequence the game was balanced around: bullets resolve against the
/// enemy positions of the previous frame, and a game-over set while
/// enemies advance suppresses the spawn rolls later in the same tick.
pub fn tick(
    session: &mut Session,
    lives: &mut u32,
    levels: &LevelTable,
    intents: &Intents,
    now_ms: f64,
    rng: &mut impl Rng,
) -> Vec<SoundCue> {
    let mut cues = Vec::new();

    expire_effects(session, now_ms);
    steer_and_fire(session, intents, now_ms, &mut cues);
    update_bullets(session, rng, &mut cues);
    spawn_enemies(session, levels, rng);
    update_enemies(session, lives);
    spawn_power_ups(session, rng);
    update_power_ups(session, now_ms, &mut cues);
    update_coins(session, &mut cues);
    update_explosions(session);

    cues
}

/// Drop expired power-up effects, reverting the field each kind owns to
/// its base value. Kinds expire independently.
fn expire_effects(session: &mut Session, now_ms: f64) {
    let mut expired: Vec<PowerUpKind> = Vec::new();
    session.effects.retain(|fx| {
        if fx.expires_at_ms <= now_ms {
            expired.push(fx.kind);
            false
        } else {
            true
        }
    });
    for kind in expired {
        match kind {
            PowerUpKind::SpeedBoost => session.player.speed = session.player.base_speed,
            PowerUpKind::RapidFire => {
                session.player.fire_interval_ms = config::FIRE_INTERVAL_MS;
            }
        }
    }
}

/// Horizontal movement and firing. Disabled entirely after game over.
fn steer_and_fire(session: &mut Session, intents: &Intents, now_ms: f64, cues: &mut Vec<SoundCue>) {
    if session.game_over {
        return;
    }

    let player = &mut session.player;
    if intents.left {
        player.rect.x -= player.speed;
    }
    if intents.right {
        player.rect.x += player.speed;
    }
    player.rect.x = player.rect.x.clamp(0.0, config::SURFACE_W - player.rect.w);

    if intents.fire && now_ms - player.last_shot_ms >= player.fire_interval_ms {
        session
            .bullets
            .push(Bullet::new(player.rect.x + config::BULLET_OFFSET_X, player.rect.y));
        player.last_shot_ms = now_ms;
        cues.push(SoundCue::Shoot);
    }
}

/// Advance bullets, resolve hits against enemies, pay out kill rewards,
/// then drop spent bullets, dead enemies and bullets past the top.
fn update_bullets(session: &mut Session, rng: &mut impl Rng, cues: &mut Vec<SoundCue>) {
    for bullet in &mut session.bullets {
        bullet.rect.y -= bullet.speed;
    }

    let mut spent_bullets: Vec<usize> = Vec::new();
    let mut killed_enemies: Vec<usize> = Vec::new();
    for (bi, bullet) in session.bullets.iter().enumerate() {
        for (ei, enemy) in session.enemies.iter().enumerate() {
            if killed_enemies.contains(&ei) {
                continue;
            }
            if bullet.rect.overlaps(&enemy.rect) {
                spent_bullets.push(bi);
                killed_enemies.push(ei);
                break;
            }
        }
    }

    for &ei in &killed_enemies {
        let enemy_rect = session.enemies[ei].rect;
        session.score += config::SCORE_PER_KILL * session.level;
        session.enemies_destroyed += 1;
        session
            .explosions
            .push(Explosion::new(enemy_rect.center_x(), enemy_rect.center_y()));
        for _ in 0..config::COIN_BURST {
            let x = enemy_rect.x + rng.gen_range(0.0..config::COIN_SCATTER_X);
            let speed = rng.gen_range(config::COIN_SPEED_MIN..config::COIN_SPEED_MAX);
            session.coins.push(Coin::new(x, enemy_rect.y, speed));
        }
        cues.push(SoundCue::Hit);
    }

    let enemies = std::mem::take(&mut session.enemies);
    session.enemies = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e)
        .collect();

    let bullets = std::mem::take(&mut session.bullets);
    session.bullets = bullets
        .into_iter()
        .enumerate()
        .filter(|(i, b)| !spent_bullets.contains(i) && b.rect.y > 0.0)
        .map(|(_, b)| b)
        .collect();
}

/// One spawn roll per tick against the current tier's rate.
fn spawn_enemies(session: &mut Session, levels: &LevelTable, rng: &mut impl Rng) {
    if session.game_over {
        return;
    }
    let tier = levels.tier(session.level);
    if rng.gen_bool(tier.spawn_rate) {
        let x = rng.gen_range(0.0..config::SURFACE_W - config::ENEMY_SIZE);
        session.enemies.push(Enemy::new(x, tier.enemy_speed));
    }
}

/// Advance enemies and charge a life per enemy that reaches the player.
/// Runs after game over too: the world keeps falling, it just stops
/// costing anything once lives are gone.
fn update_enemies(session: &mut Session, lives: &mut u32) {
    let player_rect = session.player.rect;

    let mut hits: Vec<usize> = Vec::new();
    for (i, enemy) in session.enemies.iter_mut().enumerate() {
        enemy.rect.y += enemy.speed;
        if enemy.rect.overlaps(&player_rect) {
            hits.push(i);
        }
    }

    for _ in &hits {
        *lives = lives.saturating_sub(1);
    }
    if *lives == 0 {
        session.game_over = true;
    }

    let enemies = std::mem::take(&mut session.enemies);
    session.enemies = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, e)| !hits.contains(i) && e.rect.y <= config::SURFACE_H)
        .map(|(_, e)| e)
        .collect();
}

/// Rare drop roll, uniform over the power-up kinds.
fn spawn_power_ups(session: &mut Session, rng: &mut impl Rng) {
    if session.game_over {
        return;
    }
    if rng.gen_bool(config::POWERUP_CHANCE) {
        let x = rng.gen_range(0.0..config::SURFACE_W - config::POWERUP_SIZE);
        let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
        session.power_ups.push(PowerUp::new(x, kind));
    }
}

/// Advance power-ups and collect the ones the player touches.
fn update_power_ups(session: &mut Session, now_ms: f64, cues: &mut Vec<SoundCue>) {
    let player_rect = session.player.rect;

    let mut collected: Vec<usize> = Vec::new();
    for (i, item) in session.power_ups.iter_mut().enumerate() {
        item.rect.y += item.speed;
        if item.rect.overlaps(&player_rect) {
            collected.push(i);
        }
    }

    for &i in &collected {
        let kind = session.power_ups[i].kind;
        apply_effect(session, kind, now_ms);
        cues.push(SoundCue::Collect);
    }

    let power_ups = std::mem::take(&mut session.power_ups);
    session.power_ups = power_ups
        .into_iter()
        .enumerate()
        .filter(|(i, p)| !collected.contains(i) && p.rect.y < config::SURFACE_H)
        .map(|(_, p)| p)
        .collect();
}

/// Set the boosted value and stamp the effect timer. Collecting a kind
/// that is already running moves its expiry forward instead of stacking.
fn apply_effect(session: &mut Session, kind: PowerUpKind, now_ms: f64) {
    match kind {
        PowerUpKind::SpeedBoost => {
            session.player.speed = session.player.base_speed * config::SPEED_BOOST_FACTOR;
        }
        PowerUpKind::RapidFire => {
            session.player.fire_interval_ms = config::RAPID_FIRE_INTERVAL_MS;
        }
    }
    let expires_at_ms = now_ms + config::EFFECT_DURATION_MS;
    if let Some(fx) = session.effects.iter_mut().find(|fx| fx.kind == kind) {
        fx.expires_at_ms = expires_at_ms;
    } else {
        session.effects.push(ActiveEffect { kind, expires_at_ms });
    }
}

/// Advance coins and bank the ones the player touches.
fn update_coins(session: &mut Session, cues: &mut Vec<SoundCue>) {
    let player_rect = session.player.rect;

    let mut collected: Vec<usize> = Vec::new();
    for (i, coin) in session.coins.iter_mut().enumerate() {
        coin.rect.y += coin.speed;
        if coin.rect.overlaps(&player_rect) {
            collected.push(i);
        }
    }

    for _ in &collected {
        session.score += config::SCORE_PER_COIN * session.level;
        cues.push(SoundCue::Collect);
    }

    let coins = std::mem::take(&mut session.coins);
    session.coins = coins
        .into_iter()
        .enumerate()
        .filter(|(i, c)| !collected.contains(i) && c.rect.y < config::SURFACE_H)
        .map(|(_, c)| c)
        .collect();
}

/// Count explosion frames down and drop the finished ones.
fn update_explosions(session: &mut Session) {
    for explosion in &mut session.explosions {
        explosion.frames_left = explosion.frames_left.saturating_sub(1);
    }
    session.explosions.retain(|e| e.frames_left > 0);
}
