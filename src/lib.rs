//! STARSHOT: a retro vertical-scrolling space shooter
//!
//! Shoot down the descending fleet and bank the coins it drops:
//! - One 800x600 screen, arrow keys to steer, space to fire
//! - Five difficulty tiers of spawn pressure and descent speed
//! - Coin bursts on every kill, timed speed and rapid-fire power-ups
//! - Three selectable ships
//!
//! The simulation is deterministic given an RNG and a clock, so the
//! whole game below the frame loop is exercised by headless tests.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod assets;
pub mod config;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;
