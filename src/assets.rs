//! Texture and sound registry
//!
//! Every drawable image and playable sound is named by a key enum, so a
//! typo in an asset reference is a compile error rather than a blank
//! sprite at runtime. Images are required: if any fail to load the game
//! shows an error screen instead of starting. Sounds are optional: a
//! missing file logs a warning and that cue simply never plays.

use std::collections::HashMap;

use macroquad::audio::{load_sound, play_sound_once, Sound};
use macroquad::prelude::*;

use crate::sim::SoundCue;

/// Keys for every texture the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Player1,
    Player2,
    Player3,
    Enemy,
    Bullet,
    Money,
    PowerUp,
    Explosion,
    Heart,
}

impl ImageKey {
    pub const ALL: [ImageKey; 9] = [
        ImageKey::Player1,
        ImageKey::Player2,
        ImageKey::Player3,
        ImageKey::Enemy,
        ImageKey::Bullet,
        ImageKey::Money,
        ImageKey::PowerUp,
        ImageKey::Explosion,
        ImageKey::Heart,
    ];

    /// The three selectable player ships, in menu order.
    pub const SHIPS: [ImageKey; 3] = [ImageKey::Player1, ImageKey::Player2, ImageKey::Player3];

    pub fn path(self) -> &'static str {
        match self {
            ImageKey::Player1 => "assets/images/player1.png",
            ImageKey::Player2 => "assets/images/player2.png",
            ImageKey::Player3 => "assets/images/player3.png",
            ImageKey::Enemy => "assets/images/enemyRed.png",
            ImageKey::Bullet => "assets/images/laserBlue01.png",
            ImageKey::Money => "assets/images/coinGold.png",
            ImageKey::PowerUp => "assets/images/powerupYellow_shield.png",
            ImageKey::Explosion => "assets/images/explosion.png",
            ImageKey::Heart => "assets/images/heart.png",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageKey::Player1 => "Ship 1",
            ImageKey::Player2 => "Ship 2",
            ImageKey::Player3 => "Ship 3",
            ImageKey::Enemy => "Enemy",
            ImageKey::Bullet => "Bullet",
            ImageKey::Money => "Coin",
            ImageKey::PowerUp => "Power-up",
            ImageKey::Explosion => "Explosion",
            ImageKey::Heart => "Heart",
        }
    }
}

/// Keys for every sound the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKey {
    Shoot,
    Hit,
    Collect,
    LevelUp,
}

impl SoundKey {
    pub const ALL: [SoundKey; 4] = [
        SoundKey::Shoot,
        SoundKey::Hit,
        SoundKey::Collect,
        SoundKey::LevelUp,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SoundKey::Shoot => "assets/sounds/shoot.wav",
            SoundKey::Hit => "assets/sounds/hit.wav",
            SoundKey::Collect => "assets/sounds/collect.wav",
            SoundKey::LevelUp => "assets/sounds/levelup.wav",
        }
    }
}

impl From<SoundCue> for SoundKey {
    fn from(cue: SoundCue) -> Self {
        match cue {
            SoundCue::Shoot => SoundKey::Shoot,
            SoundCue::Hit => SoundKey::Hit,
            SoundCue::Collect => SoundKey::Collect,
        }
    }
}

/// Error type for asset loading. Carries every failed image so the
/// error screen can list them all at once.
#[derive(Debug)]
pub struct AssetError {
    /// (label, path, reason) per failed image.
    pub failures: Vec<(String, String, String)>,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} image(s) failed to load:", self.failures.len())?;
        for (label, path, reason) in &self.failures {
            write!(f, "\n  {} ({}): {}", label, path, reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssetError {}

/// Loaded textures and sounds, keyed by the registry enums.
pub struct AssetStore {
    textures: HashMap<ImageKey, Texture2D>,
    sounds: HashMap<SoundKey, Sound>,
}

impl AssetStore {
    /// Load everything up front, before the frame loop starts.
    pub async fn load() -> Result<AssetStore, AssetError> {
        let mut textures = HashMap::new();
        let mut failures = Vec::new();
        for key in ImageKey::ALL {
            match load_texture(key.path()).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    textures.insert(key, tex);
                }
                Err(e) => {
                    failures.push((key.label().to_string(), key.path().to_string(), e.to_string()))
                }
            }
        }
        if !failures.is_empty() {
            return Err(AssetError { failures });
        }

        let mut sounds = HashMap::new();
        for key in SoundKey::ALL {
            match load_sound(key.path()).await {
                Ok(sound) => {
                    sounds.insert(key, sound);
                }
                Err(e) => eprintln!("Failed to load sound {}: {}", key.path(), e),
            }
        }

        println!("Loaded {} textures, {} sounds", textures.len(), sounds.len());
        Ok(AssetStore { textures, sounds })
    }

    /// Texture for a key. `None` can only happen for a store that failed
    /// to load, which never reaches the frame loop.
    pub fn texture(&self, key: ImageKey) -> Option<&Texture2D> {
        self.textures.get(&key)
    }

    /// Play a sound if it loaded. Missing sounds are silent.
    pub fn play(&self, key: SoundKey) {
        if let Some(sound) = self.sounds.get(&key) {
            play_sound_once(sound);
        }
    }
}
