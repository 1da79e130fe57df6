//! Top-level state machine
//!
//! Owns everything that outlives a single run: the current mode, the
//! remaining lives, the chosen ship skin and the optional session. The
//! frame loop feeds it fresh input every tick and draws whatever mode
//! it lands in.

use rand::Rng;

use crate::assets::ImageKey;
use crate::config;
use crate::config::LevelTable;
use crate::input::Intents;
use crate::render;
use crate::session::Session;
use crate::sim;
use crate::sim::SoundCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
}

pub struct App {
    pub mode: Mode,
    pub lives: u32,
    /// Persists across runs; each new session's player is stamped with it.
    pub selected_skin: ImageKey,
    /// `Some` exactly while mode is `Playing`.
    pub session: Option<Session>,
    pub levels: LevelTable,
}

impl App {
    pub fn new(levels: LevelTable) -> Self {
        Self {
            mode: Mode::Menu,
            lives: config::STARTING_LIVES,
            selected_skin: ImageKey::Player1,
            session: None,
            levels,
        }
    }

    /// Start a fresh run with the currently selected ship.
    pub fn start_game(&mut self) {
        self.session = Some(Session::new(self.selected_skin));
        self.lives = config::STARTING_LIVES;
        self.mode = Mode::Playing;
    }

    /// Return to the menu. Only honored once the run is over, so a stray
    /// click mid-game cannot end it. Dropping the session drops its
    /// effect timers with it.
    pub fn finish_session(&mut self) {
        let over = self.session.as_ref().map(|s| s.game_over).unwrap_or(false);
        if over {
            self.session = None;
            self.mode = Mode::Menu;
        }
    }

    /// Route a click on the ship-select screen.
    pub fn handle_menu_click(&mut self, x: f32, y: f32) {
        let layout = render::menu_layout();
        for (rect, skin) in layout.ships.iter().zip(ImageKey::SHIPS) {
            if rect.contains(x, y) {
                self.selected_skin = skin;
            }
        }
        if layout.start.contains(x, y) {
            self.start_game();
        }
    }

    /// Route a click during play. The only live control is the restart
    /// button on the game-over overlay.
    pub fn handle_playing_click(&mut self, x: f32, y: f32) {
        if render::restart_button_rect().contains(x, y) {
            self.finish_session();
        }
    }

    /// One frame of the state machine: route the click, then advance the
    /// simulation if a run is in progress.
    pub fn advance(
        &mut self,
        intents: &Intents,
        click: Option<(f32, f32)>,
        now_ms: f64,
        rng: &mut impl Rng,
    ) -> Vec<SoundCue> {
        match self.mode {
            Mode::Menu => {
                if let Some((x, y)) = click {
                    self.handle_menu_click(x, y);
                }
                Vec::new()
            }
            Mode::Playing => {
                if let Some((x, y)) = click {
                    self.handle_playing_click(x, y);
                }
                match self.session.as_mut() {
                    Some(session) => {
                        sim::tick(session, &mut self.lives, &self.levels, intents, now_ms, rng)
                    }
                    None => Vec::new(),
                }
            }
        }
    }
}
