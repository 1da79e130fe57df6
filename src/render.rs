//! Drawing
//!
//! Draw-call functions over the app state. Nothing here mutates game
//! state, so a frame can be rendered from any snapshot. The rects used
//! for clickable controls come from the same layout helpers the state
//! machine hit-tests against, so drawing and clicking cannot disagree.

use macroquad::prelude::*;

use crate::app::App;
use crate::assets::{AssetError, AssetStore, ImageKey};
use crate::config;
use crate::geometry::Rect;
use crate::session::Session;

const HUD_PANEL: Color = Color::new(0.0, 0.0, 0.0, 0.5);
const START_BUTTON: Color = Color::new(0.298, 0.686, 0.314, 1.0);
const ALERT: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const MUTED: Color = Color::new(0.6, 0.6, 0.65, 1.0);

/// Baseline of the game-over title; the final score sits 40 px below
/// and the restart button below that.
const GAME_OVER_TITLE_Y: f32 = 300.0;
const RESTART_Y: f32 = 370.0;

/// Clickable rects of the ship-select screen.
pub struct MenuLayout {
    pub ships: [Rect; 3],
    pub start: Rect,
}

pub fn menu_layout() -> MenuLayout {
    MenuLayout {
        ships: config::MENU_SHIP_XS.map(|x| {
            Rect::new(
                x,
                config::MENU_SHIP_Y,
                config::MENU_SHIP_SIZE,
                config::MENU_SHIP_SIZE,
            )
        }),
        start: Rect::new(
            config::MENU_START_X,
            config::MENU_START_Y,
            config::MENU_START_W,
            config::MENU_START_H,
        ),
    }
}

/// Restart control on the game-over overlay, centered under the score.
pub fn restart_button_rect() -> Rect {
    Rect::new(
        (config::SURFACE_W - config::MENU_START_W) * 0.5,
        RESTART_Y,
        config::MENU_START_W,
        config::MENU_START_H,
    )
}

/// Draw the ship-select screen.
pub fn draw_menu(app: &App, assets: &AssetStore) {
    draw_text_centered(
        "Choose Your Ship",
        config::SURFACE_W * 0.5,
        config::MENU_TITLE_Y,
        40.0,
        WHITE,
    );

    let layout = menu_layout();
    for (rect, skin) in layout.ships.iter().zip(ImageKey::SHIPS) {
        draw_sprite(assets, skin, rect);
        if app.selected_skin == skin {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
        }
    }

    let start = layout.start;
    draw_rectangle(start.x, start.y, start.w, start.h, START_BUTTON);
    draw_text_centered("Start Game", start.center_x(), start.y + 30.0, 20.0, WHITE);
}

/// Draw one frame of play: the world, the HUD, and the game-over
/// overlay when the run has ended.
pub fn draw_playing(app: &App, assets: &AssetStore) {
    let session = match app.session.as_ref() {
        Some(s) => s,
        None => return,
    };

    draw_sprite(assets, session.player.skin, &session.player.rect);
    for bullet in &session.bullets {
        draw_sprite(assets, ImageKey::Bullet, &bullet.rect);
    }
    for enemy in &session.enemies {
        draw_sprite(assets, ImageKey::Enemy, &enemy.rect);
    }
    for item in &session.power_ups {
        draw_sprite(assets, ImageKey::PowerUp, &item.rect);
    }
    for coin in &session.coins {
        draw_sprite(assets, ImageKey::Money, &coin.rect);
    }
    for explosion in &session.explosions {
        let half = config::EXPLOSION_DRAW_SIZE * 0.5;
        let rect = Rect::new(
            explosion.x - half,
            explosion.y - half,
            config::EXPLOSION_DRAW_SIZE,
            config::EXPLOSION_DRAW_SIZE,
        );
        draw_sprite(assets, ImageKey::Explosion, &rect);
    }

    draw_hud(session, app.lives, assets);

    if session.game_over {
        draw_game_over(session);
    }
}

/// Score, level and remaining hearts on a translucent panel.
fn draw_hud(session: &Session, lives: u32, assets: &AssetStore) {
    let panel = Rect::new(
        config::SURFACE_W - config::HUD_W - config::HUD_MARGIN,
        config::HUD_MARGIN,
        config::HUD_W,
        config::HUD_H,
    );
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, HUD_PANEL);

    draw_text(
        &format!("Score: {}", session.score),
        panel.x + 5.0,
        panel.y + 25.0,
        20.0,
        WHITE,
    );
    draw_text(
        &format!("Level: {}", session.level),
        panel.x + 5.0,
        panel.y + 55.0,
        20.0,
        WHITE,
    );

    for i in 0..lives {
        let heart = Rect::new(panel.x + 5.0 + i as f32 * 25.0, panel.y + 75.0, 20.0, 20.0);
        draw_sprite(assets, ImageKey::Heart, &heart);
    }
}

fn draw_game_over(session: &Session) {
    let center_x = config::SURFACE_W * 0.5;
    draw_text_centered("Game Over!", center_x, GAME_OVER_TITLE_Y, 40.0, ALERT);
    draw_text_centered(
        &format!("Final Score: {}", session.score),
        center_x,
        GAME_OVER_TITLE_Y + 40.0,
        20.0,
        ALERT,
    );

    let button = restart_button_rect();
    draw_rectangle(button.x, button.y, button.w, button.h, START_BUTTON);
    draw_text_centered("Restart", button.center_x(), button.y + 30.0, 20.0, WHITE);
}

/// Startup error screen listing every image that failed to load.
pub fn draw_load_failure(error: &AssetError) {
    draw_text("Failed to load game assets", 40.0, 60.0, 30.0, ALERT);
    let mut y = 100.0;
    for (label, path, reason) in &error.failures {
        draw_text(
            &format!("{} ({}): {}", label, path, reason),
            40.0,
            y,
            18.0,
            WHITE,
        );
        y += 24.0;
    }
    draw_text(
        "Fix the assets directory and relaunch.",
        40.0,
        y + 20.0,
        18.0,
        MUTED,
    );
}

fn draw_sprite(assets: &AssetStore, key: ImageKey, rect: &Rect) {
    if let Some(tex) = assets.texture(key) {
        draw_texture_ex(
            tex,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    }
}

fn draw_text_centered(text: &str, center_x: f32, baseline_y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - dims.width * 0.5, baseline_y, font_size, color);
}
