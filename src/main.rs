use macroquad::prelude::*;

use ::rand::thread_rng;

use starshot::app::{App, Mode};
use starshot::assets::AssetStore;
use starshot::config::{self, LevelTable};
use starshot::input;
use starshot::render;
use starshot::VERSION;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Starshot v{}", VERSION),
        // The window is the logical surface: entity coordinates map
        // straight to pixels, so it stays fixed-size and non-hidpi.
        window_width: config::SURFACE_W as i32,
        window_height: config::SURFACE_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("=== Starshot v{} ===", VERSION);

    // Images are required; without them the game shows an error screen
    // instead of starting. Sounds may be missing (logged inside load).
    let assets = match AssetStore::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("{}", e);
            loop {
                clear_background(BLACK);
                render::draw_load_failure(&e);
                next_frame().await;
            }
        }
    };

    let levels = match LevelTable::bundled() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Bundled level table is broken: {}", e);
            loop {
                clear_background(BLACK);
                draw_text("Bundled level table is broken", 40.0, 60.0, 30.0, RED);
                draw_text(&e.to_string(), 40.0, 100.0, 18.0, WHITE);
                next_frame().await;
            }
        }
    };

    let mut app = App::new(levels);
    let mut rng = thread_rng();

    loop {
        let now_ms = get_time() * 1000.0;
        let intents = input::poll_intents();
        let click = input::pointer_click();

        let cues = app.advance(&intents, click, now_ms, &mut rng);
        for cue in cues {
            assets.play(cue.into());
        }

        clear_background(BLACK);
        match app.mode {
            Mode::Menu => render::draw_menu(&app, &assets),
            Mode::Playing => render::draw_playing(&app, &assets),
        }

        next_frame().await;
    }
}
