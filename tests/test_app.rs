use starshot::app::{App, Mode};
use starshot::assets::ImageKey;
use starshot::config::LevelTable;
use starshot::input::Intents;
use starshot::sim::SoundCue;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_app() -> App {
    App::new(LevelTable::bundled().unwrap())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// ── menu ─────────────────────────────────────────────────────────────────────

#[test]
fn app_starts_on_menu() {
    let app = make_app();
    assert_eq!(app.mode, Mode::Menu);
    assert!(app.session.is_none());
    assert_eq!(app.lives, 3);
    assert_eq!(app.selected_skin, ImageKey::Player1);
}

#[test]
fn ship_click_selects_skin() {
    let mut app = make_app();

    app.handle_menu_click(380.0, 160.0); // second tile
    assert_eq!(app.selected_skin, ImageKey::Player2);
    assert_eq!(app.mode, Mode::Menu); // selecting does not start the run

    app.handle_menu_click(725.0, 200.0); // third tile
    assert_eq!(app.selected_skin, ImageKey::Player3);
}

#[test]
fn clicking_empty_menu_space_does_nothing() {
    let mut app = make_app();
    app.handle_menu_click(10.0, 10.0);
    assert_eq!(app.mode, Mode::Menu);
    assert_eq!(app.selected_skin, ImageKey::Player1);
    assert!(app.session.is_none());
}

#[test]
fn start_click_begins_run_with_selected_ship() {
    let mut app = make_app();
    app.handle_menu_click(380.0, 160.0); // pick ship 2
    app.handle_menu_click(400.0, 270.0); // start button

    assert_eq!(app.mode, Mode::Playing);
    assert_eq!(app.lives, 3);
    let session = app.session.as_ref().unwrap();
    assert_eq!(session.player.skin, ImageKey::Player2);
    assert_eq!(session.score, 0);
    assert!(!session.game_over);
}

#[test]
fn selected_skin_persists_across_runs() {
    let mut app = make_app();
    app.handle_menu_click(380.0, 160.0);
    app.start_game();
    app.session.as_mut().unwrap().game_over = true;
    app.finish_session();

    app.start_game();
    assert_eq!(
        app.session.as_ref().unwrap().player.skin,
        ImageKey::Player2
    );
}

// ── restart ──────────────────────────────────────────────────────────────────

#[test]
fn restart_ignored_while_run_is_alive() {
    let mut app = make_app();
    app.start_game();
    app.handle_playing_click(400.0, 390.0); // restart button position
    assert_eq!(app.mode, Mode::Playing);
    assert!(app.session.is_some());
}

#[test]
fn restart_position_click_on_menu_is_noop() {
    // The restart button only exists on the game-over overlay; its spot
    // on the menu screen is empty space.
    let mut app = make_app();
    let mut rng = seeded_rng();
    app.advance(&Intents::default(), Some((400.0, 390.0)), 0.0, &mut rng);
    assert_eq!(app.mode, Mode::Menu);
    assert_eq!(app.selected_skin, ImageKey::Player1);
    assert!(app.session.is_none());
}

#[test]
fn restart_returns_to_menu_after_game_over() {
    let mut app = make_app();
    app.start_game();
    app.session.as_mut().unwrap().game_over = true;
    app.handle_playing_click(400.0, 390.0);
    assert_eq!(app.mode, Mode::Menu);
    assert!(app.session.is_none());
}

#[test]
fn finish_without_session_is_harmless() {
    let mut app = make_app();
    app.finish_session();
    assert_eq!(app.mode, Mode::Menu);
}

#[test]
fn new_run_after_restart_is_clean() {
    let mut app = make_app();
    app.start_game();
    {
        let session = app.session.as_mut().unwrap();
        session.score = 120;
        session.player.speed = 15.0; // pretend a boost was running
        session.game_over = true;
    }
    app.lives = 0;
    app.finish_session();
    app.start_game();

    assert_eq!(app.lives, 3);
    let session = app.session.as_ref().unwrap();
    assert_eq!(session.score, 0);
    assert_eq!(session.player.speed, 10.0);
    assert!(session.effects.is_empty());
    assert!(!session.game_over);
}

// ── advance ──────────────────────────────────────────────────────────────────

#[test]
fn advance_routes_clicks_by_mode() {
    let mut app = make_app();
    let mut rng = seeded_rng();

    // Click on the start button while on the menu
    let cues = app.advance(&Intents::default(), Some((400.0, 270.0)), 0.0, &mut rng);
    assert!(cues.is_empty());
    assert_eq!(app.mode, Mode::Playing);

    // First playing frame with the trigger held fires immediately
    let firing = Intents { fire: true, ..Intents::default() };
    let cues = app.advance(&firing, None, 16.0, &mut rng);
    assert!(cues.contains(&SoundCue::Shoot));
    assert_eq!(app.session.as_ref().unwrap().bullets.len(), 1);
}

#[test]
fn menu_frames_do_not_tick_a_session() {
    let mut app = make_app();
    let mut rng = seeded_rng();
    for n in 0..50 {
        let cues = app.advance(&Intents::default(), None, n as f64 * 16.0, &mut rng);
        assert!(cues.is_empty());
    }
    assert_eq!(app.mode, Mode::Menu);
    assert!(app.session.is_none());
}

#[test]
fn run_ends_after_three_hits_and_restarts() {
    // Drive a full run under maximum spawn pressure with the ship
    // parked: enemies keep landing on it until the lives run out.
    let table = LevelTable::from_str("(tiers: [(spawn_rate: 1.0, enemy_speed: 4.0)])").unwrap();
    let mut app = App::new(table);
    app.start_game();
    let mut rng = seeded_rng();

    let mut t = 0.0;
    for _ in 0..4000 {
        app.advance(&Intents::default(), None, t, &mut rng);
        t += 16.0;
        if app.session.as_ref().unwrap().game_over {
            break;
        }
    }

    assert!(app.session.as_ref().unwrap().game_over);
    assert_eq!(app.lives, 0);

    // The restart click now lands
    app.advance(&Intents::default(), Some((400.0, 390.0)), t, &mut rng);
    assert_eq!(app.mode, Mode::Menu);
    assert!(app.session.is_none());
}
