//! TUI end-to-end tests — drive the wizard through key events and check
//! state, playback requests, and the rendered screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use melakarta::config::Config;
use melakarta::theory::{Catalog, Family, Key, Swara};
use melakarta::tone::SilentPlayer;
use melakarta::tui::{map_key, App, NoticeKind, Step};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn new_app() -> App<SilentPlayer> {
    App::new(
        Catalog::build().unwrap(),
        Config::default(),
        SilentPlayer::new(),
    )
}

fn press(app: &mut App<SilentPlayer>, code: KeyCode) {
    if let Some(action) = map_key(key(code), app.step) {
        app.handle_action(action);
    }
}

fn press_n(app: &mut App<SilentPlayer>, code: KeyCode, n: usize) {
    for _ in 0..n {
        press(app, code);
    }
}

/// Move the swara cursor onto `swara` and press Enter.
fn pick(app: &mut App<SilentPlayer>, swara: Swara) {
    while app.current_swara() != swara {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Enter);
}

fn screen(app: &App<SilentPlayer>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// =============================================================================
// Full walkthrough
// =============================================================================

#[test]
fn ratnangi_in_c_end_to_end() {
    let mut app = new_app();
    assert_eq!(app.step, Step::Key);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step, Step::Swaras);
    assert_eq!(app.session.key(), Key::C);

    for swara in [Swara::R1, Swara::G1, Swara::M1, Swara::D1, Swara::N2] {
        pick(&mut app, swara);
    }
    assert!(app.session.is_complete());
    // one preview tone per toggle
    assert_eq!(app.player.played.len(), 5);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.step, Step::Result);
    let entry = app.matched().unwrap();
    assert_eq!(entry.ordinal, 2);
    assert_eq!(entry.name, "Ratnangi");

    let text = screen(&app);
    assert!(text.contains("Ratnangi"));
    assert!(text.contains("Indu"));
    assert!(text.contains("S R1 G1 M1 P D1 N2 S'"));
    assert!(text.contains("C D♭ E♭♭ F G A♭ B♭ C"));
}

#[test]
fn result_playback_uses_note_length() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    for swara in [Swara::R2, Swara::G3, Swara::M1, Swara::D2, Swara::N3] {
        pick(&mut app, swara);
    }
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.matched().unwrap().ordinal, 29);

    press(&mut app, KeyCode::Char('a'));
    let aro = app.player.last().unwrap().clone();
    assert_eq!(aro.frequencies.len(), 8);
    assert_eq!(aro.note_seconds, app.config.note_seconds);
    assert!(aro.frequencies.windows(2).all(|w| w[0] < w[1]));

    press(&mut app, KeyCode::Char('d'));
    let ava = app.player.last().unwrap();
    let mut reversed = aro.frequencies.clone();
    reversed.reverse();
    assert_eq!(ava.frequencies, reversed);
}

// =============================================================================
// Reserved pitches and resets
// =============================================================================

#[test]
fn reserved_pitch_is_refused() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    pick(&mut app, Swara::R3);
    pick(&mut app, Swara::G2);
    assert_eq!(app.session.selection().get(Family::Ga), None);
    assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);
    assert!(screen(&app).contains("taken"));
}

#[test]
fn changing_key_clears_selection() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    pick(&mut app, Swara::R2);
    pick(&mut app, Swara::M2);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.step, Step::Key);
    press_n(&mut app, KeyCode::Right, 2);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session.key(), Key::D);
    assert_eq!(app.session.selection().chosen().count(), 0);
}

#[test]
fn new_key_from_result_starts_over() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    for swara in [Swara::R1, Swara::G2, Swara::M2, Swara::D1, Swara::N1] {
        pick(&mut app, swara);
    }
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.step, Step::Result);

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.step, Step::Key);
    assert!(!app.session.is_complete());
}

#[test]
fn incomplete_selection_stays_on_swaras() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    pick(&mut app, Swara::G3);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.step, Step::Swaras);
    assert!(app.matched().is_none());
}

#[test]
fn fixed_swara_previews_without_changing_selection() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    pick(&mut app, Swara::Pa);
    assert_eq!(app.session.selection().chosen().count(), 0);
    assert_eq!(app.player.played.len(), 1);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn key_screen_lists_all_keys() {
    let app = new_app();
    let text = screen(&app);
    for k in Key::ALL {
        assert!(text.contains(k.name()), "missing {}", k.name());
    }
}

#[test]
fn swara_screen_spells_under_key() {
    let mut app = new_app();
    press_n(&mut app, KeyCode::Right, 6);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.key(), Key::FSharp);
    let text = screen(&app);
    // F♯ R3 is spelled on the G line
    assert!(text.contains("G♯♯"));
    assert!(text.contains("Augmented 4th"));
}

#[test]
fn help_overlay_renders_bindings() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.help_visible);
    assert!(screen(&app).contains("choose key"));
    press(&mut app, KeyCode::Esc);
    assert!(!app.help_visible);
}
