//! End-to-end tests driving a headless session through user events.
//!
//! Each test wires the coordinator to a `MemorySurface` and `MemoryControls`
//! and checks what a user would see: square counts, painted squares,
//! custom properties, notifications and the size input.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use pixelpad::app::{AppState, Control, Event, Session};
use pixelpad::color::{ColorSequence, Rgb};
use pixelpad::config::PadOptions;
use pixelpad::controls::MemoryControls;
use pixelpad::grid::{PaintMode, CANVAS_WIDTH_PROPERTY, SQUARE_COLOR_PROPERTY, SQUARE_WIDTH_PROPERTY};
use pixelpad::render::{MemorySurface, Surface};
use test_case::test_case;

type TestSession = Session<MemorySurface, MemoryControls, ColorSequence>;

const CANVAS_WIDTH: f64 = 400.0;

// ============================================================================
// Helpers
// ============================================================================

fn colors() -> ColorSequence {
    ColorSequence::new(vec![Rgb::new(10, 20, 30), Rgb::new(200, 100, 50)])
}

/// A session after page load: 16×16 grid, Default mode, drawing off.
fn started() -> TestSession {
    let state = AppState::new(PadOptions::default(), CANVAS_WIDTH);
    let mut session = Session::new(state, MemorySurface::new(), MemoryControls::new(), colors());
    session.dispatch(Event::Startup).unwrap();
    session
}

fn type_and_change(session: &mut TestSession, text: &str) {
    session.controls_mut().type_size(text);
    session.size_changed().unwrap();
}

fn hover(session: &mut TestSession, square: u32) {
    let bound_mode = session.surface().bound_mode();
    session
        .dispatch(Event::Hover { square, bound_mode })
        .unwrap();
}

fn toggle_draw(session: &mut TestSession) {
    session
        .dispatch(Event::KeyPressed("d".to_string()))
        .unwrap();
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn startup_renders_sixteen_by_sixteen() {
    let session = started();
    assert_eq!(session.surface().square_count(), 256);
    assert_eq!(session.surface().property(CANVAS_WIDTH_PROPERTY), Some("400px"));
    assert_eq!(session.surface().property(SQUARE_WIDTH_PROPERTY), Some("25px"));
    assert_eq!(session.surface().property(SQUARE_COLOR_PROPERTY), Some("blue"));
    assert!(!session.state().draw_enabled);
}

// ============================================================================
// Size changes
// ============================================================================

#[test]
fn valid_size_waits_for_create() {
    let mut session = started();
    type_and_change(&mut session, "4");

    assert_eq!(session.state().grid.total_squares(), 16);
    assert_eq!(session.surface().square_count(), 256);
    assert_eq!(session.controls().input, "4");
    assert!(session.controls().notifications.is_empty());
}

#[test_case("101" ; "just over the limit")]
#[test_case("5000" ; "far over the limit")]
#[test_case("2.5" ; "fraction")]
#[test_case("abc" ; "not a number")]
#[test_case("0" ; "zero")]
#[test_case("-4" ; "negative")]
fn rejected_size_leaves_grid_unchanged(text: &str) {
    let mut session = started();
    type_and_change(&mut session, "8");
    let before = session.state().grid.clone();

    type_and_change(&mut session, text);

    assert_eq!(session.state().grid, before);
    assert_eq!(session.controls().input, "");
    assert_eq!(session.controls().notifications.len(), 1);
}

#[test]
fn too_large_message_names_the_limit() {
    let mut session = started();
    type_and_change(&mut session, "101");
    assert!(session.controls().notifications[0].contains("100"));
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn create_rebuilds_with_new_geometry_and_clears_input() {
    let mut session = started();
    type_and_change(&mut session, "4");
    session.create().unwrap();

    assert_eq!(session.surface().square_count(), 16);
    assert_eq!(session.surface().property(SQUARE_WIDTH_PROPERTY), Some("100px"));
    assert_eq!(session.controls().input, "");
    assert_eq!(session.controls().released, vec![Control::Create]);
}

#[test]
fn create_with_empty_input_is_rejected() {
    let mut session = started();
    let generation = session.surface().generation();

    session.create().unwrap();

    assert_eq!(session.surface().generation(), generation);
    assert_eq!(session.controls().notifications.len(), 1);
    assert_eq!(session.state().grid.total_squares(), 256);
}

#[test]
fn rebuild_twice_keeps_exact_count() {
    let mut session = started();
    type_and_change(&mut session, "7");
    session.dispatch(Event::RandomMode).unwrap();
    session.dispatch(Event::RandomMode).unwrap();

    let surface = session.surface();
    assert_eq!(surface.square_count(), 49);
    let generation = surface.generation();
    assert!(surface.squares().iter().all(|s| s.generation == generation));
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn hovers_do_nothing_while_drawing_is_off() {
    let mut session = started();
    for square in 0..50 {
        hover(&mut session, square);
    }
    session.dispatch(Event::RandomMode).unwrap();
    hover(&mut session, 3);
    assert_eq!(session.surface().painted_count(), 0);
}

#[test]
fn default_paint_is_idempotent() {
    let mut session = started();
    toggle_draw(&mut session);

    hover(&mut session, 9);
    let once = session.surface().square(9).cloned();
    hover(&mut session, 9);

    assert_eq!(session.surface().square(9).cloned(), once);
    assert!(session.surface().square(9).unwrap().painted);
    assert_eq!(session.surface().painted_count(), 1);
}

#[test]
fn random_paint_recolors_on_every_hover() {
    let mut session = started();
    session.dispatch(Event::RandomMode).unwrap();
    toggle_draw(&mut session);

    hover(&mut session, 0);
    assert_eq!(
        session.surface().square(0).unwrap().background,
        Some(Rgb::new(10, 20, 30))
    );
    hover(&mut session, 0);
    assert_eq!(
        session.surface().square(0).unwrap().background,
        Some(Rgb::new(200, 100, 50))
    );
    assert!(!session.surface().square(0).unwrap().painted);
}

#[test]
fn toggling_off_again_stops_painting() {
    let mut session = started();
    toggle_draw(&mut session);
    hover(&mut session, 1);
    toggle_draw(&mut session);
    hover(&mut session, 2);

    assert!(session.surface().square(1).unwrap().painted);
    assert!(session.surface().square(2).unwrap().is_blank());
}

#[test]
fn mode_switch_rebuilds_and_clears_painting() {
    let mut session = started();
    toggle_draw(&mut session);
    hover(&mut session, 1);

    session.dispatch(Event::RandomMode).unwrap();
    assert_eq!(session.surface().painted_count(), 0);
    assert_eq!(session.surface().bound_mode(), PaintMode::Random);

    session.dispatch(Event::DefaultMode).unwrap();
    assert_eq!(session.surface().bound_mode(), PaintMode::Default);
    assert_eq!(
        session.controls().released,
        vec![Control::Random, Control::Default]
    );
    // Drawing stays on across rebuilds.
    assert!(session.state().draw_enabled);
}

#[test]
fn stale_hover_past_grid_is_ignored() {
    let mut session = started();
    type_and_change(&mut session, "2");
    session.create().unwrap();
    toggle_draw(&mut session);

    session
        .dispatch(Event::Hover {
            square: 200,
            bound_mode: PaintMode::Default,
        })
        .unwrap();
    assert_eq!(session.surface().painted_count(), 0);
}

#[test]
fn set_color_updates_square_color_property() {
    let mut session = started();
    session
        .dispatch(Event::SetColor("black".to_string()))
        .unwrap();
    assert_eq!(session.surface().property(SQUARE_COLOR_PROPERTY), Some("black"));
    assert_eq!(session.surface().generation(), 1);
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn four_by_four_sketch() {
    let mut session = started();

    type_and_change(&mut session, "4");
    assert_eq!(session.state().grid.total_squares(), 16);
    assert_eq!(session.state().grid.square_width_px(), CANVAS_WIDTH / 4.0);

    session.create().unwrap();
    assert_eq!(session.surface().square_count(), 16);

    toggle_draw(&mut session);
    hover(&mut session, 5);

    let squares = session.surface().squares();
    assert!(squares[5].painted);
    assert_eq!(
        squares
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != 5 && s.is_blank())
            .count(),
        15
    );
}
