//! Full-frame rendering against a test backend.

mod common;

use std::time::Duration;

use common::{app_at, buffer_text, click, draw, press};
use crossterm::event::KeyCode;
use tensorwalk::app::{App, Focus};
use tensorwalk::config::TutorConfig;
use tensorwalk::content::StepKind;
use tensorwalk::ui::hit_area::ClickAction;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn area_for(app: &App, action: ClickAction) -> (u16, u16) {
    area_below(app, action, 0)
}

/// First area for `action` starting at or below row `min_y`.
fn area_below(app: &App, action: ClickAction, min_y: u16) -> (u16, u16) {
    let area = app
        .hit_areas
        .areas()
        .iter()
        .find(|a| a.action == action && a.rect.y >= min_y)
        .unwrap_or_else(|| panic!("no hit area for {action:?}"));
    (area.rect.x, area.rect.y)
}

#[test]
fn test_first_frame_shows_counter_and_outline() {
    let mut app = app_at("welcome");
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("Step 1 of 15"));
    assert!(text.contains("Outline"));
    assert!(text.contains("FOUNDATIONS"));
    assert!(text.contains("PRACTICE"));
    assert!(text.contains("Next →"));
}

#[test]
fn test_sidebar_marks_current_and_visited() {
    let mut app = app_at("welcome");
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));

    // Sidebar rows only: below the header, left of the panel.
    let sidebar: Vec<String> = text
        .lines()
        .skip(3)
        .map(|line| line.chars().take(28).collect())
        .collect();
    let row_with = |label: &str| {
        sidebar
            .iter()
            .find(|line| line.contains(label))
            .unwrap_or_else(|| panic!("no sidebar row for {label}"))
            .clone()
    };
    assert!(row_with("Vectors").contains('▶'));
    assert!(row_with("Scalars").contains('✓'));
    assert!(row_with("Matrices").contains('·'));
}

#[test]
fn test_next_button_names_final_step_before_it() {
    let mut app = app_at("cv_tracking");
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("Playground →"));

    press(&mut app, KeyCode::Right);
    draw(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.current_kind(), StepKind::Playground);
    assert!(!app.hit_areas.areas().iter().any(|a| a.action == ClickAction::Next));
}

#[test]
fn test_clicking_next_and_prev() {
    let mut app = app_at("welcome");
    draw(&mut app, WIDTH, HEIGHT);
    assert!(!app.hit_areas.areas().iter().any(|a| a.action == ClickAction::Prev));

    let (x, y) = area_for(&app, ClickAction::Next);
    click(&mut app, x, y);
    assert_eq!(app.nav.current_index(), 1);

    draw(&mut app, WIDTH, HEIGHT);
    let (x, y) = area_for(&app, ClickAction::Prev);
    click(&mut app, x, y);
    assert_eq!(app.nav.current_index(), 0);
}

#[test]
fn test_clicking_sidebar_entry_jumps() {
    let mut app = app_at("welcome");
    draw(&mut app, WIDTH, HEIGHT);
    // Below the header, so this is the sidebar row rather than the pill.
    let (x, y) = area_below(&app, ClickAction::GoTo(9), 3);
    click(&mut app, x + 3, y);
    assert_eq!(app.current_kind(), StepKind::CvImages);
    assert!(!app.nav.is_visited(5));
}

#[test]
fn test_clicking_header_pill_jumps() {
    let mut app = app_at("welcome");
    draw(&mut app, WIDTH, HEIGHT);
    let (x, y) = area_for(&app, ClickAction::GoTo(12));
    assert_eq!(y, 1);
    click(&mut app, x, y);
    assert_eq!(app.nav.current_index(), 12);
    assert!(!app.nav.is_visited(11));
}

#[test]
fn test_header_pills_clickable_on_tiny_terminal() {
    let mut app = app_at("welcome");
    draw(&mut app, 40, 12);
    let (x, y) = area_for(&app, ClickAction::GoTo(14));
    click(&mut app, x, y);
    assert_eq!(app.current_kind(), StepKind::Playground);
}

#[test]
fn test_outline_focus_needs_visible_sidebar() {
    let mut app = app_at("welcome");
    draw(&mut app, 50, 20);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Lesson);

    draw(&mut app, WIDTH, HEIGHT);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Outline);

    // Shrinking the terminal hands focus back to the lesson.
    draw(&mut app, 50, 20);
    assert_eq!(app.focus, Focus::Lesson);
}

#[test]
fn test_clicking_track_tab() {
    let mut app = app_at("conversion");
    draw(&mut app, WIDTH, HEIGHT);
    let (x, y) = area_for(&app, ClickAction::SelectTrack(2));
    click(&mut app, x, y);
    assert_eq!(app.panels.conversion.nav().position(), (2, 0));
}

#[test]
fn test_flat_layout_has_no_sidebar() {
    let mut app = App::new(&TutorConfig::default().with_sidebar(false)).unwrap();
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(!text.contains("Outline"));
    assert!(text.contains("Step 1 of 15"));
}

#[test]
fn test_narrow_terminal_hides_sidebar() {
    let mut app = app_at("welcome");
    let text = buffer_text(&draw(&mut app, 50, 20));
    assert!(!text.contains("Outline"));
}

#[test]
fn test_help_overlay_blocks_clicks() {
    let mut app = app_at("welcome");
    press(&mut app, KeyCode::Char('?'));
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("Keys"));
    assert!(app.hit_areas.is_empty());

    press(&mut app, KeyCode::Right);
    assert!(!app.show_help);
    assert_eq!(app.nav.current_index(), 0);
}

#[test]
fn test_every_step_renders() {
    let mut app = app_at("welcome");
    for i in 0..app.nav.len() {
        app.nav.go_to(i);
        for (w, h) in [(WIDTH, HEIGHT), (80, 24), (40, 12)] {
            let text = buffer_text(&draw(&mut app, w, h));
            assert!(text.contains(&format!("{} of 15", i + 1)) || w < 60);
        }
    }
}

#[test]
fn test_tracking_plays_only_on_screen() {
    let mut app = app_at("cv_tracking");
    press(&mut app, KeyCode::Char(' '));
    assert!(app.panels.tracking.is_playing());
    app.tick(Duration::from_millis(800));
    assert_eq!(app.panels.tracking.frame_index(), 1);

    press(&mut app, KeyCode::Left);
    app.tick(Duration::from_millis(800 * 3));
    assert_eq!(app.panels.tracking.frame_index(), 1);
}

#[test]
fn test_convolution_play_button_slides_window() {
    let mut app = app_at("cv_conv");
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("▶ Play"));
    assert!(text.contains("window at (0, 0)"));

    let (x, y) = area_for(&app, ClickAction::TogglePlayback);
    click(&mut app, x, y);
    app.tick(Duration::from_millis(800 * 2));
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("⏸ Pause"));
    assert!(text.contains("window at (0, 2)"));
}

#[test]
fn test_bbox_label_follows_keys() {
    let mut app = app_at("cv_bbox");
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("[0.60, 0.50, 0.30, 0.40]"));
}

#[test]
fn test_clicking_playground_cell_shows_value() {
    let mut app = app_at("playground");
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("click a cell to read its value"));

    let (x, y) = area_for(&app, ClickAction::InspectCell { row: 1, col: 2 });
    click(&mut app, x, y);
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("[1,2] = 7"));
}

#[test]
fn test_playground_shape_updates() {
    let mut app = app_at("playground");
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('o'));
    let text = buffer_text(&draw(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("(3, 3, 4)"));
}
