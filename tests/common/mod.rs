//! Shared helpers for integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use tensorwalk::app::App;
use tensorwalk::config::TutorConfig;
use tensorwalk::nav::{NavigationController, Outline};
use tensorwalk::ui;

/// A plain outline of `total` steps with ids `s0`, `s1`, ...
pub fn outline(total: usize) -> Outline<()> {
    (0..total)
        .fold(Outline::builder(), |builder, i| {
            builder.step(format!("s{i}"), format!("Step {i}"), "•", ())
        })
        .build()
        .unwrap()
}

pub fn controller(total: usize, start: usize) -> NavigationController<()> {
    NavigationController::new(outline(total), start).unwrap()
}

/// The tutorial app opened at a step id.
pub fn app_at(start: &str) -> App {
    App::new(&TutorConfig::default().with_start(start)).unwrap()
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

/// Render one frame and return the buffer.
pub fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// The buffer as text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
