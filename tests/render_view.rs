//! View tree rendering: idempotence and visible content, drawn against an
//! in-memory backend.

mod common;

use common::canned_record;
use mortui::store::{CounterState, FetchPhase};
use mortui::ui::app::App;
use mortui::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn render(app: &App) -> Buffer {
    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.content()[(y * buffer.area.width + x) as usize].symbol());
        }
        text.push('\n');
    }
    text
}

fn loaded_app() -> App {
    App::new(CounterState {
        counter: 5,
        record: Some(canned_record(5)),
        phase: FetchPhase::Idle,
    })
}

#[test]
fn repeated_renders_are_identical() {
    let app = loaded_app();
    assert_eq!(render(&app), render(&app));
}

#[test]
fn placeholder_is_shown_without_a_record() {
    let app = App::new(CounterState::new(1));
    let text = buffer_text(&render(&app));

    assert!(text.contains("No data loaded yet"));
    assert!(text.contains("Character Details"));
}

#[test]
fn record_fields_are_rendered() {
    let text = buffer_text(&render(&loaded_app()));

    assert!(text.contains("Character 5"));
    assert!(text.contains("Status: Alive"));
    assert!(text.contains("Species: Human"));
    assert!(text.contains("Origin: Earth (C-137)"));
    assert!(text.contains("Location: Citadel of Ricks"));
}

#[test]
fn counter_value_is_rendered() {
    let text = buffer_text(&render(&loaded_app()));
    assert!(text.contains('5'));
}

#[test]
fn notice_replaces_footer_hints() {
    let mut app = loaded_app();
    let without = buffer_text(&render(&app));
    assert!(without.contains("q: Quit"));

    app.set_notice("character 827 is outside the valid range 1..=826".to_string());
    let with = buffer_text(&render(&app));
    assert!(with.contains("outside the valid range"));
    assert!(!with.contains("q: Quit"));
}
