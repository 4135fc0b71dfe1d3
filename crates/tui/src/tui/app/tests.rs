use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use rstest::rstest;

use super::{App, ConfirmChoice, InputMode, Pane};
use crate::store::ItemStore;
use crate::tui::helpers::centered_rect;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_chars(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.on_key(key(KeyCode::Char(ch)));
    }
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = centered_rect(40, 10, area);
    assert!(rect.x >= area.x);
    assert!(rect.y >= area.y);
    assert!(rect.width <= area.width);
    assert!(rect.height <= area.height);
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, 10);
}

#[test]
fn add_flow_appends_a_pending_item() {
    let mut app = App::new(ItemStore::new());

    app.on_key(key(KeyCode::Char('a')));
    assert_eq!(app.input_mode, InputMode::Add);

    type_chars(&mut app, "Plan the week");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.pending.len(), 1);
    assert_eq!(app.pending[0].title, "Plan the week");
    assert_eq!(app.input.as_str(), "");
}

#[test]
fn blank_add_is_rejected_and_overlay_stays_open() {
    let mut app = App::new(ItemStore::seeded());

    app.on_key(key(KeyCode::Char('a')));
    type_chars(&mut app, "   ");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.input_mode, InputMode::Add);
    assert_eq!(app.store.len(), 4);
    assert_eq!(app.input.as_str(), "   ");
}

#[test]
fn toggle_moves_the_selected_item_across_panes() {
    let mut app = App::new(ItemStore::seeded());
    assert_eq!(app.pending.len(), 4);
    assert_eq!(app.completed.len(), 0);

    app.on_key(key(KeyCode::Char(' ')));
    assert_eq!(app.pending.len(), 3);
    assert_eq!(app.completed.len(), 1);
    assert_eq!(app.completed[0].id, 1);

    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.pane, Pane::Completed);
    app.on_key(key(KeyCode::Char(' ')));
    assert_eq!(app.pending.len(), 4);
    assert_eq!(app.completed.len(), 0);
}

#[rstest]
#[case(KeyCode::Char(' '))]
#[case(KeyCode::Char('d'))]
#[case(KeyCode::Enter)]
fn every_toggle_key_completes_the_selected_item(#[case] code: KeyCode) {
    let mut app = App::new(ItemStore::seeded());

    app.on_key(key(code));
    assert_eq!(app.pending.len(), 3);
    assert_eq!(app.completed.len(), 1);
}

#[test]
fn delete_asks_for_confirmation_and_defaults_to_no() {
    let mut app = App::new(ItemStore::seeded());

    app.on_key(key(KeyCode::Char('x')));
    assert_eq!(app.input_mode, InputMode::ConfirmDelete);
    assert_eq!(app.confirm_choice, ConfirmChoice::No);

    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.store.len(), 4);

    app.on_key(key(KeyCode::Char('x')));
    app.on_key(key(KeyCode::Left));
    assert_eq!(app.confirm_choice, ConfirmChoice::Yes);
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.store.len(), 3);
    assert!(app.store.get(1).is_none());
}

#[test]
fn palette_toggles_by_explicit_id() {
    let mut app = App::new(ItemStore::seeded());

    app.on_key(key(KeyCode::Char('/')));
    assert_eq!(app.input_mode, InputMode::Command);
    type_chars(&mut app, "toggle 2");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.store.get(2).unwrap().done);
    assert_eq!(app.completed.len(), 1);
}

#[test]
fn palette_add_inserts_the_given_title() {
    let mut app = App::new(ItemStore::new());

    app.on_key(key(KeyCode::Char('/')));
    type_chars(&mut app, "add Buy milk");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.pending.len(), 1);
    assert_eq!(app.pending[0].title, "Buy milk");
}

#[test]
fn palette_suggestions_filter_by_prefix() {
    let mut app = App::new(ItemStore::seeded());

    app.on_key(key(KeyCode::Char('/')));
    assert!(app.suggestions.len() > 2);

    type_chars(&mut app, "he");
    assert_eq!(app.suggestions.len(), 1);
    assert_eq!(app.suggestions[0].fill, "/help");
}

#[test]
fn palette_autofills_the_selected_items_id() {
    let mut app = App::new(ItemStore::seeded());
    app.on_key(key(KeyCode::Char('j')));

    app.on_key(key(KeyCode::Char('/')));
    let toggle = app
        .suggestions
        .iter()
        .find(|s| s.fill.starts_with("/toggle"))
        .unwrap();
    assert_eq!(toggle.fill, "/toggle 2");
}

#[test]
fn palette_rejects_non_numeric_ids() {
    let mut app = App::new(ItemStore::seeded());

    app.on_key(key(KeyCode::Char('/')));
    type_chars(&mut app, "delete abc");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.store.len(), 4);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn quit_key_sets_the_flag() {
    let mut app = App::new(ItemStore::new());
    assert!(!app.should_quit());

    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn selection_clamps_when_the_active_pane_shrinks() {
    let mut app = App::new(ItemStore::seeded());
    app.on_key(key(KeyCode::End));
    assert_eq!(app.selected, 3);

    app.on_key(key(KeyCode::Char(' ')));
    assert_eq!(app.pending.len(), 3);
    assert!(app.selected < app.pending.len());
}
