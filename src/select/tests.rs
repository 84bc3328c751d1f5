use super::*;
use crate::key::KeyMap;
use crate::Component;
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn ctrl(c: char) -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }
}

fn msg(k: KeyMsg) -> Msg {
    Box::new(k) as Msg
}

fn type_text(m: &mut Model, text: &str) {
    for c in text.chars() {
        assert!(m.handle_key(&key(KeyCode::Char(c))));
    }
}

fn plain(m: &Model) -> String {
    strip_ansi_escapes::strip_str(m.view())
}

fn colors() -> Model {
    Model::new(
        Config::default().with_label("Color"),
        ["Red", "Blue", "Green"],
    )
}

fn numbered(count: usize, page_size: usize, max_visible: usize) -> Model {
    Model::new(
        Config::default()
            .with_page_size(page_size)
            .with_max_visible(max_visible),
        (0..count).map(|i| format!("Option {i:02}")),
    )
}

#[test]
fn test_ids_are_unique() {
    let a = colors();
    let b = colors();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_init_is_empty_and_closed() {
    let (m, cmd) = Model::init();
    assert!(cmd.is_none());
    assert!(!m.is_open());
    assert!(m.list().master_list().is_empty());
    assert_eq!(m.list().config(), &Config::default());
}

#[test]
fn test_keys_ignored_until_focused() {
    let mut m = colors();
    assert!(m.update(msg(key(KeyCode::Enter))).is_none());
    assert!(!m.is_open());

    m.focus();
    m.update(msg(key(KeyCode::Enter)));
    assert!(m.is_open());
}

#[test]
fn test_handle_key_ignored_while_closed() {
    let mut m = colors();
    assert!(!m.handle_key(&key(KeyCode::Down)));
    assert!(!m.handle_key(&key(KeyCode::Char('r'))));
    assert_eq!(m.search_input(), "");
}

#[test]
fn test_choose_highlighted_option() {
    let mut m = colors();
    m.focus();
    m.update(msg(key(KeyCode::Char(' '))));
    assert!(m.is_open());

    m.handle_key(&key(KeyCode::Down));
    assert_eq!(m.cursor(), 1);
    m.handle_key(&key(KeyCode::Enter));

    assert!(!m.is_open());
    assert_eq!(m.list().selection(), Some("Blue"));
    assert_eq!(m.list().master_list(), ["Blue", "Red", "Green"]);
    assert_eq!(
        m.list_mut().take_events(),
        vec![
            SelectEvent::ValueChanged(Some("Blue".into())),
            SelectEvent::Touched
        ]
    );
}

#[test]
fn test_update_returns_command_for_events() {
    let mut m = colors();
    m.focus();
    assert!(m.update(msg(key(KeyCode::Enter))).is_none());
    let cmd = m.update(msg(key(KeyCode::Enter)));
    assert!(cmd.is_some());
    assert_eq!(m.list().selection(), Some("Red"));
    assert!(m.list_mut().take_events().is_empty());
}

#[test]
fn test_typing_filters_case_insensitively() {
    let mut m = colors();
    m.open();
    type_text(&mut m, " bLu");
    assert_eq!(m.search_input(), " bLu");
    assert_eq!(m.list().search_text(), "bLu");
    assert_eq!(m.list().filtered(), ["Blue"]);
    assert_eq!(m.rows(), vec![Row::Option("Blue")]);
}

#[test]
fn test_backspace_removes_last_grapheme() {
    let mut m = colors();
    m.open();
    type_text(&mut m, "gé");
    m.handle_key(&key(KeyCode::Backspace));
    assert_eq!(m.search_input(), "g");
    assert_eq!(m.list().filtered(), ["Green"]);

    m.handle_key(&key(KeyCode::Backspace));
    m.handle_key(&key(KeyCode::Backspace));
    assert_eq!(m.search_input(), "");
    assert_eq!(m.list().filtered().len(), 3);
}

#[test]
fn test_add_new_row_then_enter_adds() {
    let mut m = colors();
    m.open();
    type_text(&mut m, "Teal");
    assert!(m.list().show_add_option());
    assert_eq!(m.rows(), vec![Row::AddNew("Teal")]);

    m.handle_key(&key(KeyCode::Enter));
    assert!(!m.is_open());
    assert_eq!(m.list().selection(), Some("Teal"));
    assert_eq!(m.list().master_list()[0], "Teal");
    assert_eq!(
        m.list_mut().take_events(),
        vec![
            SelectEvent::OptionAdded("Teal".into()),
            SelectEvent::ValueChanged(Some("Teal".into())),
        ]
    );
}

#[test]
fn test_ctrl_n_adds_when_permissive() {
    let mut m = Model::new(
        Config::default().with_require_empty_filter_for_add_new(false),
        ["Blue", "Blueberry"],
    );
    m.open();
    type_text(&mut m, "Blu");
    assert_eq!(
        m.rows(),
        vec![Row::Option("Blue"), Row::Option("Blueberry"), Row::AddNew("Blu")]
    );

    assert!(m.handle_key(&ctrl('n')));
    assert_eq!(m.list().selection(), Some("Blu"));
    assert_eq!(m.list().master_list(), ["Blu", "Blue", "Blueberry"]);
}

#[test]
fn test_add_disabled_shows_no_options_label() {
    let mut m = Model::new(
        Config::default()
            .with_allow_add_new(false)
            .with_no_options_label("Nothing here"),
        ["Red"],
    );
    m.open();
    type_text(&mut m, "zzz");
    assert!(m.rows().is_empty());
    m.handle_key(&key(KeyCode::Enter));
    assert!(m.is_open());
    assert_eq!(m.list().selection(), None);
    assert!(plain(&m).contains("Nothing here"));
}

#[test]
fn test_escape_closes_and_resets_search() {
    let mut m = colors();
    m.open();
    type_text(&mut m, "re");
    m.handle_key(&key(KeyCode::Esc));
    assert!(!m.is_open());
    assert_eq!(m.search_input(), "");
    assert_eq!(m.list().search_text(), "");
    assert_eq!(m.list().filtered().len(), 3);
}

#[test]
fn test_reopen_starts_with_empty_search() {
    let mut m = colors();
    m.open();
    type_text(&mut m, "gr");
    m.close();
    m.open();
    assert_eq!(m.search_input(), "");
    assert_eq!(m.cursor(), 0);
    assert_eq!(m.rows().len(), 3);
}

#[test]
fn test_scrolling_near_end_loads_next_page() {
    let mut m = numbered(50, 10, 5);
    m.open();
    assert_eq!(m.list().displayed().len(), 10);

    for _ in 0..4 {
        m.handle_key(&key(KeyCode::Down));
    }
    assert_eq!(m.list().displayed().len(), 10);

    // The visible panel now ends at row 9 of 10 loaded rows.
    for _ in 0..5 {
        m.handle_key(&key(KeyCode::Down));
    }
    assert_eq!(m.cursor(), 9);
    assert_eq!(m.list().displayed().len(), 20);
    assert!(m.list().has_more());
}

#[test]
fn test_page_down_moves_by_panel_height() {
    let mut m = numbered(50, 20, 5);
    m.open();
    m.handle_key(&key(KeyCode::PageDown));
    assert_eq!(m.cursor(), 5);
    m.handle_key(&key(KeyCode::PageUp));
    assert_eq!(m.cursor(), 0);
    m.handle_key(&key(KeyCode::Up));
    assert_eq!(m.cursor(), 0);
}

#[test]
fn test_cursor_stops_at_last_row() {
    let mut m = colors();
    m.open();
    for _ in 0..10 {
        m.handle_key(&key(KeyCode::Down));
    }
    assert_eq!(m.cursor(), 2);
}

#[test]
fn test_disabled_select_does_not_open() {
    let mut m = colors();
    m.focus();
    m.set_disabled_state(true);
    m.update(msg(key(KeyCode::Enter)));
    assert!(!m.is_open());
    assert!(m.validate().is_ok());

    m.set_disabled_state(false);
    m.update(msg(key(KeyCode::Enter)));
    assert!(m.is_open());
}

#[test]
fn test_disabling_closes_open_panel() {
    let mut m = colors();
    m.open();
    m.set_disabled_state(true);
    assert!(!m.is_open());
}

#[test]
fn test_blur_marks_touched_and_shows_error() {
    let touched = Arc::new(Mutex::new(0));
    let spy = Arc::clone(&touched);

    let mut m = colors().with_styles(SelectStyles::default());
    m.list_mut().set_validators(vec![required()]);
    m.register_on_touched(Box::new(move || *spy.lock().unwrap() += 1));

    m.focus();
    m.open();
    assert!(!plain(&m).contains("This field is required"));

    m.blur();
    assert!(!m.is_open());
    assert!(!m.focused());
    assert!(m.is_touched());
    assert_eq!(*touched.lock().unwrap(), 1);
    assert!(plain(&m).contains("This field is required"));

    // The queued event is delivered on the next update.
    assert!(m.update(msg(key(KeyCode::Tab))).is_some());
}

#[test]
fn test_clear_key_only_when_clearable() {
    let mut m = Model::new(
        Config::default().with_default_value("Blue"),
        ["Red", "Blue"],
    );
    m.focus();
    m.update(msg(key(KeyCode::Delete)));
    assert_eq!(m.list().selection(), Some("Blue"));

    let mut m = Model::new(
        Config::default()
            .with_default_value("Blue")
            .with_clearable(true),
        ["Red", "Blue"],
    );
    m.focus();
    m.update(msg(key(KeyCode::Delete)));
    assert_eq!(m.list().selection(), None);
    assert_eq!(m.list().master_list(), ["Red", "Blue"]);
}

#[test]
fn test_form_callbacks_through_view() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let spy = Arc::clone(&seen);

    let mut m = colors();
    m.register_on_change(Box::new(move |v| spy.lock().unwrap().push(v.map(String::from))));
    m.write_value(Some("Green"));
    assert_eq!(m.list().master_list()[0], "Green");

    m.open();
    m.handle_key(&key(KeyCode::Down));
    m.handle_key(&key(KeyCode::Enter));
    assert_eq!(*seen.lock().unwrap(), vec![Some("Red".to_string())]);
}

#[test]
fn test_set_options_reinitializes() {
    let mut m = Model::new(
        Config::default().with_default_value("Gray"),
        Vec::<String>::new(),
    );
    assert_eq!(m.list().selection(), None);

    m.set_options(["Red", "Gray", "Red"]);
    assert_eq!(m.list().selection(), Some("Gray"));
    assert_eq!(m.list().master_list(), ["Gray", "Red"]);
}

#[test]
fn test_dispose_stops_updates() {
    let mut m = colors();
    m.focus();
    m.dispose();
    assert!(m.update(msg(key(KeyCode::Enter))).is_none());
    assert!(!m.is_open());
    m.open();
    assert!(!m.is_open());
}

#[test]
fn test_view_closed() {
    let m = Model::new(
        Config::default()
            .with_label("Color")
            .with_default_value("Gray"),
        ["Red", "Gray"],
    );
    let view = plain(&m);
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines[0], "Color");
    assert!(lines[1].starts_with("Gray"));
    assert!(lines[1].ends_with(style::ARROW_DOWN));
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_view_open_panel() {
    let mut m = Model::new(
        Config::default().with_placeholder("Search colors"),
        ["Red", "Blue"],
    );
    m.focus();
    m.open();
    m.list_mut().select(Some("Blue"));
    let view = plain(&m);

    assert!(view.contains("> Search colors"));
    assert!(view.contains(&format!("{}{}Blue", style::POINTER, style::CHECK)));
    assert!(view.contains("  Red"));
    assert!(view.contains("2/2"));
    assert!(view.contains("esc close"));
}

#[test]
fn test_view_add_row_and_status() {
    let mut m = numbered(30, 10, 4);
    m.open();
    assert!(plain(&m).contains("10/30 (more below)"));

    type_text(&mut m, "Purple");
    let view = plain(&m);
    assert!(view.contains("+ Add \"Purple\""));
    assert!(!view.contains("/30"));
}

#[test]
fn test_view_truncates_long_values() {
    let long = "A very long option label that will not fit";
    let m = Model::new(
        Config::default().with_width(20).with_default_value(long),
        [long],
    );
    let view = plain(&m);
    assert!(view.contains(style::ELLIPSIS));
    assert!(!view.contains(long));
}

#[test]
fn test_short_help_depends_on_state() {
    let mut m = colors();
    let closed: Vec<String> = m.short_help().iter().map(|b| b.help().desc.clone()).collect();
    assert_eq!(closed, ["open", "clear"]);

    m.open();
    let open: Vec<String> = m.short_help().iter().map(|b| b.help().desc.clone()).collect();
    assert_eq!(open, ["up", "down", "choose", "add new", "close"]);
    assert_eq!(m.full_help().len(), 3);
}

#[test]
fn test_scroll_metrics_follow_cursor() {
    let mut m = numbered(10, 20, 3);
    m.open();
    for _ in 0..4 {
        m.handle_key(&key(KeyCode::Down));
    }
    assert_eq!(
        m.scroll_metrics(),
        ScrollMetrics {
            offset: 2,
            visible: 3,
            content: 10
        }
    );
}

#[test]
fn test_enter_picks_first_match_before_add_row() {
    let mut m = Model::new(
        Config::default().with_require_empty_filter_for_add_new(false),
        ["Blue", "Blueberry"],
    );
    m.open();
    type_text(&mut m, "Blu");
    m.handle_key(&key(KeyCode::Enter));
    assert_eq!(m.list().selection(), Some("Blue"));
    assert_eq!(m.list().master_list(), ["Blue", "Blueberry"]);

    // The add row is still reachable at the end.
    m.open();
    type_text(&mut m, "Blu");
    m.handle_key(&key(KeyCode::Down));
    m.handle_key(&key(KeyCode::Down));
    assert_eq!(m.cursor(), 2);
    m.handle_key(&key(KeyCode::Enter));
    assert_eq!(m.list().selection(), Some("Blu"));
}

#[test]
fn test_clearing_while_focused_shows_error() {
    let mut m = Model::new(Config::default().with_clearable(true), ["Red", "Blue"]);
    m.list_mut().set_validators(vec![required()]);
    m.focus();

    m.update(msg(key(KeyCode::Enter)));
    m.update(msg(key(KeyCode::Enter)));
    assert_eq!(m.list().selection(), Some("Red"));
    assert!(m.is_touched());
    assert!(!plain(&m).contains("This field is required"));

    m.update(msg(key(KeyCode::Delete)));
    assert!(m.focused());
    assert_eq!(m.list().selection(), None);
    assert!(plain(&m).contains("This field is required"));
}

#[test]
fn test_fuzzy_typing_in_view() {
    let mut m = Model::new(
        Config::default().with_match_mode(MatchMode::Fuzzy),
        ["Bengaluru", "Bhopal", "Mumbai"],
    );
    m.open();
    type_text(&mut m, "bgl");
    assert_eq!(m.rows(), vec![Row::Option("Bengaluru")]);
    m.handle_key(&key(KeyCode::Enter));
    assert_eq!(m.list().selection(), Some("Bengaluru"));
}
