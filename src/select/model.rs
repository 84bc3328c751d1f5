//! The select view: panel state and key handling around an `OptionList`.
//!
//! The view owns presentation-only state (open/closed, highlighted row,
//! scroll offset, the raw search text as typed) and turns key presses into
//! controller operations. Everything about options and selection lives in
//! the controller.

use std::sync::atomic::{AtomicUsize, Ordering};

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use super::config::Config;
use super::controller::OptionList;
use super::form::{FormControl, OnChange, OnTouched, ValidationErrors};
use super::keys::SelectKeyMap;
use super::style::SelectStyles;
use super::window::ScrollMetrics;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// One row of the open panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// Offer to create the search text as a new option.
    AddNew(&'a str),
    /// An existing option.
    Option(&'a str),
}

/// A searchable, paginated select for bubbletea-rs programs.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::{Config, Model};
///
/// let colors = Model::new(
///     Config::default().with_label("Color").with_default_value("Gray"),
///     ["Red", "Blue", "Gray"],
/// );
/// assert_eq!(colors.list().selection(), Some("Gray"));
/// assert!(!colors.is_open());
/// ```
pub struct Model {
    pub(super) id: usize,
    pub(super) list: OptionList,
    pub(super) keymap: SelectKeyMap,
    pub(super) styles: SelectStyles,

    pub(super) open: bool,
    pub(super) focused: bool,
    /// Highlighted row, an index into `rows()`.
    pub(super) cursor: usize,
    /// First visible row of the panel.
    pub(super) offset: usize,
    /// Search text exactly as typed; the controller keeps the trimmed form.
    pub(super) search_input: String,
}

impl Model {
    /// Creates a select over `options`, applying the configured default value.
    pub fn new<I, S>(config: Config, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keymap = SelectKeyMap::default();
        keymap.clear.set_enabled(config.clearable);
        Self {
            id: next_id(),
            list: OptionList::with_options(config, options),
            keymap,
            styles: SelectStyles::default(),
            open: false,
            focused: false,
            cursor: 0,
            offset: 0,
            search_input: String::new(),
        }
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: SelectStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings (builder pattern). The clear binding is
    /// re-gated on the `clearable` setting.
    pub fn with_keymap(mut self, mut keymap: SelectKeyMap) -> Self {
        keymap.clear.set_enabled(self.list.config().clearable);
        self.keymap = keymap;
        self
    }

    /// Unique identifier, carried by the events this select sends.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The underlying option-list controller.
    pub fn list(&self) -> &OptionList {
        &self.list
    }

    /// Mutable access to the controller, for host-driven operations.
    pub fn list_mut(&mut self) -> &mut OptionList {
        &mut self.list
    }

    /// Whether the options panel is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the user has interacted with the field.
    pub fn is_touched(&self) -> bool {
        self.list.is_touched()
    }

    /// The highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The search text as typed.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Replaces the options, e.g. when the host's data changes.
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list.on_options_changed(options);
        self.search_input.clear();
        self.cursor = 0;
        self.offset = 0;
    }

    /// Rows of the open panel: the displayed options, then the add-new row
    /// when eligible. Enter on a fresh search therefore picks the first match.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::with_capacity(self.list.displayed().len() + 1);
        rows.extend(self.list.displayed().iter().map(|o| Row::Option(o.as_str())));
        if self.list.show_add_option() {
            rows.push(Row::AddNew(self.list.search_text()));
        }
        rows
    }

    fn row_count(&self) -> usize {
        self.list.displayed().len() + usize::from(self.list.show_add_option())
    }

    /// Opens the panel with an empty search. Ignored while disabled.
    pub fn open(&mut self) {
        if self.open || self.list.is_disabled() || self.list.is_disposed() {
            return;
        }
        self.open = true;
        self.reset_search();
        trace!(id = self.id, "select opened");
    }

    /// Closes the panel and discards the search.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.reset_search();
        trace!(id = self.id, "select closed");
    }

    fn reset_search(&mut self) {
        self.search_input.clear();
        self.list.set_search_text("");
        self.cursor = 0;
        self.offset = 0;
    }

    /// Handles a key press for the open panel.
    ///
    /// Keys only reach the panel while it is open; a closed select returns
    /// false for every key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyMsg) -> bool {
        if !self.open {
            return false;
        }

        if self.keymap.close.matches(key) {
            self.close();
        } else if self.keymap.cursor_up.matches(key) {
            self.move_cursor(-1);
        } else if self.keymap.cursor_down.matches(key) {
            self.move_cursor(1);
        } else if self.keymap.page_up.matches(key) {
            self.move_cursor(-(self.visible_rows() as isize));
        } else if self.keymap.page_down.matches(key) {
            self.move_cursor(self.visible_rows() as isize);
        } else if self.keymap.choose.matches(key) {
            self.choose();
        } else if self.keymap.add_new.matches(key) {
            self.add_from_search();
        } else if self.keymap.clear.matches(key) {
            self.list.clear_selection();
            self.close();
        } else {
            return self.edit_search(key);
        }
        true
    }

    fn edit_search(&mut self, key: &KeyMsg) -> bool {
        match key.key {
            KeyCode::Backspace => {
                let cut = self
                    .search_input
                    .grapheme_indices(true)
                    .next_back()
                    .map(|(i, _)| i);
                if let Some(i) = cut {
                    self.search_input.truncate(i);
                }
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.search_input.push(c);
            }
            _ => return false,
        }
        self.list.set_search_text(&self.search_input);
        self.cursor = 0;
        self.offset = 0;
        true
    }

    fn visible_rows(&self) -> usize {
        self.list.config().max_visible
    }

    fn move_cursor(&mut self, delta: isize) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let last = count - 1;
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor + delta as usize).min(last)
        };
        self.sync_offset_with_cursor();

        // Reaching the bottom of the loaded rows pulls in the next page.
        if self.list.on_scroll(self.scroll_metrics()) {
            trace!(id = self.id, rows = self.row_count(), "panel extended");
        }
    }

    /// Keeps the highlighted row inside the visible part of the panel.
    fn sync_offset_with_cursor(&mut self) {
        let visible = self.visible_rows();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }
    }

    /// Scroll position of the panel.
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            visible: self.visible_rows(),
            content: self.row_count(),
        }
    }

    fn choose(&mut self) {
        let chosen = match self.rows().get(self.cursor) {
            Some(Row::AddNew(_)) => None,
            Some(Row::Option(option)) => Some(option.to_string()),
            None => return,
        };
        match chosen {
            Some(option) => {
                self.list.select(Some(&option));
                self.close();
            }
            None => self.add_from_search(),
        }
    }

    fn add_from_search(&mut self) {
        let candidate = self.search_input.clone();
        if self.list.add_option(&candidate) {
            self.close();
        }
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<bubbletea_rs::Cmd> {
        self.focused = true;
        None
    }

    /// Closes the panel and marks the field touched.
    fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.close();
        self.focused = false;
        self.list.mark_touched();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl FormControl for Model {
    fn write_value(&mut self, value: Option<&str>) {
        self.list.write_value(value);
    }

    fn register_on_change(&mut self, callback: OnChange) {
        self.list.register_on_change(callback);
    }

    fn register_on_touched(&mut self, callback: OnTouched) {
        self.list.register_on_touched(callback);
    }

    /// Also closes the panel when disabling.
    fn set_disabled_state(&mut self, disabled: bool) {
        if disabled {
            self.close();
        }
        self.list.set_disabled_state(disabled);
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.list.validate()
    }
}
