//! Key bindings for the select widget.
//!
//! ## Closed
//!
//! - **Open**: `enter`, `space`, `↓`
//! - **Clear**: `del`, `ctrl+x` (only when the select is clearable)
//!
//! ## Open
//!
//! - **Move**: `↑`/`ctrl+p`, `↓`/`ctrl+j`, `pgup`, `pgdn`
//! - **Choose**: `enter` picks the highlighted option (or adds the typed one)
//! - **Add new**: `ctrl+n` adds the search text as a new option
//! - **Close**: `esc`
//!
//! Every other printable key edits the search text while the panel is open.

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings of the select widget.
#[derive(Debug, Clone)]
pub struct SelectKeyMap {
    /// Open the options panel.
    pub open: Binding,
    /// Close the panel and discard the search.
    pub close: Binding,
    /// Highlight the previous row.
    pub cursor_up: Binding,
    /// Highlight the next row.
    pub cursor_down: Binding,
    /// Move the highlight up by one panel height.
    pub page_up: Binding,
    /// Move the highlight down by one panel height.
    pub page_down: Binding,
    /// Choose the highlighted row.
    pub choose: Binding,
    /// Add the search text as a new option.
    pub add_new: Binding,
    /// Clear the selection.
    pub clear: Binding,
}

impl Default for SelectKeyMap {
    fn default() -> Self {
        Self {
            open: Binding::new(vec![KeyCode::Enter, KeyCode::Char(' '), KeyCode::Down])
                .with_help("enter", "open"),
            close: Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
            cursor_up: Binding::new(vec![
                (KeyCode::Up, KeyModifiers::NONE),
                (KeyCode::Char('p'), KeyModifiers::CONTROL),
            ])
            .with_help("↑", "up"),
            cursor_down: Binding::new(vec![
                (KeyCode::Down, KeyModifiers::NONE),
                (KeyCode::Char('j'), KeyModifiers::CONTROL),
            ])
            .with_help("↓", "down"),
            page_up: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "page up"),
            page_down: Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "page down"),
            choose: Binding::new(vec![KeyCode::Enter]).with_help("enter", "choose"),
            add_new: Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)])
                .with_help("ctrl+n", "add new"),
            clear: Binding::new(vec![
                (KeyCode::Delete, KeyModifiers::NONE),
                (KeyCode::Char('x'), KeyModifiers::CONTROL),
            ])
            .with_help("del", "clear"),
        }
    }
}

impl key::KeyMap for SelectKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.open, &self.clear]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.open, &self.close, &self.clear],
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.page_up,
                &self.page_down,
            ],
            vec![&self.choose, &self.add_new],
        ]
    }
}
