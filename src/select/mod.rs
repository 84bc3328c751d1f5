//! Searchable, paginated select with on-the-fly option creation.
//!
//! The module is split in two layers:
//!
//! - `OptionList` (controller): the master list of options, the search
//!   filter, the incrementally loaded window, the selection and the form
//!   integration. It has no terminal dependencies and can be driven by any
//!   front end.
//! - `Model` (view): a bubbletea-rs component that draws the field and the
//!   options panel and turns key presses into controller operations.
//!
//! ### Selection first
//!
//! Whenever a value is selected, written by the form or added by the user it
//! moves to the front of the master list, so the current value is the first
//! row a user sees when the panel opens.
//!
//! ### Pagination
//!
//! Only a prefix of the matching options is displayed. Moving the highlight
//! near the end of the loaded rows loads the next page; changing the search
//! shrinks the window back to one page.
//!
//! ### Adding options
//!
//! With `allow_add_new`, search text that matches no option exactly is
//! offered as an "Add" row. By default the row appears only when nothing
//! matches the search at all; `with_require_empty_filter_for_add_new(false)`
//! offers it whenever the exact text is missing.
//!
//! ### Events
//!
//! User-driven changes are reported as `SelectEvent`s, delivered inside a
//! bubbletea program as a `SelectEventsMsg` carrying the select's id.
//!
//! ```rust
//! use bubbletea_select::select::{required, Config, FormControl, Model};
//!
//! let mut city = Model::new(
//!     Config::default().with_label("City").with_page_size(10),
//!     ["Tumkur", "Mysore", "Rewa"],
//! );
//! city.list_mut().set_validators(vec![required()]);
//! assert!(city.validate().is_err());
//!
//! city.write_value(Some("Rewa"));
//! assert!(city.validate().is_ok());
//! assert_eq!(city.list().master_list()[0], "Rewa");
//! ```

pub mod config;
pub mod controller;
pub mod events;
pub mod filtering;
pub mod form;
pub mod keys;
pub mod model;
mod rendering;
pub mod style;
pub mod window;

#[cfg(test)]
mod tests;

pub use config::{Config, DEFAULT_PAGE_SIZE, PLACEHOLDER_MAX_CHARS};
pub use controller::OptionList;
pub use events::{SelectEvent, SelectEventsMsg};
pub use filtering::{filter_options, normalize, MatchMode};
pub use form::{
    max_length, required, run_validators, FormControl, OnChange, OnTouched, OnValidatorChange,
    ValidationError, ValidationErrors, Validator,
};
pub use keys::SelectKeyMap;
pub use model::{Model, Row};
pub use style::SelectStyles;
pub use window::{ScrollMetrics, Window, LOAD_MORE_THRESHOLD};

use std::time::Duration;

use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use tracing::trace;

use crate::key::{self, Binding};

impl key::KeyMap for Model {
    /// Bindings relevant to the current state: navigation and choosing while
    /// open, opening and clearing while closed.
    fn short_help(&self) -> Vec<&Binding> {
        if self.open {
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.choose,
                &self.keymap.add_new,
                &self.keymap.close,
            ]
        } else {
            vec![&self.keymap.open, &self.keymap.clear]
        }
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        key::KeyMap::full_help(&self.keymap)
    }
}

impl Model {
    /// Processes a key press while focused.
    fn update_key(&mut self, key_msg: &KeyMsg) {
        if self.open {
            self.handle_key(key_msg);
        } else if self.keymap.open.matches(key_msg) {
            self.open();
        } else if self.keymap.clear.matches(key_msg) {
            self.list.clear_selection();
        }
    }

    /// Wraps pending controller events into a command, if there are any.
    fn events_cmd(&mut self) -> Option<Cmd> {
        let events = self.list.take_events();
        if events.is_empty() {
            return None;
        }
        trace!(id = self.id, count = events.len(), "emitting select events");
        let id = self.id;
        Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(SelectEventsMsg {
                id,
                events: events.clone(),
            }) as Msg
        }))
    }

    /// Tears the select down; see `OptionList::dispose`.
    pub fn dispose(&mut self) {
        self.open = false;
        self.search_input.clear();
        self.list.dispose();
    }
}

impl BubbleTeaModel for Model {
    /// Creates an empty select with the default configuration.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Config::default(), Vec::<String>::new()), None)
    }

    /// Handles key presses while focused. Events queued since the last
    /// update, including the `Touched` reported by `blur`, are sent back as
    /// a `SelectEventsMsg`.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if self.list.is_disposed() {
            return None;
        }
        if self.focused {
            if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
                self.update_key(key_msg);
            }
        }
        self.events_cmd()
    }

    fn view(&self) -> String {
        self.view_all()
    }
}
