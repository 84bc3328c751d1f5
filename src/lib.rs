#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-select/")]

//! # bubbletea-select
//!
//! A searchable, paginated select component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, with on-the-fly option creation and form integration.
//!
//! ## Overview
//!
//! The crate is built from two layers:
//!
//! - [`OptionList`]: a terminal-independent controller owning the options,
//!   the search filter, the incrementally loaded window of displayed options,
//!   the selection and the form callbacks.
//! - [`Select`]: a bubbletea-rs component that renders the field and its
//!   options panel and translates key presses into controller operations.
//!
//! ## Features
//!
//! - **Case-insensitive search** by substring, or fuzzy matching
//! - **Incremental loading** of long option lists as the user scrolls
//! - **Add new options** straight from the search text
//! - **Selection first**: the current value is always the first option
//! - **Form integration** through the [`FormControl`] trait and validators
//! - **Type-safe key bindings** with contextual help
//!
//! ## Focus Management
//!
//! The select implements the [`Component`] trait. Losing focus closes the
//! panel and marks the field touched:
//!
//! ```rust
//! use bubbletea_select::prelude::*;
//!
//! let mut color = Select::new(Config::default().with_label("Color"), ["Red", "Gray"]);
//! color.focus();
//! assert!(color.focused());
//!
//! color.blur();
//! assert!(!color.focused());
//! assert!(color.is_touched());
//! ```
//!
//! ## Controller Only
//!
//! Hosts with their own rendering can drive the controller directly:
//!
//! ```rust
//! use bubbletea_select::{Config, OptionList, SelectEvent};
//!
//! let mut list = OptionList::new(Config::default().with_page_size(2));
//! list.initialize(["A", "B", "C", "D"], None);
//! assert_eq!(list.displayed(), ["A", "B"]);
//!
//! list.load_more();
//! assert_eq!(list.displayed(), ["A", "B", "C", "D"]);
//!
//! list.set_search_text("Teal");
//! assert!(list.add_option("Teal"));
//! assert_eq!(list.master_list()[0], "Teal");
//! assert_eq!(
//!     list.take_events(),
//!     vec![
//!         SelectEvent::OptionAdded("Teal".into()),
//!         SelectEvent::ValueChanged(Some("Teal".into())),
//!     ]
//! );
//! ```

pub mod key;
pub mod select;

use bubbletea_rs::Cmd;

/// Core trait for components that take keyboard focus.
///
/// Hosts typically keep one focused component at a time and cycle focus with
/// `Tab`. Only the focused component reacts to key presses.
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away from the component.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use select::Model as Select;
pub use select::{
    filter_options, max_length, required, Config, FormControl, MatchMode, OptionList,
    ScrollMetrics, SelectEvent, SelectEventsMsg, SelectKeyMap, SelectStyles, ValidationError,
    ValidationErrors, Validator,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_select::prelude::*;
///
/// let list = OptionList::with_options(Config::default(), ["Red", "Blue"]);
/// assert_eq!(list.master_list().len(), 2);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap};
    pub use crate::select::{
        max_length, required, Config, FormControl, MatchMode, OptionList, SelectEvent,
        SelectEventsMsg, ValidationError, ValidationErrors,
    };
    pub use crate::{Component, Select};
}
