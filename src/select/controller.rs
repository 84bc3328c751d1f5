//! The option-list controller.
//!
//! `OptionList` owns every piece of select state that is independent of how
//! the select is drawn: the master list of options, the snapshot used to
//! restore it, the search filter, the displayed window, the selection and the
//! form callbacks. Hosts drive it with user intents and re-render from its
//! accessors.
//!
//! Invalid input (unknown default values, duplicate or empty add candidates)
//! and redundant calls (loading past the end, re-setting the same search
//! text) are silent no-ops. They are reported through `tracing` at debug or
//! trace level only.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::config::Config;
use super::events::SelectEvent;
use super::filtering::{filter_options, AddNewRule};
use super::form::{
    run_validators, FormControl, OnChange, OnTouched, OnValidatorChange, ValidationErrors,
    Validator,
};
use super::window::{ScrollMetrics, Window};

/// Searchable, paginated list of string options with a single selection.
///
/// Invariant: when a selection is set it is the first element of the master
/// list, and the displayed window is always a prefix of the filtered list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::{Config, OptionList, SelectEvent};
///
/// let mut list = OptionList::new(Config::default());
/// list.initialize(["Red", "Blue", "Green"], None);
///
/// list.select(Some("Blue"));
/// assert_eq!(list.master_list(), ["Blue", "Red", "Green"]);
/// assert_eq!(
///     list.take_events(),
///     vec![SelectEvent::ValueChanged(Some("Blue".into())), SelectEvent::Touched]
/// );
/// ```
pub struct OptionList {
    config: Config,

    master: Vec<String>,
    raw: Vec<String>,
    filtered: Vec<String>,
    window: Window,
    search: String,
    selection: Option<String>,
    show_add_option: bool,

    disabled: bool,
    disposed: bool,
    /// Set once the user has interacted with the field.
    touched: bool,
    /// Last value the form has seen, through `write_value` or `on_change`.
    form_value: Option<String>,
    validators: Vec<Validator>,
    on_change: Option<OnChange>,
    on_touched: Option<OnTouched>,
    on_validator_change: Option<OnValidatorChange>,

    events: Vec<SelectEvent>,
}

impl OptionList {
    /// Creates an empty controller. Call `initialize` to supply options.
    pub fn new(config: Config) -> Self {
        let window = Window::new(config.page_size);
        Self {
            config,
            master: Vec::new(),
            raw: Vec::new(),
            filtered: Vec::new(),
            window,
            search: String::new(),
            selection: None,
            show_add_option: false,
            disabled: false,
            disposed: false,
            touched: false,
            form_value: None,
            validators: Vec::new(),
            on_change: None,
            on_touched: None,
            on_validator_change: None,
            events: Vec::new(),
        }
    }

    /// Creates a controller and initializes it with `options` and the
    /// configured default value.
    pub fn with_options<I, S>(config: Config, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_value = config.default_value.clone();
        let mut list = Self::new(config);
        list.initialize(options, default_value.as_deref());
        list
    }

    /// Replaces the option set.
    ///
    /// Duplicate labels are collapsed, keeping the first occurrence. The
    /// search text is cleared and the window reset to the first page. The
    /// selection becomes `default_value` when it is one of the options;
    /// otherwise the lone option when auto-selection is enabled; otherwise
    /// the previous selection is kept. The form is told about the resulting
    /// value if it differs from what it last saw.
    pub fn initialize<I, S>(&mut self, options: I, default_value: Option<&str>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.disposed {
            return;
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<String> = Vec::new();
        let mut duplicates = 0usize;
        for option in options {
            let option = option.into();
            if seen.insert(option.clone()) {
                unique.push(option);
            } else {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            debug!(duplicates, "dropped duplicate options");
        }

        self.raw = unique.clone();
        self.master = unique;
        self.search.clear();
        self.filtered = self.master.clone();
        self.window.reset();
        self.show_add_option = false;

        let previous = self.selection.take();
        self.selection = match default_value {
            Some(value) if self.master.iter().any(|o| o == value) => Some(value.to_string()),
            _ if self.config.auto_select_single && self.master.len() == 1 => {
                self.master.first().cloned()
            }
            _ => previous,
        };
        if let Some(value) = default_value {
            if self.selection.as_deref() != Some(value) {
                debug!(default_value = value, "default value is not an option, ignored");
            }
        }

        self.promote_selection();
        self.notify_change();

        debug!(
            options = self.master.len(),
            selection = ?self.selection,
            "options initialized"
        );
    }

    /// Re-initializes after the host replaced the options, applying the
    /// configured default value.
    pub fn on_options_changed<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_value = self.config.default_value.clone();
        self.initialize(options, default_value.as_deref());
    }

    /// Updates the search filter.
    ///
    /// The text is trimmed; setting the same trimmed text again is a no-op.
    /// Otherwise the filtered list is recomputed, the window shrinks back to
    /// the first page and add-new eligibility is re-evaluated.
    pub fn set_search_text(&mut self, text: &str) {
        if self.disposed {
            return;
        }
        let text = text.trim();
        if text == self.search {
            return;
        }
        self.search = text.to_string();
        self.refilter();
        trace!(
            search = %self.search,
            matches = self.filtered.len(),
            show_add_option = self.show_add_option,
            "search updated"
        );
    }

    /// Appends the next page of filtered options to the displayed window.
    ///
    /// Returns false, changing nothing, once the window covers the whole
    /// filtered list. Safe to call as often as the view likes.
    pub fn load_more(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let grew = self.window.load_more(self.filtered.len());
        if grew {
            trace!(
                displayed = self.displayed().len(),
                filtered = self.filtered.len(),
                "loaded more options"
            );
        }
        grew
    }

    /// Loads more options when the panel is scrolled near its end.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        metrics.near_end() && self.load_more()
    }

    /// Creates `candidate` as a new option and selects it.
    ///
    /// The candidate is trimmed. Nothing happens when adding is disabled, the
    /// control is disabled, the candidate is empty, already an option
    /// (case-sensitive), or rejected by a validator other than `required`.
    /// On success `OptionAdded` and `ValueChanged` are emitted and the form
    /// is notified. Returns whether the option was added.
    pub fn add_option(&mut self, candidate: &str) -> bool {
        if self.disposed || self.disabled {
            return false;
        }
        let candidate = candidate.trim();
        if !self.config.allow_add_new
            || candidate.is_empty()
            || self.contains(candidate)
            || !self.candidate_acceptable(candidate)
        {
            debug!(candidate, "new option rejected");
            return false;
        }

        let option = candidate.to_string();
        self.master.insert(0, option.clone());
        self.filtered.push(option.clone());
        self.window.reset();
        self.selection = Some(option.clone());
        self.promote_selection();

        debug!(option = %option, "new option added");
        self.touched = true;
        self.events.push(SelectEvent::OptionAdded(option.clone()));
        self.events.push(SelectEvent::ValueChanged(Some(option)));
        self.notify_change();
        true
    }

    /// Selects `value`, or clears the selection with `None`.
    ///
    /// The chosen option moves to the front of the master list. Emits
    /// `ValueChanged` then `Touched` and notifies the form. Values that are
    /// not options, and any call while disabled, are ignored.
    pub fn select(&mut self, value: Option<&str>) {
        if self.disposed || self.disabled {
            return;
        }
        if let Some(v) = value {
            if !self.contains(v) {
                debug!(value = v, "selection is not an option, ignored");
                return;
            }
        }

        self.selection = value.map(str::to_string);
        self.promote_selection();
        debug!(selection = ?self.selection, "selection changed");

        self.events.push(SelectEvent::ValueChanged(self.selection.clone()));
        self.notify_change();
        self.mark_touched();
    }

    /// Clears the selection and the search and restores the original options.
    ///
    /// Options added since the last `initialize` are dropped. Emits
    /// `ValueChanged(None)` and notifies the form.
    pub fn clear_selection(&mut self) {
        if self.disposed || self.disabled {
            return;
        }
        self.selection = None;
        self.search.clear();
        self.master = self.raw.clone();
        self.filtered = self.master.clone();
        self.window.reset();
        self.show_add_option = false;
        self.touched = true;
        debug!("selection cleared");

        self.events.push(SelectEvent::ValueChanged(None));
        self.notify_change();
    }

    /// Reports that the user interacted with the field.
    pub fn mark_touched(&mut self) {
        if self.disposed {
            return;
        }
        self.touched = true;
        self.events.push(SelectEvent::Touched);
        if let Some(callback) = self.on_touched.as_mut() {
            callback();
        }
    }

    /// Tears the controller down: the selection is cleared without
    /// notification, callbacks and pending events are dropped and every
    /// later mutation is ignored.
    pub fn dispose(&mut self) {
        self.selection = None;
        self.form_value = None;
        self.on_change = None;
        self.on_touched = None;
        self.on_validator_change = None;
        self.events.clear();
        self.disposed = true;
        debug!("option list disposed");
    }

    /// Replaces the validators and notifies the validator-change callback.
    pub fn set_validators(&mut self, validators: Vec<Validator>) {
        self.validators = validators;
        self.refresh_add_option();
        if let Some(callback) = self.on_validator_change.as_mut() {
            callback();
        }
    }

    /// Adds one validator and notifies the validator-change callback.
    pub fn add_validator(&mut self, validator: Validator) {
        self.validators.push(validator);
        self.refresh_add_option();
        if let Some(callback) = self.on_validator_change.as_mut() {
            callback();
        }
    }

    /// Registers the callback invoked when validators change.
    pub fn register_on_validator_change(&mut self, callback: OnValidatorChange) {
        self.on_validator_change = Some(callback);
    }

    /// Removes and returns the queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<SelectEvent> {
        std::mem::take(&mut self.events)
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All current options, selection first.
    pub fn master_list(&self) -> &[String] {
        &self.master
    }

    /// The options as of the last `initialize`.
    pub fn raw_list(&self) -> &[String] {
        &self.raw
    }

    /// Options matching the current search.
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    /// The loaded prefix of the filtered options.
    pub fn displayed(&self) -> &[String] {
        let len = self.window.len(self.filtered.len());
        &self.filtered[..len]
    }

    /// Whether `load_more` would reveal further options.
    pub fn has_more(&self) -> bool {
        !self.window.covers(self.filtered.len())
    }

    /// The trimmed search text.
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// The current selection.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Whether the search text may be offered as a new option.
    pub fn show_add_option(&self) -> bool {
        self.show_add_option
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the user has selected, added, cleared or left the field.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Whether `dispose` has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Shorthand for `validate().is_ok()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn contains(&self, option: &str) -> bool {
        self.master.iter().any(|o| o == option)
    }

    fn candidate_acceptable(&self, candidate: &str) -> bool {
        self.validators.iter().all(|validator| match validator(Some(candidate)) {
            Ok(()) => true,
            Err(err) => err.is_required(),
        })
    }

    /// Moves the selection to the front of the master list, then refilters.
    fn promote_selection(&mut self) {
        if let Some(selected) = self.selection.clone() {
            self.master.retain(|o| *o != selected);
            self.master.insert(0, selected);
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_options(&self.master, &self.search, self.config.match_mode);
        self.window.reset();
        self.refresh_add_option();
    }

    fn refresh_add_option(&mut self) {
        let rule = AddNewRule {
            allow_add_new: self.config.allow_add_new,
            require_empty_filter: self.config.require_empty_filter_for_add_new,
        };
        let acceptable = self.search.is_empty() || self.candidate_acceptable(&self.search);
        self.show_add_option = rule.eligible(&self.search, &self.master, &self.filtered, acceptable);
    }

    /// Calls the change callback unless the form already holds the value.
    fn notify_change(&mut self) {
        if self.form_value == self.selection {
            return;
        }
        self.form_value = self.selection.clone();
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.form_value.as_deref());
        }
    }
}

impl FormControl for OptionList {
    /// Sets the selection silently. A value that is not an option is
    /// inserted at the front of the master list so it can be displayed.
    fn write_value(&mut self, value: Option<&str>) {
        if self.disposed {
            return;
        }
        self.selection = value.map(str::to_string);
        self.form_value = self.selection.clone();
        self.promote_selection();
        trace!(selection = ?self.selection, "value written by form");
    }

    fn register_on_change(&mut self, callback: OnChange) {
        self.on_change = Some(callback);
    }

    fn register_on_touched(&mut self, callback: OnTouched) {
        self.on_touched = Some(callback);
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        if self.disabled != disabled {
            debug!(disabled, "disabled state changed");
        }
        self.disabled = disabled;
    }

    /// A disabled control is always valid.
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.disabled {
            return Ok(());
        }
        run_validators(&self.validators, self.selection.as_deref())
    }
}
