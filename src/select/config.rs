//! Configuration for the select widget.
//!
//! `Config` carries every input the host supplies when it builds a select:
//! the behavioural switches read by the option-list controller and the
//! cosmetic strings read by the terminal view. All setters follow the
//! builder pattern and clamp out-of-range values instead of failing.

use super::filtering::MatchMode;

/// Placeholders longer than this many characters are truncated.
pub const PLACEHOLDER_MAX_CHARS: usize = 25;

/// Characters kept from a truncated placeholder before the `"..."` suffix.
const PLACEHOLDER_KEEP_CHARS: usize = 22;

/// Options shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Settings for a select widget.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::Config;
///
/// let config = Config::default()
///     .with_label("Color")
///     .with_page_size(5)
///     .with_default_value("Gray")
///     .with_allow_add_new(false);
///
/// assert_eq!(config.page_size, 5);
/// assert_eq!(config.aria_label, "Color");
/// assert_eq!(config.default_value.as_deref(), Some("Gray"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Options appended to the displayed window per `load_more`. Never zero.
    pub page_size: usize,
    /// Whether typing an unknown label offers to create it.
    pub allow_add_new: bool,
    /// When set, the add-new row only appears once nothing matches the search.
    pub require_empty_filter_for_add_new: bool,
    /// Select the only option automatically when exactly one is supplied.
    pub auto_select_single: bool,
    /// How search text is matched against options.
    pub match_mode: MatchMode,
    /// Selection applied on initialization when it is one of the options.
    pub default_value: Option<String>,
    /// Whether the view offers a clear affordance.
    pub clearable: bool,

    /// Field label.
    pub label: String,
    /// Accessible name; falls back to the label.
    pub aria_label: String,
    /// Search box placeholder.
    pub placeholder: String,
    /// Label of the add-new row.
    pub add_new_label: String,
    /// Shown when nothing matches and adding is not possible.
    pub no_options_label: String,
    /// Shown under the field when it is touched and invalid.
    pub error_message: String,

    /// Option rows visible at once in the open panel.
    pub max_visible: usize,
    /// Width of the field in terminal columns.
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let label = "Select an option".to_string();
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            allow_add_new: true,
            require_empty_filter_for_add_new: true,
            auto_select_single: false,
            match_mode: MatchMode::Substring,
            default_value: None,
            clearable: false,
            aria_label: label.clone(),
            label,
            placeholder: "Search or add new".to_string(),
            add_new_label: "Add".to_string(),
            no_options_label: "No options available".to_string(),
            error_message: "This field is required".to_string(),
            max_visible: 8,
            width: 40,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. Values below 1 are clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Enables or disables on-the-fly option creation.
    pub fn with_allow_add_new(mut self, allow: bool) -> Self {
        self.allow_add_new = allow;
        self
    }

    /// Chooses between the strict and permissive add-new eligibility rule.
    pub fn with_require_empty_filter_for_add_new(mut self, require: bool) -> Self {
        self.require_empty_filter_for_add_new = require;
        self
    }

    /// Enables auto-selection of a lone option.
    pub fn with_auto_select_single(mut self, auto: bool) -> Self {
        self.auto_select_single = auto;
        self
    }

    /// Sets the search match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Sets the default selection.
    pub fn with_default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// Shows or hides the clear affordance.
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Sets the label. The accessible name follows it unless set explicitly.
    pub fn with_label(mut self, label: &str) -> Self {
        if self.aria_label.is_empty() || self.aria_label == self.label {
            self.aria_label = label.to_string();
        }
        self.label = label.to_string();
        self
    }

    /// Sets the accessible name. An empty string restores the label.
    pub fn with_aria_label(mut self, aria_label: &str) -> Self {
        self.aria_label = if aria_label.is_empty() {
            self.label.clone()
        } else {
            aria_label.to_string()
        };
        self
    }

    /// Sets the search placeholder, truncating it when it is too long.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = truncate_placeholder(placeholder);
        self
    }

    /// Sets the label of the add-new row.
    pub fn with_add_new_label(mut self, label: &str) -> Self {
        self.add_new_label = label.to_string();
        self
    }

    /// Sets the empty-state label.
    pub fn with_no_options_label(mut self, label: &str) -> Self {
        self.no_options_label = label.to_string();
        self
    }

    /// Sets the validation error message.
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }

    /// Sets the visible row count of the open panel. Clamped to at least 1.
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    /// Sets the field width in columns. Clamped to at least 8.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(8);
        self
    }
}

fn truncate_placeholder(placeholder: &str) -> String {
    if placeholder.chars().count() > PLACEHOLDER_MAX_CHARS {
        let kept: String = placeholder.chars().take(PLACEHOLDER_KEEP_CHARS).collect();
        format!("{kept}...")
    } else {
        placeholder.to_string()
    }
}
