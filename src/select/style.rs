//! Styling for the select widget.
//!
//! Defaults use `AdaptiveColor` so the widget reads well on both light and
//! dark terminals. Customize by replacing individual fields.

use lipgloss_extras::prelude::*;

/// Arrow shown on the closed field.
pub const ARROW_DOWN: &str = "▾";

/// Arrow shown on the open field.
pub const ARROW_UP: &str = "▴";

/// Marks the selected option in the panel.
pub const CHECK: &str = "✓";

/// Marks the highlighted row in the panel.
pub const POINTER: &str = "›";

/// Unicode ellipsis used when text is cut to fit.
pub const ELLIPSIS: &str = "…";

/// Styles of every part of the select.
#[derive(Debug, Clone)]
pub struct SelectStyles {
    /// Field label.
    pub label: Style,
    /// Field label while focused.
    pub label_focused: Style,
    /// The closed field showing the selection.
    pub field: Style,
    /// Shown in the field when nothing is selected.
    pub empty_value: Style,
    /// Search prompt in the open panel.
    pub search_prompt: Style,
    /// Search placeholder when the search is empty.
    pub placeholder: Style,
    /// Non-highlighted option row.
    pub option: Style,
    /// Highlighted option row.
    pub cursor_option: Style,
    /// Selected-option check mark.
    pub selected_mark: Style,
    /// The "add new" row.
    pub add_new: Style,
    /// The empty-state row.
    pub no_options: Style,
    /// Loaded/total counter under the panel.
    pub status: Style,
    /// Validation error message.
    pub error: Style,
    /// Key in the help line.
    pub help_key: Style,
    /// Description in the help line.
    pub help_desc: Style,
    /// Separator between help items.
    pub help_separator: Style,
}

impl Default for SelectStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            label: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            label_focused: Style::new().foreground(accent.clone()).bold(true),
            field: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            empty_value: Style::new().foreground(subdued.clone()),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            placeholder: Style::new().foreground(subdued.clone()),
            option: Style::new(),
            cursor_option: Style::new().foreground(accent.clone()),
            selected_mark: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            add_new: Style::new().foreground(accent).bold(true),
            no_options: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status: Style::new().foreground(subdued.clone()),
            error: Style::new().foreground(Color::from("#FF5F87")),
            help_key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help_desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            help_separator: Style::new().foreground(subdued),
        }
    }
}
