//! View rendering for the select widget.
//!
//! The view is composed top to bottom of the label, the field, the open
//! panel (search line, option rows, status and help) and the validation
//! error. Every part is a separate method so hosts embedding the select in
//! a larger layout can reuse them.

use unicode_width::UnicodeWidthStr;

use super::model::{Model, Row};
use super::style::{ARROW_DOWN, ARROW_UP, CHECK, ELLIPSIS, POINTER};
use crate::key::KeyMap;

/// Cuts `text` to at most `width` columns, ending it with an ellipsis when
/// anything was dropped.
pub(super) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

impl Model {
    pub(super) fn view_label(&self) -> String {
        let style = if self.focused {
            &self.styles.label_focused
        } else {
            &self.styles.label
        };
        style.clone().render(&self.list.config().label)
    }

    /// The closed field: the selection (or the placeholder dash), the clear
    /// mark when clearable and the arrow.
    pub(super) fn view_field(&self) -> String {
        let config = self.list.config();
        let arrow = if self.open { ARROW_UP } else { ARROW_DOWN };
        let clear = if config.clearable && self.list.selection().is_some() {
            " ✕"
        } else {
            ""
        };
        let reserved = arrow.width() + clear.width() + 1;
        let room = config.width.saturating_sub(reserved);

        let value = match self.list.selection() {
            Some(selected) => {
                let text = truncate(selected, room);
                let pad = room.saturating_sub(text.width());
                self.styles.field.clone().render(&format!("{text}{}", " ".repeat(pad)))
            }
            None => {
                let text = truncate("—", room);
                let pad = room.saturating_sub(text.width());
                self.styles
                    .empty_value
                    .clone()
                    .render(&format!("{text}{}", " ".repeat(pad)))
            }
        };
        format!("{value}{clear} {arrow}")
    }

    pub(super) fn view_search(&self) -> String {
        let prompt = self.styles.search_prompt.clone().render("> ");
        if self.search_input.is_empty() {
            let placeholder = self
                .styles
                .placeholder
                .clone()
                .render(&self.list.config().placeholder);
            format!("{prompt}{placeholder}")
        } else {
            format!("{prompt}{}", self.search_input)
        }
    }

    /// Visible rows of the open panel, or the empty-state label.
    pub(super) fn view_rows(&self) -> String {
        let rows = self.rows();
        if rows.is_empty() {
            let label = &self.list.config().no_options_label;
            return self.styles.no_options.clone().render(&format!("  {label}"));
        }

        let config = self.list.config();
        let room = config.width.saturating_sub(4);
        let end = (self.offset + config.max_visible).min(rows.len());
        let mut lines = Vec::with_capacity(end.saturating_sub(self.offset));

        for (index, row) in rows.iter().enumerate().take(end).skip(self.offset) {
            let highlighted = index == self.cursor;
            let pointer = if highlighted { POINTER } else { " " };
            let line = match row {
                Row::AddNew(text) => {
                    let body = truncate(&format!("+ {} \"{text}\"", config.add_new_label), room);
                    format!("{pointer} {}", self.styles.add_new.clone().render(&body))
                }
                Row::Option(option) => {
                    let selected = self.list.selection() == Some(*option);
                    let mark = if selected {
                        self.styles.selected_mark.clone().render(CHECK)
                    } else {
                        " ".to_string()
                    };
                    let body = truncate(option, room);
                    let style = if highlighted {
                        &self.styles.cursor_option
                    } else {
                        &self.styles.option
                    };
                    let body = style.clone().render(&body);
                    format!("{pointer}{mark}{body}")
                }
            };
            lines.push(line);
        }
        lines.join("\n")
    }

    /// "displayed/matching" counter, with a hint while more can be loaded.
    pub(super) fn view_status(&self) -> String {
        let shown = self.list.displayed().len();
        let total = self.list.filtered().len();
        if total == 0 {
            return String::new();
        }
        let more = if self.list.has_more() { " (more below)" } else { "" };
        self.styles
            .status
            .clone()
            .render(&format!("{shown}/{total}{more}"))
    }

    pub(super) fn view_help(&self) -> String {
        let separator = self.styles.help_separator.clone().render(" • ");
        self.short_help()
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| {
                format!(
                    "{} {}",
                    self.styles.help_key.clone().render(&b.help().key),
                    self.styles.help_desc.clone().render(&b.help().desc)
                )
            })
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }

    /// The validation message, shown once the field is touched and invalid.
    pub(super) fn view_error(&self) -> String {
        if !self.list.is_touched() || self.list.is_valid() {
            return String::new();
        }
        self.styles
            .error
            .clone()
            .render(&self.list.config().error_message)
    }

    pub(super) fn view_all(&self) -> String {
        let mut sections = vec![self.view_label(), self.view_field()];

        if self.open {
            sections.push(self.view_search());
            sections.push(self.view_rows());
            let status = self.view_status();
            if !status.is_empty() {
                sections.push(status);
            }
        }

        if self.focused {
            let help = self.view_help();
            if !help.is_empty() {
                sections.push(help);
            }
        }

        let error = self.view_error();
        if !error.is_empty() {
            sections.push(error);
        }

        sections.join("\n")
    }
}
