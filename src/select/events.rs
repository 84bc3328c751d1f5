//! Outbound notifications of the select widget.

/// Something the host may want to react to.
///
/// Events are queued by the controller in emission order and handed out by
/// `take_events`; inside a bubbletea program the view also delivers them as
/// a `SelectEventsMsg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// The user created a new option.
    OptionAdded(String),
    /// The user changed the selection; `None` means it was cleared.
    ValueChanged(Option<String>),
    /// The user interacted with the field.
    Touched,
}

/// Batch of events produced by a single update, sent back through the
/// bubbletea runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEventsMsg {
    /// Identifier of the select that produced the events.
    pub id: usize,
    /// The events, oldest first.
    pub events: Vec<SelectEvent>,
}
