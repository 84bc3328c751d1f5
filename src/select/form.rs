//! Form integration: the contract between a select and the form that owns its value.
//!
//! A form writes values in with `write_value`, learns about user changes
//! through the callbacks it registers, toggles the disabled state and asks
//! for validity. Validation never panics or errors out of band: it returns a
//! structured `ValidationErrors` describing every failed rule.

use thiserror::Error;

/// Callback invoked with the new value whenever the user changes it.
pub type OnChange = Box<dyn FnMut(Option<&str>) + Send>;

/// Callback invoked whenever the user interacts with the field.
pub type OnTouched = Box<dyn FnMut() + Send>;

/// Callback invoked when the set of validators changes.
pub type OnValidatorChange = Box<dyn FnMut() + Send>;

/// A validation rule over the current value.
pub type Validator = Box<dyn Fn(Option<&str>) -> Result<(), ValidationError> + Send>;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A value is required but none is selected.
    #[error("a value is required")]
    Required,
    /// The value is longer than allowed.
    #[error("value is {actual} characters long, at most {max} allowed")]
    MaxLength {
        /// Maximum allowed length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },
    /// A host-defined rule failed.
    #[error("{key}: {message}")]
    Custom {
        /// Stable identifier of the rule.
        key: String,
        /// Human-readable reason.
        message: String,
    },
}

impl ValidationError {
    /// Creates a host-defined error.
    pub fn custom(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether this error only means "no value yet".
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Every rule that failed for a value, in validator order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// The individual failures.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether a `Required` failure is among them.
    pub fn has_required(&self) -> bool {
        self.0.iter().any(ValidationError::is_required)
    }
}

/// Rejects an empty selection.
///
/// ```rust
/// use bubbletea_select::select::{required, ValidationError};
///
/// let v = required();
/// assert_eq!(v(None), Err(ValidationError::Required));
/// assert_eq!(v(Some("Red")), Ok(()));
/// ```
pub fn required() -> Validator {
    Box::new(|value| match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required),
    })
}

/// Rejects values longer than `max` characters. An empty selection passes.
pub fn max_length(max: usize) -> Validator {
    Box::new(move |value| {
        let actual = value.map(|v| v.chars().count()).unwrap_or(0);
        if actual > max {
            Err(ValidationError::MaxLength { max, actual })
        } else {
            Ok(())
        }
    })
}

/// Runs `validators` over `value`, collecting every failure.
pub fn run_validators(validators: &[Validator], value: Option<&str>) -> Result<(), ValidationErrors> {
    let errors: Vec<ValidationError> = validators.iter().filter_map(|v| v(value).err()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// The form-control contract of a select.
///
/// Implementors keep exactly one change callback and one touched callback;
/// registering again replaces the previous one.
pub trait FormControl {
    /// Sets the value from the form without notifying the form back.
    fn write_value(&mut self, value: Option<&str>);

    /// Registers the callback invoked for every user-driven value change.
    fn register_on_change(&mut self, callback: OnChange);

    /// Registers the callback invoked whenever the field is touched.
    fn register_on_touched(&mut self, callback: OnTouched);

    /// Enables or disables the control.
    fn set_disabled_state(&mut self, disabled: bool);

    /// Checks the current value against the configured validators.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
