//! Error types for Trellis.
//!
//! Every fallible operation returns [`MenuError`], which separates mistakes
//! made while *configuring* a menu from operations that are invalid in the
//! menu's *current state*. Rejected keyboard input is not an error at all:
//! widgets drop invalid characters silently.

use crate::id::WidgetId;

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

/// The main error type for Trellis operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuError {
    /// Invalid parameters given while building or configuring.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Operation not valid in the current state.
    #[error(transparent)]
    State(#[from] StateError),
}

impl MenuError {
    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Whether this is a state error.
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }
}

/// Invalid parameters, reported synchronously by the call that received them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// A size that must be strictly positive was zero or negative.
    #[error("{what} must be positive, got {value}")]
    NonPositiveSize { what: &'static str, value: f32 },

    /// A value that must not be negative (padding, margin, thickness).
    #[error("{what} must not be negative, got {value}")]
    NegativeValue { what: &'static str, value: f32 },

    /// A value that must be a finite number was NaN or infinite.
    #[error("{what} must be finite, got {value}")]
    NonFiniteValue { what: &'static str, value: f32 },

    /// A widget needing options was given none.
    #[error("{widget} requires at least one option")]
    EmptyOptions { widget: &'static str },

    /// A default or requested index does not address an option.
    #[error("index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },

    /// A default value failed validation for its widget.
    #[error("invalid default value for {widget}: {message}")]
    InvalidDefault {
        widget: &'static str,
        message: String,
    },

    /// Generic invalid option.
    #[error("invalid value for '{option}': {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    /// Packing target is not a frame.
    #[error("widget {0:?} is not a frame")]
    NotAFrame(WidgetId),

    /// Packing would make a frame contain itself.
    #[error("cannot pack {widget:?} into {frame:?}: it would contain itself")]
    CyclicPack { frame: WidgetId, widget: WidgetId },

    /// The root frame cannot be packed, removed or hidden.
    #[error("the root frame cannot be moved or removed")]
    RootFrame,

    /// A user context key collides with a key the engine supplies.
    #[error("context key '{0}' is reserved by the engine")]
    ReservedContextKey(String),

    /// Two user context entries share a key.
    #[error("context key '{0}' is registered twice")]
    DuplicateContextKey(String),

    /// A widget name is already in use within the menu.
    #[error("widget name '{0}' is already in use")]
    DuplicateName(String),

    /// An image could not be resolved by the image service.
    #[error("image '{0}' is not available")]
    ImageUnavailable(String),

    /// A gallery example name is not known.
    #[error("unknown example '{0}'")]
    UnknownExample(String),
}

impl ConfigurationError {
    /// Create a non-positive size error.
    pub fn non_positive(what: &'static str, value: f32) -> Self {
        Self::NonPositiveSize { what, value }
    }

    /// Create a negative value error.
    pub fn negative(what: &'static str, value: f32) -> Self {
        Self::NegativeValue { what, value }
    }

    /// Create an invalid default error.
    pub fn invalid_default(widget: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidDefault {
            widget,
            message: message.into(),
        }
    }

    /// Create an invalid option error.
    pub fn invalid_option(option: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            message: message.into(),
        }
    }

    /// Reject a size that is not strictly positive.
    pub fn check_positive(what: &'static str, value: f32) -> Result<f32> {
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(Self::non_positive(what, value).into())
        }
    }

    /// Reject NaN and infinities.
    pub fn check_finite(what: &'static str, value: f32) -> Result<f32> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFiniteValue { what, value }.into())
        }
    }

    /// Reject a value below zero.
    pub fn check_non_negative(what: &'static str, value: f32) -> Result<f32> {
        if value >= 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(Self::negative(what, value).into())
        }
    }
}

/// An operation that is well-formed but invalid right now.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Navigation requested but nothing in the menu can be selected.
    #[error("the menu has no selectable widget")]
    NoSelectableWidget,

    /// The widget is invisible, disabled or not selectable.
    #[error("widget {0:?} cannot be selected")]
    NotSelectable(WidgetId),

    /// The id does not name a live widget.
    #[error("widget {0:?} does not exist")]
    UnknownWidget(WidgetId),

    /// No widget is named like this.
    #[error("no widget is named '{0}'")]
    UnknownName(String),

    /// A dropdown commit was requested without a highlighted option.
    #[error("dropdown {0:?} has no highlighted option")]
    NothingHighlighted(WidgetId),

    /// The operation needs a different kind of widget.
    #[error("widget {id:?} is a {actual}, expected {expected}")]
    WrongKind {
        id: WidgetId,
        expected: &'static str,
        actual: &'static str,
    },

    /// A value was set that the widget cannot hold.
    #[error("widget {id:?} rejected value: {message}")]
    RejectedValue { id: WidgetId, message: String },

    /// Going back from a menu that has no open submenu.
    #[error("no submenu is open")]
    NoSubmenu,
}

impl StateError {
    /// Create a wrong-kind error.
    pub fn wrong_kind(id: WidgetId, expected: &'static str, actual: &'static str) -> Self {
        Self::WrongKind {
            id,
            expected,
            actual,
        }
    }

    /// Create a rejected-value error.
    pub fn rejected(id: WidgetId, message: impl Into<String>) -> Self {
        Self::RejectedValue {
            id,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive() {
        assert_eq!(ConfigurationError::check_positive("width", 10.0), Ok(10.0));
        let err = ConfigurationError::check_positive("width", 0.0).unwrap_err();
        assert!(err.is_configuration());
        assert!(ConfigurationError::check_positive("width", -3.0).is_err());
        assert!(ConfigurationError::check_positive("width", f32::NAN).is_err());
    }

    #[test]
    fn test_check_non_negative() {
        assert_eq!(ConfigurationError::check_non_negative("margin", 0.0), Ok(0.0));
        assert!(ConfigurationError::check_non_negative("margin", -0.5).is_err());
    }

    #[test]
    fn test_error_display() {
        let err: MenuError = StateError::NoSelectableWidget.into();
        assert!(err.is_state());
        assert_eq!(err.to_string(), "the menu has no selectable widget");

        let err: MenuError = ConfigurationError::ReservedContextKey("widget".into()).into();
        assert_eq!(err.to_string(), "context key 'widget' is reserved by the engine");
    }
}
