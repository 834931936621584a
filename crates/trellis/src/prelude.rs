//! Commonly used types, for glob import:
//!
//! ```ignore
//! use trellis::prelude::*;
//! ```

// Menu and its configuration
pub use crate::menu::{
    ButtonConfig, ColorInputConfig, Controls, DropSelectConfig, FrameConfig, ImageConfig,
    InputSource, LabelConfig, Menu, MenuBuilder, OnClose, ScriptedInput, SelectorConfig,
    TextInputConfig, ToggleConfig, UrlConfig, UrlOpener, WidgetConfig,
};

// Callbacks
pub use crate::callback::{CallbackContext, MenuRequest};

// Widgets and input
pub use crate::widget::widgets::{InputType, LabelWrap, SelectorStyle};
pub use crate::widget::{InputEvent, Key, MenuAction, MouseButton, Widget};

// Values and errors
pub use trellis_core::{
    Choice, ConfigurationError, MenuError, Result, Rgb, StateError, Value, WidgetId,
};

// Drawing and style
pub use trellis_render::{Color, DrawList, Point, Rect, Size, Surface};
pub use trellis_style::{Alignment, FontOverrides, Padding, SelectionEffect, Theme};
