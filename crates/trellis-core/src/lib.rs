//! Core systems for Trellis.
//!
//! This crate provides the foundational pieces shared by every other Trellis
//! crate:
//!
//! - **Identifiers**: generational [`WidgetId`] handles into a menu's widget arena
//! - **Values**: the dynamically typed [`Value`] reported by widgets and
//!   handed to callbacks
//! - **Errors**: [`MenuError`] split into [`ConfigurationError`] and [`StateError`]
//! - **Logging**: `tracing` targets, tree visualization and performance spans
//!
//! # Example
//!
//! ```
//! use trellis_core::{Choice, Rgb, Value};
//!
//! let selected = Value::from(Choice::new("Blue", Rgb::new(0, 0, 255).into(), 2));
//! assert_eq!(selected.as_choice().map(|c| c.index), Some(2));
//! ```

pub mod error;
pub mod id;
pub mod logging;
pub mod value;

pub use error::{ConfigurationError, MenuError, Result, StateError};
pub use id::WidgetId;
pub use logging::{PerfSpan, TreeDebug, TreeFormatOptions, TreeSource, TreeStyle};
pub use value::{Choice, Rgb, Value};

static_assertions::assert_impl_all!(WidgetId: Copy, Send, Sync);
static_assertions::assert_impl_all!(Value: Clone, Send, Sync);
static_assertions::assert_impl_all!(MenuError: std::error::Error, Send, Sync);
