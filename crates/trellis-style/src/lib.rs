//! Themes, fonts and selection effects for Trellis.
//!
//! This crate holds the plain configuration structures a menu reads its
//! appearance from:
//!
//! - **Themes**: [`Theme`] with six built-ins and TOML overlay files
//! - **Fonts**: [`WidgetFont`] and partial [`FontOverrides`]
//! - **Selection effects**: [`SelectionEffect`] decorations for the selected widget
//! - **Spacing**: [`Alignment`], [`Margin`] and [`Padding`]
//!
//! # Example
//!
//! ```
//! use trellis_style::{SelectionEffect, Theme};
//!
//! let mut theme = Theme::green();
//! theme.widget_selection_effect = SelectionEffect::underline(2.0, 0.0, 2.0)?;
//! assert!(theme.validate().is_ok());
//! # Ok::<(), trellis_core::MenuError>(())
//! ```

mod error;
pub mod font;
pub mod selection;
pub mod spacing;
pub mod theme;

pub use error::{Error, Result};
pub use font::{FontOverrides, WidgetFont};
pub use selection::{SelectionEffect, SelectionKind};
pub use spacing::{Alignment, Margin, Padding};
pub use theme::{BUILTIN_NAMES, Theme, TitleBarStyle};
