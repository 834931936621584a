//! Trellis - a retained-mode menu and widget engine for games.
//!
//! A [`Menu`] owns a tree of widgets packed into frames, a selection that
//! moves between interactive widgets, and the callbacks attached to them.
//! The host feeds it one frame of [`InputEvent`]s at a time and draws it
//! onto any [`Surface`](render::Surface).
//!
//! # Example
//!
//! ```no_run
//! use trellis::prelude::*;
//!
//! fn main() -> trellis::Result<()> {
//!     let mut menu = MenuBuilder::new(400.0, 300.0)
//!         .title("Welcome")
//!         .on_close(OnClose::Close)
//!         .build()?;
//!
//!     menu.add().text_input("Name: ", TextInputConfig::new().with_default("John"))?;
//!     menu.add().selector(
//!         "Difficulty: ",
//!         SelectorConfig::new().with_items([("Hard", Value::from(1)), ("Easy", Value::from(2))]),
//!     )?;
//!     menu.add().button("Quit", ButtonConfig::new().with_action(MenuAction::Exit))?;
//!
//!     menu.update(&[InputEvent::KeyDown(Key::Down)]);
//!     Ok(())
//! }
//! ```

pub use trellis_core::*;

/// Drawing primitives and services.
pub mod render {
    pub use trellis_render::*;
}

/// Themes, fonts and spacing.
pub mod style {
    pub use trellis_style::*;
}

pub mod callback;
pub mod gallery;
pub mod menu;
pub mod prelude;
pub mod widget;

pub use callback::{CallbackContext, CallbackKind, ContextMap, MenuRequest};
pub use menu::{Menu, MenuBuilder, OnClose};
pub use widget::{InputEvent, Key, MenuAction, MouseButton, Widget};
