//! Widget system for Trellis.
//!
//! This module provides the widget model the menu is built from:
//!
//! - [`Widget`]: a [`WidgetBase`] with shared state plus a [`WidgetKind`]
//!   holding the kind-specific interaction state
//! - [`WidgetBehavior`]: the capability set every kind implements
//!   (measure, handle input, activate, render)
//! - [`WidgetTree`]: the arena that owns a menu's widgets
//! - [`SelectionManager`]: the focus state machine
//! - [`layout`]: the box-packing layout engine
//!
//! # Overview
//!
//! Widgets are a closed set. Only [`Frame`](widgets::Frame) contains other
//! widgets; the layout engine treats every other kind as an opaque box and
//! never looks at kind-specific state beyond its measured size.
//!
//! ```ignore
//! use trellis::prelude::*;
//!
//! let mut menu = MenuBuilder::new(400.0, 300.0).title("Settings").build()?;
//! let sound = menu.add().toggle_switch("Sound", ToggleConfig::new().with_default(true))?;
//!
//! menu.select(sound, false)?;
//! menu.update(&[InputEvent::KeyDown(Key::Left)]);
//! assert_eq!(menu.widget(sound).unwrap().value(), Value::Bool(false));
//! ```

mod base;
mod events;
mod geometry;
pub mod layout;
mod selection;
mod text_buffer;
mod tree;
pub mod validator;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{InputEvent, Key, MenuAction, MouseButton, NavCommand, Reaction, WidgetInput};
pub use geometry::Axis;
pub use selection::{FocusState, SelectionManager};
pub use text_buffer::TextBuffer;
pub use tree::{WidgetAccess, WidgetTree};
pub use validator::{ValidationState, Validator};

use trellis_core::{Result, StateError, Value};
use trellis_render::{DrawCommand, ImageSizeProvider, Point, Rect, Size, TextMetrics};
use trellis_style::{FontOverrides, SelectionEffect, Theme};

use widgets::{
    Button, ColorInput, DropSelect, Frame, Image, Label, Selector, TextInput, ToggleSwitch, Url,
    VerticalMargin,
};

/// Services available while measuring.
pub struct MeasureContext<'a> {
    /// Text measurement service.
    pub metrics: &'a dyn TextMetrics,
    /// Image size service.
    pub images: &'a dyn ImageSizeProvider,
    /// Width of the menu viewport, for content that wraps to it.
    pub viewport_width: f32,
}

/// Services available while producing draw commands.
pub struct RenderContext<'a> {
    /// Text measurement service.
    pub metrics: &'a dyn TextMetrics,
    /// The menu's theme.
    pub theme: &'a Theme,
    /// Width of the menu viewport, for content that wraps to it.
    pub viewport_width: f32,
    /// The menu's visible area, for overlays.
    pub viewport: Rect,
}

/// The capability set shared by every widget kind.
///
/// Implementations only touch their own kind-specific state; shared state
/// is passed in as a read-only [`WidgetBase`]. The menu turns the returned
/// [`Reaction`] into callbacks and layout invalidation.
pub trait WidgetBehavior {
    /// Short lowercase kind name, used in logs and errors.
    fn kind_name(&self) -> &'static str;

    /// Intrinsic size of the content, excluding padding.
    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size;

    /// Append draw commands for the widget at its final geometry.
    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>);

    /// Whether the kind can ever hold focus.
    fn is_selectable(&self) -> bool {
        true
    }

    /// The current value reported to callbacks.
    fn value(&self) -> Value {
        Value::None
    }

    /// Handle input while focused.
    fn handle_input(&mut self, _base: &WidgetBase, _input: &WidgetInput) -> Reaction {
        Reaction::Ignored
    }

    /// Confirm was pressed while focused.
    fn activate(&mut self, _base: &WidgetBase) -> Reaction {
        Reaction::Ignored
    }

    /// The widget was clicked at `pos` (already selected).
    fn click(&mut self, base: &WidgetBase, _pos: Point) -> Reaction {
        self.activate(base)
    }

    /// Whether the widget wants every input, including navigation.
    fn captures_input(&self) -> bool {
        false
    }

    /// Abort the current interaction. Returns whether anything was open.
    fn cancel(&mut self) -> bool {
        false
    }

    /// Replace the value programmatically. No callback fires.
    fn set_value(&mut self, value: &Value) -> std::result::Result<(), String> {
        Err(format!("{} does not hold a {}", self.kind_name(), value.type_name()))
    }
}

/// Kind-specific widget state.
#[derive(Debug)]
pub enum WidgetKind {
    Button(Button),
    Label(Label),
    Image(Image),
    Url(Url),
    VerticalMargin(VerticalMargin),
    ToggleSwitch(ToggleSwitch),
    Selector(Selector),
    DropSelect(DropSelect),
    TextInput(TextInput),
    ColorInput(ColorInput),
    Frame(Frame),
}

impl WidgetKind {
    pub(crate) fn behavior(&self) -> &dyn WidgetBehavior {
        match self {
            WidgetKind::Button(w) => w,
            WidgetKind::Label(w) => w,
            WidgetKind::Image(w) => w,
            WidgetKind::Url(w) => w,
            WidgetKind::VerticalMargin(w) => w,
            WidgetKind::ToggleSwitch(w) => w,
            WidgetKind::Selector(w) => w,
            WidgetKind::DropSelect(w) => w,
            WidgetKind::TextInput(w) => w,
            WidgetKind::ColorInput(w) => w,
            WidgetKind::Frame(w) => w,
        }
    }

    pub(crate) fn behavior_mut(&mut self) -> &mut dyn WidgetBehavior {
        match self {
            WidgetKind::Button(w) => w,
            WidgetKind::Label(w) => w,
            WidgetKind::Image(w) => w,
            WidgetKind::Url(w) => w,
            WidgetKind::VerticalMargin(w) => w,
            WidgetKind::ToggleSwitch(w) => w,
            WidgetKind::Selector(w) => w,
            WidgetKind::DropSelect(w) => w,
            WidgetKind::TextInput(w) => w,
            WidgetKind::ColorInput(w) => w,
            WidgetKind::Frame(w) => w,
        }
    }
}

/// A widget owned by a menu.
#[derive(Debug)]
pub struct Widget {
    pub(crate) base: WidgetBase,
    pub(crate) kind: WidgetKind,
}

impl Widget {
    pub(crate) fn new(base: WidgetBase, kind: WidgetKind) -> Self {
        Self { base, kind }
    }

    /// Shared state: geometry, flags, spacing and font.
    #[inline]
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Kind-specific state.
    #[inline]
    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// This widget's id in its menu.
    #[inline]
    pub fn id(&self) -> trellis_core::WidgetId {
        self.base.id
    }

    /// The title text.
    #[inline]
    pub fn title(&self) -> &str {
        &self.base.title
    }

    /// Change the title. Relayout happens on the next update.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.base.title = title.into();
        self.base.invalidate();
    }

    /// Short name of the widget kind, used in logs.
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        self.kind.behavior().kind_name()
    }

    /// The value the widget reports to callbacks.
    pub fn value(&self) -> Value {
        self.kind.behavior().value()
    }

    /// Outer rectangle from the last layout pass.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.base.rect
    }

    /// Hidden widgets take no space and are never drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.base.visible
    }

    /// Whether the widget accepts input.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.base.enabled
    }

    /// Whether the widget has focus.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.base.selected
    }

    /// Whether the kind can ever hold focus, regardless of flags.
    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.kind.behavior().is_selectable()
    }

    /// Whether the widget may become the focus target right now.
    #[inline]
    pub(crate) fn can_focus(&self) -> bool {
        self.base.visible && self.base.enabled && self.is_selectable()
    }

    /// Replace the value without firing callbacks.
    ///
    /// Fails with [`StateError::RejectedValue`] if the kind cannot hold
    /// `value`; the widget is left unchanged.
    pub fn set_value(&mut self, value: &Value) -> Result<()> {
        self.kind
            .behavior_mut()
            .set_value(value)
            .map_err(|message| StateError::rejected(self.base.id, message))?;
        self.base.invalidate();
        Ok(())
    }

    /// Apply font overrides. Face or size changes trigger relayout.
    pub fn update_font(&mut self, overrides: &FontOverrides) -> Result<()> {
        if self.base.font.apply(overrides)? {
            self.base.invalidate();
        }
        Ok(())
    }

    /// Decoration drawn while focused.
    #[inline]
    pub fn selection_effect(&self) -> &SelectionEffect {
        &self.base.selection_effect
    }

    /// The widget's own selection effect, editable in place.
    #[inline]
    pub fn selection_effect_mut(&mut self) -> &mut SelectionEffect {
        &mut self.base.selection_effect
    }

    pub fn as_frame(&self) -> Option<&Frame> {
        match &self.kind {
            WidgetKind::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub(crate) fn as_frame_mut(&mut self) -> Option<&mut Frame> {
        match &mut self.kind {
            WidgetKind::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_drop_select(&self) -> Option<&DropSelect> {
        match &self.kind {
            WidgetKind::DropSelect(drop) => Some(drop),
            _ => None,
        }
    }

    pub fn as_text_input(&self) -> Option<&TextInput> {
        match &self.kind {
            WidgetKind::TextInput(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_color_input(&self) -> Option<&ColorInput> {
        match &self.kind {
            WidgetKind::ColorInput(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_selector(&self) -> Option<&Selector> {
        match &self.kind {
            WidgetKind::Selector(selector) => Some(selector),
            _ => None,
        }
    }

    /// Children in packing order; empty for anything but a frame.
    pub fn children(&self) -> &[trellis_core::WidgetId] {
        match self.as_frame() {
            Some(frame) => frame.children(),
            None => &[],
        }
    }

    pub(crate) fn handle_input(&mut self, input: &WidgetInput) -> Reaction {
        self.kind.behavior_mut().handle_input(&self.base, input)
    }

    pub(crate) fn activate(&mut self) -> Reaction {
        self.kind.behavior_mut().activate(&self.base)
    }

    pub(crate) fn click(&mut self, pos: Point) -> Reaction {
        self.kind.behavior_mut().click(&self.base, pos)
    }

    pub(crate) fn captures_input(&self) -> bool {
        self.kind.behavior().captures_input()
    }

    pub(crate) fn cancel(&mut self) -> bool {
        self.kind.behavior_mut().cancel()
    }

    pub(crate) fn content_size(&self, cx: &MeasureContext<'_>) -> Size {
        self.kind.behavior().content_size(&self.base, cx)
    }

    pub(crate) fn render(&self, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        self.kind.behavior().render(&self.base, cx, out);
    }
}

static_assertions::assert_impl_all!(Widget: Send, Sync);

#[cfg(test)]
mod tests;
