//! The menu: a widget tree with focus, callbacks, and per-frame entry points.
//!
//! A [`Menu`] owns everything it needs and nothing global:
//!
//! - the [`WidgetTree`] rooted at a vertical frame fixed to the viewport
//! - the [`SelectionManager`] state
//! - the callbacks registered per widget
//! - its services (text metrics, image catalog, random source, url opener)
//! - the submenus opened by its buttons
//!
//! # Frame cycle
//!
//! Applications call [`update`](Menu::update) once per frame with the
//! frame's input events, then [`draw`](Menu::draw). `update` dispatches
//! every event completely (callbacks and their deferred requests
//! included) before the next one, then runs layout if anything is dirty.
//! `draw` only reads geometry. [`mainloop`](Menu::mainloop) runs this
//! cycle against an [`InputSource`].
//!
//! # Example
//!
//! ```ignore
//! use trellis::prelude::*;
//!
//! let mut menu = MenuBuilder::new(600.0, 400.0).title("Welcome").build()?;
//! let name = menu.add().text_input("Name", TextInputConfig::new().with_default("John"))?;
//! menu.add().button("Quit", ButtonConfig::new().with_action(MenuAction::Exit))?;
//!
//! menu.update(&[InputEvent::KeyDown(Key::Down)]);
//! assert_eq!(menu.selected(), Some(name));
//! ```

mod builder;
mod config;
mod controls;
mod debug;
mod draw;
mod input;
mod mainloop;
mod manager;

pub use builder::{MenuBuilder, OnClose, SystemOpener, UrlOpener};
pub use config::{
    ButtonAction, ButtonConfig, ColorInputConfig, ColorNotation, DropSelectConfig, FrameConfig,
    ImageConfig, LabelConfig, SelectorConfig, TextInputConfig, ToggleConfig, UrlConfig,
    WidgetConfig, WidgetOptions,
};
pub use controls::Controls;
pub use mainloop::{InputSource, ScriptedInput};
pub use manager::WidgetManager;

use std::collections::HashMap;
use std::fmt;

use rand::RngCore;
use trellis_core::{ConfigurationError, Result, StateError, Value, WidgetId};
use trellis_render::{ImageSizeProvider, Point, Rect, Size, TextMetrics};
use trellis_style::{Alignment, Margin, Padding, SelectionEffect, Theme};

use crate::callback::WidgetCallbacks;
use crate::widget::layout::{self, LayoutInvalidator, LayoutStats};
use crate::widget::widgets::Frame;
use crate::widget::{
    Axis, MeasureContext, MenuAction, Reaction, SelectionManager, Widget, WidgetBase, WidgetKind,
    WidgetTree,
};

use builder::MenuParts;
use input::InputState;

/// A menu and its widget tree.
pub struct Menu {
    title: String,
    size: Size,
    theme: Theme,
    pub(crate) tree: WidgetTree,
    pub(crate) selection: SelectionManager,
    pub(crate) invalidator: LayoutInvalidator,
    pub(crate) callbacks: HashMap<WidgetId, WidgetCallbacks>,
    pub(crate) names: HashMap<String, WidgetId>,
    pub(crate) controls: Controls,

    pub(crate) metrics: Box<dyn TextMetrics>,
    pub(crate) images: Box<dyn ImageSizeProvider>,
    pub(crate) rng: Box<dyn RngCore>,
    pub(crate) url_opener: Box<dyn UrlOpener>,

    on_close: OnClose,
    pub(crate) mouse_enabled: bool,
    pub(crate) mouse_motion_selection: bool,
    pub(crate) joystick_enabled: bool,

    pub(crate) submenus: Vec<Menu>,
    pub(crate) active_submenu: Option<usize>,
    /// Set on menus opened from another menu's button.
    pub(crate) is_submenu: bool,
    /// Action a submenu hands to its parent.
    pub(crate) escalated: Option<MenuAction>,

    enabled: bool,
    exit_requested: bool,

    pub(crate) input: InputState,
    pub(crate) pending_reveal: Option<WidgetId>,
    last_layout: Option<LayoutStats>,
}

impl Menu {
    pub(crate) fn new(parts: MenuParts) -> Self {
        let body = Size::new(parts.width, parts.height - parts.theme.title_bar_height());
        let root_font = parts.theme.widget_font.clone();
        let center = parts.center_content;
        let tree = WidgetTree::new(|id| {
            let mut base = WidgetBase::new(id, String::new(), root_font, SelectionEffect::none());
            base.padding = Padding::ZERO;
            base.alignment = Alignment::Start;
            let frame = Frame::new(Axis::Vertical)
                .with_size(Some(body.width), Some(body.height))
                .with_center_content(center);
            Widget::new(base, WidgetKind::Frame(frame))
        });

        let mut menu = Self {
            title: parts.title,
            size: Size::new(parts.width, parts.height),
            theme: parts.theme,
            tree,
            selection: SelectionManager::new(),
            invalidator: LayoutInvalidator::new(),
            callbacks: HashMap::new(),
            names: HashMap::new(),
            controls: parts.controls,
            metrics: parts.metrics,
            images: parts.images,
            rng: parts.rng,
            url_opener: parts.url_opener,
            on_close: parts.on_close,
            mouse_enabled: parts.mouse_enabled,
            mouse_motion_selection: parts.mouse_motion_selection,
            joystick_enabled: parts.joystick_enabled,
            submenus: Vec::new(),
            active_submenu: None,
            is_submenu: false,
            escalated: None,
            enabled: true,
            exit_requested: false,
            input: InputState::default(),
            pending_reveal: None,
            last_layout: None,
        };
        menu.invalidator.invalidate_all();
        menu.run_layout();
        menu
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Viewport size, title bar included.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn on_close(&self) -> OnClose {
        self.on_close
    }

    #[inline]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// The viewport rect in menu coordinates.
    #[inline]
    pub fn viewport(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    /// Where the root frame starts, below the title bar.
    #[inline]
    pub(crate) fn root_origin(&self) -> Point {
        Point::new(0.0, self.theme.title_bar_height())
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    #[inline]
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// `false` once the menu was closed; updates are ignored.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Re-enable a closed menu. A pending exit request is dropped so the
    /// menu runs again.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.exit_requested = false;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether an exit action was performed.
    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub(crate) fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Statistics of the layout pass run by the last update, if one ran.
    #[inline]
    pub fn layout_stats(&self) -> Option<LayoutStats> {
        self.last_layout
    }

    /// Start adding widgets to the root frame.
    pub fn add(&mut self) -> WidgetManager<'_> {
        WidgetManager::new(self)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.tree.get(id)
    }

    /// Mutable access for font, title or selection effect changes.
    ///
    /// Size-affecting changes are picked up by the next update.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.tree.get_mut(id)
    }

    /// Look up a widget by the name given at creation.
    pub fn widget_by_name(&self, name: &str) -> Result<WidgetId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| StateError::UnknownName(name.to_string()).into())
    }

    /// The focused widget.
    #[inline]
    pub fn selected(&self) -> Option<WidgetId> {
        self.selection.selected()
    }

    /// Current selection order.
    pub fn selection_order(&self) -> Vec<WidgetId> {
        SelectionManager::selection_order(&self.tree, self.tree.root())
    }

    /// Focus `id`.
    ///
    /// With `update_focus`, scrollable frames above the widget are
    /// scrolled on the next update so that it becomes visible.
    pub fn select(&mut self, id: WidgetId, update_focus: bool) -> Result<()> {
        let root = self.tree.root();
        self.selection.select(&mut self.tree, root, id)?;
        if update_focus {
            self.pending_reveal = Some(id);
        }
        Ok(())
    }

    /// Focus the next widget in selection order, wrapping at the end.
    pub fn select_next(&mut self) -> Result<WidgetId> {
        let root = self.tree.root();
        let id = self.selection.select_next(&mut self.tree, root)?;
        self.pending_reveal = Some(id);
        Ok(id)
    }

    /// Focus the previous widget in selection order, wrapping at the start.
    pub fn select_previous(&mut self) -> Result<WidgetId> {
        let root = self.tree.root();
        let id = self.selection.select_previous(&mut self.tree, root)?;
        self.pending_reveal = Some(id);
        Ok(id)
    }

    /// Drop focus, cancelling any open interaction.
    pub fn unselect(&mut self) {
        self.selection.clear(&mut self.tree);
    }

    /// Move `widget` to the end of `frame`'s children.
    ///
    /// Fails if the margin is not finite, if `frame` is not a frame, if
    /// `widget` is the root, or if `frame` lies inside `widget`.
    pub fn pack(
        &mut self,
        frame: WidgetId,
        widget: WidgetId,
        alignment: Alignment,
        margin: impl Into<Margin>,
    ) -> Result<()> {
        let margin = margin.into();
        margin.validate()?;
        let root = self.tree.root();
        let previous = self.selection_order();
        let old_parent = self.tree.reparent(widget, frame)?;
        if let Some(w) = self.tree.get_mut(widget) {
            w.base.alignment = alignment;
            w.base.margin = margin;
            w.base.invalidate();
        }
        self.invalidator.invalidate(widget);
        self.invalidator.invalidate(old_parent);
        self.invalidator.invalidate(frame);
        self.selection.refocus(&mut self.tree, root, &previous);
        tracing::trace!(target: "trellis::menu", ?widget, ?frame, "packed");
        Ok(())
    }

    /// Remove a widget and everything inside it.
    ///
    /// Focus inside the removed subtree is dropped, not moved.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        let parent = self.tree.parent(id);
        let removed = self.tree.remove_subtree(id)?;
        self.selection.forget(&removed);
        for gone in &removed {
            self.callbacks.remove(gone);
        }
        self.names.retain(|_, v| !removed.contains(v));
        self.input.forget(&removed);
        if self.pending_reveal.is_some_and(|r| removed.contains(&r)) {
            self.pending_reveal = None;
        }
        if let Some(parent) = parent {
            self.invalidator.invalidate(parent);
        }
        tracing::debug!(target: "trellis::menu", widget = ?id, count = removed.len(), "removed");
        Ok(())
    }

    pub fn hide(&mut self, id: WidgetId) -> Result<()> {
        self.set_visible(id, false)
    }

    pub fn show(&mut self, id: WidgetId) -> Result<()> {
        self.set_visible(id, true)
    }

    fn set_visible(&mut self, id: WidgetId, visible: bool) -> Result<()> {
        let root = self.tree.root();
        if id == root {
            return Err(ConfigurationError::RootFrame.into());
        }
        let previous = self.selection_order();
        let widget = self.tree.try_get_mut(id)?;
        if widget.base.visible == visible {
            return Ok(());
        }
        widget.base.visible = visible;
        widget.base.invalidate();
        self.invalidator.invalidate(id);
        self.selection.refocus(&mut self.tree, root, &previous);
        tracing::debug!(target: "trellis::menu", widget = ?id, visible, "visibility changed");
        Ok(())
    }

    /// Enable or disable a widget. A disabled widget loses focus.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> Result<()> {
        let root = self.tree.root();
        let previous = self.selection_order();
        let widget = self.tree.try_get_mut(id)?;
        if widget.base.enabled == enabled {
            return Ok(());
        }
        widget.base.enabled = enabled;
        self.selection.refocus(&mut self.tree, root, &previous);
        Ok(())
    }

    /// Replace a widget's value without firing callbacks.
    pub fn set_value(&mut self, id: WidgetId, value: &Value) -> Result<()> {
        self.tree.try_get_mut(id)?.set_value(value)?;
        self.invalidator.invalidate(id);
        Ok(())
    }

    /// Activate a widget as if confirm were pressed on it.
    pub fn activate(&mut self, id: WidgetId) -> Result<()> {
        let widget = self.tree.try_get_mut(id)?;
        if !widget.can_focus() {
            return Err(StateError::NotSelectable(id).into());
        }
        let reaction = widget.activate();
        if let Reaction::Failed(err) = reaction {
            return Err(err.into());
        }
        self.apply_reaction(id, reaction);
        Ok(())
    }

    /// Scroll a frame to an absolute offset, clamped to its overflow.
    pub fn scroll_frame_to(&mut self, frame: WidgetId, x: f32, y: f32) -> Result<()> {
        let widget = self.tree.try_get_mut(frame)?;
        let frame_state = widget
            .as_frame_mut()
            .ok_or(ConfigurationError::NotAFrame(frame))?;
        if frame_state.scroll.scroll_to(x, y) {
            self.invalidator.request_arrange();
        }
        Ok(())
    }

    /// Mark a widget's measurement stale.
    pub(crate) fn invalidate(&mut self, id: WidgetId) {
        self.invalidator.invalidate(id);
    }

    /// A submenu by the index its button opens.
    pub fn submenu(&self, index: usize) -> Option<&Menu> {
        self.submenus.get(index)
    }

    pub fn submenu_mut(&mut self, index: usize) -> Option<&mut Menu> {
        self.submenus.get_mut(index)
    }

    /// The menu currently receiving input: the deepest open submenu, or
    /// this menu.
    pub fn current(&self) -> &Menu {
        match self.active_submenu.and_then(|i| self.submenus.get(i)) {
            Some(sub) => sub.current(),
            None => self,
        }
    }

    pub fn current_mut(&mut self) -> &mut Menu {
        match self.active_submenu {
            Some(i) if i < self.submenus.len() => self.submenus[i].current_mut(),
            _ => self,
        }
    }

    pub(crate) fn attach_submenu(&mut self, mut menu: Menu) -> usize {
        menu.is_submenu = true;
        self.submenus.push(menu);
        self.submenus.len() - 1
    }

    /// Run layout if anything is dirty, then scroll the pending target
    /// into view.
    pub(crate) fn run_layout(&mut self) {
        if let Some(i) = self.active_submenu
            && let Some(sub) = self.submenus.get_mut(i)
        {
            sub.run_layout();
        }

        let origin = self.root_origin();
        let thickness = self.theme.scrollbar_thickness;
        let cx = MeasureContext {
            metrics: self.metrics.as_ref(),
            images: self.images.as_ref(),
            viewport_width: self.size.width,
        };
        self.last_layout = layout::run(&mut self.tree, &mut self.invalidator, &cx, origin, thickness);

        if let Some(id) = self.pending_reveal.take()
            && layout::reveal(&mut self.tree, id)
        {
            self.invalidator.request_arrange();
            let arranged = layout::run(&mut self.tree, &mut self.invalidator, &cx, origin, thickness);
            if let (Some(first), Some(second)) = (self.last_layout.as_mut(), arranged) {
                first.arranged += second.arranged;
            } else if self.last_layout.is_none() {
                self.last_layout = arranged;
            }
        }
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("size", &self.size)
            .field("widgets", &self.tree.len())
            .field("selected", &self.selection.selected())
            .field("submenus", &self.submenus.len())
            .field("active_submenu", &self.active_submenu)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
