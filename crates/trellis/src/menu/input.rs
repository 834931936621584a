//! Event routing.
//!
//! Each [`InputEvent`] is dispatched completely before the next one:
//!
//! 1. An open submenu receives everything; actions it cannot handle
//!    itself (back, reset, close, exit) come back to its parent.
//! 2. Keys, hats, axes and joystick buttons become [`NavCommand`]s through
//!    the menu's [`Controls`](super::Controls). A widget that captures
//!    input (an open dropdown) receives every command; otherwise next and
//!    previous move focus, confirm activates and cancel backs out.
//! 3. Text and editing keys go to the focused widget.
//! 4. Pointer events hit the open overlay first, then scrollbars, then
//!    widgets.
//!
//! The widget's [`Reaction`] decides which callback fires. Callback
//! requests are applied as soon as the callback returns.

use std::collections::HashMap;

use trellis_core::WidgetId;
use trellis_render::Point;

use super::{Menu, OnClose};
use crate::callback::{CallbackKind, MenuRequest};
use crate::widget::layout::view_rect;
use crate::widget::widgets::DropOverlay;
use crate::widget::widgets::scroll_bar::{ScrollBar, ScrollBarPart};
use crate::widget::{
    Axis, InputEvent, Key, MenuAction, MouseButton, NavCommand, Reaction, Widget, WidgetInput,
    WidgetKind,
};

/// Pointer and joystick state carried between events.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    /// Widget under the last button press, activated on release.
    pressed: Option<WidgetId>,
    drag: Option<ThumbDrag>,
    /// Last reported direction per joystick axis.
    axes: HashMap<u8, i8>,
}

/// A scrollbar thumb being dragged.
#[derive(Debug, Clone, Copy)]
struct ThumbDrag {
    frame: WidgetId,
    axis: Axis,
    /// Pointer distance from the thumb start when the drag began.
    grab: f32,
}

impl InputState {
    pub(crate) fn forget(&mut self, removed: &[WidgetId]) {
        if self.pressed.is_some_and(|id| removed.contains(&id)) {
            self.pressed = None;
        }
        if self.drag.is_some_and(|d| removed.contains(&d.frame)) {
            self.drag = None;
        }
    }

    fn reset(&mut self) {
        self.pressed = None;
        self.drag = None;
        self.axes.clear();
    }
}

/// Coordinate of `pos` along `axis`.
fn along(axis: Axis, pos: Point) -> f32 {
    match axis {
        Axis::Horizontal => pos.x,
        Axis::Vertical => pos.y,
    }
}

impl Menu {
    /// Process one frame of input, then lay out whatever changed.
    ///
    /// Returns whether any event was handled. A closed menu ignores input.
    pub fn update(&mut self, events: &[InputEvent]) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let mut handled = false;
        for event in events {
            handled |= self.dispatch(event);
            if !self.is_enabled() {
                break;
            }
        }
        self.run_layout();
        handled
    }

    fn dispatch(&mut self, event: &InputEvent) -> bool {
        if matches!(event, InputEvent::Quit) {
            tracing::info!(target: "trellis::menu", title = %self.title(), "window closed");
            self.disable();
            return true;
        }

        if let Some(index) = self.active_submenu {
            let Some(sub) = self.submenus.get_mut(index) else {
                self.active_submenu = None;
                return false;
            };
            let handled = sub.dispatch(event);
            if let Some(action) = sub.escalated.take() {
                self.leave_submenu(index, action);
            }
            return handled;
        }

        tracing::trace!(target: "trellis::input", ?event, "routing event");
        match event {
            InputEvent::KeyDown(key) => self.key_down(*key),
            InputEvent::Text(text) => self.send_to_focused(WidgetInput::Text(text.clone())),
            InputEvent::MouseMotion(pos) if self.mouse_enabled => self.mouse_motion(*pos),
            InputEvent::MouseDown {
                pos,
                button: MouseButton::Left,
            } if self.mouse_enabled => self.mouse_down(*pos),
            InputEvent::MouseUp {
                pos,
                button: MouseButton::Left,
            } if self.mouse_enabled => self.mouse_up(*pos),
            InputEvent::MouseWheel { pos, delta } if self.mouse_enabled => self.mouse_wheel(*pos, *delta),
            InputEvent::JoyHat { x, y } if self.joystick_enabled => {
                match self.controls.command_for_hat(*x, *y) {
                    Some(command) => self.handle_command(command),
                    None => false,
                }
            }
            InputEvent::JoyAxis { axis, value } if self.joystick_enabled => self.joy_axis(*axis, *value),
            InputEvent::JoyButton(button) if self.joystick_enabled => {
                match self.controls.command_for_button(*button) {
                    Some(command) => self.handle_command(command),
                    None => false,
                }
            }
            InputEvent::FocusLost => {
                self.input.reset();
                self.cancel_focused()
            }
            _ => false,
        }
    }

    fn key_down(&mut self, key: Key) -> bool {
        if let Some(command) = self.controls.command_for_key(key) {
            return self.handle_command(command);
        }
        match WidgetInput::from_editing_key(key) {
            Some(input) => self.send_to_focused(input),
            None => false,
        }
    }

    fn handle_command(&mut self, command: NavCommand) -> bool {
        if let Some(id) = self.selection.selected()
            && self.tree.get(id).is_some_and(Widget::captures_input)
        {
            return self.send_to_focused(WidgetInput::from_command(command));
        }
        match command {
            NavCommand::Next => self.navigate(true),
            NavCommand::Previous => self.navigate(false),
            NavCommand::Left => self.send_to_focused(WidgetInput::Left),
            NavCommand::Right => self.send_to_focused(WidgetInput::Right),
            NavCommand::Confirm => self.activate_focused(),
            NavCommand::Cancel => self.cancel_pressed(),
        }
    }

    fn navigate(&mut self, forward: bool) -> bool {
        let result = if forward {
            self.select_next()
        } else {
            self.select_previous()
        };
        match result {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(target: "trellis::selection", error = %err, "navigation dropped");
                false
            }
        }
    }

    fn send_to_focused(&mut self, input: WidgetInput) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        let Some(widget) = self.tree.get_mut(id) else {
            return false;
        };
        let reaction = widget.handle_input(&input);
        tracing::trace!(target: "trellis::input", widget = ?id, ?input, ?reaction, "widget input");
        self.apply_reaction(id, reaction)
    }

    fn activate_focused(&mut self) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        let Some(widget) = self.tree.get_mut(id) else {
            return false;
        };
        let reaction = widget.activate();
        self.apply_reaction(id, reaction)
    }

    /// Close the focused widget's interaction. Returns whether one was open.
    fn cancel_focused(&mut self) -> bool {
        self.selection
            .selected()
            .and_then(|id| self.tree.get_mut(id))
            .is_some_and(Widget::cancel)
    }

    fn cancel_pressed(&mut self) -> bool {
        if self.cancel_focused() {
            return true;
        }
        if self.is_submenu {
            self.perform_action(MenuAction::Back);
            return true;
        }
        let action = match self.on_close() {
            OnClose::None => return false,
            OnClose::Close => MenuAction::Close,
            OnClose::Exit => MenuAction::Exit,
            OnClose::Back => MenuAction::Back,
            OnClose::Reset => MenuAction::Reset,
        };
        self.perform_action(action);
        true
    }

    /// Turn a widget's reaction into invalidation, callbacks and actions.
    pub(crate) fn apply_reaction(&mut self, id: WidgetId, reaction: Reaction) -> bool {
        match reaction {
            Reaction::Ignored => false,
            Reaction::Consumed => true,
            Reaction::Rejected => {
                tracing::trace!(target: "trellis::input", widget = ?id, "input rejected");
                true
            }
            Reaction::Changed => {
                self.invalidate(id);
                self.fire(id, CallbackKind::Change);
                true
            }
            Reaction::Returned => {
                self.fire(id, CallbackKind::Return);
                true
            }
            Reaction::Action(action) => {
                self.fire(id, CallbackKind::Return);
                self.perform_action(action);
                true
            }
            Reaction::OpenUrl(url) => {
                self.open_url(&url);
                self.fire(id, CallbackKind::Return);
                true
            }
            Reaction::Failed(err) => {
                tracing::debug!(target: "trellis::input", widget = ?id, error = %err, "input dropped");
                false
            }
        }
    }

    fn fire(&mut self, id: WidgetId, kind: CallbackKind) {
        let Some(callbacks) = self.callbacks.get_mut(&id) else {
            return;
        };
        let Some(widget) = self.tree.get_mut(id) else {
            return;
        };
        let value = widget.value();
        let mut requests = Vec::new();
        callbacks.invoke(kind, &value, id, widget, &mut *self.rng, &mut requests);
        self.apply_requests(requests);
    }

    fn apply_requests(&mut self, requests: Vec<MenuRequest>) {
        for request in requests {
            tracing::trace!(target: "trellis::callback", ?request, "applying request");
            let result = match request {
                MenuRequest::Select(id) => self.select(id, true),
                MenuRequest::Hide(id) => self.hide(id),
                MenuRequest::Show(id) => self.show(id),
                MenuRequest::Remove(id) => self.remove(id),
                MenuRequest::SetEnabled(id, enabled) => self.set_enabled(id, enabled),
                MenuRequest::SetValue(id, value) => self.set_value(id, &value),
                MenuRequest::Action(action) => {
                    self.perform_action(action);
                    Ok(())
                }
            };
            if let Err(err) = result {
                tracing::debug!(target: "trellis::callback", error = %err, "callback request failed");
            }
        }
    }

    fn open_url(&mut self, url: &str) {
        match self.url_opener.open(url) {
            Ok(()) => tracing::debug!(target: "trellis::menu", url, "opened url"),
            Err(error) => tracing::warn!(target: "trellis::menu", url, %error, "failed to open url"),
        }
    }

    /// Perform a menu action at this level, handing it to the parent
    /// menu when it concerns the whole chain.
    pub(crate) fn perform_action(&mut self, action: MenuAction) {
        tracing::debug!(target: "trellis::menu", ?action, submenu = self.is_submenu, "menu action");
        match action {
            MenuAction::OpenSubmenu(index) => self.open_submenu(index),
            _ if self.is_submenu => self.escalated = Some(action),
            // The root has nowhere to go back to
            MenuAction::Back => {}
            MenuAction::Reset => self.reset(),
            MenuAction::Close => {
                tracing::info!(target: "trellis::menu", title = %self.title(), "menu closed");
                self.disable();
            }
            MenuAction::Exit => {
                tracing::info!(target: "trellis::menu", title = %self.title(), "exit requested");
                self.request_exit();
            }
        }
    }

    fn open_submenu(&mut self, index: usize) {
        let Some(sub) = self.submenus.get_mut(index) else {
            tracing::debug!(target: "trellis::menu", index, "no such submenu");
            return;
        };
        sub.escalated = None;
        sub.enable();
        if sub.selected().is_none()
            && let Err(err) = sub.select_next()
        {
            tracing::debug!(target: "trellis::selection", index, error = %err, "submenu opened without focus");
        }
        sub.run_layout();
        tracing::info!(target: "trellis::menu", index, title = %sub.title(), "submenu opened");
        self.input.reset();
        self.active_submenu = Some(index);
    }

    fn leave_submenu(&mut self, index: usize, action: MenuAction) {
        if let Some(sub) = self.submenus.get_mut(index) {
            sub.close_interaction();
            tracing::info!(target: "trellis::menu", index, title = %sub.title(), "submenu closed");
        }
        self.active_submenu = None;
        if action != MenuAction::Back {
            self.perform_action(action);
        }
    }

    /// Close every open submenu, returning input to this menu.
    pub fn reset(&mut self) {
        if let Some(index) = self.active_submenu.take()
            && let Some(sub) = self.submenus.get_mut(index)
        {
            sub.close_interaction();
        }
    }

    /// Drop focus and pointer state, closing nested submenus first.
    fn close_interaction(&mut self) {
        self.reset();
        self.selection.clear(&mut self.tree);
        self.input.reset();
    }

    /// The focused dropdown and its overlay, while it is open.
    fn open_overlay(&self) -> Option<(WidgetId, DropOverlay)> {
        let id = self.selection.selected()?;
        let widget = self.tree.get(id)?;
        let drop = widget.as_drop_select().filter(|d| d.is_open())?;
        Some((id, drop.overlay(widget.base(), self.metrics.as_ref(), self.viewport())))
    }

    /// The deepest selectable widget under `pos`, respecting frame clips.
    fn widget_at(&self, pos: Point) -> Option<WidgetId> {
        self.selection_order().into_iter().rev().find(|id| {
            self.tree.get(*id).is_some_and(|w| w.rect().contains(pos))
                && self
                    .tree
                    .ancestors(*id)
                    .iter()
                    .all(|a| view_rect(&self.tree, *a).is_none_or(|view| view.contains(pos)))
        })
    }

    /// Frames that currently scroll, outermost first.
    fn scrollable_frames(&self) -> Vec<WidgetId> {
        self.tree
            .subtree(self.tree.root())
            .into_iter()
            .filter(|id| {
                self.tree.is_shown(*id)
                    && self
                        .tree
                        .get(*id)
                        .and_then(Widget::as_frame)
                        .is_some_and(|f| f.scroll().is_scrollable())
            })
            .collect()
    }

    /// The scrollbars of a frame at their current geometry.
    pub(crate) fn scrollbars(&self, frame: WidgetId) -> Vec<ScrollBar> {
        let Some(state) = self.tree.get(frame).and_then(Widget::as_frame) else {
            return Vec::new();
        };
        let Some(view) = view_rect(&self.tree, frame) else {
            return Vec::new();
        };
        let theme = self.theme();
        ScrollBar::for_frame(
            state.scroll(),
            view,
            theme.scrollbar_thickness,
            theme.scrollbar_slider_pad,
        )
    }

    fn scrollbar_at(&self, pos: Point) -> Option<(WidgetId, ScrollBar, ScrollBarPart)> {
        self.scrollable_frames().into_iter().rev().find_map(|frame| {
            self.scrollbars(frame)
                .into_iter()
                .find_map(|bar| bar.hit_test(pos).map(|part| (frame, bar, part)))
        })
    }

    fn scroll_frame_by(&mut self, frame: WidgetId, axis: Axis, amount: f32) -> bool {
        let Some(state) = self.tree.get_mut(frame).and_then(Widget::as_frame_mut) else {
            return false;
        };
        let (dx, dy) = match axis {
            Axis::Horizontal => (amount, 0.0),
            Axis::Vertical => (0.0, amount),
        };
        let moved = state.scroll.scroll_by(dx, dy);
        if moved {
            self.invalidator.request_arrange();
        }
        moved
    }

    fn mouse_down(&mut self, pos: Point) -> bool {
        if let Some((id, overlay)) = self.open_overlay() {
            let Some(widget) = self.tree.get_mut(id) else {
                return false;
            };
            let reaction = match (&mut widget.kind, overlay.row_at(pos)) {
                (WidgetKind::DropSelect(drop), Some(row)) => {
                    drop.highlight(row);
                    drop.commit(&widget.base)
                }
                // Clicks on the list outside any row are swallowed
                _ if overlay.rect.contains(pos) => Reaction::Consumed,
                _ => {
                    widget.cancel();
                    Reaction::Consumed
                }
            };
            return self.apply_reaction(id, reaction);
        }

        if let Some((frame, bar, part)) = self.scrollbar_at(pos) {
            match part {
                ScrollBarPart::Thumb => {
                    let pad = self.theme().scrollbar_slider_pad;
                    let thumb_start = along(bar.axis, bar.thumb_rect().origin) - pad;
                    self.input.drag = Some(ThumbDrag {
                        frame,
                        axis: bar.axis,
                        grab: along(bar.axis, pos) - thumb_start,
                    });
                }
                ScrollBarPart::TrackDecrease => {
                    self.scroll_frame_by(frame, bar.axis, -bar.page());
                }
                ScrollBarPart::TrackIncrease => {
                    self.scroll_frame_by(frame, bar.axis, bar.page());
                }
            }
            return true;
        }

        let Some(id) = self.widget_at(pos) else {
            return false;
        };
        if self.selected() != Some(id)
            && let Err(err) = self.select(id, false)
        {
            tracing::debug!(target: "trellis::input", error = %err, "click dropped");
            return false;
        }
        self.input.pressed = Some(id);
        true
    }

    fn mouse_up(&mut self, pos: Point) -> bool {
        if self.input.drag.take().is_some() {
            return true;
        }
        let Some(id) = self.input.pressed.take() else {
            return false;
        };
        if self.selected() != Some(id) {
            return false;
        }
        let Some(widget) = self.tree.get_mut(id) else {
            return false;
        };
        if !widget.rect().contains(pos) {
            return false;
        }
        let reaction = widget.click(pos);
        self.apply_reaction(id, reaction)
    }

    fn mouse_motion(&mut self, pos: Point) -> bool {
        if let Some(drag) = self.input.drag {
            let Some(bar) = self
                .scrollbars(drag.frame)
                .into_iter()
                .find(|b| b.axis == drag.axis)
            else {
                self.input.drag = None;
                return false;
            };
            let target = bar.offset_for(along(drag.axis, pos) - drag.grab);
            let Some(state) = self.tree.get_mut(drag.frame).and_then(Widget::as_frame_mut) else {
                return false;
            };
            let current = state.scroll.offset();
            let moved = match drag.axis {
                Axis::Horizontal => state.scroll.scroll_to(target, current.y),
                Axis::Vertical => state.scroll.scroll_to(current.x, target),
            };
            if moved {
                self.invalidator.request_arrange();
            }
            return moved;
        }

        if let Some((id, overlay)) = self.open_overlay() {
            let Some(row) = overlay.row_at(pos) else {
                return false;
            };
            return match self.tree.get_mut(id).map(|w| &mut w.kind) {
                Some(WidgetKind::DropSelect(drop)) => drop.highlight(row),
                _ => false,
            };
        }

        if self.mouse_motion_selection
            && let Some(id) = self.widget_at(pos)
            && self.selected() != Some(id)
        {
            return self.select(id, false).is_ok();
        }
        false
    }

    fn mouse_wheel(&mut self, pos: Point, delta: f32) -> bool {
        if let Some((id, _)) = self.open_overlay() {
            if let Some(WidgetKind::DropSelect(drop)) = self.tree.get_mut(id).map(|w| &mut w.kind) {
                drop.move_highlight(if delta > 0.0 { -1 } else { 1 });
            }
            return true;
        }

        let Some(frame) = self
            .scrollable_frames()
            .into_iter()
            .rev()
            .find(|id| view_rect(&self.tree, *id).is_some_and(|view| view.contains(pos)))
        else {
            return false;
        };
        let vertical = self
            .tree
            .get(frame)
            .and_then(Widget::as_frame)
            .is_some_and(|f| f.scroll().scrolls_vertically());
        let step = self.metrics.line_height(&self.theme().widget_font.font) * delta;
        let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
        // Positive deltas scroll toward the start
        self.scroll_frame_by(frame, axis, -step)
    }

    fn joy_axis(&mut self, axis: u8, value: f32) -> bool {
        let direction = self.controls.axis_direction(value);
        let previous = self.input.axes.insert(axis, direction).unwrap_or(0);
        if direction == previous {
            return false;
        }
        match self.controls.command_for_axis(axis, direction) {
            Some(command) => self.handle_command(command),
            None => false,
        }
    }
}
