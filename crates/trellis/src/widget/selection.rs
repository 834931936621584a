//! Selection (focus) management for a menu's widget tree.
//!
//! [`SelectionManager`] tracks the single widget that receives input and
//! moves it through the *selection order*: a depth-first pre-order walk of
//! the tree (frames before their children, children in packing order)
//! that skips hidden subtrees as well as disabled and non-selectable
//! widgets. The order is recomputed from the tree on every use, so it can
//! never go stale after packing, hiding or removal.
//!
//! # States
//!
//! - `NoFocus` becomes `Focused` on the first navigation input or an
//!   explicit [`select`](SelectionManager::select)
//! - `Focused` moves with [`select_next`](SelectionManager::select_next) and
//!   [`select_previous`](SelectionManager::select_previous), wrapping at
//!   both ends
//! - `Focused` returns to `NoFocus` only through [`clear`](SelectionManager::clear)
//!   (removal, submenu closed) or when no candidate is left
//!
//! A widget losing focus has its interaction cancelled, which closes an
//! open dropdown.

use trellis_core::{Result, StateError, WidgetId};

use super::tree::WidgetAccess;

/// Focus state of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Nothing is focused.
    #[default]
    NoFocus,
    /// The widget receives non-navigation input.
    Focused(WidgetId),
}

/// Tracks and moves the focused widget.
#[derive(Debug, Default)]
pub struct SelectionManager {
    state: FocusState,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// The focused widget, if any.
    #[inline]
    pub fn selected(&self) -> Option<WidgetId> {
        match self.state {
            FocusState::NoFocus => None,
            FocusState::Focused(id) => Some(id),
        }
    }

    #[inline]
    pub fn is_selected(&self, id: WidgetId) -> bool {
        self.state == FocusState::Focused(id)
    }

    /// Build the selection order below `root`.
    pub fn selection_order<S: WidgetAccess>(storage: &S, root: WidgetId) -> Vec<WidgetId> {
        let mut order = Vec::new();
        collect(storage, root, &mut order);
        order
    }

    /// Focus `id`.
    ///
    /// Fails with [`StateError::UnknownWidget`] for stale ids and
    /// [`StateError::NotSelectable`] if the widget is hidden (directly or
    /// through an ancestor), disabled, or of a non-selectable kind.
    pub fn select<S: WidgetAccess>(
        &mut self,
        storage: &mut S,
        root: WidgetId,
        id: WidgetId,
    ) -> Result<()> {
        if storage.get_widget(id).is_none() {
            return Err(StateError::UnknownWidget(id).into());
        }
        if !Self::selection_order(storage, root).contains(&id) {
            return Err(StateError::NotSelectable(id).into());
        }
        self.set_focus(storage, id);
        Ok(())
    }

    /// Move focus forward, wrapping past the last widget.
    ///
    /// With nothing focused, the first widget in order is focused.
    pub fn select_next<S: WidgetAccess>(&mut self, storage: &mut S, root: WidgetId) -> Result<WidgetId> {
        self.step(storage, root, true)
    }

    /// Move focus backward, wrapping past the first widget.
    ///
    /// With nothing focused, the last widget in order is focused.
    pub fn select_previous<S: WidgetAccess>(
        &mut self,
        storage: &mut S,
        root: WidgetId,
    ) -> Result<WidgetId> {
        self.step(storage, root, false)
    }

    fn step<S: WidgetAccess>(&mut self, storage: &mut S, root: WidgetId, forward: bool) -> Result<WidgetId> {
        let order = Self::selection_order(storage, root);
        if order.is_empty() {
            return Err(StateError::NoSelectableWidget.into());
        }

        let last = order.len() - 1;
        let position = self
            .selected()
            .and_then(|current| order.iter().position(|id| *id == current));
        let target = match (position, forward) {
            (Some(pos), true) => order[if pos == last { 0 } else { pos + 1 }],
            (Some(pos), false) => order[if pos == 0 { last } else { pos - 1 }],
            (None, true) => order[0],
            (None, false) => order[last],
        };

        self.set_focus(storage, target);
        Ok(target)
    }

    /// Drop focus, cancelling the focused widget's interaction.
    pub fn clear<S: WidgetAccess>(&mut self, storage: &mut S) {
        if let FocusState::Focused(old) = std::mem::take(&mut self.state) {
            blur(storage, old);
            tracing::debug!(target: "trellis::selection", widget = ?old, "focus cleared");
        }
    }

    /// Forget a widget that no longer exists.
    pub(crate) fn forget(&mut self, removed: &[WidgetId]) {
        if let FocusState::Focused(id) = self.state {
            if removed.contains(&id) {
                self.state = FocusState::NoFocus;
                tracing::debug!(target: "trellis::selection", widget = ?id, "focused widget removed");
            }
        }
    }

    /// Re-home focus after the focused widget stopped being selectable.
    ///
    /// `previous_order` is the selection order from before the change. The
    /// first widget after the old focus in that order that is still
    /// selectable receives focus; with none left the state becomes
    /// `NoFocus`.
    pub fn refocus<S: WidgetAccess>(
        &mut self,
        storage: &mut S,
        root: WidgetId,
        previous_order: &[WidgetId],
    ) -> Option<WidgetId> {
        let current = self.selected()?;
        let order = Self::selection_order(storage, root);
        if order.contains(&current) {
            return Some(current);
        }

        let start = previous_order.iter().position(|id| *id == current).unwrap_or(0);
        let candidate = previous_order[start..]
            .iter()
            .chain(&previous_order[..start])
            .find(|id| order.contains(id))
            .or_else(|| order.first())
            .copied();

        match candidate {
            Some(next) => {
                self.set_focus(storage, next);
                Some(next)
            }
            None => {
                self.clear(storage);
                None
            }
        }
    }

    fn set_focus<S: WidgetAccess>(&mut self, storage: &mut S, id: WidgetId) {
        if self.state == FocusState::Focused(id) {
            return;
        }
        if let FocusState::Focused(old) = self.state {
            blur(storage, old);
        }
        if let Some(widget) = storage.get_widget_mut(id) {
            widget.base.selected = true;
        }
        tracing::debug!(target: "trellis::selection", widget = ?id, "focus changed");
        self.state = FocusState::Focused(id);
    }
}

fn blur<S: WidgetAccess>(storage: &mut S, id: WidgetId) {
    if let Some(widget) = storage.get_widget_mut(id) {
        widget.base.selected = false;
        widget.cancel();
    }
}

fn collect<S: WidgetAccess>(storage: &S, id: WidgetId, order: &mut Vec<WidgetId>) {
    let Some(widget) = storage.get_widget(id) else {
        return;
    };
    // A hidden frame hides its whole subtree
    if !widget.is_visible() {
        return;
    }
    if widget.can_focus() {
        order.push(id);
    }
    for child in storage.get_children(id) {
        collect(storage, child, order);
    }
}
