//! The widget arena owned by a menu.

use slotmap::SlotMap;
use trellis_core::{ConfigurationError, Result, StateError, WidgetId};

use super::Widget;

/// Access to widgets by id.
///
/// The selection manager and layout engine are written against this trait
/// rather than a concrete storage type.
pub trait WidgetAccess {
    /// Get a widget by id.
    fn get_widget(&self, id: WidgetId) -> Option<&Widget>;

    /// Get a widget mutably by id.
    fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget>;

    /// Children of a widget in packing order.
    fn get_children(&self, _id: WidgetId) -> Vec<WidgetId> {
        Vec::new()
    }
}

/// Generational arena of widgets with a single root frame.
///
/// Parent links are ids, never references; the frame's child list is the
/// owning side. Every operation keeps both sides in agreement.
#[derive(Debug)]
pub struct WidgetTree {
    widgets: SlotMap<WidgetId, Widget>,
    root: WidgetId,
}

impl WidgetTree {
    /// Create a tree whose root is built by `make_root`.
    pub(crate) fn new(make_root: impl FnOnce(WidgetId) -> Widget) -> Self {
        let mut widgets = SlotMap::with_key();
        let root = widgets.insert_with_key(make_root);
        Self { widgets, root }
    }

    /// The root frame. It always exists.
    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// The widget with this id, if it is still in the tree.
    #[inline]
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    /// Mutable access to a widget.
    #[inline]
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// Like [`get`](Self::get) but with a state error for stale ids.
    pub fn try_get(&self, id: WidgetId) -> Result<&Widget> {
        self.widgets
            .get(id)
            .ok_or_else(|| StateError::UnknownWidget(id).into())
    }

    pub fn try_get_mut(&mut self, id: WidgetId) -> Result<&mut Widget> {
        self.widgets
            .get_mut(id)
            .ok_or_else(|| StateError::UnknownWidget(id).into())
    }

    /// Whether `id` names a live widget.
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of widgets, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the tree holds no widgets at all, root included.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.widgets.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (WidgetId, &mut Widget)> {
        self.widgets.iter_mut()
    }

    /// Insert a widget at the end of `frame`'s children.
    pub(crate) fn insert_with(
        &mut self,
        frame: WidgetId,
        make: impl FnOnce(WidgetId) -> Widget,
    ) -> Result<WidgetId> {
        self.check_frame(frame)?;
        let id = self.widgets.insert_with_key(make);
        self.widgets[id].base.parent = Some(frame);
        if let Some(f) = self.widgets[frame].as_frame_mut() {
            f.children.push(id);
        }
        Ok(id)
    }

    fn check_frame(&self, frame: WidgetId) -> Result<()> {
        match self.widgets.get(frame) {
            None => Err(StateError::UnknownWidget(frame).into()),
            Some(w) if w.as_frame().is_none() => Err(ConfigurationError::NotAFrame(frame).into()),
            Some(_) => Ok(()),
        }
    }

    /// Containing frame, or `None` for the root and unknown ids.
    #[inline]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.widgets.get(id).and_then(|w| w.base.parent)
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            out.push(p);
            current = self.parent(p);
        }
        out
    }

    /// Whether `ancestor` is `id` or contains it.
    pub fn contains_in_subtree(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        ancestor == id || self.ancestors(id).contains(&ancestor)
    }

    /// `id` and all of its descendants in depth-first pre-order.
    pub fn subtree(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(widget) = self.widgets.get(current) else {
                continue;
            };
            out.push(current);
            stack.extend(widget.children().iter().rev().copied());
        }
        out
    }

    /// Whether the widget and every ancestor are visible.
    pub fn is_shown(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|w| w.base.visible)
            && self
                .ancestors(id)
                .iter()
                .all(|a| self.widgets.get(*a).is_some_and(|w| w.base.visible))
    }

    /// Move `widget` to the end of `frame`'s children.
    ///
    /// Returns the previous parent.
    pub(crate) fn reparent(&mut self, widget: WidgetId, frame: WidgetId) -> Result<WidgetId> {
        if widget == self.root {
            return Err(ConfigurationError::RootFrame.into());
        }
        if !self.widgets.contains_key(widget) {
            return Err(StateError::UnknownWidget(widget).into());
        }
        self.check_frame(frame)?;
        if self.contains_in_subtree(widget, frame) {
            return Err(ConfigurationError::CyclicPack { frame, widget }.into());
        }

        let old_parent = self.detach(widget).unwrap_or(self.root);
        self.widgets[widget].base.parent = Some(frame);
        if let Some(f) = self.widgets[frame].as_frame_mut() {
            f.children.push(widget);
        }
        Ok(old_parent)
    }

    /// Unlink `id` from its parent's child list.
    fn detach(&mut self, id: WidgetId) -> Option<WidgetId> {
        let parent = self.widgets.get_mut(id)?.base.parent.take()?;
        if let Some(f) = self.widgets.get_mut(parent).and_then(Widget::as_frame_mut) {
            f.children.retain(|c| *c != id);
        }
        Some(parent)
    }

    /// Remove `id` and its descendants. Returns the removed ids, `id` first.
    pub(crate) fn remove_subtree(&mut self, id: WidgetId) -> Result<Vec<WidgetId>> {
        if id == self.root {
            return Err(ConfigurationError::RootFrame.into());
        }
        if !self.widgets.contains_key(id) {
            return Err(StateError::UnknownWidget(id).into());
        }
        let removed = self.subtree(id);
        self.detach(id);
        for gone in &removed {
            self.widgets.remove(*gone);
        }
        Ok(removed)
    }
}

impl WidgetAccess for WidgetTree {
    fn get_widget(&self, id: WidgetId) -> Option<&Widget> {
        self.get(id)
    }

    fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.get_mut(id)
    }

    fn get_children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.get(id).map(|w| w.children().to_vec()).unwrap_or_default()
    }
}
