//! Widget base implementation.
//!
//! `WidgetBase` holds the state every widget kind shares: identity, tree
//! links, geometry, flags, spacing and styling. Kind-specific interaction
//! state lives in [`WidgetKind`](super::WidgetKind).

use trellis_core::WidgetId;
use trellis_render::{Rect, Size};
use trellis_style::{Alignment, Margin, Padding, SelectionEffect, WidgetFont};

/// Common state shared by all widgets.
///
/// Geometry fields are written only by the layout engine. The cached
/// measurement is cleared whenever something that affects the widget's
/// intrinsic size changes.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    pub(crate) id: WidgetId,
    pub(crate) name: Option<String>,
    pub(crate) title: String,
    pub(crate) parent: Option<WidgetId>,

    /// Absolute rect after layout.
    pub(crate) rect: Rect,

    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    /// Mirrors the menu's focus; only the focused widget has it set.
    pub(crate) selected: bool,

    pub(crate) margin: Margin,
    pub(crate) padding: Padding,
    pub(crate) alignment: Alignment,
    pub(crate) font: WidgetFont,
    pub(crate) selection_effect: SelectionEffect,

    /// Outer size from the last measure pass.
    pub(crate) measured: Option<Size>,
    /// Set by mutations made outside the menu (e.g. from a callback).
    pub(crate) needs_layout: bool,
}

impl WidgetBase {
    pub(crate) fn new(
        id: WidgetId,
        title: String,
        font: WidgetFont,
        selection_effect: SelectionEffect,
    ) -> Self {
        Self {
            id,
            name: None,
            title,
            parent: None,
            rect: Rect::ZERO,
            visible: true,
            enabled: true,
            selected: false,
            margin: Margin::ZERO,
            padding: Padding::ZERO,
            alignment: Alignment::Center,
            font,
            selection_effect,
            measured: None,
            needs_layout: true,
        }
    }

    /// Id assigned by the owning tree.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The user-assigned name, unique within a menu.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Title as given at creation or last rename.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The frame this widget is packed in; `None` only for the root.
    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Absolute rect, valid after the last [`Menu::update`](crate::Menu::update).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The rect inside the padding.
    pub fn content_rect(&self) -> Rect {
        let p = self.padding;
        Rect::new(
            self.rect.left() + p.left,
            self.rect.top() + p.top,
            (self.rect.width() - p.horizontal()).max(0.0),
            (self.rect.height() - p.vertical()).max(0.0),
        )
    }

    /// Visibility flag.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Enabled flag.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Focus flag, kept in sync by the menu.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Offset from the slot computed by layout.
    #[inline]
    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Space between the border and the content.
    #[inline]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Horizontal alignment within the parent frame.
    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Resolved font and colors.
    #[inline]
    pub fn font(&self) -> &WidgetFont {
        &self.font
    }

    /// Text color for the current selected and enabled state.
    #[inline]
    pub fn text_color(&self) -> trellis_render::Color {
        self.font.color_for(self.selected, self.enabled)
    }

    /// Drop the cached measurement.
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.measured = None;
        self.needs_layout = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> WidgetBase {
        WidgetBase::new(
            WidgetId::from_raw(1),
            "Play".into(),
            WidgetFont::default(),
            SelectionEffect::default(),
        )
    }

    #[test]
    fn test_content_rect_subtracts_padding() {
        let mut base = base();
        base.rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        base.padding = Padding::new(4.0, 8.0, 6.0, 2.0);
        assert_eq!(base.content_rect(), Rect::new(12.0, 24.0, 90.0, 30.0));

        base.rect = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(base.content_rect().width(), 0.0);
    }

    #[test]
    fn test_invalidate_clears_measure() {
        let mut base = base();
        base.measured = Some(Size::new(1.0, 1.0));
        base.needs_layout = false;
        base.invalidate();
        assert!(base.measured.is_none());
        assert!(base.needs_layout);
    }

    #[test]
    fn test_text_color_follows_state() {
        let mut base = base();
        let font = base.font.clone();
        assert_eq!(base.text_color(), font.color);
        base.selected = true;
        assert_eq!(base.text_color(), font.selected_color);
        base.enabled = false;
        assert_eq!(base.text_color(), font.readonly_color);
    }
}
