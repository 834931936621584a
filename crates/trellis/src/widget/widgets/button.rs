//! Button widget implementation.
//!
//! A [`Button`] shows its title and reacts to activation. It either asks
//! the menu to perform a [`MenuAction`] (go back, close, open a submenu)
//! or fires the activation callback.

use trellis_render::{DrawCommand, Point, Size};

use super::{centered_y, text_command};
use crate::widget::{MeasureContext, MenuAction, Reaction, RenderContext, WidgetBase, WidgetBehavior};

/// A clickable button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button {
    action: Option<MenuAction>,
}

impl Button {
    /// A button that only fires its activation callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// A button that performs `action` when activated.
    pub fn with_action(mut self, action: MenuAction) -> Self {
        self.action = Some(action);
        self
    }

    #[inline]
    pub fn action(&self) -> Option<MenuAction> {
        self.action
    }
}

impl WidgetBehavior for Button {
    fn kind_name(&self) -> &'static str {
        "button"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        cx.metrics.measure(&base.title, &base.font.font)
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let content = base.content_rect();
        let size = cx.metrics.measure(&base.title, &base.font.font);
        let origin = Point::new(content.left(), centered_y(content, size.height));
        out.push(text_command(base, base.title.clone(), origin));
    }

    fn activate(&mut self, _base: &WidgetBase) -> Reaction {
        match self.action {
            Some(action) => Reaction::Action(action),
            None => Reaction::Returned,
        }
    }
}
