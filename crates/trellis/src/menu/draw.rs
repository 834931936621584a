//! Drawing a menu onto a [`Surface`].
//!
//! Drawing is a pure read of the laid-out tree: background, title bar,
//! widgets in tree order with frames clipping their children, scrollbars,
//! and finally the overlay of an open dropdown so it covers everything
//! else.

use trellis_core::{PerfSpan, WidgetId};
use trellis_render::{DrawCommand, Point, Rect, RenderResult, Surface};
use trellis_style::TitleBarStyle;

use super::Menu;
use crate::widget::layout::view_rect;
use crate::widget::RenderContext;

impl Menu {
    /// Draw the current frame. An open submenu is drawn in place of this
    /// menu.
    pub fn draw(&self, surface: &mut dyn Surface) -> RenderResult<()> {
        let commands = self.current().render_commands();
        surface.begin_frame()?;
        for command in &commands {
            surface.submit(command)?;
        }
        surface.end_frame()
    }

    /// The draw commands for this menu, ignoring open submenus.
    pub fn render_commands(&self) -> Vec<DrawCommand> {
        let _span = PerfSpan::new("menu_draw");
        let theme = self.theme();
        let viewport = self.viewport();
        let cx = RenderContext {
            metrics: self.metrics.as_ref(),
            theme,
            viewport_width: viewport.width(),
            viewport,
        };

        let mut out = vec![DrawCommand::FillRect {
            rect: viewport,
            color: theme.background_color,
        }];
        self.draw_title_bar(&mut out);
        self.draw_widget(self.tree.root(), &cx, &mut out);

        if let Some(id) = self.selected()
            && let Some(widget) = self.tree.get(id)
            && let Some(drop) = widget.as_drop_select()
        {
            drop.render_overlay(widget.base(), &cx, &mut out);
        }
        tracing::trace!(target: "trellis::render", commands = out.len(), "menu drawn");
        out
    }

    fn draw_title_bar(&self, out: &mut Vec<DrawCommand>) {
        let theme = self.theme();
        let height = theme.title_bar_height();
        if height <= 0.0 {
            return;
        }
        let bar = Rect::new(0.0, 0.0, self.size().width, height);
        let text = DrawCommand::Text {
            text: self.title().to_string(),
            origin: Point::new(theme.title_padding.left, theme.title_padding.top),
            font: theme.title_font.clone(),
            color: theme.title_font_color,
        };
        match theme.title_bar_style {
            TitleBarStyle::None => {}
            TitleBarStyle::Simple => {
                out.push(DrawCommand::FillRect {
                    rect: bar,
                    color: theme.title_background_color,
                });
                out.push(text);
            }
            TitleBarStyle::Underline => {
                out.push(text);
                out.push(DrawCommand::Line {
                    from: Point::new(bar.left(), bar.bottom() - 1.0),
                    to: Point::new(bar.right(), bar.bottom() - 1.0),
                    color: theme.title_background_color,
                    width: 2.0,
                });
            }
        }
    }

    fn draw_widget(&self, id: WidgetId, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let Some(widget) = self.tree.get(id) else {
            return;
        };
        if !widget.is_visible() {
            return;
        }

        if let Some(color) = widget.base().font().background {
            out.push(DrawCommand::FillRect {
                rect: widget.rect(),
                color,
            });
        }
        widget.render(cx, out);

        if let Some(frame) = widget.as_frame() {
            let view = view_rect(&self.tree, id).unwrap_or(widget.rect());
            out.push(DrawCommand::PushClip(view));
            for child in frame.children() {
                self.draw_widget(*child, cx, out);
            }
            out.push(DrawCommand::PopClip);
            if frame.scroll().is_scrollable() {
                for bar in self.scrollbars(id) {
                    bar.draw(cx.theme, out);
                }
            }
        }

        if widget.is_selected() {
            out.extend(widget.selection_effect().draw(widget.rect()));
        }
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::Value;
    use trellis_render::{DrawList, Size};
    use trellis_style::Theme;

    use crate::menu::{ButtonConfig, DropSelectConfig, FrameConfig, LabelConfig, MenuBuilder};
    use crate::widget::{InputEvent, Key};

    fn menu() -> crate::menu::Menu {
        MenuBuilder::new(300.0, 200.0)
            .title("Main")
            .build()
            .unwrap()
    }

    #[test]
    fn test_draw_contains_title_and_widgets() {
        let mut menu = menu();
        menu.add().label("Hello", LabelConfig::new()).unwrap();
        menu.add().button("Play", ButtonConfig::new()).unwrap();
        menu.update(&[]);

        let mut surface = DrawList::new(Size::new(300.0, 200.0)).unwrap();
        menu.draw(&mut surface).unwrap();
        assert!(surface.contains_text("Main"));
        assert!(surface.contains_text("Hello"));
        assert!(surface.contains_text("Play"));
        assert_eq!(surface.frame_count(), 1);
    }

    #[test]
    fn test_no_title_bar() {
        let mut theme = Theme::default();
        theme.title_bar_style = trellis_style::TitleBarStyle::None;
        let menu = MenuBuilder::new(300.0, 200.0)
            .title("Hidden")
            .theme(theme)
            .build()
            .unwrap();
        let commands = menu.render_commands();
        assert!(!commands.iter().any(|c| c.text() == Some("Hidden")));
    }

    #[test]
    fn test_clips_are_balanced() {
        let mut menu = menu();
        let frame = menu
            .add()
            .frame_v(FrameConfig::new().with_size(120.0, 40.0))
            .unwrap();
        for i in 0..5 {
            let id = menu.add().button(format!("Item {i}"), ButtonConfig::new()).unwrap();
            menu.pack(frame, id, trellis_style::Alignment::Start, (0.0, 0.0)).unwrap();
        }
        menu.update(&[]);

        let commands = menu.render_commands();
        let pushes = commands
            .iter()
            .filter(|c| matches!(c, trellis_render::DrawCommand::PushClip(_)))
            .count();
        let pops = commands
            .iter()
            .filter(|c| matches!(c, trellis_render::DrawCommand::PopClip))
            .count();
        assert_eq!(pushes, pops);
        assert!(pushes >= 2);

        // The frame overflows, so its scrollbar is drawn in the slider color
        let slider = menu.theme().scrollbar_slider_color;
        assert!(commands.iter().any(|c| matches!(
            c,
            trellis_render::DrawCommand::FillRect { color, .. } if *color == slider
        )));

        let mut surface = DrawList::new(Size::new(300.0, 200.0)).unwrap();
        menu.draw(&mut surface).unwrap();
    }

    #[test]
    fn test_toggle_knob_is_square_at_state_end() {
        let mut menu = menu();
        menu.add()
            .toggle_switch("Sound", crate::menu::ToggleConfig::new().with_default(true))
            .unwrap();
        menu.update(&[]);

        let commands = menu.render_commands();
        let rects: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                trellis_render::DrawCommand::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        // The knob is drawn right after its track
        let (track, knob) = (rects[rects.len() - 2], rects[rects.len() - 1]);
        assert_eq!(knob.width(), track.height());
        assert_eq!(knob.height(), track.height());
        assert_eq!(knob.right(), track.right());
        assert!(commands.iter().any(|c| c.text() == Some("On")));
    }

    #[test]
    fn test_open_dropdown_drawn_last() {
        let mut menu = menu();
        let id = menu
            .add()
            .dropselect(
                "Size",
                DropSelectConfig::new().with_items(vec![("Small", Value::Int(1)), ("Large", Value::Int(2))]),
            )
            .unwrap();
        menu.select(id, false).unwrap();
        menu.update(&[InputEvent::KeyDown(Key::Enter)]);
        assert!(menu.widget(id).unwrap().as_drop_select().unwrap().is_open());

        let commands = menu.render_commands();
        let last_text = commands.iter().rev().find_map(|c| c.text()).unwrap();
        assert_eq!(last_text, "Large");
        let overlay = menu.theme().overlay_background_color;
        assert!(commands.iter().any(|c| matches!(
            c,
            trellis_render::DrawCommand::FillRect { color, .. } if *color == overlay
        )));
    }
}
