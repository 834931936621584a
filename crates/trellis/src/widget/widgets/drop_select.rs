//! Dropdown selector.
//!
//! A [`DropSelect`] is a selector whose options are shown in a list that
//! opens on demand.
//!
//! # States
//!
//! - **Closed**: shows the committed option or a placeholder. Confirm
//!   opens the list, highlighting the committed option (or the first one)
//! - **Open**: captures every input. Up and down move the highlight,
//!   wrapping only when `infinite` is set. Confirm commits the highlight
//!   and closes; cancel closes and keeps the previous index
//!
//! While open, the list is an overlay: it is positioned outside the packed
//! flow and drawn after every other widget.
//!
//! # Overlay placement
//!
//! The list opens below the widget, or above when only that side has
//! room. When neither side fits it shows fewer rows on the larger side;
//! `open_middle` centers it in the menu instead. The result is always
//! clamped inside the menu's visible area, and the rows shown scroll to
//! keep the highlight visible.

use trellis_core::{Choice, ConfigurationError, Result, StateError, Value};
use trellis_render::{DrawCommand, Point, Rect, Size, TextMetrics};

use super::{centered_y, draw_title, text_command};
use crate::widget::{
    MeasureContext, Reaction, RenderContext, WidgetBase, WidgetBehavior, WidgetInput,
};

/// Geometry of an open dropdown list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropOverlay {
    /// Absolute rect of the list.
    pub rect: Rect,
    /// Height of one option row.
    pub row_height: f32,
    /// Index of the first option shown.
    pub first_row: usize,
    /// Number of rows shown.
    pub rows: usize,
}

impl DropOverlay {
    /// The option under `pos`, if any.
    pub fn row_at(&self, pos: Point) -> Option<usize> {
        if !self.rect.contains(pos) || self.row_height <= 0.0 {
            return None;
        }
        let row = ((pos.y - self.rect.top()) / self.row_height) as usize;
        (row < self.rows).then_some(self.first_row + row)
    }
}

/// A selector with a drop-down option list.
#[derive(Debug, Clone, PartialEq)]
pub struct DropSelect {
    items: Vec<(String, Value)>,
    index: Option<usize>,
    placeholder: String,

    open: bool,
    highlighted: Option<usize>,
    /// First row of the list the user scrolled to.
    scroll_top: usize,

    infinite: bool,
    open_middle: bool,
    box_rows: usize,
    box_width: Option<f32>,
}

impl DropSelect {
    /// Create a dropdown. `default` selects an option up front.
    ///
    /// An empty option list is allowed; such a dropdown opens with nothing
    /// highlighted and can never commit.
    pub fn new(items: Vec<(String, Value)>, default: Option<usize>) -> Result<Self> {
        if let Some(index) = default {
            if index >= items.len() {
                return Err(ConfigurationError::IndexOutOfRange {
                    index,
                    len: items.len(),
                }
                .into());
            }
        }
        Ok(Self {
            items,
            index: default,
            placeholder: "Select an option".to_string(),
            open: false,
            highlighted: None,
            scroll_top: 0,
            infinite: false,
            open_middle: false,
            box_rows: 5,
            box_width: None,
        })
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Let up and down wrap past the ends of the list.
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Center the open list in the menu instead of next to the widget.
    pub fn with_open_middle(mut self, open_middle: bool) -> Self {
        self.open_middle = open_middle;
        self
    }

    /// Maximum number of rows shown at once.
    pub fn with_box_rows(mut self, rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(ConfigurationError::non_positive("dropselect rows", 0.0).into());
        }
        self.box_rows = rows;
        Ok(self)
    }

    /// Fixed list width; the widest option by default.
    pub fn with_box_width(mut self, width: f32) -> Result<Self> {
        self.box_width = Some(ConfigurationError::check_positive("dropselect width", width)?);
        Ok(self)
    }

    #[inline]
    pub fn items(&self) -> &[(String, Value)] {
        &self.items
    }

    /// The committed option index.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The committed option, if any.
    pub fn current(&self) -> Option<Choice> {
        let index = self.index?;
        let (label, value) = self.items.get(index)?;
        Some(Choice::new(label.clone(), value.clone(), index))
    }

    fn open(&mut self) -> Reaction {
        self.open = true;
        self.highlighted = self.index.or(if self.items.is_empty() { None } else { Some(0) });
        self.scroll_top = 0;
        self.follow_highlight();
        Reaction::Consumed
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Commit the highlighted option.
    pub(crate) fn commit(&mut self, base: &WidgetBase) -> Reaction {
        match self.highlighted {
            Some(index) => {
                self.index = Some(index);
                self.close();
                Reaction::Changed
            }
            None => Reaction::Failed(StateError::NothingHighlighted(base.id)),
        }
    }

    /// Highlight an option directly, as a pointer does.
    pub(crate) fn highlight(&mut self, index: usize) -> bool {
        if !self.open || index >= self.items.len() || self.highlighted == Some(index) {
            return false;
        }
        self.highlighted = Some(index);
        self.follow_highlight();
        true
    }

    /// Move the highlight by `delta` rows. Wraps only when infinite.
    pub(crate) fn move_highlight(&mut self, delta: isize) -> bool {
        let len = self.items.len();
        if !self.open || len == 0 || delta == 0 {
            return false;
        }
        let target = match self.highlighted {
            None if delta > 0 => 0,
            None => len - 1,
            Some(current) => {
                let raw = current as isize + delta;
                if self.infinite {
                    raw.rem_euclid(len as isize) as usize
                } else {
                    raw.clamp(0, len as isize - 1) as usize
                }
            }
        };
        let moved = self.highlighted != Some(target);
        self.highlighted = Some(target);
        self.follow_highlight();
        moved
    }

    fn follow_highlight(&mut self) {
        if let Some(h) = self.highlighted {
            if h < self.scroll_top {
                self.scroll_top = h;
            } else if h >= self.scroll_top + self.box_rows {
                self.scroll_top = h + 1 - self.box_rows;
            }
        }
    }

    fn row_height(metrics: &dyn TextMetrics, base: &WidgetBase) -> f32 {
        let font = &base.font.font;
        metrics.line_height(font) + font.size * 0.4
    }

    /// Placement of the open list for a widget at `base.rect` inside
    /// `viewport`.
    pub fn overlay(&self, base: &WidgetBase, metrics: &dyn TextMetrics, viewport: Rect) -> DropOverlay {
        let font = &base.font.font;
        let anchor = base.rect;
        let row_height = Self::row_height(metrics, base);
        let len = self.items.len();

        let widest = self
            .items
            .iter()
            .map(|(label, _)| metrics.measure(label, font).width + font.size)
            .fold(0.0f32, f32::max);
        let width = self
            .box_width
            .unwrap_or_else(|| widest.max(anchor.width()))
            .min(viewport.width());

        let fitting = |space: f32| (space / row_height).floor().max(0.0) as usize;
        let mut rows = len.min(self.box_rows);

        let (x, y) = if self.open_middle {
            rows = rows.min(fitting(viewport.height()));
            let height = rows as f32 * row_height;
            let center = viewport.center();
            (center.x - width / 2.0, center.y - height / 2.0)
        } else {
            let below = viewport.bottom() - anchor.bottom();
            let above = anchor.top() - viewport.top();
            let height = rows as f32 * row_height;
            if height <= below {
                (anchor.left(), anchor.bottom())
            } else if height <= above {
                (anchor.left(), anchor.top() - height)
            } else if below >= above {
                rows = rows.min(fitting(below)).max(len.min(1));
                (anchor.left(), anchor.bottom())
            } else {
                rows = rows.min(fitting(above)).max(len.min(1));
                (anchor.left(), anchor.top() - rows as f32 * row_height)
            }
        };

        let rect = Rect::new(x, y, width, rows as f32 * row_height).clamp_within(&viewport);

        let max_first = len.saturating_sub(rows);
        let mut first_row = self.scroll_top.min(max_first);
        if let Some(h) = self.highlighted {
            if h < first_row {
                first_row = h;
            } else if rows > 0 && h >= first_row + rows {
                first_row = h + 1 - rows;
            }
        }

        DropOverlay {
            rect,
            row_height,
            first_row: first_row.min(max_first),
            rows,
        }
    }

    /// Draw the open list. Nothing is drawn while closed.
    pub(crate) fn render_overlay(
        &self,
        base: &WidgetBase,
        cx: &RenderContext<'_>,
        out: &mut Vec<DrawCommand>,
    ) {
        if !self.open {
            return;
        }
        let overlay = self.overlay(base, cx.metrics, cx.viewport);
        let theme = cx.theme;
        let font = &base.font.font;

        out.push(DrawCommand::PushClip(overlay.rect));
        out.push(DrawCommand::FillRect {
            rect: overlay.rect,
            color: theme.overlay_background_color,
        });

        let pad = font.size * 0.5;
        for (row, index) in (overlay.first_row..overlay.first_row + overlay.rows).enumerate() {
            let Some((label, _)) = self.items.get(index) else {
                break;
            };
            let row_rect = Rect::new(
                overlay.rect.left(),
                overlay.rect.top() + row as f32 * overlay.row_height,
                overlay.rect.width(),
                overlay.row_height,
            );
            let highlighted = self.highlighted == Some(index);
            if highlighted {
                out.push(DrawCommand::FillRect {
                    rect: row_rect,
                    color: theme.overlay_highlight_color,
                });
            }
            let size = cx.metrics.measure(label, font);
            out.push(DrawCommand::Text {
                text: label.clone(),
                origin: Point::new(row_rect.left() + pad, centered_y(row_rect, size.height)),
                font: font.clone(),
                color: base.font.color_for(highlighted, true),
            });
        }

        // Scroll indicator when not every option fits
        if overlay.rows < self.items.len() && overlay.rows > 0 {
            let track = overlay.rect.height();
            let thumb = track * overlay.rows as f32 / self.items.len() as f32;
            let top = track * overlay.first_row as f32 / self.items.len() as f32;
            let width = (theme.scrollbar_thickness / 4.0).max(2.0);
            out.push(DrawCommand::FillRect {
                rect: Rect::new(overlay.rect.right() - width, overlay.rect.top() + top, width, thumb),
                color: theme.scrollbar_slider_color,
            });
        }

        out.push(DrawCommand::StrokeRect {
            rect: overlay.rect,
            color: base.font.color,
            width: 1.0,
        });
        out.push(DrawCommand::PopClip);
    }

    fn shown_label(&self) -> &str {
        self.index
            .and_then(|i| self.items.get(i))
            .map_or(self.placeholder.as_str(), |(label, _)| label.as_str())
    }

    fn value_size(&self, metrics: &dyn TextMetrics, base: &WidgetBase) -> Size {
        let font = &base.font.font;
        let widest = self
            .items
            .iter()
            .map(|(label, _)| label.as_str())
            .chain(std::iter::once(self.placeholder.as_str()))
            .map(|label| metrics.measure(label, font))
            .fold(Size::ZERO, |acc, s| Size::new(acc.width.max(s.width), acc.height.max(s.height)));
        // Arrow and spacing on both sides
        widest.expand(font.size * 1.5, 0.0)
    }
}

impl WidgetBehavior for DropSelect {
    fn kind_name(&self) -> &'static str {
        "dropselect"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        super::titled_size(base, cx.metrics, self.value_size(cx.metrics, base))
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let x = draw_title(base, cx.metrics, out);
        let content = base.content_rect();
        let font = &base.font.font;
        let area = self.value_size(cx.metrics, base);
        let area = Rect::new(x, centered_y(content, area.height), area.width, area.height);

        out.push(DrawCommand::StrokeRect {
            rect: area,
            color: base.text_color(),
            width: 1.0,
        });
        let pad = font.size * 0.25;
        out.push(text_command(
            base,
            self.shown_label(),
            Point::new(area.left() + pad, area.top()),
        ));

        // Arrow points down while closed and up while open
        let size = font.size * 0.4;
        let arrow_x = area.right() - pad - size / 2.0;
        let cy = area.center().y;
        let half = size / 2.0;
        let points = if self.open {
            vec![
                Point::new(arrow_x - half, cy + half / 2.0),
                Point::new(arrow_x + half, cy + half / 2.0),
                Point::new(arrow_x, cy - half / 2.0),
            ]
        } else {
            vec![
                Point::new(arrow_x - half, cy - half / 2.0),
                Point::new(arrow_x + half, cy - half / 2.0),
                Point::new(arrow_x, cy + half / 2.0),
            ]
        };
        out.push(DrawCommand::Polygon {
            points,
            color: base.text_color(),
        });
    }

    fn value(&self) -> Value {
        self.current().map_or(Value::None, Value::Choice)
    }

    fn handle_input(&mut self, base: &WidgetBase, input: &WidgetInput) -> Reaction {
        if !self.open {
            return match input {
                WidgetInput::Confirm => self.open(),
                _ => Reaction::Ignored,
            };
        }
        match input {
            WidgetInput::Down => {
                self.move_highlight(1);
                Reaction::Consumed
            }
            WidgetInput::Up => {
                self.move_highlight(-1);
                Reaction::Consumed
            }
            WidgetInput::Confirm => self.commit(base),
            WidgetInput::Cancel => {
                self.close();
                Reaction::Consumed
            }
            // Everything else is swallowed while the list is open
            _ => Reaction::Consumed,
        }
    }

    fn activate(&mut self, base: &WidgetBase) -> Reaction {
        if self.open {
            self.commit(base)
        } else {
            self.open()
        }
    }

    fn captures_input(&self) -> bool {
        self.open
    }

    fn cancel(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }

    fn set_value(&mut self, value: &Value) -> std::result::Result<(), String> {
        let index = match value {
            Value::None => {
                self.index = None;
                return Ok(());
            }
            Value::Int(i) => usize::try_from(*i).ok(),
            Value::Choice(choice) => Some(choice.index),
            Value::Text(label) => self.items.iter().position(|(l, _)| l == label),
            other => return Err(format!("dropselect cannot select a {}", other.type_name())),
        };
        match index {
            Some(i) if i < self.items.len() => {
                self.index = Some(i);
                Ok(())
            }
            _ => Err(format!("no option matches {value:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::WidgetId;
    use trellis_render::FixedAdvanceMetrics;
    use trellis_style::{SelectionEffect, WidgetFont};

    fn items(labels: &[&str]) -> Vec<(String, Value)> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.to_string(), Value::Int(i as i64)))
            .collect()
    }

    fn base_at(rect: Rect) -> WidgetBase {
        let mut base = WidgetBase::new(
            WidgetId::from_raw(1),
            "Pick".into(),
            WidgetFont::default(),
            SelectionEffect::none(),
        );
        base.rect = rect;
        base
    }

    #[test]
    fn test_overlay_opens_below_when_room() {
        let mut drop = DropSelect::new(items(&["a", "b", "c"]), None).unwrap();
        let base = base_at(Rect::new(10.0, 10.0, 200.0, 30.0));
        drop.activate(&base);

        let viewport = Rect::new(0.0, 0.0, 400.0, 400.0);
        let overlay = drop.overlay(&base, &FixedAdvanceMetrics::default(), viewport);
        assert_eq!(overlay.rect.top(), 40.0);
        assert_eq!(overlay.rows, 3);
        assert_eq!(overlay.first_row, 0);
    }

    #[test]
    fn test_overlay_opens_above_near_bottom() {
        let mut drop = DropSelect::new(items(&["a", "b"]), None).unwrap();
        let base = base_at(Rect::new(10.0, 350.0, 200.0, 30.0));
        drop.activate(&base);

        let viewport = Rect::new(0.0, 0.0, 400.0, 400.0);
        let overlay = drop.overlay(&base, &FixedAdvanceMetrics::default(), viewport);
        assert!(overlay.rect.bottom() <= 350.0 + 0.01);
    }

    #[test]
    fn test_overlay_clamped_inside_viewport() {
        let labels: Vec<String> = (0..20).map(|i| format!("option number {i}")).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let mut drop = DropSelect::new(items(&refs), None)
            .unwrap()
            .with_open_middle(true)
            .with_infinite(true)
            .with_box_width(5000.0)
            .unwrap();
        let base = base_at(Rect::new(10.0, 10.0, 200.0, 30.0));
        drop.activate(&base);

        let viewport = Rect::new(0.0, 0.0, 300.0, 100.0);
        let overlay = drop.overlay(&base, &FixedAdvanceMetrics::default(), viewport);
        assert!(viewport.contains_rect(&overlay.rect));
        assert!(overlay.rows >= 1);
    }

    #[test]
    fn test_rows_follow_highlight() {
        let labels: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let mut drop = DropSelect::new(items(&refs), None).unwrap();
        let base = base_at(Rect::new(0.0, 0.0, 100.0, 30.0));
        drop.activate(&base);
        for _ in 0..7 {
            drop.handle_input(&base, &WidgetInput::Down);
        }
        assert_eq!(drop.highlighted(), Some(7));

        let viewport = Rect::new(0.0, 0.0, 400.0, 1000.0);
        let overlay = drop.overlay(&base, &FixedAdvanceMetrics::default(), viewport);
        assert_eq!(overlay.rows, 5);
        assert!(overlay.first_row <= 7 && 7 < overlay.first_row + overlay.rows);
        let row = overlay.row_at(Point::new(
            overlay.rect.left() + 1.0,
            overlay.rect.top() + overlay.row_height * 4.5,
        ));
        assert_eq!(row, Some(overlay.first_row + 4));
    }
}
