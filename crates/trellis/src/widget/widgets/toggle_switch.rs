//! Two-state toggle switch.
//!
//! Activation flips the state. Left and right set it to off and on
//! explicitly and only report a change when the state actually moved.

use trellis_core::Value;
use trellis_render::{Color, DrawCommand, Point, Rect, Size};

use super::{centered_y, draw_title};
use crate::widget::{
    MeasureContext, Reaction, RenderContext, WidgetBase, WidgetBehavior, WidgetInput,
};

const TRACK_ON: Color = Color::from_rgb8(40, 160, 90);
const TRACK_OFF: Color = Color::from_rgb8(178, 178, 178);
const SLIDER: Color = Color::WHITE;

/// A boolean switch with a label for each state.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleSwitch {
    state: bool,
    state_text: [String; 2],
    /// Track width as a multiple of the font size.
    width_factor: f32,
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        Self {
            state: false,
            state_text: ["Off".to_string(), "On".to_string()],
            width_factor: 3.0,
        }
    }
}

impl ToggleSwitch {
    pub fn new(state: bool) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Text shown inside the track for the off and on states.
    pub fn with_state_text(mut self, off: impl Into<String>, on: impl Into<String>) -> Self {
        self.state_text = [off.into(), on.into()];
        self
    }

    pub fn with_width_factor(mut self, factor: f32) -> Self {
        self.width_factor = factor;
        self
    }

    #[inline]
    pub fn state(&self) -> bool {
        self.state
    }

    #[inline]
    pub fn state_text(&self) -> &str {
        &self.state_text[usize::from(self.state)]
    }

    fn set(&mut self, state: bool) -> Reaction {
        if self.state == state {
            return Reaction::Consumed;
        }
        self.state = state;
        Reaction::Changed
    }

    fn track_size(&self, base: &WidgetBase, line_height: f32) -> Size {
        Size::new(base.font.font.size * self.width_factor, line_height)
    }
}

impl WidgetBehavior for ToggleSwitch {
    fn kind_name(&self) -> &'static str {
        "toggle_switch"
    }

    fn content_size(&self, base: &WidgetBase, cx: &MeasureContext<'_>) -> Size {
        let line = cx.metrics.line_height(&base.font.font);
        super::titled_size(base, cx.metrics, self.track_size(base, line))
    }

    fn render(&self, base: &WidgetBase, cx: &RenderContext<'_>, out: &mut Vec<DrawCommand>) {
        let x = draw_title(base, cx.metrics, out);
        let content = base.content_rect();
        let font = &base.font.font;
        let track = self.track_size(base, cx.metrics.line_height(font));
        let track = Rect::new(x, centered_y(content, track.height), track.width, track.height);

        out.push(DrawCommand::FillRect {
            rect: track,
            color: if self.state { TRACK_ON } else { TRACK_OFF },
        });

        let knob = track.height();
        let knob_x = if self.state { track.right() - knob } else { track.left() };
        out.push(DrawCommand::FillRect {
            rect: Rect::new(knob_x, track.top(), knob, knob),
            color: SLIDER,
        });

        // State text sits in the half not covered by the knob
        let text = self.state_text();
        let size = cx.metrics.measure(text, font);
        let free_left = if self.state { track.left() } else { track.left() + knob };
        let free = track.width() - knob;
        out.push(DrawCommand::Text {
            text: text.to_string(),
            origin: Point::new(free_left + (free - size.width) / 2.0, centered_y(track, size.height)),
            font: font.clone(),
            color: base.text_color(),
        });
    }

    fn value(&self) -> Value {
        Value::Bool(self.state)
    }

    fn handle_input(&mut self, _base: &WidgetBase, input: &WidgetInput) -> Reaction {
        match input {
            WidgetInput::Left => self.set(false),
            WidgetInput::Right => self.set(true),
            _ => Reaction::Ignored,
        }
    }

    fn activate(&mut self, _base: &WidgetBase) -> Reaction {
        self.set(!self.state)
    }

    fn set_value(&mut self, value: &Value) -> std::result::Result<(), String> {
        match value.as_bool() {
            Some(state) => {
                self.state = state;
                Ok(())
            }
            None => Err(format!("toggle_switch expects a bool, got {}", value.type_name())),
        }
    }
}
