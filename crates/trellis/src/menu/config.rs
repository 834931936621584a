//! Per-widget configuration passed to [`WidgetManager`](super::WidgetManager).
//!
//! Every config embeds [`WidgetOptions`], the settings shared by all kinds
//! (spacing, font, name, selection effect, callbacks). Unset options fall
//! back to the menu's theme. Validation happens in the `add` call, which
//! fails with a configuration error and leaves the menu untouched.
//!
//! ```ignore
//! let id = menu.add().selector(
//!     "Difficulty",
//!     SelectorConfig::new()
//!         .with_items([("Easy", Value::Int(1)), ("Hard", Value::Int(2))])
//!         .with_default(1)
//!         .with_name("difficulty")
//!         .on_change(|value, _args, _cx| println!("{value:?}")),
//! )?;
//! ```

use std::fmt;
use std::sync::Arc;

use trellis_core::{Rgb, Value};
use trellis_render::Color;
use trellis_style::{Alignment, FontOverrides, Margin, Padding, SelectionEffect};

use super::Menu;
use crate::callback::{CallbackContext, CallbackFn};
use crate::widget::widgets::{InputType, LabelWrap, SelectorStyle};
use crate::widget::{MenuAction, Validator};

/// Settings shared by every widget kind.
#[derive(Default)]
pub struct WidgetOptions {
    pub(crate) alignment: Option<Alignment>,
    pub(crate) margin: Option<Margin>,
    pub(crate) padding: Option<Padding>,
    pub(crate) font: FontOverrides,
    pub(crate) name: Option<String>,
    pub(crate) selection_effect: Option<SelectionEffect>,
    pub(crate) on_change: Option<Box<CallbackFn>>,
    pub(crate) on_return: Option<Box<CallbackFn>>,
    pub(crate) args: Vec<Value>,
    pub(crate) context: Vec<(String, Value)>,
    pub(crate) pass_widget: bool,
}

impl fmt::Debug for WidgetOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetOptions")
            .field("alignment", &self.alignment)
            .field("margin", &self.margin)
            .field("padding", &self.padding)
            .field("font", &self.font)
            .field("name", &self.name)
            .field("on_change", &self.on_change.is_some())
            .field("on_return", &self.on_return.is_some())
            .field("args", &self.args)
            .field("context", &self.context)
            .field("pass_widget", &self.pass_widget)
            .finish_non_exhaustive()
    }
}

/// Builder methods for the shared [`WidgetOptions`] of a config type.
pub trait WidgetConfig: Sized {
    fn options_mut(&mut self) -> &mut WidgetOptions;

    /// Take the shared options, leaving defaults behind.
    fn take_options(&mut self) -> WidgetOptions {
        std::mem::take(self.options_mut())
    }

    /// Cross-axis alignment inside the parent frame.
    fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.options_mut().alignment = Some(alignment);
        self
    }

    fn with_margin(mut self, margin: impl Into<Margin>) -> Self {
        self.options_mut().margin = Some(margin.into());
        self
    }

    /// Interior inset. Negative values fail at add time.
    fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.options_mut().padding = Some(padding.into());
        self
    }

    fn with_font(mut self, overrides: FontOverrides) -> Self {
        self.options_mut().font = overrides;
        self
    }

    /// A name unique within the menu, for [`Menu::widget_by_name`].
    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.options_mut().name = Some(name.into());
        self
    }

    fn with_selection_effect(mut self, effect: SelectionEffect) -> Self {
        self.options_mut().selection_effect = Some(effect);
        self
    }

    /// Callback fired when the value settles.
    fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Value, &[Value], &mut CallbackContext<'_>) + 'static,
    {
        self.options_mut().on_change = Some(Box::new(callback));
        self
    }

    /// Callback fired on activation.
    fn on_return<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Value, &[Value], &mut CallbackContext<'_>) + 'static,
    {
        self.options_mut().on_return = Some(Box::new(callback));
        self
    }

    /// Positional arguments passed after the value.
    fn with_args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
        self.options_mut().args = args.into_iter().collect();
        self
    }

    /// Append a named context entry. Reserved or repeated keys fail at add
    /// time.
    fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options_mut().context.push((key.into(), value));
        self
    }

    /// Pass the invoking widget to callbacks under the `widget` key.
    fn with_widget_in_context(mut self) -> Self {
        self.options_mut().pass_widget = true;
        self
    }
}

macro_rules! widget_config {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl WidgetConfig for $ty {
                #[inline]
                fn options_mut(&mut self) -> &mut WidgetOptions {
                    &mut self.options
                }
            }
        )+
    };
}

widget_config!(
    ButtonConfig,
    ToggleConfig,
    SelectorConfig,
    DropSelectConfig,
    TextInputConfig,
    ColorInputConfig,
    ImageConfig,
    LabelConfig,
    UrlConfig,
    FrameConfig,
);

/// What a button does when pressed, besides its callback.
#[derive(Debug, Default)]
pub enum ButtonAction {
    /// Only the callback fires.
    #[default]
    None,
    /// Perform a menu action.
    Action(MenuAction),
    /// Open this menu as a submenu.
    Submenu(Box<Menu>),
}

#[derive(Debug, Default)]
pub struct ButtonConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) action: ButtonAction,
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: MenuAction) -> Self {
        self.action = ButtonAction::Action(action);
        self
    }

    /// Open `menu` when pressed; cancel inside it comes back.
    pub fn with_submenu(mut self, menu: Menu) -> Self {
        self.action = ButtonAction::Submenu(Box::new(menu));
        self
    }
}

#[derive(Debug)]
pub struct ToggleConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) default: bool,
    pub(crate) state_text: Option<[String; 2]>,
    pub(crate) width_factor: Option<f32>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            options: WidgetOptions::default(),
            default: false,
            state_text: None,
            width_factor: None,
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, state: bool) -> Self {
        self.default = state;
        self
    }

    /// Labels for the off and on states.
    pub fn with_state_text(mut self, off: impl Into<String>, on: impl Into<String>) -> Self {
        self.state_text = Some([off.into(), on.into()]);
        self
    }

    /// Switch width as a multiple of the font size.
    pub fn with_width_factor(mut self, factor: f32) -> Self {
        self.width_factor = Some(factor);
        self
    }
}

/// Options for a selector.
#[derive(Debug)]
pub struct SelectorConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) items: Vec<(String, Value)>,
    pub(crate) default: usize,
    pub(crate) style: SelectorStyle,
    pub(crate) wrap: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            options: WidgetOptions::default(),
            items: Vec::new(),
            default: 0,
            style: SelectorStyle::Classic,
            wrap: true,
        }
    }
}

impl SelectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<S: Into<String>>(mut self, items: impl IntoIterator<Item = (S, Value)>) -> Self {
        self.items = items.into_iter().map(|(label, value)| (label.into(), value)).collect();
        self
    }

    pub fn with_default(mut self, index: usize) -> Self {
        self.default = index;
        self
    }

    pub fn with_style(mut self, style: SelectorStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap past either end; `false` clamps.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Options for a dropdown selector.
#[derive(Debug, Default)]
pub struct DropSelectConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) items: Vec<(String, Value)>,
    pub(crate) default: Option<usize>,
    pub(crate) placeholder: Option<String>,
    pub(crate) infinite: bool,
    pub(crate) open_middle: bool,
    pub(crate) box_rows: Option<usize>,
    pub(crate) box_width: Option<f32>,
}

impl DropSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<S: Into<String>>(mut self, items: impl IntoIterator<Item = (S, Value)>) -> Self {
        self.items = items.into_iter().map(|(label, value)| (label.into(), value)).collect();
        self
    }

    pub fn with_default(mut self, index: usize) -> Self {
        self.default = Some(index);
        self
    }

    /// Text shown while nothing is chosen.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Wrap the highlight past either end of the list.
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Center the open list on the menu instead of anchoring it.
    pub fn with_open_middle(mut self, open_middle: bool) -> Self {
        self.open_middle = open_middle;
        self
    }

    /// Number of rows visible at once.
    pub fn with_box_rows(mut self, rows: usize) -> Self {
        self.box_rows = Some(rows);
        self
    }

    pub fn with_box_width(mut self, width: f32) -> Self {
        self.box_width = Some(width);
        self
    }
}

/// Options for a text entry.
#[derive(Debug, Default)]
pub struct TextInputConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) input_type: InputType,
    pub(crate) default: Option<Value>,
    pub(crate) maxchar: usize,
    pub(crate) valid_chars: Option<Vec<char>>,
    pub(crate) password: Option<char>,
    pub(crate) underline: Option<char>,
    pub(crate) validator: Option<Arc<dyn Validator>>,
}

impl TextInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Initial content. Must pass the entry's own policy.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Maximum length in characters; `0` is unlimited.
    pub fn with_maxchar(mut self, maxchar: usize) -> Self {
        self.maxchar = maxchar;
        self
    }

    pub fn with_valid_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.valid_chars = Some(chars.into_iter().collect());
        self
    }

    /// Render every character as `mask`.
    pub fn with_password(mut self, mask: char) -> Self {
        self.password = Some(mask);
        self
    }

    pub fn with_underline(mut self, underline: char) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }
}

/// Notation of a color entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorNotation {
    /// `r<sep>g<sep>b`.
    Rgb { separator: char },
    /// `#rrggbb`.
    Hex,
}

impl Default for ColorNotation {
    fn default() -> Self {
        ColorNotation::Rgb { separator: ',' }
    }
}

/// Options for a color entry.
#[derive(Debug, Default)]
pub struct ColorInputConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) notation: ColorNotation,
    pub(crate) default: Option<Rgb>,
}

impl ColorInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.notation = ColorNotation::Rgb { separator };
        self
    }

    pub fn with_hex(mut self) -> Self {
        self.notation = ColorNotation::Hex;
        self
    }

    pub fn with_default(mut self, color: Rgb) -> Self {
        self.default = Some(color);
        self
    }
}

#[derive(Debug)]
pub struct ImageConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) scale: (f32, f32),
    pub(crate) angle: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            options: WidgetOptions::default(),
            scale: (1.0, 1.0),
            angle: 0.0,
        }
    }
}

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, x: f32, y: f32) -> Self {
        self.scale = (x, y);
        self
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }
}

#[derive(Debug, Default)]
pub struct LabelConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) wrap: LabelWrap,
}

impl LabelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap(mut self, wrap: LabelWrap) -> Self {
        self.wrap = wrap;
        self
    }
}

#[derive(Debug, Default)]
pub struct UrlConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) title: Option<String>,
}

impl UrlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown instead of the link itself.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Options for a frame.
///
/// A fixed width or height makes the frame scroll on that axis when its
/// children need more room.
#[derive(Debug, Default)]
pub struct FrameConfig {
    pub(crate) options: WidgetOptions,
    pub(crate) width: Option<f32>,
    pub(crate) height: Option<f32>,
    pub(crate) background: Option<Color>,
}

impl FrameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}
