//! Widget creation.
//!
//! [`WidgetManager`] is returned by [`Menu::add`]. Every method validates
//! its configuration first, then places the new widget at the end of the
//! root frame and returns its id. A failed call leaves the menu unchanged.
//! Use [`Menu::pack`] to move widgets into other frames.

use trellis_core::{ConfigurationError, Result, WidgetId};
use trellis_style::{Padding, SelectionEffect};

use super::Menu;
use super::config::{
    ButtonAction, ButtonConfig, ColorInputConfig, ColorNotation, DropSelectConfig, FrameConfig,
    ImageConfig, LabelConfig, SelectorConfig, TextInputConfig, ToggleConfig, UrlConfig,
    WidgetConfig, WidgetOptions,
};
use crate::callback::{ContextMap, WidgetCallbacks};
use crate::widget::widgets::{
    Button, ColorFormat, ColorInput, DropSelect, Frame, Image, Label, LabelWrap, Selector,
    TextInput, ToggleSwitch, Url, VerticalMargin,
};
use crate::widget::{Axis, MenuAction, Widget, WidgetBase, WidgetBehavior, WidgetKind};

/// Adds widgets to a menu's root frame.
#[derive(Debug)]
pub struct WidgetManager<'a> {
    menu: &'a mut Menu,
}

/// Which theme defaults a new widget starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Defaults {
    /// Theme padding and selection effect.
    Themed,
    /// No padding and no selection effect (frames and spacers).
    Bare,
}

impl<'a> WidgetManager<'a> {
    pub(crate) fn new(menu: &'a mut Menu) -> Self {
        Self { menu }
    }

    /// A push button. Its action, if any, runs after the return callback.
    pub fn button(&mut self, title: impl Into<String>, mut config: ButtonConfig) -> Result<WidgetId> {
        let options = config.take_options();
        // The submenu is attached only once the button exists
        let (button, submenu) = match std::mem::take(&mut config.action) {
            ButtonAction::None => (Button::new(), None),
            ButtonAction::Action(action) => (Button::new().with_action(action), None),
            ButtonAction::Submenu(menu) => {
                let index = self.menu.submenus.len();
                (Button::new().with_action(MenuAction::OpenSubmenu(index)), Some(menu))
            }
        };
        let id = self.insert(title.into(), options, WidgetKind::Button(button), Defaults::Themed)?;
        if let Some(menu) = submenu {
            let index = self.menu.attach_submenu(*menu);
            tracing::debug!(target: "trellis::menu", widget = ?id, index, "submenu attached");
        }
        Ok(id)
    }

    /// An on/off switch.
    pub fn toggle_switch(&mut self, title: impl Into<String>, mut config: ToggleConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let mut toggle = ToggleSwitch::new(config.default);
        if let Some([off, on]) = config.state_text {
            toggle = toggle.with_state_text(off, on);
        }
        if let Some(factor) = config.width_factor {
            toggle = toggle.with_width_factor(ConfigurationError::check_positive("width_factor", factor)?);
        }
        self.insert(title.into(), options, WidgetKind::ToggleSwitch(toggle), Defaults::Themed)
    }

    /// A left/right option selector.
    ///
    /// Fails for an empty option list or a default index out of range.
    pub fn selector(&mut self, title: impl Into<String>, mut config: SelectorConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let selector = Selector::new(std::mem::take(&mut config.items), config.default)?
            .with_style(config.style)
            .with_wrap(config.wrap);
        self.insert(title.into(), options, WidgetKind::Selector(selector), Defaults::Themed)
    }

    /// A dropdown selector.
    pub fn dropselect(&mut self, title: impl Into<String>, mut config: DropSelectConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let mut drop = DropSelect::new(std::mem::take(&mut config.items), config.default)?
            .with_infinite(config.infinite)
            .with_open_middle(config.open_middle);
        if let Some(placeholder) = config.placeholder.take() {
            drop = drop.with_placeholder(placeholder);
        }
        if let Some(rows) = config.box_rows {
            drop = drop.with_box_rows(rows)?;
        }
        if let Some(width) = config.box_width {
            drop = drop.with_box_width(width)?;
        }
        self.insert(title.into(), options, WidgetKind::DropSelect(drop), Defaults::Themed)
    }

    /// A single-line text entry.
    ///
    /// Fails with an invalid-default error if the default value does not
    /// pass the entry's own policy.
    pub fn text_input(&mut self, title: impl Into<String>, mut config: TextInputConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let mut input = TextInput::new(config.input_type).with_maxchar(config.maxchar);
        if let Some(chars) = config.valid_chars.take() {
            input = input.with_valid_chars(chars);
        }
        if let Some(mask) = config.password {
            input = input.with_password(mask);
        }
        if let Some(underline) = config.underline {
            input = input.with_underline(underline);
        }
        if let Some(validator) = config.validator.take() {
            input = input.with_validator(validator);
        }
        if let Some(default) = &config.default {
            input
                .set_value(default)
                .map_err(|message| ConfigurationError::invalid_default("text_input", message))?;
        }
        self.insert(title.into(), options, WidgetKind::TextInput(input), Defaults::Themed)
    }

    /// A color entry in RGB or HEX notation.
    pub fn color_input(&mut self, title: impl Into<String>, mut config: ColorInputConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let format = match config.notation {
            ColorNotation::Rgb { separator } => ColorFormat::rgb(separator)?,
            ColorNotation::Hex => ColorFormat::hex(),
        };
        let mut input = ColorInput::new(format);
        if let Some(color) = config.default {
            input = input.with_default(color)?;
        }
        self.insert(title.into(), options, WidgetKind::ColorInput(input), Defaults::Themed)
    }

    /// An image from the menu's image catalog.
    ///
    /// Fails if the catalog does not know `path`.
    pub fn image(&mut self, path: impl Into<String>, mut config: ImageConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let path = path.into();
        if self.menu.images.image_size(&path).is_none() {
            return Err(ConfigurationError::ImageUnavailable(path).into());
        }
        let (sx, sy) = config.scale;
        let image = Image::new(path).with_scale(sx, sy)?.with_angle(config.angle);
        self.insert(String::new(), options, WidgetKind::Image(image), Defaults::Themed)
    }

    /// Static text.
    pub fn label(&mut self, text: impl Into<String>, mut config: LabelConfig) -> Result<WidgetId> {
        let options = config.take_options();
        if config.wrap == LabelWrap::Chars(0) {
            return Err(ConfigurationError::non_positive("label wrap", 0.0).into());
        }
        let label = Label::new().with_wrap(config.wrap);
        self.insert(text.into(), options, WidgetKind::Label(label), Defaults::Themed)
    }

    /// A link opened through the menu's url opener.
    pub fn url(&mut self, href: impl Into<String>, mut config: UrlConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let href = href.into();
        if href.trim().is_empty() {
            return Err(ConfigurationError::invalid_option("href", "must not be empty").into());
        }
        let title = config.title.take().unwrap_or_else(|| href.clone());
        self.insert(title, options, WidgetKind::Url(Url::new(href)), Defaults::Themed)
    }

    /// Empty vertical space.
    pub fn vertical_margin(&mut self, height: f32) -> Result<WidgetId> {
        let height = ConfigurationError::check_non_negative("vertical margin", height)?;
        self.insert(
            String::new(),
            WidgetOptions::default(),
            WidgetKind::VerticalMargin(VerticalMargin::new(height)),
            Defaults::Bare,
        )
    }

    /// A frame packing its children left to right.
    pub fn frame_h(&mut self, config: FrameConfig) -> Result<WidgetId> {
        self.frame(Axis::Horizontal, config)
    }

    /// A frame packing its children top to bottom.
    pub fn frame_v(&mut self, config: FrameConfig) -> Result<WidgetId> {
        self.frame(Axis::Vertical, config)
    }

    fn frame(&mut self, axis: Axis, mut config: FrameConfig) -> Result<WidgetId> {
        let options = config.take_options();
        let width = config
            .width
            .map(|w| ConfigurationError::check_positive("frame width", w))
            .transpose()?;
        let height = config
            .height
            .map(|h| ConfigurationError::check_positive("frame height", h))
            .transpose()?;
        let frame = Frame::new(axis)
            .with_size(width, height)
            .with_background(config.background);
        self.insert(String::new(), options, WidgetKind::Frame(frame), Defaults::Bare)
    }

    fn insert(
        &mut self,
        title: String,
        options: WidgetOptions,
        kind: WidgetKind,
        defaults: Defaults,
    ) -> Result<WidgetId> {
        let theme = self.menu.theme();
        let padding = match options.padding {
            Some(padding) => {
                padding.validate()?;
                padding
            }
            None if defaults == Defaults::Bare => Padding::ZERO,
            None => theme.widget_padding,
        };
        let selection_effect = match options.selection_effect {
            Some(effect) => {
                effect.validate()?;
                effect
            }
            None if defaults == Defaults::Bare => SelectionEffect::none(),
            None => theme.widget_selection_effect.clone(),
        };
        let mut font = theme.widget_font.clone();
        font.apply(&options.font)?;
        let margin = options.margin.unwrap_or(theme.widget_margin);
        margin.validate()?;
        let alignment = options.alignment.unwrap_or(theme.widget_alignment);

        let context = ContextMap::from_entries(options.context)?;
        if let Some(name) = &options.name
            && self.menu.names.contains_key(name)
        {
            return Err(ConfigurationError::DuplicateName(name.clone()).into());
        }

        let kind_name = kind.behavior().kind_name();
        let root = self.menu.tree.root();
        let name = options.name.clone();
        let id = self.menu.tree.insert_with(root, |id| {
            let mut base = WidgetBase::new(id, title, font, selection_effect);
            base.name = name;
            base.padding = padding;
            base.margin = margin;
            base.alignment = alignment;
            Widget::new(base, kind)
        })?;

        if options.on_change.is_some() || options.on_return.is_some() {
            self.menu.callbacks.insert(
                id,
                WidgetCallbacks {
                    on_change: options.on_change,
                    on_return: options.on_return,
                    args: options.args,
                    context,
                    pass_widget: options.pass_widget,
                },
            );
        }
        if let Some(name) = options.name {
            self.menu.names.insert(name, id);
        }
        self.menu.invalidate(id);

        tracing::debug!(target: "trellis::widget", widget = ?id, kind = kind_name, "widget added");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuBuilder;
    use trellis_core::{MenuError, Value};
    use trellis_render::{ImageCatalog, Size};
    use trellis_style::{Alignment, Margin};

    fn menu() -> Menu {
        MenuBuilder::new(400.0, 300.0).rng_seed(1).build().unwrap()
    }

    #[test]
    fn test_added_widgets_go_to_root_in_order() {
        let mut menu = menu();
        let a = menu.add().button("A", ButtonConfig::new()).unwrap();
        let b = menu.add().label("B", LabelConfig::new()).unwrap();
        assert_eq!(menu.widget(menu.root()).unwrap().children(), &[a, b]);
        assert_eq!(menu.widget(a).unwrap().base().parent(), Some(menu.root()));
    }

    #[test]
    fn test_theme_defaults_apply() {
        let mut menu = menu();
        let theme = menu.theme().clone();
        let button = menu.add().button("A", ButtonConfig::new()).unwrap();
        let frame = menu.add().frame_v(FrameConfig::new()).unwrap();
        let button = menu.widget(button).unwrap();
        assert_eq!(button.base().padding(), theme.widget_padding);
        assert_eq!(button.base().margin(), theme.widget_margin);
        assert_eq!(menu.widget(frame).unwrap().base().padding(), Padding::ZERO);
    }

    #[test]
    fn test_options_override_theme() {
        let mut menu = menu();
        let id = menu
            .add()
            .button("A", ButtonConfig::new().with_margin((5.0, 6.0)).with_padding(2.0))
            .unwrap();
        let base = menu.widget(id).unwrap().base();
        assert_eq!(base.margin(), Margin::new(5.0, 6.0));
        assert_eq!(base.padding(), Padding::uniform(2.0));
    }

    #[test]
    fn test_non_finite_margins_rejected() {
        let mut menu = menu();
        let before = menu.tree().len();
        assert!(matches!(
            menu.add().button("A", ButtonConfig::new().with_margin((f32::INFINITY, 0.0))),
            Err(MenuError::Configuration(ConfigurationError::NonFiniteValue { what: "margin x", .. }))
        ));
        assert_eq!(menu.tree().len(), before);

        let frame = menu.add().frame_v(FrameConfig::new().with_size(120.0, 80.0)).unwrap();
        let id = menu.add().button("B", ButtonConfig::new()).unwrap();
        assert!(matches!(
            menu.pack(frame, id, Alignment::Start, (0.0, f32::NAN)),
            Err(MenuError::Configuration(ConfigurationError::NonFiniteValue { what: "margin y", .. }))
        ));
        assert_eq!(menu.tree().parent(id), Some(menu.tree().root()));

        menu.pack(frame, id, Alignment::Start, (-2.0, 2.0)).unwrap();
        assert_eq!(menu.tree().parent(id), Some(frame));
        assert_eq!(menu.widget(id).unwrap().base().margin(), Margin::new(-2.0, 2.0));
    }

    #[test]
    fn test_invalid_configs_leave_menu_unchanged() {
        let mut menu = menu();
        let before = menu.tree().len();
        let empty = menu.add().selector("S", SelectorConfig::new());
        assert!(matches!(empty, Err(MenuError::Configuration(_))));
        let out_of_range = menu.add().selector(
            "S",
            SelectorConfig::new()
                .with_items([("a", Value::Int(1))])
                .with_default(3),
        );
        assert!(out_of_range.is_err());
        assert!(menu.add().frame_v(FrameConfig::new().with_height(0.0)).is_err());
        assert!(menu.add().vertical_margin(-1.0).is_err());
        assert!(menu.add().button("B", ButtonConfig::new().with_padding(-1.0)).is_err());
        assert!(
            menu.add()
                .button("B", ButtonConfig::new().with_context("rng", Value::None).on_return(|_, _, _| {}))
                .is_err()
        );
        assert!(
            menu.add()
                .text_input(
                    "N",
                    TextInputConfig::new()
                        .with_input_type(crate::widget::widgets::InputType::Integer)
                        .with_default("abc"),
                )
                .is_err()
        );
        assert_eq!(menu.tree().len(), before);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut menu = menu();
        let id = menu.add().button("A", ButtonConfig::new().with_name("a")).unwrap();
        let again = menu.add().button("B", ButtonConfig::new().with_name("a"));
        assert!(matches!(
            again,
            Err(MenuError::Configuration(ConfigurationError::DuplicateName(_)))
        ));
        assert_eq!(menu.widget_by_name("a").unwrap(), id);
    }

    #[test]
    fn test_image_requires_catalog_entry() {
        let mut menu = MenuBuilder::new(400.0, 300.0)
            .images(ImageCatalog::new().with("logo.png", Size::new(64.0, 32.0)))
            .build()
            .unwrap();
        assert!(menu.add().image("logo.png", ImageConfig::new()).is_ok());
        assert!(matches!(
            menu.add().image("missing.png", ImageConfig::new()),
            Err(MenuError::Configuration(ConfigurationError::ImageUnavailable(_)))
        ));
    }

    #[test]
    fn test_submenu_button() {
        let mut menu = menu();
        let sub = MenuBuilder::new(400.0, 300.0).title("Sub").build().unwrap();
        let id = menu.add().button("Open", ButtonConfig::new().with_submenu(sub)).unwrap();
        assert_eq!(menu.submenu(0).map(Menu::title), Some("Sub"));
        assert!(menu.submenu(0).unwrap().is_submenu);
        let WidgetKind::Button(button) = menu.widget(id).unwrap().kind() else {
            panic!("expected a button");
        };
        assert_eq!(button.action(), Some(MenuAction::OpenSubmenu(0)));
    }
}
