//! Ready-made demo menus, one per widget kind.
//!
//! Every example is a 400 x 300 menu with a themed title bar that closes on
//! cancel. [`Example::builder`] returns the configured builder so callers
//! can swap services (a seeded random source, a recording url opener)
//! before [`Example::populate`] adds the widgets.
//!
//! ```ignore
//! let example: Example = "selector".parse()?;
//! let mut menu = example.builder().rng_seed(3).build()?;
//! example.populate(&mut menu)?;
//! ```

use std::fmt;
use std::str::FromStr;

use trellis_core::{ConfigurationError, Result, Rgb, Value};
use trellis_render::{Color, ImageCatalog, Size};
use trellis_style::{Alignment, FontOverrides, Theme};

use crate::callback::CallbackContext;
use crate::menu::{
    ButtonConfig, ColorInputConfig, DropSelectConfig, FrameConfig, ImageConfig, LabelConfig, Menu,
    MenuBuilder, OnClose, SelectorConfig, TextInputConfig, ToggleConfig, UrlConfig, WidgetConfig,
};
use crate::widget::widgets::{InputType, LabelWrap, SelectorStyle};
use crate::widget::{MenuAction, Widget};

/// Image path the image example shows; registered by [`Example::builder`].
pub const EXAMPLE_IMAGE: &str = "images/trellis.png";

/// Window size shared by every example.
pub const WIDTH: f32 = 400.0;
pub const HEIGHT: f32 = 300.0;

/// The demo menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Example {
    Button,
    ColorInput,
    DropSelect,
    Frame,
    Image,
    Label,
    Selector,
    TextInput,
    ToggleSwitch,
    Url,
    VerticalMargin,
}

impl Example {
    pub const ALL: [Example; 11] = [
        Example::Button,
        Example::ColorInput,
        Example::DropSelect,
        Example::Frame,
        Example::Image,
        Example::Label,
        Example::Selector,
        Example::TextInput,
        Example::ToggleSwitch,
        Example::Url,
        Example::VerticalMargin,
    ];

    /// The name the example is looked up by.
    pub fn name(self) -> &'static str {
        match self {
            Example::Button => "button",
            Example::ColorInput => "colorinput",
            Example::DropSelect => "dropselect",
            Example::Frame => "frame",
            Example::Image => "image",
            Example::Label => "label",
            Example::Selector => "selector",
            Example::TextInput => "textinput",
            Example::ToggleSwitch => "toggleswitch",
            Example::Url => "url",
            Example::VerticalMargin => "verticalmargin",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Example::Button => "Button",
            Example::ColorInput => "Color Entry",
            Example::DropSelect => "Drop Select",
            Example::Frame => "Frames",
            Example::Image => "Image",
            Example::Label => "Label",
            Example::Selector => "Selector",
            Example::TextInput => "Text Entry",
            Example::ToggleSwitch => "Switches",
            Example::Url => "Url",
            Example::VerticalMargin => "Vertical spacer",
        }
    }

    fn theme(self) -> Theme {
        let (name, widget_size) = match self {
            Example::ColorInput => ("dark", 25.0),
            Example::Label => ("blue", 25.0),
            Example::Selector => ("orange", 25.0),
            Example::TextInput => ("green", 25.0),
            Example::ToggleSwitch => ("solarized", 25.0),
            Example::Frame | Example::Url => ("default", 18.0),
            _ => ("default", 25.0),
        };
        let mut theme = Theme::builtin(name).unwrap_or_default();
        theme.title_font.size = 35.0;
        theme.widget_font.font.size = widget_size;
        if self == Example::Frame {
            theme.widget_selection_effect.zero_margin();
        }
        theme
    }

    /// A builder configured for this example.
    pub fn builder(self) -> MenuBuilder {
        MenuBuilder::new(WIDTH, HEIGHT)
            .title(self.title())
            .theme(self.theme())
            .on_close(OnClose::Close)
            .images(ImageCatalog::new().with(EXAMPLE_IMAGE, Size::new(512.0, 512.0)))
    }

    /// Build the example with default services.
    pub fn build(self) -> Result<Menu> {
        let mut menu = self.builder().build()?;
        self.populate(&mut menu)?;
        Ok(menu)
    }

    /// Add this example's widgets to `menu`.
    pub fn populate(self, menu: &mut Menu) -> Result<()> {
        tracing::debug!(target: "trellis::menu", example = self.name(), "populating example");
        match self {
            Example::Button => button(menu),
            Example::ColorInput => color_input(menu),
            Example::DropSelect => drop_select(menu),
            Example::Frame => frame(menu),
            Example::Image => image(menu),
            Example::Label => label(menu),
            Example::Selector => selector(menu),
            Example::TextInput => text_input(menu),
            Example::ToggleSwitch => toggle_switch(menu),
            Example::Url => url(menu),
            Example::VerticalMargin => vertical_margin(menu),
        }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Example {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Example::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownExample(s.to_string()))
    }
}

fn button(menu: &mut Menu) -> Result<()> {
    let about = MenuBuilder::new(WIDTH, HEIGHT)
        .title("About")
        .theme(menu.theme().clone())
        .build()?;

    menu.add().button(
        "Exec",
        ButtonConfig::new()
            .with_alignment(Alignment::Start)
            .with_args([Value::from("foo")])
            .on_return(|_, args, _| {
                tracing::info!(target: "trellis::callback", from = ?args.first(), "hello world");
            }),
    )?;
    let open = menu.add().button("About", ButtonConfig::new().with_submenu(about))?;
    menu.add().button(
        "Exit",
        ButtonConfig::new()
            .with_action(MenuAction::Exit)
            .with_alignment(Alignment::End),
    )?;
    menu.select(open, true)
}

fn color_input(menu: &mut Menu) -> Result<()> {
    let small = || FontOverrides::new().size(18.0);
    menu.add().color_input(
        "RGB color 1: ",
        ColorInputConfig::new()
            .with_default(Rgb::new(255, 0, 255))
            .with_font(small()),
    )?;
    menu.add().color_input(
        "RGB color 2: ",
        ColorInputConfig::new().with_separator('-').with_font(small()),
    )?;
    menu.add().color_input(
        "HEX color 3: ",
        ColorInputConfig::new()
            .with_hex()
            .with_default(Rgb::new(0xff, 0xaa, 0x11))
            .with_font(small()),
    )?;
    Ok(())
}

fn drop_select(menu: &mut Menu) -> Result<()> {
    menu.add().dropselect(
        "Is trellis epic?",
        DropSelectConfig::new()
            .with_items([("Yes", Value::from(0)), ("Absolutely Yes", Value::from(1))])
            .with_font(FontOverrides::new().size(16.0)),
    )?;
    menu.add().dropselect(
        "What is the value of \u{3c0}?",
        DropSelectConfig::new()
            .with_items([
                ("3 (Engineer)", Value::from(0)),
                ("3.141592653589793238462643383279502884197169399375105820974944592", Value::from(1)),
                ("4", Value::from(2)),
                ("I don't know what is \u{3c0}", Value::from(3)),
            ])
            .with_box_width(173.0)
            .with_font(FontOverrides::new().size(16.0)),
    )?;
    let countries = [
        ("Argentina", "ar"),
        ("Australia", "au"),
        ("Bolivia", "bo"),
        ("Chile", "ch"),
        ("China", "cn"),
        ("Finland", "fi"),
        ("France", "fr"),
        ("Germany", "de"),
        ("Italy", "it"),
        ("Japan", "jp"),
        ("Mexico", "mx"),
        ("Peru", "pe"),
        ("United States", "us"),
    ];
    menu.add().dropselect(
        "Pick a country",
        DropSelectConfig::new()
            .with_items(countries.map(|(name, code)| (name, Value::from(code))))
            .with_default(3)
            .with_open_middle(true)
            .with_box_rows(5)
            .with_box_width(212.0)
            .with_infinite(true)
            .with_font(FontOverrides::new().size(20.0)),
    )?;
    Ok(())
}

fn frame(menu: &mut Menu) -> Result<()> {
    let outer = menu.add().frame_v(
        FrameConfig::new()
            .with_size(250.0, 150.0)
            .with_background(Color::from_rgb8(50, 50, 50)),
    )?;
    let title = menu.add().frame_h(
        FrameConfig::new()
            .with_size(250.0, 29.0)
            .with_background(Color::from_rgb8(180, 180, 180)),
    )?;
    let content = menu.add().frame_v(FrameConfig::new().with_size(250.0, 120.0))?;
    menu.pack(outer, title, Alignment::Start, (0.0, 0.0))?;
    menu.pack(outer, content, Alignment::Start, (0.0, 0.0))?;

    let settings = menu.add().label("Settings", LabelConfig::new())?;
    menu.pack(title, settings, Alignment::Start, (2.0, 2.0))?;
    let close = menu.add().button(
        "Close",
        ButtonConfig::new()
            .with_action(MenuAction::Exit)
            .with_padding((0.0, 5.0))
            .with_font(FontOverrides::new().background(Some(Color::from_rgb8(100, 100, 100)))),
    )?;
    menu.pack(title, close, Alignment::End, (-2.0, 2.0))?;

    let dim = FontOverrides::new().color(Color::from_rgb8(150, 150, 150));
    let pick = menu.add().label("Pick a number", LabelConfig::new().with_font(dim.clone()))?;
    menu.pack(content, pick, Alignment::Center, (0.0, 0.0))?;

    let numbers = menu.add().frame_h(FrameConfig::new().with_size(250.0, 41.0))?;
    menu.pack(content, numbers, Alignment::Start, (0.0, 0.0))?;
    for i in 0..9u8 {
        let number = menu.add().button(
            i.to_string(),
            ButtonConfig::new().with_padding((0.0, 5.0)).with_font(
                FontOverrides::new()
                    .color(Color::from_rgb8(5 * i, 11 * i, 13 * i))
                    .size(30.0),
            ),
        )?;
        menu.pack(numbers, number, Alignment::Center, (0.0, 0.0))?;
    }

    let spacer = menu.add().vertical_margin(15.0)?;
    menu.pack(content, spacer, Alignment::Start, (0.0, 0.0))?;
    let toggle = menu.add().toggle_switch(
        "Nice toggle",
        ToggleConfig::new().with_width_factor(100.0 / 18.0).with_font(dim),
    )?;
    menu.pack(content, toggle, Alignment::Center, (0.0, 0.0))?;
    Ok(())
}

fn image(menu: &mut Menu) -> Result<()> {
    for angle in [10.0, -10.0] {
        menu.add().image(
            EXAMPLE_IMAGE,
            ImageConfig::new().with_angle(angle).with_scale(0.15, 0.15),
        )?;
    }
    Ok(())
}

fn label(menu: &mut Menu) -> Result<()> {
    let help = "Press ESC to enable/disable Menu \
                Press ENTER to access a Sub-Menu or use an option \
                Press UP/DOWN to move through Menu \
                Press LEFT/RIGHT to move through Selectors.";
    menu.add().label(
        help,
        LabelConfig::new()
            .with_wrap(LabelWrap::MenuWidth)
            .with_font(FontOverrides::new().size(20.0)),
    )?;
    Ok(())
}

/// The selector options: three fixed colors and one picked at random.
pub fn color_items() -> Vec<(&'static str, Value)> {
    vec![
        ("Default", Value::from(Rgb::new(255, 255, 255))),
        ("Black", Value::from(Rgb::new(0, 0, 0))),
        ("Blue", Value::from(Rgb::new(0, 0, 255))),
        ("Random", Value::from(Rgb::UNSET)),
    ]
}

/// Recolor the invoking selector from its current choice.
///
/// The unset color stands for "random" and draws one from the menu's
/// random source.
pub fn recolor_selector(value: &Value, _args: &[Value], cx: &mut CallbackContext<'_>) {
    let Some(mut color) = value.as_choice().and_then(|c| c.value.as_color()) else {
        return;
    };
    if color.is_unset() {
        color = cx.random_rgb();
    }
    let Some([r, g, b]) = color.to_u8() else {
        return;
    };
    let color = Color::from_rgb8(r, g, b);
    tracing::info!(target: "trellis::callback", %color, "recoloring selector");
    if let Some(widget) = cx.widget() {
        recolor(widget, color);
    }
}

fn recolor(widget: &mut Widget, color: Color) {
    if let Err(err) = widget.update_font(&FontOverrides::new().selected_color(color)) {
        tracing::debug!(target: "trellis::callback", error = %err, "recolor failed");
    }
    widget.selection_effect_mut().set_color(color);
}

fn selector(menu: &mut Menu) -> Result<()> {
    menu.add().selector(
        "Current color:\t",
        SelectorConfig::new()
            .with_items(color_items())
            .on_return(recolor_selector)
            .on_change(recolor_selector)
            .with_widget_in_context(),
    )?;
    menu.add().selector(
        "New color:",
        SelectorConfig::new()
            .with_items(color_items())
            .with_style(SelectorStyle::Fancy),
    )?;
    Ok(())
}

fn text_input(menu: &mut Menu) -> Result<()> {
    menu.add()
        .text_input("First name: ", TextInputConfig::new().with_default("John"))?;
    menu.add().text_input(
        "Last name: ",
        TextInputConfig::new()
            .with_default("Doe")
            .with_maxchar(10)
            .with_underline('_'),
    )?;
    menu.add().text_input(
        "Password: ",
        TextInputConfig::new()
            .with_input_type(InputType::Integer)
            .with_password('*'),
    )?;
    Ok(())
}

fn toggle_switch(menu: &mut Menu) -> Result<()> {
    menu.add()
        .toggle_switch("First Switch", ToggleConfig::new().with_name("first_switch"))?;
    menu.add().toggle_switch(
        "Other Switch",
        ToggleConfig::new()
            .with_default(true)
            .with_name("second_switch")
            .with_state_text("Apagado", "Encendido"),
    )?;
    Ok(())
}

fn url(menu: &mut Menu) -> Result<()> {
    menu.add()
        .url("https://github.com/trellis-ui/trellis", UrlConfig::new())?;
    menu.add().url(
        "https://github.com/trellis-ui/trellis",
        UrlConfig::new().with_title("The best menu ever"),
    )?;
    menu.add().url(
        "https://docs.rs/trellis",
        UrlConfig::new().with_title("Trellis documentation"),
    )?;
    Ok(())
}

fn vertical_margin(menu: &mut Menu) -> Result<()> {
    menu.add().label("Text #1", LabelConfig::new())?;
    menu.add().vertical_margin(100.0)?;
    menu.add().label("Text #2", LabelConfig::new())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for example in Example::ALL {
            assert_eq!(example.name().parse::<Example>().unwrap(), example);
        }
        assert_eq!(" Button ".parse::<Example>().unwrap(), Example::Button);
    }

    #[test]
    fn test_unknown_name() {
        let err = "spinner".parse::<Example>().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownExample("spinner".into()));
    }

    #[test]
    fn test_color_items_end_with_random() {
        let items = color_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].1.as_color(), Some(Rgb::UNSET));
    }
}
