//! Menu construction.

use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use trellis_core::{ConfigurationError, Result};
use trellis_render::{FixedAdvanceMetrics, ImageCatalog, ImageSizeProvider, TextMetrics};
use trellis_style::Theme;

use super::{Controls, Menu};

/// What cancel does on a root menu.
///
/// Submenus always go back to their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnClose {
    /// Nothing happens.
    #[default]
    None,
    /// Disable the menu; [`Menu::mainloop`] returns.
    Close,
    /// Request application exit.
    Exit,
    /// Same as pressing a back button.
    Back,
    /// Return to the root, closing every submenu.
    Reset,
}

/// Opens links for url widgets.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> std::result::Result<(), String>;
}

impl<F> UrlOpener for F
where
    F: FnMut(&str) -> std::result::Result<(), String>,
{
    fn open(&mut self, url: &str) -> std::result::Result<(), String> {
        self(url)
    }
}

/// Opens links with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> std::result::Result<(), String> {
        open::that(url).map_err(|e| e.to_string())
    }
}

/// Builder for [`Menu`].
///
/// ```ignore
/// let menu = MenuBuilder::new(600.0, 400.0)
///     .title("Settings")
///     .theme(Theme::dark())
///     .on_close(OnClose::Exit)
///     .rng_seed(7)
///     .build()?;
/// ```
pub struct MenuBuilder {
    width: f32,
    height: f32,
    title: String,
    theme: Theme,
    on_close: OnClose,
    center_content: bool,
    mouse_enabled: bool,
    mouse_motion_selection: bool,
    joystick_enabled: bool,
    controls: Controls,
    metrics: Option<Box<dyn TextMetrics>>,
    images: Option<Box<dyn ImageSizeProvider>>,
    rng: Option<Box<dyn RngCore>>,
    url_opener: Option<Box<dyn UrlOpener>>,
}

impl MenuBuilder {
    /// Start a menu with a viewport of `width` x `height` logical units.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            theme: Theme::default(),
            on_close: OnClose::None,
            center_content: true,
            mouse_enabled: true,
            mouse_motion_selection: false,
            joystick_enabled: true,
            controls: Controls::default(),
            metrics: None,
            images: None,
            rng: None,
            url_opener: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The menu takes its own copy; later edits to `theme` do not apply.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn on_close(mut self, on_close: OnClose) -> Self {
        self.on_close = on_close;
        self
    }

    /// Center the widgets vertically while they fit.
    pub fn center_content(mut self, center: bool) -> Self {
        self.center_content = center;
        self
    }

    pub fn mouse_enabled(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Select widgets by hovering instead of clicking.
    pub fn mouse_motion_selection(mut self, enabled: bool) -> Self {
        self.mouse_motion_selection = enabled;
        self
    }

    pub fn joystick_enabled(mut self, enabled: bool) -> Self {
        self.joystick_enabled = enabled;
        self
    }

    pub fn controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Text measurement service. Defaults to [`FixedAdvanceMetrics`].
    pub fn metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Some(Box::new(metrics));
        self
    }

    /// Image size service. Defaults to an empty [`ImageCatalog`].
    pub fn images(mut self, images: impl ImageSizeProvider + 'static) -> Self {
        self.images = Some(Box::new(images));
        self
    }

    /// Random source handed to callbacks.
    pub fn rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Seed a deterministic random source.
    pub fn rng_seed(self, seed: u64) -> Self {
        self.rng(StdRng::seed_from_u64(seed))
    }

    /// Link opener for url widgets. Defaults to [`SystemOpener`].
    pub fn url_opener(mut self, opener: impl UrlOpener + 'static) -> Self {
        self.url_opener = Some(Box::new(opener));
        self
    }

    /// Validate the configuration and create the menu.
    ///
    /// Fails with a configuration error for a non-positive viewport, a
    /// title bar that leaves no room for widgets, or an invalid theme or
    /// control set.
    pub fn build(self) -> Result<Menu> {
        ConfigurationError::check_positive("menu width", self.width)?;
        ConfigurationError::check_positive("menu height", self.height)?;
        self.theme.validate().map_err(ConfigurationError::from)?;
        self.controls.validate()?;

        let body_height = self.height - self.theme.title_bar_height();
        ConfigurationError::check_positive("menu body height", body_height)?;

        let menu = Menu::new(MenuParts {
            width: self.width,
            height: self.height,
            title: self.title,
            theme: self.theme,
            on_close: self.on_close,
            center_content: self.center_content,
            mouse_enabled: self.mouse_enabled,
            mouse_motion_selection: self.mouse_motion_selection,
            joystick_enabled: self.joystick_enabled,
            controls: self.controls,
            metrics: self
                .metrics
                .unwrap_or_else(|| Box::new(FixedAdvanceMetrics::default())),
            images: self.images.unwrap_or_else(|| Box::new(ImageCatalog::new())),
            rng: self.rng.unwrap_or_else(|| Box::new(StdRng::from_entropy())),
            url_opener: self.url_opener.unwrap_or_else(|| Box::new(SystemOpener)),
        });
        tracing::debug!(
            target: "trellis::menu",
            title = %menu.title(),
            width = self.width,
            height = self.height,
            "menu built"
        );
        Ok(menu)
    }
}

impl fmt::Debug for MenuBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBuilder")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("title", &self.title)
            .field("on_close", &self.on_close)
            .field("center_content", &self.center_content)
            .finish_non_exhaustive()
    }
}

/// Validated builder output.
pub(crate) struct MenuParts {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub theme: Theme,
    pub on_close: OnClose,
    pub center_content: bool,
    pub mouse_enabled: bool,
    pub mouse_motion_selection: bool,
    pub joystick_enabled: bool,
    pub controls: Controls,
    pub metrics: Box<dyn TextMetrics>,
    pub images: Box<dyn ImageSizeProvider>,
    pub rng: Box<dyn RngCore>,
    pub url_opener: Box<dyn UrlOpener>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_viewport() {
        let err = MenuBuilder::new(0.0, 300.0).build().unwrap_err();
        assert!(err.is_configuration());
        assert!(MenuBuilder::new(300.0, -1.0).build().is_err());
    }

    #[test]
    fn test_title_bar_must_leave_room() {
        let theme = Theme::default();
        let bar = theme.title_bar_height();
        assert!(MenuBuilder::new(300.0, bar).build().is_err());
        assert!(MenuBuilder::new(300.0, bar + 1.0).build().is_ok());
    }

    #[test]
    fn test_rejects_invalid_theme() {
        let mut theme = Theme::default();
        theme.scrollbar_thickness = -2.0;
        assert!(MenuBuilder::new(300.0, 300.0).theme(theme).build().is_err());
    }

    #[test]
    fn test_closure_url_opener() {
        let mut opened = Vec::new();
        let mut opener = |url: &str| {
            opened.push(url.to_string());
            Ok(())
        };
        UrlOpener::open(&mut opener, "https://example.com").unwrap();
        assert_eq!(opened, vec!["https://example.com".to_string()]);
    }
}
