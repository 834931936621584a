//! Callback registration and dispatch.
//!
//! Every widget may register two callbacks:
//!
//! - **on change**: fired when the widget's value settles (a toggle
//!   flipped, a dropdown committed, a character accepted)
//! - **on return**: fired on activation (button press, url opened,
//!   confirm in an entry)
//!
//! Both share one argument contract. The callback receives the widget's
//! value first, then the positional arguments given at registration, then
//! a [`CallbackContext`]:
//!
//! ```ignore
//! let config = SelectorConfig::new()
//!     .with_items([("Red", Value::Color(Rgb::new(255, 0, 0)))])
//!     .with_args([Value::Text("background".into())])
//!     .with_context("target", Value::Int(3))
//!     .on_change(|value, args, cx| {
//!         let target = cx.get("target");
//!         let color = cx.random_rgb();
//!         // ...
//!     });
//! ```
//!
//! # Context
//!
//! The context is an ordered map. Engine keys come first and can never be
//! overridden: [`WIDGET_KEY`] when the registration opted in with
//! `with_widget_in_context()`, then [`RNG_KEY`]. User entries follow in
//! registration order. Registering a reserved or duplicate key is a
//! configuration error.
//!
//! # Deferred requests
//!
//! While a callback runs, the menu is borrowed. Structural changes (hide,
//! remove, select...) are queued with [`CallbackContext::request`] and
//! applied in order right after the callback returns, before the next
//! event is processed.

use std::fmt;

use rand::{Rng, RngCore};
use trellis_core::{ConfigurationError, Result, Rgb, Value, WidgetId};

use crate::widget::{MenuAction, Widget};

/// Context key holding the invoking widget.
pub const WIDGET_KEY: &str = "widget";

/// Context key holding the menu's random source.
pub const RNG_KEY: &str = "rng";

/// Keys supplied by the engine.
pub const RESERVED_KEYS: [&str; 2] = [WIDGET_KEY, RNG_KEY];

/// Signature of a widget callback.
pub type CallbackFn = dyn FnMut(&Value, &[Value], &mut CallbackContext<'_>);

/// Ordered user entries of a callback context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMap {
    entries: Vec<(String, Value)>,
}

impl ContextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from entries, validating every key.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Value)>) -> Result<Self> {
        let mut map = Self::new();
        for (key, value) in entries {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Append an entry.
    ///
    /// Fails for keys reserved by the engine and for keys already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(ConfigurationError::ReservedContextKey(key).into());
        }
        if self.get(&key).is_some() {
            return Err(ConfigurationError::DuplicateContextKey(key).into());
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which of a widget's callbacks fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackKind {
    Change,
    Return,
}

/// Structural changes a callback asks the menu to make.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuRequest {
    Select(WidgetId),
    Hide(WidgetId),
    Show(WidgetId),
    Remove(WidgetId),
    SetEnabled(WidgetId, bool),
    /// Replace a widget's value. No callback fires.
    SetValue(WidgetId, Value),
    Action(MenuAction),
}

/// What a callback sees besides the value and positional arguments.
pub struct CallbackContext<'a> {
    widget_id: WidgetId,
    widget: Option<&'a mut Widget>,
    user: &'a ContextMap,
    rng: &'a mut dyn RngCore,
    requests: &'a mut Vec<MenuRequest>,
}

impl<'a> CallbackContext<'a> {
    pub(crate) fn new(
        widget_id: WidgetId,
        widget: Option<&'a mut Widget>,
        user: &'a ContextMap,
        rng: &'a mut dyn RngCore,
        requests: &'a mut Vec<MenuRequest>,
    ) -> Self {
        Self {
            widget_id,
            widget,
            user,
            rng,
            requests,
        }
    }

    /// Id of the widget that fired, always available.
    #[inline]
    pub fn widget_id(&self) -> WidgetId {
        self.widget_id
    }

    /// The invoking widget, present only when the registration opted in.
    pub fn widget(&mut self) -> Option<&mut Widget> {
        self.widget.as_deref_mut()
    }

    /// A user entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.user.get(key)
    }

    /// Every key in order: engine keys, then user keys.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.user.len() + 2);
        if self.widget.is_some() {
            keys.push(WIDGET_KEY);
        }
        keys.push(RNG_KEY);
        keys.extend(self.user.iter().map(|(k, _)| k));
        keys
    }

    /// The menu's random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// A random color with every component in `0..=255`.
    pub fn random_rgb(&mut self) -> Rgb {
        let mut component = || self.rng.gen_range(0..=255);
        Rgb::new(component(), component(), component())
    }

    /// Queue a structural change, applied after the callback returns.
    pub fn request(&mut self, request: MenuRequest) {
        self.requests.push(request);
    }
}

impl fmt::Debug for CallbackContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackContext")
            .field("widget_id", &self.widget_id)
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

/// The callbacks registered for one widget.
pub struct WidgetCallbacks {
    pub(crate) on_change: Option<Box<CallbackFn>>,
    pub(crate) on_return: Option<Box<CallbackFn>>,
    pub(crate) args: Vec<Value>,
    pub(crate) context: ContextMap,
    pub(crate) pass_widget: bool,
}

impl WidgetCallbacks {
    /// Whether anything would run for `kind`.
    pub fn has(&self, kind: CallbackKind) -> bool {
        match kind {
            CallbackKind::Change => self.on_change.is_some(),
            CallbackKind::Return => self.on_return.is_some(),
        }
    }

    /// Run the callback for `kind`. Returns whether one was registered.
    pub(crate) fn invoke(
        &mut self,
        kind: CallbackKind,
        value: &Value,
        widget_id: WidgetId,
        widget: &mut Widget,
        rng: &mut dyn RngCore,
        requests: &mut Vec<MenuRequest>,
    ) -> bool {
        let func = match kind {
            CallbackKind::Change => self.on_change.as_mut(),
            CallbackKind::Return => self.on_return.as_mut(),
        };
        let Some(func) = func else {
            return false;
        };
        let widget = self.pass_widget.then_some(widget);
        let mut cx = CallbackContext::new(widget_id, widget, &self.context, rng, requests);
        tracing::debug!(
            target: "trellis::callback",
            widget = ?widget_id,
            ?kind,
            args = self.args.len(),
            "invoking callback"
        );
        func(value, &self.args, &mut cx);
        true
    }
}

impl fmt::Debug for WidgetCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_return", &self.on_return.is_some())
            .field("args", &self.args)
            .field("context", &self.context)
            .field("pass_widget", &self.pass_widget)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reserved_keys_rejected() {
        let mut map = ContextMap::new();
        assert!(matches!(
            map.insert("widget", Value::None),
            Err(trellis_core::MenuError::Configuration(
                ConfigurationError::ReservedContextKey(_)
            ))
        ));
        assert!(map.insert("rng", Value::None).is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = ContextMap::from_entries([
            ("a".to_string(), Value::Int(1)),
            ("a".to_string(), Value::Int(2)),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_context_key_order() {
        let user = ContextMap::from_entries([
            ("zeta".to_string(), Value::Int(1)),
            ("alpha".to_string(), Value::Int(2)),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut requests = Vec::new();
        let cx = CallbackContext::new(WidgetId::from_raw(1), None, &user, &mut rng, &mut requests);
        assert_eq!(cx.keys(), vec!["rng", "zeta", "alpha"]);
        assert_eq!(cx.get("alpha"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_random_rgb_deterministic() {
        let user = ContextMap::new();
        let mut requests = Vec::new();
        let mut draw = || {
            let mut rng = StdRng::seed_from_u64(42);
            let mut cx =
                CallbackContext::new(WidgetId::from_raw(1), None, &user, &mut rng, &mut requests);
            cx.random_rgb()
        };
        let first = draw();
        assert_eq!(first, draw());
        assert!(first.is_valid());
    }
}
