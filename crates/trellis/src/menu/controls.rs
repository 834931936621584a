//! Key and joystick bindings.
//!
//! [`Controls`] maps raw keys, joystick hat motion, joystick axes and
//! joystick buttons to [`NavCommand`]s. Bindings are plain data and load
//! from TOML; fields left out keep their defaults:
//!
//! ```toml
//! next = ["down", "tab"]
//! confirm = ["enter", "space"]
//! joy_dead_zone = 0.3
//! ```

use serde::{Deserialize, Serialize};
use trellis_core::{ConfigurationError, Result};

use crate::widget::{Key, NavCommand};

/// Input bindings of a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub next: Vec<Key>,
    pub previous: Vec<Key>,
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    pub confirm: Vec<Key>,
    pub cancel: Vec<Key>,

    /// Joystick buttons that confirm.
    pub joy_confirm: Vec<u8>,
    /// Joystick buttons that cancel.
    pub joy_cancel: Vec<u8>,
    /// Axis values inside `[-dead_zone, dead_zone]` count as centered.
    pub joy_dead_zone: f32,
    pub joy_axis_x: u8,
    pub joy_axis_y: u8,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            next: vec![Key::Down, Key::Tab],
            previous: vec![Key::Up],
            left: vec![Key::Left],
            right: vec![Key::Right],
            confirm: vec![Key::Enter],
            cancel: vec![Key::Escape],
            joy_confirm: vec![0],
            joy_cancel: vec![1],
            joy_dead_zone: 0.5,
            joy_axis_x: 0,
            joy_axis_y: 1,
        }
    }
}

impl Controls {
    /// Parse bindings from TOML, validating the result.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let controls: Self = toml::from_str(source)
            .map_err(|e| ConfigurationError::invalid_option("controls", e.message().to_string()))?;
        controls.validate()?;
        Ok(controls)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.joy_dead_zone) {
            return Err(ConfigurationError::invalid_option(
                "joy_dead_zone",
                format!("must be in [0, 1), got {}", self.joy_dead_zone),
            )
            .into());
        }
        Ok(())
    }

    /// The command bound to `key`, if any.
    ///
    /// Cancel and confirm take precedence over navigation when a key is
    /// bound twice.
    pub fn command_for_key(&self, key: Key) -> Option<NavCommand> {
        [
            (&self.cancel, NavCommand::Cancel),
            (&self.confirm, NavCommand::Confirm),
            (&self.next, NavCommand::Next),
            (&self.previous, NavCommand::Previous),
            (&self.left, NavCommand::Left),
            (&self.right, NavCommand::Right),
        ]
        .into_iter()
        .find(|(keys, _)| keys.contains(&key))
        .map(|(_, command)| command)
    }

    pub fn command_for_button(&self, button: u8) -> Option<NavCommand> {
        if self.joy_cancel.contains(&button) {
            Some(NavCommand::Cancel)
        } else if self.joy_confirm.contains(&button) {
            Some(NavCommand::Confirm)
        } else {
            None
        }
    }

    /// Hat motion; `y = 1` points up.
    pub fn command_for_hat(&self, x: i8, y: i8) -> Option<NavCommand> {
        match (x, y) {
            (_, 1) => Some(NavCommand::Previous),
            (_, -1) => Some(NavCommand::Next),
            (-1, _) => Some(NavCommand::Left),
            (1, _) => Some(NavCommand::Right),
            _ => None,
        }
    }

    /// Direction of an axis value: `-1`, `0` or `1`.
    pub fn axis_direction(&self, value: f32) -> i8 {
        if value > self.joy_dead_zone {
            1
        } else if value < -self.joy_dead_zone {
            -1
        } else {
            0
        }
    }

    /// Command for an axis pushed in `direction`; positive y points down.
    pub fn command_for_axis(&self, axis: u8, direction: i8) -> Option<NavCommand> {
        match direction {
            0 => None,
            d if axis == self.joy_axis_y => Some(if d > 0 { NavCommand::Next } else { NavCommand::Previous }),
            d if axis == self.joy_axis_x => Some(if d > 0 { NavCommand::Right } else { NavCommand::Left }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let controls = Controls::default();
        assert_eq!(controls.command_for_key(Key::Tab), Some(NavCommand::Next));
        assert_eq!(controls.command_for_key(Key::Escape), Some(NavCommand::Cancel));
        assert_eq!(controls.command_for_key(Key::Home), None);
        assert_eq!(controls.command_for_button(0), Some(NavCommand::Confirm));
        assert_eq!(controls.command_for_hat(0, 1), Some(NavCommand::Previous));
        assert_eq!(controls.command_for_hat(1, 0), Some(NavCommand::Right));
    }

    #[test]
    fn test_axis_dead_zone() {
        let controls = Controls::default();
        assert_eq!(controls.axis_direction(0.3), 0);
        assert_eq!(controls.axis_direction(0.8), 1);
        assert_eq!(controls.command_for_axis(1, 1), Some(NavCommand::Next));
        assert_eq!(controls.command_for_axis(0, -1), Some(NavCommand::Left));
        assert_eq!(controls.command_for_axis(5, 1), None);
    }

    #[test]
    fn test_from_toml_partial() {
        let controls = Controls::from_toml_str(
            r#"
            confirm = ["enter", "space"]
            joy_dead_zone = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(controls.command_for_key(Key::Space), Some(NavCommand::Confirm));
        assert_eq!(controls.next, Controls::default().next);
        assert_eq!(controls.joy_dead_zone, 0.25);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(Controls::from_toml_str("joy_dead_zone = 1.5").is_err());
        assert!(Controls::from_toml_str("next = [\"warp\"]").is_err());
    }
}
