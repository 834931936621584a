//! Input events and widget reactions.
//!
//! A backend translates its native events into [`InputEvent`]s and hands a
//! frame's worth of them to [`Menu::update`](crate::Menu::update). The menu
//! turns navigation events into focus changes and everything else into
//! [`WidgetInput`] for the focused widget, which answers with a
//! [`Reaction`].

use serde::{Deserialize, Serialize};
use trellis_core::StateError;
use trellis_render::Point;

/// Keys the menu understands.
///
/// Printable characters arrive separately as [`InputEvent::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Delete,
    Home,
    End,
    Tab,
    PageUp,
    PageDown,
    Space,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// One backend input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown(Key),
    /// A key was released.
    KeyUp(Key),
    /// Text was typed. May hold several characters (IME commits).
    Text(String),
    /// The pointer moved.
    MouseMotion(Point),
    /// A mouse button was pressed.
    MouseDown { pos: Point, button: MouseButton },
    /// A mouse button was released.
    MouseUp { pos: Point, button: MouseButton },
    /// The wheel turned; positive `delta` scrolls up.
    MouseWheel { pos: Point, delta: f32 },
    /// A joystick hat moved. `y == 1` is up.
    JoyHat { x: i8, y: i8 },
    /// A joystick axis moved, `value` in `[-1, 1]`.
    JoyAxis { axis: u8, value: f32 },
    /// A joystick button was pressed.
    JoyButton(u8),
    /// The window lost input focus.
    FocusLost,
    /// The window was closed.
    Quit,
}

/// Navigation commands produced from keys, hats and axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    /// Move focus forward in selection order.
    Next,
    /// Move focus backward in selection order.
    Previous,
    /// Decrease or move left inside the focused widget.
    Left,
    /// Increase or move right inside the focused widget.
    Right,
    /// Activate the focused widget.
    Confirm,
    /// Cancel the focused widget's interaction, or leave the menu.
    Cancel,
}

/// Input delivered to a single widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetInput {
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Cancel,
    Text(String),
    Backspace,
    Delete,
    Home,
    End,
}

/// Actions a widget can ask its menu to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Leave the current submenu.
    Back,
    /// Disable the menu; the main loop returns.
    Close,
    /// Request application exit.
    Exit,
    /// Return to the root menu, closing every submenu.
    Reset,
    /// Open the submenu stored at this index of the owning menu.
    #[serde(skip)]
    OpenSubmenu(usize),
}

/// How a widget responded to input or activation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// The widget does not handle this input.
    Ignored,
    /// Handled without a value change (cursor moved, list opened).
    Consumed,
    /// The input was invalid and dropped. Nothing changed.
    Rejected,
    /// The value changed; the value-change callback fires.
    Changed,
    /// The widget was activated; the activation callback fires.
    Returned,
    /// The menu should perform an action.
    Action(MenuAction),
    /// A link should be opened, then the activation callback fires.
    OpenUrl(String),
    /// The request is invalid in the widget's current state.
    Failed(StateError),
}

impl Reaction {
    /// Whether the widget took the input.
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Reaction::Ignored)
    }
}

impl WidgetInput {
    /// The widget input a navigation command becomes while a widget
    /// captures all input.
    pub fn from_command(command: NavCommand) -> Self {
        match command {
            NavCommand::Next => WidgetInput::Down,
            NavCommand::Previous => WidgetInput::Up,
            NavCommand::Left => WidgetInput::Left,
            NavCommand::Right => WidgetInput::Right,
            NavCommand::Confirm => WidgetInput::Confirm,
            NavCommand::Cancel => WidgetInput::Cancel,
        }
    }

    /// Editing keys that are never navigation.
    pub fn from_editing_key(key: Key) -> Option<Self> {
        match key {
            Key::Backspace => Some(WidgetInput::Backspace),
            Key::Delete => Some(WidgetInput::Delete),
            Key::Home => Some(WidgetInput::Home),
            Key::End => Some(WidgetInput::End),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_mapping_while_captured() {
        assert_eq!(WidgetInput::from_command(NavCommand::Next), WidgetInput::Down);
        assert_eq!(WidgetInput::from_command(NavCommand::Previous), WidgetInput::Up);
        assert_eq!(WidgetInput::from_command(NavCommand::Cancel), WidgetInput::Cancel);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(WidgetInput::from_editing_key(Key::Backspace), Some(WidgetInput::Backspace));
        assert_eq!(WidgetInput::from_editing_key(Key::Space), None);
        assert_eq!(WidgetInput::from_editing_key(Key::Up), None);
    }

    #[test]
    fn test_reaction_handled() {
        assert!(!Reaction::Ignored.is_handled());
        assert!(Reaction::Rejected.is_handled());
        assert!(Reaction::Changed.is_handled());
    }
}
