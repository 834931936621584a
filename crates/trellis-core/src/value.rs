//! Values carried by widgets and passed to callbacks.
//!
//! Every interactive widget reports its state as a [`Value`]. Selectors and
//! dropdowns report a [`Choice`], color entries an [`Rgb`] triple, text
//! entries either text or a parsed number depending on their input type.

use std::fmt;

/// An RGB triple as entered in a color widget.
///
/// Components are `i32` so that the "unset" sentinel `(-1, -1, -1)` can be
/// represented alongside valid `0..=255` colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [i32; 3]);

impl Rgb {
    /// The sentinel for an incomplete or invalid color entry.
    pub const UNSET: Self = Self([-1, -1, -1]);

    /// Create a color from components.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self([r, g, b])
    }

    /// Whether this is the unset sentinel.
    #[inline]
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Whether every component lies in `0..=255`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|c| (0..=255).contains(c))
    }

    /// The components as bytes, if valid.
    pub fn to_u8(self) -> Option<[u8; 3]> {
        if !self.is_valid() {
            return None;
        }
        let [r, g, b] = self.0;
        Some([r as u8, g as u8, b as u8])
    }

    /// Format as `#rrggbb`, if valid.
    pub fn to_hex(self) -> Option<String> {
        let [r, g, b] = self.to_u8()?;
        Some(format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self([r as i32, g as i32, b as i32])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "({r}, {g}, {b})")
    }
}

/// The selected option of a selector or dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Display label of the option.
    pub label: String,
    /// Payload attached to the option.
    pub value: Box<Value>,
    /// Position of the option in the option list.
    pub index: usize,
}

impl Choice {
    /// Create a choice.
    pub fn new(label: impl Into<String>, value: Value, index: usize) -> Self {
        Self {
            label: label.into(),
            value: Box::new(value),
            index,
        }
    }
}

/// A dynamically typed widget value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value (buttons, labels, a dropdown with nothing selected).
    #[default]
    None,
    /// Toggle state.
    Bool(bool),
    /// Integer input.
    Int(i64),
    /// Float input.
    Float(f64),
    /// Free text.
    Text(String),
    /// Color entry.
    Color(Rgb),
    /// Selector or dropdown selection.
    Choice(Choice),
    /// A list of values, used for user-supplied arguments.
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Color(_) => "color",
            Value::Choice(_) => "choice",
            Value::List(_) => "list",
        }
    }

    /// Whether this is [`Value::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The bool, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is an int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The number as a float, for ints and floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The text, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The color, if this is a color.
    pub fn as_color(&self) -> Option<Rgb> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// The choice, if this is a choice.
    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            Value::Choice(c) => Some(c),
            _ => None,
        }
    }

    /// The list, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Rgb> for Value {
    fn from(v: Rgb) -> Self {
        Value::Color(v)
    }
}

impl From<Choice> for Value {
    fn from(v: Choice) -> Self {
        Value::Choice(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Color(c) => write!(f, "{c}"),
            Value::Choice(c) => write!(f, "(({:?}, {}), {})", c.label, c.value, c.index),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_sentinel() {
        assert!(Rgb::UNSET.is_unset());
        assert!(!Rgb::UNSET.is_valid());
        assert_eq!(Rgb::UNSET.to_hex(), None);
        assert_eq!(Rgb::new(255, 0, 16).to_hex().as_deref(), Some("#ff0010"));
        assert!(!Rgb::new(256, 0, 0).is_valid());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(3).as_float(), Some(3.0));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::None.as_int(), None);

        let choice = Value::from(Choice::new("Blue", Rgb::new(0, 0, 255).into(), 2));
        let c = choice.as_choice().unwrap();
        assert_eq!(c.index, 2);
        assert_eq!(c.value.as_color(), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_value_display() {
        let choice = Value::from(Choice::new("C", Value::from(3), 2));
        assert_eq!(choice.to_string(), "((\"C\", 3), 2)");
        let list = Value::from(vec![Value::from(1), Value::from("a")]);
        assert_eq!(list.to_string(), "[1, \"a\"]");
    }
}
