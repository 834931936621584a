//! Input validation for text entry widgets.
//!
//! Every edit to a text or color entry is checked against a [`Validator`]
//! *before* it is applied. A candidate buffer is in one of three states:
//!
//! - [`ValidationState::Invalid`]: the edit is rejected and the buffer is
//!   left untouched
//! - [`ValidationState::Intermediate`]: incomplete, but more typing could
//!   make it valid (`"-"`, `"12,"`, `"#ab"`)
//! - [`ValidationState::Acceptable`]: a complete value
//!
//! # Built-in Validators
//!
//! - [`IntValidator`] and [`FloatValidator`] for numeric text entries
//! - [`RegexValidator`] for arbitrary patterns
//! - [`RgbValidator`] and [`HexColorValidator`] for color entries

use std::fmt;
use std::sync::Arc;

use trellis_core::Rgb;

/// The result of validating a candidate buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The input cannot become valid by appending more text.
    Invalid,
    /// The input is incomplete but could become valid.
    Intermediate,
    /// The input is a complete value.
    #[default]
    Acceptable,
}

impl ValidationState {
    /// Whether an edit producing this state should be applied.
    #[inline]
    pub fn is_allowed(self) -> bool {
        self != ValidationState::Invalid
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Invalid => write!(f, "Invalid"),
            ValidationState::Intermediate => write!(f, "Intermediate"),
            ValidationState::Acceptable => write!(f, "Acceptable"),
        }
    }
}

/// Checks candidate buffers of a text entry.
pub trait Validator: fmt::Debug + Send + Sync {
    /// Validate the full candidate buffer.
    fn validate(&self, input: &str) -> ValidationState;
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }
}

/// Accepts optionally signed whole numbers.
///
/// ```ignore
/// let validator = IntValidator::new();
/// assert_eq!(validator.validate("42"), ValidationState::Acceptable);
/// assert_eq!(validator.validate("-"), ValidationState::Intermediate);
/// assert_eq!(validator.validate("4a"), ValidationState::Invalid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntValidator;

impl IntValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for IntValidator {
    fn validate(&self, input: &str) -> ValidationState {
        let digits = input.strip_prefix('-').unwrap_or(input);
        if digits.is_empty() {
            return ValidationState::Intermediate;
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return ValidationState::Invalid;
        }
        // Overflow is the only remaining parse failure
        match input.parse::<i64>() {
            Ok(_) => ValidationState::Acceptable,
            Err(_) => ValidationState::Invalid,
        }
    }
}

/// Accepts optionally signed decimal numbers with at most one point.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatValidator;

impl FloatValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for FloatValidator {
    fn validate(&self, input: &str) -> ValidationState {
        let body = input.strip_prefix('-').unwrap_or(input);
        if body.is_empty() || body == "." {
            return ValidationState::Intermediate;
        }

        let mut points = 0;
        for c in body.chars() {
            match c {
                '.' => points += 1,
                c if c.is_ascii_digit() => {}
                _ => return ValidationState::Invalid,
            }
        }
        if points > 1 {
            return ValidationState::Invalid;
        }

        if body.ends_with('.') {
            ValidationState::Intermediate
        } else {
            ValidationState::Acceptable
        }
    }
}

/// Validates input against a regular expression.
///
/// The full pattern decides acceptability; the optional intermediate
/// pattern admits partial input while it is being typed.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: regex::Regex,
    intermediate_pattern: Option<regex::Regex>,
}

impl RegexValidator {
    /// Create a validator with a single pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
            intermediate_pattern: None,
        })
    }

    /// Create a validator with a separate pattern for partial input.
    pub fn with_intermediate(
        pattern: &str,
        intermediate_pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
            intermediate_pattern: Some(regex::Regex::new(intermediate_pattern)?),
        })
    }

    /// The acceptance pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validator for RegexValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if input.is_empty() {
            return ValidationState::Intermediate;
        }
        if self.pattern.is_match(input) {
            return ValidationState::Acceptable;
        }
        match &self.intermediate_pattern {
            Some(partial) if partial.is_match(input) => ValidationState::Intermediate,
            _ => ValidationState::Invalid,
        }
    }
}

/// Accepts `r<sep>g<sep>b` with components in `0..=255`.
///
/// Components may not carry leading zeros, and at most two separators
/// are allowed.
#[derive(Debug, Clone)]
pub struct RgbValidator {
    separator: char,
    shape: RegexValidator,
}

impl RgbValidator {
    /// Create a validator for the given separator.
    ///
    /// Fails for separators that could be confused with a component.
    pub fn new(separator: char) -> Result<Self, String> {
        if separator.is_ascii_digit() || separator.is_whitespace() || separator == '#' {
            return Err(format!("'{separator}' cannot separate color components"));
        }
        let sep = regex::escape(&separator.to_string());
        let complete = format!(r"^\d{{1,3}}{sep}\d{{1,3}}{sep}\d{{1,3}}$");
        let partial = format!(r"^\d{{1,3}}({sep}(\d{{1,3}}({sep}(\d{{1,3}})?)?)?)?$");
        let shape = RegexValidator::with_intermediate(&complete, &partial)
            .map_err(|e| e.to_string())?;
        Ok(Self { separator, shape })
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse a complete buffer. `None` while incomplete or invalid.
    pub fn parse(&self, input: &str) -> Option<Rgb> {
        if self.validate(input) != ValidationState::Acceptable {
            return None;
        }
        let mut parts = input.split(self.separator).map(|p| p.parse::<i32>().ok());
        let r = parts.next()??;
        let g = parts.next()??;
        let b = parts.next()??;
        Some(Rgb::new(r, g, b))
    }

    /// Format a color for this separator.
    pub fn format(&self, color: Rgb) -> String {
        let [r, g, b] = color.0;
        let sep = self.separator;
        format!("{r}{sep}{g}{sep}{b}")
    }
}

impl Validator for RgbValidator {
    fn validate(&self, input: &str) -> ValidationState {
        let state = self.shape.validate(input);
        if state == ValidationState::Invalid {
            return state;
        }
        let components_ok = input
            .split(self.separator)
            .filter(|part| !part.is_empty())
            .all(|part| {
                let no_leading_zero = part == "0" || !part.starts_with('0');
                no_leading_zero && part.parse::<u16>().is_ok_and(|v| v <= 255)
            });
        if components_ok {
            state
        } else {
            ValidationState::Invalid
        }
    }
}

/// Accepts `#rrggbb` hex colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexColorValidator;

impl HexColorValidator {
    pub fn new() -> Self {
        Self
    }

    /// Parse a complete buffer. `None` while incomplete or invalid.
    pub fn parse(&self, input: &str) -> Option<Rgb> {
        if self.validate(input) != ValidationState::Acceptable {
            return None;
        }
        let hex = &input[1..];
        let channel = |i: usize| i32::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Validator for HexColorValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if input.is_empty() {
            return ValidationState::Intermediate;
        }
        let Some(hex) = input.strip_prefix('#') else {
            return ValidationState::Invalid;
        };
        if hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return ValidationState::Invalid;
        }
        if hex.len() == 6 {
            ValidationState::Acceptable
        } else {
            ValidationState::Intermediate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_validator() {
        let v = IntValidator::new();
        assert_eq!(v.validate(""), ValidationState::Intermediate);
        assert_eq!(v.validate("-"), ValidationState::Intermediate);
        assert_eq!(v.validate("-12"), ValidationState::Acceptable);
        assert_eq!(v.validate("1a"), ValidationState::Invalid);
        assert_eq!(v.validate("1-"), ValidationState::Invalid);
        assert_eq!(v.validate("99999999999999999999"), ValidationState::Invalid);
    }

    #[test]
    fn test_float_validator() {
        let v = FloatValidator::new();
        assert_eq!(v.validate("3."), ValidationState::Intermediate);
        assert_eq!(v.validate("3.25"), ValidationState::Acceptable);
        assert_eq!(v.validate("-.5"), ValidationState::Acceptable);
        assert_eq!(v.validate("1.2.3"), ValidationState::Invalid);
        assert_eq!(v.validate("e"), ValidationState::Invalid);
    }

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::with_intermediate(r"^[a-z]{3}$", r"^[a-z]{1,2}$").unwrap();
        assert_eq!(v.validate("abc"), ValidationState::Acceptable);
        assert_eq!(v.validate("ab"), ValidationState::Intermediate);
        assert_eq!(v.validate("ab1"), ValidationState::Invalid);
        assert!(RegexValidator::new("(").is_err());
    }

    #[test]
    fn test_rgb_validator() {
        let v = RgbValidator::new(',').unwrap();
        assert_eq!(v.validate("255,0,128"), ValidationState::Acceptable);
        assert_eq!(v.validate("255,"), ValidationState::Intermediate);
        assert_eq!(v.validate("255,0,"), ValidationState::Intermediate);
        assert_eq!(v.validate("256"), ValidationState::Invalid);
        assert_eq!(v.validate("01"), ValidationState::Invalid);
        assert_eq!(v.validate("1,2,3,"), ValidationState::Invalid);
        assert_eq!(v.validate("1,,"), ValidationState::Invalid);
        assert_eq!(v.parse("10,20,30"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(v.parse("10,20"), None);
    }

    #[test]
    fn test_rgb_validator_custom_separator() {
        let v = RgbValidator::new('-').unwrap();
        assert_eq!(v.validate("1-2-3"), ValidationState::Acceptable);
        assert_eq!(v.validate("1,2"), ValidationState::Invalid);
        assert_eq!(v.format(Rgb::new(255, 0, 255)), "255-0-255");

        assert!(RgbValidator::new('5').is_err());
        assert!(RgbValidator::new(' ').is_err());
        // Regex metacharacters are escaped
        assert_eq!(RgbValidator::new('.').unwrap().validate("1.2.3"), ValidationState::Acceptable);
    }

    #[test]
    fn test_hex_validator() {
        let v = HexColorValidator::new();
        assert_eq!(v.validate("#"), ValidationState::Intermediate);
        assert_eq!(v.validate("#aaBB1"), ValidationState::Intermediate);
        assert_eq!(v.validate("#ffaa11"), ValidationState::Acceptable);
        assert_eq!(v.validate("ffaa11"), ValidationState::Invalid);
        assert_eq!(v.validate("#ffaa11f"), ValidationState::Invalid);
        assert_eq!(v.validate("#gg"), ValidationState::Invalid);
        assert_eq!(v.parse("#ffaa11"), Some(Rgb::new(255, 170, 17)));
    }
}
