//! The secret number and the digit-only input it is typed into.

use tracing::{debug, instrument};

/// Maximum number of digits a secret may have.
pub const MAX_DIGITS: usize = 3;

/// Smallest accepted value.
pub const MIN_VALUE: u16 = 1;

/// Largest accepted value.
pub const MAX_VALUE: u16 = 999;

/// Reasons a string is not a valid secret number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SecretNumberError {
    /// Nothing was entered.
    #[display("Secret number is empty")]
    Empty,

    /// The input contains something other than ASCII digits.
    #[display("Secret number contains a non-digit character")]
    NonDigit,

    /// More than three digits.
    #[display("Secret number has more than {} digits", MAX_DIGITS)]
    TooLong,

    /// The value is outside 1..=999.
    #[display("Secret number {} is outside {}..={}", _0, MIN_VALUE, MAX_VALUE)]
    OutOfRange(#[error(not(source))] u16),
}

/// A validated secret: 1–3 ASCII digits whose value lies in 1..=999.
///
/// The digits are kept exactly as typed, so `"007"` stays `"007"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub struct SecretNumber(String);

impl SecretNumber {
    /// Validates `input` as a secret number.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, SecretNumberError> {
        if input.is_empty() {
            return Err(SecretNumberError::Empty);
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(SecretNumberError::NonDigit);
        }
        if input.len() > MAX_DIGITS {
            return Err(SecretNumberError::TooLong);
        }
        let value: u16 = input.parse().map_err(|_| SecretNumberError::NonDigit)?;
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(SecretNumberError::OutOfRange(value));
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the digits as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u16 {
        // Validated in `parse`.
        self.0.parse().unwrap_or_default()
    }

    /// Consumes the secret, returning its digits.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Editable digit-only text, capped at [`MAX_DIGITS`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuffer {
    text: String,
}

impl DigitBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `c` if it is a digit and there is room. Returns whether the
    /// buffer changed.
    #[instrument(skip(self))]
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.text.len() >= MAX_DIGITS {
            debug!(rejected = %c, "Ignoring input character");
            return false;
        }
        self.text.push(c);
        true
    }

    /// Removes the last digit, if any.
    #[instrument(skip(self))]
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Replaces the contents with the digits of `text`, truncated to
    /// [`MAX_DIGITS`].
    #[instrument(skip(self))]
    pub fn set_filtered(&mut self, text: &str) {
        self.text = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_DIGITS)
            .collect();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the current digits.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true when nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true when the contents form a valid secret number.
    pub fn is_valid(&self) -> bool {
        self.to_secret().is_ok()
    }

    /// Validates the contents as a secret number.
    pub fn to_secret(&self) -> Result<SecretNumber, SecretNumberError> {
        SecretNumber::parse(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ignores_leading_zeros() {
        let secret = SecretNumber::parse("042").unwrap();
        assert_eq!(secret.as_str(), "042");
        assert_eq!(secret.value(), 42);
    }

    #[test]
    fn test_out_of_range_reports_value() {
        assert_eq!(
            SecretNumber::parse("000"),
            Err(SecretNumberError::OutOfRange(0))
        );
    }
}
