//! CPF (individual taxpayer id) handling.
//!
//! The form keeps the CPF as the operator sees it (`123.456.789-01`, or a
//! partial mask while typing); the record keeps only the 11 digits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a complete CPF.
pub const TAX_ID_DIGITS: usize = 11;

/// Keeps ASCII digits only.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Applies the `DDD.DDD.DDD-DD` mask to however many digits are present.
///
/// Returns `None` when the input holds more than eleven digits; callers
/// keep their previous value in that case instead of truncating.
///
/// ```
/// use roster_types::format_tax_id_progressive;
///
/// assert_eq!(format_tax_id_progressive("1234").as_deref(), Some("123.4"));
/// assert_eq!(format_tax_id_progressive("12345678901").as_deref(), Some("123.456.789-01"));
/// assert_eq!(format_tax_id_progressive("123456789012"), None);
/// ```
pub fn format_tax_id_progressive(input: &str) -> Option<String> {
    let digits = digits_only(input);
    if digits.len() > TAX_ID_DIGITS {
        return None;
    }
    let mut masked = String::with_capacity(14);
    for (index, digit) in digits.chars().enumerate() {
        match index {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }
    Some(masked)
}

/// Keystroke-level CPF input: what the operator typed, already masked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaxIdInput {
    formatted: String,
}

impl TaxIdInput {
    pub fn as_str(&self) -> &str {
        &self.formatted
    }

    /// Replaces the value with `raw`, masked. An edit that would exceed eleven
    /// digits is rejected and the previous value kept; returns whether the
    /// edit was accepted.
    pub fn update(&mut self, raw: &str) -> bool {
        match format_tax_id_progressive(raw) {
            Some(formatted) => {
                self.formatted = formatted;
                true
            }
            None => false,
        }
    }

    pub fn digit_count(&self) -> usize {
        digits_only(&self.formatted).len()
    }
}

/// A complete CPF, stored as exactly eleven digits.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId(String);

impl TaxId {
    /// Parses any text whose digits number exactly eleven.
    pub fn parse(input: &str) -> Option<Self> {
        let digits = digits_only(input);
        (digits.len() == TAX_ID_DIGITS).then_some(Self(digits))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The `XXX.XXX.XXX-XX` display form.
    pub fn masked(&self) -> String {
        format_tax_id_progressive(&self.0).unwrap_or_else(|| self.0.clone())
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl TryFrom<String> for TaxId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TaxId::parse(&value).ok_or_else(|| format!("CPF must contain {} digits", TAX_ID_DIGITS))
    }
}

impl From<TaxId> for String {
    fn from(value: TaxId) -> Self {
        value.masked()
    }
}
