//! Synthetic debit card record
//!
//! A [`CardRecord`] is created once per session and never mutated afterwards.
//! Callers share it behind an `Arc` so every render sees the same instance.

use serde::Serialize;

use crate::error::{Error, Result};

/// Card number shown on the design mockups
pub const DESIGN_CARD_NUMBER: &str = "8124-4212-3456-7890";
pub const DESIGN_EXPIRY_MONTH: &str = "01";
pub const DESIGN_EXPIRY_YEAR: &str = "28";
pub const DESIGN_CVV: &str = "345";

const CARD_DIGITS: usize = 16;
const GROUP_SEPARATOR: char = '-';

/// Card expiry as two-digit month and year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expiry {
    pub month: String,
    pub year: String,
}

impl Expiry {
    /// Build an expiry, validating both parts are two ASCII digits and the
    /// month is 01..=12.
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Result<Self> {
        let month = month.into();
        let year = year.into();

        if !is_digits(&month, 2) {
            return Err(Error::invalid_card(format!(
                "expiry month must be two digits, got {month:?}"
            )));
        }
        if !is_digits(&year, 2) {
            return Err(Error::invalid_card(format!(
                "expiry year must be two digits, got {year:?}"
            )));
        }
        if !matches!(month.parse::<u8>(), Ok(1..=12)) {
            return Err(Error::invalid_card(format!("expiry month out of range: {month}")));
        }

        Ok(Self { month, year })
    }

    /// Parse `MM/YY`
    pub fn parse(text: &str) -> Result<Self> {
        let (month, year) = text
            .split_once('/')
            .ok_or_else(|| Error::invalid_card(format!("expiry must be MM/YY, got {text:?}")))?;
        Self::new(month, year)
    }
}

impl std::fmt::Display for Expiry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Immutable card data for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    number: String,
    expiry: Expiry,
    cvv: String,
    holder_name: String,
}

impl CardRecord {
    /// Build a card record from its parts.
    ///
    /// The number must hold exactly 16 digits, optionally grouped with `-`.
    /// The stored form is always grouped in fours with `-` separators.
    pub fn new(
        number: &str,
        expiry: Expiry,
        cvv: impl Into<String>,
        holder_name: impl Into<String>,
    ) -> Result<Self> {
        let digits: String = number.chars().filter(|c| *c != GROUP_SEPARATOR).collect();
        if !is_digits(&digits, CARD_DIGITS) {
            return Err(Error::invalid_card(format!(
                "card number must have {CARD_DIGITS} digits, got {number:?}"
            )));
        }

        let cvv = cvv.into();
        if !is_digits(&cvv, 3) {
            return Err(Error::invalid_card("cvv must be three digits"));
        }

        Ok(Self {
            number: group_digits(&digits),
            expiry,
            cvv,
            holder_name: holder_name.into(),
        })
    }

    /// The fixed design card, carrying the given holder name
    pub fn synthetic(holder_name: impl Into<String>) -> Self {
        Self {
            number: DESIGN_CARD_NUMBER.to_string(),
            expiry: Expiry {
                month: DESIGN_EXPIRY_MONTH.to_string(),
                year: DESIGN_EXPIRY_YEAR.to_string(),
            },
            cvv: DESIGN_CVV.to_string(),
            holder_name: holder_name.into(),
        }
    }

    /// Card number with `-` separators between groups of four
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The four digit groups of the number
    pub fn number_groups(&self) -> impl Iterator<Item = &str> {
        self.number.split(GROUP_SEPARATOR)
    }

    pub fn expiry(&self) -> &Expiry {
        &self.expiry
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Newline-delimited text block placed on the clipboard by "copy details"
    pub fn details_text(&self) -> String {
        format!(
            "Card: {}\nExpiry: {}\nCVV: {}\nName: {}",
            self.number, self.expiry, self.cvv, self.holder_name
        )
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn group_digits(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("-")
}
