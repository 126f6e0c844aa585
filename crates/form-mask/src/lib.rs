//! Form Mask
//!
//! Display masks for Brazilian identifier (CPF) and phone fields.
//! - `format_identifier`: `DDD.DDD.DDD-DD`, partial groups while typing
//! - `format_phone`: `(DD) DDDDD-DDDD` / `(DD) DDDD-DDDD`, partial while typing
//! - `strip_formatting`: back to the digit-only form the backend expects
//!
//! Every function is total: any input, including empty strings and strings
//! without digits, yields a defined output.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Both masks keep at most this many digits (CPF, or DDD + 9-digit mobile)
pub const MAX_DIGITS: usize = 11;

// =============================================================================
// BANDS
// =============================================================================

/// One length band of a mask: applies when the digit count is above `min_len`
struct Band {
    min_len: usize,
    pattern: Regex,
    template: &'static str,
}

impl Band {
    fn new(min_len: usize, pattern: &str, template: &'static str) -> Self {
        Self {
            min_len,
            pattern: Regex::new(pattern).unwrap(),
            template,
        }
    }
}

/// CPF bands, most specific first. Up to 3 digits are shown as typed.
static IDENTIFIER_BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
    vec![
        Band::new(9, r"^([0-9]{3})([0-9]{3})([0-9]{3})([0-9]{2})$", "${1}.${2}.${3}-${4}"),
        Band::new(6, r"^([0-9]{3})([0-9]{3})([0-9]{1,3})$", "${1}.${2}.${3}"),
        Band::new(3, r"^([0-9]{3})([0-9]{1,3})$", "${1}.${2}"),
    ]
});

/// Phone bands, most specific first. No digits -> empty string.
static PHONE_BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
    vec![
        // Mobile: (XX) XXXXX-XXXX
        Band::new(10, r"^([0-9]{2})([0-9]{5})([0-9]{4})$", "(${1}) ${2}-${3}"),
        // Landline, or mobile still being typed
        Band::new(6, r"^([0-9]{2})([0-9]{4})([0-9]{0,4})$", "(${1}) ${2}-${3}"),
        Band::new(2, r"^([0-9]{2})([0-9]*)$", "(${1}) ${2}"),
        // Area code being typed: parenthesis stays open on purpose
        Band::new(0, r"^([0-9]*)$", "(${1}"),
    ]
});

fn apply_bands(digits: &str, bands: &[Band]) -> String {
    bands
        .iter()
        .find(|band| digits.len() > band.min_len)
        .map(|band| band.pattern.replace(digits, band.template).into_owned())
        .unwrap_or_else(|| digits.to_string())
}

/// Keep ASCII digits only, truncated to `MAX_DIGITS`
fn masked_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Format a CPF as the user types (`123.456.789-01`)
pub fn format_identifier(raw: &str) -> String {
    apply_bands(&masked_digits(raw), &IDENTIFIER_BANDS)
}

/// Format a phone number as the user types (`(11) 98765-4321`)
pub fn format_phone(raw: &str) -> String {
    apply_bands(&masked_digits(raw), &PHONE_BANDS)
}

/// Remove every non-digit character. No truncation.
pub fn strip_formatting(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Which mask a field uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// CPF, 11 digits
    Identifier,
    /// DDD + 8 or 9 digit number
    Phone,
}

impl MaskKind {
    pub fn format(self, raw: &str) -> String {
        match self {
            MaskKind::Identifier => format_identifier(raw),
            MaskKind::Phone => format_phone(raw),
        }
    }

    /// Whether a digit-only value is a complete entry for this mask
    pub fn is_complete(self, digits: &str) -> bool {
        let all_digits = digits.chars().all(|c| c.is_ascii_digit());
        match self {
            MaskKind::Identifier => all_digits && digits.len() == 11,
            MaskKind::Phone => all_digits && (digits.len() == 10 || digits.len() == 11),
        }
    }
}
