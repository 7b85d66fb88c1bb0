//! Amount formatting for user-facing text.

use crate::config::FormatConfig;

/// Turns an amount into display text. Must be deterministic.
pub trait AmountFormatter: Send + Sync {
    fn format(&self, amount: f64) -> String;
}

/// Groups thousands with `,`, keeps at most `max_fraction_digits` decimals
/// with trailing zeros dropped, and prefixes an optional currency code.
///
/// `1250.5` with currency `THB` renders as `THB 1,250.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    currency: Option<String>,
    max_fraction_digits: usize,
}

impl NumberFormatter {
    pub fn new(currency: Option<String>, max_fraction_digits: usize) -> Self {
        Self {
            currency: currency.filter(|c| !c.trim().is_empty()),
            max_fraction_digits,
        }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(config.currency.clone(), config.max_fraction_digits)
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(None, 2)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl AmountFormatter for NumberFormatter {
    fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return amount.to_string();
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut number = group_thousands(int_part);
        if !frac_part.is_empty() {
            number.push('.');
            number.push_str(frac_part);
        }
        // "-0" after rounding reads as "0"
        if amount < 0.0 && number.chars().any(|c| c != '0' && c != '.' && c != ',') {
            number.insert(0, '-');
        }

        match &self.currency {
            Some(code) => format!("{} {}", code, number),
            None => number,
        }
    }
}
