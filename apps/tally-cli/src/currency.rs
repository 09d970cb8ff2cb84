//! # Currency Formatting
//!
//! Turns the plain numbers coming out of `tally-core` into display strings.
//!
//! ```text
//! 41.739999999 ──► round to minor units ──► "4174"   ──► "$41.74"
//! 1234.5       ──► "123450"             ──► "$1,234.50"
//! ```
//!
//! Only this module knows about symbols and decimals; the store never
//! formats anything.

use crate::state::ConfigError;

/// Display rules for one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    code: String,
    symbol: String,
    decimals: u8,
}

/// Symbol and minor-unit digits for the codes we know about.
fn known_currency(code: &str) -> Option<(&'static str, u8)> {
    let entry = match code {
        "USD" => ("$", 2),
        "EUR" => ("€", 2),
        "GBP" => ("£", 2),
        "JPY" => ("¥", 0),
        "CAD" => ("CA$", 2),
        "AUD" => ("A$", 2),
        "INR" => ("₹", 2),
        "CNY" => ("CN¥", 2),
        "KRW" => ("₩", 0),
        "CHF" => ("CHF ", 2),
        _ => return None,
    };
    Some(entry)
}

impl CurrencyFormatter {
    /// Creates a formatter for an ISO 4217 code (case-insensitive).
    ///
    /// Unknown but well-formed codes are accepted and rendered with the code
    /// as prefix, e.g. `"SEK 12.00"`.
    pub fn new(code: &str) -> Result<Self, ConfigError> {
        let normalized = code.trim().to_ascii_uppercase();

        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrency(code.to_string()));
        }

        let (symbol, decimals) = match known_currency(&normalized) {
            Some((symbol, decimals)) => (symbol.to_string(), decimals),
            None => (format!("{} ", normalized), 2),
        };

        Ok(CurrencyFormatter {
            code: normalized,
            symbol,
            decimals,
        })
    }

    /// The normalized ISO code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Formats an amount, e.g. `1234.5` → `"$1,234.50"`.
    ///
    /// Rounds half away from zero to the currency's minor unit. The digits
    /// come from the float itself, so amounts past `i64::MAX` keep their
    /// magnitude; infinite amounts render as `"$∞"`.
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}∞", sign, self.symbol);
        }

        let decimals = self.decimals as usize;
        let scaled = (amount.abs() * 10_f64.powi(self.decimals as i32)).round();

        let digits = if scaled.is_finite() {
            format!("{:0width$.0}", scaled, width = decimals + 1)
        } else {
            // scaling overflowed; no fraction survives at this magnitude
            format!("{:.0}{}", amount.abs(), "0".repeat(decimals))
        };

        let (whole, frac) = digits.split_at(digits.len() - decimals);
        let negative = amount < 0.0 && digits.bytes().any(|b| b != b'0');

        let number = if decimals > 0 {
            format!("{}.{}", group_thousands(whole), frac)
        } else {
            group_thousands(whole)
        };

        format!(
            "{}{}{}",
            if negative { "-" } else { "" },
            self.symbol,
            number
        )
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        CurrencyFormatter {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

/// `"1234567"` → `"1,234,567"`.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
