//! Locale-dependent formatting of prices and pickup date labels.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Pattern for pickup labels: abbreviated weekday, abbreviated month, day of month.
pub const DATE_LABEL_FORMAT: &str = "%a %b %-d";

/// Display locales the ordering screen can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppLocale {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "id_ID")]
    IdId,
    #[serde(rename = "de_DE")]
    DeDe,
}

impl AppLocale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EnGb => "en_GB",
            Self::IdId => "id_ID",
            Self::DeDe => "de_DE",
        }
    }

    /// Locale used by chrono for weekday and month names.
    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Self::EnUs => chrono::Locale::en_US,
            Self::EnGb => chrono::Locale::en_GB,
            Self::IdId => chrono::Locale::id_ID,
            Self::DeDe => chrono::Locale::de_DE,
        }
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        match self {
            Self::EnUs => CurrencyFormat::prefix("$", ',', '.'),
            Self::EnGb => CurrencyFormat::prefix("£", ',', '.'),
            Self::IdId => CurrencyFormat::prefix("Rp", '.', ','),
            Self::DeDe => CurrencyFormat::suffix("€", '.', ','),
        }
    }
}

impl AppLocale {
    /// Reads a POSIX locale value such as `id_ID.UTF-8` or `de_DE@euro`.
    ///
    /// `C`, `POSIX` and locales without a matching variant give `None`.
    pub fn from_posix(value: &str) -> Option<Self> {
        let name = value.split(['.', '@']).next().unwrap_or_default();
        name.parse().ok()
    }
}

impl fmt::Display for AppLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AppLocale {
    type Err = ConfigError;

    /// Accepts `en_US` as well as `en-US`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "en_us" => Ok(Self::EnUs),
            "en_gb" => Ok(Self::EnGb),
            "id_id" => Ok(Self::IdId),
            "de_de" => Ok(Self::DeDe),
            _ => Err(ConfigError::InvalidLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `1,00 €`
    Suffix,
}

/// Rules for rendering a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub decimals: u8,
}

impl CurrencyFormat {
    pub fn prefix(symbol: &'static str, grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            symbol,
            position: SymbolPosition::Prefix,
            grouping_separator,
            decimal_separator,
            decimals: 2,
        }
    }

    pub fn suffix(symbol: &'static str, grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            symbol,
            position: SymbolPosition::Suffix,
            grouping_separator,
            decimal_separator,
            decimals: 2,
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

/// Renders `amount` with the symbol, grouping and decimal rules of `format`.
///
/// Works from the decimal expansion of the amount, so any finite value is
/// rendered in full at any number of decimals. `-0.004` becomes `$0.00`.
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let number = if amount.is_finite() {
        let plain = format!("{:.*}", format.decimals as usize, amount.abs());
        let (major, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut number = group_digits(major, format.grouping_separator);
        if !fraction.is_empty() {
            number.push(format.decimal_separator);
            number.push_str(fraction);
        }
        number
    } else if amount.is_nan() {
        "NaN".to_string()
    } else {
        "∞".to_string()
    };

    let rounds_to_zero = amount.is_finite()
        && number.chars().all(|c| !c.is_ascii_digit() || c == '0');
    let sign = if amount.is_sign_negative() && !amount.is_nan() && !rounds_to_zero {
        "-"
    } else {
        ""
    };
    match format.position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, format.symbol, number),
        SymbolPosition::Suffix => format!("{}{} {}", sign, number, format.symbol),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a pickup label such as `Tue Jan 2` for the given moment.
pub fn format_date_label(moment: NaiveDateTime, locale: AppLocale) -> String {
    // Wall-clock time from the clock is rendered as-is; the UTC wrapper only
    // satisfies chrono's localized formatter and adds no offset.
    Utc.from_utc_datetime(&moment)
        .format_localized(DATE_LABEL_FORMAT, locale.chrono_locale())
        .to_string()
}
