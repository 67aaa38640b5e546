// Locale-aware number formatting for prices, tooltips and axis ticks
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NumberLocale {
    #[default]
    #[serde(rename = "tr-TR")]
    TrTr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl NumberLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            NumberLocale::TrTr => "tr-TR",
            NumberLocale::EnUs => "en-US",
        }
    }

    fn group_separator(&self) -> char {
        match self {
            NumberLocale::TrTr => '.',
            NumberLocale::EnUs => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            NumberLocale::TrTr => ',',
            NumberLocale::EnUs => '.',
        }
    }
}

impl FromStr for NumberLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "tr-tr" | "tr" => Ok(NumberLocale::TrTr),
            "en-us" | "en" => Ok(NumberLocale::EnUs),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Formats amounts the way the dashboard displays them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatter {
    pub locale: NumberLocale,
    pub currency_symbol: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(NumberLocale::TrTr, "₺")
    }
}

impl Formatter {
    pub fn new(locale: NumberLocale, currency_symbol: &str) -> Self {
        Self {
            locale,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Thousands-grouped number with at most two fraction digits
    pub fn group(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{:.2}", value.abs());
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
        if value < 0.0 && rounded.chars().any(|c| c != '0' && c != '.') {
            grouped.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.locale.group_separator());
            }
            grouped.push(digit);
        }
        if !frac_part.is_empty() {
            grouped.push(self.locale.decimal_separator());
            grouped.push_str(frac_part);
        }
        grouped
    }

    pub fn currency(&self, value: f64) -> String {
        format!("{}{}", self.currency_symbol, self.group(value))
    }

    /// Signed percentage for metric change badges
    pub fn change(&self, value: f64) -> String {
        let sign = if value > 0.0 { "+" } else { "" };
        format!("{}{}%", sign, self.group(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_turkish() {
        let fmt = Formatter::default();
        assert_eq!(fmt.group(1_250_000.0), "1.250.000");
        assert_eq!(fmt.group(999.0), "999");
        assert_eq!(fmt.group(1249.9), "1.249,9");
        assert_eq!(fmt.group(0.0), "0");
        assert_eq!(fmt.currency(34_999.0), "₺34.999");
    }

    #[test]
    fn test_group_english_and_negative() {
        let fmt = Formatter::new(NumberLocale::EnUs, "$");
        assert_eq!(fmt.group(6847.0), "6,847");
        assert_eq!(fmt.group(-1234567.891), "-1,234,567.89");
        assert_eq!(fmt.group(-0.001), "0");
        assert_eq!(fmt.currency(12.5), "$12.5");
    }

    #[test]
    fn test_change_sign() {
        let fmt = Formatter::new(NumberLocale::EnUs, "$");
        assert_eq!(fmt.change(12.5), "+12.5%");
        assert_eq!(fmt.change(-3.2), "-3.2%");
        assert_eq!(fmt.change(0.0), "0%");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("tr-TR".parse::<NumberLocale>(), Ok(NumberLocale::TrTr));
        assert_eq!("en_US".parse::<NumberLocale>(), Ok(NumberLocale::EnUs));
        assert!("fr-FR".parse::<NumberLocale>().is_err());
    }
}
