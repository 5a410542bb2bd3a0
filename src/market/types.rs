use serde::{Deserialize, Serialize};

/// One (label, value) sample of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// Percent change on the day.
    pub change: f64,
    pub currency: Currency,
    pub market_cap: String,
    pub volume: String,
}

impl Stock {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// `₹3,542.60` / `$189.84`
    pub fn display_price(&self) -> String {
        format!("{}{}", self.currency.symbol(), format_amount(self.price))
    }

    /// `+1.23%` / `-0.45%`
    pub fn display_change(&self) -> String {
        let sign = if self.is_up() { "+" } else { "-" };
        format!("{sign}{:.2}%", self.change.abs())
    }

    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.symbol.to_lowercase().contains(&term)
    }
}

/// Two decimals with comma-grouped thousands.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn stock(currency: Currency, price: f64, change: f64) -> Stock {
        Stock {
            symbol: "TCS".to_string(),
            name: "Tata Consultancy Services".to_string(),
            price,
            change,
            currency,
            market_cap: "₹12.9T".to_string(),
            volume: "2.1M".to_string(),
        }
    }

    #[rstest]
    #[case(0.0, "0.00")]
    #[case(5.5, "5.50")]
    #[case(999.999, "1,000.00")]
    #[case(3542.6, "3,542.60")]
    #[case(1234567.891, "1,234,567.89")]
    #[case(-2500.0, "-2,500.00")]
    fn test_format_amount(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[test]
    fn test_display_uses_currency_symbol() {
        assert_eq!(stock(Currency::Inr, 3542.6, 1.23).display_price(), "₹3,542.60");
        assert_eq!(stock(Currency::Usd, 189.84, 1.23).display_price(), "$189.84");
    }

    #[test]
    fn test_display_change_sign() {
        assert_eq!(stock(Currency::Inr, 1.0, 1.234).display_change(), "+1.23%");
        assert_eq!(stock(Currency::Inr, 1.0, -0.451).display_change(), "-0.45%");
        assert_eq!(stock(Currency::Inr, 1.0, 0.0).display_change(), "+0.00%");
    }

    #[test]
    fn test_matches_name_or_symbol() {
        let s = stock(Currency::Inr, 1.0, 0.0);
        assert!(s.matches(""));
        assert!(s.matches("tcs"));
        assert!(s.matches("CONSULTANCY"));
        assert!(!s.matches("infy"));
    }

    #[test]
    fn test_stock_serializes_camel_case() {
        let value = serde_json::to_value(stock(Currency::Usd, 1.0, 0.0)).unwrap();
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["marketCap"], "₹12.9T");
    }
}
