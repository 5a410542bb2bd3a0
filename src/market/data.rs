use super::types::{Currency, PricePoint, Stock};

fn stock(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    currency: Currency,
    market_cap: &str,
    volume: &str,
) -> Stock {
    Stock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        currency,
        market_cap: market_cap.to_string(),
        volume: volume.to_string(),
    }
}

/// Sample quotes for the dashboard. Static, not live data.
pub fn mock_stocks() -> Vec<Stock> {
    vec![
        stock("RELIANCE", "Reliance Industries", 2934.25, 1.12, Currency::Inr, "₹19.8T", "6.4M"),
        stock("TCS", "Tata Consultancy Services", 3542.60, 1.23, Currency::Inr, "₹12.9T", "2.1M"),
        stock("HDFCBANK", "HDFC Bank", 1532.80, -0.48, Currency::Inr, "₹11.6T", "9.8M"),
        stock("INFY", "Infosys", 1468.35, 0.76, Currency::Inr, "₹6.1T", "5.3M"),
        stock("AAPL", "Apple Inc.", 189.84, 0.94, Currency::Usd, "$2.95T", "52.1M"),
        stock("MSFT", "Microsoft Corporation", 415.50, -0.32, Currency::Usd, "$3.09T", "21.7M"),
        stock("GOOGL", "Alphabet Inc.", 152.19, 1.57, Currency::Usd, "$1.89T", "28.4M"),
        stock("TSLA", "Tesla, Inc.", 175.22, -2.41, Currency::Usd, "$558.4B", "98.6M"),
    ]
}

const WATCHLIST: [&str; 4] = ["RELIANCE", "INFY", "AAPL", "TSLA"];

pub fn mock_watchlist() -> Vec<Stock> {
    mock_stocks()
        .into_iter()
        .filter(|s| WATCHLIST.contains(&s.symbol.as_str()))
        .collect()
}

/// Thirty sessions of closing prices for the selected stock.
pub fn mock_historical_data() -> Vec<PricePoint> {
    const CLOSES: [f64; 30] = [
        182.63, 183.25, 181.90, 184.12, 185.47, 186.03, 184.88, 183.71, 185.20, 186.94, 188.15,
        187.42, 186.10, 187.89, 189.33, 190.04, 188.76, 187.25, 188.92, 190.47, 191.28, 190.15,
        189.02, 187.84, 188.55, 189.96, 191.12, 190.38, 189.41, 189.84,
    ];
    CLOSES
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(format!("Mar {}", i + 1), price))
        .collect()
}

/// Case-insensitive name/symbol filter over the mock table; a blank term keeps everything.
pub fn search(term: &str) -> Vec<Stock> {
    mock_stocks()
        .into_iter()
        .filter(|s| s.matches(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_watchlist_is_subset() {
        let symbols: Vec<String> = mock_watchlist().into_iter().map(|s| s.symbol).collect();
        assert_eq!(symbols, vec!["RELIANCE", "INFY", "AAPL", "TSLA"]);
    }

    #[test]
    fn test_search() {
        assert_eq!(search("").len(), mock_stocks().len());
        assert_eq!(search("bank")[0].symbol, "HDFCBANK");
        assert!(search("no such company").is_empty());
    }

    #[test]
    fn test_history_is_drawable() {
        let history = mock_historical_data();
        assert_eq!(history.len(), 30);
        assert_eq!(history[0].date, "Mar 1");
    }
}
