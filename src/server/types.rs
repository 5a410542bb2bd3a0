use crate::{chat::Message, market::Stock};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: Message,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    pub width: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A stock row with its price and change pre-formatted for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    #[serde(flatten)]
    pub stock: Stock,
    pub display_price: String,
    pub display_change: String,
    pub is_up: bool,
}

impl From<Stock> for StockRow {
    fn from(stock: Stock) -> Self {
        Self {
            display_price: stock.display_price(),
            display_change: stock.display_change(),
            is_up: stock.is_up(),
            stock,
        }
    }
}

pub fn stock_rows(stocks: Vec<Stock>) -> Vec<StockRow> {
    stocks.into_iter().map(StockRow::from).collect()
}
