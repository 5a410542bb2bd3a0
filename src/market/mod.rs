mod data;
mod types;

pub use data::{mock_historical_data, mock_stocks, mock_watchlist, search};
pub use types::{Currency, PricePoint, Stock, format_amount};
