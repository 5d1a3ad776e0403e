use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub host: String,
    pub port: u16,

    pub finnhub_api_key: String,

    // trading options
    pub default_stock_symbol: String,
    pub default_order_quantity: u32,
    pub popular_stocks: Vec<String>,
}

const DEFAULT_POPULAR_STOCKS: &str = "AAPL,MSFT,AMZN,TSLA,GOOGL,GOOG,NVDA,BRK.B,META,UNH,JNJ,JPM,V,PG,XOM,HD,CVX,MA,BAC,ABBV,PFE,AVGO,COST,DIS,KO";

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "stockdesk".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let finnhub_api_key = env::var("FINNHUB_API_KEY").unwrap_or_default();

    let default_stock_symbol = env::var("DEFAULT_STOCK_SYMBOL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "MSFT".to_string());

    let default_order_quantity = env::var("DEFAULT_ORDER_QUANTITY")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(100);

    let popular_stocks = env::var("POPULAR_STOCKS")
        .unwrap_or_else(|_| DEFAULT_POPULAR_STOCKS.to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Settings {
        mongodb_uri,
        mongodb_db,
        host,
        port,
        finnhub_api_key,
        default_stock_symbol,
        default_order_quantity,
        popular_stocks,
    }
}
