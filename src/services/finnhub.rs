use reqwest::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://finnhub.io/api/v1";

/// Thin client for the Finnhub market-data API: company profile, price
/// quote, symbol search and the US symbol listing. Errors at this layer are
/// plain strings for the presentation layer to show.
#[derive(Clone)]
pub struct FinnhubClient {
    http: Client,
    api_key: String,
}

impl FinnhubClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, String> {
        if !self.has_key() {
            return Err("FINNHUB_API_KEY is missing in .env".to_string());
        }

        let url = format!("{BASE_URL}{path}");
        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Finnhub {path} failed: {status} {body}"));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }

    pub async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile, String> {
        self.get_json("/stock/profile2", &[("symbol", symbol)]).await
    }

    pub async fn quote(&self, symbol: &str) -> Result<QuoteResponse, String> {
        self.get_json("/quote", &[("symbol", symbol)]).await
    }

    pub async fn search(&self, q: &str) -> Result<SearchResponse, String> {
        self.get_json("/search", &[("q", q)]).await
    }

    pub async fn list_stocks(&self, exchange: &str) -> Result<Vec<StockListing>, String> {
        self.get_json("/stock/symbol", &[("exchange", exchange)]).await
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub ticker: String,

    #[serde(default)]
    pub exchange: String,

    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchResponse {
    pub count: i64,
    pub result: Vec<SearchItem>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchItem {
    pub description: String,

    #[serde(rename = "displaySymbol")]
    pub display_symbol: String,

    pub symbol: String,

    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StockListing {
    pub symbol: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "displaySymbol", default)]
    pub display_symbol: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct QuoteResponse {
    // current
    pub c: f64,
    // change
    pub d: f64,
    // percent change
    pub dp: f64,
    // high
    pub h: f64,
    // low
    pub l: f64,
    // open
    pub o: f64,
    // previous close
    pub pc: f64,
    // timestamp
    pub t: i64,
}
