use serde::{Deserialize, Deserializer, Serialize};

use super::value_objects::{AssetClass, Symbol};

/// Stock quote as served by `/market/prices` and `/market/overview`.
/// `change_percent` arrives as a string without the `%` sign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockQuote {
    pub symbol: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change_percent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub high: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub low: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub open: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_close: f64,
    pub timestamp: Option<String>,
}

impl StockQuote {
    /// Unparsable or missing percentages count as zero
    pub fn change_percent_value(&self) -> f64 {
        parse_percent(&self.change_percent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoQuote {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    pub timestamp: Option<String>,
}

/// `/market/prices` answer, tagged by asset type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PriceLookup {
    Stock(StockQuote),
    Crypto(CryptoQuote),
}

impl PriceLookup {
    pub fn price(&self) -> f64 {
        match self {
            Self::Stock(q) => q.price,
            Self::Crypto(q) => q.price,
        }
    }

    pub fn asset_class(&self) -> AssetClass {
        match self {
            Self::Stock(_) => AssetClass::Stocks,
            Self::Crypto(_) => AssetClass::Crypto,
        }
    }

    pub fn to_row(&self) -> AssetRow {
        match self {
            Self::Stock(q) => AssetRow::from(q),
            Self::Crypto(q) => AssetRow::from(q),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketOverview {
    pub stocks: Vec<StockQuote>,
    pub cryptocurrencies: Vec<CryptoQuote>,
    pub timestamp: Option<String>,
    pub total_stocks: usize,
    pub total_cryptos: usize,
    pub error: Option<String>,
}

impl MarketOverview {
    /// Normalised table rows for one tab
    pub fn rows(&self, class: AssetClass) -> Vec<AssetRow> {
        match class {
            AssetClass::Stocks => self.stocks.iter().map(AssetRow::from).collect(),
            AssetClass::Crypto => self.cryptocurrencies.iter().map(AssetRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty() && self.cryptocurrencies.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingStock {
    pub symbol: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change_percent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingCrypto {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume_24h: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingStocks {
    pub trending_stocks: Vec<TrendingStock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingCryptos {
    pub trending_crypto: Vec<TrendingCrypto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub symbol: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub market_cap: Option<f64>,
    /// Sometimes a number, sometimes a numeric string
    pub employees: Option<serde_json::Value>,
    pub ceo: Option<String>,
    pub country: Option<String>,
}

impl CompanyProfile {
    pub fn employees_label(&self) -> Option<String> {
        match self.employees.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// One row of the dashboard's asset table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub symbol: Symbol,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: f64,
}

impl From<&StockQuote> for AssetRow {
    fn from(q: &StockQuote) -> Self {
        Self {
            symbol: Symbol::from(q.symbol.as_deref().unwrap_or_default()),
            price: q.price,
            change: q.change,
            change_percent: q.change_percent_value(),
            volume: q.volume,
        }
    }
}

impl From<&CryptoQuote> for AssetRow {
    fn from(q: &CryptoQuote) -> Self {
        Self {
            symbol: Symbol::from(q.symbol.as_str()),
            price: q.price,
            change: q.change_24h,
            change_percent: q.change_24h,
            volume: q.volume_24h,
        }
    }
}

/// Upstream quotes carry `null` for values the provider lacks; read those as zero
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads numbers like `"1.25"`, `"-0.4%"`, `""`. Anything else is 0.
pub fn parse_percent(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
