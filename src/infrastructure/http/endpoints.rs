use strum::Display as StrumDisplay;

use super::HttpUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// Every route the dashboard calls on the REST service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Health,
    MarketPrices { symbol: &'a str },
    MarketOverview,
    TrendingStocks,
    TrendingCrypto,
    CompanyProfile { symbol: &'a str },
    SendOtp,
    VerifyOtp,
    SendPasswordReset,
    Register,
    Login,
    TwitterSearch { query: &'a str, max_results: u32 },
    ScrapeReddit,
    ScrapeTwitter,
    AnalyzeSentiment,
    Recommendations { symbol: Option<&'a str> },
}

impl Endpoint<'_> {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::SendOtp
            | Self::VerifyOtp
            | Self::SendPasswordReset
            | Self::Register
            | Self::Login
            | Self::AnalyzeSentiment => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    /// Path plus query string, relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Self::Health => "/health".to_string(),
            Self::MarketPrices { symbol } => {
                HttpUtils::build_url_with_params("/market/prices", &[("symbol", symbol.to_string())])
            }
            Self::MarketOverview => "/market/overview".to_string(),
            Self::TrendingStocks => "/market/trending/stocks".to_string(),
            Self::TrendingCrypto => "/market/trending/crypto".to_string(),
            Self::CompanyProfile { symbol } => format!("/market/profile/{}", HttpUtils::url_encode(symbol)),
            Self::SendOtp => "/auth/send-otp".to_string(),
            Self::VerifyOtp => "/auth/verify-otp".to_string(),
            Self::SendPasswordReset => "/auth/send-password-reset".to_string(),
            Self::Register => "/auth/register".to_string(),
            Self::Login => "/auth/login".to_string(),
            Self::TwitterSearch { query, max_results } => HttpUtils::build_url_with_params(
                "/social/twitter/search",
                &[("query", query.to_string()), ("max_results", max_results.to_string())],
            ),
            Self::ScrapeReddit => "/scrapers/reddit".to_string(),
            Self::ScrapeTwitter => "/scrapers/twitter".to_string(),
            Self::AnalyzeSentiment => "/analyzer/sentiment".to_string(),
            Self::Recommendations { symbol: Some(symbol) } if !symbol.is_empty() => {
                HttpUtils::build_url_with_params("/recommendations", &[("symbol", symbol.to_string())])
            }
            Self::Recommendations { .. } => "/recommendations".to_string(),
        }
    }

    /// Full URL under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}
