#![allow(async_fn_in_trait)]

//! Gateways to the external REST service. The application layer only sees these traits;
//! `infrastructure::http::SentimentApiClient` is the production implementation.

use serde::{Deserialize, Serialize};

use crate::domain::{
    alerts::Alert,
    auth::RegistrationForm,
    errors::AppResult,
    influencers::Influencer,
    market::{CompanyProfile, MarketOverview, PriceLookup, Symbol, TrendingCrypto, TrendingStock},
    recommendations::Recommendation,
    sentiment::{HeadlineStat, SentimentPoint},
};

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Acknowledgement returned by the auth and placeholder endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: u64,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

pub trait MarketGateway {
    async fn health(&self) -> AppResult<HealthStatus>;
    async fn market_prices(&self, symbol: &Symbol) -> AppResult<PriceLookup>;
    async fn market_overview(&self) -> AppResult<MarketOverview>;
    async fn trending_stocks(&self) -> AppResult<Vec<TrendingStock>>;
    async fn trending_crypto(&self) -> AppResult<Vec<TrendingCrypto>>;
    async fn company_profile(&self, symbol: &Symbol) -> AppResult<CompanyProfile>;
}

pub trait AuthGateway {
    async fn send_otp(&self, email: &str, name: Option<&str>) -> AppResult<MessageResponse>;
    async fn verify_otp(&self, email: &str, code: &str) -> AppResult<MessageResponse>;
    async fn send_password_reset(&self, email: &str, name: Option<&str>) -> AppResult<MessageResponse>;
    async fn register(&self, form: &RegistrationForm) -> AppResult<RegisterResponse>;
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse>;
}

pub trait InsightsGateway {
    async fn twitter_search(&self, query: &str, max_results: u32) -> AppResult<serde_json::Value>;
    async fn scrape_reddit(&self) -> AppResult<MessageResponse>;
    async fn scrape_twitter(&self) -> AppResult<MessageResponse>;
    async fn analyze_sentiment(&self, payload: &serde_json::Value) -> AppResult<serde_json::Value>;
    async fn recommendations(&self, symbol: Option<&Symbol>) -> AppResult<Vec<Recommendation>>;
}

/// Locally bundled data behind the pages the service does not feed
pub trait DemoDataSource {
    fn alerts(&self) -> Vec<Alert>;
    fn influencers(&self) -> Vec<Influencer>;
    fn recommendations(&self) -> Vec<Recommendation>;
    fn sentiment_trend(&self) -> Vec<SentimentPoint>;
    fn headline_stats(&self) -> Vec<HeadlineStat>;
}
