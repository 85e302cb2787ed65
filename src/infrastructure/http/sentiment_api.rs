use serde_json::Value;

use super::{
    ApiClient, Endpoint,
    dto::{
        LoginRequest, PasswordResetRequest, RecommendationFeed, RegisterRequest, SendOtpRequest,
        VerifyOtpRequest,
    },
};
use crate::domain::{
    auth::RegistrationForm,
    errors::AppResult,
    logging::{LogComponent, get_logger},
    market::{
        CompanyProfile, MarketOverview, PriceLookup, Symbol, TrendingCrypto, TrendingCryptos,
        TrendingStock, TrendingStocks,
    },
    recommendations::Recommendation,
    repositories::{
        AuthGateway, HealthStatus, InsightsGateway, LoginResponse, MarketGateway, MessageResponse,
        RegisterResponse,
    },
};

/// Typed client for the sentiment platform's REST API
#[derive(Clone, Debug, Default)]
pub struct SentimentApiClient {
    http: ApiClient,
}

impl SentimentApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: ApiClient::new(base_url) }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// `true` when `/health` answers `{"status":"ok"}`
    pub async fn is_healthy(&self) -> bool {
        match self.health().await {
            Ok(status) if status.is_ok() => {
                get_logger().info(LogComponent::Infrastructure("SentimentApi"), "✅ Health check passed");
                true
            }
            Ok(status) => {
                get_logger().warn(
                    LogComponent::Infrastructure("SentimentApi"),
                    &format!("Health check returned status '{}'", status.status),
                );
                false
            }
            Err(e) => {
                get_logger().warn(
                    LogComponent::Infrastructure("SentimentApi"),
                    &format!("❌ Health check failed: {}", e),
                );
                false
            }
        }
    }
}

impl MarketGateway for SentimentApiClient {
    async fn health(&self) -> AppResult<HealthStatus> {
        self.http.get_json(&Endpoint::Health).await
    }

    async fn market_prices(&self, symbol: &Symbol) -> AppResult<PriceLookup> {
        self.http.get_json(&Endpoint::MarketPrices { symbol: symbol.value() }).await
    }

    async fn market_overview(&self) -> AppResult<MarketOverview> {
        let overview: MarketOverview = self.http.get_json(&Endpoint::MarketOverview).await?;
        get_logger().info(
            LogComponent::Infrastructure("SentimentApi"),
            &format!(
                "📊 Overview: {} stocks, {} cryptocurrencies",
                overview.stocks.len(),
                overview.cryptocurrencies.len()
            ),
        );
        Ok(overview)
    }

    async fn trending_stocks(&self) -> AppResult<Vec<TrendingStock>> {
        let wrapper: TrendingStocks = self.http.get_json(&Endpoint::TrendingStocks).await?;
        Ok(wrapper.trending_stocks)
    }

    async fn trending_crypto(&self) -> AppResult<Vec<TrendingCrypto>> {
        let wrapper: TrendingCryptos = self.http.get_json(&Endpoint::TrendingCrypto).await?;
        Ok(wrapper.trending_crypto)
    }

    async fn company_profile(&self, symbol: &Symbol) -> AppResult<CompanyProfile> {
        self.http.get_json(&Endpoint::CompanyProfile { symbol: symbol.value() }).await
    }
}

impl AuthGateway for SentimentApiClient {
    async fn send_otp(&self, email: &str, name: Option<&str>) -> AppResult<MessageResponse> {
        self.http.post_json(&Endpoint::SendOtp, &SendOtpRequest { email, name }).await
    }

    async fn verify_otp(&self, email: &str, code: &str) -> AppResult<MessageResponse> {
        self.http.post_json(&Endpoint::VerifyOtp, &VerifyOtpRequest { email, code }).await
    }

    async fn send_password_reset(&self, email: &str, name: Option<&str>) -> AppResult<MessageResponse> {
        self.http
            .post_json(&Endpoint::SendPasswordReset, &PasswordResetRequest { email, name })
            .await
    }

    async fn register(&self, form: &RegistrationForm) -> AppResult<RegisterResponse> {
        self.http.post_json(&Endpoint::Register, &RegisterRequest::from(form)).await
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        self.http.post_json(&Endpoint::Login, &LoginRequest { email, password }).await
    }
}

impl InsightsGateway for SentimentApiClient {
    async fn twitter_search(&self, query: &str, max_results: u32) -> AppResult<Value> {
        self.http.get_json(&Endpoint::TwitterSearch { query, max_results }).await
    }

    async fn scrape_reddit(&self) -> AppResult<MessageResponse> {
        self.http.get_json(&Endpoint::ScrapeReddit).await
    }

    async fn scrape_twitter(&self) -> AppResult<MessageResponse> {
        self.http.get_json(&Endpoint::ScrapeTwitter).await
    }

    async fn analyze_sentiment(&self, payload: &Value) -> AppResult<Value> {
        self.http.post_json(&Endpoint::AnalyzeSentiment, payload).await
    }

    async fn recommendations(&self, symbol: Option<&Symbol>) -> AppResult<Vec<Recommendation>> {
        let feed: RecommendationFeed = self
            .http
            .get_json(&Endpoint::Recommendations { symbol: symbol.map(Symbol::value) })
            .await?;
        Ok(feed.into())
    }
}
