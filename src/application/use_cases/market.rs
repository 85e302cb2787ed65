use super::{UseCaseError, UseCaseResult};
use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger},
    market::{CompanyProfile, MarketOverview, PriceLookup, Symbol, TrendingCrypto, TrendingStock},
    repositories::MarketGateway,
};

pub const MARKET_LOAD_FAILED: &str = "Failed to load market data";
pub const PRICE_LOOKUP_FAILED: &str = "Failed to load price data";
pub const PROFILE_FAILED: &str = "Failed to load company profile";
pub const TRENDING_FAILED: &str = "Failed to load trending assets";

fn fail(cause: impl Into<AppError>, fallback: &str) -> UseCaseError {
    let err = UseCaseError::new(cause.into(), fallback);
    get_logger().error(LogComponent::Application("Market"), &format!("{} ({})", err.message, err.cause));
    err
}

/// Everything the dashboard fetches on mount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendingBoard {
    pub stocks: Vec<TrendingStock>,
    pub crypto: Vec<TrendingCrypto>,
}

pub struct MarketUseCases<'a, G: MarketGateway> {
    gateway: &'a G,
}

impl<'a, G: MarketGateway> MarketUseCases<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Upstream partial failures arrive as `error` inside a 200 body; the rows are still shown
    pub async fn load_overview(&self) -> UseCaseResult<MarketOverview> {
        let overview = self
            .gateway
            .market_overview()
            .await
            .map_err(|e| fail(e, MARKET_LOAD_FAILED))?;
        if let Some(upstream) = &overview.error {
            get_logger().warn(
                LogComponent::Application("Market"),
                &format!("⚠️ Overview is partial: {}", upstream),
            );
        }
        get_logger().info(
            LogComponent::Application("Market"),
            &format!(
                "📊 Overview loaded: {} stocks, {} cryptos",
                overview.stocks.len(),
                overview.cryptocurrencies.len()
            ),
        );
        Ok(overview)
    }

    pub async fn lookup_price(&self, raw_symbol: &str) -> UseCaseResult<PriceLookup> {
        let symbol = Symbol::new(raw_symbol).map_err(|e| fail(e, PRICE_LOOKUP_FAILED))?;
        self.gateway
            .market_prices(&symbol)
            .await
            .map_err(|e| fail(e, PRICE_LOOKUP_FAILED))
    }

    pub async fn company_profile(&self, raw_symbol: &str) -> UseCaseResult<CompanyProfile> {
        let symbol = Symbol::new(raw_symbol).map_err(|e| fail(e, PROFILE_FAILED))?;
        self.gateway
            .company_profile(&symbol)
            .await
            .map_err(|e| fail(e, PROFILE_FAILED))
    }

    /// Both lists are requested together; one failing fails the board
    pub async fn trending(&self) -> UseCaseResult<TrendingBoard> {
        let (stocks, crypto) = futures::join!(self.gateway.trending_stocks(), self.gateway.trending_crypto());
        Ok(TrendingBoard {
            stocks: stocks.map_err(|e| fail(e, TRENDING_FAILED))?,
            crypto: crypto.map_err(|e| fail(e, TRENDING_FAILED))?,
        })
    }

    /// Network failures read as "offline" rather than as an error
    pub async fn is_service_up(&self) -> bool {
        match self.gateway.health().await {
            Ok(status) => status.is_ok(),
            Err(e) => {
                get_logger().warn(LogComponent::Application("Market"), &format!("Health check failed: {}", e));
                false
            }
        }
    }
}
