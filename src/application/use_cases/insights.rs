#![allow(async_fn_in_trait)]

use serde_json::{Value, json};

use super::{UseCaseError, UseCaseResult};
use crate::domain::{
    alerts::Alert,
    errors::AppError,
    influencers::Influencer,
    logging::{LogComponent, get_logger},
    market::Symbol,
    recommendations::Recommendation,
    repositories::{DemoDataSource, InsightsGateway},
    sentiment::{HeadlineStat, SentimentPoint},
};

pub const RECOMMENDATIONS_FAILED: &str = "Failed to load recommendations";
pub const SEARCH_FAILED: &str = "Failed to search social posts";
pub const SCRAPER_FAILED: &str = "Failed to start scraper";
pub const ANALYZE_FAILED: &str = "Failed to analyze sentiment";

/// Suspends for a number of milliseconds. The browser uses a timer; tests pass an instant one.
pub trait Delay {
    async fn wait(&self, millis: u32);
}

/// Completes immediately
pub struct NoDelay;

impl Delay for NoDelay {
    async fn wait(&self, _millis: u32) {}
}

/// Locally mocked data, served after the configured latency
pub struct MockFeeds<S: DemoDataSource, D: Delay> {
    source: S,
    delay: D,
    latency_ms: u32,
}

impl<S: DemoDataSource, D: Delay> MockFeeds<S, D> {
    pub fn new(source: S, delay: D, latency_ms: u32) -> Self {
        Self { source, delay, latency_ms }
    }

    async fn serve<T>(&self, feed: &'static str, load: fn(&S) -> Vec<T>) -> Vec<T> {
        self.delay.wait(self.latency_ms).await;
        let items = load(&self.source);
        get_logger().debug(
            LogComponent::Application("MockFeeds"),
            &format!("Served {} {} after {}ms", items.len(), feed, self.latency_ms),
        );
        items
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        self.serve("alerts", S::alerts).await
    }

    pub async fn influencers(&self) -> Vec<Influencer> {
        self.serve("influencers", S::influencers).await
    }

    pub async fn recommendations(&self) -> Vec<Recommendation> {
        self.serve("recommendations", S::recommendations).await
    }

    pub async fn sentiment_trend(&self) -> Vec<SentimentPoint> {
        self.serve("trend points", S::sentiment_trend).await
    }

    pub async fn headline_stats(&self) -> Vec<HeadlineStat> {
        self.serve("headline stats", S::headline_stats).await
    }
}

fn fail(cause: AppError, fallback: &str) -> UseCaseError {
    let err = UseCaseError::new(cause, fallback);
    get_logger().warn(LogComponent::Application("Insights"), &format!("{} ({})", err.message, err.cause));
    err
}

/// Texts of the posts in a search response (`{"data": [{"text": ...}]}`); other shapes give nothing
pub fn post_texts(response: &Value) -> Vec<String> {
    response
        .get("data")
        .and_then(Value::as_array)
        .map(|posts| {
            posts
                .iter()
                .filter_map(|post| post.get("text").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Live calls to the social, scraper, analyzer and recommendation endpoints
pub struct InsightsUseCases<'a, G: InsightsGateway> {
    gateway: &'a G,
}

impl<'a, G: InsightsGateway> InsightsUseCases<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// A blank symbol asks for the unfiltered feed
    pub async fn recommendations(&self, raw_symbol: &str) -> UseCaseResult<Vec<Recommendation>> {
        let symbol = Symbol::new(raw_symbol).ok();
        self.gateway
            .recommendations(symbol.as_ref())
            .await
            .map_err(|e| fail(e, RECOMMENDATIONS_FAILED))
    }

    pub async fn search_posts(&self, query: &str, max_results: u32) -> UseCaseResult<Vec<String>> {
        let response = self
            .gateway
            .twitter_search(query.trim(), max_results)
            .await
            .map_err(|e| fail(e, SEARCH_FAILED))?;
        Ok(post_texts(&response))
    }

    pub async fn trigger_reddit_scraper(&self) -> UseCaseResult<String> {
        let ack = self.gateway.scrape_reddit().await.map_err(|e| fail(e, SCRAPER_FAILED))?;
        Ok(ack.message)
    }

    pub async fn trigger_twitter_scraper(&self) -> UseCaseResult<String> {
        let ack = self.gateway.scrape_twitter().await.map_err(|e| fail(e, SCRAPER_FAILED))?;
        Ok(ack.message)
    }

    /// Sends `{"text": ...}` and hands back whatever the analyzer answers
    pub async fn analyze_text(&self, text: &str) -> UseCaseResult<Value> {
        self.gateway
            .analyze_sentiment(&json!({ "text": text }))
            .await
            .map_err(|e| fail(e, ANALYZE_FAILED))
    }
}
