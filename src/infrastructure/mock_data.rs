//! Demo data for the pages the REST service does not feed yet.

use crate::domain::{
    alerts::{Alert, AlertKind, Severity},
    influencers::Influencer,
    market::SocialPlatform,
    recommendations::{Action, Recommendation},
    repositories::DemoDataSource,
    sentiment::{HeadlineStat, SentimentPoint, SentimentScore},
};

/// The fixtures below, served through `DemoDataSource`
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDemoData;

impl DemoDataSource for BundledDemoData {
    fn alerts(&self) -> Vec<Alert> {
        alerts()
    }

    fn influencers(&self) -> Vec<Influencer> {
        influencers()
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        recommendations()
    }

    fn sentiment_trend(&self) -> Vec<SentimentPoint> {
        sentiment_trend()
    }

    fn headline_stats(&self) -> Vec<HeadlineStat> {
        headline_stats()
    }
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    kind: AlertKind,
    severity: Severity,
    title: &str,
    description: &str,
    symbol: &str,
    timestamp: &str,
    read: bool,
) -> Alert {
    Alert {
        id: id.to_string(),
        kind,
        severity,
        title: title.to_string(),
        description: description.to_string(),
        symbol: Some(symbol.to_string()),
        price: None,
        change: None,
        change_percent: None,
        sentiment: None,
        timestamp: timestamp.to_string(),
        read,
    }
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            sentiment: Some(0.45),
            ..alert(
                "1",
                AlertKind::SentimentSpike,
                Severity::High,
                "Sentiment Spike Detected",
                "AAPL sentiment jumped 45% in the last hour with 2,340 new mentions",
                "AAPL",
                "2024-01-15T14:30:00Z",
                false,
            )
        },
        Alert {
            price: Some(248.87),
            change: Some(-13.45),
            change_percent: Some(-5.2),
            ..alert(
                "2",
                AlertKind::PriceAlert,
                Severity::Medium,
                "Price Movement Alert",
                "TSLA dropped 5.2% in the last 30 minutes",
                "TSLA",
                "2024-01-15T14:15:00Z",
                false,
            )
        },
        alert(
            "3",
            AlertKind::InfluencerMention,
            Severity::Critical,
            "Elon Musk Mention",
            "Elon Musk tweeted about DOGE, causing 15,000+ mentions in 10 minutes",
            "DOGE",
            "2024-01-15T13:45:00Z",
            true,
        ),
        alert(
            "4",
            AlertKind::VolumeSpike,
            Severity::Medium,
            "Volume Spike",
            "NVDA trading volume increased 300% above average",
            "NVDA",
            "2024-01-15T13:20:00Z",
            true,
        ),
        Alert {
            sentiment: Some(0.12),
            ..alert(
                "5",
                AlertKind::SentimentSpike,
                Severity::Low,
                "Sentiment Change",
                "BTC sentiment improved by 12% in the last hour",
                "BTC",
                "2024-01-15T12:55:00Z",
                true,
            )
        },
    ]
}

fn influencer(
    id: &str,
    name: &str,
    platform: SocialPlatform,
    credibility: f64,
    followers: u64,
    accuracy: f64,
    last_active: &str,
) -> Influencer {
    Influencer {
        id: id.to_string(),
        name: name.to_string(),
        platform,
        credibility,
        followers,
        accuracy,
        last_active: last_active.to_string(),
    }
}

pub fn influencers() -> Vec<Influencer> {
    use SocialPlatform::{Reddit, Twitter};
    vec![
        influencer("1", "Elon Musk", Twitter, 0.85, 150_000_000, 0.72, "2024-01-15T10:30:00Z"),
        influencer("2", "Cathie Wood", Twitter, 0.78, 2_500_000, 0.68, "2024-01-15T09:15:00Z"),
        influencer("3", "WSB_Official", Reddit, 0.65, 15_000_000, 0.45, "2024-01-15T08:45:00Z"),
        influencer("4", "CryptoWhale", Twitter, 0.72, 850_000, 0.58, "2024-01-15T07:20:00Z"),
        influencer("5", "StockGuru", Reddit, 0.68, 3_200_000, 0.62, "2024-01-15T06:10:00Z"),
    ]
}

fn recommendation(
    symbol: &str,
    action: Action,
    confidence: f64,
    reasoning: &str,
    sentiment: f64,
    price_target: Option<f64>,
    timestamp: &str,
) -> Recommendation {
    Recommendation {
        symbol: symbol.to_string(),
        action,
        confidence,
        reasoning: reasoning.to_string(),
        sentiment,
        price_target,
        price: None,
        timestamp: timestamp.to_string(),
    }
}

pub fn recommendations() -> Vec<Recommendation> {
    vec![
        recommendation(
            "NVDA",
            Action::Buy,
            0.85,
            "Strong AI narrative momentum with 40% positive sentiment spike. Technical indicators show bullish breakout pattern.",
            0.4,
            Some(500.0),
            "2024-01-15T14:30:00Z",
        ),
        recommendation(
            "TSLA",
            Action::Sell,
            0.72,
            "Negative sentiment trend (-25% in 24h) with increased bearish mentions. Price action suggests downward pressure.",
            -0.25,
            Some(220.0),
            "2024-01-15T14:15:00Z",
        ),
        recommendation(
            "AAPL",
            Action::Hold,
            0.68,
            "Mixed signals with neutral sentiment. Wait for clearer direction from upcoming earnings or market catalysts.",
            0.05,
            None,
            "2024-01-15T14:00:00Z",
        ),
        recommendation(
            "BTC",
            Action::Buy,
            0.78,
            "Institutional adoption narrative gaining traction. Sentiment improving with 15% positive shift in crypto community.",
            0.15,
            Some(50000.0),
            "2024-01-15T13:45:00Z",
        ),
        recommendation(
            "MSFT",
            Action::Hold,
            0.61,
            "Stable sentiment with moderate AI-related mentions. No significant catalysts in near term.",
            0.08,
            None,
            "2024-01-15T13:30:00Z",
        ),
    ]
}

pub fn sentiment_trend() -> Vec<SentimentPoint> {
    [("00:00", 0.2, 45), ("04:00", 0.1, 52), ("08:00", 0.3, 78), ("12:00", 0.4, 95), ("16:00", 0.2, 67), ("20:00", 0.1, 43)]
        .into_iter()
        .map(|(time, sentiment, mentions)| SentimentPoint {
            time: time.to_string(),
            sentiment: SentimentScore::new(sentiment),
            mentions,
        })
        .collect()
}

pub fn headline_stats() -> Vec<HeadlineStat> {
    [
        ("Total Mentions", "12,543", "+12.5%", true),
        ("Active Influencers", "1,234", "+8.2%", true),
        ("Avg Sentiment", "+0.15", "+0.03", true),
        ("Alerts Today", "23", "-5", false),
    ]
    .into_iter()
    .map(|(name, value, change, positive)| HeadlineStat {
        name: name.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        positive,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_unique_ids() {
        let alerts = alerts();
        let mut ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), alerts.len());
        assert_eq!(influencers().len(), 5);
        assert_eq!(recommendations().len(), 5);
        assert_eq!(sentiment_trend().len(), 6);
        assert_eq!(headline_stats().len(), 4);
    }
}
