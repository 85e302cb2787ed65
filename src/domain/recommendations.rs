use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::market::value_objects::contains_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Buy,
    Hold,
    Sell,
}

impl Action {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Buy => "action-buy",
            Self::Sell => "action-sell",
            Self::Hold => "action-hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub symbol: String,
    pub action: Action,
    pub confidence: f64,
    pub reasoning: String,
    pub sentiment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_target: Option<f64>,
    /// Last traded price, only sent by the live feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ActionFilter {
    #[default]
    All,
    Buy,
    Sell,
    Hold,
}

impl ActionFilter {
    pub fn matches(&self, action: Action) -> bool {
        match self {
            Self::All => true,
            Self::Buy => action == Action::Buy,
            Self::Sell => action == Action::Sell,
            Self::Hold => action == Action::Hold,
        }
    }
}

/// Recommendations passing both the action filter and the symbol search, in input order
pub fn filter(recommendations: &[Recommendation], action: ActionFilter, search: &str) -> Vec<Recommendation> {
    recommendations
        .iter()
        .filter(|r| action.matches(r.action) && contains_ignore_case(&r.symbol, search))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RecommendationStats {
    pub total: usize,
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
    pub avg_confidence: f64,
}

impl RecommendationStats {
    pub fn from_slice(recommendations: &[Recommendation]) -> Self {
        let count = |action: Action| recommendations.iter().filter(|r| r.action == action).count();
        let avg_confidence = if recommendations.is_empty() {
            0.0
        } else {
            recommendations.iter().map(|r| r.confidence).sum::<f64>() / recommendations.len() as f64
        };
        Self {
            total: recommendations.len(),
            buy: count(Action::Buy),
            sell: count(Action::Sell),
            hold: count(Action::Hold),
            avg_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_feed_shape_parses() {
        let json = r#"{"symbol":"AAPL","action":"hold","confidence":0.5,
            "reasoning":"Sentiment=0.05, price change=0.00.","sentiment":0.05,"price":190.2}"#;
        let r: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(r.action, Action::Hold);
        assert_eq!(r.price, Some(190.2));
        assert!(r.timestamp.is_empty());
    }
}
