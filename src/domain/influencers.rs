use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::market::SocialPlatform;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: String,
    pub name: String,
    pub platform: SocialPlatform,
    pub credibility: f64,
    pub followers: u64,
    pub accuracy: f64,
    pub last_active: String,
}

/// Ranking key for the influencer table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InfluencerSort {
    #[default]
    Credibility,
    Followers,
    Accuracy,
}

impl InfluencerSort {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Credibility => "Credibility",
            Self::Followers => "Followers",
            Self::Accuracy => "Accuracy",
        }
    }

    fn key(&self, influencer: &Influencer) -> f64 {
        match self {
            Self::Credibility => influencer.credibility,
            Self::Followers => influencer.followers as f64,
            Self::Accuracy => influencer.accuracy,
        }
    }
}

/// Copy of `influencers` ranked highest first on `by`. Ties keep input order.
pub fn sorted(influencers: &[Influencer], by: InfluencerSort) -> Vec<Influencer> {
    let mut ranked = influencers.to_vec();
    match by {
        // exact integer compare, followers can exceed f64 precision
        InfluencerSort::Followers => ranked.sort_by(|a, b| b.followers.cmp(&a.followers)),
        _ => ranked.sort_by(|a, b| by.key(b).total_cmp(&by.key(a))),
    }
    ranked
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InfluencerStats {
    pub total: usize,
    pub avg_credibility: f64,
    pub avg_accuracy: f64,
}

impl InfluencerStats {
    pub fn from_slice(influencers: &[Influencer]) -> Self {
        if influencers.is_empty() {
            return Self::default();
        }
        let n = influencers.len() as f64;
        Self {
            total: influencers.len(),
            avg_credibility: influencers.iter().map(|i| i.credibility).sum::<f64>() / n,
            avg_accuracy: influencers.iter().map(|i| i.accuracy).sum::<f64>() / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        assert_eq!(InfluencerStats::from_slice(&[]), InfluencerStats::default());
    }
}
