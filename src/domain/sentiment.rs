use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

/// Value Object - sentiment score, bearish (-1) to bullish (+1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Into, Display, Serialize, Deserialize)]
#[display(fmt = "{:+.2}", _0)]
#[serde(from = "f64", into = "f64")]
pub struct SentimentScore(f64);

impl SentimentScore {
    pub const MIN: f64 = -1.0;
    pub const MAX: f64 = 1.0;

    /// Out-of-range readings are clamped, NaN becomes neutral
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::for_score(self.0)
    }

    pub fn tone(&self) -> Tone {
        Tone::for_score(self.0)
    }
}

impl From<f64> for SentimentScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, EnumIter)]
pub enum SentimentLabel {
    #[strum(serialize = "Very Bullish")]
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    #[strum(serialize = "Very Bearish")]
    VeryBearish,
}

impl SentimentLabel {
    pub fn for_score(score: f64) -> Self {
        if score > 0.3 {
            Self::VeryBullish
        } else if score > 0.1 {
            Self::Bullish
        } else if score > -0.1 {
            Self::Neutral
        } else if score > -0.3 {
            Self::Bearish
        } else {
            Self::VeryBearish
        }
    }
}

/// Colour family used for sentiment and price changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn for_score(score: f64) -> Self {
        if score > 0.1 {
            Self::Positive
        } else if score < -0.1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Sign-based tone for price moves
    pub fn for_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Positive
        } else if change < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "tone-positive",
            Self::Neutral => "tone-neutral",
            Self::Negative => "tone-negative",
        }
    }
}

/// One bucket of the 24h sentiment trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub time: String,
    pub sentiment: SentimentScore,
    pub mentions: u32,
}

/// Headline card on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineStat {
    pub name: String,
    pub value: String,
    pub change: String,
    pub positive: bool,
}
