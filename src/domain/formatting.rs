//! Display formatting shared by every page.

use strum::{AsRefStr, Display as StrumDisplay};

/// `$1,234.56`, `-$12.00`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = group_thousands(cents / 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, whole, cents % 100)
}

/// `+1.25%`, `-0.40%`
pub fn format_percent(value: f64) -> String {
    // -0.0 would print as "+-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// Compact counts: `150.0M`, `2.5K`, `999`
pub fn format_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{}", value)
    }
}

/// Ratio in [0, 1] shown as a percentage with one decimal
pub fn format_ratio(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn group_thousands(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    for g in groups.iter().rev() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

/// Colour tier for credibility and confidence scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Accuracy uses coarser bands
    pub fn for_accuracy(accuracy: f64) -> Self {
        if accuracy >= 0.7 {
            Self::Good
        } else if accuracy >= 0.5 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "tier-excellent",
            Self::Good => "tier-good",
            Self::Fair => "tier-fair",
            Self::Poor => "tier-poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-13.45), "-$13.45");
        assert_eq!(format_currency(50000.0), "$50,000.00");
        assert_eq!(format_currency(1_000_000.004), "$1,000,000.00");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(0.0), "+0.00%");
        assert_eq!(format_percent(-5.2), "-5.20%");
        assert_eq!(format_percent(12.346), "+12.35%");
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_number(150_000_000.0), "150.0M");
        assert_eq!(format_number(2_500_000_000.0), "2.5B");
        assert_eq!(format_number(850_000.0), "850.0K");
        assert_eq!(format_number(999.0), "999");
    }

    #[test]
    fn tiers() {
        assert_eq!(ScoreTier::for_score(0.85), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_score(0.6), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(0.45), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_score(0.1), ScoreTier::Poor);
        assert_eq!(ScoreTier::for_accuracy(0.72), ScoreTier::Good);
        assert_eq!(ScoreTier::for_accuracy(0.45), ScoreTier::Poor);
    }
}
