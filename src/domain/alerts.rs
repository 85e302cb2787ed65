use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertKind {
    SentimentSpike,
    PriceAlert,
    VolumeSpike,
    InfluencerMention,
}

/// Ordered from least to most urgent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, AsRefStr, EnumIter,
    Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Critical => "severity-critical",
            Self::High => "severity-high",
            Self::Medium => "severity-medium",
            Self::Low => "severity-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AlertFilter {
    #[default]
    All,
    Unread,
    Critical,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !alert.read,
            Self::Critical => alert.severity == Severity::Critical,
        }
    }
}

/// Alert list held by the alerts page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
}

impl AlertBoard {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Alerts matching `filter`, in their original order
    pub fn filtered(&self, filter: AlertFilter) -> Vec<Alert> {
        self.alerts.iter().filter(|a| filter.matches(a)).cloned().collect()
    }

    /// Marks one alert read. Returns false when no alert has that id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.alerts.iter_mut().for_each(|a| a.read = true);
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn critical_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.severity == Severity::Critical).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, severity: Severity, read: bool) -> Alert {
        Alert {
            id: id.to_string(),
            kind: AlertKind::PriceAlert,
            severity,
            title: "t".into(),
            description: "d".into(),
            symbol: None,
            price: None,
            change: None,
            change_percent: None,
            sentiment: None,
            timestamp: "2024-01-15T14:30:00Z".into(),
            read,
        }
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut board = AlertBoard::new(vec![alert("1", Severity::Low, false)]);
        let before = board.clone();
        assert!(!board.mark_read("42"));
        assert_eq!(board, before);
    }

    #[test]
    fn severity_order() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn alert_json_uses_type_and_camel_case() {
        let json = r#"{"id":"price-TSLA","type":"price_alert","severity":"high","title":"Price Movement Alert",
            "description":"TSLA moved -5.20% in the last day","symbol":"TSLA","changePercent":-5.2,
            "timestamp":"now","read":false}"#;
        let a: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(a.kind, AlertKind::PriceAlert);
        assert_eq!(a.change_percent, Some(-5.2));
        assert_eq!(a.kind.to_string(), "price_alert");
    }
}
