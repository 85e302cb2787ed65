use once_cell::sync::OnceCell;

use crate::domain::auth::RESEND_COOLDOWN_SECS;
use crate::view_state::PAGE_SIZE_CHOICES;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Build-time and runtime settings of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Delay before mocked pages show their data
    pub simulated_latency_ms: u32,
    pub resend_cooldown_secs: u32,
    pub default_page_size: usize,
    pub register_redirect_ms: u32,
    pub verify_redirect_ms: u32,
    pub twitter_max_results: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            simulated_latency_ms: 1000,
            resend_cooldown_secs: RESEND_COOLDOWN_SECS,
            default_page_size: PAGE_SIZE_CHOICES[0],
            register_redirect_ms: 1000,
            verify_redirect_ms: 1200,
            twitter_max_results: 10,
        }
    }
}

impl AppConfig {
    /// Reads `DASHBOARD_API_URL` at compile time, wasm has no process environment
    pub fn from_env() -> Self {
        Self::default().with_api_url(option_env!("DASHBOARD_API_URL"))
    }

    pub fn with_api_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn init_config(config: AppConfig) {
    let _ = CONFIG.set(config);
}

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_trims_trailing_slash() {
        let cfg = AppConfig::default().with_api_url(Some("https://api.oryntal.test/ "));
        assert_eq!(cfg.api_base_url, "https://api.oryntal.test");
    }

    #[test]
    fn blank_override_keeps_default() {
        let cfg = AppConfig::default().with_api_url(Some("  "));
        assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
    }
}
