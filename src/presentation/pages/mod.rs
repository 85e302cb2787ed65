mod alerts;
mod auth;
mod dashboard;
mod influencers;
mod landing;
mod recommendations;

pub use alerts::AlertsPage;
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage, VerifyOtpPage};
pub use dashboard::DashboardPage;
pub use influencers::InfluencersPage;
pub use landing::LandingPage;
pub use recommendations::RecommendationsPage;

use crate::{
    application::MockFeeds, config::config, infrastructure::mock_data::BundledDemoData,
    infrastructure::services::TimerDelay,
};

/// Bundled demo data behind the configured browser latency
fn demo_feeds() -> MockFeeds<BundledDemoData, TimerDelay> {
    MockFeeds::new(BundledDemoData, TimerDelay, config().simulated_latency_ms)
}
