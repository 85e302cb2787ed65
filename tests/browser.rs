#![cfg(target_arch = "wasm32")]

use sentiment_dashboard_wasm::application::{Delay, MockFeeds};
use sentiment_dashboard_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider};
use sentiment_dashboard_wasm::infrastructure::mock_data::BundledDemoData;
use sentiment_dashboard_wasm::infrastructure::services::{BrowserTimeProvider, ConsoleLogger, TimerDelay};
use sentiment_dashboard_wasm::presentation::routes::Route;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_formats_wall_time() {
    let clock = BrowserTimeProvider::new();
    let now = clock.current_timestamp();
    assert!(now > 1_600_000_000_000);
    let shown = clock.format_timestamp(now);
    assert_eq!(shown.len(), "HH:MM:SS.mmm".len());
}

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new_development();
    for level in [LogLevel::Trace, LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        logger.log(LogEntry::new(level, LogComponent::Infrastructure("Test"), "hello"));
    }
}

#[wasm_bindgen_test]
async fn timer_delay_resolves() {
    TimerDelay.wait(5).await;
    let feeds = MockFeeds::new(BundledDemoData, TimerDelay, 5);
    assert_eq!(feeds.alerts().await.len(), 5);
}

#[wasm_bindgen_test]
fn hash_routes_round_trip() {
    for route in [Route::Dashboard, Route::Alerts, Route::VerifyOtp { email: "a@b.co".into() }] {
        assert_eq!(Route::from_hash(&route.to_hash()), route);
    }
}
