use leptos::*;

use crate::{
    application::MarketUseCases,
    domain::logging::{LogEntry, LogLevel, Logger, LogComponent, get_logger},
    global_state::{api_online, current_route, log_lines, log_paused},
    infrastructure::services::ConsoleLogger,
    presentation::{
        layout::{DashboardShell, LogPanel},
        pages::{
            AlertsPage, DashboardPage, ForgotPasswordPage, InfluencersPage, LandingPage, LoginPage,
            RecommendationsPage, RegisterPage, VerifyOtpPage,
        },
        routes::Route,
    },
};

/// Lines kept in the in-app log panel
pub const LOG_CAPACITY: usize = 100;

/// Bridge logger: browser console plus the in-app log panel
pub struct LeptosLogger {
    console: ConsoleLogger,
    min_level: LogLevel,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger, min_level: LogLevel) -> Self {
        Self { console, min_level }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let line = entry.format_line();
        let level = entry.level;
        self.console.log(entry);

        // untracked reads, a log call inside an effect must not subscribe it
        if level < self.min_level || log_paused().get_untracked() {
            return;
        }
        log_lines().update(|lines| push_bounded(lines, line, LOG_CAPACITY));
    }
}

/// Appends `line`, dropping the oldest entries beyond `capacity`
pub fn push_bounded(lines: &mut Vec<String>, line: String, capacity: usize) {
    lines.push(line);
    if lines.len() > capacity {
        let overflow = lines.len() - capacity;
        lines.drain(..overflow);
    }
}

fn location_hash() -> String {
    gloo::utils::window().location().hash().unwrap_or_default()
}

/// 🦀 Root component: hash router, API health probe and the log panel
#[component]
pub fn App() -> impl IntoView {
    let route = current_route();
    route.set(Route::from_hash(&location_hash()));

    let _ = window_event_listener(ev::hashchange, move |_| {
        let next = Route::from_hash(&location_hash());
        if route.get_untracked() != next {
            get_logger().debug(LogComponent::Presentation("Router"), &format!("➡️ {}", next.path()));
            route.set(next);
        }
    });

    crate::run_with_api!(|api| async move {
        let up = MarketUseCases::new(&api).is_service_up().await;
        api_online().set(Some(up));
    });

    let page = move || match route.get() {
        Route::Landing => view! { <LandingPage/> }.into_view(),
        Route::Login => view! { <LoginPage/> }.into_view(),
        Route::Register => view! { <RegisterPage/> }.into_view(),
        Route::VerifyOtp { email } => view! { <VerifyOtpPage email=email/> }.into_view(),
        Route::ForgotPassword => view! { <ForgotPasswordPage/> }.into_view(),
        Route::Dashboard => view! { <DashboardShell><DashboardPage/></DashboardShell> }.into_view(),
        Route::Influencers => view! { <DashboardShell><InfluencersPage/></DashboardShell> }.into_view(),
        Route::Alerts => view! { <DashboardShell><AlertsPage/></DashboardShell> }.into_view(),
        Route::Recommendations => {
            view! { <DashboardShell><RecommendationsPage/></DashboardShell> }.into_view()
        }
    };

    view! {
        <style>{STYLES}</style>
        <div class="sentiment-app">
            {page}
            <LogPanel/>
        </div>
    }
}

const STYLES: &str = r#"
.sentiment-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #0f172a;
    color: #e2e8f0;
    min-height: 100vh;
}
a { color: #60a5fa; cursor: pointer; text-decoration: none; }
button {
    background: #2563eb;
    color: white;
    border: none;
    padding: 8px 14px;
    border-radius: 6px;
    cursor: pointer;
    font-size: 14px;
}
button:disabled { background: #475569; cursor: not-allowed; }
button.secondary { background: #334155; }
button.active { background: #1d4ed8; box-shadow: 0 0 0 2px #93c5fd inset; }
input, select {
    background: #1e293b;
    color: #e2e8f0;
    border: 1px solid #334155;
    border-radius: 6px;
    padding: 8px 10px;
    font-size: 14px;
}
.landing { max-width: 960px; margin: 0 auto; padding: 60px 20px; text-align: center; }
.landing h1 { font-size: 44px; margin-bottom: 12px; }
.features { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 40px; }
.auth-page { display: flex; justify-content: center; align-items: center; min-height: 100vh; }
.auth-card {
    width: 380px;
    background: #1e293b;
    border-radius: 12px;
    padding: 28px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}
.auth-card h2 { margin: 0 0 4px 0; }
.row { display: flex; gap: 8px; align-items: center; }
.otp-inputs { display: flex; gap: 8px; justify-content: center; }
.otp-inputs input { width: 40px; height: 48px; text-align: center; font-size: 22px; }
.banner { padding: 10px 12px; border-radius: 6px; font-size: 14px; }
.banner.error { background: rgba(239, 68, 68, 0.15); color: #fca5a5; }
.banner.success { background: rgba(34, 197, 94, 0.15); color: #86efac; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 220px; background: #111827; padding: 20px 12px; display: flex; flex-direction: column; gap: 6px; }
.sidebar a { padding: 8px 12px; border-radius: 6px; color: #cbd5e1; }
.sidebar a.active { background: #1e3a8a; color: white; }
.content { flex: 1; padding: 24px; display: flex; flex-direction: column; gap: 20px; }
.topbar { display: flex; justify-content: space-between; align-items: center; }
.badge { padding: 2px 8px; border-radius: 999px; font-size: 12px; background: #334155; }
.badge.online { background: #166534; }
.badge.offline { background: #7f1d1d; }
.cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.card { background: #1e293b; border-radius: 10px; padding: 16px; }
.card .value { font-size: 24px; font-weight: 700; }
.panel { background: #1e293b; border-radius: 10px; padding: 16px; display: flex; flex-direction: column; gap: 12px; }
table { width: 100%; border-collapse: collapse; font-size: 14px; }
th, td { text-align: left; padding: 8px; border-bottom: 1px solid #334155; }
.tone-positive { color: #4ade80; }
.tone-negative { color: #f87171; }
.tone-neutral { color: #94a3b8; }
.tier-excellent { color: #4ade80; }
.tier-good { color: #60a5fa; }
.tier-fair { color: #facc15; }
.tier-poor { color: #f87171; }
.severity-critical { border-left: 4px solid #ef4444; }
.severity-high { border-left: 4px solid #f97316; }
.severity-medium { border-left: 4px solid #eab308; }
.severity-low { border-left: 4px solid #3b82f6; }
.alert-item { background: #1e293b; border-radius: 8px; padding: 12px 16px; }
.alert-item.unread { background: #1e3a5f; }
.action-buy { color: #4ade80; font-weight: 700; }
.action-sell { color: #f87171; font-weight: 700; }
.action-hold { color: #facc15; font-weight: 700; }
.trend-bar { height: 10px; border-radius: 4px; background: #3b82f6; }
.loading { color: #94a3b8; font-style: italic; }
.log-panel {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    max-height: 220px;
    background: rgba(0, 0, 0, 0.85);
    font-family: 'Courier New', monospace;
    font-size: 11px;
    overflow-y: auto;
    padding: 6px 10px;
}
.log-toggle { position: fixed; bottom: 10px; right: 10px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_buffer_drops_oldest() {
        let mut lines = Vec::new();
        for i in 0..105 {
            push_bounded(&mut lines, i.to_string(), LOG_CAPACITY);
        }
        assert_eq!(lines.len(), LOG_CAPACITY);
        assert_eq!(lines.first().map(String::as_str), Some("5"));
        assert_eq!(lines.last().map(String::as_str), Some("104"));
    }
}
