use leptos::*;

use crate::{
    domain::logging::{LogComponent, get_logger},
    global_state::{api_online, current_route, log_lines, log_paused, log_visible, navigate},
    presentation::routes::{DASHBOARD_NAV, Route},
};

/// Link that switches the hash route
#[component]
pub fn NavLink(route: Route, #[prop(into)] label: String) -> impl IntoView {
    let target = route.clone();
    let href = route.to_hash();
    let is_active = move || current_route().with(|current| *current == route);
    view! {
        <a
            href=href
            class:active=is_active
            on:click=move |ev| {
                ev.prevent_default();
                navigate(target.clone());
            }
        >
            {label}
        </a>
    }
}

/// Side navigation and top bar around the four data views
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let title = move || current_route().with(|route| route.title());
    view! {
        <div class="shell">
            <nav class="sidebar">
                <h3>"📈 Sentiment"</h3>
                {DASHBOARD_NAV
                    .into_iter()
                    .map(|route| {
                        let label = route.title();
                        view! { <NavLink route=route label=label/> }
                    })
                    .collect_view()}
                <div style="flex: 1"></div>
                <NavLink route=Route::Landing label="Sign out"/>
            </nav>
            <main class="content">
                <div class="topbar">
                    <h2>{title}</h2>
                    <ApiStatusBadge/>
                </div>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn ApiStatusBadge() -> impl IntoView {
    let status = api_online();
    let class = move || match status.get() {
        Some(true) => "badge online",
        Some(false) => "badge offline",
        None => "badge",
    };
    let text = move || match status.get() {
        Some(true) => "🟢 API online",
        Some(false) => "🔴 API offline",
        None => "⏳ Checking API...",
    };
    view! { <span class=class>{text}</span> }
}

/// Centered card used by every auth page
#[component]
pub fn AuthCard(#[prop(into)] title: String, #[prop(into)] subtitle: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>{title}</h2>
                <p class="tone-neutral">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

/// Error and success messages under a form
#[component]
pub fn StatusBanner(error: ReadSignal<Option<String>>, success: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}
        {move || success.get().map(|msg| view! { <div class="banner success">{msg}</div> })}
    }
}

#[component]
pub fn Loading(#[prop(into)] what: String) -> impl IntoView {
    view! { <div class="loading">{format!("Loading {}...", what)}</div> }
}

/// 🐛 In-app mirror of the domain logger
#[component]
pub fn LogPanel() -> impl IntoView {
    let logs = log_lines();
    let is_paused = log_paused();
    let visible = log_visible();

    view! {
        <button class="secondary log-toggle" on:click=move |_| visible.update(|v| *v = !*v)>
            {move || if visible.get() { "Hide logs" } else { "🐛 Logs" }}
        </button>
        <Show when=move || visible.get()>
            <div class="log-panel">
                <div class="row">
                    <button
                        class="secondary"
                        on:click=move |_| {
                            is_paused.update(|p| *p = !*p);
                            let state = if is_paused.get_untracked() { "🛑 Logging paused" } else { "▶️ Logging resumed" };
                            get_logger().info(LogComponent::Presentation("LogPanel"), state);
                        }
                    >
                        {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button
                        class="secondary"
                        on:click=move |_| {
                            logs.set(Vec::new());
                            get_logger().info(LogComponent::Presentation("LogPanel"), "🗑️ Log history cleared");
                        }
                    >
                        "🗑️ Clear"
                    </button>
                </div>
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, line)| (*i, line.clone())
                    children=|(_, line)| view! { <div>{line}</div> }
                />
            </div>
        </Show>
    }
}
