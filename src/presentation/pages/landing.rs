use leptos::*;

use crate::{global_state::navigate, presentation::routes::Route};

const FEATURES: [(&str, &str, &str); 3] = [
    ("📊", "Real-time Sentiment", "Track how Twitter and Reddit feel about every ticker, hour by hour."),
    ("👥", "Influencer Tracking", "Rank voices by credibility, reach and prediction accuracy."),
    ("🤖", "AI Recommendations", "Buy, hold and sell calls backed by sentiment and price action."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"Market sentiment, decoded"</h1>
            <p class="tone-neutral">
                "Social signals, influencer moves and AI insights for stocks and crypto in one dashboard."
            </p>
            <div class="row" style="justify-content: center; margin-top: 24px;">
                <button on:click=move |_| navigate(Route::Register)>"Get started"</button>
                <button class="secondary" on:click=move |_| navigate(Route::Login)>"Sign in"</button>
            </div>
            <div class="features">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, text)| {
                        view! {
                            <div class="card">
                                <div class="value">{icon}</div>
                                <h3>{title}</h3>
                                <p class="tone-neutral">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
