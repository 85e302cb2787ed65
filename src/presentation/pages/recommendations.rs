use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::InsightsUseCases,
    config::config,
    domain::{
        formatting::{ScoreTier, format_currency, format_ratio},
        recommendations::{ActionFilter, Recommendation, RecommendationStats, filter},
        sentiment::SentimentScore,
    },
    presentation::layout::Loading,
};

use super::demo_feeds;

fn action_title(action: ActionFilter) -> &'static str {
    match action {
        ActionFilter::All => "All",
        ActionFilter::Buy => "Buy",
        ActionFilter::Sell => "Sell",
        ActionFilter::Hold => "Hold",
    }
}

fn recommendation_card(rec: Recommendation) -> impl IntoView {
    let sentiment = SentimentScore::new(rec.sentiment);
    view! {
        <div class="card">
            <div class="row" style="justify-content: space-between">
                <h3>{rec.symbol}</h3>
                <span class=rec.action.css_class()>{rec.action.to_string().to_uppercase()}</span>
            </div>
            <p>{rec.reasoning}</p>
            <div class="row" style="gap: 16px">
                <span class=ScoreTier::for_score(rec.confidence).css_class()>
                    {format!("Confidence {}", format_ratio(rec.confidence))}
                </span>
                <span class=sentiment.tone().css_class()>{format!("Sentiment {} ({})", sentiment, sentiment.label())}</span>
                {rec.price.map(|p| view! { <span>{format!("Price {}", format_currency(p))}</span> })}
                {rec.price_target.map(|t| view! { <span>{format!("Target {}", format_currency(t))}</span> })}
            </div>
            <div class="tone-neutral">{rec.timestamp}</div>
        </div>
    }
}

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let all = create_rw_signal(None::<Vec<Recommendation>>);
    let action = create_rw_signal(ActionFilter::default());
    let (search, set_search) = create_signal(String::new());

    spawn_local(async move {
        let feeds = demo_feeds();
        all.set(Some(feeds.recommendations().await));
    });

    let stats = move || all.with(|list| RecommendationStats::from_slice(list.as_deref().unwrap_or_default()));
    let visible = move || all.with(|list| list.as_deref().map(|l| filter(l, action.get(), &search.get())));

    view! {
        <div class="cards">
            <div class="card">
                <div class="tone-neutral">"Total"</div>
                <div class="value">{move || stats().total}</div>
            </div>
            <div class="card">
                <div class="tone-neutral">"Buy / Hold / Sell"</div>
                <div class="value">
                    {move || {
                        let s = stats();
                        format!("{} / {} / {}", s.buy, s.hold, s.sell)
                    }}
                </div>
            </div>
            <div class="card">
                <div class="tone-neutral">"Avg confidence"</div>
                <div class="value">{move || format_ratio(stats().avg_confidence)}</div>
            </div>
        </div>
        <div class="panel">
            <div class="row" style="justify-content: space-between">
                <div class="row">
                    {ActionFilter::iter()
                        .map(|f| {
                            view! {
                                <button
                                    class=move || if action.get() == f { "active" } else { "secondary" }
                                    on:click=move |_| action.set(f)
                                >
                                    {action_title(f)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    placeholder="Search symbol..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>
            {move || match visible() {
                None => view! { <Loading what="recommendations"/> }.into_view(),
                Some(list) if list.is_empty() => {
                    view! { <div class="loading">"No recommendations match"</div> }.into_view()
                }
                Some(list) => list.into_iter().map(recommendation_card).collect_view(),
            }}
        </div>
        <LiveFeed/>
        <InsightTools/>
    }
}

/// 🤖 Recommendations straight from the service
#[component]
fn LiveFeed() -> impl IntoView {
    let (symbol, set_symbol) = create_signal(String::new());
    let results = create_rw_signal(None::<Vec<Recommendation>>);
    let (error, set_error) = create_signal(None::<String>);
    let busy = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        set_error.set(None);
        let wanted = symbol.get_untracked();
        crate::run_with_api!(|api| async move {
            match InsightsUseCases::new(&api).recommendations(&wanted).await {
                Ok(list) => results.set(Some(list)),
                Err(e) => set_error.set(Some(e.message)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="panel">
            <h3>"Live feed"</h3>
            <form class="row" on:submit=on_submit>
                <input
                    placeholder="Symbol (blank for all)"
                    prop:value=symbol
                    on:input=move |ev| set_symbol.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Fetch"</button>
            </form>
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}
            {move || {
                results.get().map(|list| {
                    if list.is_empty() {
                        view! { <div class="loading">"The service has no recommendations yet"</div> }.into_view()
                    } else {
                        list.into_iter().map(recommendation_card).collect_view()
                    }
                })
            }}
        </div>
    }
}

/// Social search, scraper triggers and the text analyzer
#[component]
fn InsightTools() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (text, set_text) = create_signal(String::new());
    let posts = create_rw_signal(Vec::<String>::new());
    let (output, set_output) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);

    let report = move |result: Result<String, String>| match result {
        Ok(message) => {
            set_error.set(None);
            set_output.set(Some(message));
        }
        Err(message) => set_error.set(Some(message)),
    };

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        crate::run_with_api!(|api| async move {
            match InsightsUseCases::new(&api).search_posts(&q, config().twitter_max_results).await {
                Ok(found) => {
                    report(Ok(format!("{} posts for \"{}\"", found.len(), q)));
                    posts.set(found);
                }
                Err(e) => report(Err(e.message)),
            }
        });
    };

    let on_analyze = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let body = text.get_untracked();
        crate::run_with_api!(|api| async move {
            let result = InsightsUseCases::new(&api).analyze_text(&body).await;
            report(result.map(|v| v.to_string()).map_err(|e| e.message));
        });
    };

    let scrape_reddit = move |_| {
        crate::run_with_api!(|api| async move {
            report(InsightsUseCases::new(&api).trigger_reddit_scraper().await.map_err(|e| e.message));
        });
    };

    let scrape_twitter = move |_| {
        crate::run_with_api!(|api| async move {
            report(InsightsUseCases::new(&api).trigger_twitter_scraper().await.map_err(|e| e.message));
        });
    };

    view! {
        <div class="panel">
            <h3>"Insight tools"</h3>
            <form class="row" on:submit=on_search>
                <input
                    placeholder="Search social posts ($TSLA, bitcoin...)"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <form class="row" on:submit=on_analyze>
                <input
                    placeholder="Text to analyze"
                    prop:value=text
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button type="submit">"Analyze"</button>
            </form>
            <div class="row">
                <button class="secondary" on:click=scrape_reddit>"Run Reddit scraper"</button>
                <button class="secondary" on:click=scrape_twitter>"Run Twitter scraper"</button>
            </div>
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}
            {move || output.get().map(|msg| view! { <div class="banner success">{msg}</div> })}
            <ul>
                {move || posts.get().into_iter().map(|post| view! { <li>{post}</li> }).collect_view()}
            </ul>
        </div>
    }
}
