use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    domain::{
        alerts::{Alert, AlertBoard, AlertFilter, AlertKind},
        formatting::{format_currency, format_percent},
        logging::{LogComponent, get_logger},
        sentiment::SentimentScore,
    },
    presentation::layout::Loading,
};

use super::demo_feeds;

fn kind_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::SentimentSpike => "📈",
        AlertKind::PriceAlert => "💰",
        AlertKind::VolumeSpike => "📊",
        AlertKind::InfluencerMention => "📣",
    }
}

fn filter_title(filter: AlertFilter) -> &'static str {
    match filter {
        AlertFilter::All => "All",
        AlertFilter::Unread => "Unread",
        AlertFilter::Critical => "Critical",
    }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let board = create_rw_signal(None::<AlertBoard>);
    let filter = create_rw_signal(AlertFilter::default());

    spawn_local(async move {
        let feeds = demo_feeds();
        board.set(Some(AlertBoard::new(feeds.alerts().await)));
    });

    let mark_read = move |id: String| {
        board.update(|b| {
            if let Some(b) = b {
                if !b.mark_read(&id) {
                    get_logger().warn(LogComponent::Presentation("Alerts"), &format!("Unknown alert id {}", id));
                }
            }
        })
    };

    let counts = move || board.with(|b| b.as_ref().map(|b| (b.len(), b.unread_count(), b.critical_count())));

    let alert_view = move |alert: Alert| {
        let id = alert.id.clone();
        let class = format!("alert-item {}{}", alert.severity.css_class(), if alert.read { "" } else { " unread" });
        let details = [
            alert.symbol.clone(),
            alert.price.map(format_currency),
            alert.change_percent.map(format_percent),
            alert.sentiment.map(|s| format!("sentiment {}", SentimentScore::new(s))),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
        view! {
            <div class=class>
                <div class="row" style="justify-content: space-between">
                    <b>{format!("{} {}", kind_icon(alert.kind), alert.title)}</b>
                    <span class="badge">{alert.severity.to_string()}</span>
                </div>
                <p>{alert.description}</p>
                <div class="row" style="justify-content: space-between">
                    <span class="tone-neutral">{format!("{} · {}", details, alert.timestamp)}</span>
                    {(!alert.read).then(|| {
                        view! {
                            <button class="secondary" on:click=move |_| mark_read(id.clone())>
                                "Mark as read"
                            </button>
                        }
                    })}
                </div>
            </div>
        }
    };

    view! {
        <div class="panel">
            <div class="row" style="justify-content: space-between">
                <div class="row">
                    {AlertFilter::iter()
                        .map(|f| {
                            view! {
                                <button
                                    class=move || if filter.get() == f { "active" } else { "secondary" }
                                    on:click=move |_| filter.set(f)
                                >
                                    {filter_title(f)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="row">
                    <span class="tone-neutral">
                        {move || {
                            counts()
                                .map(|(total, unread, critical)| {
                                    format!("{} alerts · {} unread · {} critical", total, unread, critical)
                                })
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        disabled=move || counts().map_or(true, |(_, unread, _)| unread == 0)
                        on:click=move |_| board.update(|b| b.iter_mut().for_each(AlertBoard::mark_all_read))
                    >
                        "Mark all as read"
                    </button>
                </div>
            </div>
            {move || {
                let visible = board.with(|b| b.as_ref().map(|b| b.filtered(filter.get())));
                match visible {
                    None => view! { <Loading what="alerts"/> }.into_view(),
                    Some(list) if list.is_empty() => {
                        view! { <div class="loading">"No alerts match this filter"</div> }.into_view()
                    }
                    Some(list) => list.into_iter().map(alert_view).collect_view(),
                }
            }}
        </div>
    }
}
