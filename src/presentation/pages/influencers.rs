use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    domain::{
        formatting::{ScoreTier, format_number, format_ratio},
        influencers::{Influencer, InfluencerSort, InfluencerStats, sorted},
    },
    presentation::layout::Loading,
};

use super::demo_feeds;

#[component]
pub fn InfluencersPage() -> impl IntoView {
    let influencers = create_rw_signal(None::<Vec<Influencer>>);
    let sort = create_rw_signal(InfluencerSort::default());

    spawn_local(async move {
        let feeds = demo_feeds();
        influencers.set(Some(feeds.influencers().await));
    });

    let ranked = move || influencers.with(|list| list.as_deref().map(|l| sorted(l, sort.get())));
    let stats = move || influencers.with(|list| InfluencerStats::from_slice(list.as_deref().unwrap_or_default()));

    view! {
        <div class="cards">
            <div class="card">
                <div class="tone-neutral">"Tracked influencers"</div>
                <div class="value">{move || stats().total}</div>
            </div>
            <div class="card">
                <div class="tone-neutral">"Avg credibility"</div>
                <div class="value">{move || format_ratio(stats().avg_credibility)}</div>
            </div>
            <div class="card">
                <div class="tone-neutral">"Avg accuracy"</div>
                <div class="value">{move || format_ratio(stats().avg_accuracy)}</div>
            </div>
        </div>
        <div class="panel">
            <div class="row">
                <span>"Sort by"</span>
                {InfluencerSort::iter()
                    .map(|key| {
                        view! {
                            <button
                                class=move || if sort.get() == key { "active" } else { "secondary" }
                                on:click=move |_| sort.set(key)
                            >
                                {key.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match ranked() {
                None => view! { <Loading what="influencers"/> }.into_view(),
                Some(list) => view! {
                    <table>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Platform"</th>
                            <th>"Followers"</th>
                            <th>"Credibility"</th>
                            <th>"Accuracy"</th>
                            <th>"Last active"</th>
                        </tr>
                        {list
                            .into_iter()
                            .enumerate()
                            .map(|(rank, i)| {
                                view! {
                                    <tr>
                                        <td>{rank + 1}</td>
                                        <td><b>{i.name}</b></td>
                                        <td>{i.platform.to_string()}</td>
                                        <td>{format_number(i.followers as f64)}</td>
                                        <td class=ScoreTier::for_score(i.credibility).css_class()>
                                            {format_ratio(i.credibility)}
                                        </td>
                                        <td class=ScoreTier::for_accuracy(i.accuracy).css_class()>
                                            {format_ratio(i.accuracy)}
                                        </td>
                                        <td>{i.last_active}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </table>
                }
                .into_view(),
            }}
        </div>
    }
}
