use leptos::*;

use crate::{
    application::{MarketUseCases, TrendingBoard},
    config::config,
    domain::{
        formatting::{format_currency, format_number, format_percent},
        market::{AssetClass, AssetRow, CompanyProfile, MarketOverview, PriceLookup, parse_percent},
        sentiment::{HeadlineStat, SentimentPoint, Tone},
    },
    presentation::layout::Loading,
    view_state::{AssetTableView, PAGE_SIZE_CHOICES, page_count},
};

use super::demo_feeds;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <HeadlineCards/>
        <SentimentTrend/>
        <AssetTable/>
        <TrendingPanel/>
        <SymbolLookup/>
    }
}

#[component]
fn HeadlineCards() -> impl IntoView {
    let stats = create_rw_signal(None::<Vec<HeadlineStat>>);
    spawn_local(async move {
        let feeds = demo_feeds();
        stats.set(Some(feeds.headline_stats().await));
    });

    view! {
        <div class="cards">
            {move || match stats.get() {
                None => view! { <Loading what="stats"/> }.into_view(),
                Some(stats) => stats
                    .into_iter()
                    .map(|stat| {
                        let tone = if stat.positive { Tone::Positive } else { Tone::Negative };
                        view! {
                            <div class="card">
                                <div class="tone-neutral">{stat.name}</div>
                                <div class="value">{stat.value}</div>
                                <div class=tone.css_class()>{stat.change}</div>
                            </div>
                        }
                    })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn SentimentTrend() -> impl IntoView {
    let points = create_rw_signal(None::<Vec<SentimentPoint>>);
    spawn_local(async move {
        let feeds = demo_feeds();
        points.set(Some(feeds.sentiment_trend().await));
    });

    view! {
        <div class="panel">
            <h3>"Sentiment trend (24h)"</h3>
            {move || match points.get() {
                None => view! { <Loading what="trend"/> }.into_view(),
                Some(points) => {
                    let peak = points.iter().map(|p| p.mentions).max().unwrap_or(1).max(1);
                    view! {
                        <table>
                            <tr><th>"Time"</th><th>"Sentiment"</th><th>"Mentions"</th><th style="width: 40%"></th></tr>
                            {points
                                .into_iter()
                                .map(|p| {
                                    let width = format!("width: {}%", p.mentions * 100 / peak);
                                    view! {
                                        <tr>
                                            <td>{p.time}</td>
                                            <td class=p.sentiment.tone().css_class()>
                                                {format!("{} {}", p.sentiment, p.sentiment.label())}
                                            </td>
                                            <td>{p.mentions}</td>
                                            <td><div class="trend-bar" style=width></div></td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </table>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

fn asset_row_view(row: AssetRow) -> impl IntoView {
    let tone = Tone::for_change(row.change).css_class();
    view! {
        <tr>
            <td><b>{row.symbol.to_string()}</b></td>
            <td>{format_currency(row.price)}</td>
            <td class=tone>{format_currency(row.change)}</td>
            <td class=tone>{format_percent(row.change_percent)}</td>
            <td>{format_number(row.volume)}</td>
        </tr>
    }
}

/// 📊 Live market overview with tabs, symbol filter and pagination
#[component]
fn AssetTable() -> impl IntoView {
    let overview = create_rw_signal(MarketOverview::default());
    let table = create_rw_signal(AssetTableView::new(config().default_page_size));
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    crate::run_with_api!(|api| async move {
        match MarketUseCases::new(&api).load_overview().await {
            Ok(data) => overview.set(data),
            Err(e) => set_error.set(Some(e.message)),
        }
        set_loading.set(false);
    });

    let filtered_len = move || overview.with(|o| table.with(|t| t.filtered_rows(o).len()));
    let rows = move || overview.with(|o| table.with(|t| t.visible_rows(o)));

    let tab_button = move |class: AssetClass| {
        view! {
            <button
                class=move || if table.with(|t| t.tab == class) { "active" } else { "secondary" }
                on:click=move |_| table.update(|t| t.set_tab(class))
            >
                {class.title()}
            </button>
        }
    };

    view! {
        <div class="panel">
            <div class="row" style="justify-content: space-between">
                <div class="row">{tab_button(AssetClass::Stocks)} {tab_button(AssetClass::Crypto)}</div>
                <div class="row">
                    <input
                        placeholder="Filter symbols..."
                        prop:value=move || table.with(|t| t.filter.clone())
                        on:input=move |ev| table.update(|t| t.set_filter(&event_target_value(&ev)))
                    />
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            table.update(|t| t.set_page_size(size));
                        }
                    }>
                        {PAGE_SIZE_CHOICES
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected=move || table.with(|t| t.page_size == size)>
                                        {format!("{} / page", size)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <Loading what="market data"/> }>
                <table>
                    <tr>
                        <th>"Symbol"</th>
                        <th>"Price"</th>
                        <th>"Change"</th>
                        <th>"Change %"</th>
                        <th>"Volume"</th>
                    </tr>
                    {move || rows().into_iter().map(asset_row_view).collect_view()}
                </table>
                <Show when=move || filtered_len() == 0>
                    <div class="loading">"No symbols match the filter"</div>
                </Show>
            </Show>
            <div class="row">
                <button
                    class="secondary"
                    disabled=move || table.with(|t| t.page <= 1)
                    on:click=move |_| table.update(AssetTableView::prev_page)
                >
                    "← Prev"
                </button>
                <span>
                    {move || {
                        let pages = table.with(|t| page_count(filtered_len(), t.page_size));
                        format!("Page {} of {}", table.with(|t| t.page), pages)
                    }}
                </span>
                <button
                    class="secondary"
                    disabled=move || !table.with(|t| t.has_next(filtered_len()))
                    on:click=move |_| {
                        let len = filtered_len();
                        table.update(|t| t.next_page(len));
                    }
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TrendingPanel() -> impl IntoView {
    let board = create_rw_signal(None::<TrendingBoard>);
    let (error, set_error) = create_signal(None::<String>);

    crate::run_with_api!(|api| async move {
        match MarketUseCases::new(&api).trending().await {
            Ok(data) => board.set(Some(data)),
            Err(e) => set_error.set(Some(e.message)),
        }
    });

    view! {
        <div class="panel">
            <h3>"🔥 Trending"</h3>
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}
            {move || {
                board.get().map(|board| {
                    view! {
                        <div class="row" style="align-items: flex-start; gap: 24px">
                            <table>
                                <tr><th>"Stock"</th><th>"Price"</th><th>"Change %"</th></tr>
                                {board
                                    .stocks
                                    .into_iter()
                                    .map(|s| {
                                        let pct = parse_percent(&s.change_percent);
                                        view! {
                                            <tr>
                                                <td>{s.symbol.unwrap_or_default()}</td>
                                                <td>{format_currency(s.price)}</td>
                                                <td class=Tone::for_change(pct).css_class()>{format_percent(pct)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </table>
                            <table>
                                <tr><th>"Crypto"</th><th>"Price"</th><th>"24h"</th></tr>
                                {board
                                    .crypto
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <tr>
                                                <td>{c.symbol}</td>
                                                <td>{format_currency(c.price)}</td>
                                                <td class=Tone::for_change(c.change_24h).css_class()>
                                                    {format_percent(c.change_24h)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </table>
                        </div>
                    }
                })
            }}
        </div>
    }
}

fn profile_view(profile: CompanyProfile) -> impl IntoView {
    let employees = profile.employees_label();
    let details = [profile.sector, profile.industry, profile.country]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    view! {
        <div class="card">
            <h3>
                {profile.company_name.unwrap_or_default()}
                {profile.symbol.map(|s| format!(" ({})", s))}
            </h3>
            <p class="tone-neutral">{details}</p>
            <p>{profile.description.unwrap_or_default()}</p>
            <p>
                {profile.market_cap.map(|cap| format!("Market cap: {}", format_number(cap)))}
                {employees.map(|e| format!(" · Employees: {}", e))}
                {profile.ceo.filter(|c| !c.is_empty()).map(|c| format!(" · CEO: {}", c))}
                {profile.website.map(|url| view! { <a href=url.clone() target="_blank">{format!(" · {}", url)}</a> })}
            </p>
        </div>
    }
}

/// 🔎 Price and company profile for one symbol
#[component]
fn SymbolLookup() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let quote = create_rw_signal(None::<PriceLookup>);
    let profile = create_rw_signal(None::<CompanyProfile>);
    let (error, set_error) = create_signal(None::<String>);
    let busy = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        set_error.set(None);
        quote.set(None);
        profile.set(None);
        let symbol = query.get_untracked();
        crate::run_with_api!(|api| async move {
            let market = MarketUseCases::new(&api);
            match market.lookup_price(&symbol).await {
                Ok(found) => {
                    let is_stock = found.asset_class() == AssetClass::Stocks;
                    quote.set(Some(found));
                    // crypto has no company profile
                    if is_stock {
                        match market.company_profile(&symbol).await {
                            Ok(p) => profile.set(Some(p)),
                            Err(e) => set_error.set(Some(e.message)),
                        }
                    }
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="panel">
            <h3>"Symbol lookup"</h3>
            <form class="row" on:submit=on_submit>
                <input
                    placeholder="AAPL, BTC..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Look up"</button>
            </form>
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}
            {move || {
                quote.get().map(|q| {
                    let row = q.to_row();
                    view! {
                        <div class="card">
                            <div class="tone-neutral">{format!("{} · {}", row.symbol, q.asset_class().title())}</div>
                            <div class="value">{format_currency(q.price())}</div>
                            <div class=Tone::for_change(row.change).css_class()>
                                {format!("{} ({})", format_currency(row.change), format_percent(row.change_percent))}
                            </div>
                        </div>
                    }
                })
            }}
            {move || profile.get().map(profile_view)}
        </div>
    }
}
