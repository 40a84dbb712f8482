use leptos::prelude::*;
use leptos::task::spawn_local;
use seva_kendra::api::DashboardData;
use seva_kendra::notify::Notice;
use seva_kendra_shared::dashboard::{format_count, percent};
use seva_kendra_shared::date::display_date;
use seva_kendra_shared::report::DateRange;
use seva_kendra_shared::schema::Section;

use crate::api;
use crate::components::layout::AppShell;
use crate::components::report_tables::OverviewTables;
use crate::notify::use_notices;

#[component]
fn StatCard(title: &'static str, #[prop(into)] value: Signal<u64>, class: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", class)>{move || format_count(value.get())}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let notices = use_notices();
    let data = RwSignal::new(DashboardData::default());
    let loading = RwSignal::new(true);
    let range = RwSignal::new(DateRange::default());

    let load = move || {
        loading.set(true);
        let range = range.get_untracked();
        spawn_local(async move {
            match api::dashboard().load(range).await {
                Ok(loaded) => {
                    let failed = loaded.modules.failed().count();
                    if failed > 0 {
                        notices.push(Notice::info(format!("{} module counts could not be loaded", failed)));
                    }
                    let _ = data.try_set(loaded);
                }
                Err(e) => {
                    seva_kendra::log_error!("Dashboard: {}", e);
                    notices.push_opt(Notice::from_error("Failed to load dashboard data", &e));
                }
            }
            let _ = loading.try_set(false);
        });
    };
    Effect::new(move |_| load());

    let overview = move |f: fn(&DashboardData) -> u64| Signal::derive(move || data.with(f));
    let distribution = move || data.with(|d| d.modules.distribution());
    let report = Signal::derive(move || data.with(|d| d.report.clone().unwrap_or_default()));

    view! {
        <AppShell title="Dashboard">
            <div class="flex items-center justify-between">
                <p class="text-base-content/70">"Programme overview across all modules"</p>
                <div class="flex gap-2">
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            if let Some(r) = DateRange::from_slug(&event_target_value(&ev)) {
                                range.set(r);
                                load();
                            }
                        }
                    >
                        {DateRange::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.slug() selected=move || range.get() == r>{r.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn-sm" disabled=move || loading.get() on:click=move |_| load()>
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard title="Total Beneficiaries" value=overview(|d| d.overview.total_beneficiaries) class="text-primary" />
                <StatCard title="Active Cases" value=overview(|d| d.overview.active_cases) class="text-info" />
                <StatCard title="Pending Legal Aid" value=overview(|d| d.overview.pending_legal_aid) class="text-warning" />
                <StatCard title="Completed This Month" value=overview(|d| d.overview.completed_this_month) class="text-success" />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Module Distribution"</h3>
                        {move || {
                            let rows = distribution();
                            let total: u64 = rows.iter().map(|(_, n)| n).sum();
                            rows.into_iter()
                                .map(|(section, count)| {
                                    let share = percent(count, total);
                                    view! {
                                        <div>
                                            <div class="flex justify-between text-sm">
                                                <span>{section.label()}</span>
                                                <span>{format!("{} ({}%)", format_count(count), share)}</span>
                                            </div>
                                            <progress class="progress progress-primary w-full" value=share.to_string() max="100"></progress>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Recent Activity"</h3>
                        <Show
                            when=move || data.with(|d| !d.activities.is_empty())
                            fallback=|| view! { <p class="text-base-content/50">"No recent activity"</p> }
                        >
                            <ul class="space-y-2">
                                <For
                                    each=move || data.with(|d| d.activities.clone())
                                    key=|a| a.id.clone()
                                    children=|activity| {
                                        let when = display_date(
                                            activity.timestamp.as_ref().map(|t| serde_json::Value::String(t.clone())).as_ref(),
                                        );
                                        view! {
                                            <li class="flex items-start gap-2">
                                                <span class="badge badge-outline badge-sm">{activity.badge()}</span>
                                                <div>
                                                    <div>{activity.description.clone()}</div>
                                                    <div class="text-xs text-base-content/50">{when}</div>
                                                </div>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Records by Programme"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {[Section::Education, Section::Health, Section::SocialJustice]
                            .into_iter()
                            .map(|section| view! {
                                <div>
                                    <h4 class="font-semibold mb-2">{section.label()}</h4>
                                    <ul class="text-sm space-y-1">
                                        {section
                                            .categories()
                                            .map(|category| {
                                                let count = move || data.with(|d| {
                                                    let failed = d.modules.failed().any(|c| c == category);
                                                    if failed { "-".to_string() } else { format_count(d.modules.count(category)) }
                                                });
                                                view! {
                                                    <li class="flex justify-between">
                                                        <span>{category.schema().title}</span>
                                                        <span class="font-mono">{count}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <Show when=move || data.with(|d| d.report.is_some())>
                <OverviewTables report=report />
            </Show>
        </AppShell>
    }
}
