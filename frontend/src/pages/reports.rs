use leptos::prelude::*;
use leptos::task::spawn_local;
use seva_kendra::notify::Notice;
use seva_kendra_shared::report::{DateRange, OverviewReport};

use crate::api;
use crate::components::layout::AppShell;
use crate::components::report_tables::OverviewTables;
use crate::notify::use_notices;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let notices = use_notices();
    let range = RwSignal::new(DateRange::default());
    let report = RwSignal::new(OverviewReport::default());
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        let selected = range.get();
        loading.set(true);
        spawn_local(async move {
            match api::reports().overview(selected).await {
                Ok(loaded) => {
                    // A newer range may have been selected meanwhile.
                    if range.try_get_untracked() == Some(selected) {
                        let _ = report.try_set(loaded);
                    }
                }
                Err(e) => notices.push_opt(Notice::from_error("Failed to load report", &e)),
            }
            let _ = loading.try_set(false);
        });
    });

    view! {
        <AppShell title="Reports">
            <div class="flex items-center justify-between">
                <p class="text-base-content/70">"Organisation-wide activity for the selected period"</p>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        if let Some(r) = DateRange::from_slug(&event_target_value(&ev)) {
                            range.set(r);
                        }
                    }
                >
                    {DateRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.slug() selected=move || range.get() == r>{r.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-10">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
            >
                <Show
                    when=move || report.with(|r| !r.sections.is_empty())
                    fallback=|| view! { <p class="text-center text-base-content/50 py-10">"No report data for this period"</p> }
                >
                    <OverviewTables report=report />
                </Show>
            </Show>
        </AppShell>
    }
}
