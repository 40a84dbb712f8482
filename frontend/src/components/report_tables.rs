use leptos::prelude::*;
use seva_kendra_shared::report::{OverviewReport, ReportData};

/// Key/value tables for each overview section.
#[component]
pub fn OverviewTables(#[prop(into)] report: Signal<OverviewReport>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <For
                each=move || report.with(|r| r.sections.clone())
                key=|(title, _)| title.clone()
                children=|(title, rows)| view! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title text-base">{title}</h3>
                            <table class="table table-sm">
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <tr>
                                                <td class="text-base-content/70">{label}</td>
                                                <td class="text-right font-medium">{value}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            />
        </div>
    }
}

#[component]
pub fn ReportPreview(#[prop(into)] report: Signal<ReportData>) -> impl IntoView {
    let summary = move || report.with(|r| r.summary.clone());
    view! {
        <div class="stats shadow w-full bg-base-100">
            <div class="stat">
                <div class="stat-title">"Total Records"</div>
                <div class="stat-value text-primary">{move || summary().total_records}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Active"</div>
                <div class="stat-value text-success">{move || summary().active}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Pending"</div>
                <div class="stat-value text-warning">{move || summary().pending}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Completion Rate"</div>
                <div class="stat-value">{move || format!("{:.0}%", summary().completion_rate)}</div>
            </div>
        </div>

        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Ward"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = report.with(|r| r.rows());
                        if rows.is_empty() {
                            return view! {
                                <tr><td colspan="4" class="text-center text-base-content/50">"No records match this report"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{row.ward}</td>
                                    <td><span class="badge badge-ghost">{row.status}</span></td>
                                    <td>{row.date}</td>
                                </tr>
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
