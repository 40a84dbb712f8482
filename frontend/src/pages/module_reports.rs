use leptos::prelude::*;
use leptos::task::spawn_local;
use seva_kendra::api::ModuleReportState;
use seva_kendra::notify::Notice;
use seva_kendra_shared::report::{ExportFormat, ReportFilterKind, ReportModule, ReportType};

use crate::api;
use crate::components::layout::AppShell;
use crate::components::report_tables::ReportPreview;
use crate::notify::use_notices;
use crate::web::download;

#[component]
pub fn ModuleReportsPage() -> impl IntoView {
    let notices = use_notices();
    let state = RwSignal::new(ModuleReportState::default());

    let module = move || state.with(|s| s.query.module);
    let edit_query = move |f: Box<dyn FnOnce(&mut ModuleReportState)>| {
        state.update(|s| {
            f(s);
            // A changed selector invalidates the preview.
            s.report = None;
        })
    };

    let generate = move |_| {
        if state.with_untracked(|s| s.generating) {
            return;
        }
        let query = state.with_untracked(|s| s.query.clone());
        if let Err(e) = query.validate() {
            notices.push(Notice::error(e.message()));
            return;
        }
        state.update(|s| s.generating = true);
        spawn_local(async move {
            let result = api::reports().generate(&query).await;
            let notice = match &result {
                Ok(_) => Some(Notice::success("Report generated successfully")),
                Err(e) => Notice::from_error("Failed to generate report", e),
            };
            // Selectors changed meanwhile; the result no longer matches the form
            if state.try_update(|s| s.finish_generate(&query, result)) == Some(true) {
                notices.push_opt(notice);
            }
        });
    };

    let export = move |format: ExportFormat| {
        let checked = state.with_untracked(|s| {
            if s.exporting.is_some() {
                return None;
            }
            Some(s.check_export().map(|_| s.query.clone()))
        });
        let query = match checked {
            None => return,
            Some(Err(e)) => {
                notices.push(Notice::error(e.user_message()));
                return;
            }
            Some(Ok(query)) => query,
        };
        state.update(|s| s.exporting = Some(format));
        spawn_local(async move {
            match api::reports().export(&query, format).await {
                Ok(file) => match download::save(&file) {
                    Ok(()) => notices.push(Notice::success(format!("Report exported as {}", format.label()))),
                    Err(e) => {
                        seva_kendra::log_error!("Saving {} failed: {}", file.filename, e);
                        notices.push(Notice::error(format!("Failed to export {} report", format.label())));
                    }
                },
                Err(e) => notices.push_opt(Notice::from_error(&format!("Failed to export {} report", format.label()), &e)),
            }
            let _ = state.try_update(|s| s.exporting = None);
        });
    };

    let filters_view = move || {
        let Some(m) = module() else {
            return ().into_any();
        };
        m.filters()
            .iter()
            .map(|filter| {
                let param = filter.param;
                let current = move || state.with(|s| s.query.filters.get(param).cloned().unwrap_or_default());
                let on_change = move |ev: leptos::ev::Event| {
                    let value = event_target_value(&ev);
                    edit_query(Box::new(move |s| {
                        s.query.filters.insert(param.to_string(), value);
                    }));
                };
                let control = match filter.kind {
                    ReportFilterKind::Text => view! {
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder=filter.label
                            prop:value=current
                            on:input=on_change
                        />
                    }
                    .into_any(),
                    ReportFilterKind::Select(options) => view! {
                        <select class="select select-bordered select-sm" prop:value=current on:change=on_change>
                            <option value="all">"All"</option>
                            {options
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    }
                    .into_any(),
                };
                view! {
                    <label class="form-control">
                        <span class="label-text">{filter.label}</span>
                        {control}
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    let export_button = move |format: ExportFormat| {
        view! {
            <button
                class="btn btn-outline btn-sm"
                disabled=move || state.with(|s| s.report.is_none() || s.exporting.is_some())
                on:click=move |_| export(format)
            >
                <Show when=move || state.with(|s| s.exporting == Some(format))>
                    <span class="loading loading-spinner loading-xs"></span>
                </Show>
                {format!("Export {}", format.label())}
            </button>
        }
    };

    view! {
        <AppShell title="Module Reports">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h3 class="card-title">"Report Parameters"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <label class="form-control">
                            <span class="label-text">"Module"</span>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| {
                                    let m = ReportModule::from_slug(&event_target_value(&ev));
                                    edit_query(Box::new(move |s| s.query.set_module(m)));
                                }
                            >
                                <option value="" selected=move || module().is_none()>"Select module"</option>
                                {ReportModule::ALL
                                    .into_iter()
                                    .map(|m| view! { <option value=m.slug()>{m.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Report Type"</span>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| {
                                    let t = ReportType::from_slug(&event_target_value(&ev));
                                    edit_query(Box::new(move |s| s.query.report_type = t));
                                }
                            >
                                <option value="">"Select type"</option>
                                {ReportType::ALL
                                    .into_iter()
                                    .map(|t| view! { <option value=t.slug()>{t.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Category"</span>
                            <select
                                class="select select-bordered"
                                disabled=move || module().is_none()
                                prop:value=move || state.with(|s| s.query.category.clone())
                                on:change=move |ev| {
                                    let category = event_target_value(&ev);
                                    edit_query(Box::new(move |s| s.query.category = category));
                                }
                            >
                                <option value="">"Select category"</option>
                                {move || {
                                    module()
                                        .map(|m| m.categories())
                                        .unwrap_or_default()
                                        .iter()
                                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Start Date"</span>
                            <input
                                type="date"
                                class="input input-bordered"
                                prop:value=move || state.with(|s| s.query.start_date.clone())
                                on:change=move |ev| {
                                    let date = event_target_value(&ev);
                                    edit_query(Box::new(move |s| s.query.start_date = date));
                                }
                            />
                        </label>
                        <label class="form-control">
                            <span class="label-text">"End Date"</span>
                            <input
                                type="date"
                                class="input input-bordered"
                                prop:value=move || state.with(|s| s.query.end_date.clone())
                                on:change=move |ev| {
                                    let date = event_target_value(&ev);
                                    edit_query(Box::new(move |s| s.query.end_date = date));
                                }
                            />
                        </label>
                    </div>

                    <Show when=move || module().is_some()>
                        <div class="divider my-0">"Filters"</div>
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">{filters_view}</div>
                    </Show>

                    <div class="card-actions justify-end">
                        {export_button(ExportFormat::Pdf)}
                        {export_button(ExportFormat::Excel)}
                        <button
                            class="btn btn-primary btn-sm"
                            disabled=move || state.with(|s| s.generating)
                            on:click=generate
                        >
                            <Show when=move || state.with(|s| s.generating)>
                                <span class="loading loading-spinner loading-xs"></span>
                            </Show>
                            "Generate Report"
                        </button>
                    </div>
                </div>
            </div>

            <Show
                when=move || state.with(|s| s.report.is_some())
                fallback=|| view! {
                    <div class="text-center text-base-content/50 py-10">
                        "Choose a module, category and date range, then generate a report"
                    </div>
                }
            >
                <ReportPreview report=Signal::derive(move || state.with(|s| s.report.clone().unwrap_or_default())) />
            </Show>
        </AppShell>
    }
}
