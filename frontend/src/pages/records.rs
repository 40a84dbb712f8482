//! Generic list page shared by every record category.

use leptos::prelude::*;
use leptos::task::spawn_local;
use seva_kendra::api::FilterOptions;
use seva_kendra::listing::{DEFAULT_DEBOUNCE, ListState, SubmitCommand};
use seva_kendra_shared::record::Record;
use seva_kendra_shared::schema::RecordCategory;

use crate::api;
use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::components::data_table::DataTable;
use crate::components::filter_bar::FilterBar;
use crate::components::layout::AppShell;
use crate::components::pagination::PaginationControl;
use crate::components::record_dialog::RecordDialog;
use crate::notify::use_notices;
use crate::web::timer::use_debounce;

#[component]
pub fn RecordsPage(category: RecordCategory) -> impl IntoView {
    let schema = category.schema();
    let notices = use_notices();
    let state = RwSignal::new(ListState::new(schema, api::page_size()));
    let options = RwSignal::new(FilterOptions::default());

    // =========================================================
    // Loading
    // =========================================================

    let fetch = move || {
        let Some(query) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        spawn_local(async move {
            let result = api::records(category).get_all(&query).await;
            // A newer query is already in flight
            if state.try_with_untracked(|s| s.query() != query) != Some(false) {
                return;
            }
            let notice = state.try_update(|s| s.finish_fetch(result)).flatten();
            notices.push_opt(notice);
        });
    };
    let fetch_later = use_debounce(DEFAULT_DEBOUNCE, fetch);

    Effect::new(move |_| fetch());

    if schema.remote_filters {
        spawn_local(async move {
            match api::records(category).filter_options().await {
                Ok(found) => {
                    let _ = options.try_set(found);
                }
                Err(e) => seva_kendra::log_warn!("{}: filter options unavailable: {}", schema.title, e),
            }
        });
    }

    // =========================================================
    // Mutations
    // =========================================================

    let submit = Callback::new(move |_: ()| {
        let command = match state.try_update(|s| s.begin_submit()) {
            Some(Ok(command)) => command,
            Some(Err(notice)) => return notices.push_opt(notice),
            None => return,
        };
        spawn_local(async move {
            let api = api::records(category);
            let result = match &command {
                SubmitCommand::Create(values) => api.create(values).await,
                SubmitCommand::Update { id, values } => api.update(id, values).await,
            };
            if let Some(outcome) = state.try_update(|s| s.finish_submit(result)) {
                notices.push_opt(outcome.notice);
                if outcome.refetch {
                    fetch();
                }
            }
        });
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api::records(category).delete(&id).await;
            if let Some(outcome) = state.try_update(|s| s.finish_delete(result)) {
                notices.push_opt(outcome.notice);
                if outcome.refetch {
                    fetch();
                }
            }
        });
    });

    // =========================================================
    // View
    // =========================================================

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.set_search(&term));
        fetch_later();
    });
    let on_filter = Callback::new(move |(name, value): (String, String)| {
        state.update(|s| s.set_filter(&name, &value));
        fetch();
    });
    let on_clear = Callback::new(move |_: ()| {
        state.update(ListState::clear_filters);
        fetch();
    });
    let on_page = Callback::new(move |page: u32| {
        if state.try_update(|s| s.go_to_page(page)) == Some(true) {
            fetch();
        }
    });

    let records = Signal::derive(move || state.with(|s| s.records.clone()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let filters = Signal::derive(move || state.with(|s| s.filters.clone()));

    view! {
        <AppShell title=schema.title>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <div>
                            <h2 class="card-title">{schema.title}</h2>
                            <p class="text-base-content/70 text-sm">
                                {move || format!("{} records", state.with(|s| s.pagination.total))}
                            </p>
                        </div>
                        <button class="btn btn-primary" on:click=move |_| state.update(ListState::open_create)>
                            {format!("Add {}", schema.noun)}
                        </button>
                    </div>
                    <FilterBar
                        schema=schema
                        search=search
                        filters=filters
                        options=options
                        on_search=on_search
                        on_filter=on_filter
                        on_clear=on_clear
                    />
                    <DataTable
                        schema=schema
                        records=records
                        loading=loading
                        on_view=Callback::new(move |r: Record| state.update(|s| s.open_view(r)))
                        on_edit=Callback::new(move |r: Record| state.update(|s| s.open_edit(r)))
                        on_delete=Callback::new(move |r: Record| state.update(|s| s.request_delete(r)))
                    />
                    <PaginationControl pagination=pagination on_page=on_page />
                </div>
            </div>
            <RecordDialog state=state on_submit=submit />
            <ConfirmDeleteDialog state=state on_confirm=confirm_delete />
        </AppShell>
    }
}
