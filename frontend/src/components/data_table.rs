use leptos::prelude::*;
use seva_kendra_shared::date::display_date;
use seva_kendra_shared::record::{Record, display_value};
use seva_kendra_shared::schema::{CategorySchema, FieldKind};

/// Table cell text; dates are shown as `05 Mar 2024`.
pub fn cell_text(schema: &CategorySchema, record: &Record, path: &str) -> String {
    let value = record.get(path);
    if schema.field(path).is_some_and(|f| f.kind == FieldKind::Date) {
        return display_date(value);
    }
    match value.map(display_value) {
        Some(text) if !text.is_empty() => text,
        _ => "-".to_string(),
    }
}

#[component]
pub fn DataTable(
    schema: &'static CategorySchema,
    #[prop(into)] records: Signal<Vec<Record>>,
    #[prop(into)] loading: Signal<bool>,
    on_view: Callback<Record>,
    on_edit: Callback<Record>,
    on_delete: Callback<Record>,
) -> impl IntoView {
    let width = schema.columns.len() + 1;
    let empty = move || records.with(Vec::is_empty);

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        {schema.columns.iter().map(|c| view! { <th>{c.label}</th> }).collect_view()}
                        <th class="text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || loading.get() && empty()>
                        <tr>
                            <td colspan=width.to_string() class="text-center py-8 text-base-content/50">
                                <span class="loading loading-spinner loading-md"></span>
                                " Loading..."
                            </td>
                        </tr>
                    </Show>
                    <Show when=move || !loading.get() && empty()>
                        <tr>
                            <td colspan=width.to_string() class="text-center py-8 text-base-content/50">
                                {format!("No {} found", schema.title.to_lowercase())}
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || records.get()
                        key=|r| r.id.clone()
                        children=move |record| {
                            let cells = schema
                                .columns
                                .iter()
                                .map(|c| view! { <td>{cell_text(schema, &record, c.path)}</td> })
                                .collect_view();
                            let (view_rec, edit_rec, delete_rec) =
                                (record.clone(), record.clone(), record);
                            view! {
                                <tr class="hover">
                                    {cells}
                                    <td class="text-right whitespace-nowrap">
                                        <button class="btn btn-ghost btn-xs" on:click=move |_| on_view.run(view_rec.clone())>"View"</button>
                                        <button class="btn btn-ghost btn-xs" on:click=move |_| on_edit.run(edit_rec.clone())>"Edit"</button>
                                        <button class="btn btn-ghost btn-xs text-error" on:click=move |_| on_delete.run(delete_rec.clone())>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
