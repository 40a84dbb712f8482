use leptos::prelude::*;
use seva_kendra::listing::{ListState, ModalState};
use seva_kendra_shared::record::Record;
use seva_kendra_shared::schema::{CategorySchema, FieldKind, FieldSpec};

use super::data_table::cell_text;
use super::record_form::RecordForm;

/// Keeps a `<dialog>` element in step with a boolean signal.
pub fn sync_dialog(node: NodeRef<leptos::html::Dialog>, open: Memo<bool>) {
    Effect::new(move |_| {
        let Some(dialog) = node.get() else {
            return;
        };
        if open.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        } else if dialog.open() {
            dialog.close();
        }
    });
}

fn detail_rows(schema: &'static CategorySchema, fields: &'static [FieldSpec], prefix: &str, record: &Record) -> AnyView {
    fields
        .iter()
        .map(|field| {
            let path = if prefix.is_empty() {
                field.name.to_string()
            } else {
                format!("{prefix}.{}", field.name)
            };
            match field.kind {
                FieldKind::Group(children) => view! {
                    <div class="md:col-span-2">
                        <h4 class="font-semibold mt-2 mb-1">{field.label}</h4>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-2 pl-2">
                            {detail_rows(schema, children, &path, record)}
                        </div>
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div>
                        <div class="text-xs text-base-content/60">{field.label}</div>
                        <div class="font-medium">{cell_text(schema, record, &path)}</div>
                    </div>
                }
                .into_any(),
            }
        })
        .collect_view()
        .into_any()
}

/// Create, edit and view modal for one record.
#[component]
pub fn RecordDialog(
    state: RwSignal<ListState>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let schema = state.with_untracked(|s| s.schema);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let open = Memo::new(move |_| {
        state.with(|s| matches!(s.modal, ModalState::Create | ModalState::Edit(_) | ModalState::View(_)))
    });
    sync_dialog(dialog_ref, open);

    let title = move || {
        state.with(|s| match s.modal {
            ModalState::Edit(_) => format!("Edit {}", schema.noun),
            ModalState::View(_) => format!("{} Details", schema.noun),
            _ => format!("Add New {}", schema.noun),
        })
    };
    let viewing = move || {
        state.with(|s| match &s.modal {
            ModalState::View(record) => Some(record.clone()),
            _ => None,
        })
    };
    let submitting = move || state.with(|s| s.submitting);
    let close = move || {
        if open.get_untracked() {
            state.update(ListState::close_modal);
        }
    };

    let values = Signal::derive(move || state.with(|s| s.form.clone()));
    let errors = Signal::derive(move || state.with(|s| s.form_errors.clone()));
    let on_change = Callback::new(move |(path, value): (String, serde_json::Value)| {
        state.update(|s| s.set_field(&path, value));
    });

    let on_form_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| close()>
            <div class="modal-box w-11/12 max-w-4xl">
                <h3 class="font-bold text-lg mb-4">{title}</h3>
                {move || match viewing() {
                    Some(record) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {detail_rows(schema, schema.fields, "", &record)}
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn" on:click=move |_| close()>"Close"</button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <form on:submit=on_form_submit novalidate=true>
                            <RecordForm schema=schema values=values errors=errors on_change=on_change />
                            <div class="modal-action">
                                <button type="button" class="btn btn-ghost" on:click=move |_| close()>"Cancel"</button>
                                <button type="submit" class="btn btn-primary" disabled=submitting>
                                    {move || if submitting() {
                                        view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                    } else {
                                        "Save".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    }
                    .into_any(),
                }}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
