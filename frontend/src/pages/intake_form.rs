//! Public beneficiary intake form, reachable without signing in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use seva_kendra::notify::Notice;
use seva_kendra_shared::form::{FieldError, FormValues, form_set};
use seva_kendra_shared::schema::RecordCategory;

use crate::api;
use crate::components::record_form::RecordForm;
use crate::notify::use_notices;

#[component]
pub fn IntakeFormPage() -> impl IntoView {
    let notices = use_notices();
    let schema = RecordCategory::Beneficiaries.schema();
    let values = RwSignal::new(schema.blank_form());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let on_change = Callback::new(move |(path, value): (String, serde_json::Value)| {
        values.update(|v: &mut FormValues| form_set(v, &path, value));
        errors.update(|errs| errs.retain(|e| e.field != path));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = values.get_untracked();
        let problems = schema.validate_form(&form);
        if let Some(first) = problems.first() {
            notices.push(Notice::error(first.message.clone()));
            errors.set(problems);
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            match api::records(RecordCategory::Beneficiaries).create(&form).await {
                Ok(_) => {
                    let _ = values.try_set(schema.blank_form());
                    let _ = submitted.try_set(true);
                    notices.push(Notice::success("Thank you, your details have been submitted"));
                }
                Err(e) => notices.push_opt(Notice::from_error("Failed to submit form", &e)),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 py-10 px-4">
            <div class="card bg-base-100 shadow-xl max-w-3xl mx-auto">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"Beneficiary Registration"</h1>
                    <p class="text-base-content/70">"Fill in the details below and a field worker will follow up."</p>
                    <Show
                        when=move || !submitted.get()
                        fallback=move || view! {
                            <div role="alert" class="alert alert-success">
                                <span>"Your details have been recorded."</span>
                                <button class="btn btn-sm" on:click=move |_| submitted.set(false)>"Submit another"</button>
                            </div>
                        }
                    >
                        <form on:submit=on_submit class="space-y-4">
                            <RecordForm schema=schema values=values errors=errors on_change=on_change />
                            <div class="card-actions justify-end">
                                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                    <Show when=move || submitting.get()>
                                        <span class="loading loading-spinner loading-sm"></span>
                                    </Show>
                                    "Submit"
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
