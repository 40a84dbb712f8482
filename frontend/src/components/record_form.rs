//! Form renderer driven by a category's field list.

use leptos::prelude::*;
use serde_json::Value;
use seva_kendra_shared::form::{FieldError, FormValues, form_flag, form_text};
use seva_kendra_shared::schema::{CategorySchema, FieldKind, FieldSpec};

#[derive(Clone, Copy)]
struct Bindings {
    values: Signal<FormValues>,
    errors: Signal<Vec<FieldError>>,
    on_change: Callback<(String, Value)>,
}

impl Bindings {
    fn text(&self, path: String) -> impl Fn() -> String + Send + Sync + 'static {
        let values = self.values;
        move || values.with(|v| form_text(v, &path))
    }

    fn error(&self, path: String) -> impl Fn() -> Option<String> + Send + Sync + 'static {
        let errors = self.errors;
        move || {
            errors.with(|e| {
                e.iter()
                    .find(|err| err.field == path)
                    .map(|err| err.message.clone())
            })
        }
    }

    fn setter(&self, path: String) -> impl Fn(leptos::ev::Event) + 'static {
        let on_change = self.on_change;
        move |ev| on_change.run((path.clone(), Value::String(event_target_value(&ev))))
    }
}

fn render_field(field: &'static FieldSpec, prefix: &str, b: Bindings) -> AnyView {
    let path = if prefix.is_empty() {
        field.name.to_string()
    } else {
        format!("{prefix}.{}", field.name)
    };
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };
    let error = b.error(path.clone());
    let error_view = move || {
        error().map(|message| view! { <span class="label-text-alt text-error">{message}</span> })
    };

    let control = match field.kind {
        FieldKind::Group(children) => {
            return view! {
                <fieldset class="md:col-span-2 border border-base-300 rounded-box p-4">
                    <legend class="px-2 font-semibold">{field.label}</legend>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {children.iter().map(|c| render_field(c, &path, b)).collect_view()}
                    </div>
                </fieldset>
            }
            .into_any();
        }
        FieldKind::Checkbox => {
            let values = b.values;
            let on_change = b.on_change;
            let checked_path = path.clone();
            return view! {
                <label class="label cursor-pointer justify-start gap-2">
                    <input
                        type="checkbox"
                        class="checkbox checkbox-primary"
                        prop:checked=move || values.with(|v| form_flag(v, &checked_path))
                        on:change=move |ev| on_change.run((path.clone(), Value::Bool(event_target_checked(&ev))))
                    />
                    <span class="label-text">{field.label}</span>
                </label>
            }
            .into_any();
        }
        FieldKind::TextArea => view! {
            <textarea
                class="textarea textarea-bordered w-full"
                rows="3"
                prop:value=b.text(path.clone())
                on:input=b.setter(path.clone())
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                class="select select-bordered w-full"
                prop:value=b.text(path.clone())
                on:change=b.setter(path.clone())
            >
                <option value="">{format!("Select {}", field.label)}</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Number { min, max } => view! {
            <input
                type="number"
                class="input input-bordered w-full"
                min=min.map(|m| m.to_string())
                max=max.map(|m| m.to_string())
                prop:value=b.text(path.clone())
                on:input=b.setter(path.clone())
            />
        }
        .into_any(),
        FieldKind::Phone => view! {
            <input
                type="tel"
                class="input input-bordered w-full"
                maxlength="10"
                placeholder="10-digit mobile number"
                prop:value=b.text(path.clone())
                on:input=b.setter(path.clone())
            />
        }
        .into_any(),
        _ => view! {
            <input
                type=field.input_type()
                class="input input-bordered w-full"
                prop:value=b.text(path.clone())
                on:input=b.setter(path.clone())
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            {control}
            <label class="label min-h-0 py-0">{error_view}</label>
        </div>
    }
    .into_any()
}

#[component]
pub fn RecordForm(
    schema: &'static CategorySchema,
    #[prop(into)] values: Signal<FormValues>,
    #[prop(into)] errors: Signal<Vec<FieldError>>,
    on_change: Callback<(String, Value)>,
) -> impl IntoView {
    let bindings = Bindings {
        values,
        errors,
        on_change,
    };
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {schema.fields.iter().map(|f| render_field(f, "", bindings)).collect_view()}
        </div>
    }
}
