use std::collections::BTreeMap;

use leptos::prelude::*;
use seva_kendra::api::FilterOptions;
use seva_kendra_shared::schema::{CategorySchema, FilterKind, FilterSpec};

#[component]
pub fn FilterBar(
    schema: &'static CategorySchema,
    #[prop(into)] search: Signal<String>,
    #[prop(into)] filters: Signal<BTreeMap<String, String>>,
    #[prop(into)] options: Signal<FilterOptions>,
    on_search: Callback<String>,
    on_filter: Callback<(String, String)>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let current = move |name: &'static str| {
        move || filters.with(|f| f.get(name).cloned().unwrap_or_default())
    };

    let control = move |spec: &'static FilterSpec| {
        let name = spec.name;
        let on_change = move |ev: leptos::ev::Event| on_filter.run((name.to_string(), event_target_value(&ev)));
        match spec.kind {
            FilterKind::Text => view! {
                <input
                    type="text"
                    class="input input-bordered input-sm"
                    placeholder=spec.label
                    prop:value=current(name)
                    on:change=on_change
                />
            }
            .into_any(),
            kind => {
                let values = move || match kind {
                    FilterKind::Select(opts) => opts.iter().map(|o| o.to_string()).collect(),
                    FilterKind::Remote(key) => options.with(|o| o.get(key).to_vec()),
                    FilterKind::Text => Vec::new(),
                };
                view! {
                    <select class="select select-bordered select-sm" prop:value=current(name) on:change=on_change>
                        <option value="">{format!("All {}", spec.label)}</option>
                        {move || values()
                            .into_iter()
                            .map(|v| view! { <option value=v.clone()>{v.clone()}</option> })
                            .collect_view()}
                    </select>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-2 p-4">
            <input
                type="search"
                class="input input-bordered input-sm w-full md:w-64"
                placeholder=format!("Search {}...", schema.title.to_lowercase())
                prop:value=search
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            {schema.filters.iter().map(control).collect_view()}
            <button class="btn btn-ghost btn-sm" on:click=move |_| on_clear.run(())>"Clear"</button>
        </div>
    }
}
