use leptos::prelude::*;
use seva_kendra_shared::pagination::Pagination;

/// Up to five page numbers centred on the current one.
fn window(p: &Pagination) -> Vec<u32> {
    let count = p.page_count();
    if count == 0 {
        return Vec::new();
    }
    let start = p.page.saturating_sub(2).max(1);
    let end = (start + 4).min(count);
    let start = end.saturating_sub(4).max(1);
    (start..=end).collect()
}

#[component]
pub fn PaginationControl(
    #[prop(into)] pagination: Signal<Pagination>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let summary = move || {
        pagination.with(|p| {
            format!(
                "Showing {} to {} of {} results",
                p.first_item(),
                p.last_item(),
                p.total
            )
        })
    };
    let page = move || pagination.with(|p| p.page);

    view! {
        <div class="flex flex-col md:flex-row items-center justify-between gap-2 p-4">
            <span class="text-sm text-base-content/70">{summary}</span>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || !pagination.with(Pagination::has_prev)
                    on:click=move |_| on_page.run(page().saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    pagination
                        .with(window)
                        .into_iter()
                        .map(|n| {
                            let class = if n == page() { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" };
                            view! { <button class=class on:click=move |_| on_page.run(n)>{n}</button> }
                        })
                        .collect_view()
                }}
                <button
                    class="join-item btn btn-sm"
                    disabled=move || !pagination.with(Pagination::has_next)
                    on:click=move |_| on_page.run(page() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
