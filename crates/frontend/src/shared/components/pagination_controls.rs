use crate::shared::format::format_number;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager for list pages. Pages are 1-based, as the API counts them.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    last_page: Signal<u32>,

    /// Total number of records across all pages
    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    per_page: Signal<u32>,

    on_page_change: Callback<u32>,

    on_per_page_change: Callback<u32>,

    /// Page size options, defaults to [10, 20, 50, 100]
    #[prop(optional)]
    per_page_options: Option<Vec<u32>>,
) -> impl IntoView {
    let options = per_page_options
        .unwrap_or_else(|| contracts::shared::list_filters::PER_PAGE_OPTIONS.to_vec());
    let last = move || last_page.get().max(1);
    let at_start = move || current_page.get() <= 1;
    let at_end = move || current_page.get() >= last();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get().max(1),
                    last(),
                    format_number(total_count.get() as f64),
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_per_page_change.run(size);
                    }
                }
                prop:value=move || per_page.get().to_string()
            >
                {options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || per_page.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
