use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_filters::ListParams;
use leptos::prelude::*;
use thaw::*;

/// Header cell that asks for server-side sorting when clicked.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field name sent as `sort_by`
    sort_field: &'static str,

    /// Current list parameters, for the indicator
    #[prop(into)]
    params: Signal<ListParams>,

    on_sort: Callback<&'static str>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || params.with(|p| get_sort_class(p, sort_field))>
                    {move || params.with(|p| get_sort_indicator(p, sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
