use crate::shared::list_utils::{id_filter_value, parse_id_filter};
use leptos::prelude::*;
use thaw::*;

/// Dropdown over `(id, name)` options with an "all" entry meaning `None`.
#[component]
pub fn IdSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    all_label: String,
    #[prop(into)]
    options: Signal<Vec<(i64, String)>>,
    #[prop(into)]
    value: Signal<Option<i64>>,
    on_change: Callback<Option<i64>>,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            <select
                class="form-field__input"
                prop:value=move || id_filter_value(value.get())
                on:change=move |ev| on_change.run(parse_id_filter(&event_target_value(&ev)))
            >
                <option value="">{all_label}</option>
                {move || options.get().into_iter().map(|(id, name)| view! {
                    <option value=id.to_string() selected=move || value.get() == Some(id)>{name}</option>
                }).collect_view()}
            </select>
        </Flex>
    }
}
