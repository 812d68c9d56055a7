use leptos::prelude::*;

/// Native date picker bound to an optional `yyyy-mm-dd` value.
/// Clearing the field reports `None`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            {label.map(|l| view! { <span class="form-field__label">{l}</span> })}
            <input
                type="date"
                class="form-field__input"
                prop:value=move || value.get().unwrap_or_default()
                on:change=move |ev| {
                    on_change.run(contracts::shared::list_filters::non_empty(event_target_value(&ev)));
                }
            />
        </label>
    }
}
