use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Text search that reports its value after typing pauses.
#[component]
pub fn SearchInput(
    /// Committed search value
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let input_value = RwSignal::new(value.get_untracked().unwrap_or_default());
    let pending = StoredValue::new(0u32);

    // Filters reset from outside (e.g. "Clear") must show up in the box.
    Effect::new(move |_| {
        let committed = value.get().unwrap_or_default();
        if input_value.get_untracked().trim() != committed {
            input_value.set(committed);
        }
    });

    let handle_input = move |text: String| {
        input_value.set(text.clone());
        pending.update_value(|p| *p = p.wrapping_add(1));
        let ticket = pending.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if pending.try_get_value() == Some(ticket) {
                on_change.run(text);
            }
        });
    };

    let clear = move |_| {
        pending.update_value(|p| *p = p.wrapping_add(1));
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || value.with(|v| v.is_some())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.with(|v| v.is_empty())>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
