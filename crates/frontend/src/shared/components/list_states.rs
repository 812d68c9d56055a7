//! Bodies shown instead of a table while it has no rows to show.

use crate::shared::icons::icon;
use crate::shared::page_state::PageState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn LoadingState(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="list-state list-state--loading">
            <Spinner />
            <span>{message.unwrap_or_else(|| "Loading...".to_string())}</span>
        </div>
    }
}

/// Inline fetch error. Refreshing is left to the page toolbar.
#[component]
pub fn ErrorState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="list-state list-state--error">
            {icon("alert")}
            <span class="list-state__message">{message}</span>
        </div>
    }
}

/// "No records" body. `create_href` adds a call to action.
#[component]
pub fn EmptyState(
    #[prop(into)]
    title: String,
    #[prop(optional_no_strip)]
    create_href: Option<&'static str>,
    #[prop(optional, into)]
    create_label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="list-state list-state--empty">
            <span class="list-state__title">{title}</span>
            {create_href.map(|href| view! {
                <A href=href attr:class="list-state__action">
                    {icon("plus")}
                    {create_label.unwrap_or_else(|| "Create".to_string())}
                </A>
            })}
        </div>
    }
}

/// Picks the body for a list page from its [`PageState`]; `children`
/// renders the populated table.
#[component]
pub fn ListContent(
    #[prop(into)]
    state: Signal<PageState>,
    #[prop(into)]
    empty_title: String,
    #[prop(optional)]
    create_href: Option<&'static str>,
    #[prop(optional, into)]
    create_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    move || match state.get() {
        PageState::Loading => view! { <LoadingState /> }.into_any(),
        PageState::Error(message) => view! { <ErrorState message=message /> }.into_any(),
        PageState::Empty => view! {
            <EmptyState
                title=empty_title.clone()
                create_href=create_href
                create_label=create_label.clone().unwrap_or_else(|| "Create".to_string())
            />
        }
        .into_any(),
        PageState::Populated => children().into_any(),
    }
}
