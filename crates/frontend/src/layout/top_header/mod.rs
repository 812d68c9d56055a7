//! Top bar: sidebar toggle, product name, signed-in user and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::http::LOGIN_PATH;
use crate::shared::icons::icon;
use crate::shared::query::use_query_client;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let queries = use_query_client();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(auth, &queries);
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"POS Console"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth.user_name().unwrap_or_else(|| "Guest".to_string())}</span>
                    <span class="top-header__roles">{move || auth.roles().join(", ")}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
