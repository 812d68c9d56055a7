use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_AUTH;

/// Text for the `error` query parameter of `/auth/error`.
pub fn auth_error_message(code: Option<&str>) -> &'static str {
    match code {
        Some("AccessDenied") => "You do not have permission to open this page.",
        Some("SessionExpired") => "Your session has expired. Please sign in again.",
        Some("CredentialsSignin") => "Invalid email or password.",
        _ => "An authentication error occurred.",
    }
}

#[component]
pub fn AuthErrorPage() -> impl IntoView {
    let query = use_query_map();
    let message = move || query.with(|q| auth_error_message(q.get("error").as_deref()));

    view! {
        <PageFrame page_id="auth--error" category=PAGE_CAT_AUTH>
            <div class="login-container">
                <div class="login-box">
                    {icon("alert")}
                    <h2>"Access problem"</h2>
                    <p>{message}</p>
                    <div class="login-box__links">
                        <A href="/dashboard">"Back to dashboard"</A>
                        <A href="/auth/login">"Sign in with another account"</A>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
