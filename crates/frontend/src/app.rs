use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::api_origin;
use crate::shared::http::ApiClient;
use crate::shared::query::QueryClient;
use crate::system::auth::context::{AuthContext, AuthProvider};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Session first: the API client reads its token on every request.
    let auth = AuthContext::restore();

    provide_context(AppGlobalContext::new());
    provide_context(QueryClient::new());
    provide_context(ApiClient::new(api_origin(), auth));

    view! {
        <ConfigProvider>
            <AuthProvider auth=auth>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
