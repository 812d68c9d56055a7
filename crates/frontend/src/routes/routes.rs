use crate::domain::purchase_orders::ui::list::PurchaseOrderList;
use crate::domain::sales::ui::list::SaleList;
use crate::domain::sales_orders::ui::list::SalesOrderList;
use crate::domain::suppliers::ui::list::SupplierList;
use crate::layout::left::navigation::find_item;
use crate::layout::Shell;
use crate::shared::http::LOGIN_PATH;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRoute;
use crate::system::pages::auth_error::AuthErrorPage;
use crate::system::pages::coming_soon::ComingSoonPage;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Shell for signed-in users; everyone else goes to the login page.
#[component]
fn ProtectedShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <Redirect path=LOGIN_PATH /> }
        >
            <Shell />
        </Show>
    }
}

/// Menu entries without a page yet, and sub-pages such as `/suppliers/create`.
#[component]
fn SectionPlaceholder() -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        if find_item(&path).is_none() {
            return view! { <NotFound /> }.into_any();
        }
        let guarded = path.clone();
        view! {
            <RequireRoute path=guarded>
                <ComingSoonPage path=path.clone() />
            </RequireRoute>
        }
        .into_any()
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="coming-soon">
            <h2>"Page not found"</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/auth/login") view=LoginPage />
                <Route path=path!("/auth/error") view=AuthErrorPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <RequireRoute path="/dashboard"><DashboardPage /></RequireRoute> }
                    />
                    <Route
                        path=path!("/suppliers")
                        view=|| view! { <RequireRoute path="/suppliers"><SupplierList /></RequireRoute> }
                    />
                    <Route
                        path=path!("/purchase-orders")
                        view=|| view! { <RequireRoute path="/purchase-orders"><PurchaseOrderList /></RequireRoute> }
                    />
                    <Route
                        path=path!("/sales-orders")
                        view=|| view! { <RequireRoute path="/sales-orders"><SalesOrderList /></RequireRoute> }
                    />
                    <Route
                        path=path!("/sales")
                        view=|| view! { <RequireRoute path="/sales"><SaleList /></RequireRoute> }
                    />
                    <Route path=path!("/*any") view=SectionPlaceholder />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
