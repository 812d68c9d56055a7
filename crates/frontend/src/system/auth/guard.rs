use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;
use crate::layout::left::navigation::can_access;
use crate::shared::http::LOGIN_PATH;

pub const ACCESS_DENIED_PATH: &str = "/auth/error?error=AccessDenied";

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allowed,
    SignInRequired,
    Denied,
}

pub fn route_access<S: AsRef<str>>(authenticated: bool, path: &str, roles: &[S]) -> RouteAccess {
    if !authenticated {
        RouteAccess::SignInRequired
    } else if can_access(path, roles) {
        RouteAccess::Allowed
    } else {
        RouteAccess::Denied
    }
}

/// Renders `children` only for a signed-in user whose roles open `path`.
#[component]
pub fn RequireRoute(#[prop(into)] path: String, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let checked = path.clone();
    let access = Memo::new(move |_| route_access(auth.is_authenticated(), &checked, &auth.roles()));

    move || match access.get() {
        RouteAccess::Allowed => children().into_any(),
        RouteAccess::SignInRequired => {
            log::debug!("guard: {} requires sign-in", path);
            view! { <Redirect path=LOGIN_PATH /> }.into_any()
        }
        RouteAccess::Denied => {
            log::warn!("guard: access to {} denied", path);
            view! { <Redirect path=ACCESS_DENIED_PATH /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::{CASHIER, PURCHASING, STOCK_CLERK};

    #[test]
    fn test_route_access() {
        assert_eq!(
            route_access(false, "/dashboard", &[CASHIER]),
            RouteAccess::SignInRequired
        );
        assert_eq!(route_access(true, "/dashboard", &[CASHIER]), RouteAccess::Allowed);
        assert_eq!(
            route_access(true, "/purchase-orders", &[STOCK_CLERK]),
            RouteAccess::Denied
        );
        assert_eq!(
            route_access(true, "/purchase-orders", &[PURCHASING]),
            RouteAccess::Allowed
        );
        assert_eq!(
            route_access::<&str>(true, "/dashboard", &[]),
            RouteAccess::Denied
        );
    }
}
