use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::left::navigation::{filter_navigation, navigation, NavItem};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

/// Pages the user can open right now, excluding the dashboard itself.
pub fn shortcuts<S: AsRef<str>>(roles: &[S]) -> Vec<NavItem> {
    filter_navigation(navigation(), roles)
        .into_iter()
        .flat_map(|group| group.items)
        .filter(|item| !item.coming_soon && item.href != "/dashboard")
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || format!("Welcome, {}", auth.user_name().unwrap_or_default());

    view! {
        <PageFrame page_id="dashboard--home" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || Some(greeting())) />

            <div class="dashboard__roles">
                {move || auth.roles().into_iter().map(|role| view! {
                    <span class="badge badge--primary">{role}</span>
                }).collect_view()}
            </div>

            <div class="dashboard__cards">
                {move || {
                    let items = shortcuts(&auth.roles());
                    if items.is_empty() {
                        return view! {
                            <p class="dashboard__empty">"No modules are available for your roles yet."</p>
                        }.into_any();
                    }
                    items.into_iter().map(|item| view! {
                        <A href=item.href attr:class="dashboard__card">
                            {icon(item.icon)}
                            <span class="dashboard__card-title">{item.name}</span>
                        </A>
                    }).collect_view().into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::{CASHIER, STOCK_CLERK};

    #[test]
    fn test_shortcuts_follow_roles() {
        let names: Vec<&str> = shortcuts(&[CASHIER]).iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Sales"]);
        assert!(shortcuts(&[STOCK_CLERK]).is_empty());
    }
}
