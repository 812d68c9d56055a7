//! Role-filtered sidebar menu.

use super::navigation::{filter_navigation, is_within, navigation, NavItem};
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
fn SidebarItem(item: NavItem) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.with(|p| is_within(p, item.href));

    view! {
        <A href=item.href attr:class=move || {
            if is_active() {
                "app-sidebar__item app-sidebar__item--active"
            } else {
                "app-sidebar__item"
            }
        }>
            <div class="app-sidebar__item-content" style:padding-left="24px">
                {icon(item.icon)}
                <span>{item.name}</span>
            </div>
            {item.coming_soon.then(|| view! {
                <span class="app-sidebar__soon" title="Coming soon">{icon("clock")}</span>
            })}
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    view! {
        <div class="app-sidebar__content">
            {move || {
                let roles = auth.roles();
                filter_navigation(navigation(), &roles)
                    .into_iter()
                    .map(|group| {
                        let id = group.id;
                        let expanded = move || !ctx.collapsed_groups.with(|g| g.contains(&id));
                        let items = StoredValue::new(group.items);
                        view! {
                            <div class="app-sidebar__group">
                                <div
                                    class="app-sidebar__item app-sidebar__group-header"
                                    style:padding-left="12px"
                                    on:click=move |_| ctx.toggle_group(id)
                                >
                                    <span>{group.label}</span>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=expanded
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>
                                <Show when=expanded>
                                    <div class="app-sidebar__children">
                                        {items
                                            .get_value()
                                            .into_iter()
                                            .map(|item| view! { <SidebarItem item=item /> })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
