use leptos::prelude::*;

use crate::layout::left::navigation::find_item;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PLACEHOLDER;

/// Placeholder for navigation entries (and their sub-pages) that are not
/// built yet.
#[component]
pub fn ComingSoonPage(#[prop(into)] path: String) -> impl IntoView {
    let item = find_item(&path);
    let title = item.map(|i| i.name).unwrap_or("Page");
    let icon_name = item.map(|i| i.icon).unwrap_or("clock");
    let subtitle = item.filter(|i| i.href != path).map(|_| path.clone());

    view! {
        <PageFrame page_id="placeholder--coming-soon" category=PAGE_CAT_PLACEHOLDER>
            <PageHeader title=title subtitle=subtitle />
            <div class="coming-soon">
                {icon(icon_name)}
                <h2>"Coming soon"</h2>
                <p>{format!("{} is under construction.", title)}</p>
            </div>
        </PageFrame>
    }
}
