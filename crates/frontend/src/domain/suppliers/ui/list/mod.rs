pub mod state;

use self::state::{
    create_state, parse_status_filter, payment_terms_label, status_badge, status_filter_value,
};
use crate::domain::suppliers::api::use_suppliers;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_states::ListContent;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::{Badge, BadgeVariant};
use crate::shared::format::format_number;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query::edit_filters;
use contracts::shared::list_filters::ListFilters;
use leptos::prelude::*;
use thaw::*;

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let filters = create_state();
    let query = use_suppliers(filters.into());
    let is_filter_expanded = RwSignal::new(false);

    let params = Signal::derive(move || filters.with(|f| f.params.clone()));
    let on_sort = Callback::new(move |field: &'static str| edit_filters(filters, |f| f.with_sort(field)));

    view! {
        <PageFrame page_id="suppliers--list" category=PAGE_CAT_LIST>
            <PageHeader title="Suppliers" subtitle=Signal::derive(move || {
                Some(format!("{} records", format_number(query.total() as f64)))
            }) />

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || filters.with(|f| f.active_count()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || filters.with(|f| f.page()))
                            last_page=Signal::derive(move || query.last_page())
                            total_count=Signal::derive(move || query.total())
                            per_page=Signal::derive(move || filters.with(|f| f.per_page()))
                            on_page_change=Callback::new(move |page: u32| edit_filters(filters, |f| f.with_page(page)))
                            on_per_page_change=Callback::new(move |size: u32| edit_filters(filters, |f| f.with_per_page(size)))
                        />
                    }
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| query.refetch.run(())
                            disabled=Signal::derive(move || query.is_loading.get())
                        >
                            {move || if query.is_loading.get() { "Loading..." } else { "Refresh" }}
                        </Button>
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <SearchInput
                                    value=Signal::derive(move || filters.with(|f| f.params.search.clone()))
                                    on_change=Callback::new(move |text: String| edit_filters(filters, |f| f.with_search(&text)))
                                    placeholder="Name, code, contact..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <select
                                    class="form-field__input"
                                    prop:value=move || filters.with(|f| status_filter_value(f.is_active))
                                    on:change=move |ev| {
                                        let is_active = parse_status_filter(&event_target_value(&ev));
                                        edit_filters(filters, |f| f.updated(|next| next.is_active = is_active));
                                    }
                                >
                                    <option value="">"All"</option>
                                    <option value="active">"Active"</option>
                                    <option value="inactive">"Inactive"</option>
                                </select>
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| edit_filters(filters, |f| f.cleared())
                            >
                                "Clear"
                            </Button>
                        </Flex>
                    }
                />

                <ListContent
                    state=Signal::derive(move || query.page_state())
                    empty_title="No suppliers found"
                    create_href="/suppliers/create"
                    create_label="Add supplier"
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Code" sort_field="code" params=params on_sort=on_sort min_width=90.0 />
                                    <SortableHeaderCell label="Name" sort_field="name" params=params on_sort=on_sort min_width=200.0 />
                                    <TableHeaderCell resizable=false min_width=150.0>"Contact"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Phone"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=180.0>"Email"</TableHeaderCell>
                                    <SortableHeaderCell label="City" sort_field="city" params=params on_sort=on_sort min_width=120.0 />
                                    <TableHeaderCell resizable=false min_width=110.0>"Payment terms"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || query.items()
                                    key=|supplier| supplier.id
                                    children=move |supplier| {
                                        let (variant, label): (BadgeVariant, &str) = status_badge(supplier.is_active);
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{or_dash(supplier.code)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{supplier.name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{or_dash(supplier.contact_person)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{or_dash(supplier.phone)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{or_dash(supplier.email)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{or_dash(supplier.city)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{payment_terms_label(supplier.payment_terms)}</TableCellLayout></TableCell>
                                                <TableCell><Badge variant=variant>{label}</Badge></TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </ListContent>
            </div>
        </PageFrame>
    }
}
