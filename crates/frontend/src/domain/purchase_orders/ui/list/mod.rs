pub mod state;

use self::state::{create_state, status_variant};
use crate::domain::purchase_orders::api::use_purchase_orders;
use crate::domain::suppliers::api::use_supplier_options;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::id_select::IdSelect;
use crate::shared::components::list_states::ListContent;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_number;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query::edit_filters;
use contracts::domain::purchase_orders::PurchaseOrderStatus;
use contracts::shared::list_filters::ListFilters;
use contracts::shared::reference::name_or_dash;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let filters = create_state();
    let query = use_purchase_orders(filters.into());
    let suppliers = use_supplier_options();
    let is_filter_expanded = RwSignal::new(false);

    let params = Signal::derive(move || filters.with(|f| f.params.clone()));
    let on_sort = Callback::new(move |field: &'static str| edit_filters(filters, |f| f.with_sort(field)));

    view! {
        <PageFrame page_id="purchase_orders--list" category=PAGE_CAT_LIST>
            <PageHeader title="Purchase Orders" subtitle=Signal::derive(move || {
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
                                    placeholder="PO number, notes..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <select
                                    class="form-field__input"
                                    prop:value=move || filters.with(|f| f.status.map(|s| s.as_str()).unwrap_or_default())
                                    on:change=move |ev| {
                                        let status = PurchaseOrderStatus::parse(&event_target_value(&ev));
                                        edit_filters(filters, |f| f.updated(|next| next.status = status));
                                    }
                                >
                                    <option value="">"All statuses"</option>
                                    {PurchaseOrderStatus::FILTERABLE.iter().map(|status| view! {
                                        <option value=status.as_str()>{status.label()}</option>
                                    }).collect_view()}
                                </select>
                            </Flex>
                            <IdSelect
                                label="Supplier"
                                all_label="All suppliers"
                                options=Signal::derive(move || {
                                    suppliers.with(|list| list.iter().map(|s| (s.id, s.name.clone())).collect())
                                })
                                value=Signal::derive(move || filters.with(|f| f.supplier_id))
                                on_change=Callback::new(move |supplier_id: Option<i64>| {
                                    edit_filters(filters, |f| f.updated(|next| next.supplier_id = supplier_id))
                                })
                            />
                            <DateInput
                                label="From"
                                value=Signal::derive(move || filters.with(|f| f.date_from.clone()))
                                on_change=Callback::new(move |date: Option<String>| {
                                    edit_filters(filters, |f| f.updated(|next| next.date_from = date))
                                })
                            />
                            <DateInput
                                label="To"
                                value=Signal::derive(move || filters.with(|f| f.date_to.clone()))
                                on_change=Callback::new(move |date: Option<String>| {
                                    edit_filters(filters, |f| f.updated(|next| next.date_to = date))
                                })
                            />
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
                    empty_title="No purchase orders found"
                    create_href="/purchase-orders/create"
                    create_label="New purchase order"
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="PO Number" sort_field="po_number" params=params on_sort=on_sort min_width=140.0 />
                                    <TableHeaderCell resizable=false min_width=200.0>"Supplier"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=150.0>"Warehouse"</TableHeaderCell>
                                    <SortableHeaderCell label="Order date" sort_field="order_date" params=params on_sort=on_sort min_width=110.0 />
                                    <TableHeaderCell resizable=false min_width=110.0>"Expected"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Status"</TableHeaderCell>
                                    <SortableHeaderCell label="Total" sort_field="total_amount" params=params on_sort=on_sort min_width=140.0 align="right" />
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || query.items()
                                    key=|order| order.id
                                    children=move |order| {
                                        let expected = order
                                            .expected_date
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{order.po_number}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{name_or_dash(&order.supplier)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{name_or_dash(&order.warehouse)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_date(&order.order_date)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{expected}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <Badge variant=status_variant(order.status)>{order.status.label()}</Badge>
                                                </TableCell>
                                                <TableCellMoney value=order.total_amount />
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
