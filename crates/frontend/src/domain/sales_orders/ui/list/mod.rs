pub mod state;

use self::state::{
    create_state, customer_option, product_option, sales_rep_option, status_variant,
    warehouse_option,
};
use crate::domain::sales_orders::api::{use_sales_order_lookups, use_sales_orders};
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
use contracts::domain::sales_orders::SalesOrderStatus;
use contracts::shared::list_filters::ListFilters;
use contracts::shared::reference::name_or_dash;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SalesOrderList() -> impl IntoView {
    let filters = create_state();
    let query = use_sales_orders(filters.into());
    let lookups = use_sales_order_lookups();
    let is_filter_expanded = RwSignal::new(false);

    let params = Signal::derive(move || filters.with(|f| f.params.clone()));
    let on_sort = Callback::new(move |field: &'static str| edit_filters(filters, |f| f.with_sort(field)));

    view! {
        <PageFrame page_id="sales_orders--list" category=PAGE_CAT_LIST>
            <PageHeader title="Sales Orders" subtitle=Signal::derive(move || {
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
                        <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <SearchInput
                                    value=Signal::derive(move || filters.with(|f| f.params.search.clone()))
                                    on_change=Callback::new(move |text: String| edit_filters(filters, |f| f.with_search(&text)))
                                    placeholder="Order number..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <select
                                    class="form-field__input"
                                    prop:value=move || filters.with(|f| f.status.map(|s| s.as_str()).unwrap_or_default())
                                    on:change=move |ev| {
                                        let status = SalesOrderStatus::parse(&event_target_value(&ev));
                                        edit_filters(filters, |f| f.updated(|next| next.status = status));
                                    }
                                >
                                    <option value="">"All statuses"</option>
                                    {SalesOrderStatus::FILTERABLE.iter().map(|status| view! {
                                        <option value=status.as_str()>{status.label()}</option>
                                    }).collect_view()}
                                </select>
                            </Flex>
                            <IdSelect
                                label="Customer"
                                all_label="All customers"
                                options=Signal::derive(move || lookups.customers.with(|l| l.iter().map(customer_option).collect()))
                                value=Signal::derive(move || filters.with(|f| f.customer_id))
                                on_change=Callback::new(move |id: Option<i64>| {
                                    edit_filters(filters, |f| f.updated(|next| next.customer_id = id))
                                })
                            />
                            <IdSelect
                                label="Warehouse"
                                all_label="All warehouses"
                                options=Signal::derive(move || lookups.warehouses.with(|l| l.iter().map(warehouse_option).collect()))
                                value=Signal::derive(move || filters.with(|f| f.warehouse_id))
                                on_change=Callback::new(move |id: Option<i64>| {
                                    edit_filters(filters, |f| f.updated(|next| next.warehouse_id = id))
                                })
                            />
                            <IdSelect
                                label="Sales rep"
                                all_label="All sales reps"
                                options=Signal::derive(move || lookups.sales_reps.with(|l| l.iter().map(sales_rep_option).collect()))
                                value=Signal::derive(move || filters.with(|f| f.sales_rep_id))
                                on_change=Callback::new(move |id: Option<i64>| {
                                    edit_filters(filters, |f| f.updated(|next| next.sales_rep_id = id))
                                })
                            />
                            <IdSelect
                                label="Product"
                                all_label="All products"
                                options=Signal::derive(move || lookups.products.with(|l| l.iter().map(product_option).collect()))
                                value=Signal::derive(move || filters.with(|f| f.product_id))
                                on_change=Callback::new(move |id: Option<i64>| {
                                    edit_filters(filters, |f| f.updated(|next| next.product_id = id))
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
                    empty_title="No sales orders found"
                    create_href="/sales-orders/create"
                    create_label="New sales order"
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1000px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Order" sort_field="order_number" params=params on_sort=on_sort min_width=140.0 />
                                    <SortableHeaderCell label="Order date" sort_field="order_date" params=params on_sort=on_sort min_width=110.0 />
                                    <TableHeaderCell resizable=false min_width=110.0>"Delivery"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Customer"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=150.0>"Warehouse"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=140.0>"Sales rep"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                                    <SortableHeaderCell label="Total" sort_field="total_amount" params=params on_sort=on_sort min_width=140.0 align="right" />
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || query.items()
                                    key=|order| order.id
                                    children=move |order| {
                                        let delivery = order
                                            .delivery_date
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{order.order_number}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_date(&order.order_date)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{delivery}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{name_or_dash(&order.customer)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{name_or_dash(&order.warehouse)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{name_or_dash(&order.sales_rep)}</TableCellLayout></TableCell>
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
