pub mod state;

use self::state::{create_state, customer_label, page_totals, payment_variant};
use crate::domain::sales::api::use_sales;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_states::ListContent;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::{format_currency, format_number};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query::edit_filters;
use contracts::domain::sales::PaymentStatus;
use contracts::shared::list_filters::ListFilters;
use contracts::shared::reference::name_or_dash;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SaleList() -> impl IntoView {
    let filters = create_state();
    let query = use_sales(filters.into());
    let is_filter_expanded = RwSignal::new(false);

    let params = Signal::derive(move || filters.with(|f| f.params.clone()));
    let on_sort = Callback::new(move |field: &'static str| edit_filters(filters, |f| f.with_sort(field)));
    let totals = Memo::new(move |_| query.data.with(|d| d.as_ref().map(|d| page_totals(d.items())).unwrap_or_default()));

    view! {
        <PageFrame page_id="sales--list" category=PAGE_CAT_LIST>
            <PageHeader title="Sales" subtitle=Signal::derive(move || {
                Some(format!("{} transactions", format_number(query.total() as f64)))
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
                                    placeholder="Invoice number, customer..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Payment"</Label>
                                <select
                                    class="form-field__input"
                                    prop:value=move || filters.with(|f| f.payment_status.map(|s| s.as_str()).unwrap_or_default())
                                    on:change=move |ev| {
                                        let status = PaymentStatus::parse(&event_target_value(&ev));
                                        edit_filters(filters, |f| f.updated(|next| next.payment_status = status));
                                    }
                                >
                                    <option value="">"All"</option>
                                    {PaymentStatus::FILTERABLE.iter().map(|status| view! {
                                        <option value=status.as_str()>{status.label()}</option>
                                    }).collect_view()}
                                </select>
                            </Flex>
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
                    empty_title="No sales recorded"
                    create_href="/pos"
                    create_label="Open point of sale"
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1000px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Invoice" sort_field="invoice_number" params=params on_sort=on_sort min_width=140.0 />
                                    <SortableHeaderCell label="Date" sort_field="sale_date" params=params on_sort=on_sort min_width=140.0 />
                                    <TableHeaderCell resizable=false min_width=180.0>"Customer"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=140.0>"Cashier"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Method"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Payment"</TableHeaderCell>
                                    <SortableHeaderCell label="Total" sort_field="total_amount" params=params on_sort=on_sort min_width=130.0 align="right" />
                                    <TableHeaderCell resizable=false min_width=130.0>"Paid"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Outstanding"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || query.items()
                                    key=|sale| sale.id
                                    children=move |sale| {
                                        let customer = customer_label(&sale);
                                        let outstanding = sale.outstanding();
                                        let method = sale.payment_method.clone().unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{sale.invoice_number}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_datetime(&sale.sale_date)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{customer}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{name_or_dash(&sale.cashier)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{method}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <Badge variant=payment_variant(sale.payment_status)>{sale.payment_status.label()}</Badge>
                                                </TableCell>
                                                <TableCellMoney value=sale.total_amount />
                                                <TableCellMoney value=sale.paid_amount />
                                                <TableCellMoney value=outstanding warn_non_zero=true />
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                    <div class="table-totals">
                        <span>"Page total: " {move || format_currency(totals.get().total)}</span>
                        <span>"Paid: " {move || format_currency(totals.get().paid)}</span>
                        <span>"Outstanding: " {move || format_currency(totals.get().outstanding)}</span>
                    </div>
                </ListContent>
            </div>
        </PageFrame>
    }
}
