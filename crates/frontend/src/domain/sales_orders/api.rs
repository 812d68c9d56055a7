use contracts::domain::sales_orders::{
    Customer, Lookup, Product, SalesOrder, SalesOrderFilters, SalesRep, Warehouse, RESOURCE,
};
use leptos::prelude::*;

use crate::shared::query::{use_list_query, use_lookup, ListQuery};

/// `GET /api/sales-orders` for the current filters.
pub fn use_sales_orders(filters: Signal<SalesOrderFilters>) -> ListQuery<SalesOrder> {
    use_list_query(RESOURCE, filters)
}

/// Dropdown sources for the sales order filters.
#[derive(Clone, Copy)]
pub struct SalesOrderLookups {
    pub customers: RwSignal<Vec<Customer>>,
    pub warehouses: RwSignal<Vec<Warehouse>>,
    pub products: RwSignal<Vec<Product>>,
    pub sales_reps: RwSignal<Vec<SalesRep>>,
}

pub fn use_sales_order_lookups() -> SalesOrderLookups {
    SalesOrderLookups {
        customers: use_lookup(Lookup::Customers),
        warehouses: use_lookup(Lookup::Warehouses),
        products: use_lookup(Lookup::Products),
        sales_reps: use_lookup(Lookup::SalesReps),
    }
}
