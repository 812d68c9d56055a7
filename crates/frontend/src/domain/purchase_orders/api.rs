use contracts::domain::purchase_orders::{PurchaseOrder, PurchaseOrderFilters, RESOURCE};
use leptos::prelude::*;

use crate::shared::query::{use_list_query, ListQuery};

/// `GET /api/purchase-orders` for the current filters.
pub fn use_purchase_orders(filters: Signal<PurchaseOrderFilters>) -> ListQuery<PurchaseOrder> {
    use_list_query(RESOURCE, filters)
}
