use contracts::domain::sales::{Sale, SaleFilters, RESOURCE};
use leptos::prelude::*;

use crate::shared::query::{use_list_query, ListQuery};

/// `GET /api/sales` for the current filters.
pub fn use_sales(filters: Signal<SaleFilters>) -> ListQuery<Sale> {
    use_list_query(RESOURCE, filters)
}
