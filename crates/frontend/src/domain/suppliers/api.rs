use contracts::domain::suppliers::{Supplier, SupplierFilters, RESOURCE};
use leptos::prelude::*;

use crate::shared::query::{use_list_query, use_options, ListQuery};

/// `GET /api/suppliers` for the current filters.
pub fn use_suppliers(filters: Signal<SupplierFilters>) -> ListQuery<Supplier> {
    use_list_query(RESOURCE, filters)
}

/// Active suppliers for filter dropdowns on other pages.
pub fn use_supplier_options() -> RwSignal<Vec<Supplier>> {
    use_options(RESOURCE, &SupplierFilters::active_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::QueryKey;

    #[test]
    fn test_list_and_options_encode_active_flag_alike() {
        let options = QueryKey::new(RESOURCE, &SupplierFilters::active_options()).unwrap();
        assert!(options.query.contains("is_active=1"));
        assert!(options.query.contains("per_page=100"));
        assert!(options.query.contains("sort_by=name"));

        let list = SupplierFilters {
            is_active: Some(true),
            ..SupplierFilters::default()
        };
        let list = QueryKey::new(RESOURCE, &list).unwrap();
        assert!(list.query.contains("is_active=1"));
        assert!(!list.query.contains("true"));

        let inactive = SupplierFilters {
            is_active: Some(false),
            ..SupplierFilters::default()
        };
        assert!(QueryKey::new(RESOURCE, &inactive).unwrap().query.contains("is_active=0"));
    }
}
