use contracts::domain::sales_orders::{
    Customer, Product, SalesOrderFilters, SalesOrderStatus, SalesRep, Warehouse,
};
use leptos::prelude::*;

use crate::shared::components::ui::badge::BadgeVariant;

pub fn create_state() -> RwSignal<SalesOrderFilters> {
    RwSignal::new(SalesOrderFilters::default())
}

pub fn status_variant(status: SalesOrderStatus) -> BadgeVariant {
    match status {
        SalesOrderStatus::Draft | SalesOrderStatus::Unknown => BadgeVariant::Neutral,
        SalesOrderStatus::Confirmed => BadgeVariant::Primary,
        SalesOrderStatus::Processing => BadgeVariant::Warning,
        SalesOrderStatus::Delivered => BadgeVariant::Success,
        SalesOrderStatus::Cancelled => BadgeVariant::Error,
    }
}

pub fn customer_option(customer: &Customer) -> (i64, String) {
    match &customer.code {
        Some(code) if !code.is_empty() => (customer.id, format!("{} ({})", customer.name, code)),
        _ => (customer.id, customer.name.clone()),
    }
}

pub fn warehouse_option(warehouse: &Warehouse) -> (i64, String) {
    (warehouse.id, warehouse.name.clone())
}

pub fn product_option(product: &Product) -> (i64, String) {
    match &product.sku {
        Some(sku) if !sku.is_empty() => (product.id, format!("{} · {}", sku, product.name)),
        _ => (product.id, product.name.clone()),
    }
}

pub fn sales_rep_option(rep: &SalesRep) -> (i64, String) {
    (rep.id, rep.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels() {
        let customer = Customer {
            id: 7,
            name: "Toko Maju".into(),
            code: Some("C-007".into()),
            phone: None,
        };
        assert_eq!(customer_option(&customer), (7, "Toko Maju (C-007)".to_string()));

        let product = Product {
            id: 3,
            name: "Beras 5kg".into(),
            sku: None,
            price: 65_000.0,
        };
        assert_eq!(product_option(&product), (3, "Beras 5kg".to_string()));
    }

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(SalesOrderStatus::Delivered), BadgeVariant::Success);
        assert_eq!(status_variant(SalesOrderStatus::Unknown), BadgeVariant::Neutral);
    }
}
