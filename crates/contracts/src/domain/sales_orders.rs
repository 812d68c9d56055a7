use serde::{Deserialize, Serialize};

use crate::shared::list_filters::{deserialize_amount, ListFilters, ListParams, SortDirection};
use crate::shared::reference::NamedRef;

pub const RESOURCE: &str = "sales-orders";

/// Dropdown sources served under `sales-orders/<lookup>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Customers,
    Warehouses,
    Products,
    SalesReps,
}

impl Lookup {
    pub fn path(&self) -> &'static str {
        match self {
            Lookup::Customers => "customers",
            Lookup::Warehouses => "warehouses",
            Lookup::Products => "products",
            Lookup::SalesReps => "sales-reps",
        }
    }

    pub fn resource(&self) -> String {
        format!("{}/{}", RESOURCE, self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesOrderStatus {
    Draft,
    Confirmed,
    Processing,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl SalesOrderStatus {
    pub const FILTERABLE: &'static [SalesOrderStatus] = &[
        SalesOrderStatus::Draft,
        SalesOrderStatus::Confirmed,
        SalesOrderStatus::Processing,
        SalesOrderStatus::Delivered,
        SalesOrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "draft",
            SalesOrderStatus::Confirmed => "confirmed",
            SalesOrderStatus::Processing => "processing",
            SalesOrderStatus::Delivered => "delivered",
            SalesOrderStatus::Cancelled => "cancelled",
            SalesOrderStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "Draft",
            SalesOrderStatus::Confirmed => "Confirmed",
            SalesOrderStatus::Processing => "Processing",
            SalesOrderStatus::Delivered => "Delivered",
            SalesOrderStatus::Cancelled => "Cancelled",
            SalesOrderStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: i64,
    pub order_number: String,
    pub order_date: String,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub customer: Option<NamedRef>,
    #[serde(default)]
    pub warehouse: Option<NamedRef>,
    #[serde(default)]
    pub sales_rep: Option<NamedRef>,
    pub status: SalesOrderStatus,
    #[serde(deserialize_with = "deserialize_amount", default)]
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(deserialize_with = "deserialize_amount", default)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderFilters {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SalesOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep_id: Option<i64>,
    /// Orders with at least one line for this product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Default for SalesOrderFilters {
    fn default() -> Self {
        Self {
            params: ListParams::sorted_by("order_date", SortDirection::Desc),
            status: None,
            customer_id: None,
            warehouse_id: None,
            sales_rep_id: None,
            product_id: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl ListFilters for SalesOrderFilters {
    fn params(&self) -> &ListParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_count(&self) -> usize {
        [
            self.params.search.is_some(),
            self.status.is_some(),
            self.customer_id.is_some(),
            self.warehouse_id.is_some(),
            self.sales_rep_id.is_some(),
            self.product_id.is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_resources() {
        assert_eq!(Lookup::Customers.resource(), "sales-orders/customers");
        assert_eq!(Lookup::SalesReps.resource(), "sales-orders/sales-reps");
    }

    #[test]
    fn test_decode_product_lookup() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"id": 1, "name": "Beras 5kg", "sku": "BRS-5", "price": "65000.00"}]"#,
        )
        .unwrap();
        assert_eq!(products[0].price, 65_000.0);
    }

    #[test]
    fn test_customer_change_resets_page() {
        let filters = SalesOrderFilters::default().with_page(3);
        let next = filters.updated(|f| f.customer_id = Some(4));
        assert_eq!(next.page(), 1);
        assert_eq!(next.customer_id, Some(4));
    }
}
