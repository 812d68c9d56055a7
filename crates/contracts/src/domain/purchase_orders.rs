use serde::{Deserialize, Serialize};

use crate::shared::list_filters::{deserialize_amount, ListFilters, ListParams, SortDirection};
use crate::shared::reference::NamedRef;

pub const RESOURCE: &str = "purchase-orders";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    Draft,
    Pending,
    Approved,
    PartiallyReceived,
    Received,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PurchaseOrderStatus {
    pub const FILTERABLE: &'static [PurchaseOrderStatus] = &[
        PurchaseOrderStatus::Draft,
        PurchaseOrderStatus::Pending,
        PurchaseOrderStatus::Approved,
        PurchaseOrderStatus::PartiallyReceived,
        PurchaseOrderStatus::Received,
        PurchaseOrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Pending => "pending",
            PurchaseOrderStatus::Approved => "approved",
            PurchaseOrderStatus::PartiallyReceived => "partially_received",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
            PurchaseOrderStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "Draft",
            PurchaseOrderStatus::Pending => "Pending",
            PurchaseOrderStatus::Approved => "Approved",
            PurchaseOrderStatus::PartiallyReceived => "Partially received",
            PurchaseOrderStatus::Received => "Received",
            PurchaseOrderStatus::Cancelled => "Cancelled",
            PurchaseOrderStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub po_number: String,
    #[serde(default)]
    pub supplier: Option<NamedRef>,
    #[serde(default)]
    pub warehouse: Option<NamedRef>,
    pub order_date: String,
    #[serde(default)]
    pub expected_date: Option<String>,
    pub status: PurchaseOrderStatus,
    #[serde(deserialize_with = "deserialize_amount", default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderFilters {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PurchaseOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Default for PurchaseOrderFilters {
    fn default() -> Self {
        Self {
            params: ListParams::sorted_by("order_date", SortDirection::Desc),
            status: None,
            supplier_id: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl ListFilters for PurchaseOrderFilters {
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
            self.supplier_id.is_some(),
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
    fn test_decode_order_with_string_amount() {
        let body = r#"{
            "id": 12,
            "po_number": "PO-2024-0012",
            "supplier": {"id": 3, "name": "PT Sumber Makmur"},
            "order_date": "2024-05-02",
            "status": "partially_received",
            "total_amount": "2750000.00"
        }"#;
        let order: PurchaseOrder = serde_json::from_str(body).unwrap();
        assert_eq!(order.status, PurchaseOrderStatus::PartiallyReceived);
        assert_eq!(order.total_amount, 2_750_000.0);
        assert_eq!(order.warehouse, None);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let body = r#"{"id": 1, "po_number": "PO-1", "order_date": "2024-01-01", "status": "archived"}"#;
        let order: PurchaseOrder = serde_json::from_str(body).unwrap();
        assert_eq!(order.status, PurchaseOrderStatus::Unknown);
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            PurchaseOrderStatus::parse("approved"),
            Some(PurchaseOrderStatus::Approved)
        );
        assert_eq!(PurchaseOrderStatus::parse("unknown"), None);
        assert_eq!(PurchaseOrderStatus::parse(""), None);
    }

    #[test]
    fn test_active_count() {
        let mut filters = PurchaseOrderFilters::default();
        assert_eq!(filters.active_count(), 0);
        filters.status = Some(PurchaseOrderStatus::Draft);
        filters.date_from = Some("2024-01-01".to_string());
        assert_eq!(filters.active_count(), 2);
    }
}
