use serde::{Deserialize, Serialize};

use crate::shared::list_filters::{deserialize_amount, ListFilters, ListParams, SortDirection};
use crate::shared::reference::NamedRef;

pub const RESOURCE: &str = "sales";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub const FILTERABLE: &'static [PaymentStatus] =
        &[PaymentStatus::Paid, PaymentStatus::Partial, PaymentStatus::Unpaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub invoice_number: String,
    pub sale_date: String,
    #[serde(default)]
    pub customer: Option<NamedRef>,
    #[serde(default)]
    pub cashier: Option<NamedRef>,
    #[serde(deserialize_with = "deserialize_amount", default)]
    pub total_amount: f64,
    #[serde(deserialize_with = "deserialize_amount", default)]
    pub paid_amount: f64,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl Sale {
    pub fn outstanding(&self) -> f64 {
        (self.total_amount - self.paid_amount).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleFilters {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Default for SaleFilters {
    fn default() -> Self {
        Self {
            params: ListParams::sorted_by("sale_date", SortDirection::Desc),
            payment_status: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl ListFilters for SaleFilters {
    fn params(&self) -> &ListParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_count(&self) -> usize {
        [
            self.params.search.is_some(),
            self.payment_status.is_some(),
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
    fn test_outstanding_never_negative() {
        let body = r#"{
            "id": 1,
            "invoice_number": "INV-0001",
            "sale_date": "2024-06-01T09:30:00Z",
            "total_amount": 100000,
            "paid_amount": "120000",
            "payment_status": "paid"
        }"#;
        let sale: Sale = serde_json::from_str(body).unwrap();
        assert_eq!(sale.outstanding(), 0.0);
        assert_eq!(sale.customer, None);
    }

    #[test]
    fn test_partial_payment() {
        let body = r#"{
            "id": 2,
            "invoice_number": "INV-0002",
            "sale_date": "2024-06-01",
            "customer": {"id": 9, "name": "Toko Berkah"},
            "total_amount": "250000.00",
            "paid_amount": "100000.00",
            "payment_status": "partial",
            "payment_method": "cash"
        }"#;
        let sale: Sale = serde_json::from_str(body).unwrap();
        assert_eq!(sale.payment_status, PaymentStatus::Partial);
        assert_eq!(sale.outstanding(), 150_000.0);
    }
}
