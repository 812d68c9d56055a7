use contracts::domain::sales::{PaymentStatus, Sale, SaleFilters};
use leptos::prelude::*;

use crate::shared::components::ui::badge::BadgeVariant;

pub fn create_state() -> RwSignal<SaleFilters> {
    RwSignal::new(SaleFilters::default())
}

pub fn payment_variant(status: PaymentStatus) -> BadgeVariant {
    match status {
        PaymentStatus::Paid => BadgeVariant::Success,
        PaymentStatus::Partial => BadgeVariant::Warning,
        PaymentStatus::Unpaid => BadgeVariant::Error,
        PaymentStatus::Unknown => BadgeVariant::Neutral,
    }
}

/// Sums shown under the table for the rows on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageTotals {
    pub total: f64,
    pub paid: f64,
    pub outstanding: f64,
}

pub fn page_totals(sales: &[Sale]) -> PageTotals {
    sales.iter().fold(PageTotals::default(), |acc, sale| PageTotals {
        total: acc.total + sale.total_amount,
        paid: acc.paid + sale.paid_amount,
        outstanding: acc.outstanding + sale.outstanding(),
    })
}

/// Sales without a customer were rung up at the counter.
pub fn customer_label(sale: &Sale) -> String {
    sale.customer
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Walk-in".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(total: f64, paid: f64) -> Sale {
        Sale {
            id: 1,
            invoice_number: "INV-1".into(),
            sale_date: "2024-03-05".into(),
            customer: None,
            cashier: None,
            total_amount: total,
            paid_amount: paid,
            payment_status: PaymentStatus::Partial,
            payment_method: None,
        }
    }

    #[test]
    fn test_page_totals() {
        let totals = page_totals(&[sale(100_000.0, 40_000.0), sale(50_000.0, 50_000.0)]);
        assert_eq!(totals.total, 150_000.0);
        assert_eq!(totals.paid, 90_000.0);
        assert_eq!(totals.outstanding, 60_000.0);
        assert_eq!(page_totals(&[]), PageTotals::default());
    }

    #[test]
    fn test_walk_in_customer() {
        assert_eq!(customer_label(&sale(1.0, 1.0)), "Walk-in");
    }
}
