use contracts::domain::purchase_orders::{PurchaseOrderFilters, PurchaseOrderStatus};
use leptos::prelude::*;

use crate::shared::components::ui::badge::BadgeVariant;

pub fn create_state() -> RwSignal<PurchaseOrderFilters> {
    RwSignal::new(PurchaseOrderFilters::default())
}

pub fn status_variant(status: PurchaseOrderStatus) -> BadgeVariant {
    match status {
        PurchaseOrderStatus::Draft => BadgeVariant::Neutral,
        PurchaseOrderStatus::Pending => BadgeVariant::Warning,
        PurchaseOrderStatus::Approved | PurchaseOrderStatus::PartiallyReceived => {
            BadgeVariant::Primary
        }
        PurchaseOrderStatus::Received => BadgeVariant::Success,
        PurchaseOrderStatus::Cancelled => BadgeVariant::Error,
        PurchaseOrderStatus::Unknown => BadgeVariant::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(PurchaseOrderStatus::Received), BadgeVariant::Success);
        assert_eq!(status_variant(PurchaseOrderStatus::Cancelled), BadgeVariant::Error);
        assert_eq!(status_variant(PurchaseOrderStatus::Pending), BadgeVariant::Warning);
    }
}
