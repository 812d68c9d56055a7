use contracts::domain::suppliers::SupplierFilters;
use leptos::prelude::*;

use crate::shared::components::ui::badge::BadgeVariant;

pub fn create_state() -> RwSignal<SupplierFilters> {
    RwSignal::new(SupplierFilters::default())
}

/// `<select>` value for the active flag filter.
pub fn status_filter_value(is_active: Option<bool>) -> &'static str {
    match is_active {
        Some(true) => "active",
        Some(false) => "inactive",
        None => "",
    }
}

pub fn parse_status_filter(value: &str) -> Option<bool> {
    match value {
        "active" => Some(true),
        "inactive" => Some(false),
        _ => None,
    }
}

pub fn status_badge(is_active: bool) -> (BadgeVariant, &'static str) {
    if is_active {
        (BadgeVariant::Success, "Active")
    } else {
        (BadgeVariant::Neutral, "Inactive")
    }
}

pub fn payment_terms_label(days: Option<i32>) -> String {
    match days {
        Some(0) => "Cash".to_string(),
        Some(d) => format!("Net {} days", d),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_round_trip() {
        for value in [Some(true), Some(false), None] {
            assert_eq!(parse_status_filter(status_filter_value(value)), value);
        }
        assert_eq!(parse_status_filter("garbage"), None);
    }

    #[test]
    fn test_payment_terms_label() {
        assert_eq!(payment_terms_label(Some(30)), "Net 30 days");
        assert_eq!(payment_terms_label(Some(0)), "Cash");
        assert_eq!(payment_terms_label(None), "—");
    }
}
