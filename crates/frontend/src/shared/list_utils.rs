//! Sort indicators and `<select>` value helpers for list pages.

use contracts::shared::list_filters::{ListParams, SortDirection};

/// Arrow shown next to a column header.
pub fn get_sort_indicator(params: &ListParams, field: &str) -> &'static str {
    match (params.sort_by.as_deref(), params.sort_direction) {
        (Some(current), SortDirection::Asc) if current == field => " ▲",
        (Some(current), SortDirection::Desc) if current == field => " ▼",
        _ => " ⇅",
    }
}

pub fn get_sort_class(params: &ListParams, field: &str) -> &'static str {
    if params.sort_by.as_deref() == Some(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// `<select>` value for an optional id filter; `""` means "all".
pub fn id_filter_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

pub fn parse_id_filter(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator() {
        let params = ListParams::sorted_by("name", SortDirection::Asc);
        assert_eq!(get_sort_indicator(&params, "name"), " ▲");
        assert_eq!(get_sort_indicator(&params, "city"), " ⇅");
        let params = ListParams::sorted_by("name", SortDirection::Desc);
        assert_eq!(get_sort_indicator(&params, "name"), " ▼");
        assert_eq!(get_sort_class(&params, "name"), "sort-icon active");
        assert_eq!(get_sort_class(&ListParams::default(), "name"), "sort-icon");
    }

    #[test]
    fn test_id_filter() {
        assert_eq!(parse_id_filter(&id_filter_value(Some(42))), Some(42));
        assert_eq!(parse_id_filter(&id_filter_value(None)), None);
        assert_eq!(parse_id_filter("abc"), None);
    }
}
