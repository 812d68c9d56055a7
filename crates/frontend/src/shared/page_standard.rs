//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"suppliers--list"`) and a `data-page-category` from the list below.

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview / summary page.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Sign-in and auth error screens, rendered outside the shell.
pub const PAGE_CAT_AUTH: &str = "auth";

/// Placeholder for routes that exist in the menu but are not built yet.
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("suppliers--list"));
        assert!(!is_valid_page_id("suppliers"));
        assert!(!is_valid_page_id("--list"));
    }
}
