//! Common list query parameters and the page-reset rule shared by every list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const PER_PAGE_OPTIONS: &[u32] = &[10, 20, 50, 100];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Pagination, search and sort parameters carried by every list request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            sort_by: None,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl ListParams {
    pub fn sorted_by(field: &str, direction: SortDirection) -> Self {
        Self {
            sort_by: Some(field.to_string()),
            sort_direction: direction,
            ..Self::default()
        }
    }
}

/// Filter objects driving a list endpoint.
///
/// Every transition goes through [`ListFilters::apply_change`]: a change to
/// anything other than `page` lands on page 1, a page-only change keeps the
/// rest of the filters untouched.
pub trait ListFilters: Clone + PartialEq {
    fn params(&self) -> &ListParams;
    fn params_mut(&mut self) -> &mut ListParams;

    fn page(&self) -> u32 {
        self.params().page
    }

    fn per_page(&self) -> u32 {
        self.params().per_page
    }

    fn apply_change(&self, next: Self) -> Self {
        let mut before = self.clone();
        before.params_mut().page = 1;
        let mut after = next.clone();
        after.params_mut().page = 1;

        if before != after {
            after
        } else {
            let mut next = next;
            let page = next.params().page.max(1);
            next.params_mut().page = page;
            next
        }
    }

    /// Applies an arbitrary edit and runs the result through `apply_change`.
    fn updated(&self, edit: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        edit(&mut next);
        self.apply_change(next)
    }

    fn with_page(&self, page: u32) -> Self {
        self.updated(|f| f.params_mut().page = page)
    }

    fn with_per_page(&self, per_page: u32) -> Self {
        self.updated(|f| f.params_mut().per_page = per_page.max(1))
    }

    fn with_search(&self, search: &str) -> Self {
        let trimmed = search.trim();
        self.updated(|f| {
            f.params_mut().search = (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
    }

    /// Same column flips the direction, a new column starts ascending.
    fn with_sort(&self, field: &str) -> Self {
        self.updated(|f| {
            let params = f.params_mut();
            if params.sort_by.as_deref() == Some(field) {
                params.sort_direction = params.sort_direction.toggled();
            } else {
                params.sort_by = Some(field.to_string());
                params.sort_direction = SortDirection::Asc;
            }
        })
    }

    /// Default filters that keep the current page size and sort order.
    fn cleared(&self) -> Self
    where
        Self: Default,
    {
        let mut next = Self::default();
        let params = next.params_mut();
        params.per_page = self.per_page();
        params.sort_by = self.params().sort_by.clone();
        params.sort_direction = self.params().sort_direction;
        next
    }

    /// Number of active filters beyond pagination and sort, for badges.
    fn active_count(&self) -> usize {
        usize::from(self.params().search.is_some())
    }
}

/// Empty strings coming from `<select>` values mean "no filter".
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Accepts a JSON number or a numeric string, as decimal columns arrive
/// serialized as strings.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
        Null(()),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{}': {}", s, e))),
        Amount::Null(()) => Ok(0.0),
    }
}

/// Boolean filters travel as `1`/`0`, the form the API's query parser accepts.
pub fn serialize_flag<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}

/// Reads a flag written by [`serialize_flag`], a JSON bool, or `true`/`false`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(u8),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(flag)) => Ok(Some(flag)),
        Some(Flag::Number(n)) => Ok(Some(n != 0)),
        Some(Flag::Text(s)) => match s.trim() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!("invalid flag '{}'", other))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Filters {
        params: ListParams,
        status: Option<String>,
    }

    impl ListFilters for Filters {
        fn params(&self) -> &ListParams {
            &self.params
        }
        fn params_mut(&mut self) -> &mut ListParams {
            &mut self.params
        }
        fn active_count(&self) -> usize {
            usize::from(self.params.search.is_some()) + usize::from(self.status.is_some())
        }
    }

    fn on_page(page: u32, per_page: u32) -> Filters {
        Filters {
            params: ListParams {
                page,
                per_page,
                ..ListParams::default()
            },
            status: None,
        }
    }

    #[test]
    fn test_per_page_change_resets_page() {
        let current = on_page(3, 20);
        let next = current.with_per_page(50);
        assert_eq!(next.page(), 1);
        assert_eq!(next.per_page(), 50);
    }

    #[test]
    fn test_page_change_keeps_filters() {
        let mut current = on_page(1, 20);
        current.status = Some("approved".to_string());
        let next = current.with_page(4);
        assert_eq!(next.page(), 4);
        assert_eq!(next.status.as_deref(), Some("approved"));
        assert_eq!(next.per_page(), 20);
    }

    #[test]
    fn test_resource_field_change_resets_page() {
        let current = on_page(5, 20);
        let next = current.updated(|f| f.status = Some("draft".to_string()));
        assert_eq!(next.page(), 1);
        assert_eq!(current.active_count(), 0);
        assert_eq!(next.active_count(), 1);
    }

    #[test]
    fn test_combined_page_and_filter_change_lands_on_first_page() {
        let current = on_page(2, 20);
        let next = current.updated(|f| {
            f.params.page = 7;
            f.params.search = Some("acme".to_string());
        });
        assert_eq!(next.page(), 1);
    }

    #[test]
    fn test_search_is_trimmed_and_blank_clears() {
        let current = on_page(3, 20).with_search("  acme ");
        assert_eq!(current.params.search.as_deref(), Some("acme"));
        assert_eq!(current.page(), 1);
        let cleared = current.with_page(2).with_search("   ");
        assert_eq!(cleared.params.search, None);
        assert_eq!(cleared.page(), 1);
    }

    #[test]
    fn test_same_search_keeps_page() {
        let current = on_page(1, 20).with_search("acme").with_page(3);
        assert_eq!(current.with_search("acme").page(), 3);
    }

    #[test]
    fn test_sort_toggle() {
        let current = on_page(2, 20);
        let by_name = current.with_sort("name");
        assert_eq!(by_name.params.sort_by.as_deref(), Some("name"));
        assert_eq!(by_name.params.sort_direction, SortDirection::Asc);
        assert_eq!(by_name.page(), 1);
        let flipped = by_name.with_sort("name");
        assert_eq!(flipped.params.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_cleared_keeps_page_size_and_sort() {
        let mut current = on_page(4, 50).with_sort("name").with_search("acme");
        current.status = Some("draft".into());
        let cleared = current.cleared();
        assert_eq!(cleared.page(), 1);
        assert_eq!(cleared.per_page(), 50);
        assert_eq!(cleared.params.sort_by.as_deref(), Some("name"));
        assert_eq!(cleared.params.search, None);
        assert_eq!(cleared.status, None);
        assert_eq!(cleared.active_count(), 0);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        assert_eq!(on_page(2, 20).with_page(0).page(), 1);
    }

    #[test]
    fn test_deserialize_amount() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "deserialize_amount")]
            amount: f64,
        }
        let row: Row = serde_json::from_str(r#"{"amount": "1500000.00"}"#).unwrap();
        assert_eq!(row.amount, 1_500_000.0);
        let row: Row = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(row.amount, 12.5);
        let row: Row = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(row.amount, 0.0);
        assert!(serde_json::from_str::<Row>(r#"{"amount": "abc"}"#).is_err());
    }
}
