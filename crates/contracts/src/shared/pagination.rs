use serde::{Deserialize, Serialize};

/// Pagination block as sent by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(alias = "page")]
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(alias = "total_pages")]
    pub last_page: u32,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

/// Body of a list endpoint: `{data, pagination}` or a bare array.
///
/// The payload is kept as received; accessors smooth over the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated {
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListResponse::Paginated { data, .. } => data,
            ListResponse::Bare(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { data, .. } => data,
            ListResponse::Bare(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            ListResponse::Paginated { pagination, .. } => pagination.as_ref(),
            ListResponse::Bare(_) => None,
        }
    }

    /// Total record count across all pages.
    pub fn total(&self) -> u64 {
        self.pagination()
            .map(|p| p.total)
            .unwrap_or(self.items().len() as u64)
    }

    /// 1-based index of the returned page.
    pub fn current_page(&self) -> u32 {
        self.pagination()
            .map(|p| p.current_page.max(1))
            .unwrap_or(1)
    }

    pub fn last_page(&self) -> u32 {
        match self.pagination() {
            Some(p) if p.last_page > 0 => p.last_page,
            Some(p) if p.per_page > 0 => p.total.div_ceil(p.per_page as u64).max(1) as u32,
            _ => 1,
        }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        ListResponse::Bare(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_decode_envelope() {
        let body = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "pagination": {"current_page": 2, "per_page": 2, "total": 7, "last_page": 4}
        }"#;
        let response: ListResponse<Row> = serde_json::from_str(body).unwrap();
        assert_eq!(response.items().len(), 2);
        assert_eq!(response.total(), 7);
        assert_eq!(response.current_page(), 2);
        assert_eq!(response.last_page(), 4);
    }

    #[test]
    fn test_decode_bare_array() {
        let response: ListResponse<Row> = serde_json::from_str(r#"[{"id": 5}]"#).unwrap();
        assert_eq!(response.into_items(), vec![Row { id: 5 }]);
    }

    #[test]
    fn test_aliases_and_derived_last_page() {
        let body = r#"{"data": [], "pagination": {"page": 1, "per_page": 20, "total": 41}}"#;
        let response: ListResponse<Row> = serde_json::from_str(body).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.last_page(), 3);

        let body = r#"{"data": [{"id": 1}], "pagination": {"page": 1, "total_pages": 9}}"#;
        let response: ListResponse<Row> = serde_json::from_str(body).unwrap();
        assert_eq!(response.last_page(), 9);
    }

    #[test]
    fn test_data_without_pagination() {
        let response: ListResponse<Row> =
            serde_json::from_str(r#"{"data": [{"id": 1}, {"id": 2}]}"#).unwrap();
        assert_eq!(response.total(), 2);
        assert_eq!(response.last_page(), 1);
    }
}
