use serde::{Deserialize, Serialize};

use crate::shared::list_filters::{
    deserialize_flag, serialize_flag, ListFilters, ListParams, SortDirection,
};

pub const RESOURCE: &str = "suppliers";
const OPTIONS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Payment terms in days.
    #[serde(default)]
    pub payment_terms: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierFilters {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_flag",
        deserialize_with = "deserialize_flag"
    )]
    pub is_active: Option<bool>,
}

impl Default for SupplierFilters {
    fn default() -> Self {
        Self {
            params: ListParams::sorted_by("name", SortDirection::Asc),
            is_active: None,
        }
    }
}

impl SupplierFilters {
    /// Active suppliers by name, one page large enough for a dropdown.
    pub fn active_options() -> Self {
        let mut filters = Self {
            is_active: Some(true),
            ..Self::default()
        };
        filters.params.per_page = OPTIONS_PER_PAGE;
        filters
    }
}

impl ListFilters for SupplierFilters {
    fn params(&self) -> &ListParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    fn active_count(&self) -> usize {
        usize::from(self.params.search.is_some()) + usize::from(self.is_active.is_some())
    }
}
