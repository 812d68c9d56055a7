use serde::{Deserialize, Serialize};

/// Related record embedded in a list row (supplier, customer, cashier...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Display name of an optional relation, `-` when it is missing.
pub fn name_or_dash(reference: &Option<NamedRef>) -> String {
    reference
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "-".to_string())
}
