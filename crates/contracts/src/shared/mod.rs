pub mod list_filters;
pub mod pagination;
pub mod reference;
