pub mod auth_error;
pub mod coming_soon;
pub mod dashboard;
pub mod login;
