pub mod purchase_orders;
pub mod sales;
pub mod sales_orders;
pub mod suppliers;
