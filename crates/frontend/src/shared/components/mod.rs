pub mod date_input;
pub mod filter_panel;
pub mod id_select;
pub mod list_states;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
pub mod ui;
