//! Wire types shared by the console frontend and the POS REST API,
//! plus the pure list/filter rules every list page follows.

pub mod domain;
pub mod shared;
pub mod system;
