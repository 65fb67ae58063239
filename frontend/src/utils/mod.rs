pub mod catalog;
pub mod lead;
pub mod notify;
pub mod price;
pub mod server;
