pub mod catalog;
pub mod criteria;
pub mod filter;
pub mod forms;
pub mod hooks;
pub mod listing;
