pub mod account_store;
pub mod session_store;
