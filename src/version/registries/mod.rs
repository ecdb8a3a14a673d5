//! Registry implementations for fetching branch listings

pub mod rdb;

pub use rdb::RdbRegistry;
