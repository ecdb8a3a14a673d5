//! Shared test utilities

#![allow(dead_code, unused_imports)]

pub mod registry;

pub use registry::{MockRegistry, create_listing, create_rdb_body};
