//! Comparison of two branch listings
//!
//! - [`differ`]: computes unique and higher-version package sets
//! - [`report`]: the resulting report and its JSON shape

pub mod differ;
pub mod report;

pub use differ::diff;
pub use report::DiffReport;
