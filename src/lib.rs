//! Compare the binary package sets of two ALT Linux branches.

pub mod config;
pub mod diff;
pub mod fetch;
pub mod logging;
pub mod version;
