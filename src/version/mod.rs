//! Package version layer
//!
//! This module provides fetching of branch listings and the RPM ordering
//! used to decide which of two builds of a package is newer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Listing   │────▶│   Checker   │
//! │  (fetch)    │     │  (by name)  │     │ (is_newer)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │  rpmvercmp  │
//! │   (rdb)     │                         │ (token cmp) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Epoch/version/release ordering of two records
//! - [`rpmvercmp`]: RPM version string comparison
//! - [`registry`]: Registry trait for fetching branch listings
//! - [`registries`]: Concrete registry implementations
//! - [`error`]: Error types for records and registry operations
//! - [`types`]: `PackageRecord`, `BranchListing`, `Branch` and `Arch`

pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod rpmvercmp;
pub mod types;
