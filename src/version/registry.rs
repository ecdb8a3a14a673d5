//! Registry trait for fetching branch package listings

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::{Arch, Branch, BranchListing};

/// Trait for fetching the binary package listing of a branch
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every binary package of `branch` built for `arch`
    ///
    /// # Returns
    /// * `Ok(BranchListing)` - Packages keyed by name, in response order
    /// * `Err(RegistryError)` - If the request fails, the index answers with
    ///   a non-success status, or an entry lacks the fields needed to order it
    async fn fetch_listing(&self, branch: Branch, arch: Arch)
    -> Result<BranchListing, RegistryError>;
}
