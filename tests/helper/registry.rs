//! Registry test utilities

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use alt_branch_diff::version::error::RegistryError;
use alt_branch_diff::version::registry::Registry;
use alt_branch_diff::version::types::{Arch, Branch, BranchListing, PackageRecord};

/// What the mock registry does for one branch
enum Response {
    Listing(BranchListing),
    Status(reqwest::StatusCode),
}

/// Mock registry for testing
pub struct MockRegistry {
    responses: HashMap<Branch, Response>,
    delays: HashMap<Branch, Duration>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            delays: HashMap::new(),
        }
    }

    /// Serve `(name, epoch, version, release)` records for `branch`
    pub fn with_packages(mut self, branch: Branch, packages: &[(&str, u64, &str, &str)]) -> Self {
        self.responses
            .insert(branch, Response::Listing(create_listing(packages)));
        self
    }

    /// Answer `branch` with a non-success status
    pub fn with_status(mut self, branch: Branch, status: reqwest::StatusCode) -> Self {
        self.responses.insert(branch, Response::Status(status));
        self
    }

    /// Hold the response for `branch` back for `delay`
    pub fn with_delay(mut self, branch: Branch, delay: Duration) -> Self {
        self.delays.insert(branch, delay);
        self
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_listing(
        &self,
        branch: Branch,
        _arch: Arch,
    ) -> Result<BranchListing, RegistryError> {
        if let Some(delay) = self.delays.get(&branch) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(&branch) {
            Some(Response::Listing(listing)) => Ok(listing.clone()),
            Some(Response::Status(status)) => Err(RegistryError::Status {
                branch,
                status: *status,
            }),
            None => Err(RegistryError::Status {
                branch,
                status: reqwest::StatusCode::NOT_FOUND,
            }),
        }
    }
}

/// Build a listing from `(name, epoch, version, release)` tuples
pub fn create_listing(packages: &[(&str, u64, &str, &str)]) -> BranchListing {
    packages
        .iter()
        .map(|(name, epoch, version, release)| PackageRecord::new(name, *epoch, version, release))
        .collect()
}

/// Build an rdb `branch_binary_packages` response body
pub fn create_rdb_body(arch: &str, packages: Vec<Value>) -> String {
    json!({
        "request_args": { "arch": arch },
        "length": packages.len(),
        "packages": packages,
    })
    .to_string()
}
