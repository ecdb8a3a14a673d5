//! ALT Linux repository database (rdb) export API implementation

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::USER_AGENT;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{Arch, Branch, BranchListing, PackageRecord};

/// Response from `/export/branch_binary_packages/{branch}`
#[derive(Debug, Deserialize)]
struct BranchPackagesResponse {
    packages: Vec<Map<String, Value>>,
}

/// Registry implementation for the rdb export API
pub struct RdbRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl RdbRegistry {
    /// Creates a new RdbRegistry with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn listing_url(&self, branch: Branch, arch: Arch) -> String {
        format!(
            "{}/export/branch_binary_packages/{}?arch={}",
            self.base_url,
            branch.as_str(),
            arch.as_str()
        )
    }
}

#[async_trait::async_trait]
impl Registry for RdbRegistry {
    async fn fetch_listing(
        &self,
        branch: Branch,
        arch: Arch,
    ) -> Result<BranchListing, RegistryError> {
        let url = self.listing_url(branch, arch);
        debug!("Fetching {} listing from {}", branch, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            debug!("rdb returned status {}: {}", status, url);
            return Err(RegistryError::Status { branch, status });
        }

        let body: BranchPackagesResponse = response.json().await.map_err(|e| {
            debug!("Failed to parse rdb response for {}: {}", branch, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let records = body
            .packages
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                PackageRecord::try_from(raw).map_err(|source| RegistryError::MalformedListing {
                    branch,
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut listing = BranchListing::new();
        let mut repeated = 0;

        for record in records {
            if let Some(replaced) = listing.insert(record) {
                repeated += 1;
                let kept = listing
                    .get(replaced.name())
                    .map(PackageRecord::evr)
                    .unwrap_or_default();
                debug!(
                    "{} listing repeats {}: keeping {} over {}",
                    branch,
                    replaced.name(),
                    kept,
                    replaced.evr()
                );
            }
        }

        if repeated > 0 {
            warn!(
                "{} listing for {} repeats {} package names; keeping the last entry of each",
                branch, arch, repeated
            );
        }
        info!("Fetched {} packages for {}/{}", listing.len(), branch, arch);

        Ok(listing)
    }
}
