//! Concurrent fetching of the two branch listings

use std::time::Duration;

use futures::future::try_join;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::diff::{DiffReport, diff};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{Arch, Branch, BranchListing};

/// Fetch the main and auxiliary listings for `arch` at the same time.
///
/// Both requests share one `budget`. If either fails, or the budget runs out
/// first, the other request is dropped and no listing is returned.
pub async fn fetch_listings(
    registry: &dyn Registry,
    main_branch: Branch,
    aux_branch: Branch,
    arch: Arch,
    budget: Duration,
) -> Result<(BranchListing, BranchListing), RegistryError> {
    debug!(
        "Fetching {}/{} and {}/{} with a {:?} budget",
        main_branch, arch, aux_branch, arch, budget
    );

    let both = try_join(
        registry.fetch_listing(main_branch, arch),
        registry.fetch_listing(aux_branch, arch),
    );

    // Failures are reported once by the caller
    match timeout(budget, both).await {
        Ok(result) => result,
        Err(_) => {
            debug!("Fetching listings for {} exceeded {:?}", arch, budget);
            Err(RegistryError::Timeout(budget))
        }
    }
}

/// Fetch both listings and diff them.
pub async fn compare_branches(
    registry: &dyn Registry,
    main_branch: Branch,
    aux_branch: Branch,
    arch: Arch,
    budget: Duration,
) -> Result<DiffReport, RegistryError> {
    let (main, aux) = fetch_listings(registry, main_branch, aux_branch, arch, budget).await?;

    let report = diff(main_branch, &main, aux_branch, &aux, arch);
    info!(
        "{}: {} unique to {}, {} unique to {}, {} newer on {}",
        arch,
        report.total_uniq_main(),
        main_branch,
        report.total_uniq_aux(),
        aux_branch,
        report.total_higher_version(),
        main_branch
    );

    Ok(report)
}
