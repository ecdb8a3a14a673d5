//! Two-way diff between branch listings

use crate::diff::report::DiffReport;
use crate::version::checker::is_newer;
use crate::version::types::{Arch, Branch, BranchListing};

/// Compare the main branch listing against the auxiliary one.
///
/// Each output list follows the iteration order of the listing it was drawn
/// from, so identical inputs always produce identical reports.
pub fn diff(
    main_branch: Branch,
    main: &BranchListing,
    aux_branch: Branch,
    aux: &BranchListing,
    arch: Arch,
) -> DiffReport {
    let uniq_aux = aux
        .iter()
        .filter(|record| !main.contains(record.name()))
        .cloned()
        .collect();

    let mut uniq_main = Vec::new();
    let mut higher_version = Vec::new();

    for record in main.iter() {
        match aux.get(record.name()) {
            None => uniq_main.push(record.clone()),
            Some(aux_record) if is_newer(record, aux_record) => {
                higher_version.push(record.clone());
            }
            Some(_) => {}
        }
    }

    DiffReport {
        arch,
        main_branch,
        aux_branch,
        uniq_main,
        uniq_aux,
        higher_version,
    }
}
