//! Diff report and its wire format

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::version::types::{Arch, Branch, PackageRecord};

/// Result of comparing a main branch against an auxiliary branch
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    pub arch: Arch,
    pub main_branch: Branch,
    pub aux_branch: Branch,
    /// Packages present only on the main branch
    pub uniq_main: Vec<PackageRecord>,
    /// Packages present only on the auxiliary branch
    pub uniq_aux: Vec<PackageRecord>,
    /// Main branch builds strictly newer than the auxiliary branch build
    pub higher_version: Vec<PackageRecord>,
}

impl DiffReport {
    pub fn total_uniq_main(&self) -> usize {
        self.uniq_main.len()
    }

    pub fn total_uniq_aux(&self) -> usize {
        self.uniq_aux.len()
    }

    pub fn total_higher_version(&self) -> usize {
        self.higher_version.len()
    }
}

/// Keys embed the branch names, e.g. `total_uniq_sisyphus` and `uniq_p10`.
///
/// When both sides are the same branch the keys coincide, so the auxiliary
/// entries are left out rather than written twice.
impl Serialize for DiffReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let main = self.main_branch.as_str();
        let aux = self.aux_branch.as_str();
        let same_branch = self.main_branch == self.aux_branch;

        let mut map = serializer.serialize_map(Some(if same_branch { 5 } else { 7 }))?;
        map.serialize_entry("arch", self.arch.as_str())?;
        map.serialize_entry(&format!("total_uniq_{main}"), &self.total_uniq_main())?;
        if !same_branch {
            map.serialize_entry(&format!("total_uniq_{aux}"), &self.total_uniq_aux())?;
        }
        map.serialize_entry("total_higher_version", &self.total_higher_version())?;
        map.serialize_entry(&format!("uniq_{main}"), &self.uniq_main)?;
        if !same_branch {
            map.serialize_entry(&format!("uniq_{aux}"), &self.uniq_aux)?;
        }
        map.serialize_entry("higher_version", &self.higher_version)?;
        map.end()
    }
}
