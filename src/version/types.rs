//! Package records, branch listings and the repository coordinates they come from

use std::fmt;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::version::error::RecordError;

/// Repository branch known to the package index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Branch {
    /// Rolling development branch
    #[value(name = "sisyphus")]
    Sisyphus,
    /// Eleventh platform (stable) branch
    #[value(name = "p11")]
    P11,
    /// Tenth platform (stable) branch
    #[value(name = "p10")]
    P10,
    /// Ninth platform (stable) branch
    #[value(name = "p9")]
    P9,
}

impl Branch {
    /// Returns the name the package index uses for this branch
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Sisyphus => "sisyphus",
            Branch::P11 => "p11",
            Branch::P10 => "p10",
            Branch::P9 => "p9",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary package architecture known to the package index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Arch {
    #[value(name = "aarch64")]
    Aarch64,
    #[value(name = "armh")]
    Armh,
    #[value(name = "i586")]
    I586,
    #[value(name = "noarch")]
    Noarch,
    #[value(name = "ppc64le")]
    Ppc64le,
    #[value(name = "riscv64")]
    Riscv64,
    #[value(name = "loongarch64")]
    Loongarch64,
    #[value(name = "x86_64")]
    X86_64,
    /// 32-bit compatibility packages built for x86_64
    #[value(name = "x86_64-i586")]
    X86_64I586,
}

impl Arch {
    /// Returns the name the package index uses for this architecture
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Aarch64 => "aarch64",
            Arch::Armh => "armh",
            Arch::I586 => "i586",
            Arch::Noarch => "noarch",
            Arch::Ppc64le => "ppc64le",
            Arch::Riscv64 => "riscv64",
            Arch::Loongarch64 => "loongarch64",
            Arch::X86_64 => "x86_64",
            Arch::X86_64I586 => "x86_64-i586",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One binary package build as listed by the package index.
///
/// The ordering fields are extracted once; the full upstream object is kept
/// untouched and is what gets serialized back out.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: String,
    epoch: u64,
    version: String,
    release: String,
    raw: Map<String, Value>,
}

impl PackageRecord {
    /// Creates a record that carries no metadata beyond the ordering fields
    pub fn new(name: &str, epoch: u64, version: &str, release: &str) -> Self {
        let mut raw = Map::new();
        raw.insert("name".to_string(), Value::from(name));
        raw.insert("epoch".to_string(), Value::from(epoch));
        raw.insert("version".to_string(), Value::from(version));
        raw.insert("release".to_string(), Value::from(release));

        Self {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            raw,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    /// The upstream object this record was built from
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// `epoch:version-release`, the way rpm prints it
    pub fn evr(&self) -> String {
        format!("{}:{}-{}", self.epoch, self.version, self.release)
    }
}

impl TryFrom<Map<String, Value>> for PackageRecord {
    type Error = RecordError;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let name = string_field(&raw, "name")?;
        let version = string_field(&raw, "version")?;
        let release = string_field(&raw, "release")?;

        let epoch = match raw.get("epoch") {
            None | Some(Value::Null) => 0,
            Some(value) => value.as_u64().ok_or_else(|| RecordError::InvalidField {
                field: "epoch",
                reason: format!("expected a non-negative integer, got {value}"),
            })?,
        };

        Ok(Self {
            name,
            epoch,
            version,
            release,
            raw,
        })
    }
}

fn string_field(raw: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(RecordError::InvalidField {
            field,
            reason: format!("expected a string, got {other}"),
        }),
    }
}

impl Serialize for PackageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Packages of one (branch, arch) pair, keyed by name.
///
/// Iteration follows the order in which names were first inserted. Inserting
/// a name that is already present replaces its record without moving it, so
/// the last record seen for a name wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchListing {
    packages: IndexMap<String, PackageRecord>,
}

impl BranchListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the one it replaced
    pub fn insert(&mut self, record: PackageRecord) -> Option<PackageRecord> {
        self.packages.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }
}

impl FromIterator<PackageRecord> for BranchListing {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut listing = Self::new();
        for record in iter {
            listing.insert(record);
        }
        listing
    }
}
