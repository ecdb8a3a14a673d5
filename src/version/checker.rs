//! Build ordering between two records of the same package

use crate::version::rpmvercmp::{CompareResult, compare_versions};
use crate::version::types::PackageRecord;

/// Returns true when `candidate` is a strictly newer build than `baseline`.
///
/// Epoch decides on its own when it differs; version and release are only
/// looked at for equal epochs. Both records are expected to share a name.
pub fn is_newer(candidate: &PackageRecord, baseline: &PackageRecord) -> bool {
    if candidate.epoch() != baseline.epoch() {
        return candidate.epoch() > baseline.epoch();
    }

    match compare_versions(candidate.version(), baseline.version()) {
        CompareResult::Equal => {}
        result => return result == CompareResult::Newer,
    }

    compare_versions(candidate.release(), baseline.release()) == CompareResult::Newer
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case((1, "1.0", "alt1"), (0, "9.9", "alt9"), true)] // epoch wins over version
    #[case((0, "9.9", "alt9"), (1, "1.0", "alt1"), false)]
    #[case((0, "2.0", "alt1"), (0, "1.0", "alt5"), true)]
    #[case((0, "1.0", "alt5"), (0, "2.0", "alt1"), false)]
    #[case((0, "1.0", "alt2"), (0, "1.0", "alt1"), true)] // release breaks the tie
    #[case((0, "1.0", "alt1"), (0, "1.0", "alt2"), false)]
    #[case((0, "1.0", "alt1"), (0, "1.0", "alt1"), false)] // equal is not newer
    #[case((0, "1.0", "alt1"), (0, "1-0", "alt.1"), false)]
    fn is_newer_compares_epoch_then_version_then_release(
        #[case] candidate: (u64, &str, &str),
        #[case] baseline: (u64, &str, &str),
        #[case] expected: bool,
    ) {
        let candidate = PackageRecord::new("pkg", candidate.0, candidate.1, candidate.2);
        let baseline = PackageRecord::new("pkg", baseline.0, baseline.1, baseline.2);

        assert_eq!(is_newer(&candidate, &baseline), expected);
    }
}
