//! RPM-style version string comparison
//!
//! Versions and releases are compared as a sequence of token runs. Each step
//! drops leading separators (anything that is not an ASCII letter or digit),
//! then compares the next run of digits or letters on both sides:
//!
//! - a digit run beats a letter run or an exhausted string
//! - digit runs compare by numeric magnitude, of any length
//! - letter runs compare by byte order (case-sensitive)
//! - a letter run beats an exhausted string
//!
//! When every run compared equal, the side with characters left over wins.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    /// Left side is newer than the right side
    Newer,
    /// Left side is older than the right side
    Older,
    /// Both sides are equal
    Equal,
}

impl From<Ordering> for CompareResult {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => CompareResult::Newer,
            Ordering::Less => CompareResult::Older,
            Ordering::Equal => CompareResult::Equal,
        }
    }
}

impl From<CompareResult> for Ordering {
    fn from(result: CompareResult) -> Self {
        match result {
            CompareResult::Newer => Ordering::Greater,
            CompareResult::Older => Ordering::Less,
            CompareResult::Equal => Ordering::Equal,
        }
    }
}

/// Compare two version (or release) strings.
///
/// Returns `Newer` when `a` sorts after `b`, `Older` when it sorts before,
/// and `Equal` when no token run differs.
///
/// Examples:
/// - "10" vs "9" -> Newer
/// - "1.0.0" vs "1-0-0" -> Equal
/// - "1.a" vs "1" -> Newer
/// - "1.0a" vs "1.0.1" -> Older
pub fn compare_versions(a: &str, b: &str) -> CompareResult {
    let mut a = a;
    let mut b = b;

    while !a.is_empty() || !b.is_empty() {
        a = strip_separators(a);
        b = strip_separators(b);

        let (a_digits, a_rest) = split_run(a, |c| c.is_ascii_digit());
        let (b_digits, b_rest) = split_run(b, |c| c.is_ascii_digit());

        if !a_digits.is_empty() {
            if b_digits.is_empty() {
                return CompareResult::Newer;
            }
            match compare_numeric(a_digits, b_digits) {
                Ordering::Equal => {}
                ordering => return ordering.into(),
            }
            a = a_rest;
            b = b_rest;
            continue;
        }

        if !b_digits.is_empty() {
            return CompareResult::Older;
        }

        let (a_alpha, a_rest) = split_run(a, |c| c.is_ascii_alphabetic());
        let (b_alpha, b_rest) = split_run(b, |c| c.is_ascii_alphabetic());

        match (a_alpha.is_empty(), b_alpha.is_empty()) {
            // Nothing but separators was left on either side
            (true, true) => break,
            (false, true) => return CompareResult::Newer,
            (true, false) => return CompareResult::Older,
            (false, false) => match a_alpha.cmp(b_alpha) {
                Ordering::Equal => {}
                ordering => return ordering.into(),
            },
        }

        a = a_rest;
        b = b_rest;
    }

    match (a.is_empty(), b.is_empty()) {
        (true, true) => CompareResult::Equal,
        (false, _) => CompareResult::Newer,
        (true, false) => CompareResult::Older,
    }
}

fn strip_separators(s: &str) -> &str {
    s.trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
}

/// Split `s` after the longest prefix whose characters all satisfy `pred`.
fn split_run(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two runs of ASCII digits by magnitude without parsing them,
/// so arbitrarily long runs never overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
