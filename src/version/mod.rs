//! Version extraction and ordering
//!
//! Package filenames on the mirror follow `halo(-pro)?-<version>.jar`.
//! Extraction is tolerant: keys outside that shape (configuration files,
//! stray uploads) yield no version, an expected case rather than an error.
//! Ordering follows semantic-version precedence, newest first, and falls
//! back to reverse-lexicographic raw-key comparison whenever either side has
//! no parseable version, so every group still sorts into a deterministic
//! total order.

use std::cmp::Ordering;

use regex_lite::Regex;
use semver::Version;

/// Pulls the version token out of a package key
#[derive(Debug)]
pub struct VersionExtractor {
    pattern: Regex,
}

impl Default for VersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionExtractor {
    pub fn new() -> Self {
        // Lazy capture keeps the version to the shortest non-empty run
        // before the ".jar" suffix
        let pattern = Regex::new(r"halo(?:-pro)?-(.+?)\.jar").expect("version pattern is valid");
        Self { pattern }
    }

    /// Extract the embedded version from a key
    ///
    /// Returns `None` when the key does not follow the packaging convention.
    /// Pure function of its input, no side effects.
    pub fn extract(&self, key: &str) -> Option<String> {
        self.pattern
            .captures(key)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Order two artifacts newest-first by their extracted versions
///
/// When both sides parse as semantic versions the result is semver
/// precedence inverted (a pre-release sorts below the same version without a
/// suffix, suffix segments compare per the semver rules). When either side
/// fails to parse, including when extraction yielded no version at all, the
/// result is reverse-lexicographic comparison of the raw keys. Equal inputs
/// compare equal, so this is usable as a strict weak ordering for sorting.
pub fn compare_newest_first(
    a_version: Option<&str>,
    b_version: Option<&str>,
    a_key: &str,
    b_key: &str,
) -> Ordering {
    let parse = |v: Option<&str>| v.and_then(|v| Version::parse(v).ok());

    match (parse(a_version), parse(b_version)) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => b_key.cmp(a_key),
    }
}
