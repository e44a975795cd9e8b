//! Version precedence policy for conflicting declarations.
//!
//! When two projects declare the same package with different version strings,
//! the winner is decided by stripping at most one leading range qualifier
//! (`^` or `~`) from each side and comparing the remainders as plain strings.
//!
//! # Known Limitation
//!
//! The comparison is lexicographic, not semver-aware: `"9.0.0"` beats
//! `"10.0.0"` because `'9' > '1'` byte-wise, even though real semantic
//! versioning orders them the other way. Multi-digit version components are
//! therefore compared incorrectly. This is long-standing documented behavior
//! that downstream workflows depend on, so it is preserved rather than fixed.

/// True iff `incoming` should replace `existing` in the merged result.
///
/// Equal or lexicographically lesser incoming versions lose and are skipped.
pub fn takes_precedence(existing: &str, incoming: &str) -> bool {
    strip_range_qualifier(incoming) > strip_range_qualifier(existing)
}

/// Strip at most one leading `^` or `~` from a version string.
fn strip_range_qualifier(version: &str) -> &str {
    version.strip_prefix(['^', '~']).unwrap_or(version)
}
