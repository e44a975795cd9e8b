//! Privacy exclusion matching for version-constraint strings.
//!
//! A version string that points at a privately hosted source (a git URL on
//! GitHub, GitLab, Bitbucket, or anything else the user configures) must not
//! land in the merged manifest - those packages are wired up with `monolink
//! link` instead. Matching is plain case-insensitive substring containment,
//! no anchoring, no regular expressions.

/// An ordered set of substrings marking version strings as privately hosted.
#[derive(Debug, Clone)]
pub struct ExclusionPatterns(Vec<String>);

impl ExclusionPatterns {
    /// Build a pattern set from user-supplied substrings.
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    /// True iff the lower-cased version string contains any lower-cased
    /// pattern as a substring.
    pub fn is_private(&self, version: &str) -> bool {
        let version = version.to_lowercase();
        self.0
            .iter()
            .any(|pattern| version.contains(&pattern.to_lowercase()))
    }
}

impl Default for ExclusionPatterns {
    /// The stock pattern set: `github`, `gitlab`, `bitbucket`.
    fn default() -> Self {
        Self(vec![
            "github".to_string(),
            "gitlab".to_string(),
            "bitbucket".to_string(),
        ])
    }
}
