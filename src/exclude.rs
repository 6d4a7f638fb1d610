use std::path::Path;

/// Suffix-based exclusion patterns from the manifest's `exclude` list.
///
/// A path is excluded iff its string form ends with any configured suffix,
/// compared case-insensitively. There is no ordering or precedence between
/// suffixes; any match excludes.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    /// Suffixes stored lowercased so each match is a plain `ends_with`
    suffixes: Vec<String>,
}

impl ExclusionSet {
    /// Build an exclusion set from raw manifest strings
    pub fn new(suffixes: Vec<String>) -> Self {
        Self {
            suffixes: suffixes.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// An exclusion set that matches nothing (absent `exclude` list)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Check whether `path` matches any exclusion suffix.
    /// Must be called before copying a file and before descending into a
    /// directory, at every recursion level.
    pub fn matches(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return false;
        }

        let candidate = path.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|s| candidate.ends_with(s.as_str()))
    }
}
