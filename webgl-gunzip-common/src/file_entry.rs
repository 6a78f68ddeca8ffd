use std::path::{Path, PathBuf};

/// Number of trailing characters dropped to form the output name.
pub const SUFFIX_LEN: usize = 3;

/// One candidate file name in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    name: String,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the decompressed file: the entry name minus its last three
    /// characters. Positional only, the suffix is never checked to be `.gz`,
    /// so `"foo.txt"` maps to `"foo."` and names shorter than three
    /// characters map to `""`.
    pub fn output_name(&self) -> &str {
        let mut chars = self.name.chars();
        for _ in 0..SUFFIX_LEN {
            if chars.next_back().is_none() {
                break;
            }
        }
        chars.as_str()
    }

    pub fn input_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.output_name())
    }
}

impl From<&str> for ManifestEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_gz() {
        assert_eq!(ManifestEntry::new("strong.wasm.gz").output_name(), "strong.wasm");
        assert_eq!(ManifestEntry::new("strong.framework.js.gz").output_name(), "strong.framework.js");
    }

    #[test]
    fn strip_is_positional() {
        assert_eq!(ManifestEntry::new("notes.txt").output_name(), "notes.");
        assert_eq!(ManifestEntry::new("archive.tgz").output_name(), "archive.");
        assert_eq!(ManifestEntry::new("ab").output_name(), "");
        assert_eq!(ManifestEntry::new("").output_name(), "");
    }

    #[test]
    fn strip_counts_chars_not_bytes() {
        assert_eq!(ManifestEntry::new("spel.åäö").output_name(), "spel.");
    }

    #[test]
    fn paths_resolve_against_dir() {
        let entry = ManifestEntry::new("strong.data.gz");
        let dir = Path::new("build");
        assert_eq!(entry.input_path(dir), dir.join("strong.data.gz"));
        assert_eq!(entry.output_path(dir), dir.join("strong.data"));
    }
}
