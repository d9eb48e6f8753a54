//! Word list loading utilities
//!
//! Loads tier files from disk into a `WordStore`.

use super::WordStore;
use crate::error::DictionaryError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Tier file names inside a dictionary directory, easiest first
///
/// The mapping is positional: the n-th file is tier n.
pub const TIER_FILES: [&str; 6] = [
    "english-words.10",
    "english-words.20",
    "english-words.35",
    "english-words.40",
    "english-words.50",
    "english-words.55",
];

/// Load a store from explicit tier files, in tier order
///
/// # Errors
///
/// Returns `DictionaryError::Read` for the first file that cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use tiered_wordle::wordlists::loader::load_files;
///
/// let store = load_files(&["words/common.txt", "words/rare.txt"]).unwrap();
/// println!("Loaded {} tiers", store.tier_count());
/// ```
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<WordStore, DictionaryError> {
    let mut readers = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dictionary tier");
        let file = File::open(path).map_err(|source| DictionaryError::Read {
            path: path.display().to_string(),
            source,
        })?;
        readers.push(BufReader::new(file));
    }

    let store = WordStore::from_readers(readers).map_err(|err| match err {
        DictionaryError::Io { tier, source } => DictionaryError::Read {
            path: paths[tier - 1].as_ref().display().to_string(),
            source,
        },
        other => other,
    })?;

    for tier in 1..=store.tier_count() {
        info!(
            tier,
            words = store.tier_len(tier).unwrap_or_default(),
            "loaded dictionary tier"
        );
    }

    Ok(store)
}

/// Load the six standard tiers from a dictionary directory
///
/// # Errors
///
/// Returns `DictionaryError::Read` if any of the `TIER_FILES` is missing or unreadable.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<WordStore, DictionaryError> {
    let dir = dir.as_ref();
    let paths: Vec<_> = TIER_FILES.iter().map(|name| dir.join(name)).collect();
    load_files(&paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Write tier fixtures into a fresh directory under the system temp dir
    fn write_fixture_dir(name: &str, tiers: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tiered_wordle_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, contents) in TIER_FILES.iter().zip(tiers) {
            fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    #[test]
    fn load_dir_reads_all_tiers() {
        let dir = write_fixture_dir(
            "load_dir",
            &["Crane\nslate\n", "house\n", "zebra\n", "quartz\n", "fjord\n", "xylyl\n"],
        );

        let store = load_dir(&dir).unwrap();
        assert_eq!(store.tier_count(), 6);
        assert_eq!(store.tier_len(1), Some(2));
        assert!(store.is_valid_word("CRANE"));
        assert!(store.is_valid_word("xylyl"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_dir_missing_file_names_path() {
        // Only five of six tier files present
        let dir = write_fixture_dir("missing", &["a\n", "b\n", "c\n", "d\n", "e\n"]);

        let err = load_dir(&dir).unwrap_err();
        match err {
            DictionaryError::Read { path, .. } => assert!(path.ends_with("english-words.55")),
            other => panic!("unexpected error: {other}"),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_files_explicit_paths() {
        let dir = write_fixture_dir("explicit", &["one\n", "two\n"]);
        let paths = [dir.join(TIER_FILES[1]), dir.join(TIER_FILES[0])];

        let store = load_files(&paths).unwrap();
        assert_eq!(store.tier_count(), 2);
        assert_eq!(store.count_with_length(1, 3).unwrap(), 1);
        assert!(store.is_valid_word("two"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_files_empty_list() {
        let paths: [PathBuf; 0] = [];
        let store = load_files(&paths).unwrap();
        assert_eq!(store.tier_count(), 0);
    }
}
