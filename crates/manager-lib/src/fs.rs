//! Filesystem helpers
//!
//! Temporary directory creation with mkdtemp-like semantics: a name
//! pattern ending in `.XXXXXX` has the placeholder replaced with
//! random characters, and creation retries on collision until a unique
//! directory exists.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Placeholder suffix replaced with random characters.
const PATTERN_SUFFIX: &str = ".XXXXXX";

/// Pattern used when none is given.
const DEFAULT_PATTERN: &str = "tmp";

const SUFFIX_LEN: usize = 6;
const MAX_ATTEMPTS: u32 = 100;

/// Atomically create a unique directory and return its path.
///
/// `dir` defaults to the system temp directory. `pattern` must end
/// with `.XXXXXX`; the suffix is appended when missing, and an empty
/// pattern becomes `tmp.XXXXXX`.
pub fn create_tmp_dir(dir: Option<&Path>, pattern: Option<&str>) -> Result<PathBuf> {
    let base = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::temp_dir(),
    };

    let pattern = match pattern {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => DEFAULT_PATTERN.to_string(),
    };
    let pattern = if pattern.ends_with(PATTERN_SUFFIX) {
        pattern
    } else {
        format!("{pattern}{PATTERN_SUFFIX}")
    };
    let prefix = &pattern[..pattern.len() - SUFFIX_LEN];

    let mut seed = time_seed();

    for _ in 0..MAX_ATTEMPTS {
        let path = base.join(format!("{prefix}{}", random_suffix(&mut seed)));

        match std::fs::create_dir(&path) {
            Ok(()) => return Ok(path),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create directory {:?}", path))
            }
        }
    }

    anyhow::bail!("Failed to create a unique directory under {:?}", base)
}

fn time_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_secs() ^ u64::from(now.subsec_nanos()) | 1
}

/// xorshift-based suffix generator; uniqueness is guaranteed by the
/// create_dir collision check, not by the generator.
fn random_suffix(seed: &mut u64) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    (0..SUFFIX_LEN)
        .map(|_| {
            *seed ^= *seed << 13;
            *seed ^= *seed >> 7;
            *seed ^= *seed << 17;
            ALPHABET[(*seed % ALPHABET.len() as u64) as usize] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_directory_with_default_pattern() {
        let base = tempfile::tempdir().unwrap();
        let path = create_tmp_dir(Some(base.path()), None).unwrap();

        assert!(path.is_dir());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("tmp."));
        assert_eq!(name.len(), "tmp.".len() + SUFFIX_LEN);
    }

    #[test]
    fn test_appends_placeholder_to_pattern() {
        let base = tempfile::tempdir().unwrap();
        let path = create_tmp_dir(Some(base.path()), Some("cache_")).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cache_."));
    }

    #[test]
    fn test_explicit_placeholder_is_replaced() {
        let base = tempfile::tempdir().unwrap();
        let path = create_tmp_dir(Some(base.path()), Some("layers.XXXXXX")).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("layers."));
        assert!(!name.contains('X'));
    }

    #[test]
    fn test_repeated_calls_yield_unique_paths() {
        let base = tempfile::tempdir().unwrap();
        let first = create_tmp_dir(Some(base.path()), Some("dup")).unwrap();
        let second = create_tmp_dir(Some(base.path()), Some("dup")).unwrap();

        assert_ne!(first, second);
        assert!(first.is_dir());
        assert!(second.is_dir());
    }

    #[test]
    fn test_missing_base_directory_fails() {
        let base = Path::new("/nonexistent/base/dir");
        assert!(create_tmp_dir(Some(base), None).is_err());
    }
}
