//! Reserved-alias management module
//!
//! Handles loading and querying the list of reserved local-part aliases
//! that addresses may not use.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Aliases refused when no alias file has been loaded.
const BUILTIN_ALIASES: [&str; 2] = ["abuse", "postmaster"];

static RESERVED_ALIASES: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum AliasListError {
    #[error("Alias file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read alias file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Alias file is empty")]
    EmptyFile,
}

/// Returns the reserved-alias file path.
///
/// Priority:
/// 1. Environment variable `MAIL_PWD_RESERVED_PATH`
/// 2. Default path `./assets/reserved-aliases.txt`
pub fn reserved_aliases_path() -> PathBuf {
    std::env::var("MAIL_PWD_RESERVED_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/reserved-aliases.txt"))
}

/// Initializes the reserved-alias list from an external file.
///
/// Calling this is optional: until a file is loaded, the built-in list
/// (`abuse`, `postmaster`) applies.
///
/// # Environment Variable
///
/// Set `MAIL_PWD_RESERVED_PATH` to specify a custom alias file location.
/// If not set, defaults to `./assets/reserved-aliases.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_reserved_aliases() -> Result<usize, AliasListError> {
    let path = reserved_aliases_path();
    init_reserved_aliases_from_path(&path)
}

/// Initializes the reserved-alias list from a specific file path.
///
/// Use this when the path comes from somewhere other than the
/// environment (e.g. an asset system). One alias per line, compared
/// case-insensitively.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_reserved_aliases_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, AliasListError> {
    // Idempotent: if already initialized, return immediately
    {
        let guard = RESERVED_ALIASES.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Alias list initialization FAILED: FileNotFound {:?}", path);
        return Err(AliasListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Alias list initialization FAILED: Empty file {:?}", path);
        return Err(AliasListError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = RESERVED_ALIASES.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Alias list initialized: {} aliases from {:?}", count, path);

    Ok(count)
}

/// Returns the effective reserved-alias set.
///
/// The built-in list when `init_reserved_aliases()` has not been called.
pub fn reserved_aliases() -> HashSet<String> {
    let guard = RESERVED_ALIASES.read().unwrap();
    guard
        .clone()
        .unwrap_or_else(|| BUILTIN_ALIASES.iter().map(|a| a.to_string()).collect())
}

/// Checks if a local part is a reserved alias (case-insensitive).
///
/// Falls back to the built-in list when no file has been loaded.
pub fn is_reserved_alias(local_part: &str) -> bool {
    let needle = local_part.to_lowercase();
    let guard = RESERVED_ALIASES.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&needle),
        None => BUILTIN_ALIASES.contains(&needle.as_str()),
    }
}

/// Resets the alias list for testing purposes.
#[cfg(test)]
pub fn reset_reserved_aliases_for_testing() {
    let mut guard = RESERVED_ALIASES.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(aliases: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for alias in aliases {
            writeln!(temp_file, "{}", alias).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_reserved_aliases_path_default() {
        remove_env("MAIL_PWD_RESERVED_PATH");

        let path = reserved_aliases_path();
        assert_eq!(path, PathBuf::from("./assets/reserved-aliases.txt"));
    }

    #[test]
    #[serial]
    fn test_reserved_aliases_path_from_env() {
        let custom_path = "/custom/path/reserved-aliases.txt";
        set_env("MAIL_PWD_RESERVED_PATH", custom_path);

        let path = reserved_aliases_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("MAIL_PWD_RESERVED_PATH");
    }

    #[test]
    #[serial]
    fn test_init_file_not_found() {
        reset_reserved_aliases_for_testing();
        set_env("MAIL_PWD_RESERVED_PATH", "/nonexistent/path/aliases.txt");

        let result = init_reserved_aliases();
        assert!(matches!(result, Err(AliasListError::FileNotFound(_))));

        remove_env("MAIL_PWD_RESERVED_PATH");
    }

    #[test]
    #[serial]
    fn test_init_empty_file() {
        reset_reserved_aliases_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let path = temp_file.path().to_str().unwrap();
        set_env("MAIL_PWD_RESERVED_PATH", path);

        let result = init_reserved_aliases();
        assert!(matches!(result, Err(AliasListError::EmptyFile)));

        remove_env("MAIL_PWD_RESERVED_PATH");
    }

    #[test]
    #[serial]
    fn test_init_success() {
        reset_reserved_aliases_for_testing();
        let temp_file = setup_with_tempfile(&["noreply", "admin", "root"]);

        let path = temp_file.path().to_str().unwrap();
        set_env("MAIL_PWD_RESERVED_PATH", path);

        let result = init_reserved_aliases();
        assert_eq!(result.unwrap(), 3);

        remove_env("MAIL_PWD_RESERVED_PATH");
    }

    #[test]
    #[serial]
    fn test_builtin_fallback_when_uninitialized() {
        reset_reserved_aliases_for_testing();

        assert!(is_reserved_alias("abuse"));
        assert!(is_reserved_alias("postmaster"));
        assert!(!is_reserved_alias("validuser"));
    }

    #[test]
    #[serial]
    fn test_loaded_list_replaces_builtin() {
        reset_reserved_aliases_for_testing();
        let temp_file = setup_with_tempfile(&["noreply"]);

        let path = temp_file.path().to_str().unwrap();
        set_env("MAIL_PWD_RESERVED_PATH", path);

        let _ = init_reserved_aliases();

        assert!(is_reserved_alias("noreply"));
        // Built-in entries no longer apply once a file is loaded
        assert!(!is_reserved_alias("abuse"));

        remove_env("MAIL_PWD_RESERVED_PATH");
    }

    #[test]
    #[serial]
    fn test_is_reserved_case_insensitive() {
        reset_reserved_aliases_for_testing();
        let temp_file = setup_with_tempfile(&["NoReply"]);

        let path = temp_file.path().to_str().unwrap();
        set_env("MAIL_PWD_RESERVED_PATH", path);

        let _ = init_reserved_aliases();

        assert!(is_reserved_alias("noreply"));
        assert!(is_reserved_alias("NOREPLY"));

        remove_env("MAIL_PWD_RESERVED_PATH");
    }

    #[test]
    #[serial]
    fn test_reserved_aliases_returns_effective_set() {
        reset_reserved_aliases_for_testing();

        let set = reserved_aliases();
        assert_eq!(set.len(), 2);
        assert!(set.contains("abuse"));
        assert!(set.contains("postmaster"));
    }
}
