//! Datastore name normalization.

/// Strip any path prefix from a datastore name.
///
/// Some engines report the current database as a file path (SQLite's
/// `PRAGMA database_list` yields `/var/db/main.sqlite`). Everything up to and
/// including the last `/` or `\` is dropped; names without a separator are
/// returned unchanged.
///
/// ```rust
/// use datastore_dialect::normalize_name;
///
/// assert_eq!(normalize_name("/var/db/main.sqlite"), "main.sqlite");
/// assert_eq!(normalize_name("C:\\data\\main.db"), "main.db");
/// assert_eq!(normalize_name("public"), "public");
/// ```
pub fn normalize_name(name: &str) -> &str {
    match name.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(normalize_name("schema"), "schema");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_unix_path() {
        assert_eq!(normalize_name("/var/db/main.sqlite"), "main.sqlite");
        assert_eq!(normalize_name("relative/dir/test.db"), "test.db");
    }

    #[test]
    fn test_windows_path() {
        assert_eq!(normalize_name("C:\\data\\main.db"), "main.db");
        assert_eq!(normalize_name("C:\\data/mixed\\x.db"), "x.db");
    }

    #[test]
    fn test_trailing_separator_yields_empty() {
        assert_eq!(normalize_name("/var/db/"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "schema",
            "/var/db/main.sqlite",
            "C:\\data\\main.db",
            "/",
            "a/b\\c",
            "",
            "dir/",
        ];
        for input in inputs {
            let once = normalize_name(input);
            assert_eq!(normalize_name(once), once, "input: {:?}", input);
        }
    }
}
