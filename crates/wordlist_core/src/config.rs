//! Runtime configuration resolved from the environment.
//!
//! | Variable             | Meaning                                   |
//! |----------------------|-------------------------------------------|
//! | `WORDLIST_DB_PATH`   | database file path (wins over data dir)   |
//! | `WORDLIST_DATA_DIR`  | directory holding `word_database`         |
//! | `WORDLIST_LOG_LEVEL` | trace/debug/info/warn/error               |
//! | `WORDLIST_LOG_DIR`   | absolute directory for rolling log files  |
//!
//! Blank values are treated as unset.

use crate::db::DATABASE_FILE_NAME;
use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "WORDLIST_DB_PATH";
pub const ENV_DATA_DIR: &str = "WORDLIST_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "WORDLIST_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "WORDLIST_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let db_path = value(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                value(ENV_DATA_DIR)
                    .map(PathBuf::from)
                    .unwrap_or_else(std::env::temp_dir)
                    .join(DATABASE_FILE_NAME)
            });

        Self {
            db_path,
            log_level: value(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_DATA_DIR, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::db::DATABASE_FILE_NAME;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_temp_dir_database_without_file_logging() {
        let config = CoreConfig::default();
        assert_eq!(
            config.db_path,
            std::env::temp_dir().join(DATABASE_FILE_NAME)
        );
        assert!(config.log_dir.is_none());
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn explicit_db_path_wins_over_data_dir() {
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/data/custom.sqlite3"),
            (ENV_DATA_DIR, "/data/dir"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/custom.sqlite3"));
    }

    #[test]
    fn data_dir_gets_default_file_name_and_blank_values_are_ignored() {
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "   "),
            (ENV_DATA_DIR, "/data/dir"),
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, "/var/log/wordlist"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/dir/word_database"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/wordlist")));
    }
}
