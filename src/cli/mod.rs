//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod edit;
pub mod list;

pub use definition::{Cli, Commands};

use std::path::PathBuf;

use crate::config::Config;

/// The list file for a command invocation: the `--file` flag wins,
/// otherwise the configured default.
pub fn resolve_list_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(&config.list.path))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 1), "h");
    }

    #[test]
    fn test_truncate_empty_string() {
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn test_truncate_multibyte_text() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_resolve_list_path_flag_wins() {
        let config = Config::default();
        let path = resolve_list_path(Some(PathBuf::from("other.txt")), &config);
        assert_eq!(path, PathBuf::from("other.txt"));
    }

    #[test]
    fn test_resolve_list_path_falls_back_to_config() {
        let mut config = Config::default();
        config.list.path = "todo/list.txt".to_string();
        let path = resolve_list_path(None, &config);
        assert_eq!(path, PathBuf::from("todo/list.txt"));
    }

    #[test]
    fn test_resolve_list_path_default() {
        let path = resolve_list_path(None, &Config::default());
        assert_eq!(path, PathBuf::from("list.txt"));
    }
}
