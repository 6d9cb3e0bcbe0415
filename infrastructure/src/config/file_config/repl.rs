//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file (a leading `~/` is expanded)
    pub history_file: Option<String>,
}

impl FileReplConfig {
    /// Resolved history path
    ///
    /// Falls back to `<data dir>/webhook-chat/history.txt` when unset.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|p| p.join("webhook-chat").join("history.txt")),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path() {
        let config = FileReplConfig {
            history_file: Some("/tmp/chat-history.txt".to_string()),
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/chat-history.txt"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = FileReplConfig {
            history_file: Some("~/history.txt".to_string()),
        };
        let path = config.history_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("history.txt"));
        }
    }
}
