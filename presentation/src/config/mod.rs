//! Presentation-level configuration
//!
//! Configuration for bubble formatting and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Column sent bubbles are right-aligned to
    pub width: usize,
    /// Label shown on received bubbles
    pub assistant_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            width: 72,
            assistant_name: "Assistant".to_string(),
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Where readline history is loaded from and saved to
    pub history_file: Option<PathBuf>,
    /// Shown in the welcome banner
    pub endpoint_label: Option<String>,
}
