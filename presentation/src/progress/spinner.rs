//! Spinner shown while waiting for the webhook

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for one-shot mode
pub struct DeliverySpinner {
    bar: ProgressBar,
}

impl DeliverySpinner {
    /// Start spinning with `message`; a hidden spinner draws nothing
    pub fn new(message: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        if visible {
            bar.enable_steady_tick(Duration::from_millis(100));
        }
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for DeliverySpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
