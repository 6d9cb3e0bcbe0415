//! The user's in-progress input

/// Text the user is composing but has not submitted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft(String);

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft unconditionally
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trimmed text, or `None` if nothing would be submitted
    pub fn submittable(&self) -> Option<&str> {
        let trimmed = self.0.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
