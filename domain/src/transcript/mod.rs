//! Transcript domain.
//!
//! - [`entities::ChatMessage`]: a single chat bubble
//! - [`log::Transcript`]: the append-only list of bubbles
//! - [`draft::Draft`]: the text the user is composing

pub mod draft;
pub mod entities;
pub mod log;
