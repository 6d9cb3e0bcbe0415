//! Interactive chat module
//!
//! Provides the readline-based chat REPL and the one-shot runner.

mod oneshot;
mod repl;

pub use oneshot::run_once;
pub use repl::ChatRepl;
