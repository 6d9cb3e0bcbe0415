//! Use cases (application services)

pub mod transcript_controller;
