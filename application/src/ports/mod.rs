//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! implement or consume.

pub mod conversation_logger;
pub mod ui_event;
pub mod webhook_gateway;
