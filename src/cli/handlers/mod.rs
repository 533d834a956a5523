//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - index: Knowledge base indexing
//! - chat: Interactive support agent
//! - info: Information display (config)

pub mod chat;
pub mod index;
pub mod info;

// Re-export all public handlers
pub use chat::*;
pub use index::*;
pub use info::*;
