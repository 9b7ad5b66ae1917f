//! Bot surface: commands, update handlers and the dispatch schema.

pub mod commands;
pub mod handlers;

/// Result type every update endpoint returns; errors are logged by the
/// dispatcher and abort handling of that single update only.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
