//! Sidecar services running next to the dispatcher.

pub mod health;
