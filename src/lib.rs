//! # Questionnaire Bot
//!
//! A Telegram bot for demonstration polls, quizzes and a fixed questionnaire
//! whose completed answer sets are appended to a Google Sheets spreadsheet.
//!
//! ## Features
//! - `/start` walks the user through the built-in questionnaire (polls for
//!   multiple choice, plain prompts for open-ended questions)
//! - Completed questionnaires are flushed as one spreadsheet row each
//! - `/poll` demonstration survey that announces votes and closes itself
//! - `/quiz` demonstration quiz closed by the platform's voter count
//! - `/preview` poll-construction affordance with a closed-poll echo

/// Bot commands, update handlers and the dispatch schema
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Registry of live demo polls and their closing conditions
pub mod polls;
/// Questionnaire definition and session state machine
pub mod questionnaire;
/// Sidecar services such as the health endpoints
pub mod services;
/// Spreadsheet persistence: the answer sink trait and Sheets client
pub mod sheets;
/// Shared application state passed to every handler
pub mod state;
/// Utility functions for timestamps, logging and text formatting
pub mod utils;
