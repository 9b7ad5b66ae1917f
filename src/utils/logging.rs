use tracing::{debug, error, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "CMD_SUCCESS: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: u64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs spreadsheet operations with consistent format
pub fn log_sheet_operation(operation: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("SHEET_OP: {} - {}", operation, d),
        None => debug!("SHEET_OP: {}", operation),
    }
}

/// Logs spreadsheet errors with consistent format
pub fn log_sheet_error(operation: &str, error: &str) {
    error!("SHEET_ERROR: {} failed: {}", operation, error);
}

/// Logs stale or unroutable incoming events; these are expected and ignored
pub fn log_ignored_event(kind: &str, reference: &str) {
    debug!("IGNORED: {} event for {}", kind, reference);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
