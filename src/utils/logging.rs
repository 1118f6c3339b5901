use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!("CMD_START: {} by {}({}) in chat {}", command, user, user_id, chat_id);
}

/// Logs an incoming button press with consistent format
pub fn log_callback(data: &str, user: &str, user_id: u64, chat_id: Option<i64>) {
    match chat_id {
        Some(chat) => info!("CALLBACK: '{}' from {}({}) in chat {}", data, user, user_id, chat),
        None => info!("CALLBACK: '{}' from {}({}) without message", data, user, user_id),
    }
}

/// Logs a request the user got an error reply for
pub fn log_request_rejected(kind: &str, reason: &str, user_id: u64) {
    warn!("REJECTED: {} for user {} - {}", kind, user_id, reason);
}

/// Logs storage failures with consistent format
pub fn log_lookup_error(operation: &str, error: &str) {
    error!("LOOKUP_ERROR: {} failed: {}", operation, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
