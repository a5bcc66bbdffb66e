use serde::{Deserialize, Serialize};

/// System log record as exposed by the logs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    /// "client" or "server"
    pub source: String,
    pub category: String,
    pub message: String,
}

/// DTO for shipping a new log record from the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String,
    pub category: String,
    pub message: String,
}
