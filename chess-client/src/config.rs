//! Configuration for the chess session client.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable.

use std::path::PathBuf;

/// Default base URL of the game service, including the API prefix.
const DEFAULT_API_URL: &str = "http://localhost:8080/api/chess";

/// Default directory for log files.
const DEFAULT_LOG_DIR: &str = "logs";

/// Get the base URL of the game service.
///
/// Priority:
/// 1. `CHESS_API_URL` env variable if set and non-empty
/// 2. `http://localhost:8080/api/chess` as fallback
pub fn get_api_url() -> String {
    api_url_from(std::env::var("CHESS_API_URL").ok())
}

/// Get the directory log files are written to.
///
/// Priority:
/// 1. `CHESS_LOG_DIR` env variable if set and non-empty
/// 2. `./logs` as fallback
pub fn get_log_dir() -> PathBuf {
    log_dir_from(std::env::var("CHESS_LOG_DIR").ok())
}

fn api_url_from(value: Option<String>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

fn log_dir_from(value: Option<String>) -> PathBuf {
    match value {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_LOG_DIR),
    }
}
