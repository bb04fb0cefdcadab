use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Carelog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Persisted storage key for the bearer token.
pub const AUTH_TOKEN_KEY: &str = "carelog_auth_token";
/// Persisted storage key for the serialized user profile.
pub const USER_DATA_KEY: &str = "carelog_user_data";

/// Default base URL for the records API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Carelog/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Carelog")
}

/// Get the local key-value storage directory (token + cached profile)
pub fn storage_dir() -> PathBuf {
    app_data_dir().join("storage")
}
