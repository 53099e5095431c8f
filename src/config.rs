use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "SmileCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local storage key holding the JSON array of booked appointments.
pub const STORAGE_KEY: &str = "smilecare_appointments";

/// File name of the SQLite-backed local storage.
pub const LOCAL_STORAGE_FILE: &str = "local_storage.db";

/// How long the booking confirmation stays visible.
pub const SUCCESS_NOTICE_SECS: i64 = 5;

/// Get the application data directory
/// (platform data dir, falling back to the home directory, then the working directory)
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the path of the local storage database
pub fn local_storage_path() -> PathBuf {
    app_data_dir().join(LOCAL_STORAGE_FILE)
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "smilecare_lib=info,warn"
}
