pub mod config;
pub mod db; // On-device key/value storage
pub mod models;
pub mod slots; // Slot labels
pub mod validation; // Booking form rules
pub mod appointment; // Appointment blob persistence
pub mod render; // Select options + saved list markup
pub mod widget; // Page event handlers

use tracing_subscriber::EnvFilter;

pub use db::{LocalStorage, MemoryStorage, SqliteStorage, StorageError};
pub use models::{Appointment, Doctor};
pub use validation::{BookingForm, ValidationError};
pub use widget::{BookingWidget, Confirm, Submission};

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`, falling back to [`config::default_log_filter`].
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
