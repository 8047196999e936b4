//! Thin wrapper over the Windows Service Control Manager.
//!
//! Each operation is a flat function: it opens the service database and
//! the named service with the minimal sufficient access rights, issues a
//! single control, query, or configuration call, waits one bounded window
//! for state transitions, and releases every handle before returning.
//! Failures carry the stage that failed plus the platform error code; see
//! [`error::SvcError`].
//!
//! The operations themselves only exist on Windows. The value types in
//! [`status`] and the error type build everywhere so callers can share
//! result handling across platforms.

pub mod error;
pub mod status;

#[cfg(any(windows, test))]
mod wait;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod handles;
        mod ops;
        mod wide;

        pub use ops::{
            change_description, change_startup_type, install, pause, query_state, query_status,
            resume, set_delayed_autostart, start, stop, uninstall,
        };
    }
}

pub use error::SvcError;
pub use status::{ServiceState, ServiceStatus, StartupType};
