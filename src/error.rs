//! Error type shared by every service operation.

use thiserror::Error;

use crate::status::ServiceState;

/// Failure of a single SCM operation.
///
/// Each variant names the stage that failed; variants produced by a Win32
/// call carry the `GetLastError` code captured at the point of failure.
/// Nothing escalates past one operation: callers get exactly one of these
/// or a success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvcError {
    /// The service database itself could not be opened.
    #[error("could not connect to the service control manager (os error {code})")]
    ManagerOpen { code: u32 },

    /// The named service could not be opened. A missing service surfaces
    /// here with ERROR_SERVICE_DOES_NOT_EXIST (1060).
    #[error("could not open service {name:?} (os error {code})")]
    ServiceOpen { name: String, code: u32 },

    /// A status query failed.
    #[error("status query failed (os error {code})")]
    Query { code: u32 },

    /// The SCM reported a state value outside the documented range.
    #[error("service reported unknown state value {raw}")]
    UnknownState { raw: u32 },

    /// The service rejected a stop/pause/continue control, e.g. stopping
    /// a service that is not running.
    #[error("control request was not accepted (os error {code})")]
    Control { code: u32 },

    /// The start request itself failed.
    #[error("service failed to start (os error {code})")]
    Start { code: u32 },

    /// `install` could not create the service record; nothing exists.
    #[error("service record could not be created (os error {code})")]
    Create { code: u32 },

    /// `install` created the record but the subsequent start failed. The
    /// record remains installed; no rollback is attempted.
    #[error("service record was created but the service failed to start (os error {code})")]
    CreatedButNotStarted { code: u32 },

    /// The service could not be marked for deletion.
    #[error("service could not be marked for deletion (os error {code})")]
    Delete { code: u32 },

    /// A configuration change (description, startup type, delayed
    /// auto-start) was rejected.
    #[error("configuration change rejected (os error {code})")]
    Config { code: u32 },

    /// The service did not reach the requested state within one wait
    /// window (one sleep, one re-query).
    #[error("service did not reach {target} within the wait window (observed {observed})")]
    StateNotReached {
        target: ServiceState,
        observed: ServiceState,
    },
}

impl SvcError {
    /// The Win32 error code behind this failure, when the platform
    /// produced one. `UnknownState` and `StateNotReached` originate in
    /// this crate and carry none.
    pub fn os_code(&self) -> Option<u32> {
        match self {
            Self::ManagerOpen { code }
            | Self::ServiceOpen { code, .. }
            | Self::Query { code }
            | Self::Control { code }
            | Self::Start { code }
            | Self::Create { code }
            | Self::CreatedButNotStarted { code }
            | Self::Delete { code }
            | Self::Config { code } => Some(*code),
            Self::UnknownState { .. } | Self::StateNotReached { .. } => None,
        }
    }
}
