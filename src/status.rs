//! Value types reported by or handed to the service control manager.
//!
//! These carry no handles and no platform dependency; the raw numeric
//! mappings follow the winsvc/winnt constants.

use std::fmt;

/// Lifecycle state of a service as reported by the SCM.
///
/// Raw values match the `SERVICE_*` state constants (1..=7). There is no
/// zero variant: a failed query is an error, never a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ServiceState {
    Stopped = 1,
    StartPending = 2,
    StopPending = 3,
    Running = 4,
    ContinuePending = 5,
    PausePending = 6,
    Paused = 7,
}

impl ServiceState {
    /// Map a raw `dwCurrentState` value. Returns `None` for anything
    /// outside 1..=7, including the 0 the platform never reports.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Stopped),
            2 => Some(Self::StartPending),
            3 => Some(Self::StopPending),
            4 => Some(Self::Running),
            5 => Some(Self::ContinuePending),
            6 => Some(Self::PausePending),
            7 => Some(Self::Paused),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stopped => "stopped",
            Self::StartPending => "start-pending",
            Self::StopPending => "stop-pending",
            Self::Running => "running",
            Self::ContinuePending => "continue-pending",
            Self::PausePending => "pause-pending",
            Self::Paused => "paused",
        };
        f.write_str(name)
    }
}

/// How the SCM launches a service at boot.
///
/// Raw values match the winnt `SERVICE_*_START` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum StartupType {
    BootStart = 0,
    SystemStart = 1,
    AutoStart = 2,
    DemandStart = 3,
    Disabled = 4,
}

impl StartupType {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for StartupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BootStart => "boot",
            Self::SystemStart => "system",
            Self::AutoStart => "auto",
            Self::DemandStart => "demand",
            Self::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Point-in-time snapshot of a service, re-fetched on every query and
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatus {
    pub state: ServiceState,
    /// Raw `dwServiceType` bitmask (e.g. `SERVICE_WIN32_OWN_PROCESS`).
    pub service_type: u32,
    /// Last Win32 exit code reported by the service.
    pub exit_code: u32,
    /// Liveness counter a service advances during a long transition.
    pub checkpoint: u32,
    /// Bitmask of controls the service currently accepts.
    pub controls_accepted: u32,
    /// Service's own estimate (ms) for its pending transition.
    pub wait_hint_ms: u32,
    /// Hosting process id, 0 when the service is not running.
    pub process_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_every_raw_value() {
        for raw in 1..=7 {
            let state = ServiceState::from_raw(raw).unwrap();
            assert_eq!(state.as_raw(), raw);
        }
    }

    #[test]
    fn state_rejects_values_outside_the_scm_range() {
        assert_eq!(ServiceState::from_raw(0), None);
        assert_eq!(ServiceState::from_raw(8), None);
        assert_eq!(ServiceState::from_raw(u32::MAX), None);
    }

    #[test]
    fn startup_type_matches_winnt_constants() {
        assert_eq!(StartupType::BootStart.as_raw(), 0);
        assert_eq!(StartupType::SystemStart.as_raw(), 1);
        assert_eq!(StartupType::AutoStart.as_raw(), 2);
        assert_eq!(StartupType::DemandStart.as_raw(), 3);
        assert_eq!(StartupType::Disabled.as_raw(), 4);
    }

    #[test]
    fn state_display_is_lowercase_hyphenated() {
        assert_eq!(ServiceState::Running.to_string(), "running");
        assert_eq!(ServiceState::StartPending.to_string(), "start-pending");
    }
}
