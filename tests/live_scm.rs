//! Integration tests against the live service control manager.
//!
//! These run on Windows only. Tests that mutate service state need
//! administrator rights and a machine whose services may be disturbed,
//! so they are `#[ignore]`d; run them with `cargo test -- --ignored`
//! on a disposable host.

#![cfg(windows)]

use svcctl::{ServiceState, StartupType, SvcError};

// Present on every supported Windows edition.
const SPOOLER: &str = "Spooler";
// Workstation accepts pause/continue controls.
const PAUSABLE: &str = "LanmanWorkstation";
const ABSENT: &str = "svcctl-no-such-service";
const SCRATCH: &str = "svcctl-scratch-service";

const ERROR_SERVICE_DOES_NOT_EXIST: u32 = 1060;
const ERROR_SERVICE_NOT_ACTIVE: u32 = 1062;

#[test]
fn query_state_of_missing_service_reports_1060() {
    let err = svcctl::query_state(ABSENT).unwrap_err();
    match err {
        SvcError::ServiceOpen { ref name, code } => {
            assert_eq!(name, ABSENT);
            assert_eq!(code, ERROR_SERVICE_DOES_NOT_EXIST);
        }
        other => panic!("expected ServiceOpen, got {other:?}"),
    }
}

#[test]
fn every_operation_fails_the_same_way_for_a_missing_service() {
    for err in [
        svcctl::stop(ABSENT).unwrap_err(),
        svcctl::start(ABSENT).unwrap_err(),
        svcctl::pause(ABSENT).unwrap_err(),
        svcctl::resume(ABSENT).unwrap_err(),
        svcctl::uninstall(ABSENT).unwrap_err(),
        svcctl::change_description(ABSENT, "x").unwrap_err(),
        svcctl::set_delayed_autostart(ABSENT, true).unwrap_err(),
        svcctl::change_startup_type(ABSENT, StartupType::DemandStart).unwrap_err(),
    ] {
        assert_eq!(err.os_code(), Some(ERROR_SERVICE_DOES_NOT_EXIST), "{err}");
    }
}

#[test]
fn query_status_returns_a_plausible_snapshot() {
    let status = svcctl::query_status(SPOOLER).expect("spooler should be queryable");
    // Whatever the state, it is one of the seven; the snapshot fields
    // agree with it.
    if status.state == ServiceState::Stopped {
        assert_eq!(status.process_id, 0);
    } else if status.state == ServiceState::Running {
        assert_ne!(status.process_id, 0);
    }
}

#[test]
#[ignore = "mutates service state, needs admin"]
fn stop_then_start_observes_each_terminal_state() {
    if svcctl::query_state(SPOOLER).unwrap() != ServiceState::Running {
        svcctl::start(SPOOLER).unwrap();
    }

    svcctl::stop(SPOOLER).unwrap();
    assert_eq!(svcctl::query_state(SPOOLER).unwrap(), ServiceState::Stopped);

    svcctl::start(SPOOLER).unwrap();
    assert_eq!(svcctl::query_state(SPOOLER).unwrap(), ServiceState::Running);
}

#[test]
#[ignore = "mutates service state, needs admin"]
fn pause_then_resume_observes_each_terminal_state() {
    if svcctl::query_state(PAUSABLE).unwrap() != ServiceState::Running {
        svcctl::start(PAUSABLE).unwrap();
    }

    svcctl::pause(PAUSABLE).unwrap();
    assert_eq!(svcctl::query_state(PAUSABLE).unwrap(), ServiceState::Paused);

    svcctl::resume(PAUSABLE).unwrap();
    assert_eq!(svcctl::query_state(PAUSABLE).unwrap(), ServiceState::Running);
}

#[test]
#[ignore = "installs a real service, needs admin and SVCCTL_SERVICE_BINARY"]
fn install_round_trip_observes_running() {
    // Path to an executable that actually implements a Win32 service.
    let binary = std::env::var("SVCCTL_SERVICE_BINARY")
        .expect("set SVCCTL_SERVICE_BINARY to a service executable");

    svcctl::install(
        SCRATCH,
        "svcctl scratch service",
        StartupType::DemandStart,
        &binary,
        None,
        None,
    )
    .unwrap();
    assert_eq!(svcctl::query_state(SCRATCH).unwrap(), ServiceState::Running);

    svcctl::stop(SCRATCH).unwrap();
    svcctl::uninstall(SCRATCH).unwrap();
}

#[test]
#[ignore = "creates a service record, needs admin"]
fn install_with_missing_binary_reports_created_but_not_started() {
    let err = svcctl::install(
        SCRATCH,
        "svcctl scratch service",
        StartupType::DemandStart,
        r"C:\svcctl-test\does-not-exist.exe",
        None,
        None,
    )
    .unwrap_err();
    assert!(
        matches!(err, SvcError::CreatedButNotStarted { .. }),
        "expected CreatedButNotStarted, got {err:?}"
    );

    // Partial effect: the record exists even though the start failed.
    assert_eq!(svcctl::query_state(SCRATCH).unwrap(), ServiceState::Stopped);

    svcctl::uninstall(SCRATCH).unwrap();
}

#[test]
#[ignore = "mutates service state, needs admin"]
fn stop_on_a_stopped_service_is_a_rejected_control() {
    if svcctl::query_state(SPOOLER).unwrap() != ServiceState::Stopped {
        svcctl::stop(SPOOLER).unwrap();
    }

    let err = svcctl::stop(SPOOLER).unwrap_err();
    assert_eq!(err.os_code(), Some(ERROR_SERVICE_NOT_ACTIVE));
    // Still stopped: the failed call mutated nothing.
    assert_eq!(svcctl::query_state(SPOOLER).unwrap(), ServiceState::Stopped);

    svcctl::start(SPOOLER).unwrap();
}
