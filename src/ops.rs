//! Flat service operations.
//!
//! Every function opens its own database and service handles with the
//! minimal sufficient access rights, issues exactly one SCM call, waits
//! for the resulting state transition where one is expected, and releases
//! all handles before returning. The first failure at any step is
//! captured, with the platform error code, as a [`SvcError`].

use std::mem;
use std::ptr;

use log::debug;
use winapi::shared::minwindef::{DWORD, LPVOID};
use winapi::um::winnt::{DELETE, SERVICE_ERROR_NORMAL, SERVICE_WIN32_OWN_PROCESS};
use winapi::um::winsvc::{
    ChangeServiceConfig2W, ChangeServiceConfigW, ControlService, CreateServiceW, DeleteService,
    QueryServiceStatusEx, StartServiceW, SC_MANAGER_CONNECT, SC_MANAGER_CREATE_SERVICE,
    SC_STATUS_PROCESS_INFO, SERVICE_CHANGE_CONFIG, SERVICE_CONFIG_DELAYED_AUTO_START_INFO,
    SERVICE_CONFIG_DESCRIPTION, SERVICE_CONTROL_CONTINUE, SERVICE_CONTROL_PAUSE,
    SERVICE_CONTROL_STOP, SERVICE_DELAYED_AUTO_START_INFO, SERVICE_DESCRIPTIONW,
    SERVICE_NO_CHANGE, SERVICE_PAUSE_CONTINUE, SERVICE_QUERY_STATUS, SERVICE_START, SERVICE_STOP,
    SERVICE_STATUS, SERVICE_STATUS_PROCESS,
};

use crate::error::SvcError;
use crate::handles::{last_error, ScmHandle, ServiceHandle};
use crate::status::{ServiceState, ServiceStatus, StartupType};
use crate::wait::wait_for_state;
use crate::wide::to_wide;

/// Fetch a point-in-time status snapshot for `name`.
pub fn query_status(name: &str) -> Result<ServiceStatus, SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, SERVICE_QUERY_STATUS)?;
    query_live_status(&service)
}

/// Current lifecycle state of `name`.
pub fn query_state(name: &str) -> Result<ServiceState, SvcError> {
    Ok(query_status(name)?.state)
}

/// Start `name` and wait for it to report running.
pub fn start(name: &str) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, SERVICE_QUERY_STATUS | SERVICE_START)?;

    debug!("starting service {name}");
    if unsafe { StartServiceW(service.handle(), 0, ptr::null_mut()) } == 0 {
        return Err(SvcError::Start { code: last_error() });
    }

    wait_for_state(&service, ServiceState::Running)
}

/// Stop `name` and wait for it to report stopped. Fails with a rejected
/// control if the service is not running.
pub fn stop(name: &str) -> Result<(), SvcError> {
    control_and_wait(name, SERVICE_STOP, SERVICE_CONTROL_STOP, ServiceState::Stopped)
}

/// Pause `name` and wait for it to report paused.
pub fn pause(name: &str) -> Result<(), SvcError> {
    control_and_wait(
        name,
        SERVICE_PAUSE_CONTINUE,
        SERVICE_CONTROL_PAUSE,
        ServiceState::Paused,
    )
}

/// Resume a paused `name` and wait for it to report running.
pub fn resume(name: &str) -> Result<(), SvcError> {
    control_and_wait(
        name,
        SERVICE_PAUSE_CONTINUE,
        SERVICE_CONTROL_CONTINUE,
        ServiceState::Running,
    )
}

/// Create a service record and immediately start it.
///
/// The record is created as an own-process Win32 service with normal
/// error control. `account` of `None` runs the service as LocalSystem.
///
/// A successful create followed by a failed start leaves the record
/// installed and is reported as [`SvcError::CreatedButNotStarted`] so the
/// caller can tell partial effect from no effect. No rollback is
/// attempted; verify with [`query_status`] after a failed install.
pub fn install(
    name: &str,
    display_name: &str,
    startup: StartupType,
    binary_path: &str,
    account: Option<&str>,
    password: Option<&str>,
) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CREATE_SERVICE)?;

    let wide_name = to_wide(name);
    let wide_display = to_wide(display_name);
    let wide_path = to_wide(binary_path);
    let wide_account = account.map(to_wide);
    let wide_password = password.map(to_wide);

    debug!("creating service {name} ({binary_path})");
    let service = ServiceHandle::from_raw(unsafe {
        CreateServiceW(
            scm.handle(),
            wide_name.as_ptr(),
            wide_display.as_ptr(),
            SERVICE_START,
            SERVICE_WIN32_OWN_PROCESS,
            startup.as_raw(),
            SERVICE_ERROR_NORMAL,
            wide_path.as_ptr(),
            ptr::null(),
            ptr::null_mut(),
            ptr::null(),
            wide_account.as_ref().map_or(ptr::null(), |w| w.as_ptr()),
            wide_password.as_ref().map_or(ptr::null(), |w| w.as_ptr()),
        )
    });
    if service.handle().is_null() {
        return Err(SvcError::Create { code: last_error() });
    }

    if unsafe { StartServiceW(service.handle(), 0, ptr::null_mut()) } == 0 {
        return Err(SvcError::CreatedButNotStarted { code: last_error() });
    }
    Ok(())
}

/// Mark `name` for deletion. The SCM completes removal once the last
/// open handle to the service closes; this call does not wait for that.
pub fn uninstall(name: &str) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, DELETE)?;

    debug!("marking service {name} for deletion");
    if unsafe { DeleteService(service.handle()) } == 0 {
        return Err(SvcError::Delete { code: last_error() });
    }
    Ok(())
}

/// Replace the description text shown in the services console.
pub fn change_description(name: &str, text: &str) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, SERVICE_CHANGE_CONFIG)?;

    let mut wide_text = to_wide(text);
    let mut info = SERVICE_DESCRIPTIONW {
        lpDescription: wide_text.as_mut_ptr(),
    };
    let ok = unsafe {
        ChangeServiceConfig2W(
            service.handle(),
            SERVICE_CONFIG_DESCRIPTION,
            &mut info as *mut SERVICE_DESCRIPTIONW as LPVOID,
        )
    };
    if ok == 0 {
        return Err(SvcError::Config { code: last_error() });
    }
    Ok(())
}

/// Enable or disable delayed automatic start. Only meaningful for
/// services configured as auto-start; the SCM enforces that.
pub fn set_delayed_autostart(name: &str, enabled: bool) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, SERVICE_CHANGE_CONFIG)?;

    let mut info = SERVICE_DELAYED_AUTO_START_INFO {
        fDelayedAutostart: i32::from(enabled),
    };
    let ok = unsafe {
        ChangeServiceConfig2W(
            service.handle(),
            SERVICE_CONFIG_DELAYED_AUTO_START_INFO,
            &mut info as *mut SERVICE_DELAYED_AUTO_START_INFO as LPVOID,
        )
    };
    if ok == 0 {
        return Err(SvcError::Config { code: last_error() });
    }
    Ok(())
}

/// Change when the SCM launches the service, leaving every other
/// configuration field untouched.
pub fn change_startup_type(name: &str, startup: StartupType) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, SERVICE_CHANGE_CONFIG)?;

    debug!("setting startup type of {name} to {startup}");
    let ok = unsafe {
        ChangeServiceConfigW(
            service.handle(),
            SERVICE_NO_CHANGE,
            startup.as_raw(),
            SERVICE_NO_CHANGE,
            ptr::null(),
            ptr::null(),
            ptr::null_mut(),
            ptr::null(),
            ptr::null(),
            ptr::null(),
            ptr::null(),
        )
    };
    if ok == 0 {
        return Err(SvcError::Config { code: last_error() });
    }
    Ok(())
}

/// Issue one control and wait for the expected terminal state.
fn control_and_wait(
    name: &str,
    access: u32,
    control: DWORD,
    target: ServiceState,
) -> Result<(), SvcError> {
    let scm = ScmHandle::connect(SC_MANAGER_CONNECT)?;
    let service = scm.open_service(name, SERVICE_QUERY_STATUS | access)?;

    debug!("sending control {control} to {name}, expecting {target}");
    let mut raw: SERVICE_STATUS = unsafe { mem::zeroed() };
    if unsafe { ControlService(service.handle(), control, &mut raw) } == 0 {
        return Err(SvcError::Control { code: last_error() });
    }

    wait_for_state(&service, target)
}

/// Snapshot the live status through an already-open handle with query
/// rights.
pub(crate) fn query_live_status(service: &ServiceHandle) -> Result<ServiceStatus, SvcError> {
    let mut raw: SERVICE_STATUS_PROCESS = unsafe { mem::zeroed() };
    let mut bytes_needed: DWORD = 0;

    let ok = unsafe {
        QueryServiceStatusEx(
            service.handle(),
            SC_STATUS_PROCESS_INFO,
            &mut raw as *mut SERVICE_STATUS_PROCESS as *mut u8,
            mem::size_of::<SERVICE_STATUS_PROCESS>() as DWORD,
            &mut bytes_needed,
        )
    };
    if ok == 0 {
        return Err(SvcError::Query { code: last_error() });
    }

    let state = ServiceState::from_raw(raw.dwCurrentState).ok_or(SvcError::UnknownState {
        raw: raw.dwCurrentState,
    })?;
    Ok(ServiceStatus {
        state,
        service_type: raw.dwServiceType,
        exit_code: raw.dwWin32ExitCode,
        checkpoint: raw.dwCheckPoint,
        controls_accepted: raw.dwControlsAccepted,
        wait_hint_ms: raw.dwWaitHint,
        process_id: raw.dwProcessId,
    })
}
