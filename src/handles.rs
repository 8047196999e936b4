//! RAII wrappers for SCM handles.
//!
//! Each wrapper owns one `SC_HANDLE` and closes it exactly once on drop,
//! on every exit path. The null sentinel from a failed acquisition is
//! never stored: acquisition failures are converted to errors before a
//! wrapper exists, and `drop` still guards against null.

use std::ptr;

use winapi::um::errhandlingapi::GetLastError;
use winapi::um::winsvc::{CloseServiceHandle, OpenSCManagerW, OpenServiceW, SC_HANDLE};

use crate::error::SvcError;
use crate::wide::to_wide;

/// Calling-thread `GetLastError`, captured immediately after a failed call.
pub(crate) fn last_error() -> u32 {
    unsafe { GetLastError() }
}

/// Owned handle to the service control manager database.
pub(crate) struct ScmHandle(SC_HANDLE);

impl ScmHandle {
    /// Connect to the local database with the given access mask.
    pub(crate) fn connect(access: u32) -> Result<Self, SvcError> {
        let handle = unsafe { OpenSCManagerW(ptr::null(), ptr::null(), access) };
        if handle.is_null() {
            return Err(SvcError::ManagerOpen { code: last_error() });
        }
        Ok(Self(handle))
    }

    /// Open a named service under this database with the given access mask.
    pub(crate) fn open_service(&self, name: &str, access: u32) -> Result<ServiceHandle, SvcError> {
        let wide_name = to_wide(name);
        let handle = unsafe { OpenServiceW(self.0, wide_name.as_ptr(), access) };
        if handle.is_null() {
            return Err(SvcError::ServiceOpen {
                name: name.to_owned(),
                code: last_error(),
            });
        }
        Ok(ServiceHandle(handle))
    }

    pub(crate) fn handle(&self) -> SC_HANDLE {
        self.0
    }
}

impl Drop for ScmHandle {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe {
                CloseServiceHandle(self.0);
            }
        }
    }
}

/// Owned handle to a single service record.
pub(crate) struct ServiceHandle(SC_HANDLE);

impl ServiceHandle {
    /// Take ownership of a handle returned by `CreateServiceW`. The null
    /// sentinel from a failed create may be stored; `drop` skips it.
    pub(crate) fn from_raw(handle: SC_HANDLE) -> Self {
        Self(handle)
    }

    pub(crate) fn handle(&self) -> SC_HANDLE {
        self.0
    }
}

impl Drop for ServiceHandle {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe {
                CloseServiceHandle(self.0);
            }
        }
    }
}
