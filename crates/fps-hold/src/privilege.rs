//! Elevation gate checked once at startup.

use crate::AppResult;

/// Whether the process runs with administrator rights.
///
/// The limiter only accepts commands from an elevated process, so without
/// elevation the whole feature stays disabled.
#[cfg(target_os = "windows")]
pub fn is_elevated() -> AppResult<bool> {
    use windows::Win32::UI::Shell::IsUserAnAdmin;

    // SAFETY: IsUserAnAdmin takes no arguments and only reads the process token.
    Ok(unsafe { IsUserAnAdmin() }.as_bool())
}

/// Whether the process runs with administrator rights.
///
/// Only Windows can answer this; elsewhere the check fails and the caller
/// treats the process as not elevated.
#[cfg(not(target_os = "windows"))]
#[track_caller]
pub fn is_elevated() -> AppResult<bool> {
    use crate::AppError;

    use std::panic::Location;

    use error_location::ErrorLocation;

    Err(AppError::PrivilegeCheck {
        reason: "elevation check is only supported on Windows".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
