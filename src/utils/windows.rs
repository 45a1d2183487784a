// src/utils/windows.rs

/// Checks if the current process is running with elevated (administrator)
/// privileges by querying the process token. Anything going wrong along the
/// way reports `false`.
#[cfg(windows)]
pub fn is_elevated() -> bool {
    use std::mem;

    use windows::Win32::{
        Foundation::{CloseHandle, HANDLE},
        Security::{GetTokenInformation, TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY},
        System::Threading::{GetCurrentProcess, OpenProcessToken},
    };

    unsafe {
        let mut token = HANDLE::default();
        if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token).is_err() {
            return false;
        }

        let mut elevation: TOKEN_ELEVATION = mem::zeroed();
        let mut ret_size = mem::size_of::<TOKEN_ELEVATION>() as u32;
        let queried = GetTokenInformation(
            token,
            TokenElevation,
            Some(&mut elevation as *mut _ as *mut _),
            ret_size,
            &mut ret_size,
        )
        .is_ok();

        let _ = CloseHandle(token);

        queried && elevation.TokenIsElevated != 0
    }
}

/// Power policy on other platforms is not ours to touch, so every caller
/// sees the fail-closed answer.
#[cfg(not(windows))]
pub fn is_elevated() -> bool {
    false
}
