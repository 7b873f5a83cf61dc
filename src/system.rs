//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios")))]
use libc::clock_gettime;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the microsecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) unsafe fn sys_time() -> (i64, u32) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, null_mut());
    (tv.tv_sec as i64, tv.tv_usec as u32)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the microsecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, u32) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft: FILETIME = std::mem::zeroed();
    GetSystemTimeAsFileTime(&mut ft);

    let hectonanos = (((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    (hectonanos.div_euclid(HECTONANOSECS_IN_SEC), (hectonanos.rem_euclid(HECTONANOSECS_IN_SEC) / 10) as u32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the microsecond of the second.
#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios")))]
pub(crate) unsafe fn sys_time() -> (i64, u32) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = clock_gettime(libc::CLOCK_REALTIME, &mut tv);
    (tv.tv_sec as i64, (tv.tv_nsec / 1000) as u32)
}


#[cfg(test)]
mod test {
    use super::sys_time;

    #[test]
    fn sanity_check() {
        let (seconds, microsecond) = unsafe { sys_time() };
        assert!(seconds > 0);
        assert!(microsecond < 1_000_000);
    }
}
