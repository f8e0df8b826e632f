//! Host reference implementations of the platform hooks `c-tern` declares:
//! the classification functions, the assertion-failure hook, and `exit`.
//!
//! On an embedded target these come from the firmware; the hooks are the
//! deliberate boundary between the shim surface and the platform. This crate
//! fills them in for host builds and the test suite, so a complete surface
//! can be linked without any firmware present.

use std::ffi::CStr;
use std::ops::RangeInclusive;
use std::os::raw::{c_char, c_int};
use std::process;

#[no_mangle]
extern "C" fn iscntrl(c: c_int) -> c_int {
    const LOWER_RANGE: RangeInclusive<c_int> = 0..=31;
    (LOWER_RANGE.contains(&c) || c == 127) as c_int
}

#[no_mangle]
extern "C" fn isprint(c: c_int) -> c_int {
    const RANGE: RangeInclusive<c_int> = 32..=126;
    RANGE.contains(&c) as c_int
}

#[no_mangle]
extern "C" fn isupper(c: c_int) -> c_int {
    const RANGE: RangeInclusive<c_int> = ('A' as c_int)..=('Z' as c_int);
    RANGE.contains(&c) as c_int
}

/// Assertion-failure hook: report the failing location and abort.
#[allow(non_snake_case)]
#[no_mangle]
unsafe extern "C-unwind" fn otPlatAssertFail(file: *const c_char, line: c_int) -> ! {
    let file = if file.is_null() {
        "<unknown>"
    } else {
        CStr::from_ptr(file).to_str().unwrap_or("<non-utf8>")
    };

    #[cfg(feature = "log")]
    log::error!("assertion failed at {file}:{line}");
    #[cfg(not(feature = "log"))]
    eprintln!("assertion failed at {file}:{line}");

    process::abort();
}

/// Immediate termination. No atexit machinery exists in this environment,
/// so none is run here either.
#[no_mangle]
unsafe extern "C" fn exit(status: c_int) -> ! {
    libc::_exit(status)
}
