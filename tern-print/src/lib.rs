//! The formatted-output entry points declared by `c-tern`.
//!
//! Format-string handling is a separate concern from symbol routing, so the
//! two functions live here, built on the `printf_compat` crate, which [has
//! differences with glibc] in some corners. The vendored libraries only
//! format log lines and version strings, which stay well inside the common
//! subset.
//!
//! [has differences with glibc]: https://docs.rs/printf-compat/0.1.1/printf_compat/output/fn.fmt_write.html#differences

#![no_std]
#![feature(c_variadic)] // for defining the variadic `snprintf`

use core::cmp::min;
use core::ffi::VaList;
use core::fmt;
use core::slice;
use libc::{c_char, c_int};
use printf_compat::{format, output};

/// `fmt::Write` sink over a fixed buffer. Overflow is swallowed, not
/// reported: `printf_compat`'s counter keeps counting the full formatted
/// length, which is exactly the `snprintf` return convention.
struct Cursor<'a> {
    buf: &'a mut [u8],
    used: usize,
}

impl fmt::Write for Cursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.used;
        let take = min(room, s.len());
        self.buf[self.used..self.used + take].copy_from_slice(&s.as_bytes()[..take]);
        self.used += take;
        Ok(())
    }
}

#[no_mangle]
unsafe extern "C" fn snprintf(
    ptr: *mut c_char,
    len: usize,
    fmt: *const c_char,
    args: ...
) -> c_int {
    vsnprintf(ptr, len, fmt, args)
}

#[no_mangle]
unsafe extern "C" fn vsnprintf(
    ptr: *mut c_char,
    len: usize,
    fmt: *const c_char,
    va_list: VaList,
) -> c_int {
    let cap = len.saturating_sub(1);
    let mut sink = Cursor {
        buf: if cap == 0 {
            &mut []
        } else {
            slice::from_raw_parts_mut(ptr.cast::<u8>(), cap)
        },
        used: 0,
    };

    let written = format(fmt, va_list, output::fmt_write(&mut sink));

    // Always NUL-terminated when there is room for anything at all, even on
    // truncation; the return value is the untruncated length.
    if len > 0 && written >= 0 {
        *ptr.add(sink.used) = 0;
    }

    written
}
