//! Formatted output and stream poisoning, covering the `stdio.h` surface.

use crate::types::VaList;
use libc::{c_char, c_int};

extern "C" {
    /// Deliberately incomplete stream type.
    ///
    /// mbedTLS names `FILE` in one function declaration, and that is the
    /// only use this environment can support: there is no stream subsystem,
    /// so the type exists for signatures and nothing else. It has no size
    /// and no contents, which makes every real use a compile-time error:
    ///
    /// ```compile_fail
    /// core::mem::size_of::<c_tern::stdio::FILE>();
    /// ```
    ///
    /// ```compile_fail
    /// unsafe fn peek(f: *mut c_tern::stdio::FILE) {
    ///     let _ = core::ptr::read(f);
    /// }
    /// ```
    pub type FILE;
}

extern "C" {
    /// Bounded formatted print into `s`, defined by the formatted-output
    /// support module (`tern-print` in this workspace).
    pub fn snprintf(s: *mut c_char, n: usize, format: *const c_char, ...) -> c_int;

    /// [`snprintf`] with the arguments already captured in a `va_list`.
    pub fn vsnprintf(s: *mut c_char, n: usize, format: *const c_char, arg: VaList) -> c_int;
}
