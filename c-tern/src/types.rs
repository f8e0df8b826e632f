//! Primitive types covering the `stddef.h`, `stdarg.h`, `sys/types.h`, and
//! `time.h` surface.
//!
//! In the C headers these are typedefs and builtin-backed macros; here they
//! are type aliases and re-exports. `size_t` is spelled `usize` throughout
//! the signatures in this crate, null pointers are
//! [`core::ptr::null`]/[`null_mut`](core::ptr::null_mut), and `offsetof` is
//! [`core::mem::offset_of!`](core::mem::offset_of), which lowers to the same
//! compiler builtin.

use libc::c_long;

/// Time value, with newlib's `__SLONGWORD_TYPE` width and signedness.
#[allow(non_camel_case_types)]
pub type time_t = c_long;

/// File offset, likewise `__SLONGWORD_TYPE`. Only the TCP implementation
/// vendored with the networking stack (`tcplp`) names this type.
#[allow(non_camel_case_types)]
pub type off_t = c_long;

pub use core::ffi::VaList;
