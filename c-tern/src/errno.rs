//! Error-code constants, covering the `errno.h` surface.
//!
//! This is a fixed, closed mapping: exactly the codes the vendored
//! networking stack references, with the numeric values its build was
//! verified against (Linux numbering, except [`ENOBUFS`]).
//!
//! There is deliberately no `errno` *variable* here: no static slot and no
//! `__errno_location` symbol anywhere in this workspace. The networking
//! stack's `spinel` layer is told as much via
//! [`SPINEL_PLATFORM_DOESNT_IMPLEMENT_ERRNO_VAR`], and any object file that
//! nevertheless references the variable fails to link. Do not add
//! variable-based error reporting without revisiting that decision.

use libc::c_int;

/// Asserts to the `spinel` layer that no `errno` variable exists. The build
/// orchestrator forwards this to the C build as
/// `-DSPINEL_PLATFORM_DOESNT_IMPLEMENT_ERRNO_VAR=1`.
pub const SPINEL_PLATFORM_DOESNT_IMPLEMENT_ERRNO_VAR: c_int = 1;

/// Operation not permitted.
pub const EPERM: c_int = 1;
/// Out of memory.
pub const ENOMEM: c_int = 12;
/// Invalid argument.
pub const EINVAL: c_int = 22;
/// Broken pipe.
pub const EPIPE: c_int = 32;
/// Result out of range.
pub const ERANGE: c_int = 34;
/// No buffer space available.
pub const ENOBUFS: c_int = 64;
/// Value too large for the data type.
pub const EOVERFLOW: c_int = 75;
/// Message too large.
pub const EMSGSIZE: c_int = 90;
/// Address family not supported.
pub const EAFNOSUPPORT: c_int = 97;
/// Network is down.
pub const ENETDOWN: c_int = 100;
/// Network is unreachable.
pub const ENETUNREACH: c_int = 101;
/// Connection aborted.
pub const ECONNABORTED: c_int = 103;
/// Connection reset by peer.
pub const ECONNRESET: c_int = 104;
/// Socket is already connected.
pub const EISCONN: c_int = 106;
/// Socket is not connected.
pub const ENOTCONN: c_int = 107;
/// Connection timed out.
pub const ETIMEDOUT: c_int = 110;
/// Connection refused.
pub const ECONNREFUSED: c_int = 111;
/// Host is down.
pub const EHOSTDOWN: c_int = 112;
/// No route to host.
pub const EHOSTUNREACH: c_int = 113;
