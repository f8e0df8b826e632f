//! Character classification, covering the `ctype.h` surface.
//!
//! Declarations only: the definitions belong to the embedding platform.
//! `tern-host` carries reference implementations for host builds and tests.
//! Each function takes a character value in `0..=255` or `EOF` (-1) and
//! returns nonzero when the class matches.

use libc::c_int;

extern "C" {
    /// Nonzero if `c` is a control character.
    pub fn iscntrl(c: c_int) -> c_int;

    /// Nonzero if `c` is printable, including space.
    pub fn isprint(c: c_int) -> c_int;

    /// Nonzero if `c` is an uppercase letter.
    pub fn isupper(c: c_int) -> c_int;
}
