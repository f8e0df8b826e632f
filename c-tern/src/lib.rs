//! A freestanding C standard-library surface for vendored OpenThread and
//! mbedTLS.
//!
//! This crate is not a libc. It supplies exactly the symbols those two C
//! codebases reference when they are compiled with no system libc available,
//! and routes each one to a compiler builtin, a platform hook, or a fixed
//! constant. Use patterns the target environment cannot support are rejected
//! at compile or link time instead of being stubbed: the [`stdio::FILE`] type
//! cannot be used for real stream I/O, and no `errno` variable exists
//! anywhere in this workspace.
//!
//! # Provided symbols
//!
//! - `memcpy`, `memmove`, `memset`, `memcmp`, `memchr`
//! - `strcpy`, `strncpy`, `strlen`, `strcmp`, `strncmp`, `strchr`,
//!   `strrchr`, `strstr`
//! - the `errno.h` constants, as Rust `const` items
//!
//! # Required symbols
//!
//! The following are declared here but must be supplied by the embedder.
//! `tern-print` defines the first group and `tern-host` the rest for host
//! builds and tests:
//!
//! - `snprintf`, `vsnprintf`
//! - `iscntrl`, `isprint`, `isupper`
//! - `exit`
//! - `otPlatAssertFail`
//!
//! Note that this list is likely to change as the vendored libraries are
//! updated.

#![no_std]
#![no_builtins] // don't let LLVM optimize our `memcpy` into a `memcpy` call
#![feature(c_variadic)] // for `vsnprintf`'s `VaList` argument
#![feature(extern_types)] // for the opaque `FILE` type

/// Checks a definition's signature against the `libc` crate's declaration of
/// the same symbol. Compiled out; mismatches surface as type errors.
macro_rules! libc {
    ($e:expr) => {
        #[allow(unreachable_code)]
        if false {
            return $e;
        }
    };
}

pub mod assert_;
pub mod ctype;
pub mod errno;
mod mem;
pub mod stdio;
pub mod stdlib;
pub mod types;
