//! Facade tying the `c-tern` shim surface to its in-repo collaborators.
//!
//! Depending on this crate links the symbol surface the vendored OpenThread
//! and mbedTLS objects resolve against. The `print` feature (default) links
//! `tern-print`'s `snprintf`/`vsnprintf`; the `host` feature links
//! `tern-host`'s reference platform hooks for host builds. Firmware builds
//! leave `host` off and supply the hooks themselves.

#![no_std]

/// Declare that this build supplies the C library surface for the vendored
/// libraries.
///
/// Put `tern::take_charge!()` in the embedder's root module. The macro
/// itself expands to nothing; the linkage comes from this crate's
/// dependencies, and the invocation records at the top of the embedder that
/// the shims are in play.
#[macro_export]
macro_rules! take_charge {
    () => {};
}

extern crate c_tern;
#[cfg(feature = "print")]
extern crate tern_print;
#[cfg(feature = "host")]
extern crate tern_host;
