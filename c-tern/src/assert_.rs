//! Assertion bridge covering the `assert.h` surface.

use libc::{c_char, c_int};

extern "C-unwind" {
    /// Assertion-failure hook, supplied by the embedding platform.
    ///
    /// Receives the source file (NUL-terminated) and line of the failed
    /// check and must not return; whether that means logging and halting,
    /// rebooting, or aborting is platform policy. Declared `C-unwind` so a
    /// test-supplied hook may diverge by unwinding instead.
    pub fn otPlatAssertFail(file: *const c_char, line: c_int) -> !;
}

/// C-style `assert`: evaluate a boolean expression and, if it is false, call
/// [`otPlatAssertFail`](crate::assert_::otPlatAssertFail) with the current
/// file and line.
///
/// In release builds (`debug_assertions` off) the whole check degenerates to
/// a no-op and the expression is *not* evaluated, matching the conventional
/// `NDEBUG` shutoff. The expression may contain commas anywhere a Rust
/// expression allows them.
///
/// ```
/// # #[no_mangle]
/// # unsafe extern "C-unwind" fn otPlatAssertFail(_: *const core::ffi::c_char, _: i32) -> ! {
/// #     unreachable!()
/// # }
/// c_tern::cassert!(i32::max(1, 2) == 2);
/// ```
#[macro_export]
macro_rules! cassert {
    ($cond:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            if !$cond {
                unsafe {
                    $crate::assert_::otPlatAssertFail(
                        concat!(file!(), "\0").as_ptr().cast(),
                        line!() as _,
                    )
                }
            }
        }
        #[cfg(not(debug_assertions))]
        {
            // Type-checked but never evaluated.
            let _ = || {
                let _ = $cond;
            };
        }
    }};
}
