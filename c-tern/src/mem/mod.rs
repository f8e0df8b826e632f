//! String and memory operations, covering the `string.h` surface.
//!
//! Everything here is a real, independently addressable `extern "C"`
//! definition with the standard contract. The bulk byte operations delegate
//! to `compiler_builtins`, which is the same code the compiler's builtin
//! lowering targets, so call sites the C compiler reduced to builtins and
//! call sites that go through these symbols observe identical behavior.

mod bstring;
mod string;
