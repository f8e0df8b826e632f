//! Behavior checks for the string/memory definitions, called the way the
//! vendored C code calls them: through the C symbols.

use c_tern as _;

use std::os::raw::{c_char, c_int, c_void};
use std::ptr;

extern "C" {
    fn memcpy(dst: *mut c_void, src: *const c_void, len: usize) -> *mut c_void;
    fn memmove(dst: *mut c_void, src: *const c_void, len: usize) -> *mut c_void;
    fn memset(dst: *mut c_void, fill: c_int, len: usize) -> *mut c_void;
    fn memcmp(a: *const c_void, b: *const c_void, len: usize) -> c_int;
    fn memchr(s: *const c_void, c: c_int, len: usize) -> *mut c_void;
    fn strcpy(d: *mut c_char, s: *const c_char) -> *mut c_char;
    fn strncpy(d: *mut c_char, s: *const c_char, n: usize) -> *mut c_char;
    fn strlen(s: *const c_char) -> usize;
    fn strcmp(s1: *const c_char, s2: *const c_char) -> c_int;
    fn strncmp(s1: *const c_char, s2: *const c_char, n: usize) -> c_int;
    fn strchr(s: *const c_char, c: c_int) -> *mut c_char;
    fn strrchr(s: *const c_char, c: c_int) -> *mut c_char;
    fn strstr(h: *const c_char, n: *const c_char) -> *mut c_char;
}

fn cstr(s: &'static [u8]) -> *const c_char {
    assert_eq!(s.last(), Some(&0));
    s.as_ptr().cast()
}

#[test]
fn memset_fills_and_returns_destination() {
    let mut buf = [0xaau8; 16];
    let dst = buf.as_mut_ptr().cast::<c_void>();
    let ret = unsafe { memset(dst, 0x5c, 12) };
    assert_eq!(ret, dst);
    assert_eq!(&buf[..12], &[0x5c; 12]);
    assert_eq!(&buf[12..], &[0xaa; 4]);
}

#[test]
fn memset_uses_low_order_byte_and_tolerates_zero_len() {
    let mut buf = [7u8; 4];
    let dst = buf.as_mut_ptr().cast::<c_void>();
    assert_eq!(unsafe { memset(dst, 0x1234, 4) }, dst);
    assert_eq!(buf, [0x34; 4]);

    let before = buf;
    assert_eq!(unsafe { memset(dst, 0xff, 0) }, dst);
    assert_eq!(buf, before);
}

#[test]
fn memset_is_callable_through_a_stored_function_pointer() {
    // mbedTLS keeps `memset`'s address in a function pointer, so the symbol
    // has to work indirectly, not just at direct call sites.
    let fill: unsafe extern "C" fn(*mut c_void, c_int, usize) -> *mut c_void = memset;
    let mut buf = [0u8; 8];
    let dst = buf.as_mut_ptr().cast::<c_void>();
    assert_eq!(unsafe { fill(dst, 0x2e, buf.len()) }, dst);
    assert_eq!(buf, [0x2e; 8]);
}

#[test]
fn memcpy_and_memmove_copy_bytes() {
    let src = *b"freestanding";
    let mut dst = [0u8; 12];
    let ret = unsafe {
        memcpy(
            dst.as_mut_ptr().cast(),
            src.as_ptr().cast(),
            src.len(),
        )
    };
    assert_eq!(ret, dst.as_mut_ptr().cast());
    assert_eq!(dst, src);

    // Overlapping in both directions.
    let mut buf = *b"0123456789";
    unsafe { memmove(buf.as_mut_ptr().add(2).cast(), buf.as_ptr().cast(), 8) };
    assert_eq!(&buf, b"0101234567");

    let mut buf = *b"0123456789";
    unsafe { memmove(buf.as_mut_ptr().cast(), buf.as_ptr().add(2).cast(), 8) };
    assert_eq!(&buf, b"2345678989");
}

#[test]
fn memcmp_orders_by_unsigned_byte() {
    let a = [0x01u8, 0x80];
    let b = [0x01u8, 0x7f];
    assert!(unsafe { memcmp(a.as_ptr().cast(), b.as_ptr().cast(), 2) } > 0);
    assert!(unsafe { memcmp(b.as_ptr().cast(), a.as_ptr().cast(), 2) } < 0);
    assert_eq!(unsafe { memcmp(a.as_ptr().cast(), b.as_ptr().cast(), 1) }, 0);
}

#[test]
fn memchr_finds_first_occurrence_within_len() {
    let hay = b"spinel\0frame";
    let base = hay.as_ptr().cast::<c_void>();
    let hit = unsafe { memchr(base, b'n' as c_int, hay.len()) };
    assert_eq!(hit, unsafe { base.cast::<u8>().add(3) } as *mut c_void);

    // NUL is an ordinary byte for memchr.
    let hit = unsafe { memchr(base, 0, hay.len()) };
    assert_eq!(hit, unsafe { base.cast::<u8>().add(6) } as *mut c_void);

    assert_eq!(unsafe { memchr(base, b'z' as c_int, hay.len()) }, ptr::null_mut());
    assert_eq!(unsafe { memchr(base, b'f' as c_int, 0) }, ptr::null_mut());
}

#[test]
fn strcpy_copies_through_the_terminator() {
    let mut dst = [0x55u8; 8];
    let ret = unsafe { strcpy(dst.as_mut_ptr().cast(), cstr(b"otns\0")) };
    assert_eq!(ret, dst.as_mut_ptr().cast());
    assert_eq!(&dst[..5], b"otns\0");
    assert_eq!(dst[5], 0x55);
}

#[test]
fn strncpy_pads_and_truncates() {
    let mut dst = [0x55u8; 8];
    unsafe { strncpy(dst.as_mut_ptr().cast(), cstr(b"ot\0"), 6) };
    assert_eq!(&dst[..6], b"ot\0\0\0\0");
    assert_eq!(&dst[6..], &[0x55; 2]);

    // A too-long source leaves the destination unterminated.
    let mut dst = [0x55u8; 8];
    unsafe { strncpy(dst.as_mut_ptr().cast(), cstr(b"dataset\0"), 4) };
    assert_eq!(&dst[..4], b"data");
    assert_eq!(dst[4], 0x55);
}

#[test]
fn strlen_counts_to_the_terminator() {
    assert_eq!(unsafe { strlen(cstr(b"\0")) }, 0);
    assert_eq!(unsafe { strlen(cstr(b"mesh-local\0")) }, 10);
}

#[test]
fn strcmp_matches_standard_ordering() {
    assert_eq!(unsafe { strcmp(cstr(b"child\0"), cstr(b"child\0")) }, 0);
    assert!(unsafe { strcmp(cstr(b"child\0"), cstr(b"router\0")) } < 0);
    assert!(unsafe { strcmp(cstr(b"router\0"), cstr(b"child\0")) } > 0);
    // Prefixes order before their extensions.
    assert!(unsafe { strcmp(cstr(b"net\0"), cstr(b"netif\0")) } < 0);
    // Comparison is by unsigned char, so 0x80 sorts above ASCII.
    assert!(unsafe { strcmp(cstr(b"\x80\0"), cstr(b"a\0")) } > 0);
}

#[test]
fn strncmp_stops_at_n() {
    assert_eq!(unsafe { strncmp(cstr(b"panid1\0"), cstr(b"panid2\0"), 5) }, 0);
    assert!(unsafe { strncmp(cstr(b"panid1\0"), cstr(b"panid2\0"), 6) } < 0);
    assert_eq!(unsafe { strncmp(cstr(b"a\0"), cstr(b"b\0"), 0) }, 0);
    assert_eq!(unsafe { strncmp(cstr(b"ab\0"), cstr(b"ab\0"), 9) }, 0);
}

#[test]
fn strchr_and_strrchr_search_including_the_terminator() {
    let s = cstr(b"key=value=x\0");
    assert_eq!(unsafe { strchr(s, b'=' as c_int) }, unsafe { s.add(3) } as *mut c_char);
    assert_eq!(unsafe { strrchr(s, b'=' as c_int) }, unsafe { s.add(9) } as *mut c_char);
    assert_eq!(unsafe { strchr(s, b'z' as c_int) }, ptr::null_mut());
    assert_eq!(unsafe { strrchr(s, b'z' as c_int) }, ptr::null_mut());

    // Searching for NUL yields the terminator, per the standard.
    assert_eq!(unsafe { strchr(s, 0) }, unsafe { s.add(11) } as *mut c_char);
    assert_eq!(unsafe { strrchr(s, 0) }, unsafe { s.add(11) } as *mut c_char);
}

#[test]
fn strstr_finds_substrings() {
    let hay = cstr(b"coap.service.local\0");
    assert_eq!(
        unsafe { strstr(hay, cstr(b"service\0")) },
        unsafe { hay.add(5) } as *mut c_char
    );
    assert_eq!(unsafe { strstr(hay, cstr(b"udp\0")) }, ptr::null_mut());
    // An empty needle matches at the start.
    assert_eq!(unsafe { strstr(hay, cstr(b"\0")) }, hay as *mut c_char);
}
