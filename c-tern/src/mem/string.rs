use core::ptr;
use core::slice;
use libc::{c_char, c_int};

const NUL: c_char = 0;

#[no_mangle]
unsafe extern "C" fn strcpy(d: *mut c_char, s: *const c_char) -> *mut c_char {
    libc!(libc::strcpy(d, s));

    let mut w = d;
    let mut s = s;
    loop {
        *w = *s;

        if *w == NUL {
            break;
        }

        w = w.add(1);
        s = s.add(1);
    }

    d
}

#[no_mangle]
unsafe extern "C" fn strncpy(d: *mut c_char, s: *const c_char, n: usize) -> *mut c_char {
    libc!(libc::strncpy(d, s, n));

    let mut w = d;
    let mut s = s;
    let mut n = n;
    while n > 0 {
        n -= 1;

        *w = *s;
        w = w.add(1);

        if *s == NUL {
            break;
        }
        s = s.add(1);
    }

    // Pad out to `n` with NULs; a source longer than `n` leaves the
    // destination unterminated, as the standard specifies.
    for _ in 0..n {
        *w = NUL;
        w = w.add(1);
    }

    d
}

#[no_mangle]
unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    libc!(libc::strlen(s));

    let mut w = s;
    while *w != NUL {
        w = w.add(1);
    }

    w.offset_from(s) as usize
}

#[no_mangle]
unsafe extern "C" fn strcmp(mut s1: *const c_char, mut s2: *const c_char) -> c_int {
    libc!(libc::strcmp(s1, s2));

    while *s1 != NUL && *s2 != NUL {
        if *s1 != *s2 {
            break;
        }

        s1 = s1.add(1);
        s2 = s2.add(1);
    }

    // Ordered by `unsigned char` value.
    *s1 as u8 as c_int - *s2 as u8 as c_int
}

#[no_mangle]
unsafe extern "C" fn strncmp(mut s1: *const c_char, mut s2: *const c_char, mut n: usize) -> c_int {
    libc!(libc::strncmp(s1, s2, n));

    if n == 0 {
        return 0;
    }

    while n > 1 && *s1 != NUL && *s2 != NUL {
        n -= 1;

        if *s1 != *s2 {
            break;
        }

        s1 = s1.add(1);
        s2 = s2.add(1);
    }

    *s1 as u8 as c_int - *s2 as u8 as c_int
}

#[no_mangle]
unsafe extern "C" fn strchr(s: *const c_char, c: c_int) -> *mut c_char {
    libc!(libc::strchr(s, c));

    let mut s = s as *mut c_char;
    loop {
        // The terminator itself is searchable, so test before breaking.
        if *s == c as c_char {
            return s;
        }
        if *s == NUL {
            return ptr::null_mut();
        }
        s = s.add(1);
    }
}

#[no_mangle]
unsafe extern "C" fn strrchr(s: *const c_char, c: c_int) -> *mut c_char {
    libc!(libc::strrchr(s, c));

    let mut w = s as *mut c_char;
    let mut ret = ptr::null_mut();
    loop {
        if *w == c as c_char {
            ret = w;
        }
        if *w == NUL {
            break;
        }
        w = w.add(1);
    }

    ret
}

#[no_mangle]
unsafe extern "C" fn strstr(h: *const c_char, n: *const c_char) -> *mut c_char {
    libc!(libc::strstr(h, n));

    let hay = slice::from_raw_parts(h.cast::<u8>(), strlen(h));
    let needle = slice::from_raw_parts(n.cast::<u8>(), strlen(n));
    match memchr::memmem::find(hay, needle) {
        Some(i) => h.add(i) as *mut c_char,
        None => ptr::null_mut(),
    }
}
