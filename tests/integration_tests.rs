use std::ffi::CStr;

use nulbuf::{concat, NulBuf};

#[test]
fn test_default_is_empty() {
    let buf = NulBuf::default();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes_with_nul(), b"\0");
    assert_eq!(buf.as_c_str(), c"");
}

#[test]
fn test_append_capacity_scenario() {
    let mut s = NulBuf::from_bytes(b"ab").unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.capacity(), 2);

    s.reserve(8).unwrap();
    assert_eq!(s.capacity(), 8);
    assert_eq!(s.len(), 2);

    s.append(b"cd").unwrap();
    assert_eq!(s, b"abcd");
    assert_eq!(s.len(), 4);

    s.push(b'e').unwrap();
    assert_eq!(s, b"abcde");
    assert_eq!(s.len(), 5);
    assert_eq!(s.capacity(), 8);

    s.shrink_to_fit().unwrap();
    assert_eq!(s.capacity(), 5);
    assert_eq!(s.as_bytes_with_nul(), b"abcde\0");
}

#[test]
fn test_round_trip_through_c_string_view() {
    for input in [
        &b"Hello"[..],
        &b""[..],
        &b"with spaces and\ttabs"[..],
        &b"stop\0here"[..],
    ] {
        let buf = NulBuf::from_bytes(input).unwrap();
        let expected = input.split(|&b| b == 0).next().unwrap();
        assert_eq!(buf.as_c_str().to_bytes(), expected);
        assert_eq!(buf.as_bytes(), expected);
    }
}

#[test]
fn test_from_ptr_and_as_ptr() {
    let buf = unsafe { NulBuf::from_ptr(c"interop".as_ptr()) }.unwrap();
    assert_eq!(buf, "interop");
    assert_eq!(buf.capacity(), 7);

    let view = unsafe { CStr::from_ptr(buf.as_ptr()) };
    assert_eq!(view, c"interop");
}

#[test]
fn test_from_bytes_stops_at_terminator() {
    let buf = NulBuf::from_bytes(b"abc\0def").unwrap();
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.capacity(), 3);
}

#[test]
fn test_with_capacity() {
    let mut buf = NulBuf::with_capacity(16).unwrap();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 16);
    buf.append(b"0123456789abcdef").unwrap();
    assert_eq!(buf.capacity(), 16);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut buf = NulBuf::from_bytes(b"hello world").unwrap();
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 11);
    assert_eq!(buf.as_bytes_with_nul(), b"\0");
    buf.append(b"hi").unwrap();
    assert_eq!(buf, "hi");
    assert_eq!(buf.capacity(), 11);
}

#[test]
fn test_assign_reuses_allocation_when_it_fits() {
    let mut buf = NulBuf::from_bytes(b"a long initial value").unwrap();
    buf.assign(b"short").unwrap();
    assert_eq!(buf, "short");
    assert_eq!(buf.capacity(), 20);
    assert_eq!(buf.as_bytes_with_nul(), b"short\0");
}

#[test]
fn test_assign_grows_when_needed() {
    let mut buf = NulBuf::from_bytes(b"ab").unwrap();
    buf.assign(b"a longer value").unwrap();
    assert_eq!(buf, "a longer value");
    assert_eq!(buf.capacity(), 14);
}

#[test]
fn test_assign_and_append_from_pointers() {
    let mut buf = NulBuf::new();
    unsafe {
        buf.assign_ptr(c"Hello".as_ptr()).unwrap();
        buf.append_ptr(c", world".as_ptr()).unwrap();
    }
    assert_eq!(buf, "Hello, world");
}

#[test]
fn test_reserve_never_shrinks() {
    let mut buf = NulBuf::from_bytes(b"abcdef").unwrap();
    buf.reserve(2).unwrap();
    assert_eq!(buf.capacity(), 6);
    buf.reserve(6).unwrap();
    assert_eq!(buf.capacity(), 6);
}

#[test]
fn test_shrink_to_fit_when_already_tight() {
    let mut buf = NulBuf::from_bytes(b"tight").unwrap();
    buf.shrink_to_fit().unwrap();
    assert_eq!(buf.capacity(), 5);
    assert_eq!(buf, "tight");
}

#[test]
fn test_shrink_empty_buffer() {
    let mut buf = NulBuf::with_capacity(32).unwrap();
    buf.shrink_to_fit().unwrap();
    assert_eq!(buf.capacity(), 0);
    assert_eq!(buf.as_bytes_with_nul(), b"\0");
}

#[test]
fn test_indexing() {
    let mut buf = NulBuf::from_bytes(b"abc").unwrap();
    assert_eq!(buf[0], b'a');
    buf[1] = b'X';
    assert_eq!(buf, "aXc");

    *buf.at_mut(2).unwrap() = b'Z';
    assert_eq!(*buf.at(2).unwrap(), b'Z');
    assert_eq!(buf, "aXZ");
}

#[test]
#[should_panic(expected = "Index 3 out of bounds for buffer of length 3")]
fn test_index_mut_past_length_panics() {
    let mut buf = NulBuf::from_bytes(b"abc").unwrap();
    buf[3] = b'!';
}

#[test]
#[should_panic]
fn test_index_past_length_panics() {
    let buf = NulBuf::from_bytes(b"abc").unwrap();
    let _ = buf[3];
}

#[test]
fn test_push_zero_byte_is_content() {
    let mut buf = NulBuf::from_bytes(b"a").unwrap();
    buf.push(0).unwrap();
    buf.push(b'b').unwrap();
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
    // the C view ends at the first zero byte
    assert_eq!(buf.as_c_str(), c"a");
}

#[test]
fn test_concat_buffers() {
    let hello = NulBuf::from_bytes(b"Hello").unwrap();
    let world = NulBuf::from_bytes(b", world").unwrap();
    let joined = (&hello + &world).unwrap();
    assert_eq!(joined, "Hello, world");
    assert_eq!(hello, "Hello");
    assert_eq!(world, ", world");
}

#[test]
fn test_concat_with_str_and_bytes() {
    let hello = NulBuf::from_bytes(b"Hello").unwrap();
    assert_eq!((&hello + ", world").unwrap(), "Hello, world");
    assert_eq!((&hello + b"!".as_slice()).unwrap(), "Hello!");
    assert_eq!(concat(&hello, b"").unwrap(), "Hello");
    assert_eq!(hello, "Hello");
    assert_eq!(hello.capacity(), 5);
}

#[test]
fn test_concat_chain() {
    let a = NulBuf::from_bytes(b"a").unwrap();
    let abc = ((&a + "b").unwrap() + b"c".as_slice()).unwrap();
    assert_eq!(abc, "abc");
}

#[test]
fn test_conversions() {
    let from_str = NulBuf::try_from("text").unwrap();
    let from_bytes = NulBuf::try_from(&b"text"[..]).unwrap();
    let from_cstr = NulBuf::try_from(c"text").unwrap();
    assert_eq!(from_str, from_bytes);
    assert_eq!(from_bytes, from_cstr);
    let as_ref: &[u8] = from_str.as_ref();
    assert_eq!(as_ref, b"text");
}

#[test]
fn test_ordering_and_hash_follow_content() {
    use std::collections::HashSet;

    let mut a = NulBuf::from_bytes(b"apple").unwrap();
    let b = NulBuf::from_bytes(b"banana").unwrap();
    assert!(a < b);

    a.reserve(64).unwrap();
    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b"apple"[..]));
}
