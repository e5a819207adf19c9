mod common;

use bin_format::{Arena, BinaryFormatter, Error, ErrorKind, Heap, Stack, TempAlloc};

use crate::common::{Refusing, Short};

#[test]
fn test_refused_allocation_is_an_error() {
    let mut formatter = BinaryFormatter::new(Refusing::default());

    let err = formatter.format_with_width(5, 8).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::AllocationFailure { requested: 8 });

    let err = formatter.format_default(0).unwrap_err();
    assert_eq!(err, Error::allocation_failure(64));

    assert!(formatter.format_trimmed(1).is_err());

    // no retries
    assert_eq!(formatter.allocator().calls, 3);
}

#[test]
fn test_short_buffer_is_left_untouched() {
    let mut storage = [b'x'; 8];
    {
        let short = Short {
            storage: Some(&mut storage),
        };
        let mut formatter = BinaryFormatter::new(short);

        let err = formatter.format_with_width(5, 3).unwrap_err();
        assert_eq!(err, Error::allocation_failure(3));

        // the storage is spent; the next request is refused outright
        assert!(formatter.format_with_width(5, 3).is_err());
    }
    assert_eq!(&storage, b"xxxxxxxx");
}

#[test]
fn test_arena_exhaustion_writes_nothing() {
    let mut storage = [b'x'; 70];
    {
        let mut formatter = BinaryFormatter::new(Arena::new(&mut storage));

        let first = formatter.format_with_width(5, 3).unwrap();
        assert_eq!(first.as_str(), "101");
        assert_eq!(formatter.allocator().used(), 4);

        // takes 65 of the remaining 66 units
        let second = formatter.format_default(5).unwrap();
        assert_eq!(second.len(), 64);
        assert_eq!(formatter.allocator().remaining(), 1);

        let err = formatter.format_with_width(1, 1).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::AllocationFailure { requested: 1 });
        assert_eq!(formatter.allocator().remaining(), 1);
        assert_eq!(formatter.allocator().used(), 69);
    }

    assert_eq!(&storage[..4], b"101\0");
    assert_eq!(storage[68], 0);
    assert_eq!(storage[69], b'x');
}

#[test]
fn test_arena_buffers_outlive_formatter() {
    let mut storage = [0u16; 32];
    let (a, b) = {
        let mut formatter = BinaryFormatter::<_, u16>::with_chars(Arena::new(&mut storage));
        let a = formatter.format_with_width(2, 2).unwrap();
        let b = formatter.format_with_width(3, 2).unwrap();
        (a, b)
    };
    assert_eq!(a, "10");
    assert_eq!(b, "11");
    assert_eq!(a.as_slice_with_nul(), &[0x31, 0x30, 0]);
}

#[test]
fn test_stack_refuses_oversized_requests() {
    let mut stack = Stack;
    assert!(TempAlloc::<u8>::acquire(&mut stack, 64).is_some());
    assert!(TempAlloc::<u8>::acquire(&mut stack, 65).is_none());

    let buf = TempAlloc::<char>::acquire(&mut stack, 3).unwrap();
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_heap_sizes_buffers_exactly() {
    let mut heap = Heap;
    let buf = TempAlloc::<u8>::acquire(&mut heap, 10).unwrap();
    assert_eq!(buf.len(), 11);
    assert!(buf.iter().all(|&b| b == 0));
    assert!(TempAlloc::<u8>::acquire(&mut heap, usize::MAX).is_none());
}

#[test]
fn test_wide_and_char_output() {
    let mut wide = BinaryFormatter::<Heap, u16>::with_chars(Heap);
    let bin = wide.format_with_width(5, 8).unwrap();
    assert_eq!(bin, "00000101");
    assert_eq!(bin.as_slice()[5..], [0x31u16, 0x30, 0x31]);

    let mut utf32 = BinaryFormatter::<Stack, u32>::with_chars(Stack);
    assert_eq!(utf32.format_trimmed(6).unwrap().to_string(), "110");

    let mut chars = BinaryFormatter::<Heap, char>::with_chars(Heap);
    let bin = chars.format_default(0).unwrap();
    assert_eq!(bin.as_slice_with_nul(), &['0', '\0']);
    let text: String = chars.format_trimmed(9).unwrap().as_slice().iter().collect();
    assert_eq!(text, "1001");
}

#[test]
fn test_error_display() {
    let err = Error::allocation_failure(64);
    assert_eq!(
        err.to_string(),
        "Failed to acquire a buffer for 64 binary digits and a terminator."
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("64"));
    assert_eq!(
        Error::from(ErrorKind::AllocationFailure { requested: 2 }),
        Error::allocation_failure(2)
    );
}
