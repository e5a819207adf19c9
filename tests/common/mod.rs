#![allow(dead_code)]

use bin_format::{BinChar, TempAlloc};

/// Refuses every request and counts them.
#[derive(Debug, Default)]
pub struct Refusing {
    pub calls: usize,
}

impl<C: BinChar> TempAlloc<C> for Refusing {
    type Buffer = Vec<C>;

    fn acquire(&mut self, _len: usize) -> Option<Vec<C>> {
        self.calls += 1;
        None
    }
}

/// Hands out a single buffer one unit too short, carved from `storage`.
#[derive(Debug)]
pub struct Short<'a> {
    pub storage: Option<&'a mut [u8]>,
}

impl<'a> TempAlloc<u8> for Short<'a> {
    type Buffer = &'a mut [u8];

    fn acquire(&mut self, len: usize) -> Option<&'a mut [u8]> {
        let storage = self.storage.take()?;
        let end = len.min(storage.len());
        let (head, _) = storage.split_at_mut(end);
        Some(head)
    }
}

/// Hands out heap buffers with spare capacity filled with `b'x'`, recording each request.
#[derive(Debug, Default)]
pub struct Padded {
    pub requests: Vec<usize>,
}

impl TempAlloc<u8> for Padded {
    type Buffer = Vec<u8>;

    fn acquire(&mut self, len: usize) -> Option<Vec<u8>> {
        self.requests.push(len);
        Some(vec![b'x'; len + 8])
    }
}

pub fn parse(digits: &str) -> u64 {
    u64::from_str_radix(digits, 2).unwrap()
}

pub fn zeros(n: usize) -> String {
    "0".repeat(n)
}
