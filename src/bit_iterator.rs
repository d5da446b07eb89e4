use std::io::{ErrorKind, Read};
use std::slice;

/// Expands every byte of a reader into its bits, least significant bit first.
pub struct BitIterator<I> {
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.i % 8;
        if bit == 0 {
            self.byte = loop {
                let mut b = 0;
                match self.iter.read(slice::from_mut(&mut b)) {
                    Ok(0) => break None,
                    Ok(..) => break Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => break None,
                }
            };
        }
        let b = self.byte?;
        self.i += 1;

        Some((b >> bit) & 1 == 1)
    }
}
