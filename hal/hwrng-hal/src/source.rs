//! Byte source abstraction
//!
//! [`EntropySource`] supplies one blocking primitive, [`EntropySource::next_byte`];
//! integers and buffers are composed from it in provided methods.
//!
//! Multi-byte values are big-endian: the first byte read becomes the most
//! significant byte. Each composed value costs exactly `size_of::<T>()`
//! sequential byte reads, with no batching.

/// A blocking source of random bytes
pub trait EntropySource {
    /// Configure the underlying hardware
    ///
    /// Must be called once before the first read. Calling it again is
    /// harmless.
    fn configure(&mut self);

    /// Block until a random byte is available and return it
    ///
    /// There is no timeout: once configured, the hardware always produces
    /// another value.
    fn next_byte(&mut self) -> u8;

    /// Release the hardware
    ///
    /// This is a no-op. The peripheral is shared with the radio stack and
    /// is left running for the lifetime of the program.
    fn shutdown(&mut self) {}

    /// Read one random byte
    fn next_u8(&mut self) -> u8 {
        self.next_byte()
    }

    /// Read two bytes as a big-endian `u16`
    fn next_u16(&mut self) -> u16 {
        u16::from_be_bytes(self.next_array())
    }

    /// Read four bytes as a big-endian `u32`
    fn next_u32(&mut self) -> u32 {
        u32::from_be_bytes(self.next_array())
    }

    /// Read eight bytes as a big-endian `u64`
    fn next_u64(&mut self) -> u64 {
        u64::from_be_bytes(self.next_array())
    }

    /// Fill `buf` one byte at a time, starting at index 0
    ///
    /// An empty buffer performs no reads.
    fn fill(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Read `N` bytes into a fresh array
    fn next_array<const N: usize>(&mut self) -> [u8; N] {
        let mut buf = [0u8; N];
        self.fill(&mut buf);
        buf
    }

    /// Read any fixed-size integer (big-endian)
    fn next_value<T: FromRandomBytes>(&mut self) -> T
    where
        Self: Sized,
    {
        T::from_source(self)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can be built from random bytes
///
/// Sealed: implemented for the primitive integers only.
pub trait FromRandomBytes: sealed::Sealed + Sized {
    /// Build a value from `size_of::<Self>()` sequential reads
    fn from_source<S: EntropySource>(source: &mut S) -> Self;
}

macro_rules! impl_from_random_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl FromRandomBytes for $t {
                fn from_source<S: EntropySource>(source: &mut S) -> Self {
                    <$t>::from_be_bytes(source.next_array())
                }
            }
        )*
    };
}

impl_from_random_bytes!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Replays a fixed byte sequence and counts reads
    struct Replay {
        bytes: Vec<u8, 32>,
        pos: usize,
        configured: bool,
    }

    impl Replay {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: Vec::from_slice(bytes).unwrap(),
                pos: 0,
                configured: false,
            }
        }
    }

    impl EntropySource for Replay {
        fn configure(&mut self) {
            self.configured = true;
        }

        fn next_byte(&mut self) -> u8 {
            assert!(self.configured, "read before configure");
            let b = self.bytes[self.pos];
            self.pos += 1;
            b
        }
    }

    #[test]
    fn test_u16_scenario() {
        let mut src = Replay::new(&[0x12, 0x34]);
        src.configure();
        assert_eq!(src.next_u16(), 0x1234);
        assert_eq!(src.pos, 2);
    }

    #[test]
    fn test_u32_scenario() {
        let mut src = Replay::new(&[0xDE, 0xAD, 0xBE, 0xEF]);
        src.configure();
        assert_eq!(src.next_u32(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_u64_and_u8() {
        let mut src = Replay::new(&[0x7F, 1, 2, 3, 4, 5, 6, 7, 8]);
        src.configure();
        assert_eq!(src.next_u8(), 0x7F);
        assert_eq!(src.next_u64(), 0x0102_0304_0506_0708);
        assert_eq!(src.pos, 9);
    }

    #[test]
    fn test_next_value_signed() {
        let mut src = Replay::new(&[0xFF, 0xFE]);
        src.configure();
        let v: i16 = src.next_value();
        assert_eq!(v, -2);
    }

    #[test]
    fn test_next_value_u128_consumes_sixteen() {
        let bytes: [u8; 16] = [0xA5; 16];
        let mut src = Replay::new(&bytes);
        src.configure();
        let v: u128 = src.next_value();
        assert_eq!(v, u128::from_be_bytes(bytes));
        assert_eq!(src.pos, 16);
    }

    #[test]
    fn test_shutdown_is_noop() {
        let mut src = Replay::new(&[9]);
        src.configure();
        src.shutdown();
        assert_eq!(src.next_byte(), 9);
    }
}
