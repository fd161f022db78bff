//! `rand_core` integration
//!
//! Lets [`HwRng`] seed or drive anything in the `rand` ecosystem. The RNG is
//! a true random source, so it is also marked [`CryptoRng`].
//!
//! `next_u32`/`next_u64` keep this crate's big-endian composition rather
//! than `rand_core`'s little-endian `fill_bytes` helpers.

use rand_core::{CryptoRng, Error, RngCore};

use crate::driver::HwRng;
use crate::peripheral::RngPeripheral;
use crate::source::EntropySource;

impl<P: RngPeripheral> RngCore for HwRng<P> {
    fn next_u32(&mut self) -> u32 {
        EntropySource::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        EntropySource::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill(dest);
        Ok(())
    }
}

impl<P: RngPeripheral> CryptoRng for HwRng<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRegisters;
    use crate::shape::V2;

    #[test]
    fn test_rng_core_matches_entropy_source() {
        let mut rng = HwRng::new(V2::new(MockRegisters::with_bytes(&[
            0xDE, 0xAD, 0xBE, 0xEF, 1, 2, 3,
        ])));
        rng.configure();

        assert_eq!(RngCore::next_u32(&mut rng), 0xDEAD_BEEF);

        let mut buf = [0u8; 3];
        rng.try_fill_bytes(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
    }
}
