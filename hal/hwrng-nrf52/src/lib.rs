//! nRF52 hardware RNG shim
//!
//! Static access to the RNG peripheral of the nRF52 family, usable while
//! the SoftDevice radio stack shares the same peripheral.
//!
//! # Features
//!
//! - `pac-v1` - bind through the svd2rust `nrf528xx-pac` crates
//! - `pac-v2` - bind through the chiptool `nrf-pac` crate
//! - `nrf52832`, `nrf52833`, `nrf52840` - chip variant
//! - `never-inline` - never inline the facility functions (default is
//!   always inline; behavior is identical)
//! - `defmt` - debug formatting and a configure log line
//! - `rand-core` - `rand_core::RngCore` for [`hw_rng::handle`]
//!
//! Exactly one register API and one chip must be selected.
//!
//! # Usage
//!
//! ```ignore
//! use hwrng_nrf52::hw_rng;
//!
//! hw_rng::configure();
//! let nonce = hw_rng::next_u64();
//! let mut key = [0u8; 16];
//! hw_rng::fill(&mut key);
//! ```
//!
//! # Sharing with the SoftDevice
//!
//! [`hw_rng::configure`] enables bias correction, clears the VALRDY->STOP
//! shortcut and triggers START. After that the peripheral is never stopped
//! and its interrupt configuration is never touched, for the lifetime of
//! the program. [`hw_rng::shutdown`] exists for symmetry and does nothing.

#![no_std]

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
compile_error!("hwrng-nrf52 only supports nRF52 targets (thumbv7em-none-eabi[hf])");

#[cfg(all(feature = "pac-v1", feature = "pac-v2"))]
compile_error!("features `pac-v1` and `pac-v2` are mutually exclusive");

#[cfg(not(any(feature = "pac-v1", feature = "pac-v2")))]
compile_error!("select a register API: enable feature `pac-v1` or `pac-v2`");

#[cfg(not(any(feature = "nrf52832", feature = "nrf52833", feature = "nrf52840")))]
compile_error!("select a chip: enable feature `nrf52832`, `nrf52833` or `nrf52840`");

#[cfg(any(
    all(feature = "nrf52832", feature = "nrf52833"),
    all(feature = "nrf52832", feature = "nrf52840"),
    all(feature = "nrf52833", feature = "nrf52840"),
))]
compile_error!("only one chip feature may be enabled");

#[cfg(feature = "pac-v1")]
mod pac_v1;
#[cfg(feature = "pac-v2")]
mod pac_v2;

#[cfg(feature = "pac-v1")]
pub use pac_v1::{backend, Backend, Nrf52Rng};
#[cfg(feature = "pac-v2")]
pub use pac_v2::{backend, Backend, Nrf52Rng};

// Re-export shared types from hwrng-hal
pub use hwrng_hal::{EntropySource, FromRandomBytes, HwRng};

macro_rules! inline_toggle {
    ($($item:item)*) => {
        $(
            #[cfg_attr(feature = "never-inline", inline(never))]
            #[cfg_attr(not(feature = "never-inline"), inline(always))]
            $item
        )*
    };
}

/// Static RNG facility
///
/// Free functions over the one RNG instance. There is nothing to construct
/// or drop; [`configure`] must run once before any read.
///
/// Reads spin on VALRDY with no timeout. Keep them off paths with a
/// deadline. Calls from different execution contexts (thread mode and an
/// interrupt handler, say) must be serialized by the caller.
pub mod hw_rng {
    use hwrng_hal::{EntropySource, FromRandomBytes, HwRng};

    use crate::{backend, Backend};

    inline_toggle! {
        /// Driver handle over the RNG registers
        ///
        /// Zero-sized. Useful where a value is needed, e.g. as a
        /// `rand_core::RngCore` with the `rand-core` feature.
        pub const fn handle() -> HwRng<Backend> {
            HwRng::new(backend())
        }

        /// Enable bias correction, clear the VALRDY->STOP shortcut, start
        pub fn configure() {
            handle().configure();
            #[cfg(feature = "defmt")]
            defmt::debug!("RNG started (bias correction on, VALRDY->STOP short off)");
        }

        /// Does nothing: the radio stack needs the RNG left running
        pub fn shutdown() {
            handle().shutdown();
        }

        /// Block until a random byte is ready and return it
        pub fn next_u8() -> u8 {
            handle().next_byte()
        }

        /// Two bytes, first byte most significant
        pub fn next_u16() -> u16 {
            handle().next_u16()
        }

        /// Four bytes, first byte most significant
        pub fn next_u32() -> u32 {
            handle().next_u32()
        }

        /// Eight bytes, first byte most significant
        pub fn next_u64() -> u64 {
            handle().next_u64()
        }

        /// Fill `buf` front to back, one blocking read per byte
        pub fn fill(buf: &mut [u8]) {
            handle().fill(buf)
        }

        /// `N` random bytes
        pub fn next_array<const N: usize>() -> [u8; N] {
            handle().next_array()
        }

        /// Any primitive integer, big-endian
        pub fn next_value<T: FromRandomBytes>() -> T {
            handle().next_value()
        }
    }
}
