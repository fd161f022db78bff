//! hwrng Hardware Abstraction Layer
//!
//! This crate holds everything about the nRF52 RNG shim that does not
//! depend on a particular peripheral access crate, so it builds and tests
//! on the host:
//!
//! - [`RngPeripheral`] - the handful of register operations the shim needs
//! - [`EntropySource`] - byte source with integer/buffer composition
//! - [`HwRng`] - driver gluing the two together
//! - [`shape`] - adapters for the two incompatible vendor register APIs
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hwrng-firmware, etc.)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hwrng-nrf52 (static `hw_rng` facility) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hwrng-hal (this crate)                 │
//! │  HwRng<P> ── EntropySource              │
//! │     P = V1<A: NrfxV1> | V2<R: NrfxV2>   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ nrf528xx-pac  │       │    nrf-pac    │
//! │  (svd2rust)   │       │  (chiptool)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Sharing the peripheral
//!
//! The SoftDevice radio stack uses the same RNG. The shim enables bias
//! correction, disables the VALRDY->STOP shortcut and triggers START once.
//! It never triggers the STOP task and never touches the interrupt enable
//! registers. [`RngPeripheral`] has no operation for either, so no driver
//! built on it can break that rule.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod driver;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod peripheral;
#[cfg(feature = "rand-core")]
pub mod rand;
pub mod shape;
pub mod source;

// Re-export key types at crate root for convenience
pub use driver::HwRng;
pub use peripheral::RngPeripheral;
pub use shape::{Event, NrfxV1, NrfxV2, Task, V1, V2};
pub use source::{EntropySource, FromRandomBytes};
