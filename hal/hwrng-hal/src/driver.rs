//! Blocking RNG driver
//!
//! [`HwRng`] implements [`EntropySource`] on top of any [`RngPeripheral`].
//! On hardware the peripheral handle is zero-sized, so `HwRng` carries no
//! state of its own and can be created wherever it is needed.

use crate::peripheral::RngPeripheral;
use crate::source::EntropySource;

/// Hardware RNG driver
///
/// Provides no locking. Callers using the RNG from more than one execution
/// context must serialize access themselves.
pub struct HwRng<P> {
    peripheral: P,
}

impl<P: RngPeripheral> HwRng<P> {
    /// Wrap a peripheral handle
    ///
    /// Does not touch the hardware; call [`EntropySource::configure`] before
    /// the first read.
    pub const fn new(peripheral: P) -> Self {
        Self { peripheral }
    }

    /// Get access to the underlying peripheral
    pub fn peripheral(&self) -> &P {
        &self.peripheral
    }

    /// Release the peripheral handle
    ///
    /// The hardware keeps running.
    pub fn free(self) -> P {
        self.peripheral
    }
}

impl<P: RngPeripheral> EntropySource for HwRng<P> {
    fn configure(&mut self) {
        self.peripheral.enable_error_correction();
        self.peripheral.disable_valrdy_stop_short();
        self.peripheral.trigger_start();
    }

    fn next_byte(&mut self) -> u8 {
        // Unconfigured hardware never sets VALRDY; this spins forever.
        while !self.peripheral.value_ready() {
            core::hint::spin_loop();
        }
        let value = self.peripheral.read_value();
        self.peripheral.clear_value_ready();
        value
    }
}
