//! RNG register capability
//!
//! The minimal set of register operations the shim consumes from the
//! vendor layer. Every backend (and the host mock) implements this trait;
//! everything above it is written once.

/// Register-level access to the RNG peripheral
///
/// Methods take `&self` because they are memory-mapped register accesses,
/// not Rust-visible state changes.
///
/// There is deliberately no way to stop the peripheral or to change its
/// interrupt configuration here. The radio stack relies on the RNG running
/// once started.
pub trait RngPeripheral {
    /// Set `CONFIG.DERCEN` (hardware bias correction)
    fn enable_error_correction(&self);

    /// Clear the VALRDY->STOP shortcut so the peripheral keeps running
    fn disable_valrdy_stop_short(&self);

    /// Trigger the START task
    fn trigger_start(&self);

    /// Check `EVENTS_VALRDY`
    fn value_ready(&self) -> bool;

    /// Read the byte latched in `VALUE`
    fn read_value(&self) -> u8;

    /// Clear `EVENTS_VALRDY`
    fn clear_value_ready(&self);
}

impl<P: RngPeripheral + ?Sized> RngPeripheral for &P {
    fn enable_error_correction(&self) {
        (**self).enable_error_correction()
    }

    fn disable_valrdy_stop_short(&self) {
        (**self).disable_valrdy_stop_short()
    }

    fn trigger_start(&self) {
        (**self).trigger_start()
    }

    fn value_ready(&self) -> bool {
        (**self).value_ready()
    }

    fn read_value(&self) -> u8 {
        (**self).read_value()
    }

    fn clear_value_ready(&self) {
        (**self).clear_value_ready()
    }
}
