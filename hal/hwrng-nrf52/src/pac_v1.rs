//! RNG binding for the svd2rust PACs
//!
//! `nrf52832-pac`, `nrf52833-pac` and `nrf52840-pac` expose the register
//! block through a raw pointer; every call goes through it, nrfx 1.x style.

#[cfg(feature = "nrf52832")]
use nrf52832_pac as pac;
#[cfg(feature = "nrf52833")]
use nrf52833_pac as pac;
#[cfg(feature = "nrf52840")]
use nrf52840_pac as pac;

use hwrng_hal::shape::{Event, NrfxV1, Task, V1};

/// Driver backend for this binding
pub type Backend = V1<Nrf52Rng>;

/// Backend handle (zero-sized)
pub const fn backend() -> Backend {
    V1::new()
}

/// The RNG instance
pub struct Nrf52Rng;

#[inline(always)]
fn regs() -> &'static pac::rng::RegisterBlock {
    // SAFETY: fixed MMIO address; all accesses below are single volatile
    // register reads or writes of the RNG block.
    unsafe { &*pac::RNG::ptr() }
}

impl NrfxV1 for Nrf52Rng {
    fn error_correction_enable() {
        regs().config.modify(|_, w| w.dercen().enabled());
    }

    fn shorts_disable(mask: u32) {
        regs()
            .shorts
            .modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
    }

    fn task_trigger(task: Task) {
        match task {
            Task::Start => regs().tasks_start.write(|w| unsafe { w.bits(1) }),
        }
    }

    fn event_get(event: Event) -> bool {
        match event {
            Event::ValueReady => regs().events_valrdy.read().bits() != 0,
        }
    }

    fn random_value_get() -> u8 {
        regs().value.read().value().bits()
    }

    fn event_clear(event: Event) {
        match event {
            Event::ValueReady => regs().events_valrdy.write(|w| unsafe { w.bits(0) }),
        }
    }
}
