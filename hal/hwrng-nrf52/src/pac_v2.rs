//! RNG binding for the chiptool PAC (`nrf-pac`)
//!
//! Register blocks are values here, so each call names the instance,
//! nrfx 2.x style.

use hwrng_hal::shape::{Event, NrfxV2, Task, V2};
use nrf_pac::rng::Rng;

/// Driver backend for this binding
pub type Backend = V2<Nrf52Rng>;

/// Backend handle (zero-sized apart from the register pointer)
pub const fn backend() -> Backend {
    V2::new(Nrf52Rng(nrf_pac::RNG))
}

/// The RNG register block
#[derive(Clone, Copy)]
pub struct Nrf52Rng(Rng);

impl NrfxV2 for Nrf52Rng {
    fn error_correction_enable(&self) {
        self.0.config().modify(|w| w.set_dercen(true));
    }

    fn shorts_disable(&self, mask: u32) {
        self.0.shorts().modify(|w| w.0 &= !mask);
    }

    fn task_trigger(&self, task: Task) {
        match task {
            Task::Start => self.0.tasks_start().write_value(1),
        }
    }

    fn event_check(&self, event: Event) -> bool {
        match event {
            Event::ValueReady => self.0.events_valrdy().read() != 0,
        }
    }

    fn random_value_get(&self) -> u8 {
        self.0.value().read().value()
    }

    fn event_clear(&self, event: Event) {
        match event {
            Event::ValueReady => self.0.events_valrdy().write_value(0),
        }
    }
}
