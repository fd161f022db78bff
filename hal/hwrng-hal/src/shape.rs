//! Vendor register API shapes
//!
//! Nordic broke the RNG register API between nrfx 1.x and 2.x, and the Rust
//! peripheral access crates split along the same line:
//!
//! - [`NrfxV1`]: one implicit peripheral instance, every call is an
//!   associated function with no receiver (`event_get`). The svd2rust
//!   `nrf528xx-pac` crates are bound this way.
//! - [`NrfxV2`]: every call names the register block it acts on
//!   (`event_check`). The chiptool `nrf-pac` crate is bound this way.
//!
//! [`V1`] and [`V2`] adapt either shape to [`RngPeripheral`], so the driver
//! and the composition logic exist once. Which shape a build uses is fixed
//! per target and chosen by Cargo feature in the chip crate.
//!
//! Only the START task and the VALRDY event exist in these types.

use core::marker::PhantomData;

use crate::peripheral::RngPeripheral;

/// `SHORTS` bit linking VALRDY to STOP
pub const SHORT_VALRDY_STOP_MASK: u32 = 1 << 0;

/// RNG tasks, by register offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Task {
    /// Start generating random values
    Start = 0x000,
}

/// RNG events, by register offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Event {
    /// A new random byte is in `VALUE`
    ValueReady = 0x100,
}

/// nrfx 1.x style register API (implicit singleton)
pub trait NrfxV1 {
    fn error_correction_enable();
    fn shorts_disable(mask: u32);
    fn task_trigger(task: Task);
    fn event_get(event: Event) -> bool;
    fn random_value_get() -> u8;
    fn event_clear(event: Event);
}

/// nrfx 2.x style register API (explicit register block)
///
/// Implemented on the register block handle itself.
pub trait NrfxV2 {
    fn error_correction_enable(&self);
    fn shorts_disable(&self, mask: u32);
    fn task_trigger(&self, task: Task);
    fn event_check(&self, event: Event) -> bool;
    fn random_value_get(&self) -> u8;
    fn event_clear(&self, event: Event);
}

/// Adapter for a [`NrfxV1`] binding
///
/// Zero-sized: the binding addresses the one RNG instance on its own.
pub struct V1<A> {
    _api: PhantomData<fn() -> A>,
}

impl<A: NrfxV1> V1<A> {
    pub const fn new() -> Self {
        Self { _api: PhantomData }
    }
}

impl<A: NrfxV1> Default for V1<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: NrfxV1> RngPeripheral for V1<A> {
    fn enable_error_correction(&self) {
        A::error_correction_enable();
    }

    fn disable_valrdy_stop_short(&self) {
        A::shorts_disable(SHORT_VALRDY_STOP_MASK);
    }

    fn trigger_start(&self) {
        A::task_trigger(Task::Start);
    }

    fn value_ready(&self) -> bool {
        A::event_get(Event::ValueReady)
    }

    fn read_value(&self) -> u8 {
        A::random_value_get()
    }

    fn clear_value_ready(&self) {
        A::event_clear(Event::ValueReady);
    }
}

/// Adapter for a [`NrfxV2`] register block
pub struct V2<R> {
    regs: R,
}

impl<R: NrfxV2> V2<R> {
    pub const fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Get access to the underlying register block
    pub fn registers(&self) -> &R {
        &self.regs
    }
}

impl<R: NrfxV2> RngPeripheral for V2<R> {
    fn enable_error_correction(&self) {
        self.regs.error_correction_enable();
    }

    fn disable_valrdy_stop_short(&self) {
        self.regs.shorts_disable(SHORT_VALRDY_STOP_MASK);
    }

    fn trigger_start(&self) {
        self.regs.task_trigger(Task::Start);
    }

    fn value_ready(&self) -> bool {
        self.regs.event_check(Event::ValueReady)
    }

    fn read_value(&self) -> u8 {
        self.regs.random_value_get()
    }

    fn clear_value_ready(&self) {
        self.regs.event_clear(Event::ValueReady);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::HwRng;
    use crate::mock::MockRegisters;
    use crate::source::EntropySource;
    use proptest::prelude::*;
    use std::vec::Vec;

    std::thread_local! {
        static GLOBAL_RNG: MockRegisters = MockRegisters::new();
    }

    /// nrfx 1.x binding over a per-thread mock register block
    struct GlobalMock;

    impl NrfxV1 for GlobalMock {
        fn error_correction_enable() {
            GLOBAL_RNG.with(|r| NrfxV2::error_correction_enable(r));
        }

        fn shorts_disable(mask: u32) {
            GLOBAL_RNG.with(|r| NrfxV2::shorts_disable(r, mask));
        }

        fn task_trigger(task: Task) {
            GLOBAL_RNG.with(|r| NrfxV2::task_trigger(r, task));
        }

        fn event_get(event: Event) -> bool {
            GLOBAL_RNG.with(|r| r.event_check(event))
        }

        fn random_value_get() -> u8 {
            GLOBAL_RNG.with(|r| NrfxV2::random_value_get(r))
        }

        fn event_clear(event: Event) {
            GLOBAL_RNG.with(|r| NrfxV2::event_clear(r, event));
        }
    }

    /// Everything observable from one sequence of reads
    fn drain<S: EntropySource>(rng: &mut S, script_len: usize) -> (u8, u16, u32, u64, Vec<u8>) {
        rng.configure();
        let a = rng.next_u8();
        let b = rng.next_u16();
        let c = rng.next_u32();
        let d = rng.next_u64();
        let mut rest = std::vec![0u8; script_len - 15];
        rng.fill(&mut rest);
        (a, b, c, d, rest)
    }

    #[test]
    fn test_v1_configures_like_v2() {
        GLOBAL_RNG.with(|r| r.reset(&[0x42]));
        let mut v1 = HwRng::new(V1::<GlobalMock>::new());
        v1.configure();
        GLOBAL_RNG.with(|r| {
            assert!(r.error_correction_enabled());
            assert_eq!(r.shorts() & SHORT_VALRDY_STOP_MASK, 0);
            assert!(r.running());
        });
        assert_eq!(v1.next_byte(), 0x42);
    }

    #[test]
    fn test_both_shapes_same_scenarios() {
        let script = [0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF];

        GLOBAL_RNG.with(|r| r.reset(&script));
        let mut v1 = HwRng::new(V1::<GlobalMock>::new());
        v1.configure();
        assert_eq!(v1.next_u16(), 0x1234);
        assert_eq!(v1.next_u32(), 0xDEAD_BEEF);

        let mut v2 = HwRng::new(V2::new(MockRegisters::with_bytes(&script)));
        v2.configure();
        assert_eq!(v2.next_u16(), 0x1234);
        assert_eq!(v2.next_u32(), 0xDEAD_BEEF);
    }

    proptest! {
        #[test]
        fn prop_shapes_are_interchangeable(
            script in proptest::collection::vec(any::<u8>(), 15..64),
            latency in 0u8..4,
        ) {
            GLOBAL_RNG.with(|r| {
                r.reset(&script);
                r.set_latency(latency);
            });
            let mut v1 = HwRng::new(V1::<GlobalMock>::new());
            let from_v1 = drain(&mut v1, script.len());

            let regs = MockRegisters::with_bytes(&script);
            regs.set_latency(latency);
            let mut v2 = HwRng::new(V2::new(regs));
            let from_v2 = drain(&mut v2, script.len());

            prop_assert_eq!(from_v1, from_v2);
            let stats = v2.peripheral().registers().stats();
            prop_assert_eq!(stats.reads as usize, script.len());
            prop_assert_eq!(stats.clears as usize, script.len());
        }
    }

    /// Register backends must never reference the STOP task or the
    /// interrupt enable registers.
    #[test]
    fn test_backends_never_stop_or_touch_interrupts() {
        const SOURCES: [(&str, &str); 3] = [
            ("pac_v1.rs", include_str!("../../hwrng-nrf52/src/pac_v1.rs")),
            ("pac_v2.rs", include_str!("../../hwrng-nrf52/src/pac_v2.rs")),
            ("lib.rs", include_str!("../../hwrng-nrf52/src/lib.rs")),
        ];
        const FORBIDDEN: [&str; 6] = [
            "tasks_stop",
            "intenset",
            "intenclr",
            "inten(",
            "inten.",
            "Task::Stop",
        ];

        for (file, source) in SOURCES {
            for needle in FORBIDDEN {
                assert!(
                    !source.contains(needle),
                    "{} references `{}`; the RNG is shared with the radio stack",
                    file,
                    needle
                );
            }
        }
    }
}
