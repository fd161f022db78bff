//! Scripted RNG register block for host tests
//!
//! [`MockRegisters`] behaves like the RNG peripheral closely enough to catch
//! driver mistakes:
//!
//! - nothing is generated until START is triggered
//! - each generated byte sets VALRDY and stays latched in VALUE until the
//!   next byte is generated, which only happens after VALRDY is cleared
//! - with the VALRDY->STOP shortcut set (see [`MockRegisters::with_valrdy_stop_short`]),
//!   generation halts after the first byte
//! - a configurable number of polls pass before each byte becomes ready
//!
//! Polling VALRDY when no byte can ever arrive panics instead of hanging,
//! since the real driver would spin forever.

use core::cell::RefCell;

use heapless::Deque;

use crate::shape::{Event, NrfxV2, Task, SHORT_VALRDY_STOP_MASK};

/// Maximum number of scripted bytes
pub const SCRIPT_CAPACITY: usize = 256;

/// Access counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MockStats {
    /// START task triggers
    pub starts: u32,
    /// VALRDY polls
    pub polls: u32,
    /// VALUE reads
    pub reads: u32,
    /// VALUE reads while VALRDY was clear
    pub stale_reads: u32,
    /// VALRDY clears
    pub clears: u32,
}

struct State {
    script: Deque<u8, SCRIPT_CAPACITY>,
    dercen: bool,
    shorts: u32,
    running: bool,
    valrdy: bool,
    value: u8,
    latency: u8,
    polls_left: u8,
    stats: MockStats,
}

impl State {
    const fn new() -> Self {
        Self {
            script: Deque::new(),
            dercen: false,
            shorts: 0,
            running: false,
            valrdy: false,
            value: 0,
            latency: 0,
            polls_left: 0,
            stats: MockStats {
                starts: 0,
                polls: 0,
                reads: 0,
                stale_reads: 0,
                clears: 0,
            },
        }
    }

    /// Advance the generator by one poll
    fn step(&mut self) {
        if self.valrdy {
            return;
        }
        if !self.running {
            panic!("VALRDY polled while the RNG is stopped; it will never be set");
        }
        if self.script.is_empty() {
            panic!("mock RNG script exhausted");
        }
        if self.polls_left > 0 {
            self.polls_left -= 1;
            return;
        }

        if let Some(byte) = self.script.pop_front() {
            self.value = byte;
            self.valrdy = true;
            self.polls_left = self.latency;
            if self.shorts & SHORT_VALRDY_STOP_MASK != 0 {
                self.running = false;
            }
        }
    }
}

/// In-memory RNG register block
///
/// Register accesses go through `&self`, as they do for real MMIO.
pub struct MockRegisters {
    state: RefCell<State>,
}

impl MockRegisters {
    /// Create a register block in its reset state with an empty script
    pub const fn new() -> Self {
        Self {
            state: RefCell::new(State::new()),
        }
    }

    /// Create a register block that will produce `bytes` in order
    ///
    /// # Panics
    /// If `bytes` is longer than [`SCRIPT_CAPACITY`].
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let regs = Self::new();
        regs.reset(bytes);
        regs
    }

    /// Start with the VALRDY->STOP shortcut set, as another user of the
    /// peripheral may have left it
    pub fn with_valrdy_stop_short(self) -> Self {
        self.state.borrow_mut().shorts |= SHORT_VALRDY_STOP_MASK;
        self
    }

    /// Return to the reset state and load a new script
    pub fn reset(&self, bytes: &[u8]) {
        let mut state = self.state.borrow_mut();
        *state = State::new();
        for &b in bytes {
            if state.script.push_back(b).is_err() {
                panic!("mock RNG script longer than {} bytes", SCRIPT_CAPACITY);
            }
        }
    }

    /// Number of polls that read VALRDY clear before each byte is ready
    pub fn set_latency(&self, polls: u8) {
        let mut state = self.state.borrow_mut();
        state.latency = polls;
        state.polls_left = polls;
    }

    /// Access counters so far
    pub fn stats(&self) -> MockStats {
        self.state.borrow().stats
    }

    /// Whether `CONFIG.DERCEN` is set
    pub fn error_correction_enabled(&self) -> bool {
        self.state.borrow().dercen
    }

    /// Current `SHORTS` value
    pub fn shorts(&self) -> u32 {
        self.state.borrow().shorts
    }

    /// Whether the generator is running
    pub fn running(&self) -> bool {
        self.state.borrow().running
    }

    /// Scripted bytes not generated yet
    pub fn remaining(&self) -> usize {
        self.state.borrow().script.len()
    }
}

impl Default for MockRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl NrfxV2 for MockRegisters {
    fn error_correction_enable(&self) {
        self.state.borrow_mut().dercen = true;
    }

    fn shorts_disable(&self, mask: u32) {
        self.state.borrow_mut().shorts &= !mask;
    }

    fn task_trigger(&self, task: Task) {
        let mut state = self.state.borrow_mut();
        match task {
            Task::Start => {
                state.stats.starts += 1;
                state.running = true;
            }
        }
    }

    fn event_check(&self, event: Event) -> bool {
        let mut state = self.state.borrow_mut();
        match event {
            Event::ValueReady => {
                state.stats.polls += 1;
                state.step();
                state.valrdy
            }
        }
    }

    fn random_value_get(&self) -> u8 {
        let mut state = self.state.borrow_mut();
        state.stats.reads += 1;
        if !state.valrdy {
            state.stats.stale_reads += 1;
        }
        state.value
    }

    fn event_clear(&self, event: Event) {
        let mut state = self.state.borrow_mut();
        match event {
            Event::ValueReady => {
                state.stats.clears += 1;
                state.valrdy = false;
            }
        }
    }
}
