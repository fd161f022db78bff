//! RNG sampler task
//!
//! Periodically draws one value of each width plus a buffer fill and logs
//! them. Every draw spins on the RNG, so a round holds the executor for
//! 31 byte times.

use defmt::*;
use embassy_time::{Duration, Ticker};

use hwrng_nrf52::hw_rng;

/// Bytes drawn per buffer fill
pub const FILL_LEN: usize = 16;

/// Sampler configuration
#[derive(Clone, Copy)]
pub struct SamplerConfig {
    /// Time between sample rounds in milliseconds
    pub interval_ms: u64,
    /// Stop after this many rounds (0 = run forever)
    pub rounds: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            rounds: 0,
        }
    }
}

/// Sampler task - logs one round of RNG output per tick
#[embassy_executor::task]
pub async fn sampler_task(config: SamplerConfig) {
    info!("Sampler task started ({} ms interval)", config.interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(config.interval_ms));
    let mut round: u32 = 0;

    loop {
        ticker.next().await;

        let b = hw_rng::next_u8();
        let h = hw_rng::next_u16();
        let w = hw_rng::next_u32();
        let d = hw_rng::next_u64();
        let mut buf = [0u8; FILL_LEN];
        hw_rng::fill(&mut buf);

        info!(
            "#{}: u8={=u8:#x} u16={=u16:#x} u32={=u32:#x} u64={=u64:#x}",
            round, b, h, w, d
        );
        debug!("#{}: fill={:02x}", round, buf);

        round = round.wrapping_add(1);
        if config.rounds != 0 && round >= config.rounds {
            info!("Sampler done after {} rounds", round);
            // The RNG is left running on purpose
            hw_rng::shutdown();
            return;
        }
    }
}
