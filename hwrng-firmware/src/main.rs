//! hwrng demo firmware
//!
//! Brings up the nRF52840, starts the hardware RNG through the static
//! `hw_rng` facility and logs samples of every width over RTT.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use hwrng_nrf52::hw_rng;

mod tasks;

use crate::tasks::SamplerConfig;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("hwrng demo starting...");

    // Time driver (RTC1) for the sampler ticker
    let _p = embassy_nrf::init(Default::default());
    info!("Peripherals initialized");

    // One-time RNG setup. Never undone: a SoftDevice may share the peripheral.
    hw_rng::configure();

    let seed: u32 = hw_rng::next_value();
    info!("RNG running, first word {=u32:#x}", seed);

    spawner
        .spawn(tasks::sampler_task(SamplerConfig::default()))
        .unwrap();
}
