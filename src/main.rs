//! pas-pad firmware entry point (nRF52840).
//!
//! Runs the control loop forever in a single task. Each cycle blocks on
//! the debounce and packet-gap delays itself; the task only yields to the
//! executor between cycles.

#![no_std]
#![no_main]

mod board;

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use pas_pad::config;
use pas_pad::CycleReport;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    let mut pad = board::init(p);
    let mut state = pad.initial_state();

    info!(
        "pas-pad up: level={} baud={} wheel=0x{:04x} backlight={} checksum={}",
        state.level.current(),
        config::SERIAL_BAUD,
        config::WHEEL_DIAMETER,
        config::BACKLIGHT,
        config::WHEEL_CHECKSUM,
    );

    loop {
        let report = pad.cycle(&mut state);
        log_cycle(&report);
        embassy_futures::yield_now().await;
    }
}

fn log_cycle(report: &CycleReport) {
    for edge in &report.edges {
        debug!("Button: {}", edge);
    }

    if report.transmitted {
        info!(
            "Assist level {} sent (led {})",
            report.level,
            if report.led_updated { "updated" } else { "unchanged" }
        );
    }

    for fault in &report.faults {
        warn!("Fault: {}", fault);
    }
}
