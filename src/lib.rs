//! Board-independent library for the pas-pad firmware.
//!
//! Everything that decides what the pad does lives here: button sampling
//! and debounce, the assist-level counter, the level → colour map, the
//! motor controller packet encoders, and the control loop tying them
//! together. Hardware sits behind `embedded-hal` traits and the crate's
//! own [`ui::led::RgbLed`] / [`transport::Transport`] seams, so all of it
//! runs on the host.
//!
//! Usage: `cargo test --lib` (unit) or `cargo test` (unit + integration)
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and binds these types to nRF52840 peripherals in `board.rs`.

#![cfg_attr(not(test), no_std)]

pub mod assist;
pub mod config;
pub mod control;
pub mod error;
pub mod input;
pub mod protocol;
pub mod transport;
pub mod ui;

pub use assist::AssistLevel;
pub use control::{ControlLoop, CycleReport, PadState};
pub use error::Fault;
pub use input::InputSampler;
pub use transport::Transport;
pub use ui::led::RgbLed;
pub use ui::ButtonEvent;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
