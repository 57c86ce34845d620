//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place. Nothing is
//! configurable at runtime and nothing survives a power cycle.

use crate::protocol::{Backlight, WheelChecksum};

// Assist level

/// Assist level after every boot.
pub const DEFAULT_ASSIST_LEVEL: u8 = 1;

// Buttons

/// Settling delay after any detected line change (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Line level of a released button. Buttons pull the line low when
/// pressed, so the idle level is high.
pub const BUTTON_IDLE_LEVEL: bool = true;

// Serial link

/// Motor controller link rate (8N1, no flow control).
pub const SERIAL_BAUD: u32 = 1200;

/// Gap after each transmitted packet (ms). The controller delimits
/// packets by their fixed length and these idle gaps.
pub const INTER_PACKET_DELAY_MS: u32 = 1;

// Accessory settings sent alongside the assist level

/// Backlight state pushed with every frame.
pub const BACKLIGHT: Backlight = Backlight::Off;

/// Wheel diameter field pushed with every frame (raw controller units).
pub const WHEEL_DIAMETER: u16 = 0x90C6;

/// Checksum scope for the wheel packet. `Legacy` keeps the byte sequence
/// the stock pad puts on the wire; see [`WheelChecksum`].
pub const WHEEL_CHECKSUM: WheelChecksum = WheelChecksum::Legacy;

// RGB LED

/// Set for common-anode LEDs (channel lit when the pin is low).
pub const LED_COMMON_ANODE: bool = false;

/// PWM counter top; one step per 8-bit colour value.
pub const LED_PWM_MAX_DUTY: u16 = 255;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `board.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button POWER   → P0.24
//   LED red        → P0.13
//   LED green      → P0.14
//   LED blue       → P0.15
//   UART TX        → P0.06
