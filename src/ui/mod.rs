//! User interface - three handlebar buttons and one RGB indicator LED.
//!
//! ## Components
//!
//! - **Buttons**: 3 tactile switches, active-low with pull-ups (UP, DOWN, POWER)
//! - **LED**: common RGB LED on three PWM channels, colour = assist level

pub mod color;
pub mod input_logic;
pub mod led;

/// Physical button channels, and the edge event each one raises.
///
/// Declaration order is sampling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    /// Reserved: raised like the others, bound to nothing.
    Power,
}

impl ButtonEvent {
    /// All channels in sampling order.
    pub const ALL: [ButtonEvent; 3] = [ButtonEvent::Up, ButtonEvent::Down, ButtonEvent::Power];

    /// Position of this channel in [`ButtonEvent::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}
