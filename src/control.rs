//! The pad's control loop.
//!
//! One cycle: sample the buttons, apply UP/DOWN edges to the assist level,
//! and if anything changed repaint the LED and send the full frame. A
//! cycle either does the whole refresh-and-transmit or sends nothing.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::assist::AssistLevel;
use crate::error::Faults;
use crate::input::{Edges, InputSampler};
use crate::transport::{transmit_frame, Transport};
use crate::ui::color::color_for;
use crate::ui::input_logic::ButtonStates;
use crate::ui::led::RgbLed;
use crate::ui::ButtonEvent;

/// Everything the pad remembers between cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadState {
    pub buttons: ButtonStates,
    pub level: AssistLevel,
    /// Level changed since the last transmitted frame.
    pub dirty: bool,
}

impl PadState {
    /// Boot state: buttons at rest, default level, nothing pending.
    pub fn new(buttons: ButtonStates) -> Self {
        Self {
            buttons,
            level: AssistLevel::default(),
            dirty: false,
        }
    }

    /// Apply one edge. Returns `true` if the assist level changed.
    pub fn apply(&mut self, edge: ButtonEvent) -> bool {
        match edge {
            ButtonEvent::Up => self.level.increment(),
            ButtonEvent::Down => self.level.decrement(),
            ButtonEvent::Power => return false,
        }
        self.dirty = true;
        true
    }
}

/// What one cycle did, for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Edges raised this cycle, in sampling order.
    pub edges: Edges,
    /// Assist level at the end of the cycle.
    pub level: u8,
    /// A frame went out this cycle.
    pub transmitted: bool,
    /// The LED was repainted (false for levels without a colour).
    pub led_updated: bool,
    pub faults: Faults,
}

/// Hardware the control loop drives.
pub struct ControlLoop<P, L, T, D> {
    inputs: InputSampler<P>,
    led: L,
    link: T,
    delay: D,
}

impl<P, L, T, D> ControlLoop<P, L, T, D>
where
    P: InputPin,
    L: RgbLed,
    T: Transport,
    D: DelayNs,
{
    pub fn new(inputs: InputSampler<P>, led: L, link: T, delay: D) -> Self {
        Self {
            inputs,
            led,
            link,
            delay,
        }
    }

    /// Boot state matching the attached buttons.
    pub fn initial_state(&self) -> PadState {
        PadState::new(self.inputs.idle_states())
    }

    /// Run one iteration against `state`.
    pub fn cycle(&mut self, state: &mut PadState) -> CycleReport {
        let mut faults = Faults::new();
        let edges = self
            .inputs
            .sample(&mut state.buttons, &mut self.delay, &mut faults);

        for &edge in &edges {
            state.apply(edge);
        }

        let level = state.level.current();
        let mut led_updated = false;
        let transmitted = state.dirty;

        if state.dirty {
            if let Some(color) = color_for(level) {
                self.led.set_color(color);
                led_updated = true;
            }
            transmit_frame(&mut self.link, &mut self.delay, level, &mut faults);
            state.dirty = false;
        }

        CycleReport {
            edges,
            level,
            transmitted,
            led_updated,
            faults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_edge_leaves_state_clean() {
        let mut state = PadState::new(ButtonStates::idle(true));
        assert!(!state.apply(ButtonEvent::Power));
        assert!(!state.dirty);
        assert_eq!(state.level.current(), 1);
    }

    #[test]
    fn up_and_down_edges_mark_dirty() {
        let mut state = PadState::new(ButtonStates::idle(true));
        assert!(state.apply(ButtonEvent::Up));
        assert!(state.dirty);
        assert_eq!(state.level.current(), 2);

        state.dirty = false;
        assert!(state.apply(ButtonEvent::Down));
        assert!(state.dirty);
        assert_eq!(state.level.current(), 1);
    }

    #[test]
    fn opposite_edges_still_leave_state_dirty() {
        // UP then DOWN nets to the same level but still forces a frame.
        let mut state = PadState::new(ButtonStates::idle(true));
        state.apply(ButtonEvent::Up);
        state.apply(ButtonEvent::Down);
        assert_eq!(state.level.current(), 1);
        assert!(state.dirty);
    }
}
