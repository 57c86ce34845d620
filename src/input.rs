//! Polled button sampling with blocking debounce.
//!
//! Each cycle reads UP, DOWN and POWER in that order. A line whose level
//! differs from the remembered one has changed; the change is recorded,
//! and if the line went back to its idle level the channel raises an
//! edge. Any change, in either direction, is followed by a blocking
//! settling delay before the next channel is read, so contact bounce is
//! never seen. There is no per-channel debounce state beyond that delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_IDLE_LEVEL};
use crate::error::{Fault, Faults};
use crate::ui::input_logic::{classify, ButtonStates, Transition};
use crate::ui::ButtonEvent;

/// Edges raised in one cycle, in sampling order.
pub type Edges = Vec<ButtonEvent, 3>;

/// The three button inputs.
pub struct InputSampler<P> {
    pins: [P; 3],
    idle_level: bool,
    debounce_ms: u32,
}

impl<P: InputPin> InputSampler<P> {
    /// Pull-up wired buttons (idle high) with the configured debounce.
    pub fn new(up: P, down: P, power: P) -> Self {
        Self {
            pins: [up, down, power],
            idle_level: BUTTON_IDLE_LEVEL,
            debounce_ms: BUTTON_DEBOUNCE_MS,
        }
    }

    /// Line states matching this sampler's wiring at rest.
    pub fn idle_states(&self) -> ButtonStates {
        ButtonStates::idle(self.idle_level)
    }

    /// Read every channel once, updating `lines` and blocking on `delay`
    /// after each change.
    ///
    /// A failed read leaves that channel untouched for this cycle and
    /// appends a [`Fault::InputRead`].
    pub fn sample<D: DelayNs>(
        &mut self,
        lines: &mut ButtonStates,
        delay: &mut D,
        faults: &mut Faults,
    ) -> Edges {
        let mut edges = Edges::new();

        for channel in ButtonEvent::ALL {
            let Ok(level) = self.pins[channel.index()].is_high() else {
                let _ = faults.push(Fault::InputRead(channel));
                continue;
            };

            let line = lines.line_mut(channel);
            match classify(line.previous, level, self.idle_level) {
                Transition::Unchanged => {}
                transition => {
                    line.current = level;
                    if transition == Transition::Released {
                        // Capacity 3, one push per channel.
                        let _ = edges.push(channel);
                    }
                    delay.delay_ms(self.debounce_ms);
                }
            }
            line.previous = level;
        }

        edges
    }
}
