//! Non-fatal hardware faults.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! The pad treats every I/O path as best-effort: a fault is recorded in
//! the cycle report, logged by the firmware, and the loop carries on.

use crate::protocol::PacketKind;
use crate::ui::ButtonEvent;

/// A hardware access that failed during one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Reading a button line failed; the channel counted as unchanged.
    InputRead(ButtonEvent),

    /// The serial link rejected a packet. It is not retried.
    SerialWrite(PacketKind),
}

/// Most faults one cycle can produce: three inputs, three packets.
pub const MAX_FAULTS_PER_CYCLE: usize = 6;

/// Faults collected during one cycle.
pub type Faults = heapless::Vec<Fault, MAX_FAULTS_PER_CYCLE>;
