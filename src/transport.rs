//! Serial link to the motor controller.
//!
//! The link is write-only and fire-and-forget: no acknowledgement, no
//! retry. A frame is the three packets sent back to back, each followed
//! by a short idle gap the controller uses to split them.

use embedded_hal::delay::DelayNs;

use crate::config::{BACKLIGHT, INTER_PACKET_DELAY_MS, WHEEL_CHECKSUM, WHEEL_DIAMETER};
use crate::error::{Fault, Faults};
use crate::protocol::{encode_backlight, encode_pas, encode_wheel, Packet, PacketKind};

/// Serial transmitter.
///
/// Implementations push the bytes out in order and return once the
/// hardware has accepted them.
pub trait Transport {
    /// Error type for write operations
    type Error;

    /// Write all of `data` to the link.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// The three packets for one assist level, in transmission order.
pub fn frame_for(level: u8) -> [(PacketKind, Packet); 3] {
    [
        (PacketKind::PasLevel, encode_pas(level)),
        (PacketKind::Backlight, encode_backlight(BACKLIGHT)),
        (
            PacketKind::WheelDiameter,
            encode_wheel(WHEEL_DIAMETER, WHEEL_CHECKSUM),
        ),
    ]
}

/// Send the full frame for `level`.
///
/// Every packet is attempted even if an earlier one failed; failures are
/// appended to `faults`.
pub fn transmit_frame<T, D>(link: &mut T, delay: &mut D, level: u8, faults: &mut Faults)
where
    T: Transport,
    D: DelayNs,
{
    for (kind, packet) in frame_for(level) {
        if link.write_bytes(packet.as_bytes()).is_err() {
            let _ = faults.push(Fault::SerialWrite(kind));
        }
        delay.delay_ms(INTER_PACKET_DELAY_MS);
    }
}
