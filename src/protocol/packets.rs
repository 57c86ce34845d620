//! Encoders for the three packets the pad pushes on every change.
//!
//! ```text
//! PAS level       [0x16, 0x08, sub,   checksum]
//! Backlight       [0x16, 0x1A, state, checksum]
//! Wheel diameter  [0x16, 0x1F, lo, hi, checksum]
//! ```

use super::{
    checksum, Backlight, CommandClass, Packet, WheelChecksum, SUB_BACKLIGHT, SUB_PAS_LEVEL,
    SUB_WHEEL_DIAMETER,
};

/// Controller sub-command for each assist level, indexed by level.
///
/// The controller's own numbering is not contiguous: levels 2..4 sit at
/// 0x0B..0x0D.
const PAS_SUBCOMMANDS: [u8; 5] = [0x00, 0x01, 0x0B, 0x0C, 0x0D];

/// Wire value for `level`. Levels outside the table fall back to level 0.
pub fn pas_subcommand(level: u8) -> u8 {
    PAS_SUBCOMMANDS
        .get(usize::from(level))
        .copied()
        .unwrap_or(PAS_SUBCOMMANDS[0])
}

/// `[0x16, 0x08, pas_subcommand(level), checksum]`.
pub fn encode_pas(level: u8) -> Packet {
    write_packet(SUB_PAS_LEVEL, &[pas_subcommand(level)])
}

/// `[0x16, 0x1A, 0xF0 | 0xF1, checksum]`.
pub fn encode_backlight(state: Backlight) -> Packet {
    write_packet(SUB_BACKLIGHT, &[state as u8])
}

/// `[0x16, 0x1F, diameter_lo, diameter_hi, checksum]`.
///
/// With [`WheelChecksum::Legacy`] the checksum is taken while the
/// diameter field is still zero, so it does not cover the diameter bytes
/// that go out on the wire.
pub fn encode_wheel(diameter: u16, scope: WheelChecksum) -> Packet {
    let diameter = diameter.to_le_bytes();
    match scope {
        WheelChecksum::Full => write_packet(SUB_WHEEL_DIAMETER, &diameter),
        WheelChecksum::Legacy => {
            let mut packet = Packet::framed(CommandClass::Write, SUB_WHEEL_DIAMETER, &[0, 0]);
            let sum = checksum(packet.as_bytes());
            packet.bytes[2..4].copy_from_slice(&diameter);
            packet.push(sum);
            packet
        }
    }
}

fn write_packet<const N: usize>(sub: u8, payload: &[u8; N]) -> Packet {
    let mut packet = Packet::framed(CommandClass::Write, sub, payload);
    let sum = checksum(packet.as_bytes());
    packet.push(sum);
    packet
}
