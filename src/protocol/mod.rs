//! Motor controller wire protocol (write side only).
//!
//! Every packet is a fixed-layout byte record:
//! ```text
//! Byte 0:      Command class (0x11 = read, 0x16 = write)
//! Byte 1:      Sub-command
//! Byte 2..n-1: Payload (1 or 2 bytes)
//! Byte n-1:    Checksum = sum of all preceding bytes, mod 256
//! ```
//!
//! Packets carry no start marker or length byte; the controller tells
//! them apart by sub-command and the idle gap that follows each one.
//! Multi-byte payloads are little-endian.
//!
//! Reads are reserved: a read request is just `[0x11, sub]` with no
//! checksum, and the controller answers with two bytes. The pad sends
//! neither and parses nothing.

pub mod packets;


pub use packets::{encode_backlight, encode_pas, encode_wheel, pas_subcommand};

use heapless::Vec;

/// Longest packet on the wire (wheel diameter: tag, sub, 2 payload, checksum).
pub const MAX_PACKET_SIZE: usize = 5;

/// Longest payload any packet carries.
pub const MAX_PAYLOAD_SIZE: usize = MAX_PACKET_SIZE - 3;

/// Read request on the wire: tag and sub-command, unchecksummed.
pub const READ_REQUEST_SIZE: usize = 2;

/// Controller reply to a read request.
pub const READ_RESPONSE_SIZE: usize = 2;

/// Sub-command: pedal assist level.
pub const SUB_PAS_LEVEL: u8 = 0x08;

/// Sub-command: display backlight.
pub const SUB_BACKLIGHT: u8 = 0x1A;

/// Sub-command: wheel diameter.
pub const SUB_WHEEL_DIAMETER: u8 = 0x1F;

/// Command class tag, first byte of every packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommandClass {
    /// Request a value from the controller. Reserved: the pad never reads.
    Read = 0x11,
    /// Push a setting to the controller.
    Write = 0x16,
}

/// Which of the three periodic packets a byte sequence is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketKind {
    PasLevel,
    Backlight,
    WheelDiameter,
}

/// Backlight payload values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Backlight {
    Off = 0xF0,
    On = 0xF1,
}

/// Checksum scope for the wheel diameter packet.
///
/// The stock pad computes the checksum while the diameter field is still
/// zero and fills the diameter in afterwards, so its checksum covers only
/// the tag and sub-command. Controllers in the field accept that packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WheelChecksum {
    /// Checksum over tag and sub-command only, as the stock pad sends it.
    Legacy,
    /// Checksum over every preceding byte, diameter included.
    Full,
}

/// Errors building a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Payload longer than [`MAX_PAYLOAD_SIZE`].
    PayloadTooLarge,
}

/// 8-bit truncated sum of `bytes`.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// One framed packet, ready for the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    bytes: Vec<u8, MAX_PACKET_SIZE>,
}

impl Packet {
    /// Frame `payload` under `class`/`sub`, appending the checksum of
    /// everything before it.
    pub fn new(class: CommandClass, sub: u8, payload: &[u8]) -> Result<Self, PacketError> {
        let mut packet = Self::unsealed(class, sub, payload)?;
        let sum = checksum(&packet.bytes);
        packet.push(sum);
        Ok(packet)
    }

    /// Reserved read request `[0x11, sub]`. Carries no checksum, so
    /// [`Packet::checksum_byte`] is meaningless for it.
    pub fn read_request(sub: u8) -> Self {
        Self::header(CommandClass::Read, sub, &[])
    }

    /// Frame without a checksum; the caller seals it with [`Packet::push`].
    fn unsealed(class: CommandClass, sub: u8, payload: &[u8]) -> Result<Self, PacketError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(PacketError::PayloadTooLarge);
        }
        Ok(Self::header(class, sub, payload))
    }

    /// [`Packet::unsealed`] for payloads whose size is known at compile time.
    fn framed<const N: usize>(class: CommandClass, sub: u8, payload: &[u8; N]) -> Self {
        const { assert!(N <= MAX_PAYLOAD_SIZE) };
        Self::header(class, sub, payload)
    }

    /// Tag, sub-command, payload. `payload` must fit [`MAX_PAYLOAD_SIZE`].
    fn header(class: CommandClass, sub: u8, payload: &[u8]) -> Self {
        let mut bytes = Vec::new();
        let _ = bytes.push(class as u8);
        let _ = bytes.push(sub);
        let _ = bytes.extend_from_slice(payload);
        Self { bytes }
    }

    fn push(&mut self, byte: u8) {
        let _ = self.bytes.push(byte);
    }

    /// Wire bytes, checksum last.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Trailing checksum byte.
    pub fn checksum_byte(&self) -> u8 {
        self.bytes.last().copied().unwrap_or(0)
    }

    /// `true` when the trailing byte equals the sum of the bytes before it.
    pub fn checksum_matches(&self) -> bool {
        match self.bytes.split_last() {
            Some((&last, body)) => checksum(body) == last,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
