// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Wire format of the rover command link.
//!
//! Every command is a single byte. A session is opened with [`START_BYTE`] and closed with
//! [`END_BYTE`]; only bytes received inside a session are interpreted. There is no
//! acknowledgement, no checksum and no multi-byte payload.

use crate::motors::MotionIntent;

/// Opens a session (`:`).
pub const START_BYTE: u8 = b':';

/// Closes a session (`\r`).
pub const END_BYTE: u8 = b'\r';

// Command bytes
pub const MSG_FORWARD: u8 = b'0';
pub const MSG_BACKWARD: u8 = b'1';
pub const MSG_TURN_LEFT: u8 = b'2';
pub const MSG_TURN_RIGHT: u8 = b'3';

/// Output of the framing state machine for one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A command byte was received inside a session.
    Motion(MotionIntent),
    /// The session was closed. Does not imply a stop.
    SessionEnd,
}

/// Map a command byte to its motion intent, if it is one.
#[inline]
pub fn intent_for(byte: u8) -> Option<MotionIntent> {
    match byte {
        MSG_FORWARD => Some(MotionIntent::Forward),
        MSG_BACKWARD => Some(MotionIntent::Backward),
        MSG_TURN_LEFT => Some(MotionIntent::TurnLeft),
        MSG_TURN_RIGHT => Some(MotionIntent::TurnRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_are_bit_exact() {
        assert_eq!(START_BYTE, 0x3A);
        assert_eq!(END_BYTE, 0x0D);
    }

    #[test]
    fn command_bytes_map_in_order() {
        assert_eq!(intent_for(0x30), Some(MotionIntent::Forward));
        assert_eq!(intent_for(0x31), Some(MotionIntent::Backward));
        assert_eq!(intent_for(0x32), Some(MotionIntent::TurnLeft));
        assert_eq!(intent_for(0x33), Some(MotionIntent::TurnRight));
    }

    #[test]
    fn neighbouring_bytes_are_not_commands() {
        assert_eq!(intent_for(0x2F), None);
        assert_eq!(intent_for(0x34), None);
        assert_eq!(intent_for(START_BYTE), None);
        assert_eq!(intent_for(END_BYTE), None);
    }
}
