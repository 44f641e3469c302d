// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motion intents and the direction pattern that realizes each one.
//!
//! The rover has two drive motors, each behind an H-bridge with two direction inputs. The four
//! inputs form a 4-bit pattern:
//!
//! | Bit | Line |
//! | --- | ---- |
//! | 3   | Left motor, forward |
//! | 2   | Left motor, reverse |
//! | 1   | Right motor, forward |
//! | 0   | Right motor, reverse |
//!
//! The table is wire-compatible with the existing rover boards and must stay bit-exact.

/// 4-bit direction pattern written to the actuator output bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pattern(u8);

impl Pattern {
    /// Only the low nibble drives the bridges.
    pub const MASK: u8 = 0x0F;

    pub const STOP: Pattern = Pattern(0b0000);
    pub const FORWARD: Pattern = Pattern(0b1010);
    pub const BACKWARD: Pattern = Pattern(0b0101);
    pub const TURN_LEFT: Pattern = Pattern(0b0110);
    pub const TURN_RIGHT: Pattern = Pattern(0b1001);

    /// Build a pattern from raw bits. Bits above the low nibble are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// State of a single direction line (0..=3).
    #[inline]
    pub const fn line(self, n: u8) -> bool {
        n < 4 && (self.0 >> n) & 1 != 0
    }
}

/// Abstract direction command, decoupled from the wiring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum MotionIntent {
    #[default]
    Stop,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl MotionIntent {
    pub const ALL: [MotionIntent; 5] = [
        MotionIntent::Stop,
        MotionIntent::Forward,
        MotionIntent::Backward,
        MotionIntent::TurnLeft,
        MotionIntent::TurnRight,
    ];

    /// Output pattern for this intent.
    #[inline]
    pub const fn pattern(self) -> Pattern {
        match self {
            MotionIntent::Stop => Pattern::STOP,
            MotionIntent::Forward => Pattern::FORWARD,
            MotionIntent::Backward => Pattern::BACKWARD,
            MotionIntent::TurnLeft => Pattern::TURN_LEFT,
            MotionIntent::TurnRight => Pattern::TURN_RIGHT,
        }
    }

    /// Inverse of [`MotionIntent::pattern`]. `None` for patterns the rover never drives
    /// (e.g. both inputs of one bridge high).
    pub fn from_pattern(pattern: Pattern) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.pattern() == pattern)
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        self != MotionIntent::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_bit_exact() {
        assert_eq!(MotionIntent::Stop.pattern().bits(), 0x00);
        assert_eq!(MotionIntent::Forward.pattern().bits(), 0x0A);
        assert_eq!(MotionIntent::Backward.pattern().bits(), 0x05);
        assert_eq!(MotionIntent::TurnLeft.pattern().bits(), 0x06);
        assert_eq!(MotionIntent::TurnRight.pattern().bits(), 0x09);
    }

    #[test]
    fn no_pattern_shorts_a_bridge() {
        for intent in MotionIntent::ALL {
            let p = intent.pattern();
            assert!(!(p.line(3) && p.line(2)), "{intent:?} drives left bridge both ways");
            assert!(!(p.line(1) && p.line(0)), "{intent:?} drives right bridge both ways");
        }
    }

    #[test]
    fn from_pattern_inverts_table() {
        for intent in MotionIntent::ALL {
            assert_eq!(MotionIntent::from_pattern(intent.pattern()), Some(intent));
        }
        assert_eq!(MotionIntent::from_pattern(Pattern::from_bits(0b1100)), None);
    }

    #[test]
    fn from_bits_masks_high_nibble() {
        assert_eq!(Pattern::from_bits(0xFA), Pattern::FORWARD);
        assert!(!Pattern::FORWARD.line(7));
    }

    #[test]
    fn only_stop_is_stationary() {
        assert!(!MotionIntent::Stop.is_moving());
        assert!(MotionIntent::TurnLeft.is_moving());
    }
}
