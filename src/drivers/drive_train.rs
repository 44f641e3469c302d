// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dual H-bridge drive train.
//!
//! Writes the direction pattern for a [`MotionIntent`] to a 4-line output bus. The driver holds no
//! state beyond the last intent it applied, which is kept for observation only.

use crate::motors::{MotionIntent, Pattern};

/// 4-line digital output that accepts a whole pattern at once.
///
/// Implementations must update all four lines in one write, so that no intermediate pattern is
/// ever visible on the bridges.
pub trait OutputBus {
    fn write(&mut self, pattern: Pattern);
}

impl<T: OutputBus + ?Sized> OutputBus for &mut T {
    #[inline]
    fn write(&mut self, pattern: Pattern) {
        (**self).write(pattern)
    }
}

/// Drive train bound to an output bus.
pub struct DriveTrain<B> {
    bus: B,
    last: MotionIntent,
}

impl<B: OutputBus> DriveTrain<B> {
    /// Take ownership of the bus and drive it to [`MotionIntent::Stop`].
    pub fn new(mut bus: B) -> Self {
        bus.write(MotionIntent::Stop.pattern());
        Self {
            bus,
            last: MotionIntent::Stop,
        }
    }

    /// Write the pattern for `intent`. Always succeeds.
    #[inline]
    pub fn apply(&mut self, intent: MotionIntent) {
        self.bus.write(intent.pattern());
        self.last = intent;
    }

    #[inline]
    pub fn stop(&mut self) {
        self.apply(MotionIntent::Stop);
    }

    #[inline]
    pub fn last_applied(&self) -> MotionIntent {
        self.last
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Release the output bus.
    pub fn free(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Latch {
        writes: u32,
        value: u8,
    }

    impl OutputBus for Latch {
        fn write(&mut self, pattern: Pattern) {
            self.writes += 1;
            self.value = pattern.bits();
        }
    }

    #[test]
    fn construction_writes_stop() {
        let drive = DriveTrain::new(Latch {
            writes: 0,
            value: 0xFF,
        });
        assert_eq!(drive.bus().writes, 1);
        assert_eq!(drive.bus().value, 0x00);
        assert_eq!(drive.last_applied(), MotionIntent::Stop);
    }

    #[test]
    fn apply_writes_pattern_and_remembers_intent() {
        let mut drive = DriveTrain::new(Latch::default());
        drive.apply(MotionIntent::TurnLeft);
        assert_eq!(drive.bus().value, 0b0110);
        assert_eq!(drive.last_applied(), MotionIntent::TurnLeft);

        drive.stop();
        assert_eq!(drive.bus().value, 0b0000);
        assert_eq!(drive.last_applied(), MotionIntent::Stop);
        assert_eq!(drive.free().writes, 3);
    }

    #[test]
    fn repeated_apply_rewrites_bus() {
        let mut latch = Latch::default();
        let mut drive = DriveTrain::new(&mut latch);
        drive.apply(MotionIntent::Forward);
        drive.apply(MotionIntent::Forward);
        drop(drive);
        assert_eq!(latch.writes, 3);
        assert_eq!(latch.value, 0b1010);
    }
}
