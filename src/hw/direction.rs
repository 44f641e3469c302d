// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Direction lines of the two H-bridges.
//!
//! The four lines sit on PE0..PE3, so pattern bit `n` drives `PEn`. All four are updated with a
//! single BSRR store, which the GPIO block applies atomically.

use stm32f7xx_hal::pac;

use crate::drivers::OutputBus;
use crate::hw::pins::DirectionPins;
use crate::motors::Pattern;

pub struct DirectionPort {
    pins: DirectionPins,
}

impl DirectionPort {
    pub fn new(pins: DirectionPins) -> Self {
        Self { pins }
    }

    pub fn free(self) -> DirectionPins {
        self.pins
    }
}

impl OutputBus for DirectionPort {
    fn write(&mut self, pattern: Pattern) {
        let set = u32::from(pattern.bits());
        let reset = u32::from(!pattern.bits() & Pattern::MASK);

        // SAFETY: BSRR is write-only and set/reset bits only affect the pins named in the word.
        // PE0..PE3 are owned by `self.pins`, so no other driver writes them.
        unsafe {
            (*pac::GPIOE::ptr())
                .bsrr
                .write(|w| w.bits(set | (reset << 16)));
        }
    }
}
