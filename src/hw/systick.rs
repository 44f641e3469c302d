// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SysTick as the periodic time base.
//!
//! The `SysTick` exception handler itself lives in the firmware binary; it forwards each tick to
//! [`crate::control::Vehicle::tick`].

use cortex_m::peripheral::{syst::SystClkSource, SYST};
use stm32f7xx_hal::rcc::Clocks;

/// Start SysTick at `tick_hz` from the core clock, with its exception enabled.
pub fn start(mut syst: SYST, clocks: &Clocks, tick_hz: u32) -> SYST {
    // 24-bit reload register
    let reload = (clocks.sysclk().raw() / tick_hz).saturating_sub(1).min(0x00FF_FFFF);

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
    syst
}
