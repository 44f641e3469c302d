// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the rover firmware.

/// Bluetooth command link, 8N1.
pub const COMMAND_BAUD: u32 = 9_600;

/// Debug terminal on USART1.
pub const DEBUG_BAUD: u32 = 115_200;

/// Frequency of the time base driving the command deadline.
pub const TICK_HZ: u32 = 1_000;

/// How often the remote app repeats the held command.
pub const SENDER_INTERVAL_MS: u32 = 100;

/// Motors stop if no command arrives within this window. Leaves margin over
/// [`SENDER_INTERVAL_MS`] for transmission jitter.
pub const DEADLINE_MS: u32 = 131;

/// [`DEADLINE_MS`] expressed in ticks of the time base.
pub const DEADLINE_TICKS: u32 = ticks_for_ms(DEADLINE_MS);

/// Convert milliseconds to whole ticks at [`TICK_HZ`], rounding up.
pub const fn ticks_for_ms(ms: u32) -> u32 {
    let ticks = (ms as u64 * TICK_HZ as u64 + 999) / 1000;
    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_ticks_match_window() {
        assert_eq!(DEADLINE_TICKS, 131);
    }

    #[test]
    fn deadline_outlasts_sender_interval() {
        assert!(DEADLINE_TICKS > ticks_for_ms(SENDER_INTERVAL_MS));
    }

    #[test]
    fn partial_ticks_round_up() {
        assert_eq!(ticks_for_ms(0), 0);
        assert_eq!(ticks_for_ms(1), 1);
        assert_eq!(ticks_for_ms(u32::MAX), u32::MAX);
    }
}
