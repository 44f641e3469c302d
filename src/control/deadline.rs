// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Restartable countdown used as a command watchdog.
//!
//! The countdown is advanced by an external periodic tick. It does not know about time units; the
//! caller picks the tick rate and sizes the duration accordingly (see [`crate::config`]).
//!
//! Works in `no_std` and does not allocate memory.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Disarmed,
    Armed { remaining: u32 },
}

/// Countdown with a fixed total duration, in ticks.
#[derive(Clone, Debug)]
pub struct Deadline {
    duration: u32,
    state: State,
}

impl Deadline {
    /// Create a disarmed countdown of `ticks` ticks. Zero is clamped to one tick.
    pub const fn new(ticks: u32) -> Self {
        Self {
            duration: if ticks == 0 { 1 } else { ticks },
            state: State::Disarmed,
        }
    }

    /// Arm with the full duration, whatever the current state.
    #[inline]
    pub fn restart(&mut self) {
        self.state = State::Armed {
            remaining: self.duration,
        };
    }

    /// Stop counting. No expiry is reported until the next [`Deadline::restart`].
    #[inline]
    pub fn disarm(&mut self) {
        self.state = State::Disarmed;
    }

    /// Advance by one tick.
    ///
    /// Returns `true` on the tick that reaches zero. The countdown is disarmed at that point, so
    /// each restart yields at most one expiry.
    pub fn tick(&mut self) -> bool {
        match self.state {
            State::Disarmed => false,
            State::Armed { remaining } if remaining <= 1 => {
                self.state = State::Disarmed;
                true
            }
            State::Armed { remaining } => {
                self.state = State::Armed {
                    remaining: remaining - 1,
                };
                false
            }
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, State::Armed { .. })
    }

    /// Ticks left before expiry, `None` while disarmed.
    #[inline]
    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            State::Disarmed => None,
            State::Armed { remaining } => Some(remaining),
        }
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }
}
