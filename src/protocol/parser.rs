// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Session framing for the rover command protocol.
//!
//! The parser consumes one byte at a time. Bytes outside a session are discarded, so noise on the
//! line before a `:` can never produce motion. Inside a session, command bytes become
//! [`Event::Motion`] and `\r` closes the session. Every byte value has a defined transition; the
//! parser never fails.

use crate::protocol::messages::*;

/// Framing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

pub struct Parser {
    state: SessionState,
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drop any open session.
    #[inline]
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Process a single incoming byte. Returns `Some(Event)` when the byte was meaningful.
    pub fn feed(&mut self, byte: u8) -> Option<Event> {
        match self.state {
            SessionState::Idle => {
                if byte == START_BYTE {
                    self.state = SessionState::Active;
                }
                None
            }
            SessionState::Active => {
                if byte == END_BYTE {
                    self.state = SessionState::Idle;
                    return Some(Event::SessionEnd);
                }
                // Unknown bytes inside a session are absorbed, the session stays open.
                intent_for(byte).map(Event::Motion)
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
