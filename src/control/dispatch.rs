// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Foreground command loop.
//!
//! Polls a [`ByteSource`], frames the bytes with a [`Parser`] and hands motion intents to the
//! shared [`Vehicle`]. The loop busy-polls: it never sleeps and never blocks on I/O. Stopping is
//! left entirely to the deadline; a closed session is not a stop.

use crate::control::Vehicle;
use crate::drivers::OutputBus;
use crate::motors::MotionIntent;
use crate::protocol::{Event, Parser};

/// Non-blocking source of received bytes.
pub trait ByteSource {
    /// Next received byte, or `None` if nothing arrived since the last poll.
    fn poll(&mut self) -> Option<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn poll(&mut self) -> Option<u8> {
        (**self).poll()
    }
}

/// What a single loop iteration did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// No byte was available.
    NoData,
    /// A byte was consumed without producing an event.
    Ignored,
    /// The current session was closed.
    SessionEnd,
    /// A motion intent was applied and the deadline restarted.
    Motion(MotionIntent),
}

pub struct Dispatcher<'v, S, B> {
    source: S,
    parser: Parser,
    vehicle: &'v Vehicle<B>,
}

impl<'v, S, B> Dispatcher<'v, S, B>
where
    S: ByteSource,
    B: OutputBus,
{
    pub fn new(source: S, vehicle: &'v Vehicle<B>) -> Self {
        Self {
            source,
            parser: Parser::new(),
            vehicle,
        }
    }

    #[inline]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    #[inline]
    pub fn vehicle(&self) -> &'v Vehicle<B> {
        self.vehicle
    }

    /// Poll once and act on the byte, if any.
    pub fn step(&mut self) -> Step {
        let Some(byte) = self.source.poll() else {
            return Step::NoData;
        };

        match self.parser.feed(byte) {
            Some(Event::Motion(intent)) => {
                self.vehicle.dispatch(intent);
                Step::Motion(intent)
            }
            Some(Event::SessionEnd) => Step::SessionEnd,
            None => Step::Ignored,
        }
    }

    /// Run forever. `after_step` sees the result of every iteration, including empty polls.
    pub fn run<F>(&mut self, mut after_step: F) -> !
    where
        F: FnMut(&Vehicle<B>, Step),
    {
        loop {
            let step = self.step();
            after_step(self.vehicle, step);
        }
    }

    pub fn free(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Deadline;
    use crate::motors::Pattern;
    use crate::protocol::SessionState;

    struct Bytes<'a>(&'a [u8]);

    impl ByteSource for Bytes<'_> {
        fn poll(&mut self) -> Option<u8> {
            let (&first, rest) = self.0.split_first()?;
            self.0 = rest;
            Some(first)
        }
    }

    struct Sink;

    impl OutputBus for Sink {
        fn write(&mut self, _: Pattern) {}
    }

    fn vehicle() -> Vehicle<Sink> {
        let v = Vehicle::new();
        v.attach(Sink, Deadline::new(10));
        v
    }

    #[test]
    fn empty_source_reports_no_data() {
        let v = vehicle();
        let mut d = Dispatcher::new(Bytes(&[]), &v);
        assert_eq!(d.step(), Step::NoData);
        assert!(!v.is_armed());
    }

    #[test]
    fn steps_follow_framing() {
        let v = vehicle();
        let mut d = Dispatcher::new(Bytes(b"x:2\r"), &v);
        assert_eq!(d.step(), Step::Ignored);
        assert_eq!(d.step(), Step::Ignored);
        assert_eq!(d.parser().state(), SessionState::Active);
        assert_eq!(d.step(), Step::Motion(MotionIntent::TurnLeft));
        assert_eq!(d.step(), Step::SessionEnd);
        assert_eq!(d.step(), Step::NoData);
    }

    #[test]
    fn session_end_does_not_stop() {
        let v = vehicle();
        let mut d = Dispatcher::new(Bytes(b":1\r"), &v);
        while d.step() != Step::NoData {}
        assert_eq!(v.last_applied(), MotionIntent::Backward);
        assert!(v.is_armed());
    }
}
