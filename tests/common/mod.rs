// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rover::control::{ByteSource, Deadline, Dispatcher, Step, Vehicle};
use rover::drivers::OutputBus;
use rover::motors::{MotionIntent, Pattern};

/// Output bus that keeps every pattern written to it.
#[derive(Default)]
pub struct RecordingBus {
    pub writes: Vec<Pattern>,
}

impl OutputBus for RecordingBus {
    fn write(&mut self, pattern: Pattern) {
        self.writes.push(pattern);
    }
}

/// Byte source fed from a shared queue; returns `None` once drained.
///
/// Clones share the queue, so a test can keep pushing bytes while a dispatcher owns a handle.
#[derive(Clone, Default)]
pub struct Script {
    pending: Rc<RefCell<VecDeque<u8>>>,
}

impl Script {
    pub fn new(bytes: &[u8]) -> Self {
        let script = Self::default();
        script.push(bytes);
        script
    }

    pub fn push(&self, bytes: &[u8]) {
        self.pending.borrow_mut().extend(bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl ByteSource for Script {
    fn poll(&mut self) -> Option<u8> {
        self.pending.borrow_mut().pop_front()
    }
}

/// Step until the source is drained, returning every non-empty step.
pub fn drain<S: ByteSource, B: OutputBus>(d: &mut Dispatcher<'_, S, B>) -> Vec<Step> {
    let mut steps = Vec::new();
    loop {
        match d.step() {
            Step::NoData => return steps,
            step => steps.push(step),
        }
    }
}

pub fn vehicle(deadline_ticks: u32) -> Vehicle<RecordingBus> {
    let vehicle = Vehicle::new();
    vehicle.attach(RecordingBus::default(), Deadline::new(deadline_ticks));
    vehicle
}

/// Intents written to the bus so far, including the stop written on attach.
pub fn applied(vehicle: &Vehicle<RecordingBus>) -> Vec<MotionIntent> {
    vehicle
        .inspect(|drive, _| {
            drive
                .bus()
                .writes
                .iter()
                .map(|&p| MotionIntent::from_pattern(p).expect("undefined pattern on bus"))
                .collect()
        })
        .unwrap_or_default()
}

pub fn count(vehicle: &Vehicle<RecordingBus>, intent: MotionIntent) -> usize {
    applied(vehicle).iter().filter(|&&i| i == intent).count()
}

pub fn tick_n(vehicle: &Vehicle<RecordingBus>, n: u32) -> u32 {
    (0..n).filter(|_| vehicle.tick()).count() as u32
}
