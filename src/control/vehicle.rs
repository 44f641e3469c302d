// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State shared between the foreground command loop and the tick interrupt.
//!
//! [`Vehicle`] owns the drive train and the command deadline behind a critical-section mutex. The
//! foreground loop calls [`Vehicle::dispatch`] for every received motion intent; the time base
//! calls [`Vehicle::tick`] from its interrupt. Both run with interrupts masked, so an expiry can
//! never land between an apply and the matching restart, and a stop is never half-written.
//!
//! ```ignore
//! static VEHICLE: Vehicle<DirectionPort> = Vehicle::new();
//!
//! VEHICLE.attach(port, Deadline::new(config::DEADLINE_TICKS));
//!
//! #[exception]
//! fn SysTick() {
//!     VEHICLE.tick();
//! }
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::control::Deadline;
use crate::drivers::{DriveTrain, OutputBus};
use crate::motors::MotionIntent;

/// Called once when the deadline expires, inside the tick's critical section.
pub type ExpiryHandler<B> = fn(&mut Deadline, &mut DriveTrain<B>);

/// Default expiry handler: disarm first, then stop the motors.
pub fn halt<B: OutputBus>(deadline: &mut Deadline, drive: &mut DriveTrain<B>) {
    deadline.disarm();
    drive.stop();
}

struct Shared<B> {
    drive: DriveTrain<B>,
    deadline: Deadline,
    on_expire: ExpiryHandler<B>,
    expiries: u32,
}

pub struct Vehicle<B> {
    shared: Mutex<RefCell<Option<Shared<B>>>>,
}

impl<B> Vehicle<B> {
    /// Empty context, usable as a `static`. Nothing happens until [`Vehicle::attach`].
    pub const fn new() -> Self {
        Self {
            shared: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<B> Default for Vehicle<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: OutputBus> Vehicle<B> {
    /// Bind the output bus (driving it to stop) and the command deadline.
    ///
    /// Re-attaching replaces the previous bus and resets the expiry handler and counter.
    pub fn attach(&self, bus: B, deadline: Deadline) {
        critical_section::with(|cs| {
            self.shared.replace(
                cs,
                Some(Shared {
                    drive: DriveTrain::new(bus),
                    deadline,
                    on_expire: halt::<B>,
                    expiries: 0,
                }),
            );
        });
    }

    /// Release the output bus.
    pub fn detach(&self) -> Option<B> {
        critical_section::with(|cs| self.shared.replace(cs, None))
            .map(|shared| shared.drive.free())
    }

    /// Replace the handler run on expiry.
    pub fn set_expiry_handler(&self, handler: ExpiryHandler<B>) {
        self.with_shared(|shared| shared.on_expire = handler);
    }

    /// Apply a received motion intent and restart the deadline, as one atomic step.
    pub fn dispatch(&self, intent: MotionIntent) {
        self.with_shared(|shared| {
            shared.drive.apply(intent);
            shared.deadline.restart();
        });
    }

    /// Advance the deadline by one tick. Returns `true` if it expired on this tick.
    pub fn tick(&self) -> bool {
        self.with_shared(|shared| {
            if !shared.deadline.tick() {
                return false;
            }
            (shared.on_expire)(&mut shared.deadline, &mut shared.drive);
            shared.expiries = shared.expiries.wrapping_add(1);
            true
        })
        .unwrap_or(false)
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.with_shared(|_| ()).is_some()
    }

    /// Last applied intent. [`MotionIntent::Stop`] before attach.
    pub fn last_applied(&self) -> MotionIntent {
        self.with_shared(|shared| shared.drive.last_applied())
            .unwrap_or(MotionIntent::Stop)
    }

    /// Number of expiries since attach.
    pub fn expiries(&self) -> u32 {
        self.with_shared(|shared| shared.expiries).unwrap_or(0)
    }

    pub fn is_armed(&self) -> bool {
        self.with_shared(|shared| shared.deadline.is_armed())
            .unwrap_or(false)
    }

    /// Run `f` against the drive train and deadline inside a critical section.
    pub fn inspect<R>(&self, f: impl FnOnce(&DriveTrain<B>, &Deadline) -> R) -> Option<R> {
        self.with_shared(|shared| f(&shared.drive, &shared.deadline))
    }

    fn with_shared<R>(&self, f: impl FnOnce(&mut Shared<B>) -> R) -> Option<R> {
        critical_section::with(|cs| self.shared.borrow_ref_mut(cs).as_mut().map(f))
    }
}
