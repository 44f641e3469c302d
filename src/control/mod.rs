// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control
//!
//! Command handling and the safety stop around the drive train.
//!
//! ## Modules
//!
//! - [`deadline`] - Restartable countdown advanced by a periodic tick.
//! - [`vehicle`] - Drive train and deadline shared with the tick interrupt.
//! - [`dispatch`] - Busy-poll loop from byte source to vehicle.

pub mod deadline;
pub mod dispatch;
pub mod vehicle;

pub use deadline::Deadline;
pub use dispatch::{ByteSource, Dispatcher, Step};
pub use vehicle::{halt, ExpiryHandler, Vehicle};
