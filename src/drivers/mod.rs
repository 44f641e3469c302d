// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! application logic.
//!
//! ## Existing drivers
//!
//! - [`drive_train`] – Two DC motors behind H-bridges, driven by a 4-line direction bus

pub mod drive_train;

pub use drive_train::{DriveTrain, OutputBus};
