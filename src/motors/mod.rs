// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motion Abstractions
//!
//! This module describes what the rover should do, independent of how the drive bridges are
//! wired.
//!
//! ## Modules
//!
//! - [`motion`] - Motion intents and their 4-bit direction patterns.

pub mod motion;

pub use motion::{MotionIntent, Pattern};
