// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Support
//!
//! MCU-level wrappers for the STM32F777 rover board. Only built with the `firmware` feature.

pub mod direction;
pub mod led;
pub mod pins;
pub mod systick;
pub mod usart;

pub use direction::DirectionPort;
pub use led::Led;
pub use pins::BoardPins;
pub use usart::{CommandPort, Usart};
