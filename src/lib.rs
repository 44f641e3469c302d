// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Rover Firmware
//!
//! This crate contains the firmware for a Bluetooth-driven two-motor rover, written in Rust,
//! targeting an STM32F777 MCU.
//!
//! The rover receives single-byte commands framed into sessions (`:` ... `\r`), drives its two
//! H-bridges accordingly, and stops on its own when commands stop arriving.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`protocol`] | Command wire format and session framing |
//! | [`motors`] | Motion intents and their direction patterns |
//! | [`drivers`] | Drive train over a 4-line output bus |
//! | [`control`] | Command deadline, shared vehicle state, dispatch loop |
//! | [`config`] | Baud rates, tick rate, deadline window |
//! | `hw` | MCU-level wrappers (USART, GPIO, SysTick); `firmware` feature only |
//!
//! Everything except `hw` is `no_std`, hardware-independent and tested on the host.
//!
//! ## Getting Started
//!
//! Run the tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
#[cfg(feature = "firmware")]
pub mod hw;
pub mod motors;
pub mod protocol;
