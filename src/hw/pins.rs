// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 rover board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart1: Usart1Pins,
    pub usart2: Usart2Pins,
    pub direction: DirectionPins,
}

pub struct LedPins {
    pub green: gpiod::PD10<Output<PushPull>>,
}

/// USART1 TX/RX (debug terminal)
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// USART2 TX/RX (Bluetooth command link)
pub struct Usart2Pins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

/// H-bridge direction inputs. Must stay on PE0..PE3, see `hw::direction`.
pub struct DirectionPins {
    pub right_rev: gpioe::PE0<Output<PushPull>>, // bit 0
    pub right_fwd: gpioe::PE1<Output<PushPull>>, // bit 1
    pub left_rev: gpioe::PE2<Output<PushPull>>,  // bit 2
    pub left_fwd: gpioe::PE3<Output<PushPull>>,  // bit 3
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: LedPins {
                green: gpiod.pd10.into_push_pull_output(),
            },

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            usart2: Usart2Pins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            direction: DirectionPins {
                right_rev: gpioe.pe0.into_push_pull_output(),
                right_fwd: gpioe.pe1.into_push_pull_output(),
                left_rev: gpioe.pe2.into_push_pull_output(),
                left_fwd: gpioe.pe3.into_push_pull_output(),
            },
        }
    }
}
