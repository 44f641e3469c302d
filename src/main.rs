#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m_rt::{entry, exception};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use rover::config;
use rover::control::{Deadline, Dispatcher, Vehicle};
use rover::hw::{systick, BoardPins, CommandPort, DirectionPort, Led, Usart};

static VEHICLE: Vehicle<DirectionPort> = Vehicle::new();

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

    // Motors stopped before anything else
    VEHICLE.attach(
        DirectionPort::new(pins.direction),
        Deadline::new(config::DEADLINE_TICKS),
    );

    let mut led_green = Led::active_low(pins.leds.green);

    // USART1 (DBG)
    let debug_cfg = Config {
        baud_rate: config::DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        debug_cfg,
    );
    let mut usart = Usart::new(serial);

    // USART2 (Bluetooth)
    let command_cfg = Config {
        baud_rate: config::COMMAND_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART2,
        (pins.usart2.tx, pins.usart2.rx),
        &clocks,
        command_cfg,
    );
    let port = CommandPort::new(serial);

    let _ = writeln!(
        usart,
        "rover: ready, deadline {} ms ({} ticks @ {} Hz)\r",
        config::DEADLINE_MS,
        config::DEADLINE_TICKS,
        config::TICK_HZ
    );

    // Time base last: the deadline cannot expire before the loop is running
    let _syst = systick::start(cp.SYST, &clocks, config::TICK_HZ);

    let mut reported = 0;
    Dispatcher::new(port, &VEHICLE).run(|vehicle, _step| {
        let expiries = vehicle.expiries();
        if expiries != reported {
            reported = expiries;
            let _ = writeln!(usart, "halt: command deadline expired (#{})\r", expiries);
        }
        led_green.set(vehicle.last_applied().is_moving());
    })
}

#[exception]
fn SysTick() {
    VEHICLE.tick();
}
