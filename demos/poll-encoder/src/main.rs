//! Poll encoder demo
//!
//! Demonstrates the i2c-encoder-mini crate on the Raspberry Pi Pico 2.
//! Configures the board with bounds and wrap-around, lets the driver enable
//! the INT pin for the events handled below, then polls the status register
//! every time INT goes low and logs the dispatched events via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | I2C0 SDA  | GP20       |                              |
//! | I2C0 SCL  | GP21       |                              |
//! | ENC INT   | GP19       | Active-low, pull-up enabled  |

#![no_std]
#![no_main]

use core::cell::Cell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use i2c_encoder_mini::{
    Config, Event, EventHandlers, I2cEncoderMini, Resolution, DEFAULT_ADDRESS, EEPROM_START,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- Encoder board INT pin (GP19, active-low) ---
    let mut int_pin = Input::new(p.PIN_19, Pull::Up);

    // --- Encoder board ---
    let mut encoder = I2cEncoderMini::new(i2c, DEFAULT_ADDRESS);

    encoder.reset().await.expect("Failed to reset encoder board");

    let config = Config::new()
        .with_wrap(true)
        .with_pull_up(true)
        .with_resolution(Resolution::X1);
    encoder.begin(config).await.expect("Failed to configure encoder board");

    match (encoder.read_id_code().await, encoder.read_version().await) {
        (Ok(id), Ok(version)) => info!("Encoder Mini id={=u8:#x} version={=u8:#x}", id, version),
        _ => error!("Could not read board identification"),
    }

    let setup = async {
        encoder.write_counter(0).await?;
        encoder.write_max(20).await?;
        encoder.write_min(-20).await?;
        encoder.write_step(1).await?;
        encoder.write_double_push_period(50).await
    };
    if let Err(e) = setup.await {
        error!("Initial register setup failed: {}", e);
    }

    // The EEPROM keeps a boot counter across power cycles.
    match encoder.read_eeprom(EEPROM_START).await {
        Ok(boots) => {
            info!("Boot #{}", boots.wrapping_add(1));
            if let Err(e) = encoder.write_eeprom(EEPROM_START, boots.wrapping_add(1)).await {
                error!("EEPROM write failed: {}", e);
            }
        }
        Err(e) => error!("EEPROM read failed: {}", e),
    }

    // --- Event handlers ---
    let turned = Cell::new(false);
    let mut on_change = || turned.set(true);
    let mut on_push = || info!("Button pushed");
    let mut on_release = || info!("Button released");
    let mut on_double = || info!("Double push");
    let mut on_long = || info!("Long push");
    let mut on_max = || info!("Reached max");
    let mut on_min = || info!("Reached min");

    let mut handlers = EventHandlers::new()
        .on(Event::Changed, &mut on_change)
        .on(Event::ButtonPush, &mut on_push)
        .on(Event::ButtonRelease, &mut on_release)
        .on(Event::ButtonDoublePush, &mut on_double)
        .on(Event::ButtonLongPush, &mut on_long)
        .on(Event::Max, &mut on_max)
        .on(Event::Min, &mut on_min);

    // Only raise INT for the events handled above.
    match encoder.autoconfigure_interrupt(&handlers).await {
        Ok(mask) => info!("INTCONF = {=u8:#x}", mask),
        Err(e) => error!("Failed to enable encoder interrupts: {}", e),
    }

    info!("Poll encoder demo started, turn or push the knob");

    // Main loop: sleep until interrupt, poll status, log, repeat.
    // Reading ESTATUS clears it and releases INT.
    loop {
        int_pin.wait_for_low().await;

        match encoder.update_status(&mut handlers).await {
            Ok(true) => {
                if turned.replace(false) {
                    match encoder.read_counter().await {
                        Ok(value) => info!("Counter: {}", value),
                        Err(e) => error!("Counter read failed: {}", e),
                    }
                }
            }
            Ok(false) => debug!("INT low with empty status"),
            Err(e) => error!("Status read failed: {}", e),
        }
    }
}
