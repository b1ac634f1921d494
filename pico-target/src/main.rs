#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use tc74::{Address, Tc74};
use {defmt_rtt as _, panic_probe as _};

mod tasks;

/// TC74A0, as fitted on the test board.
const ADDRESS: Address = Address::A0;

/// Standard-mode I2C. The TC74 supports up to 100 kHz.
const I2C_FREQUENCY: u32 = 100_000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // I2C controller initialisation. GP4 is I2C0 SDA, GP5 is I2C0 SCL.
    // embassy-rp enables the pad pull-ups on both pins when it claims them.
    // They are weak (50-80k), so longer wires still need external resistors.
    let sda = p.PIN_4;
    let scl = p.PIN_5;
    let mut config = i2c::Config::default();
    config.frequency = I2C_FREQUENCY;
    let bus = I2c::new_blocking(p.I2C0, scl, sda, config);

    // The poll task takes the TC74 out of standby before its first read.
    let sensor = Tc74::new(bus, Delay, ADDRESS);

    defmt::info!("Spawning TC74 poll task.");
    spawner
        .spawn(tasks::poll::poll(sensor))
        .expect("Failed to spawn TC74 poll task.");
}
