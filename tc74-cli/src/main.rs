use anyhow::Context;
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};
use tc74::{Address, Tc74, Unit};

use cli::Commands;

mod cli;
mod poll;
mod standby;
mod util;

type Sensor = Tc74<I2cdev, Delay>;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli::Cli {
        port,
        address,
        command,
    } = cli::Cli::parse();

    let path = format!("/dev/i2c-{port}");
    let bus = I2cdev::new(&path).with_context(|| format!("Failed to open I2C bus {path}"))?;
    log::debug!("opened {path}, TC74 at {:#04X}", address.seven_bit());

    match command {
        Commands::Read { unit } => {
            let mut sensor = initialize(bus, &path, address)?;
            match unit {
                None => println!("{}", tc74::Reading { temperature: sensor.read()? }),
                Some(unit) => {
                    let unit = Unit::from(unit);
                    let value = sensor.read_temperature(unit)?;
                    match unit {
                        Unit::Celsius => println!("{value}"),
                        Unit::Fahrenheit => println!("{value:.2}"),
                    }
                }
            }
        }
        Commands::Poll(args) => {
            let mut sensor = initialize(bus, &path, address)?;
            poll::run(&mut sensor, &args, &mut std::io::stdout().lock())?;
        }
        Commands::Standby(command) => {
            // No initialization here: it would clear the state we're asked about.
            let mut sensor = Sensor::new(bus, Delay, address);
            standby::action(&mut sensor, command)?;
        }
    }
    Ok(())
}

/// Take the sensor out of standby so the temperature register is live.
fn initialize(bus: I2cdev, path: &str, address: Address) -> anyhow::Result<Sensor> {
    Tc74::initialize(bus, Delay, address).with_context(|| {
        format!(
            "Failed to initialize TC74 at {:#04X} on {path}",
            address.seven_bit()
        )
    })
}
