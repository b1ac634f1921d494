use crate::poll::PollArgs;
use crate::standby::StandbyCommand;
use crate::util;

use clap::Parser;
use tc74::Address;

/// Read a TC74 temperature sensor over Linux I2C
///
/// The sensor is reached through the kernel's i2c-dev interface
/// (/dev/i2c-N). Pin assignment, pull-ups and bus clock speed are set by
/// the kernel and device tree, not by this tool.
///
/// `read` and `poll` take the sensor out of standby before reading.
/// `standby` leaves the sensor as it finds it unless asked to change it.
///
/// Set RUST_LOG=debug (or trace) to see bus activity.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// I2C bus number, as in /dev/i2c-N
    #[arg(short, long, default_value_t = 1)]
    pub(crate) port: u8,
    /// Sensor address: a part variant (a0 to a7) or 7-bit hex (0x48 to 0x4F)
    #[arg(short, long, default_value = "a0", value_parser = util::address_from_str)]
    pub(crate) address: Address,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Read the temperature once.
    Read {
        /// Print only this unit, as a bare number.
        #[arg(short, long)]
        unit: Option<Unit>,
    },
    /// Print the temperature in Celsius and Fahrenheit repeatedly.
    Poll(PollArgs),
    /// Query or change the power-save (standby) mode.
    #[command(subcommand)]
    Standby(StandbyCommand),
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum Unit {
    /// Degrees Celsius
    #[value(aliases = ["c"])]
    Celsius,
    /// Degrees Fahrenheit
    #[value(aliases = ["f"])]
    Fahrenheit,
}

impl From<Unit> for tc74::Unit {
    fn from(value: Unit) -> tc74::Unit {
        match value {
            Unit::Celsius => tc74::Unit::Celsius,
            Unit::Fahrenheit => tc74::Unit::Fahrenheit,
        }
    }
}
