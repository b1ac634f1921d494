use embedded_hal::delay::DelayNs;
use tc74::{I2cBus, StandbyState, Tc74};

#[derive(Debug, clap::Parser)]
#[command(flatten_help = true)]
pub(crate) enum StandbyCommand {
    /// Freeze the temperature register and drop to standby current.
    Enable,
    /// Resume normal conversion (waits 250 ms for the first conversion).
    Disable,
    /// Report whether the sensor is in standby.
    Status {
        /// Also print the raw configuration register bits.
        #[arg(short, long)]
        verbose: bool,
    },
}

pub(crate) fn action<B: I2cBus, D: DelayNs>(
    sensor: &mut Tc74<B, D>,
    command: StandbyCommand,
) -> Result<(), tc74::Error<B::Error>> {
    match command {
        StandbyCommand::Enable => sensor.enable_standby()?,
        StandbyCommand::Disable => sensor.disable_standby()?,
        StandbyCommand::Status { verbose: false } => {
            println!("{}", describe(sensor.is_standby()?));
        }
        StandbyCommand::Status { verbose: true } => {
            let config = sensor.read_config()?;
            println!("{}", describe(config.into()));
            println!("{config:#?}");
        }
    }
    Ok(())
}

fn describe(state: StandbyState) -> String {
    match state {
        StandbyState::Active => "active".to_string(),
        StandbyState::Standby => "standby".to_string(),
        StandbyState::Unknown(raw) => format!("unknown (configuration register {raw:#04X})"),
    }
}
