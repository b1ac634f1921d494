use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Timer};
use tc74::poll::DEFAULT_POLL_INTERVAL;
use tc74::{PollMode, PollOutcome, Tc74};

pub(crate) type Sensor = Tc74<I2c<'static, I2C0, Blocking>, Delay>;

/// Only print while the TC74 reports it is converting.
const POLL_MODE: PollMode = PollMode::SkipStandby;

/// TC74 temperature poller.
///
/// Prints the temperature in Celsius and Fahrenheit over RTT once per poll
/// interval. Bus errors are logged and the loop carries on.
#[embassy_executor::task]
pub(crate) async fn poll(mut sensor: Sensor) -> ! {
    defmt::info!("TC74 poll task started at {}", sensor.address());
    // Blocks for the 250ms settle time on success.
    if let Err(e) = sensor.disable_standby() {
        defmt::error!(
            "Failed to take TC74 out of standby: {:?}",
            defmt::Debug2Format(&e)
        );
    }
    loop {
        match sensor.poll(POLL_MODE) {
            Ok(PollOutcome::Reading(reading)) => {
                // Two lines, Fahrenheit to two decimal places.
                defmt::println!("{}", defmt::Display2Format(&reading));
            }
            Ok(PollOutcome::Skipped(state)) => {
                defmt::debug!("Skipping read, TC74 state is {}", state);
            }
            Err(e) => {
                defmt::error!("Error polling TC74: {:?}", defmt::Debug2Format(&e));
            }
        }
        Timer::after_millis(DEFAULT_POLL_INTERVAL.as_millis() as u64).await;
    }
}
