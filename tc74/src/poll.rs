//! One iteration of a temperature polling loop.
//!
//! The loop itself (printing, sleeping) belongs to the application, since the
//! host and firmware wait in different ways. This module holds the part they
//! share: whether to consult the standby state, and the output format.
use core::fmt;
use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::bus::I2cBus;
use crate::driver::Tc74;
use crate::error::Error;
use crate::status::StandbyState;
use crate::temperature::Temperature;

/// Time between polls in the reference application.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Whether a poll checks the standby state before reading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollMode {
    /// Read every time, even if the register may be frozen.
    Always,
    /// Query the configuration register first and only read while active.
    #[default]
    SkipStandby,
}

/// Result of one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// The temperature was read.
    Reading(Reading),
    /// The read was skipped because the sensor was not active.
    Skipped(StandbyState),
}

/// A temperature ready for display in both units.
///
/// Displays as two lines:
///
/// ```text
/// Temperature in Celsius: 25
/// Temperature in Fahrenheit: 77.00
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// The decoded register value.
    pub temperature: Temperature,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Temperature in Celsius: {}",
            self.temperature.degrees_celsius()
        )?;
        write!(
            f,
            "Temperature in Fahrenheit: {:.2}",
            self.temperature.fahrenheit()
        )
    }
}

impl<B: I2cBus, D: DelayNs> Tc74<B, D> {
    /// Run one poll in the given mode.
    ///
    /// With [`PollMode::SkipStandby`], anything other than
    /// [`StandbyState::Active`] skips the read, including an unrecognised
    /// configuration byte.
    pub fn poll(&mut self, mode: PollMode) -> Result<PollOutcome, Error<B::Error>> {
        if mode == PollMode::SkipStandby {
            match self.is_standby()? {
                StandbyState::Active => {}
                state => return Ok(PollOutcome::Skipped(state)),
            }
        }
        Ok(PollOutcome::Reading(Reading {
            temperature: self.read()?,
        }))
    }
}
