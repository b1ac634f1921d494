//! Standby (power-save) control and status.
use embedded_hal::delay::DelayNs;

use super::Tc74;
use crate::bus::I2cBus;
use crate::commands::{
    BUS_TIMEOUT, CommandLink, NORMAL_OPERATION, POWER_SAVE, Register, STANDBY_SETTLE,
};
use crate::error::{Error, LinkError};
use crate::status::{ConfigRegister, StandbyState};

/// Standby-related commands.
impl<B: I2cBus, D: DelayNs> Tc74<B, D> {
    /// Enter or leave standby.
    ///
    /// In standby the TC74 stops converting and the temperature register keeps
    /// its last value. Leaving standby blocks for [`STANDBY_SETTLE`].
    pub fn set_standby(&mut self, enabled: bool) -> Result<(), Error<B::Error>> {
        if enabled {
            self.enable_standby()
        } else {
            self.disable_standby()
        }
    }

    /// Freeze the temperature register and drop to standby current.
    pub fn enable_standby(&mut self) -> Result<(), Error<B::Error>> {
        self.write_config(POWER_SAVE)?;
        log::debug!("TC74 at {:#04X} entered standby", self.address.seven_bit());
        Ok(())
    }

    /// Resume normal conversion, then wait for the first conversion to finish.
    ///
    /// The wait only happens if the configuration write succeeded.
    pub fn disable_standby(&mut self) -> Result<(), Error<B::Error>> {
        self.write_config(NORMAL_OPERATION)?;
        self.delay.delay_ms(STANDBY_SETTLE.as_millis() as u32);
        log::debug!("TC74 at {:#04X} left standby", self.address.seven_bit());
        Ok(())
    }

    /// Query the standby state.
    ///
    /// A configuration byte other than the two documented values is reported as
    /// [`StandbyState::Unknown`] rather than as an error.
    pub fn is_standby(&mut self) -> Result<StandbyState, Error<B::Error>> {
        self.read_config().map(StandbyState::from)
    }

    /// Read the configuration register.
    pub fn read_config(&mut self) -> Result<ConfigRegister, Error<B::Error>> {
        let mut link = self.register_read_link(Register::Configuration)?;
        self.bus.submit(&mut link, BUS_TIMEOUT)?;
        let raw = link
            .read_data()
            .first()
            .copied()
            .ok_or(LinkError::ShortRead)?;
        Ok(ConfigRegister::from(raw))
    }

    /// START, address-w, configuration register, control byte, STOP.
    pub(crate) fn config_write_link(&self, control: u8) -> Result<CommandLink, LinkError> {
        let mut link = CommandLink::new();
        link.start()?;
        self.select_config_register(&mut link)?;
        link.write_byte(control, true)?;
        link.stop()?;
        Ok(link)
    }

    fn write_config(&mut self, control: u8) -> Result<(), Error<B::Error>> {
        let mut link = self.config_write_link(control)?;
        self.bus.submit(&mut link, BUS_TIMEOUT)
    }
}
