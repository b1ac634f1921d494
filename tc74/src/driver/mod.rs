use embedded_hal::delay::DelayNs;

use crate::address::Address;
use crate::bus::I2cBus;
use crate::commands::{AckType, BUS_TIMEOUT, CommandLink, Register};
use crate::error::{Error, LinkError};
use crate::temperature::{Temperature, Unit};

mod standby;

/// Driver for one TC74 on an I2C bus.
///
/// The handle owns the bus (which identifies the port) and a delay provider used
/// for the settle time after leaving standby. Methods take `&mut self`, so only
/// one operation can be in flight at a time; to share a sensor between tasks,
/// put the handle behind a mutex.
#[derive(Debug)]
pub struct Tc74<B, D> {
    bus: B,
    delay: D,
    address: Address,
}

impl<B: I2cBus, D: DelayNs> Tc74<B, D> {
    /// Create a handle without touching the bus.
    ///
    /// The TC74 may still be in standby from a previous run, in which case the
    /// temperature register is frozen. Prefer [`Tc74::initialize`] unless you
    /// need to inspect the standby state first.
    pub fn new(bus: B, delay: D, address: Address) -> Self {
        Self {
            bus,
            delay,
            address,
        }
    }

    /// Create a handle and take the TC74 out of standby.
    ///
    /// Blocks for [`STANDBY_SETTLE`] after the configuration write so that the
    /// first read returns a fresh conversion.
    ///
    /// [`STANDBY_SETTLE`]: crate::commands::STANDBY_SETTLE
    pub fn initialize(bus: B, delay: D, address: Address) -> Result<Self, Error<B::Error>> {
        let mut tc74 = Self::new(bus, delay, address);
        tc74.disable_standby()?;
        Ok(tc74)
    }

    /// Address this handle talks to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Queue the write phase that points the TC74 at its temperature register.
    ///
    /// Appends exactly two ack-checked writes: the address byte with the write
    /// bit, then the register pointer.
    pub fn select_temperature_register(&self, link: &mut CommandLink) -> Result<(), LinkError> {
        self.select_register(link, Register::Temperature)
    }

    /// Queue the write phase that points the TC74 at its configuration register.
    pub fn select_config_register(&self, link: &mut CommandLink) -> Result<(), LinkError> {
        self.select_register(link, Register::Configuration)
    }

    fn select_register(&self, link: &mut CommandLink, register: Register) -> Result<(), LinkError> {
        link.write_byte(self.address.write_byte(), true)?;
        link.write_byte(register.into(), true)
    }

    /// Read the temperature register.
    pub fn read(&mut self) -> Result<Temperature, Error<B::Error>> {
        self.read_register(Register::Temperature)
            .map(Temperature::from_raw)
    }

    /// Read the temperature in the given unit.
    pub fn read_temperature(&mut self, unit: Unit) -> Result<f32, Error<B::Error>> {
        self.read().map(|t| t.in_unit(unit))
    }

    /// Build the SMBus read-byte link for `register`.
    ///
    /// START, address-w, register, repeated START, address-r, one byte
    /// answered with NACK, STOP.
    pub(crate) fn register_read_link(&self, register: Register) -> Result<CommandLink, LinkError> {
        let mut link = CommandLink::new();
        link.start()?;
        self.select_register(&mut link, register)?;
        link.start()?;
        link.write_byte(self.address.read_byte(), true)?;
        link.read_byte(AckType::Nack)?;
        link.stop()?;
        Ok(link)
    }

    fn read_register(&mut self, register: Register) -> Result<u8, Error<B::Error>> {
        let mut link = self.register_read_link(register)?;
        self.bus.submit(&mut link, BUS_TIMEOUT)?;
        link.read_data()
            .first()
            .copied()
            .ok_or(Error::Link(LinkError::ShortRead))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::commands::BusOp;

    /// Bus that records every submitted link and answers reads from a script.
    #[derive(Default)]
    pub(crate) struct ScriptedBus {
        pub(crate) submitted: Vec<Vec<BusOp>>,
        pub(crate) responses: Vec<u8>,
        pub(crate) fail: bool,
    }

    impl ScriptedBus {
        pub(crate) fn answering(responses: &[u8]) -> Self {
            Self {
                responses: responses.to_vec(),
                ..Default::default()
            }
        }
    }

    impl I2cBus for ScriptedBus {
        type Error = &'static str;

        fn submit(
            &mut self,
            link: &mut CommandLink,
            _timeout: core::time::Duration,
        ) -> Result<(), Error<Self::Error>> {
            self.submitted.push(link.ops().to_vec());
            if self.fail {
                return Err(Error::Bus("no acknowledge"));
            }
            let data: Vec<u8> = self.responses.drain(..link.read_len()).collect();
            link.complete(&data)?;
            Ok(())
        }
    }

    /// Delay that adds up the requested time instead of sleeping.
    #[derive(Default)]
    pub(crate) struct TallyDelay {
        pub(crate) total_ns: u64,
    }

    impl DelayNs for TallyDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    pub(crate) fn w(byte: u8) -> BusOp {
        BusOp::Write {
            byte,
            ack_check: true,
        }
    }

    #[test]
    fn select_helpers_emit_two_bytes() {
        let tc74 = Tc74::new(ScriptedBus::default(), TallyDelay::default(), Address::A5);
        let mut link = CommandLink::new();
        tc74.select_temperature_register(&mut link).unwrap();
        assert_eq!(link.ops(), &[w(0x9A), w(0x00)]);

        let mut link = CommandLink::new();
        tc74.select_config_register(&mut link).unwrap();
        assert_eq!(link.ops(), &[w(0x9A), w(0x01)]);
    }

    #[test]
    fn temperature_read_sequence() {
        let mut tc74 = Tc74::new(ScriptedBus::answering(&[0x19]), TallyDelay::default(), Address::A0);
        assert_eq!(tc74.read().unwrap(), Temperature::from_raw(0x19));
        let (bus, _) = tc74.release();
        assert_eq!(
            bus.submitted,
            [[
                BusOp::Start,
                w(0x90),
                w(0x00),
                BusOp::Start,
                w(0x91),
                BusOp::Read { ack: AckType::Nack },
                BusOp::Stop,
            ]]
        );
    }

    #[test]
    fn read_temperature_units() {
        let mut tc74 = Tc74::new(ScriptedBus::answering(&[0xE7, 0xE7]), TallyDelay::default(), Address::A0);
        assert_eq!(tc74.read_temperature(Unit::Celsius).unwrap(), -25.0);
        assert_eq!(tc74.read_temperature(Unit::Fahrenheit).unwrap(), -13.0);
    }

    #[test]
    fn bus_failure_is_surfaced() {
        let bus = ScriptedBus {
            fail: true,
            ..Default::default()
        };
        let mut tc74 = Tc74::new(bus, TallyDelay::default(), Address::A0);
        assert!(matches!(tc74.read(), Err(Error::Bus("no acknowledge"))));
    }
}
