//! Driver behaviour against a mocked embedded-hal I2C bus.
//!
//! Each test scripts the exact embedded-hal calls the TC74 should see. The mock
//! panics on any unexpected call, and `done()` checks nothing was left over.
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use tc74::{Address, Error, PollMode, PollOutcome, StandbyState, Tc74, Unit};

const ADDRESS: u8 = 0x48;

/// Adds up requested delays instead of sleeping.
#[derive(Debug, Default)]
struct TallyDelay {
    total_ns: u64,
}

impl DelayNs for TallyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

fn sensor(expectations: &[I2cTransaction]) -> Tc74<I2cMock, TallyDelay> {
    Tc74::new(
        I2cMock::new(expectations),
        TallyDelay::default(),
        Address::A0,
    )
}

fn finish(sensor: Tc74<I2cMock, TallyDelay>) -> TallyDelay {
    let (mut i2c, delay) = sensor.release();
    i2c.done();
    delay
}

/// Reads 0x19 from the temperature register: 25°C, 77°F.
#[test]
fn read_positive_temperature() -> Result<(), Error<ErrorKind>> {
    let mut tc74 = sensor(&[
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x19]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x19]),
    ]);
    assert_eq!(tc74.read_temperature(Unit::Celsius)?, 25.0);
    assert_eq!(tc74.read_temperature(Unit::Fahrenheit)?, 77.0);
    finish(tc74);
    Ok(())
}

/// Reads 0xE7 from the temperature register: -25°C.
#[test]
fn read_negative_temperature() -> Result<(), Error<ErrorKind>> {
    let mut tc74 = sensor(&[I2cTransaction::write_read(
        ADDRESS,
        vec![0x00],
        vec![0xE7],
    )]);
    assert_eq!(tc74.read()?.degrees_celsius(), -25);
    finish(tc74);
    Ok(())
}

/// Initialization clears SHDN and waits out the first conversion.
#[test]
fn initialize_leaves_standby() -> Result<(), Error<ErrorKind>> {
    let i2c = I2cMock::new(&[I2cTransaction::write(0x4D, vec![0x01, 0x00])]);
    let tc74 = Tc74::initialize(i2c, TallyDelay::default(), Address::A5)?;
    assert_eq!(tc74.address(), Address::A5);
    let delay = finish(tc74);
    assert_eq!(delay.total_ns, 250_000_000);
    Ok(())
}

/// Enter standby, see it reported, leave it, see it reported.
#[test]
fn standby_round_trip() -> Result<(), Error<ErrorKind>> {
    let mut tc74 = sensor(&[
        I2cTransaction::write(ADDRESS, vec![0x01, 0x80]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x80]),
        I2cTransaction::write(ADDRESS, vec![0x01, 0x00]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x40]),
    ]);
    tc74.enable_standby()?;
    assert_eq!(tc74.is_standby()?, StandbyState::Standby);
    tc74.disable_standby()?;
    assert_eq!(tc74.is_standby()?, StandbyState::Active);
    let delay = finish(tc74);
    assert_eq!(delay.total_ns, 250_000_000);
    Ok(())
}

/// An unexpected configuration byte is indeterminate, not an error.
#[test]
fn unknown_config_byte() -> Result<(), Error<ErrorKind>> {
    let mut tc74 = sensor(&[I2cTransaction::write_read(
        ADDRESS,
        vec![0x01],
        vec![0xFF],
    )]);
    assert_eq!(tc74.is_standby()?, StandbyState::Unknown(0xFF));
    finish(tc74);
    Ok(())
}

/// A missing sensor is reported instead of decoding a zero byte.
#[test]
fn address_nack_is_reported() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
    let mut tc74 = sensor(&[
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x00]).with_error(nack),
        I2cTransaction::write(ADDRESS, vec![0x01, 0x00]).with_error(nack),
    ]);

    let err = tc74.read().unwrap_err();
    assert!(matches!(err, Error::Bus(ErrorKind::NoAcknowledge(_))));
    assert_eq!(err.kind(), nack);

    assert!(tc74.disable_standby().is_err());
    let delay = finish(tc74);
    assert_eq!(delay.total_ns, 0);
}

/// Skipping mode checks the configuration register before each read.
#[test]
fn poll_skip_standby() -> Result<(), Error<ErrorKind>> {
    let mut tc74 = sensor(&[
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x80]),
        I2cTransaction::write_read(ADDRESS, vec![0x01], vec![0x40]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x16]),
    ]);
    assert_eq!(
        tc74.poll(PollMode::SkipStandby)?,
        PollOutcome::Skipped(StandbyState::Standby)
    );
    let PollOutcome::Reading(reading) = tc74.poll(PollMode::SkipStandby)? else {
        panic!("expected a reading");
    };
    assert_eq!(
        reading.to_string(),
        "Temperature in Celsius: 22\nTemperature in Fahrenheit: 71.60"
    );
    finish(tc74);
    Ok(())
}
