use core::fmt;

use embedded_hal::i2c;

/// Wrapper for problems when communicating with the TC74.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug)]
pub enum Error<E> {
    /// The bus failed to carry out a submitted command link.
    ///
    /// This covers the TC74 not acknowledging its address or a data byte, bus
    /// timeouts and arbitration loss, as reported by the platform I2C driver.
    Bus(E),
    /// A command link could not be built or executed as described.
    Link(LinkError),
}

/// Problems with the shape of a [`CommandLink`].
///
/// These indicate a bug in the driver or in a custom [`I2cBus`] implementation,
/// not a fault on the wire.
///
/// [`CommandLink`]: crate::CommandLink
/// [`I2cBus`]: crate::I2cBus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// More operations (or read bytes) were queued than the link can hold.
    Full,
    /// The bus cannot express this sequence of operations.
    ///
    /// The embedded-hal bus supports a write, a read, or a write followed by a
    /// repeated START and a read, all to the same address and ending in STOP.
    Unsupported,
    /// The bus completed the link but returned fewer bytes than were requested.
    ShortRead,
}

impl<E> From<LinkError> for Error<E> {
    fn from(value: LinkError) -> Self {
        Self::Link(value)
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Full => f.write_str("command link capacity exceeded"),
            LinkError::Unsupported => f.write_str("command link shape not supported by the bus"),
            LinkError::ShortRead => f.write_str("bus returned fewer bytes than requested"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "I2C bus error: {e:?}"),
            Error::Link(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for LinkError {}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

impl<E: i2c::Error> i2c::Error for Error<E> {
    fn kind(&self) -> i2c::ErrorKind {
        match self {
            Error::Bus(e) => e.kind(),
            Error::Link(_) => i2c::ErrorKind::Other,
        }
    }
}
