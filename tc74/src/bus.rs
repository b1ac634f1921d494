//! Submitting command links to an I2C bus.
use core::fmt::Debug;
use core::time::Duration;

use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::commands::{AckType, BusOp, CommandLink, MAX_LINK_OPS, MAX_READ_LEN, READ_BIT};
use crate::error::{Error, LinkError};

/// A platform I2C controller that can carry out a [`CommandLink`].
///
/// Bus configuration (pins, pull-ups, clock speed) and driver installation are
/// the platform's business and happen before a value of this type exists.
///
/// Every [`embedded_hal::i2c::I2c`] implementation is an `I2cBus`. Implement
/// this trait directly for controllers that execute queued command links
/// natively and can honour the timeout.
pub trait I2cBus {
    /// Error reported by the platform when a transaction fails.
    type Error: Debug;

    /// Execute the link as one transaction, blocking for at most `timeout`.
    ///
    /// On success, bytes read are stored in the link (see
    /// [`CommandLink::complete`]).
    fn submit(
        &mut self,
        link: &mut CommandLink,
        timeout: Duration,
    ) -> Result<(), Error<Self::Error>>;
}

/// The embedded-hal call a command link corresponds to.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Transfer {
    /// START, address-w, bytes, STOP.
    Write {
        address: SevenBitAddress,
        bytes: heapless::Vec<u8, MAX_LINK_OPS>,
    },
    /// START, address-r, reads, STOP.
    Read { address: SevenBitAddress, len: usize },
    /// START, address-w, bytes, repeated START, address-r, reads, STOP.
    WriteRead {
        address: SevenBitAddress,
        bytes: heapless::Vec<u8, MAX_LINK_OPS>,
        len: usize,
    },
}

/// Everything between a START and the following START or STOP.
struct Phase<'a> {
    address: SevenBitAddress,
    is_read: bool,
    body: &'a [BusOp],
}

/// The first byte after a START must be an ack-checked address byte.
fn phase(ops: &[BusOp]) -> Result<Phase<'_>, LinkError> {
    match ops {
        [BusOp::Write {
            byte,
            ack_check: true,
        }, body @ ..] => Ok(Phase {
            address: byte >> 1,
            is_read: byte & READ_BIT == READ_BIT,
            body,
        }),
        _ => Err(LinkError::Unsupported),
    }
}

/// embedded-hal always checks for acknowledgement, so unchecked writes can't be honoured.
fn write_bytes(body: &[BusOp]) -> Result<heapless::Vec<u8, MAX_LINK_OPS>, LinkError> {
    let mut bytes = heapless::Vec::new();
    for op in body {
        let BusOp::Write {
            byte,
            ack_check: true,
        } = op
        else {
            return Err(LinkError::Unsupported);
        };
        bytes.push(*byte).map_err(|_| LinkError::Full)?;
    }
    Ok(bytes)
}

/// embedded-hal ACKs every byte but the last, which it NACKs.
fn read_length(body: &[BusOp]) -> Result<usize, LinkError> {
    match body {
        [acked @ .., BusOp::Read { ack: AckType::Nack }]
            if acked
                .iter()
                .all(|op| *op == BusOp::Read { ack: AckType::Ack }) =>
        {
            Ok(body.len())
        }
        _ => Err(LinkError::Unsupported),
    }
}

impl Transfer {
    pub(crate) fn from_link(link: &CommandLink) -> Result<Self, LinkError> {
        let [BusOp::Start, inner @ .., BusOp::Stop] = link.ops() else {
            return Err(LinkError::Unsupported);
        };
        if inner.contains(&BusOp::Stop) {
            return Err(LinkError::Unsupported);
        }

        let mut phases = inner.split(|op| *op == BusOp::Start);
        let first = phases.next().map(phase).transpose()?;
        let second = phases.next().map(phase).transpose()?;
        if phases.next().is_some() {
            return Err(LinkError::Unsupported);
        }

        match (first, second) {
            (Some(write), None) if !write.is_read => Ok(Transfer::Write {
                address: write.address,
                bytes: write_bytes(write.body)?,
            }),
            (Some(read), None) => Ok(Transfer::Read {
                address: read.address,
                len: read_length(read.body)?,
            }),
            (Some(write), Some(read))
                if !write.is_read && read.is_read && write.address == read.address =>
            {
                Ok(Transfer::WriteRead {
                    address: write.address,
                    bytes: write_bytes(write.body)?,
                    len: read_length(read.body)?,
                })
            }
            // Read-before-write, direction changes to a different target, etc.
            _ => Err(LinkError::Unsupported),
        }
    }
}

impl<I: I2c<SevenBitAddress>> I2cBus for I {
    type Error = I::Error;

    /// Map the link onto a single embedded-hal `write`, `read` or `write_read`.
    ///
    /// The embedded-hal traits take no timeout, so the HAL's own bus timeout
    /// applies and `timeout` is only logged.
    fn submit(
        &mut self,
        link: &mut CommandLink,
        timeout: Duration,
    ) -> Result<(), Error<I::Error>> {
        let transfer = Transfer::from_link(link)?;
        log::trace!("submitting {transfer:?} (requested timeout {timeout:?})");

        let mut buffer = [0u8; MAX_READ_LEN];
        let read_len = match transfer {
            Transfer::Write { address, bytes } => {
                self.write(address, &bytes).map_err(Error::Bus)?;
                0
            }
            Transfer::Read { address, len } => {
                self.read(address, &mut buffer[..len])
                    .map_err(Error::Bus)?;
                len
            }
            Transfer::WriteRead {
                address,
                bytes,
                len,
            } => {
                self.write_read(address, &bytes, &mut buffer[..len])
                    .map_err(Error::Bus)?;
                len
            }
        };
        link.complete(&buffer[..read_len])?;
        Ok(())
    }
}
