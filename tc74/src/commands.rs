//! TC74 wire constants and the command link used to describe a bus transaction.
//!
//! A [`CommandLink`] is a queue of low-level bus operations (START, byte writes,
//! byte reads, STOP) that is handed to an [`I2cBus`] in one go. The driver builds
//! one link per register access, mirroring how the TC74 datasheet describes its
//! SMBus read-byte and write-byte protocols.
//!
//! [`I2cBus`]: crate::I2cBus
use core::time::Duration;

use crate::error::LinkError;

/// Maximum number of operations a single link can hold.
///
/// The longest link the driver builds (a register read) uses seven.
pub const MAX_LINK_OPS: usize = 16;

/// Maximum number of bytes a single link can read back.
pub const MAX_READ_LEN: usize = 8;

/// Bit appended to the shifted 7-bit address to signal a write.
pub const WRITE_BIT: u8 = 0;

/// Bit appended to the shifted 7-bit address to signal a read.
pub const READ_BIT: u8 = 1;

/// Control byte for the configuration register that puts the TC74 in standby.
///
/// Sets the SHDN bit (bit 7). See section 4.0 of the datasheet.
pub const POWER_SAVE: u8 = 0x80;

/// Control byte for the configuration register that resumes normal conversion.
pub const NORMAL_OPERATION: u8 = 0x00;

/// Configuration register value while converting normally with data ready.
pub const STANDBY_ACTIVE: u8 = 0x40;

/// Configuration register value while in standby.
pub const STANDBY_ENGAGED: u8 = 0x80;

/// How long the bus may take to carry out one submitted link.
pub const BUS_TIMEOUT: Duration = Duration::from_millis(1000);

/// Minimum wait after leaving standby before the temperature register is valid.
///
/// The TC74 needs time to complete its first conversion after SHDN is cleared.
/// Reads issued sooner return whatever was latched when standby was entered.
pub const STANDBY_SETTLE: Duration = Duration::from_millis(250);

/// TC74 register pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Read Temperature (RTR), read-only.
    Temperature = 0x00,
    /// Read/Write Configuration (RWCR).
    Configuration = 0x01,
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        value as u8
    }
}

/// Acknowledgement sent by the controller after receiving a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AckType {
    /// Acknowledge, asking the target for another byte.
    Ack,
    /// No acknowledge, telling the target the read is over.
    Nack,
}

/// A single step of a command link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOp {
    /// START condition, or repeated START if no STOP preceded it.
    Start,
    /// Write one byte.
    Write {
        /// Byte to place on the bus.
        byte: u8,
        /// Whether the transaction must fail if the target does not acknowledge.
        ack_check: bool,
    },
    /// Read one byte and answer with the given acknowledgement.
    Read {
        /// Acknowledgement to send after the byte.
        ack: AckType,
    },
    /// STOP condition.
    Stop,
}

/// Queued bus operations making up one I2C transaction.
///
/// Dropping the link releases it. Bytes read by the bus are stored in the
/// link once it has been submitted, see [`CommandLink::read_data`].
#[derive(Debug, Default, Clone)]
pub struct CommandLink {
    ops: heapless::Vec<BusOp, MAX_LINK_OPS>,
    read_data: heapless::Vec<u8, MAX_READ_LEN>,
}

impl CommandLink {
    /// Begin an empty link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a START condition.
    pub fn start(&mut self) -> Result<(), LinkError> {
        self.push(BusOp::Start)
    }

    /// Queue a byte write.
    pub fn write_byte(&mut self, byte: u8, ack_check: bool) -> Result<(), LinkError> {
        self.push(BusOp::Write { byte, ack_check })
    }

    /// Queue a byte read.
    pub fn read_byte(&mut self, ack: AckType) -> Result<(), LinkError> {
        if self.read_len() == MAX_READ_LEN {
            return Err(LinkError::Full);
        }
        self.push(BusOp::Read { ack })
    }

    /// Queue a STOP condition.
    pub fn stop(&mut self) -> Result<(), LinkError> {
        self.push(BusOp::Stop)
    }

    /// Operations queued so far, in bus order.
    pub fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    /// Number of byte reads queued.
    pub fn read_len(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, BusOp::Read { .. }))
            .count()
    }

    /// Bytes read by the bus during the last submission.
    ///
    /// Empty until the link has been submitted.
    pub fn read_data(&self) -> &[u8] {
        &self.read_data
    }

    /// Store the bytes read by the bus.
    ///
    /// Called by [`I2cBus`] implementations once the transaction completes.
    /// Returns [`LinkError::ShortRead`] if `data` does not cover every queued read.
    ///
    /// [`I2cBus`]: crate::I2cBus
    pub fn complete(&mut self, data: &[u8]) -> Result<(), LinkError> {
        if data.len() < self.read_len() {
            return Err(LinkError::ShortRead);
        }
        self.read_data.clear();
        self.read_data
            .extend_from_slice(&data[..self.read_len()])
            .map_err(|_| LinkError::Full)
    }

    fn push(&mut self, op: BusOp) -> Result<(), LinkError> {
        self.ops.push(op).map_err(|_| LinkError::Full)
    }
}
