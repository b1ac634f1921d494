//! TC74 bus addresses.
use core::fmt;

use crate::commands::{READ_BIT, WRITE_BIT};

/// 7-bit I2C address of a TC74, fixed at the factory by part number.
///
/// The TC74A0 through TC74A7 answer at 0x48 through 0x4F.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Address {
    /// TC74A0, 0b1001_000.
    #[default]
    A0 = 0x48,
    /// TC74A1, 0b1001_001.
    A1 = 0x49,
    /// TC74A2, 0b1001_010.
    A2 = 0x4A,
    /// TC74A3, 0b1001_011.
    A3 = 0x4B,
    /// TC74A4, 0b1001_100.
    A4 = 0x4C,
    /// TC74A5, 0b1001_101.
    A5 = 0x4D,
    /// TC74A6, 0b1001_110.
    A6 = 0x4E,
    /// TC74A7, 0b1001_111.
    A7 = 0x4F,
}

impl Address {
    /// All TC74 address variants, in address order.
    pub const ALL: [Address; 8] = [
        Address::A0,
        Address::A1,
        Address::A2,
        Address::A3,
        Address::A4,
        Address::A5,
        Address::A6,
        Address::A7,
    ];

    /// The 7-bit address, as taken by embedded-hal.
    pub const fn seven_bit(self) -> u8 {
        self as u8
    }

    /// Address byte announcing a write: `(address << 1) | 0`.
    pub const fn write_byte(self) -> u8 {
        (self.seven_bit() << 1) | WRITE_BIT
    }

    /// Address byte announcing a read: `(address << 1) | 1`.
    pub const fn read_byte(self) -> u8 {
        (self.seven_bit() << 1) | READ_BIT
    }
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        value.seven_bit()
    }
}

/// The given 7-bit address does not belong to any TC74 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAddress(pub u8);

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X} is not a TC74 address (0x48..=0x4F)", self.0)
    }
}

impl core::error::Error for InvalidAddress {}

impl TryFrom<u8> for Address {
    type Error = InvalidAddress;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Address::ALL
            .into_iter()
            .find(|a| a.seven_bit() == value)
            .ok_or(InvalidAddress(value))
    }
}
