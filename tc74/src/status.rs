//! Configuration register (RWCR) contents.
//!
//! The register has two meaningful bits. Bit 7 (SHDN) is set while the part is
//! in standby, and bit 6 (DATA_RDY) is set once a conversion has completed
//! since power-up or since leaving standby. The remaining bits read as zero.
use bit_field::BitField;

use crate::commands::{STANDBY_ACTIVE, STANDBY_ENGAGED};

/// Standby state as reported by the configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyState {
    /// Converting normally with data ready (0x40).
    Active,
    /// In standby; the temperature register is frozen (0x80).
    Standby,
    /// Any other register value.
    ///
    /// Seen while the first conversion after leaving standby is still running
    /// (0x00), or when the bus returns garbage. Treat as indeterminate.
    Unknown(u8),
}

impl StandbyState {
    /// True only for [`StandbyState::Standby`].
    pub fn is_standby(self) -> bool {
        matches!(self, StandbyState::Standby)
    }
}

impl From<u8> for StandbyState {
    fn from(value: u8) -> Self {
        match value {
            STANDBY_ACTIVE => StandbyState::Active,
            STANDBY_ENGAGED => StandbyState::Standby,
            other => StandbyState::Unknown(other),
        }
    }
}

/// Bitwise view of the configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigRegister {
    /// SHDN, bit 7. Standby is engaged.
    pub standby: bool,
    /// DATA_RDY, bit 6. The temperature register holds a completed conversion.
    pub data_ready: bool,
    /// The register byte as read.
    pub raw: u8,
}

impl From<u8> for ConfigRegister {
    fn from(value: u8) -> Self {
        Self {
            standby: value.get_bit(7),
            data_ready: value.get_bit(6),
            raw: value,
        }
    }
}

impl From<ConfigRegister> for StandbyState {
    fn from(value: ConfigRegister) -> Self {
        value.raw.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standby_sentinels() {
        assert_eq!(StandbyState::from(0x40), StandbyState::Active);
        assert_eq!(StandbyState::from(0x80), StandbyState::Standby);
        assert_eq!(StandbyState::from(0x00), StandbyState::Unknown(0x00));
        assert_eq!(StandbyState::from(0xFF), StandbyState::Unknown(0xFF));
        assert_eq!(StandbyState::from(0xC0), StandbyState::Unknown(0xC0));
    }

    #[test]
    fn config_bits() {
        let active = ConfigRegister::from(0x40);
        assert!(!active.standby);
        assert!(active.data_ready);

        let standby = ConfigRegister::from(0x80);
        assert!(standby.standby);
        assert!(!standby.data_ready);

        let converting = ConfigRegister::from(0x00);
        assert!(!converting.standby);
        assert!(!converting.data_ready);
        assert_eq!(StandbyState::from(converting), StandbyState::Unknown(0x00));
    }
}
