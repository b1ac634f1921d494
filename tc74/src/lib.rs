#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod address;
mod bus;
pub mod commands;
mod driver;
mod error;
pub mod poll;
pub mod status;
pub mod temperature;

pub use address::Address;
pub use bus::I2cBus;
pub use commands::CommandLink;
pub use driver::Tc74;
pub use error::{Error, LinkError};
pub use poll::{PollMode, PollOutcome, Reading};
pub use status::{ConfigRegister, StandbyState};
pub use temperature::{Temperature, Unit};
