//! Temperature register decoding.
use core::fmt;

/// Unit in which to report a temperature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// Degrees Celsius, the TC74's native unit.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

/// A reading from the TC74 temperature register.
///
/// The register holds a whole number of degrees Celsius as an 8-bit two's
/// complement value, covering -128 to +127 (the part is specified from -40 to
/// +125).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature(i8);

impl Temperature {
    /// Decode the raw register byte.
    pub fn from_raw(raw: u8) -> Self {
        let celsius = if raw & 0x80 != 0 {
            // Invert and increment to get the magnitude, then negate.
            -(i16::from(raw ^ 0xFF) + 1)
        } else {
            i16::from(raw)
        };
        // -128..=127 by construction.
        Self(celsius as i8)
    }

    /// The register value in whole degrees Celsius.
    pub fn degrees_celsius(self) -> i8 {
        self.0
    }

    /// Degrees Celsius.
    pub fn celsius(self) -> f32 {
        f32::from(self.0)
    }

    /// Degrees Fahrenheit.
    pub fn fahrenheit(self) -> f32 {
        f32::from(self.0) * 9.0 / 5.0 + 32.0
    }

    /// The temperature in the given unit.
    pub fn in_unit(self, unit: Unit) -> f32 {
        match unit {
            Unit::Celsius => self.celsius(),
            Unit::Fahrenheit => self.fahrenheit(),
        }
    }
}

impl From<u8> for Temperature {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}
