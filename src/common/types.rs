// src/common/types.rs

use super::error::Max30100Error;
use super::registers::TEMPERATURE_FRACTION_MASK;

// --- LED pulse width (SPO2_CONFIG[1:0]) ---

/// LED pulse width. Same setting drives both LEDs.
///
/// Discriminants are the LED_PW field encoding; longer pulses give more ADC
/// resolution at the cost of power.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum PulseWidth {
    Us200 = 0b00,
    Us400 = 0b01,
    Us800 = 0b10,
    Us1600 = 0b11,
}

impl PulseWidth {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Nominal pulse duration in microseconds.
    pub const fn micros(self) -> u16 {
        match self {
            PulseWidth::Us200 => 200,
            PulseWidth::Us400 => 400,
            PulseWidth::Us800 => 800,
            PulseWidth::Us1600 => 1600,
        }
    }

    /// Decodes the LED_PW field. Only the low two bits are significant.
    pub fn from_bits(bits: u8) -> Result<Self, Max30100Error<()>> {
        match bits {
            0b00 => Ok(PulseWidth::Us200),
            0b01 => Ok(PulseWidth::Us400),
            0b10 => Ok(PulseWidth::Us800),
            0b11 => Ok(PulseWidth::Us1600),
            _ => Err(Max30100Error::InvalidBits { field: "LED_PW", bits }),
        }
    }
}

// --- Sample rate (SPO2_CONFIG[4:2]) ---

/// ADC sample rate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum SampleRate {
    Hz50 = 0,
    Hz100 = 1,
    Hz167 = 2,
    Hz200 = 3,
    Hz400 = 4,
    Hz600 = 5,
    Hz800 = 6,
    Hz1000 = 7,
}

impl SampleRate {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn hertz(self) -> u16 {
        match self {
            SampleRate::Hz50 => 50,
            SampleRate::Hz100 => 100,
            SampleRate::Hz167 => 167,
            SampleRate::Hz200 => 200,
            SampleRate::Hz400 => 400,
            SampleRate::Hz600 => 600,
            SampleRate::Hz800 => 800,
            SampleRate::Hz1000 => 1000,
        }
    }

    pub fn from_bits(bits: u8) -> Result<Self, Max30100Error<()>> {
        match bits {
            0 => Ok(SampleRate::Hz50),
            1 => Ok(SampleRate::Hz100),
            2 => Ok(SampleRate::Hz167),
            3 => Ok(SampleRate::Hz200),
            4 => Ok(SampleRate::Hz400),
            5 => Ok(SampleRate::Hz600),
            6 => Ok(SampleRate::Hz800),
            7 => Ok(SampleRate::Hz1000),
            _ => Err(Max30100Error::InvalidBits { field: "SPO2_SR", bits }),
        }
    }
}

// --- LED current (LED_CONFIG nibbles) ---

/// LED drive current, encoded in one nibble of LED_CONFIG.
///
/// Variant names give the typical current in mA (`Ma27_1` = 27.1 mA).
/// Pattern 0xF is also 50 mA on silicon but is not a distinct setting here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum LedCurrent {
    Ma0 = 0x0,
    Ma4_4 = 0x1,
    Ma7_6 = 0x2,
    Ma11_0 = 0x3,
    Ma14_2 = 0x4,
    Ma17_4 = 0x5,
    Ma20_8 = 0x6,
    Ma27_1 = 0x7,
    Ma30_6 = 0x8,
    Ma33_8 = 0x9,
    Ma37_0 = 0xA,
    Ma40_2 = 0xB,
    Ma43_6 = 0xC,
    Ma46_8 = 0xD,
    Ma50_0 = 0xE,
}

impl LedCurrent {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Typical current in tenths of a milliamp.
    pub const fn milliamps_x10(self) -> u16 {
        match self {
            LedCurrent::Ma0 => 0,
            LedCurrent::Ma4_4 => 44,
            LedCurrent::Ma7_6 => 76,
            LedCurrent::Ma11_0 => 110,
            LedCurrent::Ma14_2 => 142,
            LedCurrent::Ma17_4 => 174,
            LedCurrent::Ma20_8 => 208,
            LedCurrent::Ma27_1 => 271,
            LedCurrent::Ma30_6 => 306,
            LedCurrent::Ma33_8 => 338,
            LedCurrent::Ma37_0 => 370,
            LedCurrent::Ma40_2 => 402,
            LedCurrent::Ma43_6 => 436,
            LedCurrent::Ma46_8 => 468,
            LedCurrent::Ma50_0 => 500,
        }
    }

    pub fn from_bits(bits: u8) -> Result<Self, Max30100Error<()>> {
        let current = match bits {
            0x0 => LedCurrent::Ma0,
            0x1 => LedCurrent::Ma4_4,
            0x2 => LedCurrent::Ma7_6,
            0x3 => LedCurrent::Ma11_0,
            0x4 => LedCurrent::Ma14_2,
            0x5 => LedCurrent::Ma17_4,
            0x6 => LedCurrent::Ma20_8,
            0x7 => LedCurrent::Ma27_1,
            0x8 => LedCurrent::Ma30_6,
            0x9 => LedCurrent::Ma33_8,
            0xA => LedCurrent::Ma37_0,
            0xB => LedCurrent::Ma40_2,
            0xC => LedCurrent::Ma43_6,
            0xD => LedCurrent::Ma46_8,
            0xE => LedCurrent::Ma50_0,
            _ => return Err(Max30100Error::InvalidBits { field: "LED_PA", bits }),
        };
        Ok(current)
    }
}

// --- Operating mode (MODE_CONFIG[2:0]) ---

/// Operating mode. Other MODE patterns are reserved or unused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// IR LED only.
    HeartRateOnly = 0b010,
    /// IR and red LEDs.
    Spo2 = 0b011,
}

impl Mode {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn from_bits(bits: u8) -> Result<Self, Max30100Error<()>> {
        match bits {
            0b010 => Ok(Mode::HeartRateOnly),
            0b011 => Ok(Mode::Spo2),
            _ => Err(Max30100Error::InvalidBits { field: "MODE", bits }),
        }
    }
}

// --- Decoded data ---

/// One IR/red sample pair popped from the FIFO. Raw ADC counts, unprocessed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SensorReading {
    pub ir: u16,
    pub red: u16,
}

impl SensorReading {
    /// Decodes the FIFO's four bytes: IR then red, each big-endian.
    pub const fn from_fifo_bytes(bytes: [u8; 4]) -> Self {
        SensorReading {
            ir: u16::from_be_bytes([bytes[0], bytes[1]]),
            red: u16::from_be_bytes([bytes[2], bytes[3]]),
        }
    }
}

/// Die temperature as read from TEMP_INTG / TEMP_FRAC.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Temperature {
    /// Whole degrees Celsius, two's complement.
    pub integer: i8,
    /// Sixteenths of a degree, always added (0..=15).
    pub fraction: u8,
}

impl Temperature {
    pub const fn from_registers(integer: u8, fraction: u8) -> Self {
        Temperature {
            integer: integer as i8,
            fraction: fraction & TEMPERATURE_FRACTION_MASK,
        }
    }

    pub fn celsius(&self) -> f32 {
        self.integer as f32 + self.fraction as f32 * 0.0625
    }
}
