// src/common/registers.rs

//! MAX30100 register map and bit-field layout.
//!
//! All addresses are 8-bit sub-addresses behind the fixed 7-bit bus address
//! [`DEVICE_ADDRESS`]. Burst reads auto-increment the device's internal
//! pointer, except on [`Register::FifoData`], which pops one FIFO byte per
//! read instead.

use core::fmt;

/// 7-bit I2C address of the MAX30100 (0xAE/0xAF on the wire).
pub const DEVICE_ADDRESS: u8 = 0x57;

/// Value of [`Register::PartId`] on every MAX30100.
pub const EXPECTED_PART_ID: u8 = 0x11;

/// Number of slots in the on-chip sample FIFO.
pub const FIFO_DEPTH: u8 = 16;

/// Bytes per FIFO sample: IR high, IR low, red high, red low.
pub const FIFO_SAMPLE_BYTES: usize = 4;

// === Mode configuration (0x06) ===

/// SHDN: power-save mode, registers stay readable.
pub const MODE_SHUTDOWN: u8 = 0x80;
/// RESET: self-clearing once the reset completes.
pub const MODE_RESET: u8 = 0x40;
/// TEMP_EN: start one die temperature conversion, self-clearing.
pub const MODE_TEMPERATURE_ENABLE: u8 = 0x08;
/// MODE[2:0]
pub const MODE_MASK: u8 = 0x07;

// === SpO2 configuration (0x07) ===

/// SPO2_HI_RES_EN: 16-bit ADC resolution with 1.6 ms pulses.
pub const SPO2_HIGH_RESOLUTION: u8 = 0x40;
/// SPO2_SR[2:0] at bits 4..=2.
pub const SPO2_SAMPLE_RATE_MASK: u8 = 0x1C;
pub const SPO2_SAMPLE_RATE_SHIFT: u8 = 2;
/// LED_PW[1:0]
pub const SPO2_PULSE_WIDTH_MASK: u8 = 0x03;

// === LED configuration (0x09) ===

pub const LED_RED_SHIFT: u8 = 4;

// === FIFO pointers ===

/// Write and read pointers are 4-bit counters.
pub const FIFO_POINTER_MASK: u8 = 0x0F;

// === Temperature ===

/// TFRAC[3:0], in 1/16 °C steps.
pub const TEMPERATURE_FRACTION_MASK: u8 = 0x0F;

/// MAX30100 register addresses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Register {
    /// Which interrupts have fired; cleared on read.
    InterruptStatus = 0x00,
    /// Which interrupts are armed.
    InterruptEnable = 0x01,
    /// FIFO slot the next sample will be written to.
    FifoWritePointer = 0x02,
    /// Number of samples lost to a full FIFO.
    OverflowCounter = 0x03,
    /// FIFO slot the next read will pop.
    FifoReadPointer = 0x04,
    /// FIFO output port.
    FifoData = 0x05,
    ModeConfig = 0x06,
    Spo2Config = 0x07,
    /// Red and IR LED drive currents.
    LedConfig = 0x09,
    TemperatureInteger = 0x16,
    TemperatureFraction = 0x17,
    RevisionId = 0xFE,
    PartId = 0xFF,
}

impl Register {
    /// Every mapped register, in address order.
    pub const ALL: [Register; 13] = [
        Register::InterruptStatus,
        Register::InterruptEnable,
        Register::FifoWritePointer,
        Register::OverflowCounter,
        Register::FifoReadPointer,
        Register::FifoData,
        Register::ModeConfig,
        Register::Spo2Config,
        Register::LedConfig,
        Register::TemperatureInteger,
        Register::TemperatureFraction,
        Register::RevisionId,
        Register::PartId,
    ];

    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Datasheet mnemonic, used in diagnostics and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Register::InterruptStatus => "INT_STATUS",
            Register::InterruptEnable => "INT_ENABLE",
            Register::FifoWritePointer => "FIFO_WR_PTR",
            Register::OverflowCounter => "OVF_COUNTER",
            Register::FifoReadPointer => "FIFO_RD_PTR",
            Register::FifoData => "FIFO_DATA",
            Register::ModeConfig => "MODE_CONFIG",
            Register::Spo2Config => "SPO2_CONFIG",
            Register::LedConfig => "LED_CONFIG",
            Register::TemperatureInteger => "TEMP_INTG",
            Register::TemperatureFraction => "TEMP_FRAC",
            Register::RevisionId => "REV_ID",
            Register::PartId => "PART_ID",
        }
    }

    /// Looks up the register mapped at `addr`, if any.
    pub fn from_addr(addr: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|reg| reg.addr() == addr)
    }
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        value.addr()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#04x})", self.name(), self.addr())
    }
}
