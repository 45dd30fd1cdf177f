// src/driver/sync_driver/mod.rs

mod bus_helpers;
mod diagnostics;
#[cfg(test)]
mod mock;

pub use diagnostics::RegisterDump;

use crate::common::{
    config::Config,
    error::Max30100Error,
    hal_traits::RegisterBus,
    registers::{
        Register, FIFO_DEPTH, FIFO_POINTER_MASK, FIFO_SAMPLE_BYTES, LED_RED_SHIFT, MODE_MASK,
        MODE_RESET, MODE_SHUTDOWN, MODE_TEMPERATURE_ENABLE, SPO2_HIGH_RESOLUTION,
        SPO2_PULSE_WIDTH_MASK, SPO2_SAMPLE_RATE_MASK, SPO2_SAMPLE_RATE_SHIFT,
    },
    types::{LedCurrent, Mode, PulseWidth, SampleRate, SensorReading, Temperature},
};
use log::debug;

/// Blocking MAX30100 driver.
///
/// All device state lives in the chip's registers; the driver only caches the
/// last sample pair popped from the FIFO. Constructing it does not touch the
/// bus.
///
/// Configuration methods are read-modify-write sequences and are not atomic
/// with respect to anything else on the bus. Every method takes `&mut self`;
/// if several threads need the sensor, put the whole driver behind a mutex.
#[derive(Debug)]
pub struct SyncMax30100<B>
where
    B: RegisterBus,
{
    bus: B,
    last_reading: SensorReading,
}

impl<B> SyncMax30100<B>
where
    B: RegisterBus,
{
    pub fn new(bus: B) -> Self {
        SyncMax30100 {
            bus,
            last_reading: SensorReading::default(),
        }
    }

    /// Consumes the driver and returns the bus.
    pub fn release(self) -> B {
        self.bus
    }

    // --- Cached sample ---

    /// Most recent sample pair from [`read_sample`](Self::read_sample),
    /// zeroes before the first read.
    pub fn last_reading(&self) -> SensorReading {
        self.last_reading
    }

    /// Last infrared reflectance value.
    pub fn ir(&self) -> u16 {
        self.last_reading.ir
    }

    /// Last red reflectance value.
    pub fn red(&self) -> u16 {
        self.last_reading.red
    }

    // --- Setup ---

    /// Puts the chip into a known baseline: heart-rate mode, IR LED at
    /// `config.ir_current` (red off), sample rate and pulse width from
    /// `config`.
    ///
    /// Plain writes, nothing is read first. Meant as the first call after
    /// power-up; `Config::default()` gives 1600 µs / 50 mA / 100 Hz.
    pub fn initialize(&mut self, config: Config) -> Result<(), Max30100Error<B::Error>> {
        debug!("initialize: {:?}", config);
        self.write_register(Register::ModeConfig, Mode::HeartRateOnly.bits())?;
        self.write_register(Register::LedConfig, config.ir_current.bits())?;
        self.write_register(Register::Spo2Config, config.spo2_config_bits())?;
        Ok(())
    }

    /// Sets the LED pulse width and both drive currents.
    ///
    /// Only LED_PW is touched in SPO2_CONFIG; LED_CONFIG is overwritten.
    pub fn configure_leds(
        &mut self,
        pulse_width: PulseWidth,
        red_current: LedCurrent,
        ir_current: LedCurrent,
    ) -> Result<(), Max30100Error<B::Error>> {
        debug!("configure_leds: pw={:?} red={:?} ir={:?}", pulse_width, red_current, ir_current);
        self.update_field(Register::Spo2Config, SPO2_PULSE_WIDTH_MASK, pulse_width.bits())?;
        self.write_register(
            Register::LedConfig,
            (red_current.bits() << LED_RED_SHIFT) | ir_current.bits(),
        )?;
        Ok(())
    }

    /// Sets the sample rate and switches the chip to SpO2 mode.
    pub fn configure_sample_rate(&mut self, sample_rate: SampleRate) -> Result<(), Max30100Error<B::Error>> {
        debug!("configure_sample_rate: {:?}", sample_rate);
        self.update_field(
            Register::Spo2Config,
            SPO2_SAMPLE_RATE_MASK,
            sample_rate.bits() << SPO2_SAMPLE_RATE_SHIFT,
        )?;
        // MODE lives in MODE_CONFIG, not SPO2_CONFIG
        self.update_field(Register::ModeConfig, MODE_MASK, Mode::Spo2.bits())?;
        Ok(())
    }

    /// Changes MODE only; power and temperature bits are kept.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Max30100Error<B::Error>> {
        debug!("set_mode: {:?}", mode);
        self.update_field(Register::ModeConfig, MODE_MASK, mode.bits())?;
        Ok(())
    }

    /// Enables or disables 16-bit SpO2 ADC resolution.
    pub fn set_high_resolution(&mut self, enabled: bool) -> Result<(), Max30100Error<B::Error>> {
        let bits = if enabled { SPO2_HIGH_RESOLUTION } else { 0 };
        self.update_field(Register::Spo2Config, SPO2_HIGH_RESOLUTION, bits)?;
        Ok(())
    }

    // --- FIFO ---

    /// Number of unread samples in the FIFO, `0..=15`.
    ///
    /// A completely full FIFO has equal pointers and reads as 0; check
    /// [`Register::OverflowCounter`] when that matters.
    pub fn sample_count(&mut self) -> Result<u8, Max30100Error<B::Error>> {
        let write_ptr = self.read_register(Register::FifoWritePointer)? & FIFO_POINTER_MASK;
        let read_ptr = self.read_register(Register::FifoReadPointer)? & FIFO_POINTER_MASK;
        Ok(FIFO_DEPTH.wrapping_add(write_ptr).wrapping_sub(read_ptr) % FIFO_DEPTH)
    }

    /// Pops one sample pair from the FIFO and caches it.
    pub fn read_sample(&mut self) -> Result<SensorReading, Max30100Error<B::Error>> {
        let mut raw = [0u8; FIFO_SAMPLE_BYTES];
        self.read_burst(Register::FifoData, &mut raw)?;
        self.last_reading = SensorReading::from_fifo_bytes(raw);
        Ok(self.last_reading)
    }

    // --- Power ---

    /// Enters power-save. Register contents are retained.
    pub fn shutdown(&mut self) -> Result<(), Max30100Error<B::Error>> {
        debug!("shutdown");
        self.modify_register(Register::ModeConfig, |reg| reg | MODE_SHUTDOWN)?;
        Ok(())
    }

    /// Leaves power-save.
    pub fn startup(&mut self) -> Result<(), Max30100Error<B::Error>> {
        debug!("startup");
        self.modify_register(Register::ModeConfig, |reg| reg & !MODE_SHUTDOWN)?;
        Ok(())
    }

    pub fn is_shutdown(&mut self) -> Result<bool, Max30100Error<B::Error>> {
        Ok(self.read_register(Register::ModeConfig)? & MODE_SHUTDOWN != 0)
    }

    /// Requests a soft reset. Returns as soon as the RESET bit is written;
    /// the bit self-clears when the chip is done and this does not wait for it.
    pub fn reset(&mut self) -> Result<(), Max30100Error<B::Error>> {
        debug!("reset");
        self.modify_register(Register::ModeConfig, |reg| reg | MODE_RESET)?;
        Ok(())
    }

    // --- Temperature ---

    /// Starts a single die temperature conversion (about 29 ms).
    pub fn start_temperature_measurement(&mut self) -> Result<(), Max30100Error<B::Error>> {
        self.modify_register(Register::ModeConfig, |reg| reg | MODE_TEMPERATURE_ENABLE)?;
        Ok(())
    }

    /// Reads the last converted die temperature.
    pub fn read_temperature(&mut self) -> Result<Temperature, Max30100Error<B::Error>> {
        let integer = self.read_register(Register::TemperatureInteger)?;
        let fraction = self.read_register(Register::TemperatureFraction)?;
        Ok(Temperature::from_registers(integer, fraction))
    }

    // --- Identification ---

    pub fn revision_id(&mut self) -> Result<u8, Max30100Error<B::Error>> {
        self.read_register(Register::RevisionId)
    }

    /// Part ID; 0x11 on a MAX30100. Not checked here, see [`probe`](Self::probe).
    pub fn part_id(&mut self) -> Result<u8, Max30100Error<B::Error>> {
        self.read_register(Register::PartId)
    }
}
