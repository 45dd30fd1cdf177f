// src/common/config.rs

use super::types::{LedCurrent, PulseWidth, SampleRate};

/// Baseline settings written by `initialize`.
///
/// `Default` is the power-up baseline: longest pulse, highest IR current,
/// second-lowest sample rate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    pub pulse_width: PulseWidth,
    pub ir_current: LedCurrent,
    pub sample_rate: SampleRate,
}

impl Config {
    pub const fn new(pulse_width: PulseWidth, ir_current: LedCurrent, sample_rate: SampleRate) -> Self {
        Config { pulse_width, ir_current, sample_rate }
    }

    pub const fn with_pulse_width(mut self, pulse_width: PulseWidth) -> Self {
        self.pulse_width = pulse_width;
        self
    }

    pub const fn with_ir_current(mut self, ir_current: LedCurrent) -> Self {
        self.ir_current = ir_current;
        self
    }

    pub const fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// SPO2_CONFIG value for this configuration (high-resolution off).
    pub const fn spo2_config_bits(&self) -> u8 {
        (self.sample_rate.bits() << super::registers::SPO2_SAMPLE_RATE_SHIFT) | self.pulse_width.bits()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(PulseWidth::Us1600, LedCurrent::Ma50_0, SampleRate::Hz100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baseline() {
        let config = Config::default();
        assert_eq!(config.pulse_width, PulseWidth::Us1600);
        assert_eq!(config.ir_current, LedCurrent::Ma50_0);
        assert_eq!(config.sample_rate, SampleRate::Hz100);
        assert_eq!(config.spo2_config_bits(), 0x07);
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::default()
            .with_pulse_width(PulseWidth::Us200)
            .with_sample_rate(SampleRate::Hz1000)
            .with_ir_current(LedCurrent::Ma20_8);
        assert_eq!(config.spo2_config_bits(), 7 << 2);
        assert_eq!(config.ir_current.bits(), 0x06);
    }
}
