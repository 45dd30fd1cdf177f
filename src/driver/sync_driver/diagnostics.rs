// src/driver/sync_driver/diagnostics.rs

use super::SyncMax30100;
use crate::common::{
    error::Max30100Error,
    hal_traits::RegisterBus,
    registers::{Register, EXPECTED_PART_ID},
};
use core::fmt;
use log::{debug, warn};

/// Contents of every mapped register, in [`Register::ALL`] order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RegisterDump {
    values: [u8; Register::ALL.len()],
}

impl RegisterDump {
    pub fn get(&self, register: Register) -> u8 {
        // ALL is exhaustive, so the lookup cannot miss
        let index = Register::ALL.iter().position(|r| *r == register).unwrap_or(0);
        self.values[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Register, u8)> + '_ {
        Register::ALL.iter().copied().zip(self.values.iter().copied())
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (register, value) in self.iter() {
            writeln!(f, "{}: {:#010b}", register, value)?;
        }
        Ok(())
    }
}

impl<B> SyncMax30100<B>
where
    B: RegisterBus,
{
    /// Reads every mapped register, one transaction each.
    ///
    /// Reading FIFO_DATA pops a byte from the FIFO and INT_STATUS clears
    /// pending interrupts, exactly as any other read of those registers would.
    pub fn snapshot_registers(&mut self) -> Result<RegisterDump, Max30100Error<B::Error>> {
        let mut values = [0u8; Register::ALL.len()];
        for (slot, register) in values.iter_mut().zip(Register::ALL.iter()) {
            *slot = self.read_register(*register)?;
        }
        Ok(RegisterDump { values })
    }

    /// Writes a human-readable binary dump of every register to `out`, one
    /// line per register.
    pub fn dump_registers<W>(&mut self, out: &mut W) -> Result<(), Max30100Error<B::Error>>
    where
        W: fmt::Write,
    {
        let dump = self.snapshot_registers()?;
        write!(out, "{}", dump)?;
        Ok(())
    }

    /// Checks that a MAX30100 answers at the bus address.
    ///
    /// Returns the revision ID on success.
    pub fn probe(&mut self) -> Result<u8, Max30100Error<B::Error>> {
        let part_id = self.part_id()?;
        if part_id != EXPECTED_PART_ID {
            warn!("unexpected part id {:#04x}, expected {:#04x}", part_id, EXPECTED_PART_ID);
            return Err(Max30100Error::UnexpectedPartId(part_id));
        }
        let revision = self.revision_id()?;
        debug!("MAX30100 found, revision {:#04x}", revision);
        Ok(revision)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::super::mock::{MockBus, MockBusError, Transaction};
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    fn populated_bus() -> MockBus {
        let mut bus = MockBus::new();
        bus.set(Register::ModeConfig, 0x02);
        bus.set(Register::Spo2Config, 0x07);
        bus.set(Register::LedConfig, 0x0E);
        bus.set(Register::PartId, 0x11);
        bus.set(Register::RevisionId, 0x05);
        bus
    }

    #[test]
    fn test_snapshot_reads_all_registers_in_order() {
        let mut driver = SyncMax30100::new(populated_bus());
        let dump = driver.snapshot_registers().unwrap();

        let log = driver.bus.log();
        assert_eq!(log.len(), 13);
        for (entry, register) in log.iter().zip(Register::ALL.iter()) {
            assert_eq!(*entry, Transaction::Read { register: register.addr() });
        }
        assert_eq!(driver.bus.write_count(), 0);

        assert_eq!(dump.get(Register::ModeConfig), 0x02);
        assert_eq!(dump.get(Register::LedConfig), 0x0E);
        assert_eq!(dump.get(Register::PartId), 0x11);
        assert_eq!(dump.iter().count(), 13);
    }

    #[test]
    fn test_dump_registers_formats_binary_lines() {
        let mut driver = SyncMax30100::new(populated_bus());
        let mut out: String<1024> = String::new();
        driver.dump_registers(&mut out).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("INT_STATUS (0x00): 0b00000000"));
        assert!(out.contains("MODE_CONFIG (0x06): 0b00000010\n"));
        assert!(out.contains("SPO2_CONFIG (0x07): 0b00000111\n"));
        assert!(out.contains("LED_CONFIG (0x09): 0b00001110\n"));
        assert!(out.ends_with("PART_ID (0xff): 0b00010001\n"));
        assert_eq!(out.lines().count(), 13);
    }

    #[test]
    fn test_dump_registers_sink_overflow() {
        let mut driver = SyncMax30100::new(populated_bus());
        let mut out: String<16> = String::new();
        let result = driver.dump_registers(&mut out);
        assert!(matches!(result, Err(Max30100Error::Format)));
    }

    #[test]
    fn test_dump_registers_bus_failure_writes_nothing() {
        let mut bus = populated_bus();
        bus.fail_reads_of(Register::LedConfig);
        let mut driver = SyncMax30100::new(bus);
        let mut out: String<1024> = String::new();

        let result = driver.dump_registers(&mut out);
        assert!(matches!(result, Err(Max30100Error::Bus(MockBusError))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_display_matches_dump() {
        let mut driver = SyncMax30100::new(populated_bus());
        let dump = driver.snapshot_registers().unwrap();
        let mut via_display: String<1024> = String::new();
        write!(via_display, "{}", dump).unwrap();

        let mut driver = SyncMax30100::new(populated_bus());
        let mut via_dump: String<1024> = String::new();
        driver.dump_registers(&mut via_dump).unwrap();
        assert_eq!(via_display, via_dump);
    }

    #[test]
    fn test_probe() {
        let mut driver = SyncMax30100::new(populated_bus());
        assert_eq!(driver.probe().unwrap(), 0x05);

        let mut bus = populated_bus();
        bus.set(Register::PartId, 0x15);
        let mut driver = SyncMax30100::new(bus);
        assert!(matches!(driver.probe(), Err(Max30100Error::UnexpectedPartId(0x15))));
    }
}
