// src/driver/sync_driver/bus_helpers.rs

use super::SyncMax30100;
use crate::common::{
    error::Max30100Error,
    hal_traits::RegisterBus,
    registers::{Register, DEVICE_ADDRESS},
};
use log::trace;

// Implementation block for register-level bus helpers
impl<B> SyncMax30100<B>
where
    B: RegisterBus,
{
    /// Reads one register.
    pub(super) fn read_register(&mut self, register: Register) -> Result<u8, Max30100Error<B::Error>> {
        let value = self
            .bus
            .read_register(DEVICE_ADDRESS, register.addr())
            .map_err(Max30100Error::Bus)?;
        trace!("read {} -> {:#010b}", register, value);
        Ok(value)
    }

    /// Overwrites one register, no prior read.
    pub(super) fn write_register(&mut self, register: Register, value: u8) -> Result<(), Max30100Error<B::Error>> {
        trace!("write {} <- {:#010b}", register, value);
        self.bus
            .write_register(DEVICE_ADDRESS, register.addr(), value)
            .map_err(Max30100Error::Bus)
    }

    /// Burst read starting at `register`.
    pub(super) fn read_burst(
        &mut self,
        register: Register,
        buffer: &mut [u8],
    ) -> Result<(), Max30100Error<B::Error>> {
        self.bus
            .read_registers(DEVICE_ADDRESS, register.addr(), buffer)
            .map_err(Max30100Error::Bus)?;
        trace!("burst read {} x{}", register, buffer.len());
        Ok(())
    }

    /// Read-modify-write: reads `register`, passes it through `transform`,
    /// writes the result back. Not atomic against other bus masters.
    ///
    /// Returns the value written.
    pub(super) fn modify_register<F>(&mut self, register: Register, transform: F) -> Result<u8, Max30100Error<B::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let current = self.read_register(register)?;
        let updated = transform(current);
        self.write_register(register, updated)?;
        Ok(updated)
    }

    /// Replaces the bits under `mask` with `bits`, keeping the rest.
    pub(super) fn update_field(&mut self, register: Register, mask: u8, bits: u8) -> Result<u8, Max30100Error<B::Error>> {
        self.modify_register(register, |reg| (reg & !mask) | (bits & mask))
    }
}
