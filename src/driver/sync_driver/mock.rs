// src/driver/sync_driver/mock.rs

// Test-only stand-in for the chip: a 256-byte register file, a FIFO port,
// a transaction log and per-register failure injection.

use crate::common::{hal_traits::RegisterBus, registers::Register};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write { register: u8, value: u8 },
    Read { register: u8 },
    BurstRead { register: u8, len: usize },
}

const LOG_CAPACITY: usize = 64;
const FIFO_CAPACITY: usize = 64;
// Filler for log slots past `log_len`, never exposed.
const UNUSED_SLOT: Transaction = Transaction::Read { register: 0 };

#[derive(Clone)]
pub struct MockBus {
    registers: [u8; 256],
    fifo: [u8; FIFO_CAPACITY],
    fifo_len: usize,
    fifo_pos: usize,
    log: [Transaction; LOG_CAPACITY],
    log_len: usize,
    fail_read: Option<u8>,
    fail_write: Option<u8>,
    pub address_seen: Option<u8>,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            registers: [0; 256],
            fifo: [0; FIFO_CAPACITY],
            fifo_len: 0,
            fifo_pos: 0,
            log: [UNUSED_SLOT; LOG_CAPACITY],
            log_len: 0,
            fail_read: None,
            fail_write: None,
            address_seen: None,
        }
    }

    pub fn set(&mut self, register: Register, value: u8) {
        self.registers[register.addr() as usize] = value;
    }

    pub fn get(&self, register: Register) -> u8 {
        self.registers[register.addr() as usize]
    }

    /// Queues bytes to be popped from the FIFO data port.
    pub fn stage_fifo(&mut self, data: &[u8]) {
        assert!(data.len() <= FIFO_CAPACITY);
        self.fifo[..data.len()].copy_from_slice(data);
        self.fifo_len = data.len();
        self.fifo_pos = 0;
    }

    pub fn fail_reads_of(&mut self, register: Register) {
        self.fail_read = Some(register.addr());
    }

    pub fn fail_writes_to(&mut self, register: Register) {
        self.fail_write = Some(register.addr());
    }

    pub fn log(&self) -> &[Transaction] {
        &self.log[..self.log_len]
    }

    pub fn clear_log(&mut self) {
        self.log = [UNUSED_SLOT; LOG_CAPACITY];
        self.log_len = 0;
    }

    pub fn write_count(&self) -> usize {
        self.log()
            .iter()
            .filter(|t| matches!(t, Transaction::Write { .. }))
            .count()
    }

    pub fn read_count(&self) -> usize {
        self.log_len - self.write_count()
    }

    fn record(&mut self, transaction: Transaction) {
        assert!(self.log_len < LOG_CAPACITY, "transaction log full");
        self.log[self.log_len] = transaction;
        self.log_len += 1;
    }

    fn read_byte(&mut self, register: u8) -> u8 {
        if register == Register::FifoData.addr() {
            if self.fifo_pos < self.fifo_len {
                self.fifo_pos += 1;
                return self.fifo[self.fifo_pos - 1];
            }
            return 0;
        }
        self.registers[register as usize]
    }
}

impl RegisterBus for MockBus {
    type Error = MockBusError;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.address_seen = Some(address);
        if self.fail_write == Some(register) {
            return Err(MockBusError);
        }
        self.record(Transaction::Write { register, value });
        self.registers[register as usize] = value;
        Ok(())
    }

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        self.address_seen = Some(address);
        if self.fail_read == Some(register) {
            return Err(MockBusError);
        }
        self.record(Transaction::Read { register });
        Ok(self.read_byte(register))
    }

    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.address_seen = Some(address);
        if self.fail_read == Some(register) {
            return Err(MockBusError);
        }
        self.record(Transaction::BurstRead { register, len: buffer.len() });
        let fifo = register == Register::FifoData.addr();
        for (i, byte) in buffer.iter_mut().enumerate() {
            // FIFO_DATA does not auto-increment
            let target = if fifo { register } else { register.wrapping_add(i as u8) };
            *byte = self.read_byte(target);
        }
        Ok(())
    }
}
