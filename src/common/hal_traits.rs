// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for blocking register access on a two-wire bus.
///
/// Each method is one complete bus transaction. Implementations report a
/// missing ACK (or any other transfer problem) through `Self::Error`; the
/// driver hands that error back to its caller untouched.
pub trait RegisterBus {
    /// Associated error type for transport failures.
    type Error: Debug;

    /// Writes `value` to `register` of the device at 7-bit `address`.
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Addresses `register`, then reads one byte back (repeated start).
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Addresses `register`, then reads `buffer.len()` consecutive bytes.
    ///
    /// The device advances its internal pointer between bytes.
    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    #[inline]
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_register(address, register, value)
    }

    #[inline]
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        (**self).read_register(address, register)
    }

    #[inline]
    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_registers(address, register, buffer)
    }
}

/// Adapts any blocking embedded-hal 1.0 I2C peripheral to [`RegisterBus`].
///
/// Writes go out as `[register, value]`; reads use `write_read` so the
/// register pointer is set and read back under a repeated start.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct I2cBus<I> {
    i2c: I,
}

#[cfg(feature = "impl-native")]
impl<I> I2cBus<I>
where
    I: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I) -> Self {
        I2cBus { i2c }
    }

    /// Gives the underlying peripheral back.
    pub fn release(self) -> I {
        self.i2c
    }
}

#[cfg(feature = "impl-native")]
impl<I> RegisterBus for I2cBus<I>
where
    I: embedded_hal::i2c::I2c,
{
    type Error = I::Error;

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut byte = [0u8];
        self.i2c.write_read(address, &[register], &mut byte)?;
        Ok(byte[0])
    }

    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(address, &[register], buffer)
    }
}
