use core::fmt::Debug;

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_async::i2c::I2c;

/// Register level access to a device on a two-wire bus.
///
/// Every call is one bus transaction. Errors are whatever the transport
/// reports; the driver hands them back untouched.
#[allow(async_fn_in_trait)]
pub trait RegisterBus {
    type Error: Debug;

    async fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    async fn write_byte(&mut self, address: u8, register: u8, byte: u8)
        -> Result<(), Self::Error>;

    async fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    async fn write_word(&mut self, address: u8, register: u8, word: u16)
        -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    async fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        (**self).read_byte(address, register).await
    }

    async fn write_byte(
        &mut self,
        address: u8,
        register: u8,
        byte: u8,
    ) -> Result<(), Self::Error> {
        (**self).write_byte(address, register, byte).await
    }

    async fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        (**self).read_word(address, register).await
    }

    async fn write_word(
        &mut self,
        address: u8,
        register: u8,
        word: u16,
    ) -> Result<(), Self::Error> {
        (**self).write_word(address, register, word).await
    }
}

/// [`RegisterBus`] over an async `embedded-hal` I2C bus.
///
/// The register pointer is sent first, words travel MSB first.
#[derive(Debug)]
pub struct I2cRegisterBus<I> {
    i2c: I,
}

impl<I> I2cRegisterBus<I> {
    pub fn new(i2c: I) -> Self {
        I2cRegisterBus { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I> RegisterBus for I2cRegisterBus<I>
where
    I: I2c<SevenBitAddress>,
{
    type Error = I::Error;

    async fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut data = [0u8; 1];
        self.i2c.write_read(address, &[register], &mut data).await?;
        Ok(data[0])
    }

    async fn write_byte(
        &mut self,
        address: u8,
        register: u8,
        byte: u8,
    ) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, byte]).await
    }

    async fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut data = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut data).await?;
        Ok(u16::from_be_bytes(data))
    }

    async fn write_word(
        &mut self,
        address: u8,
        register: u8,
        word: u16,
    ) -> Result<(), Self::Error> {
        let [msb, lsb] = word.to_be_bytes();
        self.i2c.write(address, &[register, msb, lsb]).await
    }
}
