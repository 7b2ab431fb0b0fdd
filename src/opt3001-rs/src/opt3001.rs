use log::{debug, error, trace};

use crate::bus::RegisterBus;
use crate::types::{Register, DEFAULT_CONFIG, OPT3001_I2C_ADDRESS};

/// Decodes a RESULT register word into lux.
///
/// The upper nibble is a power-of-two range, the lower 12 bits the reading
/// within that range: `lux = 0.01 * 2^exponent * mantissa`. The exponent is
/// not range checked and the result is not clamped.
pub fn lux_from_raw(raw: u16) -> f32 {
    let exponent = (raw >> 12) & 0x0F;
    let mantissa = raw & 0x0FFF;
    0.01 * (1u32 << exponent) as f32 * mantissa as f32
}

#[derive(Debug)]
pub struct Opt3001<B> {
    bus: B,
}

impl<B: RegisterBus> Opt3001<B> {
    /// Takes the bus and puts the sensor into continuous conversion at 100 ms.
    ///
    /// No driver is returned unless that configuration write went through.
    pub async fn new(bus: B) -> Result<Self, B::Error> {
        let mut sensor = Opt3001 { bus };
        sensor.configure(DEFAULT_CONFIG).await?;
        Ok(sensor)
    }

    /// Writes `configuration` to CONFIG as is.
    pub async fn configure(&mut self, configuration: impl Into<u16>) -> Result<(), B::Error> {
        let configuration = configuration.into();
        debug!("OPT3001 CONFIG <- {:#06x}", configuration);
        self.i2c_set_reg(Register::Config, configuration).await
    }

    pub async fn read_lux(&mut self) -> Result<f32, B::Error> {
        let raw = self.read_raw().await?;
        let lux = lux_from_raw(raw);
        trace!("OPT3001 RESULT {:#06x} -> {} lux", raw, lux);
        Ok(lux)
    }

    /// Latest conversion, still in exponent/mantissa form.
    pub async fn read_raw(&mut self) -> Result<u16, B::Error> {
        self.i2c_get_reg(Register::Result).await
    }

    pub async fn read_config(&mut self) -> Result<u16, B::Error> {
        self.i2c_get_reg(Register::Config).await
    }

    pub async fn read_manufacturer_id(&mut self) -> Result<u16, B::Error> {
        self.i2c_get_reg(Register::ManufacturerId).await
    }

    pub async fn read_device_id(&mut self) -> Result<u16, B::Error> {
        self.i2c_get_reg(Register::DeviceId).await
    }

    /// Gives the bus back. The sensor keeps its current mode.
    pub fn release(self) -> B {
        self.bus
    }

    async fn i2c_get_reg(&mut self, reg: Register) -> Result<u16, B::Error> {
        match self.bus.read_word(OPT3001_I2C_ADDRESS, reg.as_byte()).await {
            Ok(word) => Ok(word),
            Err(e) => {
                error!("FAILED I2C read of {:?}: {:?}", reg, e);
                Err(e)
            }
        }
    }

    async fn i2c_set_reg(&mut self, reg: Register, word: u16) -> Result<(), B::Error> {
        match self.bus.write_word(OPT3001_I2C_ADDRESS, reg.as_byte(), word).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("FAILED I2C write of {:?}: {:?}", reg, e);
                Err(e)
            }
        }
    }
}
