/// Fixed 7-bit bus address of the OPT3001 (ADDR pin tied to GND).
pub const OPT3001_I2C_ADDRESS: u8 = 0x44;

/// Operating mode: no conversions.
pub const MODE_SHUTDOWN: u16 = 0x0000;
/// Operating mode: one conversion, then back to shutdown.
pub const MODE_SINGLE_SHOT: u16 = 0x2000;
/// Operating mode: convert continuously.
pub const MODE_CONTINUOUS: u16 = 0x4000;

/// 100 ms integration time.
pub const INT_TIME_100MS: u16 = 0x0000;
/// 800 ms integration time.
pub const INT_TIME_800MS: u16 = 0x0800;

/// Written to CONFIG whenever a driver is created.
pub const DEFAULT_CONFIG: u16 = MODE_CONTINUOUS | INT_TIME_100MS;

/// "TI" in ASCII.
pub const MANUFACTURER_ID_TI: u16 = 0x5449;
pub const DEVICE_ID_OPT3001: u16 = 0x3001;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// OPT3001 register map.
pub enum Register {
    Result,
    Config,
    LowLimit,
    HighLimit,
    ManufacturerId,
    DeviceId,
}

impl Register {
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Result => 0x00,
            Self::Config => 0x01,
            Self::LowLimit => 0x02,
            Self::HighLimit => 0x03,
            Self::ManufacturerId => 0x7E,
            Self::DeviceId => 0x7F,
        }
    }
}

/// Conversion mode selected in CONFIG.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Low power state, no measurements.
    Shutdown,
    /// A single measurement, then shutdown.
    SingleShot,
    /// Measurements are taken back to back.
    Continuous,
}

/// Integration time of a single conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConversionTime {
    Ms100,
    Ms800,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Configuration word builder.
///
/// The bits are not checked against each other; whatever is built here is
/// written to CONFIG as is.
pub struct Config {
    mode: Mode,
    conversion_time: ConversionTime,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Continuous,
            conversion_time: ConversionTime::Ms100,
        }
    }
}

impl Config {
    pub fn mode(&self, mode: Mode) -> Self {
        let mut conf = *self;
        conf.mode = mode;
        conf
    }

    pub fn conversion_time(&self, conversion_time: ConversionTime) -> Self {
        let mut conf = *self;
        conf.conversion_time = conversion_time;
        conf
    }

    pub fn bits(&self) -> u16 {
        let mode = match self.mode {
            Mode::Shutdown => MODE_SHUTDOWN,
            Mode::SingleShot => MODE_SINGLE_SHOT,
            Mode::Continuous => MODE_CONTINUOUS,
        };
        let conversion_time = match self.conversion_time {
            ConversionTime::Ms100 => INT_TIME_100MS,
            ConversionTime::Ms800 => INT_TIME_800MS,
        };
        mode | conversion_time
    }
}

impl From<Config> for u16 {
    fn from(conf: Config) -> Self {
        conf.bits()
    }
}
