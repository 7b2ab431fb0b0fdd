#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::{
    clock::ClockControl, gpio::Io, i2c::I2C, peripherals::Peripherals, prelude::*,
    system::SystemControl, timer::timg::TimerGroup,
};
use log::{error, info, warn};
use opt3001_rs::{I2cRegisterBus, Opt3001, DEVICE_ID_OPT3001, MANUFACTURER_ID_TI};

const I2C_FREQUENCY_KHZ: u32 = 400;
// One conversion at the default 100 ms integration time, plus margin.
const POLL_PERIOD_MS: u64 = 1_000;

#[main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = Peripherals::take();
    let system = SystemControl::new(peripherals.SYSTEM);
    let clocks = ClockControl::boot_defaults(system.clock_control).freeze();

    let timer_group0 = TimerGroup::new_async(peripherals.TIMG0, &clocks);
    esp_hal_embassy::init(&clocks, timer_group0);

    esp_println::logger::init_logger(log::LevelFilter::Info);

    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    let i2c0 = I2C::new_async(
        peripherals.I2C0,
        io.pins.gpio4,
        io.pins.gpio5,
        I2C_FREQUENCY_KHZ.kHz(),
        &clocks,
    );

    let mut opt3001_sensor = match Opt3001::new(I2cRegisterBus::new(i2c0)).await {
        Ok(sensor) => sensor,
        Err(e) => {
            panic!("Failed to configure OPT3001: {:?}", e);
        }
    };

    match opt3001_sensor.read_manufacturer_id().await {
        Ok(MANUFACTURER_ID_TI) => {}
        Ok(id) => warn!("Unexpected manufacturer id: {:#06x}", id),
        Err(e) => error!("Failed to read manufacturer id: {:?}", e),
    }
    match opt3001_sensor.read_device_id().await {
        Ok(DEVICE_ID_OPT3001) => info!("OPT3001 found"),
        Ok(id) => warn!("Unexpected device id: {:#06x}", id),
        Err(e) => error!("Failed to read device id: {:?}", e),
    }

    loop {
        match opt3001_sensor.read_lux().await {
            Ok(lux) => info!("OPT3001 ambient light: {:.2} lux", lux),
            Err(e) => error!("Failed to read lux: {:?}", e),
        }
        Timer::after(Duration::from_millis(POLL_PERIOD_MS)).await;
    }
}
